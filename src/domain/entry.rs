//! Logged entries and the draft they are created from

use crate::domain::Category;
use crate::error::{Result, StacksError};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Year bucket for entries without a finish date
pub const UNKNOWN_YEAR: &str = "Unknown";

/// A single logged movie, show or book.
///
/// Field names serialize in camelCase so logs written by the browser version
/// of the app load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(default = "blank_category", deserialize_with = "category_or_blank")]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_finished: Option<String>,
    // Non-finite numbers are written as null by JSON encoders
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thoughts: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pinned: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_category() -> Category {
    Category::Other(String::new())
}

/// A missing or null category is kept as an unrecognized (blank) one rather
/// than silently becoming a movie.
fn category_or_blank<'de, D>(deserializer: D) -> std::result::Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(Category::from)
        .unwrap_or_else(blank_category))
}

impl Entry {
    /// First four characters of the finish date, or `Unknown`.
    pub fn finished_year(&self) -> String {
        match self.date_finished.as_deref() {
            Some(date) if !date.is_empty() => date.chars().take(4).collect(),
            _ => UNKNOWN_YEAR.to_string(),
        }
    }

    /// Lowercased text the free-text search runs against
    pub fn search_haystack(&self) -> String {
        [
            self.title.as_str(),
            self.creator.as_str(),
            self.thoughts.as_str(),
            self.highlights.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// User-submitted fields for a new entry, before validation.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub category: Category,
    pub title: String,
    pub creator: String,
    pub date_finished: Option<String>,
    pub rating: f64,
    pub format: String,
    pub thoughts: String,
    pub highlights: String,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        EntryDraft {
            title: title.into(),
            category,
            ..Default::default()
        }
    }

    /// Validate the draft and stamp it with an id and creation time.
    ///
    /// A blank title (after trimming) or a non-finite rating is rejected and
    /// nothing is created.
    pub fn into_entry(self, id: String, created_at: String) -> Result<Entry> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(StacksError::EmptyTitle);
        }

        if !self.rating.is_finite() {
            return Err(StacksError::InvalidRating(self.rating.to_string()));
        }

        let date_finished = match self.date_finished.map(|d| d.trim().to_string()) {
            Some(date) if date.is_empty() => None,
            Some(date) => {
                NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                    .map_err(|_| StacksError::InvalidDate(date.clone()))?;
                Some(date)
            }
            None => None,
        };

        Ok(Entry {
            id,
            category: self.category,
            title,
            creator: self.creator.trim().to_string(),
            date_finished,
            rating: self.rating,
            format: self.format,
            thoughts: self.thoughts.trim().to_string(),
            highlights: self.highlights.trim().to_string(),
            pinned: false,
            created_at,
        })
    }
}
