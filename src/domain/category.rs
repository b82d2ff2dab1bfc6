//! Entry categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of thing an entry logs.
///
/// Stored as a plain lowercase string. Values outside the known set are kept
/// verbatim in `Other` so records written by other tools survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Movie,
    Tv,
    Book,
    Other(String),
}

impl Category {
    /// Stored form of the category
    pub fn as_str(&self) -> &str {
        match self {
            Category::Movie => "movie",
            Category::Tv => "tv",
            Category::Book => "book",
            Category::Other(raw) => raw,
        }
    }

    /// Human label used when rendering an entry
    pub fn label(&self) -> &'static str {
        match self {
            Category::Movie => "Movie",
            Category::Tv => "TV Show",
            Category::Book => "Book",
            Category::Other(_) => "Entry",
        }
    }

    pub fn is_book(&self) -> bool {
        matches!(self, Category::Book)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "movie" => Category::Movie,
            "tv" => Category::Tv,
            "book" => Category::Book,
            _ => Category::Other(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Strict parse for user input; only the known categories are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Category::Movie),
            "tv" => Ok(Category::Tv),
            "book" => Ok(Category::Book),
            _ => Err(s.to_string()),
        }
    }
}
