//! Filtered, sorted views over the entry collection
//!
//! Everything here is a pure function of the collection and the filter
//! values. Year options and statistics are always computed over the full
//! collection, never over the filtered subset.

use crate::domain::{Category, Entry};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

/// Category selector value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category.as_str() == category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

/// Year selector value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Only(String),
}

impl YearFilter {
    pub fn matches(&self, finished_year: &str) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Only(year) => year == finished_year,
        }
    }
}

impl FromStr for YearFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(YearFilter::All)
        } else {
            Ok(YearFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL),
            YearFilter::Only(year) => f.write_str(year),
        }
    }
}

/// The three filter controls of the list view
#[derive(Debug, Clone, Default)]
pub struct ViewFilters {
    pub category: CategoryFilter,
    pub year: YearFilter,
    pub search: String,
}

impl ViewFilters {
    /// True when the entry passes category, year and search filters.
    pub fn matches(&self, entry: &Entry) -> bool {
        if !self.category.matches(entry) {
            return false;
        }

        if !self.year.matches(&entry.finished_year()) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || entry.search_haystack().contains(&needle)
    }
}

/// Aggregate counts shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogStats {
    pub total: usize,
    pub screen_count: usize,
    pub book_count: usize,
}

/// Apply the filters and return matching entries in display order.
pub fn filter_and_sort<'a>(entries: &'a [Entry], filters: &ViewFilters) -> Vec<&'a Entry> {
    let filtered = entries.iter().filter(|e| filters.matches(e)).collect();
    sort_for_display(filtered)
}

/// Pinned first, then most recently created. The sort is stable, so entries
/// with identical keys keep their relative order.
pub fn sort_for_display(mut entries: Vec<&Entry>) -> Vec<&Entry> {
    entries.sort_by(|a, b| display_order(a, b));
    entries
}

fn display_order(a: &Entry, b: &Entry) -> Ordering {
    // createdAt is fixed-width ISO-8601, so string order is chronological
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Every finished year present in the collection, descending by string order.
pub fn available_years(entries: &[Entry]) -> Vec<String> {
    let years: BTreeSet<String> = entries.iter().map(Entry::finished_year).collect();
    years.into_iter().rev().collect()
}

/// Keep the previously selected year when it is still offered.
pub fn select_year(previous: &YearFilter, years: &[String]) -> YearFilter {
    match previous {
        YearFilter::Only(year) if years.contains(year) => previous.clone(),
        _ => YearFilter::All,
    }
}

/// Global counts; anything that is not a book counts as screen.
pub fn compute_stats(entries: &[Entry]) -> LogStats {
    let book_count = entries.iter().filter(|e| e.category.is_book()).count();
    LogStats {
        total: entries.len(),
        screen_count: entries.len() - book_count,
        book_count,
    }
}
