//! Output formatting utilities

use crate::domain::{Entry, LogStats, YearFilter};
use chrono::NaiveDate;

/// Shown when the filters leave nothing to display
pub const EMPTY_STATE: &str = "No entries match those filters yet.";

const NO_THOUGHTS: &str = "No notes yet — add them when inspiration hits.";
const PLACEHOLDER: &str = "—";

/// `4.5 ★`, or a dash when unrated
pub fn format_rating(rating: f64) -> String {
    if rating == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        format!("{} ★", rating)
    }
}

/// `May 1, 2023`, or `Date unknown` when missing or unparseable
pub fn format_date(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Date unknown".to_string())
}

/// Render a single entry card
pub fn format_entry(entry: &Entry) -> String {
    let mut output = String::new();

    let pin = if entry.pinned { "* " } else { "" };
    output.push_str(&format!(
        "{}[{}] {}  ({})\n",
        pin,
        entry.category.label(),
        entry.title,
        entry.id
    ));
    output.push_str(&format!(
        "    {}  ·  {}\n",
        format_rating(entry.rating),
        format_date(entry.date_finished.as_deref())
    ));

    if !entry.creator.is_empty() {
        output.push_str(&format!("    Creator: {}\n", entry.creator));
    }
    let format = if entry.format.is_empty() {
        PLACEHOLDER
    } else {
        entry.format.as_str()
    };
    output.push_str(&format!("    Format: {}\n", format));

    let thoughts = if entry.thoughts.is_empty() {
        NO_THOUGHTS
    } else {
        entry.thoughts.as_str()
    };
    output.push_str(&format!("    {}\n", thoughts));

    if !entry.highlights.is_empty() {
        output.push_str(&format!("    “{}”\n", entry.highlights));
    }

    output
}

/// Render the filtered list
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return EMPTY_STATE.to_string();
    }

    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Year options with the current selection in brackets
pub fn format_year_options(years: &[String], selected: &YearFilter) -> String {
    let mark = |value: &str, is_selected: bool| {
        if is_selected {
            format!("[{}]", value)
        } else {
            value.to_string()
        }
    };

    let mut options = vec![mark("all", *selected == YearFilter::All)];
    for year in years {
        let is_selected = matches!(selected, YearFilter::Only(y) if y == year);
        options.push(mark(year, is_selected));
    }

    format!("Years: {}", options.join(" "))
}

/// Plain year list, one per line
pub fn format_years(years: &[String]) -> String {
    if years.is_empty() {
        return "No years yet".to_string();
    }

    let mut output = String::new();
    for year in years {
        output.push_str(&format!("{}\n", year));
    }
    output
}

pub fn format_stats(stats: &LogStats) -> String {
    format!(
        "Total: {}  Screen: {}  Books: {}",
        stats.total, stats.screen_count, stats.book_count
    )
}
