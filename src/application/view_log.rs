//! List view use case

use crate::domain::view::select_year;
use crate::domain::{Entry, LogStats, ViewFilters, YearFilter};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};

/// Everything the list screen needs for one render
#[derive(Debug, Clone)]
pub struct LogView {
    /// Filtered entries in display order
    pub entries: Vec<Entry>,
    /// Year options over the whole log
    pub years: Vec<String>,
    /// Year selection to offer next: the requested one if still present,
    /// otherwise `all`
    pub selected_year: YearFilter,
    /// Global counts, independent of the filters
    pub stats: LogStats,
}

impl LogView {
    /// True when the requested year was dropped from the selector
    pub fn year_was_reset(&self, requested: &YearFilter) -> bool {
        &self.selected_year != requested
    }
}

/// Service for rendering the filtered entry list
pub struct ViewLogService<S: KeyValueStore> {
    store: EntryStore<S>,
}

impl<S: KeyValueStore> ViewLogService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        ViewLogService { store }
    }

    pub fn execute(&self, filters: &ViewFilters) -> Result<LogView> {
        let state = self.store.load()?;
        let years = state.years();
        let selected_year = select_year(&filters.year, &years);

        Ok(LogView {
            entries: state.view(filters).into_iter().cloned().collect(),
            selected_year,
            years,
            stats: state.stats(),
        })
    }

    pub fn years(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.years())
    }

    pub fn stats(&self) -> Result<LogStats> {
        Ok(self.store.load()?.stats())
    }
}
