use crate::analytics::{self, Report};
use crate::data::filter::Selections;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The derived [`Report`] is a pure function of `(dataset, selections)`;
/// it is cached here and rebuilt from scratch whenever a selection changes.
pub struct AppState {
    /// Loaded dataset (None until a file is opened).
    pub dataset: Option<Dataset>,

    /// Explicit per-column selections. Empty sets select nothing.
    pub selections: Selections,

    /// Derived metrics, chart tables and subset indices (cached).
    pub report: Report,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selections: Selections::default(),
            report: Report::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset. Selections reset to empty, so the
    /// dashboard starts blank until the user picks filter values.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selections = Selections::default();
        self.report = analytics::report(&dataset, &self.selections);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the report after any selection change.
    pub fn rebuild_report(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.report = analytics::report(dataset, &self.selections);
        }
    }

    /// Select every value of every column (subset == dataset).
    pub fn select_all(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.selections = Selections::select_all(dataset);
        }
        self.rebuild_report();
    }

    /// Clear every selection (subset becomes empty).
    pub fn select_none(&mut self) {
        self.selections = Selections::default();
        self.rebuild_report();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![Record {
            year: 2024,
            seniority: "Senior".to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            title: "Data Scientist".to_string(),
            remote: "Remote".to_string(),
            country_iso3: "USA".to_string(),
            usd: 100_000.0,
        }])
    }

    #[test]
    fn new_dataset_starts_with_empty_selections() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.selections, Selections::default());
        assert!(state.report.is_empty());
    }

    #[test]
    fn select_all_then_none_round_trip() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.select_all();
        assert_eq!(state.report.indices, vec![0]);
        assert_eq!(state.report.summary.count, 1);

        state.select_none();
        assert!(state.report.is_empty());
        assert_eq!(state.report.summary.top_title, " ");
    }
}
