/// Analytics layer: the pure filter → metrics → charts pipeline.
///
/// Everything here is a total function of `(Dataset, Selections)`; the UI
/// rebuilds the whole [`Report`] from scratch on every selection change and
/// never mutates it. At this data scale a full recompute is cheaper than any
/// incremental scheme would be to maintain.
pub mod charts;
pub mod metrics;

use crate::data::filter::{Selections, filtered_indices};
use crate::data::model::{Dataset, Record};

/// Everything the dashboard renders for one `(dataset, selections)` pair.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Indices of the filtered subset, in dataset order.
    pub indices: Vec<usize>,
    pub summary: metrics::Summary,
    pub top_titles: Vec<charts::TitleMean>,
    pub histogram: Option<charts::Histogram>,
    pub remote_shares: Vec<charts::RemoteShare>,
    pub country_means: Vec<charts::CountryMean>,
}

impl Report {
    /// Whether the filtered subset is empty (charts show warnings instead).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Run the whole pipeline: filter, then derive every metric and chart table.
pub fn report(dataset: &Dataset, selections: &Selections) -> Report {
    let indices = filtered_indices(dataset, selections);
    let subset: Vec<&Record> = indices.iter().map(|&i| &dataset.records[i]).collect();

    Report {
        summary: metrics::summarize(&subset),
        top_titles: charts::top_titles_by_mean(&subset, 10),
        histogram: charts::histogram(&subset, 30),
        remote_shares: charts::remote_shares(&subset),
        country_means: charts::country_means(&subset),
        indices,
    }
}
