use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Summary metrics (the four KPI tiles)
// ---------------------------------------------------------------------------

/// The four headline numbers over the filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Mean annual salary in USD, rounded to 2 decimals.
    pub mean_usd: f64,
    /// Maximum annual salary in USD.
    pub max_usd: f64,
    /// Number of records in the subset.
    pub count: usize,
    /// Most frequent job title; a single space when the subset is empty.
    pub top_title: String,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            mean_usd: 0.0,
            max_usd: 0.0,
            count: 0,
            top_title: " ".to_string(),
        }
    }
}

/// Round to 2 decimal places, matching the source dashboard's display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the summary over the filtered subset. An empty subset yields the
/// documented defaults (0, 0, 0, " ") rather than an error.
pub fn summarize(subset: &[&Record]) -> Summary {
    if subset.is_empty() {
        return Summary::default();
    }

    let count = subset.len();
    let total: f64 = subset.iter().map(|r| r.usd).sum();
    let max_usd = subset
        .iter()
        .map(|r| r.usd)
        .fold(f64::NEG_INFINITY, f64::max);

    Summary {
        mean_usd: round2(total / count as f64),
        max_usd,
        count,
        top_title: mode_title(subset),
    }
}

/// Most frequent job title, ties broken by first appearance in the subset.
fn mode_title(subset: &[&Record]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &rec in subset {
        match counts.iter_mut().find(|(title, _)| *title == rec.title) {
            Some((_, n)) => *n += 1,
            None => counts.push((&rec.title, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(title, n) in &counts {
        // Strictly greater keeps the first-encountered title on ties.
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((title, n));
        }
    }
    best.map(|(title, _)| title.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, usd: f64) -> Record {
        Record {
            year: 2024,
            seniority: "Senior".to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            title: title.to_string(),
            remote: "Remote".to_string(),
            country_iso3: "USA".to_string(),
            usd,
        }
    }

    #[test]
    fn empty_subset_yields_documented_defaults() {
        let summary = summarize(&[]);
        assert_eq!(summary.mean_usd, 0.0);
        assert_eq!(summary.max_usd, 0.0);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.top_title, " ");
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        let a = record("Analyst", 100_000.0);
        let b = record("Analyst", 100_001.0);
        let c = record("Analyst", 100_001.0);
        let summary = summarize(&[&a, &b, &c]);
        // 300002 / 3 = 100000.666…
        assert_eq!(summary.mean_usd, 100_000.67);
        assert_eq!(summary.max_usd, 100_001.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn mode_prefers_most_frequent_title() {
        let a = record("Analyst", 1.0);
        let b = record("Data Scientist", 1.0);
        let c = record("Data Scientist", 1.0);
        let summary = summarize(&[&a, &b, &c]);
        assert_eq!(summary.top_title, "Data Scientist");
    }

    #[test]
    fn mode_tie_keeps_first_encountered_title() {
        let a = record("Data Scientist", 1.0);
        let b = record("Analyst", 1.0);
        let c = record("Analyst", 1.0);
        let d = record("Data Scientist", 1.0);
        let summary = summarize(&[&a, &b, &c, &d]);
        assert_eq!(summary.top_title, "Data Scientist");
    }
}
