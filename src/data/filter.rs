use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Selections: which values are chosen per filterable column
// ---------------------------------------------------------------------------

/// Per-column selection state for the four filterable columns.
///
/// Defaults to all-empty, and an empty set selects NOTHING: a record passes
/// a column only when its value is a member of that column's set. Clearing
/// a filter therefore empties the whole view rather than disabling the
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub years: BTreeSet<i32>,
    pub seniorities: BTreeSet<String>,
    pub contracts: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl Selections {
    /// Every distinct value of every column selected, so the filtered
    /// subset equals the full dataset.
    pub fn select_all(dataset: &Dataset) -> Self {
        Selections {
            years: dataset.years.iter().copied().collect(),
            seniorities: dataset.seniorities.iter().cloned().collect(),
            contracts: dataset.contracts.iter().cloned().collect(),
            company_sizes: dataset.company_sizes.iter().cloned().collect(),
        }
    }
}

/// Return indices of records passing all four selections, in dataset order.
///
/// Pure conjunction: a record is kept only when its year, seniority,
/// contract type and company size are each members of the corresponding
/// selection set. An empty result is valid and every consumer handles it.
pub fn filtered_indices(dataset: &Dataset, selections: &Selections) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selections.years.contains(&rec.year)
                && selections.seniorities.contains(&rec.seniority)
                && selections.contracts.contains(&rec.contract)
                && selections.company_sizes.contains(&rec.company_size)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(year: i32, seniority: &str, contract: &str, size: &str, title: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            company_size: size.to_string(),
            title: title.to_string(),
            remote: "Remote".to_string(),
            country_iso3: "USA".to_string(),
            usd,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record(2023, "Senior", "CLT", "M", "Data Scientist", 100_000.0),
            record(2023, "Junior", "CLT", "M", "Analyst", 50_000.0),
            record(2024, "Senior", "PJ", "L", "Data Engineer", 120_000.0),
        ])
    }

    #[test]
    fn default_selections_yield_empty_subset() {
        let ds = sample_dataset();
        assert!(filtered_indices(&ds, &Selections::default()).is_empty());
    }

    #[test]
    fn full_selections_yield_whole_dataset() {
        let ds = sample_dataset();
        let indices = filtered_indices(&ds, &Selections::select_all(&ds));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn one_empty_set_empties_the_subset() {
        let ds = sample_dataset();
        let mut sel = Selections::select_all(&ds);
        sel.contracts.clear();
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn conjunction_of_all_four_columns() {
        let ds = sample_dataset();
        let mut sel = Selections::select_all(&ds);
        sel.seniorities = ["Senior".to_string()].into();
        let indices = filtered_indices(&ds, &sel);
        assert_eq!(indices, vec![0, 2]);
        for &i in &indices {
            assert_eq!(ds.records[i].seniority, "Senior");
        }
    }

    #[test]
    fn spec_example_single_senior_record() {
        let ds = Dataset::from_records(vec![
            record(2023, "Senior", "CLT", "M", "Data Scientist", 100_000.0),
            record(2023, "Junior", "CLT", "M", "Analyst", 50_000.0),
        ]);
        let sel = Selections {
            years: [2023].into(),
            seniorities: ["Senior".to_string()].into(),
            contracts: ["CLT".to_string()].into(),
            company_sizes: ["M".to_string()].into(),
        };
        let indices = filtered_indices(&ds, &sel);
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn value_absent_from_dataset_matches_nothing() {
        let ds = sample_dataset();
        let mut sel = Selections::select_all(&ds);
        sel.seniorities = ["Mid".to_string()].into();
        assert!(filtered_indices(&ds, &sel).is_empty());
    }
}
