use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one employment observation (a row of the source table)
// ---------------------------------------------------------------------------

/// A single salary observation.
///
/// The upstream dataset is published with Portuguese headers; serde aliases
/// accept those alongside the English field names, for both CSV and JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(alias = "ano")]
    pub year: i32,
    #[serde(alias = "senioridade")]
    pub seniority: String,
    #[serde(alias = "contrato")]
    pub contract: String,
    #[serde(alias = "tamanho_empresa")]
    pub company_size: String,
    #[serde(alias = "cargo")]
    pub title: String,
    #[serde(alias = "remoto")]
    pub remote: String,
    #[serde(alias = "residencia_iso3")]
    pub country_iso3: String,
    /// Annual compensation in USD.
    pub usd: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset plus the sorted distinct values of each
/// filterable column, pre-computed once at load time to populate the
/// sidebar multi-selects.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in source order.
    pub records: Vec<Record>,
    pub years: Vec<i32>,
    pub seniorities: Vec<String>,
    pub contracts: Vec<String>,
    pub company_sizes: Vec<String>,
}

impl Dataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut seniorities = BTreeSet::new();
        let mut contracts = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            seniorities.insert(rec.seniority.clone());
            contracts.insert(rec.contract.clone());
            company_sizes.insert(rec.company_size.clone());
        }

        Dataset {
            records,
            years: years.into_iter().collect(),
            seniorities: seniorities.into_iter().collect(),
            contracts: contracts.into_iter().collect(),
            company_sizes: company_sizes.into_iter().collect(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, seniority: &str, title: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            title: title.to_string(),
            remote: "Remote".to_string(),
            country_iso3: "USA".to_string(),
            usd,
        }
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let ds = Dataset::from_records(vec![
            record(2024, "Senior", "Data Scientist", 100_000.0),
            record(2022, "Junior", "Analyst", 50_000.0),
            record(2024, "Senior", "Analyst", 80_000.0),
        ]);

        assert_eq!(ds.years, vec![2022, 2024]);
        assert_eq!(ds.seniorities, vec!["Junior", "Senior"]);
        assert_eq!(ds.contracts, vec!["CLT"]);
        assert_eq!(ds.company_sizes, vec!["M"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_no_distinct_values() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.years.is_empty());
        assert!(ds.seniorities.is_empty());
    }
}
