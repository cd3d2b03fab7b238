use crate::data::model::Record;

use super::metrics::round2;

// ---------------------------------------------------------------------------
// Chart-ready aggregates
// ---------------------------------------------------------------------------

/// Mean salary for one job title (horizontal bar chart).
#[derive(Debug, Clone, PartialEq)]
pub struct TitleMean {
    pub title: String,
    pub mean_usd: f64,
}

/// Equal-width salary histogram over the raw subset values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub bucket_width: f64,
    pub counts: Vec<u32>,
}

/// Record count and relative share for one remote-work category.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteShare {
    pub category: String,
    pub count: usize,
    /// Fraction of the subset in this category, in `0.0..=1.0`.
    pub share: f64,
}

/// Mean salary for one country (choropleth color scale).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    pub iso3: String,
    pub mean_usd: f64,
}

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

/// Group the subset by a string key and return `(key, mean usd)` pairs,
/// means rounded to 2 decimals, groups in first-encountered order.
fn group_means<'a>(subset: &[&'a Record], key: impl Fn(&'a Record) -> &'a str) -> Vec<(String, f64)> {
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    for &rec in subset {
        let k = key(rec);
        match groups.iter_mut().find(|(g, _, _)| *g == k) {
            Some((_, sum, n)) => {
                *sum += rec.usd;
                *n += 1;
            }
            None => groups.push((k, rec.usd, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(k, sum, n)| (k.to_string(), round2(sum / n as f64)))
        .collect()
}

// ---------------------------------------------------------------------------
// The four aggregates
// ---------------------------------------------------------------------------

/// The `limit` job titles with the highest mean salary, re-sorted ascending
/// by mean so a horizontal bar chart renders the largest at the top.
/// Ties on the descending pick keep first-encountered titles.
pub fn top_titles_by_mean(subset: &[&Record], limit: usize) -> Vec<TitleMean> {
    let mut means = group_means(subset, |r| &r.title);
    // Stable sort: equal means stay in first-encountered order.
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(limit);
    means.sort_by(|a, b| a.1.total_cmp(&b.1));

    means
        .into_iter()
        .map(|(title, mean_usd)| TitleMean { title, mean_usd })
        .collect()
}

/// Fixed-bucket histogram over the raw salary values. `None` when the
/// subset is empty; a degenerate min == max subset lands in bucket 0.
pub fn histogram(subset: &[&Record], buckets: usize) -> Option<Histogram> {
    if subset.is_empty() || buckets == 0 {
        return None;
    }

    let min = subset.iter().map(|r| r.usd).fold(f64::INFINITY, f64::min);
    let max = subset
        .iter()
        .map(|r| r.usd)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let mut counts = vec![0u32; buckets];
    if range <= 0.0 {
        counts[0] = subset.len() as u32;
        return Some(Histogram {
            min,
            bucket_width: 1.0,
            counts,
        });
    }

    let bucket_width = range / buckets as f64;
    for rec in subset {
        let i = (((rec.usd - min) / bucket_width) as usize).min(buckets - 1);
        counts[i] += 1;
    }

    Some(Histogram {
        min,
        bucket_width,
        counts,
    })
}

/// Record count per remote-work category with its relative share,
/// categories in first-encountered order.
pub fn remote_shares(subset: &[&Record]) -> Vec<RemoteShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &rec in subset {
        match counts.iter_mut().find(|(cat, _)| *cat == rec.remote) {
            Some((_, n)) => *n += 1,
            None => counts.push((&rec.remote, 1)),
        }
    }

    let total = subset.len();
    counts
        .into_iter()
        .map(|(category, count)| RemoteShare {
            category: category.to_string(),
            count,
            share: count as f64 / total as f64,
        })
        .collect()
}

/// Mean salary per country ISO3 code, sorted descending by mean for
/// display. Aggregates the whole subset, not any single job title.
pub fn country_means(subset: &[&Record]) -> Vec<CountryMean> {
    let mut means = group_means(subset, |r| &r.country_iso3);
    means.sort_by(|a, b| b.1.total_cmp(&a.1));

    means
        .into_iter()
        .map(|(iso3, mean_usd)| CountryMean { iso3, mean_usd })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, remote: &str, iso3: &str, usd: f64) -> Record {
        Record {
            year: 2024,
            seniority: "Senior".to_string(),
            contract: "CLT".to_string(),
            company_size: "M".to_string(),
            title: title.to_string(),
            remote: remote.to_string(),
            country_iso3: iso3.to_string(),
            usd,
        }
    }

    #[test]
    fn top_titles_sorted_ascending_and_capped() {
        let records: Vec<Record> = (0..15)
            .map(|i| record(&format!("Title {i}"), "Remote", "USA", 1_000.0 * (i + 1) as f64))
            .collect();
        let subset: Vec<&Record> = records.iter().collect();

        let top = top_titles_by_mean(&subset, 10);
        assert_eq!(top.len(), 10);
        // Ascending by mean, so the 10 largest run from 6000 up to 15000.
        assert_eq!(top[0].mean_usd, 6_000.0);
        assert_eq!(top[9].mean_usd, 15_000.0);
        for pair in top.windows(2) {
            assert!(pair[0].mean_usd <= pair[1].mean_usd);
        }
        for entry in &top {
            assert!(subset.iter().any(|r| r.title == entry.title));
        }
    }

    #[test]
    fn top_titles_averages_within_groups() {
        let a = record("Analyst", "Remote", "USA", 40_000.0);
        let b = record("Analyst", "Remote", "USA", 60_000.0);
        let c = record("Data Scientist", "Remote", "USA", 90_000.0);
        let top = top_titles_by_mean(&[&a, &b, &c], 10);
        assert_eq!(
            top,
            vec![
                TitleMean { title: "Analyst".to_string(), mean_usd: 50_000.0 },
                TitleMean { title: "Data Scientist".to_string(), mean_usd: 90_000.0 },
            ]
        );
    }

    #[test]
    fn histogram_covers_all_values() {
        let records: Vec<Record> = (0..90)
            .map(|i| record("Analyst", "Remote", "USA", 10_000.0 + 1_000.0 * i as f64))
            .collect();
        let subset: Vec<&Record> = records.iter().collect();

        let h = histogram(&subset, 30).unwrap();
        assert_eq!(h.counts.len(), 30);
        assert_eq!(h.counts.iter().sum::<u32>(), 90);
        assert_eq!(h.min, 10_000.0);
    }

    #[test]
    fn histogram_max_value_lands_in_last_bucket() {
        let a = record("Analyst", "Remote", "USA", 0.0);
        let b = record("Analyst", "Remote", "USA", 30_000.0);
        let h = histogram(&[&a, &b], 30).unwrap();
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[29], 1);
    }

    #[test]
    fn histogram_degenerate_single_value() {
        let a = record("Analyst", "Remote", "USA", 50_000.0);
        let b = record("Analyst", "Remote", "USA", 50_000.0);
        let h = histogram(&[&a, &b], 30).unwrap();
        assert_eq!(h.counts[0], 2);
        assert_eq!(h.counts.iter().sum::<u32>(), 2);
    }

    #[test]
    fn histogram_of_empty_subset_is_none() {
        assert!(histogram(&[], 30).is_none());
    }

    #[test]
    fn remote_shares_sum_to_one() {
        let a = record("Analyst", "Remote", "USA", 1.0);
        let b = record("Analyst", "Remote", "USA", 1.0);
        let c = record("Analyst", "On-site", "USA", 1.0);
        let d = record("Analyst", "Hybrid", "USA", 1.0);

        let shares = remote_shares(&[&a, &b, &c, &d]);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].category, "Remote");
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].share, 0.5);
        let total: f64 = shares.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn country_means_grouped_and_sorted_descending() {
        let a = record("Analyst", "Remote", "BRA", 40_000.0);
        let b = record("Analyst", "Remote", "USA", 120_000.0);
        let c = record("Analyst", "Remote", "BRA", 60_000.0);

        let means = country_means(&[&a, &b, &c]);
        assert_eq!(
            means,
            vec![
                CountryMean { iso3: "USA".to_string(), mean_usd: 120_000.0 },
                CountryMean { iso3: "BRA".to_string(), mean_usd: 50_000.0 },
            ]
        );
    }
}
