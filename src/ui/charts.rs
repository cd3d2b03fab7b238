use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::analytics::charts::{CountryMean, Histogram, RemoteShare, TitleMean};
use crate::color::{ColorScale, generate_palette};

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Top titles by mean salary – horizontal bars
// ---------------------------------------------------------------------------

/// Top job titles by mean salary. The input is already sorted ascending,
/// so the largest mean renders at the top of the chart.
pub fn top_titles_chart(ui: &mut Ui, data: &[TitleMean]) {
    ui.label("Top 10 titles by mean salary");

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.mean_usd)
                .name(&entry.title)
                .width(0.6)
        })
        .collect();
    let labels: Vec<String> = data.iter().map(|e| e.title.clone()).collect();

    Plot::new("top_titles_chart")
        .height(CHART_HEIGHT)
        .y_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .x_axis_label("Mean annual salary (USD)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

// ---------------------------------------------------------------------------
// Salary distribution – histogram
// ---------------------------------------------------------------------------

/// 30-bucket histogram over the raw salary values of the subset.
pub fn histogram_chart(ui: &mut Ui, histogram: &Histogram) {
    ui.label("Distribution of annual salaries");

    let bars: Vec<Bar> = histogram
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = histogram.min + (i as f64 + 0.5) * histogram.bucket_width;
            Bar::new(center, count as f64).width(histogram.bucket_width)
        })
        .collect();

    Plot::new("salary_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Salary range (USD)")
        .y_axis_label("Records")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_GREEN));
        });
}

// ---------------------------------------------------------------------------
// Remote-work proportions – share bars
// ---------------------------------------------------------------------------

/// Relative share per remote-work category. egui_plot has no pie
/// primitive, so shares render as horizontal percentage bars with one
/// palette colour per category.
pub fn remote_share_chart(ui: &mut Ui, shares: &[RemoteShare]) {
    ui.label("Work-type proportions");

    let palette = generate_palette(shares.len());
    let bars: Vec<Bar> = shares
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (share, color))| {
            Bar::new(i as f64, share.share * 100.0)
                .name(format!(
                    "{} — {:.1}% ({})",
                    share.category,
                    share.share * 100.0,
                    share.count
                ))
                .fill(color)
                .width(0.6)
        })
        .collect();
    let labels: Vec<String> = shares.iter().map(|s| s.category.clone()).collect();

    Plot::new("remote_share_chart")
        .height(CHART_HEIGHT)
        .y_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .x_axis_label("Share of records (%)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Mean salary per country – colour-scaled bars
// ---------------------------------------------------------------------------

/// Mean salary per country, coloured red→green by value (the stand-in for
/// the original choropleth map).
pub fn country_means_chart(ui: &mut Ui, means: &[CountryMean]) {
    ui.label("Mean salary by country");

    let scale = ColorScale::from_values(means.iter().map(|m| m.mean_usd));
    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = scale
                .map(|s| s.color_for(entry.mean_usd))
                .unwrap_or(Color32::GRAY);
            Bar::new(i as f64, entry.mean_usd)
                .name(&entry.iso3)
                .fill(color)
                .width(0.7)
        })
        .collect();
    let labels: Vec<String> = means.iter().map(|m| m.iso3.clone()).collect();

    Plot::new("country_means_chart")
        .height(CHART_HEIGHT)
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .y_axis_label("Mean annual salary (USD)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Axis label for integer category positions; blank elsewhere so the grid
/// only annotates actual bars.
fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::category_label;

    #[test]
    fn labels_only_at_integer_positions() {
        let labels = vec!["BRA".to_string(), "USA".to_string()];
        assert_eq!(category_label(&labels, 0.0), "BRA");
        assert_eq!(category_label(&labels, 1.0), "USA");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 2.0), "");
    }
}
