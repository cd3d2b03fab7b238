use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Central panel – metrics, charts, data grid
// ---------------------------------------------------------------------------

/// Render the dashboard body for the current report.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a salary dataset to begin  (File → Open…)");
        });
        return;
    };

    let report = &state.report;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Salary analytics dashboard");
            ui.label("Explore data-career salaries. Use the filters on the left to refine the view.");
            ui.add_space(8.0);

            // ---- KPI tiles ----
            ui.strong("Overall metrics (annual salary, USD)");
            ui.columns(4, |cols: &mut [Ui]| {
                metric_tile(&mut cols[0], "Mean salary", &fmt_thousands(report.summary.mean_usd, 2));
                metric_tile(&mut cols[1], "Maximum salary", &fmt_thousands(report.summary.max_usd, 2));
                metric_tile(&mut cols[2], "Records", &fmt_thousands(report.summary.count as f64, 0));
                metric_tile(&mut cols[3], "Most frequent title", &report.summary.top_title);
            });
            ui.separator();

            // ---- Charts, each guarded by the empty-subset warning ----
            ui.strong("Charts");
            ui.columns(2, |cols: &mut [Ui]| {
                if report.is_empty() {
                    warning(&mut cols[0], "No data to display in the titles chart");
                } else {
                    charts::top_titles_chart(&mut cols[0], &report.top_titles);
                }

                match &report.histogram {
                    Some(h) => charts::histogram_chart(&mut cols[1], h),
                    None => warning(&mut cols[1], "No data to display in the distribution chart"),
                }
            });

            ui.columns(2, |cols: &mut [Ui]| {
                if report.is_empty() {
                    warning(&mut cols[0], "No data to display in the work-type chart");
                } else {
                    charts::remote_share_chart(&mut cols[0], &report.remote_shares);
                }

                if report.is_empty() {
                    warning(&mut cols[1], "No data to display in the country chart");
                } else {
                    charts::country_means_chart(&mut cols[1], &report.country_means);
                }
            });
            ui.separator();

            // ---- Data grid ----
            ui.strong("Detailed records");
            table::filtered_table(ui, dataset, &report.indices);
        });
}

fn metric_tile(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(RichText::new(value).strong());
    });
}

/// The empty-subset notice that stands in for a chart.
pub fn warning(ui: &mut Ui, message: &str) {
    ui.colored_label(
        Color32::from_rgb(235, 190, 70),
        RichText::new(format!("⚠ {message}")),
    );
}

/// Format with thousands separators, e.g. `102534.2 → "102,534.20"`.
pub fn fmt_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(fmt_thousands(102_534.2, 2), "102,534.20");
        assert_eq!(fmt_thousands(1_234_567.0, 0), "1,234,567");
        assert_eq!(fmt_thousands(999.0, 0), "999");
        assert_eq!(fmt_thousands(0.0, 2), "0.00");
    }

    #[test]
    fn negative_values_keep_the_sign() {
        assert_eq!(fmt_thousands(-12_345.5, 2), "-12,345.50");
    }
}
