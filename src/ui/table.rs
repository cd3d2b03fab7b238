use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::ui::dashboard::fmt_thousands;

// ---------------------------------------------------------------------------
// Data grid of the filtered subset
// ---------------------------------------------------------------------------

const HEADERS: [&str; 8] = [
    "Year",
    "Seniority",
    "Contract",
    "Company size",
    "Title",
    "Remote",
    "Country",
    "Salary (USD)",
];

/// Render the filtered records as a striped, scrollable grid.
pub fn filtered_table(ui: &mut Ui, dataset: &Dataset, indices: &[usize]) {
    if indices.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .max_scroll_height(360.0)
        .column(Column::auto()) // year
        .column(Column::auto()) // seniority
        .column(Column::auto()) // contract
        .column(Column::auto()) // company size
        .column(Column::remainder()) // title
        .column(Column::auto()) // remote
        .column(Column::auto()) // country
        .column(Column::auto()) // usd
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let rec = &dataset.records[indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.year.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.seniority);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.contract);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.company_size);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.title);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.remote);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.country_iso3);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(fmt_thousands(rec.usd, 2));
                });
            });
        });
}
