use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one multi-select group per filterable
/// column, plus select-all/clear shortcuts across all four.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("🔍 Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("Select all").clicked() {
            state.select_all();
        }
        if ui.small_button("Clear").clicked() {
            state.select_none();
        }
    });
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // Field-level split borrow: the distinct-value lists live on the
            // dataset, the mutable sets on the selections.
            let Some(dataset) = &state.dataset else {
                return;
            };
            let selections = &mut state.selections;

            changed |= multi_select(ui, "Year", &dataset.years, &mut selections.years);
            changed |= multi_select(
                ui,
                "Seniority",
                &dataset.seniorities,
                &mut selections.seniorities,
            );
            changed |= multi_select(
                ui,
                "Contract type",
                &dataset.contracts,
                &mut selections.contracts,
            );
            changed |= multi_select(
                ui,
                "Company size",
                &dataset.company_sizes,
                &mut selections.company_sizes,
            );
        });

    if changed {
        state.rebuild_report();
    }
}

/// A collapsible multi-select: All/None buttons and one checkbox per
/// distinct value. Returns whether the selection changed.
fn multi_select<T>(ui: &mut Ui, label: &str, available: &[T], selected: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + Display,
{
    let mut changed = false;

    let header_text = format!("{label}  ({}/{})", selected.len(), available.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(available.iter().cloned());
                    changed = true;
                }
                if ui.small_button("None").clicked() && !selected.is_empty() {
                    selected.clear();
                    changed = true;
                }
            });

            for value in available {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value.to_string()).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} matching",
                ds.len(),
                state.report.indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} salary records spanning years {:?}",
                    dataset.len(),
                    dataset.years
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
