use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::color;
use crate::data::model::RawUpload;
use crate::render::{write_summary_csv, SummaryRow};
use crate::state::{AppState, Tab};
use crate::ui::plot;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the tab selector and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open log…").clicked() {
                open_upload_dialog(state, Tab::Log);
                ui.close_menu();
            }
            if ui.button("Open MSD…").clicked() {
                open_upload_dialog(state, Tab::Msd);
                ui.close_menu();
            }
            if ui.button("Open RDF…").clicked() {
                open_upload_dialog(state, Tab::Rdf);
                ui.close_menu();
            }
        });

        ui.separator();

        for (tab, label) in [(Tab::Log, "Variables"), (Tab::Msd, "MSD"), (Tab::Rdf, "RDF")] {
            if ui.selectable_label(state.active_tab == tab, label).clicked() {
                state.active_tab = tab;
            }
        }

        ui.separator();

        if let Some(view) = &state.log_view {
            if state.active_tab == Tab::Log {
                ui.label(format!("{} rows loaded", view.rows));
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Variables (log) tab
// ---------------------------------------------------------------------------

pub fn log_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Upload LOG").clicked() {
            open_upload_dialog(state, Tab::Log);
        }
        if threshold_input(ui, "Min time (fs)", &mut state.log_min) {
            state.rerun_log();
        }
    });
    ui.separator();

    let Some(view) = &state.log_view else {
        empty_hint(ui, "Upload a thermodynamic log to see variables over time.");
        return;
    };
    let charts = view.charts.clone();
    let summary = view.summary.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // Six parameter charts, three per row.
            for row in charts.chunks(3) {
                ui.columns(row.len(), |cols| {
                    for (col_ui, spec) in cols.iter_mut().zip(row) {
                        col_ui.vertical_centered(|ui: &mut Ui| {
                            ui.strong(&spec.title);
                        });
                        plot::chart(
                            col_ui,
                            spec,
                            CHART_HEIGHT,
                            Some(color::parameter_color(&spec.title)),
                        );
                    }
                });
                ui.add_space(8.0);
            }

            ui.separator();
            summary_table(ui, &summary);
            ui.add_space(4.0);
            if ui.button("Export stats (.csv)").clicked() {
                export_summary(state, &summary);
            }
        });
}

/// The per-column statistics table.
fn summary_table(ui: &mut Ui, rows: &[SummaryRow]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(TableColumn::auto().at_least(90.0))
        .columns(TableColumn::auto().at_least(80.0), 4)
        .header(20.0, |mut header| {
            for title in ["Variable", "Mean", "Error", "Upper", "Lower"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.variable);
                    });
                    for value in [row.mean, row.error, row.upper, row.lower] {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(format!("{value}"));
                        });
                    }
                });
            }
        });
}

fn export_summary(state: &mut AppState, rows: &[SummaryRow]) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export summary statistics")
        .set_file_name("log_stats.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };
    match write_summary_csv(&path, rows) {
        Ok(()) => log::info!("wrote summary stats to {}", path.display()),
        Err(e) => {
            log::error!("summary export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// MSD tab
// ---------------------------------------------------------------------------

pub fn msd_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Upload MSD").clicked() {
            open_upload_dialog(state, Tab::Msd);
        }
        if threshold_input(ui, "Min time (s)", &mut state.msd_min) {
            state.rerun_msd();
        }
        if !state.msd_view.diffusion_label.is_empty() {
            ui.separator();
            ui.strong(&state.msd_view.diffusion_label);
        }
    });
    ui.separator();

    if state.msd_view.chart.is_empty() {
        empty_hint(ui, "Upload an MSD series to fit the diffusion coefficient.");
        return;
    }
    let chart = state.msd_view.chart.clone();
    let height = ui.available_height() - 8.0;
    plot::chart(ui, &chart, height, None);
}

// ---------------------------------------------------------------------------
// RDF tab
// ---------------------------------------------------------------------------

pub fn rdf_tab(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Upload RDF").clicked() {
            open_upload_dialog(state, Tab::Rdf);
        }
    });
    ui.separator();

    if state.rdf_view.rdf_chart.is_empty() && state.rdf_view.cn_chart.is_empty() {
        empty_hint(ui, "Upload an RDF table to see g(r) and coordination numbers.");
        return;
    }

    let rdf_chart = state.rdf_view.rdf_chart.clone();
    let cn_chart = state.rdf_view.cn_chart.clone();
    let height = ui.available_height() - 40.0;
    ui.columns(2, |cols| {
        cols[0].vertical_centered(|ui: &mut Ui| {
            ui.strong(&rdf_chart.title);
        });
        plot::chart(&mut cols[0], &rdf_chart, height, None);

        cols[1].vertical_centered(|ui: &mut Ui| {
            ui.strong(&cn_chart.title);
        });
        plot::chart(&mut cols[1], &cn_chart, height, None);
    });
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

/// Checkbox + drag value for an optional minimum-time threshold. Returns
/// true when the effective threshold changed.
fn threshold_input(ui: &mut Ui, label: &str, threshold: &mut crate::state::Threshold) -> bool {
    let mut changed = ui.checkbox(&mut threshold.enabled, label).changed();
    if threshold.enabled {
        changed |= ui
            .add(
                DragValue::new(&mut threshold.value)
                    .speed(threshold.step)
                    .range(0.0..=f64::INFINITY),
            )
            .changed();
    }
    changed
}

fn empty_hint(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(text);
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick a file for the given tab and feed it to that tab's pipeline.
pub fn open_upload_dialog(state: &mut AppState, tab: Tab) {
    let (title, extensions): (&str, &[&str]) = match tab {
        Tab::Log => ("Open thermodynamic log", &["log", "lammps", "txt", "out"]),
        Tab::Msd => ("Open MSD output", &["msd", "txt", "dat", "out"]),
        Tab::Rdf => ("Open RDF output", &["rdf", "txt", "dat", "out"]),
    };

    let file = rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Simulation output", extensions)
        .add_filter("All files", &["*"])
        .pick_file();

    let Some(path) = file else {
        return;
    };
    let content_type = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt")
        .to_ascii_lowercase();

    match std::fs::read(&path) {
        Ok(bytes) => {
            log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
            let upload = RawUpload::new(content_type, bytes);
            match tab {
                Tab::Log => state.set_log_upload(upload),
                Tab::Msd => state.set_msd_upload(upload),
                Tab::Rdf => state.set_rdf_upload(upload),
            }
            state.active_tab = tab;
        }
        Err(e) => {
            log::error!("failed to read {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
