use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::analysis::marker::{self, MarkerReadings};
use crate::data::loader::{self, LoadOptions};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Program A: amplitude / power / resistance
// ---------------------------------------------------------------------------

/// Analyzer for marker exports: extracts resistance and marker power,
/// derives mW and amplitude, and plots the embedded trace.
#[derive(Default)]
pub struct AmplitudeApp {
    readings: Option<MarkerReadings>,
    curve: Vec<[f64; 2]>,
    loaded_file: Option<String>,
    status_message: Option<String>,
}

impl AmplitudeApp {
    fn open_file_dialog(&mut self) {
        let file = rfd::FileDialog::new()
            .set_title("Open marker export")
            .add_filter("CSV", &["csv"])
            .pick_file();

        if let Some(path) = file {
            self.open_path(&path);
        }
    }

    fn open_path(&mut self, path: &Path) {
        match self.try_open(path) {
            Ok(()) => {
                log::info!("loaded {} ({} trace points)", path.display(), self.curve.len());
                self.status_message = None;
            }
            Err(err) => {
                log::error!("failed to analyze {}: {err:#}", path.display());
                self.status_message = Some(format!("Error: {err:#}"));
            }
        }
    }

    /// Load and analyze in one step; any failure leaves prior results intact.
    fn try_open(&mut self, path: &Path) -> anyhow::Result<()> {
        let table = loader::load_table(path, &LoadOptions::semicolon_no_header())
            .with_context(|| format!("loading {}", path.display()))?;
        let readings = marker::analyze(&table)?;

        self.curve = marker::power_curve(&table);
        self.readings = Some(readings);
        self.loaded_file = Some(path.display().to_string());
        Ok(())
    }
}

impl eframe::App for AmplitudeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui: &mut Ui| {
                if ui.button("Open CSV…").clicked() {
                    self.open_file_dialog();
                }
                ui.separator();
                if let Some(name) = &self.loaded_file {
                    ui.label(name);
                }
                if let Some(msg) = &self.status_message {
                    ui.label(RichText::new(msg).color(Color32::RED));
                }
            });
        });

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            summary(ui, self.readings.as_ref());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.readings.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a marker export to analyze the captured signal");
                });
            } else {
                plot::power_plot(ui, &self.curve);
            }
        });
    }
}

fn summary(ui: &mut Ui, readings: Option<&MarkerReadings>) {
    match readings {
        Some(r) => {
            ui.label(format!("Resistance: {} Ω", r.resistance_ohms));
            ui.label(format!("Power: {} dBm", r.power_dbm));
            ui.label(format!("Power: {} mW", r.power_mw));
            ui.label(format!("Amplitude: {}", r.amplitude));
        }
        None => {
            ui.label("No file loaded.");
        }
    }
}
