use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, TextureHandle, TextureOptions, Ui};

use crate::analysis::spectrogram::{self, Spectrogram};
use crate::analysis::sweep::{self, SweepSummary};
use crate::data::loader::{self, LoadOptions};
use crate::ui;

// ---------------------------------------------------------------------------
// Program B: frequency sweep + spectrogram
// ---------------------------------------------------------------------------

/// Analyzer for sweep exports: summarizes the recorded frequency sweep and,
/// on request, renders the spectrogram of a chirp synthesized from it.
#[derive(Default)]
pub struct SweepApp {
    summary: Option<SweepSummary>,
    spectrogram: Option<Spectrogram>,
    texture: Option<TextureHandle>,
    loaded_file: Option<String>,
    status_message: Option<String>,
}

impl SweepApp {
    fn open_file_dialog(&mut self) {
        let file = rfd::FileDialog::new()
            .set_title("Open sweep export")
            .add_filter("CSV", &["csv"])
            .pick_file();

        if let Some(path) = file {
            self.open_path(&path);
        }
    }

    fn open_path(&mut self, path: &Path) {
        match self.try_open(path) {
            Ok(()) => {
                log::info!("loaded {}", path.display());
                self.status_message = None;
            }
            Err(err) => {
                log::error!("failed to summarize {}: {err:#}", path.display());
                self.status_message = Some(format!("Error: {err:#}"));
            }
        }
    }

    /// Load and summarize in one step; any failure leaves prior results intact.
    fn try_open(&mut self, path: &Path) -> anyhow::Result<()> {
        let table = loader::load_table(path, &LoadOptions::comma_with_header())
            .with_context(|| format!("loading {}", path.display()))?;
        let summary = sweep::summarize(&table)?;

        self.summary = Some(summary);
        // Stale grid from the previous file must not outlive the new sweep.
        self.spectrogram = None;
        self.texture = None;
        self.loaded_file = Some(path.display().to_string());
        Ok(())
    }

    fn generate_spectrogram(&mut self, ctx: &egui::Context) {
        match spectrogram::chirp_spectrogram(self.summary.as_ref()) {
            Ok(spec) => {
                log::info!(
                    "spectrogram: {} segments x {} bins",
                    spec.times.len(),
                    spec.frequencies.len()
                );
                let image = ui::spectrogram::color_image(&spec);
                self.texture =
                    Some(ctx.load_texture("chirp_spectrogram", image, TextureOptions::NEAREST));
                self.spectrogram = Some(spec);
                self.status_message = None;
            }
            Err(err) => {
                log::error!("spectrogram generation failed: {err}");
                self.status_message = Some(format!("Error: {err}"));
            }
        }
    }
}

impl eframe::App for SweepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui: &mut Ui| {
                if ui.button("Open CSV…").clicked() {
                    self.open_file_dialog();
                }
                if ui.button("Generate spectrogram").clicked() {
                    self.generate_spectrogram(ctx);
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
            summary(ui, self.summary.as_ref());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match (&self.spectrogram, &self.texture) {
                (Some(spec), Some(texture)) => {
                    ui::spectrogram::show(ui, texture, spec);
                }
                _ => {
                    ui.centered_and_justified(|ui: &mut Ui| {
                        ui.heading(
                            "Open a sweep export, then generate the chirp spectrogram",
                        );
                    });
                }
            }
        });
    }
}

fn summary(ui: &mut Ui, summary: Option<&SweepSummary>) {
    match summary {
        Some(s) => {
            ui.label(format!("Initial frequency: {} Hz", s.freq_initial));
            ui.label(format!("Final frequency: {} Hz", s.freq_final));
            ui.label(format!("Sampling rate: {} Hz", s.sampling_rate));
            ui.label(format!("Sweep points: {}", s.samples));
        }
        None => {
            ui.label("No file loaded.");
        }
    }
}
