use eframe::egui;
use sweepscope::app::sweep::SweepApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sweepscope – Sweep & Spectrogram",
        options,
        Box::new(|_cc| Ok(Box::new(SweepApp::default()))),
    )
}
