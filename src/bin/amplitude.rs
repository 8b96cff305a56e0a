use eframe::egui;
use sweepscope::app::amplitude::AmplitudeApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sweepscope – Amplitude & Power",
        options,
        Box::new(|_cc| Ok(Box::new(AmplitudeApp::default()))),
    )
}
