use eframe::egui::{self, Color32, ColorImage, TextureHandle, Ui};
use palette::{LinSrgb, Mix, Srgb};

use crate::analysis::spectrogram::Spectrogram;

// ---------------------------------------------------------------------------
// Spectrogram color mesh (central panel of the sweep app)
// ---------------------------------------------------------------------------

const COLORBAR_WIDTH: f32 = 18.0;
const COLORBAR_STEPS: usize = 64;

/// Rasterize the dB grid into an image, one pixel per (time, frequency)
/// cell, highest frequency at the top so the image reads like a plot.
pub fn color_image(spec: &Spectrogram) -> ColorImage {
    let (min_db, max_db) = spec.min_max_db();
    let width = spec.times.len();
    let height = spec.frequencies.len();

    let mut pixels = Vec::with_capacity(width * height);
    for bin in (0..height).rev() {
        for column in &spec.power_db {
            pixels.push(db_to_color(column[bin], min_db, max_db));
        }
    }

    ColorImage {
        size: [width, height],
        pixels,
    }
}

/// Show the rendered spectrogram with its colorbar and axis captions.
pub fn show(ui: &mut Ui, texture: &TextureHandle, spec: &Spectrogram) {
    let (min_db, max_db) = spec.min_max_db();
    let nyquist = spec.frequencies.last().copied().unwrap_or(0.0);
    let duration = spec.times.last().copied().unwrap_or(0.0);

    ui.heading("Chirp spectrogram");
    ui.label(format!(
        "0 – {duration:.2} s, 0 – {nyquist:.1} Hz, power in dB"
    ));
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        let image_size = egui::vec2(
            (ui.available_width() - COLORBAR_WIDTH - 48.0).max(64.0),
            (ui.available_height() - 8.0).max(64.0),
        );
        ui.add(egui::Image::new(texture).fit_to_exact_size(image_size));
        colorbar(ui, min_db, max_db, image_size.y);
    });
}

/// Vertical gradient strip labelled with the dB range.
fn colorbar(ui: &mut Ui, min_db: f64, max_db: f64, height: f32) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(format!("{max_db:.0} dB"));

        let bar_height = (height - 2.0 * ui.text_style_height(&egui::TextStyle::Body)).max(32.0);
        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(COLORBAR_WIDTH, bar_height),
            egui::Sense::hover(),
        );
        let painter = ui.painter();
        let step_height = rect.height() / COLORBAR_STEPS as f32;
        for step in 0..COLORBAR_STEPS {
            let t = step as f32 / COLORBAR_STEPS as f32;
            let top = rect.top() + t * rect.height();
            let row = egui::Rect::from_min_max(
                egui::pos2(rect.left(), top),
                egui::pos2(rect.right(), top + step_height + 1.0),
            );
            let db = max_db - t as f64 * (max_db - min_db);
            painter.rect_filled(row, 0.0, db_to_color(db, min_db, max_db));
        }

        ui.label(format!("{min_db:.0} dB"));
    });
}

/// dB value → color on a dark-blue → cyan → green → yellow → red gradient,
/// the "hot" scale spectrum analyzers use.
fn db_to_color(db: f64, min_db: f64, max_db: f64) -> Color32 {
    let span = (max_db - min_db).max(f64::EPSILON);
    let norm = (((db - min_db) / span) as f32).clamp(0.0, 1.0);

    let stops: [(f32, LinSrgb); 5] = [
        (0.0, LinSrgb::new(0.0, 0.0, 0.25)),
        (0.25, LinSrgb::new(0.0, 0.25, 1.0)),
        (0.5, LinSrgb::new(0.0, 1.0, 0.0)),
        (0.75, LinSrgb::new(1.0, 1.0, 0.0)),
        (1.0, LinSrgb::new(1.0, 0.0, 0.0)),
    ];

    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if norm <= t1 {
            let t = (norm - t0) / (t1 - t0);
            let mixed = c0.mix(c1, t);
            let srgb = Srgb::<u8>::from_linear(mixed);
            return Color32::from_rgb(srgb.red, srgb.green, srgb.blue);
        }
    }
    Color32::RED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_are_noise_floor_blue_and_peak_red() {
        let floor = db_to_color(-100.0, -100.0, 0.0);
        assert_eq!(floor.r(), 0);
        assert!(floor.b() > 0);

        let peak = db_to_color(0.0, -100.0, 0.0);
        assert_eq!(peak, Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn out_of_range_values_clamp_to_the_scale_ends() {
        assert_eq!(
            db_to_color(-500.0, -100.0, 0.0),
            db_to_color(-100.0, -100.0, 0.0)
        );
        assert_eq!(db_to_color(50.0, -100.0, 0.0), db_to_color(0.0, -100.0, 0.0));
    }

    #[test]
    fn image_is_time_wide_and_frequency_tall() {
        let spec = Spectrogram {
            frequencies: vec![0.0, 50.0, 100.0],
            times: vec![0.5, 1.0],
            power_db: vec![vec![-80.0, -20.0, -60.0], vec![-70.0, -10.0, -50.0]],
        };
        let image = color_image(&spec);
        assert_eq!(image.size, [2, 3]);
        assert_eq!(image.pixels.len(), 6);
        // Top-left pixel is the highest frequency bin of the first segment.
        assert_eq!(image.pixels[0], {
            let (min, max) = spec.min_max_db();
            db_to_color(-60.0, min, max)
        });
    }
}
