use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

// ---------------------------------------------------------------------------
// Power-vs-frequency line plot (central panel of the amplitude app)
// ---------------------------------------------------------------------------

/// Render the trace embedded in a marker export.  The horizontal dashed
/// line marks 0 dBm for reference.
pub fn power_plot(ui: &mut Ui, curve: &[[f64; 2]]) {
    Plot::new("power_vs_frequency")
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Power (dBm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.hline(
                HLine::new(0.0)
                    .color(Color32::GRAY)
                    .width(0.5)
                    .style(LineStyle::dashed_loose()),
            );

            let points: PlotPoints = curve.iter().copied().collect();
            plot_ui.line(
                Line::new(points)
                    .name("trace")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            let markers: PlotPoints = curve.iter().copied().collect();
            plot_ui.points(
                Points::new(markers)
                    .shape(MarkerShape::Circle)
                    .radius(2.5)
                    .color(Color32::LIGHT_BLUE),
            );
        });
}
