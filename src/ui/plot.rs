use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints, Points, Polygon};

use crate::color;
use crate::render::{ChartSpec, SeriesKind};

// ---------------------------------------------------------------------------
// ChartSpec → egui_plot
// ---------------------------------------------------------------------------

/// Draw a chart from its render model. Colours are assigned here: one fixed
/// colour per series when `fixed_color` is given (the six log parameter
/// charts), otherwise an evenly spaced palette per series index.
pub fn chart(ui: &mut Ui, spec: &ChartSpec, height: f32, fixed_color: Option<Color32>) {
    let palette = match fixed_color {
        Some(c) => vec![c; spec.series.len().max(1)],
        None => color::generate_palette(spec.series.len().max(1)),
    };

    Plot::new(&spec.id)
        .legend(egui_plot::Legend::default())
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Error band and mean line go underneath the data.
            if let Some(band) = &spec.mean_band {
                if let Some((x0, x1)) = spec.series.first().and_then(|s| s.x_range()) {
                    if band.error.is_finite() && band.error > 0.0 {
                        let lo = band.mean - band.error;
                        let hi = band.mean + band.error;
                        let corners: PlotPoints =
                            vec![[x0, lo], [x1, lo], [x1, hi], [x0, hi]].into();
                        plot_ui.polygon(
                            Polygon::new(corners)
                                .fill_color(Color32::from_rgba_unmultiplied(222, 60, 60, 50))
                                .stroke(Stroke::NONE)
                                .name("± standard error"),
                        );
                    }
                }
                plot_ui.hline(
                    HLine::new(band.mean)
                        .style(LineStyle::dashed_dense())
                        .color(Color32::GRAY)
                        .name(&band.label),
                );
            }

            for (i, series) in spec.series.iter().enumerate() {
                let color = palette[i % palette.len()];
                let points: PlotPoints = series.points.clone().into();

                match series.kind {
                    SeriesKind::Line => {
                        plot_ui.line(Line::new(points).name(&series.name).color(color).width(1.5));
                    }
                    SeriesKind::Scatter => {
                        plot_ui.points(
                            Points::new(points).name(&series.name).color(color).radius(2.0),
                        );
                    }
                }

                // Fitted trend line over the x-extent of the series.
                if let (Some(fit), Some((x0, x1))) = (series.trend, series.x_range()) {
                    let trend: PlotPoints =
                        vec![[x0, fit.at(x0)], [x1, fit.at(x1)]].into();
                    plot_ui.line(
                        Line::new(trend)
                            .color(color)
                            .width(1.0)
                            .name(&series.name),
                    );
                }
            }
        });
}
