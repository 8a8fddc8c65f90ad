use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::stats::FitResult;

// ---------------------------------------------------------------------------
// Render model – UI-agnostic chart and table descriptions
// ---------------------------------------------------------------------------
// The pipelines produce these; the egui layer only draws them. Keeping the
// model free of UI types lets every pipeline be unit-tested headless.

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
}

/// One plotted series: named points, optionally with an OLS trend line.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
    pub trend: Option<FitResult>,
}

impl Series {
    pub fn line(name: impl Into<String>, x: &[f64], y: &[f64]) -> Self {
        Series {
            name: name.into(),
            kind: SeriesKind::Line,
            points: zip_points(x, y),
            trend: None,
        }
    }

    pub fn scatter(name: impl Into<String>, x: &[f64], y: &[f64]) -> Self {
        Series {
            name: name.into(),
            kind: SeriesKind::Scatter,
            points: zip_points(x, y),
            trend: None,
        }
    }

    pub fn with_trend(mut self, fit: Option<FitResult>) -> Self {
        self.trend = fit;
        self
    }

    /// x-extent of the series, for drawing overlays.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?[0];
        let (mut lo, mut hi) = (first, first);
        for p in &self.points {
            lo = lo.min(p[0]);
            hi = hi.max(p[0]);
        }
        Some((lo, hi))
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect()
}

/// Horizontal mean line plus a shaded ±1-standard-error band.
#[derive(Debug, Clone)]
pub struct MeanBand {
    pub mean: f64,
    pub error: f64,
    /// Annotation shown on the dashed mean line.
    pub label: String,
}

/// A complete chart: axes, series, and optional mean/error overlay.
/// An empty `series` list renders as a placeholder, never as an error.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Stable id for the plot widget.
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub mean_band: Option<MeanBand>,
}

impl ChartSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        ChartSpec {
            id: id.into(),
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            mean_band: None,
        }
    }

    /// Placeholder chart shown before any file is uploaded.
    pub fn empty(id: impl Into<String>, title: impl Into<String>) -> Self {
        ChartSpec::new(id, title)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary table rows (and CSV export)
// ---------------------------------------------------------------------------

/// One row of the per-column statistics table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Variable")]
    pub variable: String,
    #[serde(rename = "Mean")]
    pub mean: f64,
    #[serde(rename = "Error")]
    pub error: f64,
    #[serde(rename = "Upper")]
    pub upper: f64,
    #[serde(rename = "Lower")]
    pub lower: f64,
}

/// Write summary rows to a CSV file with a header row.
pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing summary row")?;
    }
    writer.flush().context("flushing summary CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_x_range() {
        let s = Series::line("t", &[3.0, 1.0, 2.0], &[0.0, 0.0, 0.0]);
        assert_eq!(s.x_range(), Some((1.0, 3.0)));
        assert!(Series::line("e", &[], &[]).x_range().is_none());
    }

    #[test]
    fn empty_chart_is_placeholder() {
        let chart = ChartSpec::empty("msd", "MSD");
        assert!(chart.is_empty());
        assert!(chart.mean_band.is_none());
    }

    #[test]
    fn summary_csv_round_trip() {
        let rows = vec![SummaryRow {
            variable: "Temp".into(),
            mean: 300.0,
            error: 0.5,
            upper: 300.5,
            lower: 299.5,
        }];
        let path = std::env::temp_dir().join("mdscope_summary_test.csv");
        write_summary_csv(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Variable,Mean,Error,Upper,Lower"));
        assert!(text.contains("Temp,300.0,0.5,300.5,299.5"));
        std::fs::remove_file(&path).ok();
    }
}
