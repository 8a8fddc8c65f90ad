use anyhow::Result;

use crate::data::format::MSD_FORMAT;
use crate::data::model::{Column, RawUpload};
use crate::data::parse::parse_table;
use crate::data::stats::{self, FitResult};
use crate::render::{ChartSpec, Series};

// ---------------------------------------------------------------------------
// MSD pipeline: mean squared displacement and diffusion coefficient
// ---------------------------------------------------------------------------

/// Femtoseconds → seconds.
pub const FS_TO_S: f64 = 1e-15;
/// Å² → m².
pub const SQ_ANGSTROM_TO_SQ_M: f64 = 1e-20;

/// The four displacement components, fitted against time.
const DISPLACEMENT_COLUMNS: [&str; 4] = ["<x^2>", "<y^2>", "<z^2>", "<R^2>"];

/// The diffusion coefficient comes from this component's slope, selected by
/// name so a column reorder cannot silently target the wrong series.
const TOTAL_DISPLACEMENT: &str = "<R^2>";

/// Render model for the MSD tab.
#[derive(Debug, Clone)]
pub struct MsdView {
    pub chart: ChartSpec,
    /// `D = <value>` label, empty until a fit exists.
    pub diffusion_label: String,
}

impl MsdView {
    /// Placeholder shown before any file is uploaded.
    pub fn empty() -> Self {
        MsdView {
            chart: ChartSpec::empty("msd", "Mean squared displacement"),
            diffusion_label: String::new(),
        }
    }
}

impl Default for MsdView {
    fn default() -> Self {
        MsdView::empty()
    }
}

/// Run the MSD pipeline. `min_time` is in seconds, compared against the
/// converted time axis.
pub fn msd_view(upload: Option<&RawUpload>, min_time: Option<f64>) -> Result<MsdView> {
    let Some(upload) = upload else {
        return Ok(MsdView::empty());
    };

    let mut table = parse_table(upload.bytes(), &MSD_FORMAT)?;

    let seconds: Vec<f64> = table
        .require("TimeStep")?
        .values
        .iter()
        .map(|&t| t * FS_TO_S)
        .collect();
    table.push_column(Column::new("Time", seconds).with_unit("s"))?;
    for name in DISPLACEMENT_COLUMNS {
        table.scale_column(name, SQ_ANGSTROM_TO_SQ_M, Some("m²"))?;
    }

    let table = match min_time {
        Some(t) => table.filter_min("Time", t)?,
        None => table,
    };

    let time = table.require("Time")?;
    let mut chart = ChartSpec::new("msd", "Mean squared displacement");
    chart.x_label = time.label();
    chart.y_label = "MSD (m²)".to_string();

    let mut total_fit: Option<FitResult> = None;
    for name in DISPLACEMENT_COLUMNS {
        let col = table.require(name)?;
        let fit = stats::ols_fit(&time.values, &col.values);
        if name == TOTAL_DISPLACEMENT {
            total_fit = fit;
        }
        chart
            .series
            .push(Series::scatter(name, &time.values, &col.values).with_trend(fit));
    }

    let diffusion_label = match total_fit {
        Some(fit) => format!("D = {:.2e}", stats::diffusion_coefficient(&fit)),
        None => String::new(),
    };

    Ok(MsdView {
        chart,
        diffusion_label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Perfectly linear series whose converted `<R^2>` vs time slope is
    /// exactly 6e-9 m²/s: r2 = step·6e-4 Å², since 6e-4·1e-20 / 1e-15 = 6e-9.
    fn linear_upload() -> RawUpload {
        let mut text = String::from("# TimeStep <x^2> <y^2> <z^2> <R^2>\n");
        for i in 0..20u64 {
            let step = i * 1000;
            let r2 = step as f64 * 6e-4;
            let third = r2 / 3.0;
            text.push_str(&format!("{step} {third} {third} {third} {r2}\n"));
        }
        RawUpload::new("msd", text.into_bytes())
    }

    #[test]
    fn empty_upload_yields_placeholder() {
        let view = msd_view(None, None).unwrap();
        assert!(view.chart.is_empty());
        assert_eq!(view.diffusion_label, "");
    }

    #[test]
    fn unit_conversions() {
        let upload = RawUpload::new("msd", b"1000 1.0 1.0 1.0 3.0\n2000 2.0 2.0 2.0 6.0\n".to_vec());
        let view = msd_view(Some(&upload), None).unwrap();

        let x2 = view.chart.series.iter().find(|s| s.name == "<x^2>").unwrap();
        // 1000 fs → 1e-12 s, 1 Å² → 1e-20 m².
        assert!((x2.points[0][0] - 1e-12).abs() < 1e-24);
        assert!((x2.points[0][1] - 1e-20).abs() < 1e-32);
    }

    #[test]
    fn diffusion_from_total_displacement_slope() {
        let view = msd_view(Some(&linear_upload()), None).unwrap();

        // slope 6e-9 → D = 1e-9, shown with two significant decimals.
        assert_eq!(view.diffusion_label, "D = 1.00e-9");
    }

    #[test]
    fn four_series_each_with_trend() {
        let view = msd_view(Some(&linear_upload()), None).unwrap();

        assert_eq!(view.chart.series.len(), 4);
        for series in &view.chart.series {
            assert!(series.trend.is_some(), "{} has no trend", series.name);
        }
        let r2 = view
            .chart
            .series
            .iter()
            .find(|s| s.name == "<R^2>")
            .unwrap();
        let slope = r2.trend.unwrap().slope;
        assert!((slope - 6e-9).abs() < 1e-18, "slope {slope}");
    }

    #[test]
    fn min_time_filter_in_seconds() {
        let view = msd_view(Some(&linear_upload()), Some(5e-12)).unwrap();

        for series in &view.chart.series {
            assert!(series.points.iter().all(|p| p[0] >= 5e-12));
            assert_eq!(series.points.len(), 15);
        }
    }

    #[test]
    fn degenerate_single_row_has_no_fit() {
        let upload = RawUpload::new("msd", b"1000 1.0 1.0 1.0 3.0\n".to_vec());
        let view = msd_view(Some(&upload), None).unwrap();
        assert_eq!(view.diffusion_label, "");
        assert!(view.chart.series.iter().all(|s| s.trend.is_none()));
    }
}
