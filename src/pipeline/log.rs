use anyhow::Result;

use crate::data::format::LOG_FORMAT;
use crate::data::model::RawUpload;
use crate::data::parse::parse_table;
use crate::data::stats::{self, SummaryStat};
use crate::render::{ChartSpec, MeanBand, Series, SummaryRow};

// ---------------------------------------------------------------------------
// Log pipeline: thermodynamic variables over time
// ---------------------------------------------------------------------------

/// kcal → kJ.
pub const KCAL_TO_KJ: f64 = 4.184;
/// Molecules in the simulated box; energies are reported per molecule.
pub const MOLECULE_COUNT: f64 = 512.0;

/// Extensive energy columns rescaled to kJ/mol per molecule.
const ENERGY_COLUMNS: [&str; 3] = ["KinEng", "PotEng", "TotEng"];

/// The six parameters charted against time.
const CHART_PARAMETERS: [&str; 6] = ["Temp", "Density", "KinEng", "PotEng", "TotEng", "Volume"];

/// Render model for the log tab: six parameter charts plus a summary table.
#[derive(Debug, Clone)]
pub struct LogView {
    pub charts: Vec<ChartSpec>,
    pub summary: Vec<SummaryRow>,
    /// Rows remaining after the time filter, for the status line.
    pub rows: usize,
}

/// Run the log pipeline. `None` upload is the normal empty state and yields
/// no view; a malformed file is an error surfaced to the status line.
pub fn log_view(upload: Option<&RawUpload>, min_time: Option<f64>) -> Result<Option<LogView>> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let mut table = parse_table(upload.bytes(), &LOG_FORMAT)?;
    for name in ENERGY_COLUMNS {
        table.scale_column(name, KCAL_TO_KJ / MOLECULE_COUNT, Some("kJ/mol"))?;
    }
    let table = match min_time {
        Some(t) => table.filter_min("Time", t)?,
        None => table,
    };

    // Summary statistics for every column after row index and time.
    let summary: Vec<SummaryRow> = table
        .columns()
        .iter()
        .skip(2)
        .map(|col| {
            let stat = SummaryStat::from_values(&col.values);
            SummaryRow {
                variable: col.name.clone(),
                mean: stat.mean,
                error: stat.error,
                upper: stat.upper,
                lower: stat.lower,
            }
        })
        .collect();

    let time = table.require("Time")?;
    let mut charts = Vec::with_capacity(CHART_PARAMETERS.len());
    for name in CHART_PARAMETERS {
        let col = table.require(name)?;

        // Overlay values come from the filtered, unrounded data.
        let mean = stats::mean(&col.values);
        let error = stats::standard_error(&col.values);

        let mut chart = ChartSpec::new(format!("log_{name}"), name);
        chart.x_label = time.label();
        chart.y_label = col.label();
        chart.series = vec![Series::line(name, &time.values, &col.values)];
        chart.mean_band = Some(MeanBand {
            mean,
            error,
            label: format!("Average {name}: {mean:.2}"),
        });
        charts.push(chart);
    }

    Ok(Some(LogView {
        charts,
        summary,
        rows: table.len(),
    }))
}
