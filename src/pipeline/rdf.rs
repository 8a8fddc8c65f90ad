use anyhow::Result;

use crate::data::format::RDF_FORMAT;
use crate::data::model::RawUpload;
use crate::data::parse::parse_table;
use crate::render::{ChartSpec, Series};

// ---------------------------------------------------------------------------
// RDF pipeline: radial distribution functions and coordination numbers
// ---------------------------------------------------------------------------

/// Render model for the RDF tab: two independent multi-series charts.
#[derive(Debug, Clone)]
pub struct RdfView {
    pub rdf_chart: ChartSpec,
    pub cn_chart: ChartSpec,
}

impl RdfView {
    /// Placeholders shown before any file is uploaded.
    pub fn empty() -> Self {
        RdfView {
            rdf_chart: ChartSpec::empty("rdf", "RDF"),
            cn_chart: ChartSpec::empty("cn", "Coordination number"),
        }
    }
}

impl Default for RdfView {
    fn default() -> Self {
        RdfView::empty()
    }
}

/// Run the RDF pipeline: split the pair columns by name suffix into the
/// g(r) family and the coordination-number family, one chart each.
pub fn rdf_view(upload: Option<&RawUpload>) -> Result<RdfView> {
    let Some(upload) = upload else {
        return Ok(RdfView::empty());
    };

    let table = parse_table(upload.bytes(), &RDF_FORMAT)?;
    let distance = table.require("Distance")?;

    let mut rdf_chart = ChartSpec::new("rdf", "RDF");
    let mut cn_chart = ChartSpec::new("cn", "Coordination number");
    rdf_chart.x_label = distance.label();
    cn_chart.x_label = distance.label();
    rdf_chart.y_label = "g(r)".to_string();
    cn_chart.y_label = "n(r)".to_string();

    for col in table.columns() {
        if col.name.ends_with("RDF") {
            rdf_chart
                .series
                .push(Series::line(&col.name, &distance.values, &col.values));
        } else if col.name.ends_with("CN") {
            cn_chart
                .series
                .push(Series::line(&col.name, &distance.values, &col.values));
        }
    }

    Ok(RdfView { rdf_chart, cn_chart })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rdf_upload() -> RawUpload {
        let mut text = String::from("# rdf\n# preamble\n100 2\n# bins\n");
        for i in 1..=3 {
            let r = i as f64 * 0.1;
            text.push_str(&format!(
                "{i} {r} 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8\n"
            ));
        }
        RawUpload::new("rdf", text.into_bytes())
    }

    #[test]
    fn empty_upload_yields_two_placeholders() {
        let view = rdf_view(None).unwrap();
        assert!(view.rdf_chart.is_empty());
        assert!(view.cn_chart.is_empty());
    }

    #[test]
    fn columns_split_four_and_four_by_suffix() {
        let view = rdf_view(Some(&rdf_upload())).unwrap();

        let rdf_names: Vec<&str> = view
            .rdf_chart
            .series
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let cn_names: Vec<&str> = view
            .cn_chart
            .series
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(rdf_names, ["HH RDF", "HO RDF", "OH RDF", "OO RDF"]);
        assert_eq!(cn_names, ["HH CN", "HO CN", "OH CN", "OO CN"]);
    }

    #[test]
    fn distance_is_the_x_axis() {
        let view = rdf_view(Some(&rdf_upload())).unwrap();

        assert_eq!(view.rdf_chart.x_label, "Distance (Å)");
        assert_eq!(view.cn_chart.x_label, "Distance (Å)");
        let hh = &view.rdf_chart.series[0];
        assert!((hh.points[2][0] - 0.3).abs() < 1e-12);
        assert_eq!(hh.points[2][1], 0.1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let upload = RawUpload::new("rdf", b"a\nb\nc\nd\nnot numbers here\n".to_vec());
        assert!(rdf_view(Some(&upload)).is_err());
    }
}
