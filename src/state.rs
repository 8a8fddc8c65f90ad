use crate::data::model::RawUpload;
use crate::pipeline::log::{log_view, LogView};
use crate::pipeline::msd::{msd_view, MsdView};
use crate::pipeline::rdf::{rdf_view, RdfView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dashboard tab is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Log,
    Msd,
    Rdf,
}

/// Optional minimum-time threshold backed by a checkbox + drag value.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    pub enabled: bool,
    pub value: f64,
    /// Drag step matching the magnitude of the filtered axis.
    pub step: f64,
}

impl Threshold {
    pub fn new(step: f64) -> Self {
        Threshold {
            enabled: false,
            value: 0.0,
            step,
        }
    }

    pub fn get(&self) -> Option<f64> {
        self.enabled.then_some(self.value)
    }
}

/// The full UI state, independent of rendering. Each upload or threshold
/// change re-runs exactly one pipeline from the retained raw bytes; the
/// pipelines share nothing.
pub struct AppState {
    pub active_tab: Tab,

    pub log_upload: Option<RawUpload>,
    pub log_min: Threshold,
    pub log_view: Option<LogView>,

    pub msd_upload: Option<RawUpload>,
    pub msd_min: Threshold,
    pub msd_view: MsdView,

    pub rdf_upload: Option<RawUpload>,
    pub rdf_view: RdfView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Log,
            log_upload: None,
            log_min: Threshold::new(100.0),
            log_view: None,
            msd_upload: None,
            msd_min: Threshold::new(1e-13),
            msd_view: MsdView::empty(),
            rdf_upload: None,
            rdf_view: RdfView::empty(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn set_log_upload(&mut self, upload: RawUpload) {
        self.log_upload = Some(upload);
        self.rerun_log();
    }

    pub fn set_msd_upload(&mut self, upload: RawUpload) {
        self.msd_upload = Some(upload);
        self.rerun_msd();
    }

    pub fn set_rdf_upload(&mut self, upload: RawUpload) {
        self.rdf_upload = Some(upload);
        self.rerun_rdf();
    }

    /// Re-run the log pipeline after an upload or threshold change.
    pub fn rerun_log(&mut self) {
        match log_view(self.log_upload.as_ref(), self.log_min.get()) {
            Ok(view) => {
                if let Some(v) = &view {
                    log::info!("log pipeline: {} rows, {} charts", v.rows, v.charts.len());
                }
                self.log_view = view;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("log pipeline failed: {e:#}");
                self.log_view = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn rerun_msd(&mut self) {
        match msd_view(self.msd_upload.as_ref(), self.msd_min.get()) {
            Ok(view) => {
                log::info!("msd pipeline: {} series", view.chart.series.len());
                self.msd_view = view;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("msd pipeline failed: {e:#}");
                self.msd_view = MsdView::empty();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn rerun_rdf(&mut self) {
        match rdf_view(self.rdf_upload.as_ref()) {
            Ok(view) => {
                log::info!(
                    "rdf pipeline: {} + {} series",
                    view.rdf_chart.series.len(),
                    view.cn_chart.series.len()
                );
                self.rdf_view = view;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("rdf pipeline failed: {e:#}");
                self.rdf_view = RdfView::empty();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_disabled_means_no_filter() {
        let mut t = Threshold::new(100.0);
        assert_eq!(t.get(), None);
        t.enabled = true;
        t.value = 250.0;
        assert_eq!(t.get(), Some(250.0));
    }

    #[test]
    fn bad_upload_sets_status_and_clears_view() {
        let mut state = AppState::default();
        state.set_rdf_upload(RawUpload::new("rdf", b"garbage".to_vec()));

        assert!(state.status_message.is_some());
        assert!(state.rdf_view.rdf_chart.is_empty());
        assert!(state.rdf_view.cn_chart.is_empty());
    }

    #[test]
    fn threshold_rerun_updates_log_view() {
        let mut state = AppState::default();
        // 37-line header, header row, two data rows, 48-line footer.
        let mut text = String::new();
        for _ in 0..37 {
            text.push_str("x\n");
        }
        text.push_str("Step Time Temp Density KinEng PotEng TotEng Volume\n");
        text.push_str("0 0 300 1 1 1 1 1\n");
        text.push_str("1 500 301 1 1 1 1 1\n");
        for _ in 0..48 {
            text.push_str("y\n");
        }
        state.set_log_upload(RawUpload::new("log", text.into_bytes()));
        assert_eq!(state.log_view.as_ref().unwrap().rows, 2);

        state.log_min.enabled = true;
        state.log_min.value = 400.0;
        state.rerun_log();
        assert_eq!(state.log_view.as_ref().unwrap().rows, 1);
    }
}
