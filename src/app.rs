use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MdScopeApp {
    pub state: AppState,
}

impl Default for MdScopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for MdScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + tab selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the active pipeline's view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Log => panels::log_tab(ui, &mut self.state),
            Tab::Msd => panels::msd_tab(ui, &mut self.state),
            Tab::Rdf => panels::rdf_tab(ui, &mut self.state),
        });
    }
}
