use std::time::Duration;

use members_business::{LoadMembersCommand, MembersLoadCompute};

use crate::{state::State, widgets};

/// Repaint interval until the member list load finishes.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct MembersApp {
    state: State,
}

impl MembersApp {
    /// Called once before the first frame; starts loading the member list.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch_async::<LoadMembersCommand>();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for MembersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::members_panel(&mut self.state.ctx, ui);
        });

        // Re-derive the view for the next frame
        self.state.ctx.run_computed();

        // Results arrive through the updater, which does not wake egui.
        let finished = self
            .state
            .ctx
            .cached::<MembersLoadCompute>()
            .is_none_or(MembersLoadCompute::is_finished);
        if !finished {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}
