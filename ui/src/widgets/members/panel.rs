//! Main panel for the members table.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.

use egui::{Color32, Frame, Margin, Response, Stroke, TextEdit, Ui};
use members_business::{
    BeginEditMemberCommand, ChangePageCommand, DeleteMemberCommand, DeleteSelectedMembersCommand,
    MemberId, MembersInput, MembersLoadCompute, MembersState, MembersViewCompute,
    SearchMembersCommand, ToggleAllOnPageCommand, ToggleMemberSelectionCommand,
};
use members_states::StateCtx;

use super::editor::show_edit_dialog;
use super::pagination::render_pagination;
use super::table::render_members_table;

/// Border color for Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCH_HINT: &str = "Search by name, email, or role";

/// Displays the search bar, the members table and its footer, plus the
/// "Edit Row" window while it is open.
pub fn members_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        render_search_bar(state_ctx, ui);
        ui.add_space(8.0);

        let loading = state_ctx
            .cached::<MembersLoadCompute>()
            .is_some_and(MembersLoadCompute::is_loading);
        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading members...");
            });
        }

        let view = state_ctx
            .cached::<MembersViewCompute>()
            .map(|compute| compute.view.clone())
            .unwrap_or_default();

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                render_members_table(state_ctx, ui, &view);
            });

        ui.add_space(8.0);
        render_pagination(state_ctx, ui, &view);
    });

    show_edit_dialog(state_ctx, ui.ctx());

    response.response
}

/// Search box bound to the search term of `MembersState`.
///
/// The typed text is kept in egui memory so its casing survives; it is reset
/// whenever the stored term no longer matches it (deletes clear the search).
fn render_search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let id = ui.make_persistent_id("members_search");
    let current = state_ctx.state::<MembersState>().search_term().to_owned();

    let mut text = ui
        .data_mut(|data| data.get_temp::<String>(id))
        .unwrap_or_default();
    if text.to_lowercase() != current {
        text = current;
    }

    let response = ui
        .horizontal(|ui| {
            let label = ui.label(SEARCH_LABEL);
            ui.add(
                TextEdit::singleline(&mut text)
                    .hint_text(SEARCH_HINT)
                    .desired_width(f32::INFINITY),
            )
            .labelled_by(label.id)
        })
        .inner;
    if response.changed() {
        trigger_search(state_ctx, ui, text.clone());
    }

    ui.data_mut(|data| data.insert_temp(id, text));
}

fn trigger_search(state_ctx: &mut StateCtx, ui: &Ui, term: String) {
    state_ctx.update::<MembersInput>(|input| input.search_term = Some(term));
    state_ctx.dispatch::<SearchMembersCommand>();
    ui.ctx().request_repaint();
}

// The view is re-derived at the end of the frame, so callers request a
// repaint after dispatching.

pub(crate) fn trigger_toggle_row(state_ctx: &mut StateCtx, id: MemberId, checked: bool) {
    state_ctx.update::<MembersInput>(|input| {
        input.target = Some(id);
        input.checked = checked;
    });
    state_ctx.dispatch::<ToggleMemberSelectionCommand>();
}

pub(crate) fn trigger_toggle_all(state_ctx: &mut StateCtx) {
    state_ctx.dispatch::<ToggleAllOnPageCommand>();
}

pub(crate) fn trigger_delete_row(state_ctx: &mut StateCtx, id: MemberId) {
    state_ctx.update::<MembersInput>(|input| input.target = Some(id));
    state_ctx.dispatch::<DeleteMemberCommand>();
}

pub(crate) fn trigger_delete_selected(state_ctx: &mut StateCtx) {
    state_ctx.dispatch::<DeleteSelectedMembersCommand>();
}

pub(crate) fn trigger_change_page(state_ctx: &mut StateCtx, page: usize) {
    state_ctx.update::<MembersInput>(|input| input.page = Some(page));
    state_ctx.dispatch::<ChangePageCommand>();
}

pub(crate) fn trigger_begin_edit(state_ctx: &mut StateCtx, id: MemberId) {
    state_ctx.update::<MembersInput>(|input| input.target = Some(id));
    state_ctx.dispatch::<BeginEditMemberCommand>();
}
