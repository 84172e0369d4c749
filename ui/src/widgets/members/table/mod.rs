//! Table components for the members table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header with the select-all checkbox
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use members_business::{MembersState, MembersView};
use members_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{MemberRowData, RowAction, render_member_row};

use super::panel::{
    trigger_begin_edit, trigger_delete_row, trigger_toggle_all, trigger_toggle_row,
};

/// Renders the current page of `view` and dispatches whatever the user clicked.
pub fn render_members_table(state_ctx: &mut StateCtx, ui: &mut Ui, view: &MembersView) {
    let state = state_ctx.state::<MembersState>();
    let rows: Vec<MemberRowData<'_>> = view
        .rows
        .iter()
        .map(|member| MemberRowData {
            member,
            is_selected: state.is_selected(member.id),
        })
        .collect();

    let mut toggle_all = false;
    let mut toggled = None;
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("members_table")
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            toggle_all = render_table_header(&mut header, view.all_page_rows_selected);
        })
        .body(|mut body| {
            for data in &rows {
                body.row(ROW_HEIGHT, |mut row| {
                    let result = render_member_row(&mut row, data);
                    if let Some(checked) = result.checked {
                        toggled = Some((data.member.id, checked));
                    }
                    if let Some(row_action) = result.action {
                        action = Some((data.member.id, row_action));
                    }
                });
            }
        });

    if toggle_all || toggled.is_some() || action.is_some() {
        ui.ctx().request_repaint();
    }

    if toggle_all {
        trigger_toggle_all(state_ctx);
    }
    if let Some((id, checked)) = toggled {
        trigger_toggle_row(state_ctx, id, checked);
    }
    match action {
        Some((id, RowAction::Edit)) => trigger_begin_edit(state_ctx, id),
        Some((id, RowAction::Delete)) => trigger_delete_row(state_ctx, id),
        None => {}
    }
}
