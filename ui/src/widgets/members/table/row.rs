//! Row rendering for the members table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use members_business::Member;

use super::cells::{render_action_buttons, render_checkbox_cell, render_text_cell};

/// Per-row button the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Data needed to render a member row.
pub struct MemberRowData<'a> {
    pub member: &'a Member,
    pub is_selected: bool,
}

/// Result of rendering a member row.
#[derive(Debug, Default)]
pub struct MemberRowResult {
    /// New checkbox value when it was clicked this frame.
    pub checked: Option<bool>,
    pub action: Option<RowAction>,
}

/// Renders one member: checkbox, name, email, role and the action buttons.
/// Selected rows are highlighted.
#[inline]
pub fn render_member_row(row: &mut TableRow<'_, '_>, data: &MemberRowData<'_>) -> MemberRowResult {
    let mut result = MemberRowResult::default();
    row.set_selected(data.is_selected);

    row.col(|ui| {
        result.checked = render_checkbox_cell(ui, data.is_selected, "Select row");
        draw_cell_bottom_border(ui);
    });

    for text in [&data.member.name, &data.member.email, &data.member.role] {
        row.col(|ui| {
            render_text_cell(ui, text);
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        result.action = render_action_buttons(ui);
        draw_cell_bottom_border(ui);
    });

    result
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
