//! Table header rendering for the members table.

use egui::Ui;
use egui_extras::TableRow;

use super::cells::render_checkbox_cell;

/// Labels of the columns after the checkbox column.
const HEADERS: [&str; 4] = ["Name", "Email", "Role", "Actions"];

/// Renders the header row. Returns `true` if the select-all checkbox was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, all_selected: bool) -> bool {
    let mut toggled = false;
    header.col(|ui| {
        toggled = render_checkbox_cell(ui, all_selected, "Select all rows on this page").is_some();
    });

    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
    toggled
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
