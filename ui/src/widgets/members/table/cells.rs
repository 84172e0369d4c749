//! Cell rendering functions for the members table.

use egui::{Checkbox, Ui};

use super::row::RowAction;

/// Renders a selection checkbox. Returns the new value if it was clicked.
#[inline]
pub fn render_checkbox_cell(ui: &mut Ui, checked: bool, hover: &str) -> Option<bool> {
    let mut value = checked;
    let response = ui.add(Checkbox::without_text(&mut value)).on_hover_text(hover);
    response.clicked().then_some(value)
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.add(egui::Label::new(text).truncate());
}

/// Renders the Edit and Delete buttons. Returns the clicked action, if any.
#[inline]
pub fn render_action_buttons(ui: &mut Ui) -> Option<RowAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Edit").on_hover_text("Edit this member").clicked() {
            action = Some(RowAction::Edit);
        }
        if ui
            .button(egui::RichText::new("Delete").color(ui.visuals().error_fg_color))
            .on_hover_text("Delete this member")
            .clicked()
        {
            action = Some(RowAction::Delete);
        }
    });

    action
}
