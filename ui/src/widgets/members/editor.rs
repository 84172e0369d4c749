//! The "Edit Row" window.
//!
//! Each keystroke is written back into the edit buffer of `MembersState`
//! with `edit_field`; there is no local draft and no validation.

use egui::{Align2, Grid, TextEdit, Window};
use members_business::{CancelEditMemberCommand, CommitEditMemberCommand, EditField, MembersState};
use members_states::StateCtx;

const FIELD_WIDTH: f32 = 240.0;

/// Shows the editor while `MembersState` has an open edit buffer.
///
/// Save dispatches `CommitEditMemberCommand`; Cancel and the window's close
/// button dispatch `CancelEditMemberCommand`.
pub fn show_edit_dialog(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    if !state_ctx.state::<MembersState>().is_editor_open() {
        return;
    }

    let Some(buffer) = state_ctx.state::<MembersState>().edit_buffer().cloned() else {
        return;
    };

    let mut open = true;
    let mut save = false;
    let mut cancel = false;
    let mut edits = Vec::new();

    Window::new("Edit Row")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            Grid::new("edit_row_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (field, label, mut value) in [
                        (EditField::Name, "Name", buffer.name),
                        (EditField::Email, "Email", buffer.email),
                        (EditField::Role, "Role", buffer.role),
                    ] {
                        let label = ui.label(label);
                        let response = ui
                            .add(TextEdit::singleline(&mut value).desired_width(FIELD_WIDTH))
                            .labelled_by(label.id);
                        if response.changed() {
                            edits.push((field, value));
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                ui.add_space(8.0);
                if ui.button("Save").clicked() {
                    save = true;
                }
            });
        });

    if !edits.is_empty() {
        state_ctx.update::<MembersState>(|state| {
            for (field, value) in edits {
                state.edit_field(field, value);
            }
        });
    }

    if save {
        state_ctx.dispatch::<CommitEditMemberCommand>();
    } else if cancel || !open {
        state_ctx.dispatch::<CancelEditMemberCommand>();
    } else {
        return;
    }
    ctx.request_repaint();
}
