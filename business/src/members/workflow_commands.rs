//! Workflow commands for the members table.
//!
//! UI code never mutates [`MembersState`] directly. It follows the pattern:
//! - fill [`MembersInput`] via `ctx.update::<MembersInput>(...)`
//! - dispatch a command via `ctx.dispatch::<Command>()`
//! - read back via `ctx.cached::<MembersViewCompute>()` or `ctx.state::<MembersState>()`
//!
//! Inputs are taken out of [`MembersInput`] when consumed, so a stale value is
//! never replayed by a later dispatch.

use std::any::Any;

use members_states::{Command, DepMut, State, Updater, state_assign_impl};

use super::record::MemberId;
use super::state::MembersState;

/// Parameters for the member commands, set by the UI before dispatching.
#[derive(Debug, Clone, Default)]
pub struct MembersInput {
    /// New search text (for `SearchMembersCommand`).
    pub search_term: Option<String>,

    /// Row the command applies to (selection, delete, edit).
    pub target: Option<MemberId>,

    /// Checkbox value for `ToggleMemberSelectionCommand`.
    pub checked: bool,

    /// Requested page (for `ChangePageCommand`).
    pub page: Option<usize>,
}

impl State for MembersInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

fn take_target(deps: &mut DepMut<'_>) -> Option<MemberId> {
    deps.state_mut::<MembersInput>().target.take()
}

#[derive(Debug, Default)]
pub struct SearchMembersCommand;

impl Command for SearchMembersCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let Some(term) = deps.state_mut::<MembersInput>().search_term.take() else {
            return;
        };
        log::debug!("search members: {term:?}");
        deps.state_mut::<MembersState>().search(&term);
    }
}

/// Set one row's checkbox to `MembersInput.checked`.
#[derive(Debug, Default)]
pub struct ToggleMemberSelectionCommand;

impl Command for ToggleMemberSelectionCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let Some(id) = take_target(deps) else {
            return;
        };
        let checked = deps.state::<MembersInput>().checked;
        deps.state_mut::<MembersState>()
            .toggle_row_selection(id, checked);
    }
}

#[derive(Debug, Default)]
pub struct ToggleAllOnPageCommand;

impl Command for ToggleAllOnPageCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        deps.state_mut::<MembersState>().toggle_all_on_page();
    }
}

#[derive(Debug, Default)]
pub struct DeleteMemberCommand;

impl Command for DeleteMemberCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let Some(id) = take_target(deps) else {
            return;
        };
        log::info!("delete member {id}");
        deps.state_mut::<MembersState>().delete_row(id);
    }
}

#[derive(Debug, Default)]
pub struct DeleteSelectedMembersCommand;

impl Command for DeleteSelectedMembersCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let state = deps.state_mut::<MembersState>();
        log::info!("delete {} selected members", state.selected_count());
        state.delete_selected();
    }
}

#[derive(Debug, Default)]
pub struct ChangePageCommand;

impl Command for ChangePageCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let Some(page) = deps.state_mut::<MembersInput>().page.take() else {
            return;
        };
        log::debug!("change page to {page}");
        deps.state_mut::<MembersState>().change_page(page);
    }
}

/// Open the row editor on `MembersInput.target`.
#[derive(Debug, Default)]
pub struct BeginEditMemberCommand;

impl Command for BeginEditMemberCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let Some(id) = take_target(deps) else {
            return;
        };
        deps.state_mut::<MembersState>().begin_edit(id);
    }
}

#[derive(Debug, Default)]
pub struct CommitEditMemberCommand;

impl Command for CommitEditMemberCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        let state = deps.state_mut::<MembersState>();
        if let Some(buffer) = state.edit_buffer() {
            log::info!("save member {}", buffer.id);
        }
        state.commit_edit();
    }
}

#[derive(Debug, Default)]
pub struct CancelEditMemberCommand;

impl Command for CancelEditMemberCommand {
    fn run(&self, deps: &mut DepMut<'_>, _updater: &Updater) {
        deps.state_mut::<MembersState>().cancel_edit();
    }
}
