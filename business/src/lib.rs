//! Business layer of the members admin table: records, controller state,
//! derived view and the HTTP load.

mod config;
pub mod http;
pub mod members;

use members_states::StateCtx;

pub use config::{BusinessConfig, DEFAULT_MEMBERS_URL};
pub use members::*;

/// Register every state, compute and command of the members table.
pub fn register_members(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(MembersState::new());
    ctx.add_state(MembersInput::default());

    ctx.record_compute(MembersViewCompute::default());
    ctx.record_compute(MembersLoadCompute::default());

    ctx.record_command(SearchMembersCommand);
    ctx.record_command(ToggleMemberSelectionCommand);
    ctx.record_command(ToggleAllOnPageCommand);
    ctx.record_command(DeleteMemberCommand);
    ctx.record_command(DeleteSelectedMembersCommand);
    ctx.record_command(ChangePageCommand);
    ctx.record_command(BeginEditMemberCommand);
    ctx.record_command(CommitEditMemberCommand);
    ctx.record_command(CancelEditMemberCommand);

    ctx.record_async_command(LoadMembersCommand);
}
