//! Members domain module.
//!
//! This module is the single home for:
//! - the member record and its wire format
//! - `MembersState`, the controller state behind the table and row editor
//! - `MembersViewCompute`, the cached page derived from that state
//! - the workflow commands the UI dispatches, and the load command
//!
//! UI code under `ui/src/widgets/**` should not define domain `State`/`Compute`/`Command`.
//! It reads via `ctx.cached::<T>()`/`ctx.state::<T>()` and triggers changes via `ctx.dispatch::<Cmd>()`.

pub mod api;
pub mod load_compute;
pub mod record;
pub mod state;
pub mod view;
pub mod workflow_commands;

pub use api::{MembersApiError, fetch_members};
pub use load_compute::{LoadMembersCommand, MembersLoadCompute, MembersLoadResult};
pub use record::{Member, MemberId};
pub use state::{EditField, MembersState};
pub use view::{MembersView, MembersViewCompute, PAGE_SIZE, derive_view, page_bounds, total_pages};
pub use workflow_commands::{
    BeginEditMemberCommand, CancelEditMemberCommand, ChangePageCommand, CommitEditMemberCommand,
    DeleteMemberCommand, DeleteSelectedMembersCommand, MembersInput, SearchMembersCommand,
    ToggleAllOnPageCommand, ToggleMemberSelectionCommand,
};
