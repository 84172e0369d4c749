//! Members table widgets.
//!
//! - `panel`: search bar, table and footer laid out together
//! - `table`: table rendering components (columns, header, row, cells)
//! - `pagination`: "Delete Selected" and the page buttons
//! - `editor`: the "Edit Row" window
//!
//! Widgets only read `MembersState`/`MembersViewCompute` and dispatch the
//! workflow commands; they own no domain state.

mod editor;
mod pagination;
mod panel;
pub mod table;

pub use editor::show_edit_dialog;
pub use panel::members_panel;
