mod members;

pub use members::{members_panel, show_edit_dialog};
