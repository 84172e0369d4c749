//! Column definitions for the members table.

use egui_extras::Column;

pub const CHECKBOX_WIDTH: f32 = 32.0;
pub const ROLE_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration, in order:
/// - selection checkbox (fixed)
/// - Name (resizable)
/// - Email (fills remaining space)
/// - Role (fixed)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(CHECKBOX_WIDTH),
        Column::initial(180.0).at_least(100.0).resizable(true),
        Column::remainder().at_least(160.0),
        Column::exact(ROLE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
