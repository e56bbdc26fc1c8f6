pub mod date_picker;
pub mod item_row;
