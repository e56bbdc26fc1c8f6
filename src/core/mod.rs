pub mod date;
pub mod form;
pub mod item;
pub mod list;
pub mod pop;
