//! Small presentational building blocks used by the settings panel.

pub mod arrow_button;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;
