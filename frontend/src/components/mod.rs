pub mod article;
pub mod primitives;
pub mod settings_panel;
