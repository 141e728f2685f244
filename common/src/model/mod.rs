pub mod article_option;
pub mod catalog;
pub mod dimension;
pub mod selection;
pub mod style_map;
