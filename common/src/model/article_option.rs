use serde::{Deserialize, Serialize};

/// One selectable value for a [`Dimension`](crate::model::dimension::Dimension).
///
/// `value` is what ends up in the CSS custom property; `title` is what the
/// user reads in the control. `class_name` lets the control preview the
/// option (a font face, a colour swatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOption {
    pub title: String,
    pub value: String,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_class_name: Option<String>,
}

impl ArticleOption {
    pub fn new(title: &str, value: &str, class_name: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            class_name: class_name.to_string(),
            option_class_name: None,
        }
    }

    pub fn with_option_class(mut self, option_class_name: &str) -> Self {
        self.option_class_name = Some(option_class_name.to_string());
        self
    }
}
