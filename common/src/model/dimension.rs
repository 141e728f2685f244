use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// How a dimension is presented in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Select,
    RadioGroup,
}

/// One configurable visual aspect of the page.
///
/// The declaration order is the order in which controls are rendered and in
/// which style variables are written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Dimension {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Dimension {
    pub fn all() -> impl Iterator<Item = Dimension> {
        Dimension::iter()
    }

    /// Name of the CSS custom property driven by this dimension.
    pub fn css_variable(self) -> &'static str {
        match self {
            Dimension::FontFamily => "--font-family",
            Dimension::FontSize => "--font-size",
            Dimension::FontColor => "--font-color",
            Dimension::BackgroundColor => "--bg-color",
            Dimension::ContentWidth => "--container-width",
        }
    }

    pub fn from_css_variable(name: &str) -> Option<Dimension> {
        Dimension::iter().find(|d| d.css_variable() == name)
    }

    /// Control heading shown in the panel.
    pub fn title(self) -> &'static str {
        match self {
            Dimension::FontFamily => "ШРИФТ",
            Dimension::FontSize => "РАЗМЕР ШРИФТА",
            Dimension::FontColor => "ЦВЕТ ШРИФТА",
            Dimension::BackgroundColor => "ЦВЕТ ФОНА",
            Dimension::ContentWidth => "ШИРИНА КОНТЕНТА",
        }
    }

    pub fn control_kind(self) -> ControlKind {
        match self {
            Dimension::FontSize => ControlKind::RadioGroup,
            _ => ControlKind::Select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_are_distinct_and_resolvable() {
        let names: Vec<&str> = Dimension::all().map(Dimension::css_variable).collect();
        assert_eq!(names.len(), 5);
        for name in &names {
            let dimension = Dimension::from_css_variable(name).unwrap();
            assert_eq!(dimension.css_variable(), *name);
        }
        assert_eq!(Dimension::from_css_variable("--line-height"), None);
    }

    #[test]
    fn only_font_size_is_a_radio_group() {
        let radios: Vec<Dimension> = Dimension::all()
            .filter(|d| d.control_kind() == ControlKind::RadioGroup)
            .collect();
        assert_eq!(radios, vec![Dimension::FontSize]);
    }

    #[test]
    fn display_uses_camel_case() {
        assert_eq!(Dimension::BackgroundColor.to_string(), "backgroundColor");
    }
}
