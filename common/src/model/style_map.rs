//! Applied style variables.
//!
//! A `StyleMap` is only ever produced whole, from a complete [`Selection`],
//! so it always carries exactly one value per [`Dimension`].

use std::collections::BTreeMap;
use std::fmt;

use crate::model::catalog::ArticleCatalog;
use crate::model::dimension::Dimension;
use crate::model::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    values: BTreeMap<Dimension, String>,
}

impl StyleMap {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            values: selection
                .iter()
                .map(|(dimension, option)| (dimension, option.value.clone()))
                .collect(),
        }
    }

    pub fn defaults(catalog: &ArticleCatalog) -> Self {
        Self::from_selection(&Selection::defaults(catalog))
    }

    pub fn get(&self, dimension: Dimension) -> &str {
        self.values.get(&dimension).map(String::as_str).unwrap_or_default()
    }

    #[cfg(test)]
    /// Looks a value up by CSS custom property name, e.g. `--font-size`.
    pub fn variable(&self, name: &str) -> Option<&str> {
        Dimension::from_css_variable(name).map(|dimension| self.get(dimension))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(variable name, value)` pairs in dimension order.
    pub fn variables(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values
            .iter()
            .map(|(dimension, value)| (dimension.css_variable(), value.as_str()))
    }

    /// Renders the map as an inline `style` attribute value.
    pub fn to_inline_style(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.variables().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_dimension() {
        let styles = StyleMap::defaults(&ArticleCatalog::default());
        assert_eq!(styles.len(), 5);
        assert_eq!(styles.variable("--font-family"), Some("Open Sans"));
        assert_eq!(styles.variable("--font-size"), Some("18px"));
        assert_eq!(styles.variable("--font-color"), Some("#000000"));
        assert_eq!(styles.variable("--bg-color"), Some("#FFFFFF"));
        assert_eq!(styles.variable("--container-width"), Some("1394px"));
        assert_eq!(styles.variable("--line-height"), None);
    }

    #[test]
    fn inline_style_lists_variables_in_dimension_order() {
        let styles = StyleMap::defaults(&ArticleCatalog::default());
        assert_eq!(
            styles.to_inline_style(),
            "--font-family: Open Sans; --font-size: 18px; --font-color: #000000; \
             --bg-color: #FFFFFF; --container-width: 1394px;"
        );
    }

    #[test]
    fn follows_selection_values() {
        let catalog = ArticleCatalog::default();
        let mut selection = Selection::defaults(&catalog);
        let narrow = catalog.find(Dimension::ContentWidth, "948px").unwrap().clone();
        selection.set(Dimension::ContentWidth, narrow);

        let styles = StyleMap::from_selection(&selection);
        assert_eq!(styles.get(Dimension::ContentWidth), "948px");
        assert_eq!(styles.get(Dimension::FontSize), "18px");
    }
}
