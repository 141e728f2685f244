//! The options catalog: every value the settings panel may offer, plus the
//! default for each dimension.
//!
//! A catalog is immutable once built and is handed to the components that need
//! it (the page container and the settings panel). [`ArticleCatalog::default`]
//! is the built-in set; [`ArticleCatalog::from_json`] reads a replacement from
//! a JSON document shaped like
//!
//! ```json
//! { "fontSize": { "options": [{ "title": "18px", "value": "18px", "className": "font-size-18" }], "default": "18px" }, ... }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::article_option::ArticleOption;
use crate::model::dimension::Dimension;

/// Ordered options for one dimension together with its default.
///
/// The default is guaranteed to be one of `options`, so looking it up never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionOptions {
    dimension: Dimension,
    options: Vec<ArticleOption>,
    default_index: usize,
}

impl DimensionOptions {
    pub fn new(
        dimension: Dimension,
        options: Vec<ArticleOption>,
        default_value: &str,
    ) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::EmptyDimension(dimension));
        }
        let default_index = options
            .iter()
            .position(|o| o.value == default_value)
            .ok_or_else(|| CatalogError::DefaultNotInOptions {
                dimension,
                value: default_value.to_string(),
            })?;

        Ok(Self {
            dimension,
            options,
            default_index,
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn options(&self) -> &[ArticleOption] {
        &self.options
    }

    pub fn default_option(&self) -> &ArticleOption {
        &self.options[self.default_index]
    }

    pub fn find(&self, value: &str) -> Option<&ArticleOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// One [`DimensionOptions`] per [`Dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct ArticleCatalog {
    font_family: DimensionOptions,
    font_size: DimensionOptions,
    font_color: DimensionOptions,
    background_color: DimensionOptions,
    content_width: DimensionOptions,
}

impl ArticleCatalog {
    /// Builds a catalog from one entry per dimension. Later entries for the
    /// same dimension replace earlier ones.
    pub fn from_dimensions(
        entries: impl IntoIterator<Item = DimensionOptions>,
    ) -> Result<Self, CatalogError> {
        let mut by_dimension: BTreeMap<Dimension, DimensionOptions> = entries
            .into_iter()
            .map(|entry| (entry.dimension, entry))
            .collect();

        let mut take = |dimension: Dimension| {
            by_dimension
                .remove(&dimension)
                .ok_or(CatalogError::MissingDimension(dimension))
        };

        Ok(Self {
            font_family: take(Dimension::FontFamily)?,
            font_size: take(Dimension::FontSize)?,
            font_color: take(Dimension::FontColor)?,
            background_color: take(Dimension::BackgroundColor)?,
            content_width: take(Dimension::ContentWidth)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    #[cfg(test)]
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns a copy of this catalog with one dimension swapped out.
    pub fn with_dimension(mut self, entry: DimensionOptions) -> Self {
        let dimension = entry.dimension;
        *self.slot_mut(dimension) = entry;
        self
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionOptions {
        match dimension {
            Dimension::FontFamily => &self.font_family,
            Dimension::FontSize => &self.font_size,
            Dimension::FontColor => &self.font_color,
            Dimension::BackgroundColor => &self.background_color,
            Dimension::ContentWidth => &self.content_width,
        }
    }

    pub fn options(&self, dimension: Dimension) -> &[ArticleOption] {
        self.dimension(dimension).options()
    }

    pub fn default_option(&self, dimension: Dimension) -> &ArticleOption {
        self.dimension(dimension).default_option()
    }

    /// Looks up an option by its CSS value.
    pub fn find(&self, dimension: Dimension, value: &str) -> Result<&ArticleOption, CatalogError> {
        self.dimension(dimension)
            .find(value)
            .ok_or_else(|| CatalogError::UnknownOption {
                dimension,
                value: value.to_string(),
            })
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut DimensionOptions {
        match dimension {
            Dimension::FontFamily => &mut self.font_family,
            Dimension::FontSize => &mut self.font_size,
            Dimension::FontColor => &mut self.font_color,
            Dimension::BackgroundColor => &mut self.background_color,
            Dimension::ContentWidth => &mut self.content_width,
        }
    }
}

impl Default for ArticleCatalog {
    fn default() -> Self {
        Self {
            font_family: built_in(
                Dimension::FontFamily,
                vec![
                    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
                    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
                    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
                    ArticleOption::new("Days One", "Days One", "days-one"),
                    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
                ],
            ),
            font_size: built_in(
                Dimension::FontSize,
                vec![
                    ArticleOption::new("18px", "18px", "font-size-18"),
                    ArticleOption::new("25px", "25px", "font-size-25"),
                    ArticleOption::new("38px", "38px", "font-size-38"),
                ],
            ),
            font_color: built_in(Dimension::FontColor, palette("font", false)),
            background_color: built_in(Dimension::BackgroundColor, palette("bg", true)),
            content_width: built_in(
                Dimension::ContentWidth,
                vec![
                    ArticleOption::new("Широкий", "1394px", "width-wide")
                        .with_option_class("option-wide"),
                    ArticleOption::new("Узкий", "948px", "width-narrow")
                        .with_option_class("option-narrow"),
                ],
            ),
        }
    }
}

/// The built-in lists always default to their first entry.
fn built_in(dimension: Dimension, options: Vec<ArticleOption>) -> DimensionOptions {
    DimensionOptions {
        dimension,
        options,
        default_index: 0,
    }
}

/// Shared colour set for font and background. Backgrounds start from white,
/// fonts from black.
fn palette(prefix: &str, light_first: bool) -> Vec<ArticleOption> {
    let mut colors = vec![
        ("Черный", "#000000", "black"),
        ("Белый", "#FFFFFF", "white"),
        ("Серый", "#C4C4C4", "gray"),
        ("Розовый", "#FEAFE8", "pink"),
        ("Ярко-розовый", "#FD24AF", "fuchsia"),
        ("Жёлтый", "#FFC802", "yellow"),
        ("Зелёный", "#80D994", "green"),
        ("Голубой", "#6FC1FD", "blue"),
        ("Фиолетовый", "#5F2AF9", "purple"),
    ];
    if light_first {
        colors.swap(0, 1);
    }

    colors
        .into_iter()
        .map(|(title, value, name)| {
            ArticleOption::new(title, value, &format!("{}-{}", prefix, name))
                .with_option_class(&format!("option-{}", name))
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DimensionDocument {
    options: Vec<ArticleOption>,
    default: String,
}

type CatalogDocument = BTreeMap<Dimension, DimensionDocument>;

impl TryFrom<CatalogDocument> for ArticleCatalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        let entries = document
            .into_iter()
            .map(|(dimension, doc)| DimensionOptions::new(dimension, doc.options, &doc.default))
            .collect::<Result<Vec<_>, _>>()?;
        ArticleCatalog::from_dimensions(entries)
    }
}

impl From<ArticleCatalog> for CatalogDocument {
    fn from(catalog: ArticleCatalog) -> Self {
        Dimension::all()
            .map(|dimension| {
                let entry = catalog.dimension(dimension);
                (
                    dimension,
                    DimensionDocument {
                        options: entry.options.clone(),
                        default: entry.default_option().value.clone(),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let catalog = ArticleCatalog::default();
        assert_eq!(catalog.default_option(Dimension::FontFamily).value, "Open Sans");
        assert_eq!(catalog.default_option(Dimension::FontSize).value, "18px");
        assert_eq!(catalog.default_option(Dimension::FontColor).value, "#000000");
        assert_eq!(catalog.default_option(Dimension::BackgroundColor).value, "#FFFFFF");
        assert_eq!(catalog.default_option(Dimension::ContentWidth).value, "1394px");
    }

    #[test]
    fn every_default_is_listed() {
        let catalog = ArticleCatalog::default();
        for dimension in Dimension::all() {
            let default = catalog.default_option(dimension);
            assert!(catalog.options(dimension).contains(default), "{dimension}");
        }
    }

    #[test]
    fn colour_palettes_share_values() {
        let catalog = ArticleCatalog::default();
        assert_eq!(catalog.options(Dimension::FontColor).len(), 9);
        assert_eq!(catalog.options(Dimension::BackgroundColor).len(), 9);
        assert_eq!(catalog.options(Dimension::BackgroundColor)[1].value, "#000000");
        assert_eq!(catalog.options(Dimension::FontColor)[0].class_name, "font-black");
        assert_eq!(catalog.options(Dimension::BackgroundColor)[0].class_name, "bg-white");
    }

    #[test]
    fn rejects_empty_dimension() {
        let err = DimensionOptions::new(Dimension::FontSize, vec![], "18px").unwrap_err();
        assert!(matches!(err, CatalogError::EmptyDimension(Dimension::FontSize)));
    }

    #[test]
    fn rejects_default_outside_options() {
        let err = DimensionOptions::new(
            Dimension::FontSize,
            vec![ArticleOption::new("18px", "18px", "font-size-18")],
            "20px",
        )
        .unwrap_err();
        match err {
            CatalogError::DefaultNotInOptions { dimension, value } => {
                assert_eq!(dimension, Dimension::FontSize);
                assert_eq!(value, "20px");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_dimension_is_reported() {
        let catalog = ArticleCatalog::default();
        let entries = Dimension::all()
            .filter(|d| *d != Dimension::ContentWidth)
            .map(|d| catalog.dimension(d).clone());
        let err = ArticleCatalog::from_dimensions(entries).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDimension(Dimension::ContentWidth)));
    }

    #[test]
    fn unknown_value_lookup_fails() {
        let catalog = ArticleCatalog::default();
        assert!(catalog.find(Dimension::FontSize, "25px").is_ok());
        let err = catalog.find(Dimension::FontSize, "99px").unwrap_err();
        assert_eq!(err.to_string(), "`99px` is not an option for fontSize");
    }

    #[test]
    fn with_dimension_replaces_one_entry() {
        let sizes = DimensionOptions::new(
            Dimension::FontSize,
            vec![
                ArticleOption::new("18px", "18px", "font-size-18"),
                ArticleOption::new("24px", "24px", "font-size-24"),
            ],
            "18px",
        )
        .unwrap();
        let catalog = ArticleCatalog::default().with_dimension(sizes);
        assert_eq!(catalog.options(Dimension::FontSize).len(), 2);
        assert_eq!(catalog.dimension(Dimension::FontSize).dimension(), Dimension::FontSize);
        assert_eq!(catalog.find(Dimension::FontSize, "24px").unwrap().title, "24px");
        assert_eq!(catalog.options(Dimension::FontFamily).len(), 5);
    }

    #[test]
    fn json_document_matches_built_in() {
        let catalog = ArticleCatalog::default();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"className\":\"font-size-18\""));
        assert_eq!(ArticleCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn json_with_bad_default_is_rejected() {
        let json = r##"{
            "fontFamily": { "options": [{ "title": "Ubuntu", "value": "Ubuntu", "className": "ubuntu" }], "default": "Ubuntu" },
            "fontSize": { "options": [{ "title": "18px", "value": "18px", "className": "font-size-18" }], "default": "16px" },
            "fontColor": { "options": [{ "title": "Черный", "value": "#000000", "className": "font-black" }], "default": "#000000" },
            "backgroundColor": { "options": [{ "title": "Белый", "value": "#FFFFFF", "className": "bg-white" }], "default": "#FFFFFF" },
            "contentWidth": { "options": [{ "title": "Узкий", "value": "948px", "className": "width-narrow" }], "default": "948px" }
        }"##;
        let err = ArticleCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DefaultNotInOptions { dimension: Dimension::FontSize, .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ArticleCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
