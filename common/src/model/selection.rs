use crate::model::article_option::ArticleOption;
use crate::model::catalog::ArticleCatalog;
use crate::model::dimension::Dimension;

/// One chosen option per dimension.
///
/// The panel edits a `Selection` freely; nothing reaches the page until it is
/// turned into a [`StyleMap`](crate::model::style_map::StyleMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    font_family: ArticleOption,
    font_size: ArticleOption,
    font_color: ArticleOption,
    background_color: ArticleOption,
    content_width: ArticleOption,
}

impl Selection {
    pub fn defaults(catalog: &ArticleCatalog) -> Self {
        let pick = |dimension| catalog.default_option(dimension).clone();
        Self {
            font_family: pick(Dimension::FontFamily),
            font_size: pick(Dimension::FontSize),
            font_color: pick(Dimension::FontColor),
            background_color: pick(Dimension::BackgroundColor),
            content_width: pick(Dimension::ContentWidth),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &ArticleOption {
        match dimension {
            Dimension::FontFamily => &self.font_family,
            Dimension::FontSize => &self.font_size,
            Dimension::FontColor => &self.font_color,
            Dimension::BackgroundColor => &self.background_color,
            Dimension::ContentWidth => &self.content_width,
        }
    }

    pub fn set(&mut self, dimension: Dimension, option: ArticleOption) {
        let slot = match dimension {
            Dimension::FontFamily => &mut self.font_family,
            Dimension::FontSize => &mut self.font_size,
            Dimension::FontColor => &mut self.font_color,
            Dimension::BackgroundColor => &mut self.background_color,
            Dimension::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &ArticleOption)> {
        Dimension::all().map(move |dimension| (dimension, self.get(dimension)))
    }
}
