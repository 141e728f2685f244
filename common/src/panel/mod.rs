//! Settings panel state machine.
//!
//! The panel keeps two things apart: what the user is currently picking
//! (`selection`) and what the page shows (the `StyleMap` the container last
//! received). Only [`SettingsPanel::apply`] and [`SettingsPanel::reset`]
//! produce a `StyleMap`; picking an option never does.
//!
//! Visibility is a separate two-state machine driven by the arrow control and
//! by pointer-down events outside the panel. While the panel is open the host
//! must listen for those outside events, see
//! [`SettingsPanel::wants_outside_listener`].

use std::rc::Rc;

use crate::error::CatalogError;
use crate::model::article_option::ArticleOption;
use crate::model::catalog::ArticleCatalog;
use crate::model::dimension::Dimension;
use crate::model::selection::Selection;
use crate::model::style_map::StyleMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Closed => PanelVisibility::Open,
            PanelVisibility::Open => PanelVisibility::Closed,
        }
    }
}

pub struct SettingsPanel {
    catalog: Rc<ArticleCatalog>,
    selection: Selection,
    visibility: PanelVisibility,
}

impl SettingsPanel {
    pub fn new(catalog: Rc<ArticleCatalog>) -> Self {
        let selection = Selection::defaults(&catalog);
        Self {
            catalog,
            selection,
            visibility: PanelVisibility::Closed,
        }
    }

    pub fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self, dimension: Dimension) -> &ArticleOption {
        self.selection.get(dimension)
    }

    pub fn select(&mut self, dimension: Dimension, option: ArticleOption) {
        self.selection.set(dimension, option);
    }

    /// Selects the catalog option whose CSS value is `value`.
    pub fn select_value(&mut self, dimension: Dimension, value: &str) -> Result<(), CatalogError> {
        let option = self.catalog.find(dimension, value)?.clone();
        self.selection.set(dimension, option);
        Ok(())
    }

    /// Commits the current selection.
    pub fn apply(&self) -> StyleMap {
        StyleMap::from_selection(&self.selection)
    }

    /// Puts every dimension back to its catalog default and commits that.
    pub fn reset(&mut self) -> StyleMap {
        self.selection = Selection::defaults(&self.catalog);
        StyleMap::from_selection(&self.selection)
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    pub fn toggle(&mut self) -> PanelVisibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Handles a pointer-down anywhere in the document. Returns `true` when it
    /// closed the panel.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if self.is_open() && !inside {
            self.visibility = PanelVisibility::Closed;
            return true;
        }
        false
    }

    pub fn wants_outside_listener(&self) -> bool {
        self.is_open()
    }
}
