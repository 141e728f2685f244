//! Defines the properties for the `SettingsPanelComponent`.

use std::rc::Rc;

use reader_common::model::catalog::ArticleCatalog;
use reader_common::model::style_map::StyleMap;
use yew::prelude::*;

/// Properties for the `SettingsPanelComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    /// Options offered by every control, and the values `Reset` returns to.
    /// A different catalog rebuilds the panel state from its defaults.
    pub catalog: Rc<ArticleCatalog>,

    /// Receives a complete `StyleMap` each time the user applies or resets.
    /// Picking an option in a control does not call it.
    pub on_change: Callback<StyleMap>,
}
