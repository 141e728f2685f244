//! Component state for the settings panel.
//!
//! The interaction logic lives in `reader_common::panel::SettingsPanel`; this
//! struct adds what only exists in the browser: the DOM node that counts as
//! "inside" the panel and the document listener used to spot clicks outside
//! it.

use std::rc::Rc;

use gloo_events::EventListener;
use reader_common::model::catalog::ArticleCatalog;
use reader_common::panel::SettingsPanel;
use yew::prelude::*;

/// Main state container for the `SettingsPanelComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct SettingsPanelComponent {
    /// Selection, visibility and the catalog it was built from.
    pub panel: SettingsPanel,

    /// Wrapper around the arrow control and the sidebar. Pointer-downs on any
    /// node under it are inside the panel.
    pub container_ref: NodeRef,

    /// Document `mousedown` subscription. `Some` exactly while the panel is
    /// open; dropping it removes the listener.
    pub outside_listener: Option<EventListener>,
}

impl SettingsPanelComponent {
    pub fn new(catalog: Rc<ArticleCatalog>) -> Self {
        Self {
            panel: SettingsPanel::new(catalog),
            container_ref: NodeRef::default(),
            outside_listener: None,
        }
    }
}
