//! Host-page configuration.
//!
//! The only setting is the options catalog. A page may embed one as
//!
//! ```html
//! <script type="application/json" id="article-catalog">{ ... }</script>
//! ```
//!
//! and it replaces the built-in catalog. Anything unreadable falls back to
//! `ArticleCatalog::default()` with a console warning.

use gloo_console::{log, warn};
use reader_common::model::catalog::ArticleCatalog;
use web_sys::{Document, Element};

/// Element id the application mounts into. `body` is used when it is missing.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Element id of the optional JSON catalog.
pub const CATALOG_ELEMENT_ID: &str = "article-catalog";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn mount_point() -> Option<Element> {
    document()?.get_element_by_id(ROOT_ELEMENT_ID)
}

pub fn load_catalog() -> ArticleCatalog {
    let Some(json) = document()
        .and_then(|d| d.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|e| e.text_content())
    else {
        return ArticleCatalog::default();
    };

    catalog_or_default(&json)
}

fn catalog_or_default(json: &str) -> ArticleCatalog {
    match ArticleCatalog::from_json(json) {
        Ok(catalog) => {
            log!("using article catalog from host page");
            catalog
        }
        Err(err) => {
            warn!(format!(
                "ignoring #{}: {}; using built-in catalog",
                CATALOG_ELEMENT_ID, err
            ));
            ArticleCatalog::default()
        }
    }
}
