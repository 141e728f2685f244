use thiserror::Error;

use crate::model::dimension::Dimension;

/// Failures building or querying an [`ArticleCatalog`](crate::model::catalog::ArticleCatalog).
///
/// None of these can be triggered from the panel controls, which only offer
/// catalog members. They surface when a catalog is assembled from outside
/// data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no entry for {0}")]
    MissingDimension(Dimension),

    #[error("dimension {0} has no options")]
    EmptyDimension(Dimension),

    #[error("default `{value}` for {dimension} is not one of its options")]
    DefaultNotInOptions { dimension: Dimension, value: String },

    #[error("`{value}` is not an option for {dimension}")]
    UnknownOption { dimension: Dimension, value: String },

    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}
