use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A named group of documents of one entity type
///
/// Each resource exposed over HTTP implements this once. The generic
/// repositories and handlers are written against it, so products and
/// certifications share a single code path.
///
/// # Example
/// ```
/// use agrichain_api::domain::{Collection, Product};
///
/// assert_eq!(Product::NAME, "products");
/// assert_eq!(Product::LABEL, "Product");
/// ```
pub trait Collection: Send + Sync + 'static {
    /// Client supplied fields, used for both create and update bodies
    type Fields: Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static;

    /// Stored document as returned to clients
    type Record: Serialize + Clone + Send + Sync + 'static;

    /// Storage collection (table) name, also the URL segment
    const NAME: &'static str;

    /// Human readable entity name used in response messages
    const LABEL: &'static str;

    /// Assembles a stored record from its id and fields
    fn record(id: Uuid, fields: Self::Fields) -> Self::Record;
}

/// Validation hook run by the `ValidatedJson` extractor
///
/// The default accepts every payload.
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
