use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collection::{Collection, Validate};
use super::scalar;

/// Product fields accepted on create and update
///
/// Every field is optional. On update, absent fields leave the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(
        default,
        deserialize_with = "scalar::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// URI or path of the product image
    #[serde(
        default,
        deserialize_with = "scalar::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl Validate for ProductFields {}

/// Stored product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Collection for Product {
    type Fields = ProductFields;
    type Record = Product;

    const NAME: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn record(id: Uuid, fields: ProductFields) -> Product {
        Product { id, fields }
    }
}
