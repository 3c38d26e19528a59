use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collection::{Collection, Validate};
use super::scalar;

/// Certification fields accepted on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationFields {
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
    #[serde(
        default,
        deserialize_with = "scalar::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Validate for CertificationFields {}

/// Stored certification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: CertificationFields,
}

impl Collection for Certification {
    type Fields = CertificationFields;
    type Record = Certification;

    const NAME: &'static str = "certifications";
    const LABEL: &'static str = "Certification";

    fn record(id: Uuid, fields: CertificationFields) -> Certification {
        Certification { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_url_uses_camel_case_on_the_wire() {
        let fields: CertificationFields = serde_json::from_value(json!({
            "name": "Organic",
            "imageUrl": "https://example.com/organic.png"
        }))
        .unwrap();

        assert_eq!(
            fields.image_url.as_deref(),
            Some("https://example.com/organic.png")
        );

        let value = serde_json::to_value(Certification::record(Uuid::nil(), fields)).unwrap();
        assert_eq!(value["imageUrl"], "https://example.com/organic.png");
        assert!(value.get("image_url").is_none());
    }
}
