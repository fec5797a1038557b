use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A public site setting. Visibility flags are never serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingDto {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
    /// One of `string`, `number`, `boolean`, `json`, `image`.
    #[serde(rename = "type")]
    pub setting_type: String,
    /// One of `general`, `seo`, `social`, `appearance`, `contact`, `analytics`.
    pub group: String,
    pub label: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Every public setting flattened into a single `{key: value}` object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[schema(value_type = Object)]
pub struct SettingsObjectDto(pub serde_json::Map<String, serde_json::Value>);

#[cfg(test)]
mod tests {
    use utoipa::PartialSchema;

    use super::*;

    /// Tests that the flattened settings object is documented as a free-form object.
    #[test]
    fn settings_object_schema_is_object() {
        let schema = serde_json::to_value(SettingsObjectDto::schema()).unwrap();

        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn settings_object_serializes_transparently() {
        let mut map = serde_json::Map::new();
        map.insert("siteName".to_string(), serde_json::json!("Inkstand"));

        let value = serde_json::to_value(SettingsObjectDto(map)).unwrap();

        assert_eq!(value, serde_json::json!({ "siteName": "Inkstand" }));
    }
}
