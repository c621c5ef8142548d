//! Field schema provider port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::registration::StakeholderCategory;

use super::ApiError;

/// The kind of control a field definition renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Password,
    Textarea,
    Select,
    MultiSelect,
    Number,
}

/// One field definition as supplied by the schema endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub helper_text: Option<String>,
}

/// A stakeholder category option from `GET /schema/user-types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeOption {
    pub value: String,
    pub label: String,
}

/// Port supplying field definitions per step, dynamically.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Field definitions for step 1 and the common category block.
    async fn common_fields(&self) -> Result<Vec<FieldDef>, ApiError>;

    /// The stakeholder category list.
    async fn user_types(&self) -> Result<Vec<UserTypeOption>, ApiError>;

    /// Field definitions for the step-3 detail form of one category.
    async fn user_type_fields(
        &self,
        category: StakeholderCategory,
    ) -> Result<Vec<FieldDef>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn SchemaProvider) {}
    }

    #[test]
    fn field_def_deserializes_with_sparse_fields() {
        let def: FieldDef = serde_json::from_str(
            r#"{"name":"full_name","label":"Full Name","type":"text","required":true}"#,
        )
        .unwrap();
        assert_eq!(def.field_type, FieldType::Text);
        assert!(def.options.is_empty());
        assert!(def.placeholder.is_none());
    }
}
