//! Category Entity
//!
//! Product categories. `value` is the machine-readable slug and must be
//! unique across all categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{is_blank, Entity, Resource};
use crate::form::ValidationError;

/// A product category as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-generated identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display label
    pub name: String,
    /// Unique slug, e.g. `frozen-products`
    pub value: String,
    /// Server-derived label, mirrors `name` on most deployments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
            label: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Editable category fields (create body)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
        }
    }
}

/// Partial category update body; absent fields are left untouched server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CategoryDraft> for CategoryPatch {
    fn from(draft: CategoryDraft) -> Self {
        Self {
            name: Some(draft.name),
            value: Some(draft.value),
            description: Some(draft.description),
        }
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Resource for Category {
    type Draft = CategoryDraft;
    type Patch = CategoryPatch;

    const COLLECTION: &'static str = "categories";
    const SINGULAR: &'static str = "category";
    const LABEL: &'static str = "Category";

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            value: self.value.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate<'a, I>(draft: &CategoryDraft, existing: I, editing: Option<&String>) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        if is_blank(&draft.name) || is_blank(&draft.value) {
            return Err(ValidationError::Required("Name and value are required"));
        }

        // Exact match on the slug, the server does not normalize it.
        let clash = existing
            .into_iter()
            .any(|cat| cat.value == draft.value && Some(&cat.id) != editing);
        if clash {
            return Err(ValidationError::Duplicate {
                label: Self::LABEL,
                field: "value",
                value: draft.value.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dairy() -> Category {
        Category::new("1", "Dairy", "dairy")
    }

    #[test]
    fn test_deserialize_server_shape() {
        let json = r#"{
            "_id": "665f1",
            "name": "Frozen",
            "value": "frozen",
            "label": "Frozen",
            "isActive": false,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z"
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, "665f1");
        assert_eq!(cat.value, "frozen");
        assert!(!cat.is_active);
        assert!(cat.description.is_none());
        assert!(cat.created_at.is_some());
    }

    #[test]
    fn test_deserialize_plain_id_alias() {
        let cat: Category = serde_json::from_str(r#"{"id":"a1","name":"Frozen","value":"frozen"}"#).unwrap();
        assert_eq!(cat.id(), "a1");
        assert!(cat.is_active);
    }

    #[test]
    fn test_to_draft_fills_missing_description() {
        let draft = dairy().to_draft();
        assert_eq!(draft, CategoryDraft::new("Dairy", "dairy"));
    }

    #[test]
    fn test_patch_from_draft_serializes_all_fields() {
        let patch = CategoryPatch::from(CategoryDraft::new("Dairy", "dairy"));
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Dairy", "value": "dairy", "description": ""}));

        let empty = serde_json::to_value(CategoryPatch::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_validate_requires_name_and_value() {
        let none: Vec<Category> = Vec::new();
        let err = Category::validate(&CategoryDraft::new("  ", "x"), &none, None).unwrap_err();
        assert_eq!(err.to_string(), "Name and value are required");
        assert!(Category::validate(&CategoryDraft::new("Dairy", "\t"), &none, None).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_value() {
        let existing = vec![dairy()];
        let err = Category::validate(&CategoryDraft::new("Dairy2", "dairy"), &existing, None).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { field: "value", .. }));
    }

    #[test]
    fn test_validate_value_match_is_case_sensitive() {
        let existing = vec![dairy()];
        assert!(Category::validate(&CategoryDraft::new("Dairy", "Dairy"), &existing, None).is_ok());
    }

    #[test]
    fn test_validate_allows_self_match_when_editing() {
        let existing = vec![dairy(), Category::new("2", "Frozen", "frozen")];
        let id = "1".to_string();
        assert!(Category::validate(&CategoryDraft::new("Dairy products", "dairy"), &existing, Some(&id)).is_ok());
        assert!(Category::validate(&CategoryDraft::new("Dairy", "frozen"), &existing, Some(&id)).is_err());
    }
}
