//! Branch Entity
//!
//! Physical branches. Names are unique case-insensitively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{is_blank, Entity, Resource};
use crate::form::ValidationError;

/// A branch as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Server-generated identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
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

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            address: None,
            phone: None,
            email: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Editable branch fields (create body)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl BranchDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial branch update body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<BranchDraft> for BranchPatch {
    fn from(draft: BranchDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            address: Some(draft.address),
            phone: Some(draft.phone),
            email: Some(draft.email),
        }
    }
}

impl Entity for Branch {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Resource for Branch {
    type Draft = BranchDraft;
    type Patch = BranchPatch;

    const COLLECTION: &'static str = "branches";
    const SINGULAR: &'static str = "branch";
    const LABEL: &'static str = "Branch";

    fn to_draft(&self) -> BranchDraft {
        BranchDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        }
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate<'a, I>(draft: &BranchDraft, existing: I, editing: Option<&String>) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        if is_blank(&draft.name) {
            return Err(ValidationError::Required("Branch name is required"));
        }

        let wanted = draft.name.to_lowercase();
        let clash = existing
            .into_iter()
            .any(|branch| branch.name.to_lowercase() == wanted && Some(&branch.id) != editing);
        if clash {
            return Err(ValidationError::Duplicate {
                label: Self::LABEL,
                field: "name",
                value: draft.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches() -> Vec<Branch> {
        vec![Branch::new("b1", "Downtown"), Branch::new("b2", "Airport")]
    }

    #[test]
    fn test_deserialize_with_contact_fields() {
        let json = r#"{
            "_id": "b9",
            "name": "Harbor",
            "address": "1 Pier Rd",
            "phone": "+1 555 0100",
            "email": "harbor@example.com",
            "isActive": true
        }"#;
        let branch: Branch = serde_json::from_str(json).unwrap();
        assert_eq!(branch.id(), "b9");
        assert_eq!(branch.address.as_deref(), Some("1 Pier Rd"));
        assert!(branch.description.is_none());
    }

    #[test]
    fn test_to_draft_seeds_all_fields() {
        let mut branch = Branch::new("b1", "Downtown");
        branch.email = Some("dt@example.com".into());
        let draft = branch.to_draft();
        assert_eq!(draft.name, "Downtown");
        assert_eq!(draft.email, "dt@example.com");
        assert_eq!(draft.phone, "");
    }

    #[test]
    fn test_validate_requires_name() {
        let err = Branch::validate(&BranchDraft::named("   "), &branches(), None).unwrap_err();
        assert_eq!(err.to_string(), "Branch name is required");
    }

    #[test]
    fn test_validate_rejects_case_insensitive_duplicate() {
        let err = Branch::validate(&BranchDraft::named("DOWNTOWN"), &branches(), None).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { field: "name", .. }));
    }

    #[test]
    fn test_validate_edit_keeps_own_name() {
        let existing = branches();
        let id = "b1".to_string();
        assert!(Branch::validate(&BranchDraft::named("downtown"), &existing, Some(&id)).is_ok());
        assert!(Branch::validate(&BranchDraft::named("airport"), &existing, Some(&id)).is_err());
    }
}
