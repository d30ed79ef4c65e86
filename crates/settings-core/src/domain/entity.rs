//! Domain Layer - Core Entity Traits
//!
//! `Entity` is the identity contract used by the list synchronizer.
//! `Resource` binds an entity to its editable draft, its patch body and
//! the REST collection it lives in.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::form::ValidationError;

/// Core trait for all settings entities
pub trait Entity: Sized + Clone + std::fmt::Debug + Send + Sync {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// An entity exposed as a REST collection under `/settings/{COLLECTION}`
pub trait Resource: Entity + Serialize + DeserializeOwned + 'static {
    /// Editable field subset submitted on create
    type Draft: Clone + Default + PartialEq + Serialize + Send + Sync + std::fmt::Debug;
    /// Partial draft submitted on update
    type Patch: Clone + Default + Serialize + From<Self::Draft> + Send + Sync + std::fmt::Debug;

    /// Path segment of the collection, e.g. `categories`
    const COLLECTION: &'static str;
    /// JSON key holding a single entity in responses, e.g. `category`
    const SINGULAR: &'static str;
    /// Human label used in notices, e.g. `Category`
    const LABEL: &'static str;

    /// Seeds an edit draft from the entity's current field values
    fn to_draft(&self) -> Self::Draft;

    /// Whether the entity is currently active
    fn is_active(&self) -> bool;

    /// Required-field and uniqueness checks against the loaded collection.
    ///
    /// `editing` is the identity of the entity being edited; it is excluded
    /// from the uniqueness scan so an unchanged value is accepted.
    fn validate<'a, I>(draft: &Self::Draft, existing: I, editing: Option<&Self::Id>) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a Self>;
}

/// Trimmed-empty check shared by the required-field rules
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
