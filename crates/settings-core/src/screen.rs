//! Settings Screen
//!
//! Owns both lists, the initial concurrent load and the admin gate that
//! must pass before the screen mounts.

use std::fmt;

use futures::future::join;
use serde::{Deserialize, Serialize};

use crate::domain::{Branch, Category};
use crate::notice::Notice;
use crate::remote::ResourceClient;
use crate::sync::EntityList;

/// Account role as reported by the auth collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    #[serde(other)]
    Other,
}

impl Role {
    /// Parses a role name; unknown names map to `Other`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            _ => Role::Other,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Sign in required")]
    NotAuthenticated,

    #[error("The {required} role is required (signed in as {actual})")]
    Forbidden { required: Role, actual: Role },
}

/// Role check performed before the settings screen mounts
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    required: Role,
}

impl AccessGate {
    pub fn admin() -> Self {
        Self { required: Role::Admin }
    }

    pub fn check(&self, role: Option<Role>) -> Result<(), AccessDenied> {
        match role {
            None => Err(AccessDenied::NotAuthenticated),
            Some(actual) if actual == self.required => Ok(()),
            Some(actual) => Err(AccessDenied::Forbidden {
                required: self.required,
                actual,
            }),
        }
    }
}

/// Category and branch lists plus the loading flag
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsScreen {
    pub categories: EntityList<Category>,
    pub branches: EntityList<Branch>,
    loading: bool,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self {
            categories: EntityList::new(),
            branches: EntityList::new(),
            loading: true,
        }
    }
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches both collections concurrently.
    ///
    /// Both must succeed for either list to be populated; any failure
    /// leaves both empty and yields a single combined notice. Loading ends
    /// in every case.
    pub async fn load<CC, BC>(&mut self, categories: &CC, branches: &BC) -> Option<Notice>
    where
        CC: ResourceClient<Category> + ?Sized,
        BC: ResourceClient<Branch> + ?Sized,
    {
        self.loading = true;
        let (cat_result, branch_result) = join(categories.list_all(), branches.list_all()).await;
        self.loading = false;

        match (cat_result, branch_result) {
            (Ok(cats), Ok(branches)) => {
                self.apply_loaded(cats, branches);
                None
            }
            (cats, branches) => {
                for e in [cats.err(), branches.err()].into_iter().flatten() {
                    log::error!("Settings fetch error: {}", e);
                }
                self.categories.clear();
                self.branches.clear();
                Some(Notice::load_failed())
            }
        }
    }

    /// Installs freshly fetched collections and ends loading
    pub fn apply_loaded(&mut self, categories: Vec<Category>, branches: Vec<Branch>) {
        self.categories.replace_all(categories);
        self.branches.replace_all(branches);
        self.loading = false;
        log::info!(
            "Settings loaded: {} categories, {} branches",
            self.categories.len(),
            self.branches.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fail, FakeClient};

    fn clients() -> (FakeClient<Category>, FakeClient<Branch>) {
        (
            FakeClient::with(vec![Category::new("1", "Dairy", "dairy")]),
            FakeClient::with(vec![Branch::new("b1", "Downtown"), Branch::new("b2", "Airport")]),
        )
    }

    #[tokio::test]
    async fn test_load_populates_both_lists() {
        let (cats, branches) = clients();
        let mut screen = SettingsScreen::new();
        assert!(screen.is_loading());

        assert!(screen.load(&cats, &branches).await.is_none());
        assert!(!screen.is_loading());
        assert_eq!(screen.categories.len(), 1);
        assert_eq!(screen.branches.len(), 2);
        assert_eq!(cats.calls() + branches.calls(), 2);
    }

    #[tokio::test]
    async fn test_one_failure_gives_single_notice() {
        let (cats, branches) = clients();
        branches.fail(Fail::ListAll);
        let mut screen = SettingsScreen::new();

        let notice = screen.load(&cats, &branches).await.unwrap();
        assert_eq!(notice, Notice::load_failed());
        assert!(!screen.is_loading());
        assert!(screen.categories.is_empty());
        assert!(screen.branches.is_empty());
    }

    #[tokio::test]
    async fn test_both_failures_give_single_notice() {
        let (cats, branches) = clients();
        cats.fail(Fail::ListAll);
        branches.fail(Fail::ListAll);
        let mut screen = SettingsScreen::new();

        assert_eq!(screen.load(&cats, &branches).await, Some(Notice::load_failed()));
        assert!(!screen.is_loading());
    }

    #[test]
    fn test_admin_gate() {
        let gate = AccessGate::admin();
        assert!(gate.check(Some(Role::Admin)).is_ok());
        assert_eq!(gate.check(None), Err(AccessDenied::NotAuthenticated));
        assert!(matches!(gate.check(Some(Role::parse("staff"))), Err(AccessDenied::Forbidden { .. })));
    }

    #[test]
    fn test_role_parse_and_serde() {
        assert_eq!(Role::parse(" Admin "), Role::Admin);
        assert_eq!(Role::parse("auditor"), Role::Other);
        let role: Role = serde_json::from_str(r#""manager""#).unwrap();
        assert_eq!(role, Role::Other);
    }
}
