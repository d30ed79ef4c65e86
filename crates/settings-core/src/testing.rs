//! Test Support
//!
//! In-memory `ResourceClient` that records calls and can be told to fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Branch, BranchDraft, BranchPatch, Category, CategoryDraft, CategoryPatch, Resource};
use crate::remote::{RemoteError, RemoteResult, ResourceClient};

/// Operations that can be forced to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    ListAll,
    Create,
    Update,
    Delete,
}

/// How the fake turns drafts and patches into entities
pub trait FakeResource: Resource {
    fn from_draft(id: String, draft: &Self::Draft) -> Self;
    fn patch(&mut self, patch: &Self::Patch);
    fn toggle(&mut self);
}

fn opt(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl FakeResource for Category {
    fn from_draft(id: String, draft: &CategoryDraft) -> Self {
        let mut cat = Category::new(id, draft.name.clone(), draft.value.clone());
        cat.description = opt(&draft.description);
        cat
    }

    fn patch(&mut self, patch: &CategoryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(value) = &patch.value {
            self.value = value.clone();
        }
        if let Some(description) = &patch.description {
            self.description = opt(description);
        }
    }

    fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }
}

impl FakeResource for Branch {
    fn from_draft(id: String, draft: &BranchDraft) -> Self {
        let mut branch = Branch::new(id, draft.name.clone());
        branch.description = opt(&draft.description);
        branch.address = opt(&draft.address);
        branch.phone = opt(&draft.phone);
        branch.email = opt(&draft.email);
        branch
    }

    fn patch(&mut self, patch: &BranchPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        for (field, value) in [
            (&mut self.description, &patch.description),
            (&mut self.address, &patch.address),
            (&mut self.phone, &patch.phone),
            (&mut self.email, &patch.email),
        ] {
            if let Some(value) = value {
                *field = opt(value);
            }
        }
    }

    fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }
}

/// In-memory server collection
pub struct FakeClient<T> {
    rows: Mutex<Vec<T>>,
    failing: Mutex<Option<Fail>>,
    calls: AtomicUsize,
    next_id: AtomicUsize,
    /// Id handed to the next create, overriding the generated one
    next_create_id: Mutex<Option<String>>,
}

impl<T: FakeResource> FakeClient<T> {
    pub fn with(rows: Vec<T>) -> Self {
        Self {
            rows: Mutex::new(rows),
            failing: Mutex::new(None),
            calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1),
            next_create_id: Mutex::new(None),
        }
    }

    pub fn empty() -> Self {
        Self::with(Vec::new())
    }

    pub fn fail(&self, op: Fail) {
        *self.failing.lock().unwrap() = Some(op);
    }

    pub fn recover(&self) {
        *self.failing.lock().unwrap() = None;
    }

    pub fn assign_next_id(&self, id: &str) {
        *self.next_create_id.lock().unwrap() = Some(id.to_string());
    }

    /// Number of requests received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self, op: Option<Fail>) -> RemoteResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if op.is_some() && *self.failing.lock().unwrap() == op {
            return Err(RemoteError::Status {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(id: &T::Id) -> RemoteError {
        RemoteError::Status {
            status: 404,
            message: format!("{} {} not found", T::LABEL, id),
        }
    }

    fn with_row<R>(&self, id: &T::Id, f: impl FnOnce(&mut T) -> R) -> RemoteResult<R> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|row| row.id() == id).ok_or_else(|| Self::not_found(id))?;
        Ok(f(row))
    }
}

#[async_trait]
impl<T: FakeResource> ResourceClient<T> for FakeClient<T> {
    async fn list_all(&self) -> RemoteResult<Vec<T>> {
        self.enter(Some(Fail::ListAll))?;
        Ok(self.snapshot())
    }

    async fn list_active(&self) -> RemoteResult<Vec<T>> {
        self.enter(None)?;
        Ok(self.snapshot().into_iter().filter(|row| row.is_active()).collect())
    }

    async fn get(&self, id: &T::Id) -> RemoteResult<T> {
        self.enter(None)?;
        self.with_row(id, |row| row.clone())
    }

    async fn create(&self, draft: &T::Draft) -> RemoteResult<T> {
        self.enter(Some(Fail::Create))?;
        let id = self
            .next_create_id
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| format!("gen-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        let row = T::from_draft(id, draft);
        self.rows.lock().unwrap().insert(0, row.clone());
        Ok(row)
    }

    async fn update(&self, id: &T::Id, patch: &T::Patch) -> RemoteResult<T> {
        self.enter(Some(Fail::Update))?;
        self.with_row(id, |row| {
            row.patch(patch);
            row.clone()
        })
    }

    async fn delete(&self, id: &T::Id) -> RemoteResult<String> {
        self.enter(Some(Fail::Delete))?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(format!("{} deleted successfully", T::LABEL))
    }

    async fn toggle_status(&self, id: &T::Id) -> RemoteResult<T> {
        self.enter(None)?;
        self.with_row(id, |row| {
            row.toggle();
            row.clone()
        })
    }
}
