//! Form Layer - Create/Edit Sessions
//!
//! A session moves `Idle -> Editing -> Submitting -> Idle` on success and
//! back to `Editing` on failure. Submission is split into `begin_submit`
//! and `finish_submit` so an event loop can await the request in between;
//! each begin hands out a ticket with a fresh token and only the ticket
//! currently outstanding may finish.

mod validation;

use crate::domain::Resource;
use crate::remote::{RemoteError, RemoteResult, ResourceClient};
use crate::sync::EntityList;

pub use validation::ValidationError;

/// Create a new entity or edit an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Form closed
    Idle,
    /// Form open, draft editable
    Editing,
    /// Request in flight, submit disabled
    Submitting,
}

/// Errors returned by session operations
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("A request for this form is already in flight")]
    Busy,

    #[error("Form is not open")]
    NotOpen,

    #[error("Response belongs to a superseded submission")]
    StaleTicket,
}

/// Request payload captured at submit time
#[derive(Debug, Clone)]
pub enum SubmitRequest<T: Resource> {
    Create(T::Draft),
    Update(T::Id, T::Patch),
}

/// Handle for one in-flight submission
#[derive(Debug, Clone)]
pub struct SubmitTicket<T: Resource> {
    token: u64,
    request: SubmitRequest<T>,
}

impl<T: Resource> SubmitTicket<T> {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn request(&self) -> &SubmitRequest<T> {
        &self.request
    }

    /// Sends the captured request
    pub async fn send<C>(&self, client: &C) -> RemoteResult<T>
    where
        C: ResourceClient<T> + ?Sized,
    {
        match &self.request {
            SubmitRequest::Create(draft) => client.create(draft).await,
            SubmitRequest::Update(id, patch) => client.update(id, patch).await,
        }
    }
}

/// Draft state for one entity type
#[derive(Debug, Clone)]
pub struct FormSession<T: Resource> {
    mode: FormMode<T::Id>,
    phase: FormPhase,
    draft: T::Draft,
    next_token: u64,
    pending: Option<u64>,
}

impl<T: Resource> Default for FormSession<T> {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Idle,
            draft: T::Draft::default(),
            next_token: 1,
            pending: None,
        }
    }
}

impl<T: Resource> FormSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode<T::Id> {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_editing_existing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    /// Mutable draft access; edits are ignored by an in-flight request
    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Opens an empty create form
    pub fn open_create(&mut self) -> Result<(), FormError> {
        self.ensure_not_submitting()?;
        self.mode = FormMode::Create;
        self.draft = T::Draft::default();
        self.phase = FormPhase::Editing;
        Ok(())
    }

    /// Opens an edit form seeded from the entity's current values
    pub fn open_edit(&mut self, entity: &T) -> Result<(), FormError> {
        self.ensure_not_submitting()?;
        self.mode = FormMode::Edit(entity.id().clone());
        self.draft = entity.to_draft();
        self.phase = FormPhase::Editing;
        Ok(())
    }

    /// Closes the form and resets the draft. Refused while submitting.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.ensure_not_submitting()?;
        self.reset();
        Ok(())
    }

    /// Validates against `list` and moves to `Submitting`.
    ///
    /// Validation failures keep the form in `Editing` and produce no ticket,
    /// so no request can be made for an invalid draft.
    pub fn begin_submit(&mut self, list: &EntityList<T>) -> Result<SubmitTicket<T>, FormError> {
        match self.phase {
            FormPhase::Idle => return Err(FormError::NotOpen),
            FormPhase::Submitting => return Err(FormError::Busy),
            FormPhase::Editing => {}
        }

        let editing = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };
        T::validate(&self.draft, list, editing)?;

        let request = match &self.mode {
            FormMode::Create => SubmitRequest::Create(self.draft.clone()),
            FormMode::Edit(id) => SubmitRequest::Update(id.clone(), self.draft.clone().into()),
        };

        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(token);
        self.phase = FormPhase::Submitting;

        Ok(SubmitTicket { token, request })
    }

    /// Applies the server response for `ticket`.
    ///
    /// Success patches `list`, closes the form and resets the draft.
    /// Failure returns to `Editing` with the draft intact.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket<T>,
        result: RemoteResult<T>,
        list: &mut EntityList<T>,
    ) -> Result<T, FormError> {
        if self.pending != Some(ticket.token) {
            return Err(FormError::StaleTicket);
        }
        self.pending = None;

        match result {
            Ok(entity) => {
                match ticket.request {
                    SubmitRequest::Create(_) => list.apply_create(entity.clone()),
                    SubmitRequest::Update(..) => {
                        list.apply_update(entity.clone());
                    }
                }
                log::info!("Saved {} {}", T::SINGULAR, entity.id());
                self.reset();
                Ok(entity)
            }
            Err(e) => {
                log::error!("Saving {} failed: {}", T::SINGULAR, e);
                self.phase = FormPhase::Editing;
                Err(FormError::Remote(e))
            }
        }
    }

    /// Validates, sends and applies in one step
    pub async fn submit<C>(&mut self, list: &mut EntityList<T>, client: &C) -> Result<T, FormError>
    where
        C: ResourceClient<T> + ?Sized,
    {
        let ticket = self.begin_submit(list)?;
        let result = ticket.send(client).await;
        self.finish_submit(ticket, result, list)
    }

    fn ensure_not_submitting(&self) -> Result<(), FormError> {
        if self.is_submitting() {
            Err(FormError::Busy)
        } else {
            Ok(())
        }
    }

    fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.draft = T::Draft::default();
        self.phase = FormPhase::Idle;
    }
}
