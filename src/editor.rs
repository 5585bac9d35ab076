//! Create-or-edit form state shared by every admin screen.

use crate::api::{Ack, FileUpload};
use crate::error::ApiError;
use crate::models::Draft;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

/// The REST operations an admin screen needs for one resource
#[async_trait]
pub trait EntityService: Send + Sync {
    type Entity: Draft;

    /// Singular name used in prompts and logs
    fn label(&self) -> &'static str;

    async fn list(&self) -> Result<Vec<Self::Entity>, ApiError>;

    async fn create(&self, draft: &Self::Entity, uploads: &[FileUpload]) -> Result<Self::Entity, ApiError>;

    async fn update(&self, id: &str, draft: &Self::Entity, uploads: &[FileUpload]) -> Result<Self::Entity, ApiError>;

    async fn delete(&self, id: &str) -> Result<Ack, ApiError>;

    /// Checks beyond required fields that need the loaded list, such as
    /// duplicate names
    fn validate(&self, _draft: &Self::Entity, _existing: &[Self::Entity], _editing: Option<&str>) -> Vec<String> {
        Vec::new()
    }
}

/// Interactive yes/no step before a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Missing or invalid fields: {}", .0.join(", "))]
    Invalid(Vec<String>),

    #[error("Server refused the change: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
}

/// Local state of one admin management screen
pub struct EntityEditor<S: EntityService> {
    service: S,
    items: Vec<S::Entity>,
    form: S::Entity,
    uploads: Vec<FileUpload>,
    editing: Option<String>,
    open: bool,
}

impl<S: EntityService> EntityEditor<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            items: Vec::new(),
            form: <S::Entity>::default(),
            uploads: Vec::new(),
            editing: None,
            open: false,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn items(&self) -> &[S::Entity] {
        &self.items
    }

    pub fn form(&self) -> &S::Entity {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut S::Entity {
        &mut self.form
    }

    /// Id of the entity being edited, `None` while creating
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn uploads(&self) -> &[FileUpload] {
        &self.uploads
    }

    /// Reload the list from the backend
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.items = self.service.list().await?;
        Ok(())
    }

    /// Open an empty form for a new entity
    pub fn open_new(&mut self) {
        self.reset_form();
        self.open = true;
    }

    /// Open the form pre-filled with an existing entity. Without an id there
    /// is nothing to update, so the next submit creates a copy.
    pub fn edit(&mut self, entity: &S::Entity) {
        self.form = entity.clone();
        self.uploads.clear();
        self.editing = entity.id().map(str::to_string);
        if self.editing.is_none() {
            warn!("Editing a {} without an id; submit will create a new one", self.service.label());
        }
        self.open = true;
    }

    /// Queue a file to be sent with the next submit
    pub fn attach_upload(&mut self, upload: FileUpload) {
        self.uploads.push(upload);
    }

    pub fn cancel(&mut self) {
        self.reset_form();
    }

    /// Create or update depending on whether an entity is being edited, then
    /// refetch the list
    pub async fn submit(&mut self) -> Result<S::Entity, EditorError> {
        let mut problems: Vec<String> = self
            .form
            .missing_fields()
            .into_iter()
            .map(str::to_string)
            .collect();
        problems.extend(self.service.validate(&self.form, &self.items, self.editing.as_deref()));
        if !problems.is_empty() {
            return Err(EditorError::Invalid(problems));
        }

        let saved = match self.editing.as_deref() {
            Some(id) => self.service.update(id, &self.form, &self.uploads).await?,
            None => self.service.create(&self.form, &self.uploads).await?,
        };
        info!("Saved {} {}", self.service.label(), saved.id().unwrap_or("(no id)"));

        self.reset_form();
        self.refetch_after_write().await;
        Ok(saved)
    }

    /// Delete after confirmation, then refetch the list
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> Result<DeleteOutcome, EditorError> {
        let prompt = format!("Are you sure you want to delete this {}?", self.service.label());
        if !confirm.confirm(&prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let ack = self.service.delete(id).await?;
        if !ack.success {
            return Err(EditorError::Rejected(
                ack.message.unwrap_or_else(|| format!("{} was not deleted", self.service.label())),
            ));
        }
        info!("Deleted {} {}", self.service.label(), id);

        if self.editing.as_deref() == Some(id) {
            self.reset_form();
        }
        self.refetch_after_write().await;
        Ok(DeleteOutcome::Deleted)
    }

    /// The write already succeeded, so a failed reload only leaves the list stale
    async fn refetch_after_write(&mut self) {
        if let Err(e) = self.refresh().await {
            warn!("Failed to reload {} list: {}", self.service.label(), e);
        }
    }

    fn reset_form(&mut self) {
        self.form = <S::Entity>::default();
        self.uploads.clear();
        self.editing = None;
        self.open = false;
    }
}
