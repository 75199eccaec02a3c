//! Tag catalog reads.
//!
//! The catalog is administratively seeded and read-only through the
//! façade: every write method here exists so the denial is an explicit,
//! logged policy decision rather than a missing route.

use std::sync::Arc;

use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_database::repositories::tag::TagRepository;
use mealhub_entity::tag::{Tag, TagType};

use crate::context::RequestContext;

/// Serves the shared tag catalog.
#[derive(Debug, Clone)]
pub struct TagService {
    /// Tag repository.
    repo: Arc<TagRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(repo: Arc<TagRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// List the catalog, optionally narrowed to one tag type.
    pub async fn list_tags(
        &self,
        _ctx: &RequestContext,
        tag_type: Option<TagType>,
        page: PageRequest,
    ) -> Result<PageResponse<Tag>, AppError> {
        self.gate.authorize(ProtectedTable::Tags, Operation::Select)?;
        match tag_type {
            Some(t) => self.repo.find_by_type(t, &page).await,
            None => self.repo.find_all(&page).await,
        }
    }

    /// Fetch one catalog tag.
    pub async fn get_tag(&self, _ctx: &RequestContext, id: Uuid) -> Result<Tag, AppError> {
        self.gate.authorize(ProtectedTable::Tags, Operation::Select)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))
    }

    /// Catalog inserts are denied for every caller.
    pub fn create_tag(&self, _ctx: &RequestContext) -> Result<(), AppError> {
        self.gate.authorize(ProtectedTable::Tags, Operation::Insert)?;
        Ok(())
    }

    /// Catalog updates are denied for every caller.
    pub fn update_tag(&self, _ctx: &RequestContext, _id: Uuid) -> Result<(), AppError> {
        self.gate.authorize(ProtectedTable::Tags, Operation::Update)?;
        Ok(())
    }

    /// Catalog deletes are denied for every caller.
    pub fn delete_tag(&self, _ctx: &RequestContext, _id: Uuid) -> Result<(), AppError> {
        self.gate.authorize(ProtectedTable::Tags, Operation::Delete)?;
        Ok(())
    }
}
