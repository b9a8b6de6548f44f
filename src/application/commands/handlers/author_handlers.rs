//! Author Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateAuthor, DeleteAuthor, UpdateAuthor};
use crate::application::error::ApplicationError;
use crate::application::ports::AuthorRepositoryPort;
use crate::domain::author::Author;

// ============================================================================
// CreateAuthor
// ============================================================================

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: CreateAuthor) -> Result<Author, ApplicationError> {
        let author = self.author_repo.insert(&command.into_new_author()).await?;

        tracing::info!(
            author_id = %author.id,
            name = %author.name,
            "Author created"
        );

        Ok(author)
    }
}

// ============================================================================
// UpdateAuthor
// ============================================================================

/// UpdateAuthor Handler
pub struct UpdateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl UpdateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: UpdateAuthor) -> Result<Author, ApplicationError> {
        if command.patch.is_empty() {
            tracing::debug!(author_id = %command.author_id, "Author update carries no fields");
        }

        let author = self
            .author_repo
            .update(command.author_id, &command.patch)
            .await?;

        tracing::info!(author_id = %author.id, "Author updated");

        Ok(author)
    }
}

// ============================================================================
// DeleteAuthor
// ============================================================================

/// DeleteAuthor Handler
pub struct DeleteAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl DeleteAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: DeleteAuthor) -> Result<(), ApplicationError> {
        let author_id = command.author_id;

        self.author_repo.delete(author_id).await?;

        tracing::info!(author_id = %author_id, "Author deleted");

        Ok(())
    }
}
