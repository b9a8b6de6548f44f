//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::book::Book;

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 作者是否存在由存储层的外键约束判定
    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let book = self.book_repo.insert(&command.into_new_book()).await?;

        tracing::info!(
            book_id = %book.id,
            author_id = %book.author_id,
            title = %book.title,
            "Book created"
        );

        Ok(book)
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<Book, ApplicationError> {
        if command.patch.is_empty() {
            tracing::debug!(book_id = %command.book_id, "Book update carries no fields");
        }

        let book = self.book_repo.update(command.book_id, &command.patch).await?;

        tracing::info!(book_id = %book.id, title = %book.title, "Book updated");

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book_id = command.book_id;

        self.book_repo.delete(book_id).await?;

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(())
    }
}
