//! Author Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRepositoryPort, BookRepositoryPort};
use crate::application::queries::{GetAuthor, ListAuthorBooks, ListAuthors};
use crate::domain::author::Author;
use crate::domain::book::Book;

/// ListAuthors Handler
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, _query: ListAuthors) -> Result<Vec<Author>, ApplicationError> {
        Ok(self.author_repo.list_all().await?)
    }
}

/// GetAuthor Handler
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, query: GetAuthor) -> Result<Author, ApplicationError> {
        Ok(self.author_repo.get(query.author_id).await?)
    }
}

/// ListAuthorBooks Handler
pub struct ListAuthorBooksHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListAuthorBooksHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    /// 作者不存在时返回 NotFound，而不是空列表
    pub async fn handle(&self, query: ListAuthorBooks) -> Result<Vec<Book>, ApplicationError> {
        let author = self.author_repo.get(query.author_id).await?;
        Ok(self.book_repo.list_by_author(author.id).await?)
    }
}
