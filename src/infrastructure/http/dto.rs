//! Data Transfer Objects
//!
//! 记录序列化为扁平对象，不嵌套关联实体

use serde::Serialize;

use crate::domain::author::Author;
use crate::domain::book::Book;

// ============================================================================
// 通用响应
// ============================================================================

/// 创建成功响应：`{"message": ..., "id": N}`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// 仅含消息的响应：`{"message": ...}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Author DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.value(),
            name: author.name.into_inner(),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub genre: Option<String>,
    pub published_year: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title.into_inner(),
            author_id: book.author_id.value(),
            genre: book.genre,
            published_year: book.published_year,
        }
    }
}
