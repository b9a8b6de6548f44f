//! Repository Ports - 出站端口
//!
//! 定义资源存储的抽象接口
//! 具体实现在 infrastructure 层（SQLite）
//!
//! 约定:
//! - `list_all` 按 ID 升序返回
//! - 每个写操作立即提交，不跨操作批处理

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::domain::book::{Book, BookId, BookPatch, NewBook};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// 唯一性或引用完整性约束被破坏
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

// ============================================================================
// Author Repository
// ============================================================================

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 获取所有作者（按 ID 升序）
    async fn list_all(&self) -> Result<Vec<Author>, RepositoryError>;

    /// 根据 ID 获取作者
    async fn get(&self, id: AuthorId) -> Result<Author, RepositoryError>;

    /// 新建作者，返回分配了 ID 的记录
    async fn insert(&self, author: &NewAuthor) -> Result<Author, RepositoryError>;

    /// 部分更新作者
    async fn update(&self, id: AuthorId, patch: &AuthorPatch) -> Result<Author, RepositoryError>;

    /// 删除作者；仍拥有图书时返回 `ConstraintViolation`
    async fn delete(&self, id: AuthorId) -> Result<(), RepositoryError>;
}

// ============================================================================
// Book Repository
// ============================================================================

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 获取所有图书（按 ID 升序）
    async fn list_all(&self) -> Result<Vec<Book>, RepositoryError>;

    /// 获取某作者的所有图书（按 ID 升序）
    async fn list_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, RepositoryError>;

    /// 根据 ID 获取图书
    async fn get(&self, id: BookId) -> Result<Book, RepositoryError>;

    /// 新建图书；书名重复或作者不存在时返回 `ConstraintViolation`
    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError>;

    /// 部分更新图书
    async fn update(&self, id: BookId, patch: &BookPatch) -> Result<Book, RepositoryError>;

    /// 删除图书
    async fn delete(&self, id: BookId) -> Result<(), RepositoryError>;
}
