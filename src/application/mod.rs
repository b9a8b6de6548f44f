//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储端口定义（AuthorRepositoryPort、BookRepositoryPort）
//! - schema: 请求体校验
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod schema;

// Re-exports
pub use commands::{
    // Author commands
    CreateAuthor,
    DeleteAuthor,
    UpdateAuthor,
    // Book commands
    CreateBook,
    DeleteBook,
    UpdateBook,
    // Handlers
    handlers::{
        CreateAuthorHandler, CreateBookHandler, DeleteAuthorHandler, DeleteBookHandler,
        UpdateAuthorHandler, UpdateBookHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{AuthorRepositoryPort, BookRepositoryPort, RepositoryError};

pub use queries::{
    // Author queries
    GetAuthor,
    ListAuthorBooks,
    ListAuthors,
    // Book queries
    GetBook,
    ListBooks,
    // Handlers
    handlers::{
        GetAuthorHandler, GetBookHandler, ListAuthorBooksHandler, ListAuthorsHandler,
        ListBooksHandler,
    },
};
