//! Bookshelf - 作者与图书的 CRUD REST 服务
//!
//! 架构设计: 分层 + CQRS + 端口/适配器
//!
//! 领域层 (domain/):
//! - Author / Book 实体、值对象、部分更新补丁
//! - 字段级校验错误
//!
//! 应用层 (application/):
//! - Ports: 存储端口（AuthorRepositoryPort, BookRepositoryPort）
//! - Schema: 请求体校验
//! - Commands / Queries: CQRS 命令与查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储（sqlx）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
