//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                     GET     健康检查
//! - /authors/                 GET     列出所有作者
//! - /authors/                 POST    创建作者
//! - /authors/{id}             GET     获取作者
//! - /authors/{id}             PUT     更新作者（部分更新）
//! - /authors/{id}             DELETE  删除作者
//! - /authors/{id}/books       GET     列出作者名下的图书
//! - /books/                   GET     列出所有图书
//! - /books/                   POST    创建图书
//! - /books/{id}               GET     获取图书
//! - /books/{id}               PUT     更新图书（部分更新）
//! - /books/{id}               DELETE  删除图书
//!
//! 集合路径带或不带结尾斜杠均可

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(author_routes())
        .merge(book_routes())
}

/// Author 路由
fn author_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/authors",
            get(handlers::list_authors).post(handlers::create_author),
        )
        .route(
            "/authors/",
            get(handlers::list_authors).post(handlers::create_author),
        )
        .route(
            "/authors/:author_id",
            get(handlers::get_author)
                .put(handlers::update_author)
                .delete(handlers::delete_author),
        )
        .route("/authors/:author_id/books", get(handlers::list_author_books))
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/", get(handlers::list_books).post(handlers::create_book))
        .route(
            "/books/:book_id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
}
