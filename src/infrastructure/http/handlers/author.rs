//! Author HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::parse_path_id;
use crate::application::{
    CreateAuthor, DeleteAuthor, GetAuthor, ListAuthorBooks, ListAuthors, UpdateAuthor,
};
use crate::domain::author::AuthorId;
use crate::infrastructure::http::dto::{
    AuthorResponse, BookResponse, CreatedResponse, MessageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const RESOURCE: &str = "Author";

fn author_id(raw: &str) -> Result<AuthorId, ApiError> {
    parse_path_id(RESOURCE, raw).map(AuthorId::new)
}

/// 获取作者列表（按 ID 升序）
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorResponse>>, ApiError> {
    let authors = state.list_authors_handler.handle(ListAuthors).await?;

    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// 获取作者详情
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let query = GetAuthor {
        author_id: author_id(&raw_id)?,
    };

    let author = state.get_author_handler.handle(query).await?;

    Ok(Json(AuthorResponse::from(author)))
}

/// 获取作者名下的图书
pub async fn list_author_books(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let query = ListAuthorBooks {
        author_id: author_id(&raw_id)?,
    };

    let books = state.list_author_books_handler.handle(query).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// 创建作者
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(payload) = payload?;
    let command = CreateAuthor::from_payload(&payload)?;

    let author = state.create_author_handler.handle(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Author created successfully",
            author.id.value(),
        )),
    ))
}

/// 更新作者（只修改请求体中出现的字段）
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let author_id = author_id(&raw_id)?;
    let Json(payload) = payload?;
    let command = UpdateAuthor::from_payload(author_id, &payload)?;

    state.update_author_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Author updated successfully")))
}

/// 删除作者（仍拥有图书时拒绝）
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = DeleteAuthor {
        author_id: author_id(&raw_id)?,
    };

    state.delete_author_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Author deleted successfully")))
}
