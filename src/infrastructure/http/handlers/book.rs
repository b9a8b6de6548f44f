//! Book HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::parse_path_id;
use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateBook};
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{BookResponse, CreatedResponse, MessageResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const RESOURCE: &str = "Book";

fn book_id(raw: &str) -> Result<BookId, ApiError> {
    parse_path_id(RESOURCE, raw).map(BookId::new)
}

/// 获取图书列表（按 ID 升序）
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.list_books_handler.handle(ListBooks).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let query = GetBook {
        book_id: book_id(&raw_id)?,
    };

    let book = state.get_book_handler.handle(query).await?;

    Ok(Json(BookResponse::from(book)))
}

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(payload) = payload?;
    let command = CreateBook::from_payload(&payload)?;

    let book = state.create_book_handler.handle(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Book created successfully", book.id.value())),
    ))
}

/// 更新图书（只修改请求体中出现的字段）
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = book_id(&raw_id)?;
    let Json(payload) = payload?;
    let command = UpdateBook::from_payload(book_id, &payload)?;

    state.update_book_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = DeleteBook {
        book_id: book_id(&raw_id)?,
    };

    state.delete_book_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
