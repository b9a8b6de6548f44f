//! Book Queries

use crate::domain::book::BookId;

/// 列出所有图书查询
#[derive(Debug, Clone)]
pub struct ListBooks;

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}
