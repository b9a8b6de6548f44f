//! Author Queries

use crate::domain::author::AuthorId;

/// 列出所有作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors;

/// 获取作者详情查询
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub author_id: AuthorId,
}

/// 列出某作者的所有图书
#[derive(Debug, Clone)]
pub struct ListAuthorBooks {
    pub author_id: AuthorId,
}
