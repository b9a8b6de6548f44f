//! Book - Entity

use super::{BookId, BookTitle};
use crate::domain::author::AuthorId;

/// 图书
///
/// `published_year` 按文本保存，不做数值校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author_id: AuthorId,
    pub genre: Option<String>,
    pub published_year: Option<String>,
}

/// 待创建的图书
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: BookTitle,
    pub author_id: AuthorId,
    pub genre: Option<String>,
    pub published_year: Option<String>,
}

/// 图书的部分更新
///
/// 外层 `None` 表示保留原值；可空字段的 `Some(None)` 表示清空
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub author_id: Option<AuthorId>,
    pub genre: Option<Option<String>>,
    pub published_year: Option<Option<String>>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author_id.is_none()
            && self.genre.is_none()
            && self.published_year.is_none()
    }
}

impl Book {
    /// 应用部分更新，只修改补丁中出现的字段
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(genre) = &patch.genre {
            self.genre = genre.clone();
        }
        if let Some(published_year) = &patch.published_year {
            self.published_year = published_year.clone();
        }
    }
}
