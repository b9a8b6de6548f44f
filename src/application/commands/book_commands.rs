//! Book Commands

use serde_json::Value;

use crate::application::schema::PayloadReader;
use crate::domain::author::AuthorId;
use crate::domain::book::{BookId, BookPatch, BookTitle, NewBook};
use crate::domain::{FieldError, ValidationErrors};

const AUTHOR_ID: &str = "author_id";
const GENRE: &str = "genre";
const PUBLISHED_YEAR: &str = "published_year";

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: BookTitle,
    pub author_id: AuthorId,
    pub genre: Option<String>,
    pub published_year: Option<String>,
}

impl CreateBook {
    /// 从请求体构造：`title`、`author_id` 必填，`genre`、`published_year` 可选
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload)?;
        let title = reader.text(BookTitle::FIELD, BookTitle::new);
        let author_id = reader.integer(AUTHOR_ID);
        let genre = reader.nullable_text(GENRE).flatten();
        let published_year = reader.nullable_text(PUBLISHED_YEAR).flatten();
        reader.finish()?;

        Ok(Self {
            title: title.ok_or_else(|| FieldError::missing(BookTitle::FIELD))?,
            author_id: author_id
                .map(AuthorId::new)
                .ok_or_else(|| FieldError::missing(AUTHOR_ID))?,
            genre,
            published_year,
        })
    }

    pub fn into_new_book(self) -> NewBook {
        NewBook {
            title: self.title,
            author_id: self.author_id,
            genre: self.genre,
            published_year: self.published_year,
        }
    }
}

/// 更新图书命令（部分更新）
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub patch: BookPatch,
}

impl UpdateBook {
    pub fn from_payload(book_id: BookId, payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload)?;
        let title = reader.patch_text(BookTitle::FIELD, BookTitle::new);
        let author_id = reader.patch_integer(AUTHOR_ID).map(AuthorId::new);
        let genre = reader.nullable_text(GENRE);
        let published_year = reader.nullable_text(PUBLISHED_YEAR);
        reader.finish()?;

        Ok(Self {
            book_id,
            patch: BookPatch {
                title,
                author_id,
                genre,
                published_year,
            },
        })
    }
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
