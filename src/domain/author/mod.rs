//! Author - 作者资源
//!
//! 职责:
//! - 作者实体与其值对象
//! - 新建/部分更新的输入形态

mod aggregate;
mod value_objects;

pub use aggregate::{Author, AuthorPatch, NewAuthor};
pub use value_objects::{AuthorId, AuthorName};
