//! Book - 图书资源
//!
//! 职责:
//! - 图书实体与其值对象
//! - 新建/部分更新的输入形态
//!
//! 书名全局唯一；唯一性与作者引用的完整性由存储层保证

mod aggregate;
mod value_objects;

pub use aggregate::{Book, BookPatch, NewBook};
pub use value_objects::{BookId, BookTitle};
