//! Domain Layer - 领域层
//!
//! 包含两个资源:
//! - Author: 作者
//! - Book: 图书（每本书归属于一个作者）
//!
//! 以及字段级校验错误的通用词汇

pub mod author;
pub mod book;

mod validation;

pub use validation::{check_text, FieldError, ValidationErrors, TEXT_MAX_LEN};
