//! Author - Value Objects

use std::fmt;

use crate::domain::{check_text, FieldError, TEXT_MAX_LEN};

/// 作者标识（由存储层分配，创建后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(i64);

impl AuthorId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AuthorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者姓名
///
/// 不变量: 1..=255 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub const FIELD: &'static str = "name";

    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        let name = name.into();
        check_text(Self::FIELD, &name, 1, TEXT_MAX_LEN)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
