//! Author Commands

use serde_json::Value;

use crate::application::schema::PayloadReader;
use crate::domain::author::{AuthorId, AuthorName, AuthorPatch, NewAuthor};
use crate::domain::{FieldError, ValidationErrors};

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: AuthorName,
}

impl CreateAuthor {
    /// 从请求体构造，`name` 必填
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload)?;
        let name = reader.text(AuthorName::FIELD, AuthorName::new);
        reader.finish()?;

        Ok(Self {
            name: name.ok_or_else(|| FieldError::missing(AuthorName::FIELD))?,
        })
    }

    pub fn into_new_author(self) -> NewAuthor {
        NewAuthor { name: self.name }
    }
}

/// 更新作者命令（部分更新）
#[derive(Debug, Clone)]
pub struct UpdateAuthor {
    pub author_id: AuthorId,
    pub patch: AuthorPatch,
}

impl UpdateAuthor {
    pub fn from_payload(author_id: AuthorId, payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload)?;
        let name = reader.patch_text(AuthorName::FIELD, AuthorName::new);
        reader.finish()?;

        Ok(Self {
            author_id,
            patch: AuthorPatch { name },
        })
    }
}

/// 删除作者命令
#[derive(Debug, Clone)]
pub struct DeleteAuthor {
    pub author_id: AuthorId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_name() {
        let errors = CreateAuthor::from_payload(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, "missing");
        assert_eq!(errors.errors()[0].loc, vec!["name".to_string()]);
    }

    #[test]
    fn test_create_rejects_non_string_name() {
        let errors = CreateAuthor::from_payload(&json!({"name": 5})).unwrap_err();
        assert_eq!(errors.errors()[0].kind, "string_type");
    }

    #[test]
    fn test_create_accepts_name() {
        let command = CreateAuthor::from_payload(&json!({"name": "Jane Doe"})).unwrap();
        assert_eq!(command.into_new_author().name.as_str(), "Jane Doe");
    }

    #[test]
    fn test_update_with_empty_body_is_empty_patch() {
        let command = UpdateAuthor::from_payload(AuthorId::new(3), &json!({})).unwrap();
        assert!(command.patch.is_empty());
        assert_eq!(command.author_id, AuthorId::new(3));
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let errors = UpdateAuthor::from_payload(AuthorId::new(1), &json!({"name": ""})).unwrap_err();
        assert_eq!(errors.errors()[0].kind, "string_too_short");
    }
}
