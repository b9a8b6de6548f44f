//! 字段级校验错误
//!
//! 每个错误携带 `loc`（字段路径）、`msg`（可读描述）、`type`（机器可读类别），
//! 请求体校验失败时全部错误一并返回给客户端

use serde::Serialize;
use std::fmt;

/// 文本字段的最大字符数（与存储列宽一致）
pub const TEXT_MAX_LEN: usize = 255;

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: &str, kind: &str, msg: impl Into<String>) -> Self {
        let loc = if field.is_empty() {
            Vec::new()
        } else {
            vec![field.to_string()]
        };
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// 针对整个请求体（而非某个字段）的错误
    pub fn body(kind: &str, msg: impl Into<String>) -> Self {
        Self::new("", kind, msg)
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "missing", "Field required")
    }

    pub fn string_type(field: &str) -> Self {
        Self::new(field, "string_type", "Input should be a valid string")
    }

    pub fn int_type(field: &str) -> Self {
        Self::new(field, "int_type", "Input should be a valid integer")
    }

    pub fn int_parsing(field: &str) -> Self {
        Self::new(
            field,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        )
    }

    pub fn too_short(field: &str, min: usize) -> Self {
        let unit = if min == 1 { "character" } else { "characters" };
        Self::new(
            field,
            "string_too_short",
            format!("String should have at least {} {}", min, unit),
        )
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(
            field,
            "string_too_long",
            format!("String should have at most {} characters", max),
        )
    }

    /// 字段路径的展示形式，例如 `title`
    pub fn location(&self) -> String {
        self.loc.join(".")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loc.is_empty() {
            write!(f, "{}", self.msg)
        } else {
            write!(f, "{}: {}", self.location(), self.msg)
        }
    }
}

/// 检查文本长度（按字符计数）
pub fn check_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min {
        return Err(FieldError::too_short(field, min));
    }
    if len > max {
        return Err(FieldError::too_long(field, max));
    }
    Ok(())
}

/// 一次校验收集到的全部字段错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_serializes_type_key() {
        let json = serde_json::to_value(FieldError::missing("name")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"loc": ["name"], "msg": "Field required", "type": "missing"})
        );
    }

    #[test]
    fn test_body_error_has_empty_loc() {
        let error = FieldError::body("model_type", "Input should be an object");
        assert!(error.loc.is_empty());
        assert_eq!(error.to_string(), "Input should be an object");
    }

    #[test]
    fn test_check_text_counts_chars() {
        assert!(check_text("name", "", 1, 10).is_err());
        assert!(check_text("name", "é", 1, 1).is_ok());
        let err = check_text("name", "abc", 1, 2).unwrap_err();
        assert_eq!(err.kind, "string_too_long");
    }

    #[test]
    fn test_errors_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::missing("title"));
        errors.push(FieldError::int_type("author_id"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "title: Field required; author_id: Input should be a valid integer"
        );
    }
}
