//! HTTP Handlers
//!
//! 每个资源一组处理器：list / get / create / update / delete

mod author;
mod book;
mod ping;

pub use author::*;
pub use book::*;
pub use ping::*;

use super::error::ApiError;

/// 解析路径中的整数 ID；无法解析时按资源不存在处理
fn parse_path_id(resource: &str, raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("{} with ID {} not found", resource, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_id() {
        assert_eq!(parse_path_id("Book", "12").unwrap(), 12);
        assert!(matches!(
            parse_path_id("Book", "abc"),
            Err(ApiError::NotFound(msg)) if msg == "Book with ID abc not found"
        ));
    }
}
