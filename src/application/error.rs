//! 应用层错误定义
//!
//! 统一的命令/查询错误类型
//!
//! 请求体校验错误在进入命令之前产生（见 `schema`），不经过这里

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} with ID {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 唯一性或引用完整性约束冲突
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => Self::NotFound {
                resource_type: entity,
                id,
            },
            RepositoryError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            RepositoryError::DatabaseError(_) => Self::RepositoryError(err.to_string()),
        }
    }
}
