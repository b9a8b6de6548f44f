//! Author - Entity

use super::{AuthorId, AuthorName};

/// 作者
///
/// 一个作者拥有零或多本书（书通过 `author_id` 引用作者）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
}

/// 待创建的作者（尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: AuthorName,
}

/// 作者的部分更新：`None` 表示保留原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<AuthorName>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl Author {
    /// 应用部分更新，只修改补丁中出现的字段
    pub fn apply(&mut self, patch: &AuthorPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Author {
        Author {
            id: AuthorId::new(1),
            name: AuthorName::new("Jane Doe").unwrap(),
        }
    }

    #[test]
    fn test_empty_patch_keeps_author() {
        let mut author = jane();
        let patch = AuthorPatch::default();
        assert!(patch.is_empty());
        author.apply(&patch);
        assert_eq!(author, jane());
    }

    #[test]
    fn test_patch_renames_author() {
        let mut author = jane();
        author.apply(&AuthorPatch {
            name: Some(AuthorName::new("John Roe").unwrap()),
        });
        assert_eq!(author.name.as_str(), "John Roe");
        assert_eq!(author.id, AuthorId::new(1));
    }
}
