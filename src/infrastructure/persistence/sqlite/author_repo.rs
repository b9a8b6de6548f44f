//! SQLite Author Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{begin_write, classify_error, database_error, DbPool};
use crate::application::ports::{AuthorRepositoryPort, RepositoryError};
use crate::domain::author::{Author, AuthorId, AuthorName, AuthorPatch, NewAuthor};

const ENTITY: &str = "Author";

/// SQLite Author Repository
pub struct SqliteAuthorRepository {
    pool: DbPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = RepositoryError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id),
            name: AuthorName::new(row.name).map_err(|e| {
                RepositoryError::DatabaseError(format!("invalid stored author {}: {}", row.id, e))
            })?,
        })
    }
}

#[async_trait]
impl AuthorRepositoryPort for SqliteAuthorRepository {
    async fn list_all(&self) -> Result<Vec<Author>, RepositoryError> {
        let rows: Vec<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn get(&self, id: AuthorId) -> Result<Author, RepositoryError> {
        let row: Option<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Author::try_from)
            .transpose()?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn insert(&self, author: &NewAuthor) -> Result<Author, RepositoryError> {
        let result = sqlx::query("INSERT INTO authors (name) VALUES (?)")
            .bind(author.name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error(e, |kind| format!("Author violates {:?}", kind)))?;

        Ok(Author {
            id: AuthorId::new(result.last_insert_rowid()),
            name: author.name.clone(),
        })
    }

    async fn update(&self, id: AuthorId, patch: &AuthorPatch) -> Result<Author, RepositoryError> {
        let mut tx = begin_write(&self.pool).await?;

        let row: Option<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        let mut author = row
            .map(Author::try_from)
            .transpose()?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?;
        author.apply(patch);

        sqlx::query("UPDATE authors SET name = ? WHERE id = ?")
            .bind(author.name.as_str())
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| classify_error(e, |kind| format!("Author violates {:?}", kind)))?;

        tx.commit().await.map_err(database_error)?;

        Ok(author)
    }

    async fn delete(&self, id: AuthorId) -> Result<(), RepositoryError> {
        // books.author_id 为 ON DELETE RESTRICT：仍拥有图书的作者不可删除
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                classify_error(e, |_| format!("Author with ID {} still owns books", id))
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
    use std::sync::Arc;

    async fn repo() -> SqliteAuthorRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteAuthorRepository::new(pool)
    }

    fn new_author(name: &str) -> NewAuthor {
        NewAuthor {
            name: AuthorName::new(name).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = repo().await;
        let first = repo.insert(&new_author("Jane Doe")).await.unwrap();
        let second = repo.insert(&new_author("John Roe")).await.unwrap();

        assert_eq!(first.id, AuthorId::new(1));
        assert_eq!(second.id, AuthorId::new(2));
        assert_eq!(repo.get(first.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let repo = repo().await;
        assert!(repo.list_all().await.unwrap().is_empty());

        for name in ["Zed", "Amy", "Mia"] {
            repo.insert(&new_author(name)).await.unwrap();
        }

        let ids: Vec<i64> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|a| a.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = repo().await;
        let err = repo.get(AuthorId::new(42)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Author", id: 42 }));
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let repo = repo().await;
        let author = repo.insert(&new_author("Jane Doe")).await.unwrap();

        let patch = AuthorPatch {
            name: Some(AuthorName::new("Jane Smith").unwrap()),
        };
        let updated = repo.update(author.id, &patch).await.unwrap();
        assert_eq!(updated.name.as_str(), "Jane Smith");

        let unchanged = repo.update(author.id, &AuthorPatch::default()).await.unwrap();
        assert_eq!(unchanged.name.as_str(), "Jane Smith");
        assert_eq!(repo.get(author.id).await.unwrap().name.as_str(), "Jane Smith");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let err = repo
            .update(AuthorId::new(9), &AuthorPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = repo().await;
        let author = repo.insert(&new_author("Jane Doe")).await.unwrap();

        repo.delete(author.id).await.unwrap();
        let err = repo.delete(author.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.insert(&new_author("Jane Doe")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.insert(&new_author("John Roe")).await.unwrap();
        assert_eq!(second.id, AuthorId::new(2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_updates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&DatabaseConfig::new(dir.path().join("shelf.db")))
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteAuthorRepository::new(pool));
        let author_id = repo.insert(&new_author("Jane Doe")).await.unwrap().id;

        let tasks: Vec<_> = (0..40)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let patch = AuthorPatch {
                        name: Some(AuthorName::new(format!("Jane #{}", i)).unwrap()),
                    };
                    repo.update(author_id, &patch).await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert!(repo.get(author_id).await.unwrap().name.as_str().starts_with("Jane #"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_deletes_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&DatabaseConfig::new(dir.path().join("shelf.db")))
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteAuthorRepository::new(pool));
        let author_id = repo.insert(&new_author("Jane Doe")).await.unwrap().id;

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.delete(author_id).await })
            })
            .collect();

        let mut deleted = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(()) => deleted += 1,
                Err(RepositoryError::NotFound { .. }) => {}
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert_eq!(deleted, 1);
    }
}
