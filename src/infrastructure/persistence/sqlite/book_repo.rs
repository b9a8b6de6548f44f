//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::FromRow;

use super::{begin_write, classify_error, database_error, DbPool};
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::author::AuthorId;
use crate::domain::book::{Book, BookId, BookPatch, BookTitle, NewBook};

const ENTITY: &str = "Book";

const BOOK_SELECT_SQL: &str = "SELECT id, title, author_id, genre, published_year FROM books";

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author_id: i64,
    genre: Option<String>,
    published_year: Option<String>,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: BookId::new(row.id),
            title: BookTitle::new(row.title).map_err(|e| {
                RepositoryError::DatabaseError(format!("invalid stored book {}: {}", row.id, e))
            })?,
            author_id: AuthorId::new(row.author_id),
            genre: row.genre,
            published_year: row.published_year,
        })
    }
}

/// 写入图书时的约束冲突描述
fn describe_violation(kind: ErrorKind, title: &BookTitle, author_id: AuthorId) -> String {
    match kind {
        ErrorKind::UniqueViolation => format!("Book with title '{}' already exists", title),
        ErrorKind::ForeignKeyViolation => format!("Author with ID {} does not exist", author_id),
        other => format!("Book violates {:?}", other),
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(&format!("{} ORDER BY id", BOOK_SELECT_SQL))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn list_by_author(&self, author_id: AuthorId) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> =
            sqlx::query_as(&format!("{} WHERE author_id = ? ORDER BY id", BOOK_SELECT_SQL))
                .bind(author_id.value())
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn get(&self, id: BookId) -> Result<Book, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(&format!("{} WHERE id = ?", BOOK_SELECT_SQL))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(Book::try_from)
            .transpose()?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author_id, genre, published_year)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(book.title.as_str())
        .bind(book.author_id.value())
        .bind(&book.genre)
        .bind(&book.published_year)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_error(e, |kind| describe_violation(kind, &book.title, book.author_id)))?;

        Ok(Book {
            id: BookId::new(result.last_insert_rowid()),
            title: book.title.clone(),
            author_id: book.author_id,
            genre: book.genre.clone(),
            published_year: book.published_year.clone(),
        })
    }

    async fn update(&self, id: BookId, patch: &BookPatch) -> Result<Book, RepositoryError> {
        let mut tx = begin_write(&self.pool).await?;

        let row: Option<BookRow> = sqlx::query_as(&format!("{} WHERE id = ?", BOOK_SELECT_SQL))
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        let mut book = row
            .map(Book::try_from)
            .transpose()?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?;
        book.apply(patch);

        sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author_id = ?, genre = ?, published_year = ?
            WHERE id = ?
            "#,
        )
        .bind(book.title.as_str())
        .bind(book.author_id.value())
        .bind(&book.genre)
        .bind(&book.published_year)
        .bind(id.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_error(e, |kind| describe_violation(kind, &book.title, book.author_id)))?;

        tx.commit().await.map_err(database_error)?;

        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AuthorRepositoryPort;
    use crate::domain::author::{AuthorName, NewAuthor};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository,
    };
    use std::sync::Arc;

    /// 返回图书仓储以及一个已存在的作者 ID
    async fn setup() -> (SqliteAuthorRepository, SqliteBookRepository, AuthorId) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let authors = SqliteAuthorRepository::new(pool.clone());
        let author = authors
            .insert(&NewAuthor {
                name: AuthorName::new("Frank Herbert").unwrap(),
            })
            .await
            .unwrap();
        (authors, SqliteBookRepository::new(pool), author.id)
    }

    fn new_book(title: &str, author_id: AuthorId) -> NewBook {
        NewBook {
            title: BookTitle::new(title).unwrap(),
            author_id,
            genre: Some("SciFi".to_string()),
            published_year: Some("1965".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let (_, books, author_id) = setup().await;
        let created = books.insert(&new_book("Dune", author_id)).await.unwrap();

        assert_eq!(created.id, BookId::new(1));
        let fetched = books.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.published_year.as_deref(), Some("1965"));
    }

    #[tokio::test]
    async fn test_duplicate_title_is_rejected() {
        let (_, books, author_id) = setup().await;
        books.insert(&new_book("Dune", author_id)).await.unwrap();

        let err = books.insert(&new_book("Dune", author_id)).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::ConstraintViolation(ref msg) if msg == "Book with title 'Dune' already exists")
        );
        assert_eq!(books.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_author_is_rejected() {
        let (_, books, _) = setup().await;
        let err = books
            .insert(&new_book("Orphan", AuthorId::new(99)))
            .await
            .unwrap_err();
        assert!(
            matches!(err, RepositoryError::ConstraintViolation(ref msg) if msg == "Author with ID 99 does not exist")
        );
        assert!(books.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let (_, books, author_id) = setup().await;
        let book = books.insert(&new_book("Dune", author_id)).await.unwrap();

        let patch = BookPatch {
            genre: Some(None),
            ..Default::default()
        };
        let updated = books.update(book.id, &patch).await.unwrap();

        assert_eq!(updated.genre, None);
        assert_eq!(updated.title.as_str(), "Dune");
        assert_eq!(updated.published_year.as_deref(), Some("1965"));
        assert_eq!(books.get(book.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_to_existing_title_keeps_row() {
        let (_, books, author_id) = setup().await;
        books.insert(&new_book("Dune", author_id)).await.unwrap();
        let other = books.insert(&new_book("Children of Dune", author_id)).await.unwrap();

        let patch = BookPatch {
            title: Some(BookTitle::new("Dune").unwrap()),
            ..Default::default()
        };
        let err = books.update(other.id, &patch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert_eq!(
            books.get(other.id).await.unwrap().title.as_str(),
            "Children of Dune"
        );
    }

    #[tokio::test]
    async fn test_list_by_author() {
        let (authors, books, author_id) = setup().await;
        let other = authors
            .insert(&NewAuthor {
                name: AuthorName::new("Ursula K. Le Guin").unwrap(),
            })
            .await
            .unwrap();

        books.insert(&new_book("Dune", author_id)).await.unwrap();
        books.insert(&new_book("The Dispossessed", other.id)).await.unwrap();
        books.insert(&new_book("Dune Messiah", author_id)).await.unwrap();

        let titles: Vec<String> = books
            .list_by_author(author_id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title.into_inner())
            .collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah"]);
    }

    #[tokio::test]
    async fn test_author_with_books_cannot_be_deleted() {
        let (authors, books, author_id) = setup().await;
        let book = books.insert(&new_book("Dune", author_id)).await.unwrap();

        let err = authors.delete(author_id).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::ConstraintViolation(ref msg) if msg == "Author with ID 1 still owns books")
        );
        assert_eq!(books.get(book.id).await.unwrap(), book);

        books.delete(book.id).await.unwrap();
        authors.delete(author_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_, books, _) = setup().await;
        let err = books.delete(BookId::new(5)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Book", id: 5 }));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_, books, _) = setup().await;
        let patch = BookPatch {
            genre: Some(Some("Horror".to_string())),
            ..Default::default()
        };
        let err = books.update(BookId::new(4), &patch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "Book", id: 4 }));
    }

    #[tokio::test]
    async fn test_update_to_unknown_author_keeps_row() {
        let (_, books, author_id) = setup().await;
        let book = books.insert(&new_book("Dune", author_id)).await.unwrap();

        let patch = BookPatch {
            author_id: Some(AuthorId::new(99)),
            ..Default::default()
        };
        let err = books.update(book.id, &patch).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::ConstraintViolation(ref msg) if msg == "Author with ID 99 does not exist")
        );
        assert_eq!(books.get(book.id).await.unwrap().author_id, author_id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_book_updates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&DatabaseConfig::new(dir.path().join("shelf.db")))
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        let authors = SqliteAuthorRepository::new(pool.clone());
        let author = authors
            .insert(&NewAuthor {
                name: AuthorName::new("Frank Herbert").unwrap(),
            })
            .await
            .unwrap();
        let books = Arc::new(SqliteBookRepository::new(pool));
        let book_id = books.insert(&new_book("Dune", author.id)).await.unwrap().id;

        let tasks: Vec<_> = (0..40)
            .map(|i| {
                let books = Arc::clone(&books);
                tokio::spawn(async move {
                    let patch = BookPatch {
                        published_year: Some(Some(format!("{}", 1965 + i))),
                        ..Default::default()
                    };
                    books.update(book_id, &patch).await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(books.get(book_id).await.unwrap().title.as_str(), "Dune");
    }
}
