//! SQLite Database - 数据库连接和迁移

use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite, Transaction};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库只能有一个连接，否则每个连接各自是一个空库
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 每个连接都会:
/// - 启用外键约束（作者/图书的引用完整性依赖于此）
/// - 使用 WAL 模式，允许并发读写
/// - busy_timeout=5000ms，遇到锁时等待而不是立即失败
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(5000));

    // 连接不回收：内存数据库的数据随连接关闭而丢失
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys and WAL mode"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT: 删除后的 ID 不会被复用
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            author_id INTEGER NOT NULL,
            genre TEXT,
            published_year TEXT,
            FOREIGN KEY (author_id) REFERENCES authors(id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_books_author_id
        ON books(author_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 把 sqlx 错误归类为仓储错误
///
/// 约束类错误由 `describe` 给出面向客户端的描述，其余归为 `DatabaseError`
pub(super) fn classify_error<F>(err: sqlx::Error, describe: F) -> RepositoryError
where
    F: FnOnce(ErrorKind) -> String,
{
    if let Some(db_err) = err.as_database_error() {
        let kind = db_err.kind();
        if matches!(
            kind,
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ) {
            return RepositoryError::ConstraintViolation(describe(kind));
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

/// 开启写事务
///
/// `BEGIN IMMEDIATE` 在事务开始时就取得写锁（受 busy_timeout 约束），
/// 先读后写的事务不会因 WAL 快照过期而以 SQLITE_BUSY_SNAPSHOT 失败
pub(super) async fn begin_write(
    pool: &DbPool,
) -> Result<Transaction<'static, Sqlite>, RepositoryError> {
    pool.begin_with("BEGIN IMMEDIATE").await.map_err(database_error)
}

pub(super) fn database_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(err.to_string())
}
