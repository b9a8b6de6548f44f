//! Bookshelf - 作者与图书的 CRUD REST 服务
//!
//! 启动流程: 配置 -> 日志 -> 数据库 -> 仓储 -> 应用状态 -> HTTP 服务器

use std::sync::Arc;

use bookshelf::config::{load_config, print_config, LogConfig};
use bookshelf::infrastructure::http::{AppState, HttpServer};
use bookshelf::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志；`RUST_LOG` 优先于配置文件中的级别
fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},bookshelf={},tower_http=debug", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Bookshelf - Author/Book REST service");
    print_config(&config);

    // 确保数据目录存在
    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.effective_max_connections(),
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let author_repo = Arc::new(SqliteAuthorRepository::new(pool.clone()));
    let book_repo = Arc::new(SqliteBookRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let state = AppState::new(author_repo, book_repo);
    let server = HttpServer::new(&config.server, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时不触发关闭
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
