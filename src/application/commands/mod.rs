//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod author_commands;
mod book_commands;

pub mod handlers;

pub use author_commands::*;
pub use book_commands::*;
