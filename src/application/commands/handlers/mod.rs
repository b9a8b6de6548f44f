//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod author_handlers;
mod book_handlers;

pub use author_handlers::*;
pub use book_handlers::*;
