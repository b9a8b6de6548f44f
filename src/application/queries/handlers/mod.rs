//! Query Handlers 实现

mod author_handlers;
mod book_handlers;

pub use author_handlers::*;
pub use book_handlers::*;
