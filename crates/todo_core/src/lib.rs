//! Core domain logic for the todos web app.
//! Keeps each user's todo lists inside their session and exposes the
//! data-access operations the web layer needs.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod sort;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::todo::{next_id, Todo, TodoId, TodoList, TodoListId};
pub use repo::session_repo::SessionTodoRepository;
pub use repo::todo_repo::{RepoError, TodoRepository};
pub use seed::{load_seed_file, parse_seed_json, seed_todo_lists, SeedError};
pub use service::todo_service::{
    normalize_title, ServiceResult, TitleError, TodoListDetail, TodoListSummary, TodoService,
    TodoServiceError, TITLE_MAX_CHARS,
};
pub use session::Session;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
