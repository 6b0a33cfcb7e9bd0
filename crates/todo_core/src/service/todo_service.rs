//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the entry points the web layer calls for todo pages/actions.
//! - Guard titles (trimmed, non-blank, bounded, unique list titles).
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass the repository.
//! - Logs carry ids and counts only, never user-entered titles.

use crate::model::todo::{Todo, TodoId, TodoList, TodoListId};
use crate::repo::todo_repo::TodoRepository;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length in characters for lists and todos.
pub const TITLE_MAX_CHARS: usize = 100;

/// Title rejection reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleError {
    Blank,
    TooLong { max_chars: usize, actual_chars: usize },
}

impl Display for TitleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "title must not be blank"),
            Self::TooLong {
                max_chars,
                actual_chars,
            } => write!(
                f,
                "title must be at most {max_chars} characters, got {actual_chars}"
            ),
        }
    }
}

impl Error for TitleError {}

/// Service error for todo use-cases.
#[derive(Debug)]
pub enum TodoServiceError {
    InvalidTitle(TitleError),
    /// Another todo list already uses the title.
    DuplicateTodoListTitle,
    TodoListNotFound(TodoListId),
    TodoNotFound {
        todo_list_id: TodoListId,
        todo_id: TodoId,
    },
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(err) => write!(f, "{err}"),
            Self::DuplicateTodoListTitle => write!(f, "todo list title must be unique"),
            Self::TodoListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::TodoNotFound {
                todo_list_id,
                todo_id,
            } => write!(f, "todo not found: {todo_id} in todo list {todo_list_id}"),
            Self::InconsistentState(details) => write!(f, "inconsistent todo state: {details}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TitleError> for TodoServiceError {
    fn from(value: TitleError) -> Self {
        Self::InvalidTitle(value)
    }
}

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Overview row for the todo lists page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListSummary {
    pub id: TodoListId,
    pub title: String,
    pub todo_count: usize,
    pub remaining_count: usize,
    pub is_done: bool,
}

/// Detail view of one todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListDetail {
    pub todo_list: TodoList,
    /// Undone todos first, each group ordered by title.
    pub todos: Vec<Todo>,
    pub is_done: bool,
    pub has_undone_todos: bool,
}

/// Todo service facade over repository implementations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Lists every todo list in display order with progress counts.
    pub fn todo_lists_overview(&self) -> Vec<TodoListSummary> {
        self.repo
            .sorted_todo_lists()
            .into_iter()
            .map(|todo_list| TodoListSummary {
                is_done: self.repo.is_done_todo_list(&todo_list),
                todo_count: todo_list.todos.len(),
                remaining_count: todo_list.remaining_count(),
                id: todo_list.id,
                title: todo_list.title,
            })
            .collect()
    }

    /// Loads one todo list with its todos in display order.
    pub fn todo_list_detail(&self, todo_list_id: TodoListId) -> ServiceResult<TodoListDetail> {
        let todo_list = self
            .repo
            .load_todo_list(todo_list_id)
            .ok_or(TodoServiceError::TodoListNotFound(todo_list_id))?;

        Ok(TodoListDetail {
            todos: self.repo.sorted_todos(&todo_list),
            is_done: self.repo.is_done_todo_list(&todo_list),
            has_undone_todos: self.repo.has_undone_todos(&todo_list),
            todo_list,
        })
    }

    /// Creates a todo list with a unique title.
    pub fn create_todo_list(&mut self, title: &str) -> ServiceResult<()> {
        let title = normalize_title(title)?;
        if self.repo.exists_todo_list_title(title) {
            warn!(
                "event=todo_list_create module=service status=error error_code=duplicate_title"
            );
            return Err(TodoServiceError::DuplicateTodoListTitle);
        }

        if !self.repo.add_todo_list(title) {
            return Err(TodoServiceError::InconsistentState(
                "todo list was not added",
            ));
        }
        info!("event=todo_list_create module=service status=ok");
        Ok(())
    }

    /// Renames a todo list. Keeping the list's own title is allowed.
    pub fn rename_todo_list(
        &mut self,
        todo_list_id: TodoListId,
        title: &str,
    ) -> ServiceResult<()> {
        let title = normalize_title(title)?;
        let current = self
            .repo
            .load_todo_list(todo_list_id)
            .ok_or(TodoServiceError::TodoListNotFound(todo_list_id))?;

        if current.title != title && self.repo.exists_todo_list_title(title) {
            warn!(
                "event=todo_list_rename module=service status=error todo_list_id={} error_code=duplicate_title",
                todo_list_id
            );
            return Err(TodoServiceError::DuplicateTodoListTitle);
        }

        if !self.repo.set_todo_list_title(todo_list_id, title) {
            return Err(TodoServiceError::TodoListNotFound(todo_list_id));
        }
        info!(
            "event=todo_list_rename module=service status=ok todo_list_id={}",
            todo_list_id
        );
        Ok(())
    }

    pub fn delete_todo_list(&mut self, todo_list_id: TodoListId) -> ServiceResult<()> {
        if !self.repo.delete_todo_list(todo_list_id) {
            return Err(self.todo_list_not_found("todo_list_delete", todo_list_id));
        }
        info!(
            "event=todo_list_delete module=service status=ok todo_list_id={}",
            todo_list_id
        );
        Ok(())
    }

    pub fn create_todo(&mut self, todo_list_id: TodoListId, title: &str) -> ServiceResult<()> {
        let title = normalize_title(title)?;
        if !self.repo.add_todo(todo_list_id, title) {
            return Err(self.todo_list_not_found("todo_create", todo_list_id));
        }
        info!(
            "event=todo_create module=service status=ok todo_list_id={}",
            todo_list_id
        );
        Ok(())
    }

    /// Flips a todo's completion flag and returns its new state.
    ///
    /// The repository toggle is silent on misses, so existence is checked
    /// before and confirmed after the write.
    pub fn toggle_todo(
        &mut self,
        todo_list_id: TodoListId,
        todo_id: TodoId,
    ) -> ServiceResult<Todo> {
        let before = self.load_existing_todo(todo_list_id, todo_id)?;
        self.repo.toggle_todo(todo_list_id, todo_id);

        let after = self.repo.load_todo(todo_list_id, todo_id).ok_or(
            TodoServiceError::InconsistentState("toggled todo not found in read-back"),
        )?;
        if after.done == before.done {
            return Err(TodoServiceError::InconsistentState(
                "todo done flag unchanged after toggle",
            ));
        }
        info!(
            "event=todo_toggle module=service status=ok todo_list_id={} todo_id={} done={}",
            todo_list_id, todo_id, after.done
        );
        Ok(after)
    }

    pub fn delete_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> ServiceResult<()> {
        if !self.repo.delete_todo(todo_list_id, todo_id) {
            return Err(self.todo_not_found("todo_delete", todo_list_id, todo_id));
        }
        info!(
            "event=todo_delete module=service status=ok todo_list_id={} todo_id={}",
            todo_list_id, todo_id
        );
        Ok(())
    }

    pub fn complete_all_todos(&mut self, todo_list_id: TodoListId) -> ServiceResult<()> {
        if !self.repo.complete_all_todos(todo_list_id) {
            return Err(self.todo_list_not_found("todo_complete_all", todo_list_id));
        }
        info!(
            "event=todo_complete_all module=service status=ok todo_list_id={}",
            todo_list_id
        );
        Ok(())
    }

    fn load_existing_todo(&self, todo_list_id: TodoListId, todo_id: TodoId) -> ServiceResult<Todo> {
        self.repo
            .load_todo(todo_list_id, todo_id)
            .ok_or_else(|| self.todo_not_found("todo_load", todo_list_id, todo_id))
    }

    fn todo_list_not_found(&self, event: &str, todo_list_id: TodoListId) -> TodoServiceError {
        warn!(
            "event={} module=service status=error todo_list_id={} error_code=todo_list_not_found",
            event, todo_list_id
        );
        TodoServiceError::TodoListNotFound(todo_list_id)
    }

    fn todo_not_found(
        &self,
        event: &str,
        todo_list_id: TodoListId,
        todo_id: TodoId,
    ) -> TodoServiceError {
        if self.repo.load_todo_list(todo_list_id).is_none() {
            return self.todo_list_not_found(event, todo_list_id);
        }
        warn!(
            "event={} module=service status=error todo_list_id={} todo_id={} error_code=todo_not_found",
            event, todo_list_id, todo_id
        );
        TodoServiceError::TodoNotFound {
            todo_list_id,
            todo_id,
        }
    }
}

/// Trims a title and checks it against blank/length rules.
pub fn normalize_title(title: &str) -> Result<&str, TitleError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Blank);
    }

    let actual_chars = trimmed.chars().count();
    if actual_chars > TITLE_MAX_CHARS {
        return Err(TitleError::TooLong {
            max_chars: TITLE_MAX_CHARS,
            actual_chars,
        });
    }
    Ok(trimmed)
}
