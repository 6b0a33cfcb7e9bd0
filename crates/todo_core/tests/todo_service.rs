use todo_core::{
    seed_todo_lists, Session, SessionTodoRepository, TitleError, TodoRepository, TodoService,
    TodoServiceError,
};
use uuid::Uuid;

#[test]
fn overview_reports_sorted_lists_with_progress() {
    let mut session = Session::new();
    let service = TodoService::new(SessionTodoRepository::new(&mut session));

    let overview = service.todo_lists_overview();
    let titles: Vec<&str> = overview.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["chores", "Work"]);
    assert_eq!(overview[1].todo_count, 3);
    assert_eq!(overview[1].remaining_count, 1);
    assert!(!overview[1].is_done);
}

#[test]
fn detail_returns_sorted_todos_and_flags() {
    let mut session = Session::new();
    let service = TodoService::new(SessionTodoRepository::new(&mut session));
    let seed = seed_todo_lists();
    let work = &seed[0];

    let detail = service.todo_list_detail(work.id).unwrap();
    assert_eq!(detail.todo_list, *work);
    assert_eq!(detail.todos[0].title, "Duck out of meeting");
    assert!(detail.has_undone_todos);
    assert!(!detail.is_done);

    let missing = Uuid::new_v4();
    let err = service.todo_list_detail(missing).unwrap_err();
    assert!(matches!(err, TodoServiceError::TodoListNotFound(id) if id == missing));
}

#[test]
fn create_todo_list_trims_and_rejects_duplicates() {
    let mut session = Session::with_todo_lists(Vec::new());
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));

    service.create_todo_list("  Groceries  ").unwrap();
    assert!(service.repo().exists_todo_list_title("Groceries"));

    let err = service.create_todo_list("Groceries").unwrap_err();
    assert!(matches!(err, TodoServiceError::DuplicateTodoListTitle));

    let err = service.create_todo_list("   ").unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::Blank)
    ));
}

#[test]
fn rename_allows_own_title_and_rejects_others() {
    let mut session = Session::new();
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));
    let seed = seed_todo_lists();
    let (work_id, chores_id) = (seed[0].id, seed[1].id);

    service.rename_todo_list(work_id, "Work").unwrap();

    let err = service.rename_todo_list(work_id, "chores").unwrap_err();
    assert!(matches!(err, TodoServiceError::DuplicateTodoListTitle));

    service.rename_todo_list(chores_id, "Chores").unwrap();
    let err = service
        .rename_todo_list(Uuid::new_v4(), "Anything")
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::TodoListNotFound(_)));
}

#[test]
fn toggle_returns_new_state_and_reports_missing_todo() {
    let mut session = Session::new();
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));
    let seed = seed_todo_lists();
    let work = &seed[0];
    let target = &work.todos[2];

    let toggled = service.toggle_todo(work.id, target.id).unwrap();
    assert_eq!(toggled.done, !target.done);

    let missing_todo = Uuid::new_v4();
    let err = service.toggle_todo(work.id, missing_todo).unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::TodoNotFound { todo_id, .. } if todo_id == missing_todo
    ));

    let err = service.toggle_todo(Uuid::new_v4(), target.id).unwrap_err();
    assert!(matches!(err, TodoServiceError::TodoListNotFound(_)));
}

#[test]
fn create_complete_and_delete_todos() {
    let mut session = Session::new();
    let chores_id = seed_todo_lists()[1].id;
    {
        let mut service = TodoService::new(SessionTodoRepository::new(&mut session));
        service.create_todo(chores_id, "Take out trash").unwrap();
        service.complete_all_todos(chores_id).unwrap();

        let detail = service.todo_list_detail(chores_id).unwrap();
        assert_eq!(detail.todos.len(), 4);
        assert!(detail.is_done);

        let first = detail.todos[0].id;
        service.delete_todo(chores_id, first).unwrap();
        let err = service.delete_todo(chores_id, first).unwrap_err();
        assert!(matches!(err, TodoServiceError::TodoNotFound { .. }));

        let err = service.create_todo(Uuid::new_v4(), "orphan").unwrap_err();
        assert!(matches!(err, TodoServiceError::TodoListNotFound(_)));
        let err = service.complete_all_todos(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, TodoServiceError::TodoListNotFound(_)));
    }

    let chores = session
        .todo_lists
        .as_ref()
        .and_then(|lists| lists.iter().find(|list| list.id == chores_id))
        .expect("chores list should remain in session");
    assert_eq!(chores.todos.len(), 3);
}

#[test]
fn delete_todo_list_then_reports_not_found() {
    let mut session = Session::new();
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));
    let work_id = seed_todo_lists()[0].id;

    service.delete_todo_list(work_id).unwrap();
    let err = service.delete_todo_list(work_id).unwrap_err();
    assert!(matches!(err, TodoServiceError::TodoListNotFound(id) if id == work_id));
    assert_eq!(service.todo_lists_overview().len(), 1);
}

#[test]
fn too_long_todo_title_is_rejected_before_write() {
    let mut session = Session::new();
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));
    let work_id = seed_todo_lists()[0].id;

    let err = service.create_todo(work_id, &"x".repeat(101)).unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::TooLong { .. })
    ));

    let repo = service.into_inner();
    assert_eq!(repo.load_todo_list(work_id).unwrap().todos.len(), 3);
}

#[test]
fn service_errors_expose_title_cause_only() {
    use std::error::Error;

    let mut session = Session::new();
    let mut service = TodoService::new(SessionTodoRepository::new(&mut session));

    let err = service.create_todo_list("").unwrap_err();
    assert_eq!(
        err.source().map(|cause| cause.to_string()),
        Some(TitleError::Blank.to_string())
    );

    let err = service.create_todo_list("Work").unwrap_err();
    assert!(matches!(err, TodoServiceError::DuplicateTodoListTitle));
    assert!(err.source().is_none());

    let err = service.delete_todo_list(Uuid::new_v4()).unwrap_err();
    assert!(err.source().is_none());
    assert!(err.to_string().starts_with("todo list not found"));
}
