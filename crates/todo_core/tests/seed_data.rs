use std::io::Write;
use todo_core::{
    load_seed_file, parse_seed_json, SeedError, Session, SessionTodoRepository, TodoRepository,
};

const SEED_JSON: &str = r#"[
  {
    "id": "00000000-0000-4000-8000-000000000001",
    "title": "Garden",
    "todos": [
      { "id": "00000000-0000-4000-8000-000000000011", "title": "Water plants", "done": false },
      { "id": "00000000-0000-4000-8000-000000000012", "title": "Buy seeds", "done": true }
    ]
  },
  { "id": "00000000-0000-4000-8000-000000000002", "title": "books", "todos": [] }
]"#;

#[test]
fn parse_seed_json_loads_lists_in_order() {
    let todo_lists = parse_seed_json(SEED_JSON).unwrap();
    assert_eq!(todo_lists.len(), 2);
    assert_eq!(todo_lists[0].title, "Garden");
    assert_eq!(todo_lists[0].todos.len(), 2);
    assert!(todo_lists[1].todos.is_empty());
}

#[test]
fn parse_seed_json_rejects_duplicate_list_ids() {
    let json = r#"[
      { "id": "00000000-0000-4000-8000-000000000001", "title": "a", "todos": [] },
      { "id": "00000000-0000-4000-8000-000000000001", "title": "b", "todos": [] }
    ]"#;
    let err = parse_seed_json(json).unwrap_err();
    assert!(matches!(err, SeedError::DuplicateTodoListId(_)));
}

#[test]
fn parse_seed_json_rejects_duplicate_todo_ids_within_list() {
    let json = r#"[
      {
        "id": "00000000-0000-4000-8000-000000000001",
        "title": "a",
        "todos": [
          { "id": "00000000-0000-4000-8000-000000000011", "title": "x", "done": false },
          { "id": "00000000-0000-4000-8000-000000000011", "title": "y", "done": true }
        ]
      }
    ]"#;
    let err = parse_seed_json(json).unwrap_err();
    assert!(matches!(err, SeedError::DuplicateTodoId { .. }));
}

#[test]
fn parse_seed_json_rejects_malformed_input() {
    let err = parse_seed_json("[{\"title\": 3}]").unwrap_err();
    assert!(matches!(err, SeedError::Json(_)));
}

#[test]
fn load_seed_file_reads_json_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED_JSON.as_bytes()).unwrap();

    let todo_lists = load_seed_file(file.path()).unwrap();
    assert_eq!(todo_lists.len(), 2);
}

#[test]
fn load_seed_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_seed_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SeedError::Io(_)));
}

#[test]
fn custom_seed_initializes_session() {
    let seed = parse_seed_json(SEED_JSON).unwrap();
    let mut session = Session::new();
    let repo = SessionTodoRepository::with_seed(&mut session, || seed);

    let titles: Vec<String> = repo
        .sorted_todo_lists()
        .into_iter()
        .map(|list| list.title)
        .collect();
    assert_eq!(titles, vec!["books", "Garden"]);
}
