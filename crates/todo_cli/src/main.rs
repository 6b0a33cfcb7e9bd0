//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todo_core` wiring.
//! - Run one fresh session through the service and print the result.
//!
//! Usage: `todo_cli [seed.json]`. Set `TODO_LOG_DIR` to an absolute path
//! to enable file logging.

use todo_core::{
    core_version, init_logging, load_seed_file, seed_todo_lists, LoggingConfig, Session,
    SessionTodoRepository, TodoService,
};

fn main() {
    println!("todo_core version={}", core_version());

    if let Ok(log_dir) = std::env::var("TODO_LOG_DIR") {
        if let Err(err) = init_logging(&LoggingConfig::with_default_level(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let seed = match std::env::args().nth(1) {
        Some(path) => match load_seed_file(&path) {
            Ok(todo_lists) => todo_lists,
            Err(err) => {
                eprintln!("failed to load seed `{path}`: {err}");
                std::process::exit(1);
            }
        },
        None => seed_todo_lists(),
    };

    let mut session = Session::new();
    println!("session seeded={}", session.is_seeded());
    {
        let mut service = TodoService::new(SessionTodoRepository::with_seed(&mut session, || seed));
        if let Err(err) = service.create_todo_list("Smoke check") {
            eprintln!("create_todo_list failed: {err}");
        }

        for summary in service.todo_lists_overview() {
            println!(
                "{:<5} {:>2}/{:<2} {}",
                if summary.is_done { "done" } else { "open" },
                summary.todo_count - summary.remaining_count,
                summary.todo_count,
                summary.title
            );
        }
    }

    println!("session seeded={}", session.is_seeded());
    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize session: {err}"),
    }
}
