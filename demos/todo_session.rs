//! Interactive Todo Session
//!
//! This example drives the action loop from the terminal.
//!
//! Key concepts:
//! - One startup fetch that either fills the list or is logged and ignored
//! - A composer deciding whether a submit adds or updates
//! - Renderers reading immutable snapshots
//!
//! Run with: cargo run --example todo_session
//! Offline:  cargo run --example todo_session -- --offline
//!
//! Commands: `list`, `add <title>`, `edit <id>`, `save <title>`, `cancel`,
//! `delete <id>`, `quit`.

use todo_state::builder::SourceConfig;
use todo_state::core::{Action, Composer, TodoId, TodoState};
use todo_state::effects::{Runtime, StaticSource};
use todo_state::todos;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn render(state: &TodoState, composer: &Composer) {
    println!("\nWhat's the Plan for Today?");
    if state.is_empty() {
        println!("  (nothing yet)");
    }
    for item in state.todos() {
        println!("  [{}] {}", item.id, item.title);
    }
    println!("  <{}> draft: {:?}\n", composer.mode().submit_label(), composer.draft());
}

fn parse_id(raw: &str) -> TodoId {
    raw.parse::<i64>()
        .map(TodoId::Int)
        .unwrap_or_else(|_| TodoId::from(raw))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let runtime = if std::env::args().any(|a| a == "--offline") {
        Runtime::spawn_with_source(StaticSource::new(todos![
            1 => "Plan the week",
            2 => "Buy groceries",
        ]))
    } else {
        Runtime::from_config(SourceConfig::default())?
    };

    let dispatcher = runtime.dispatcher();
    let mut composer = Composer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&runtime.snapshot(), &composer);

    while let Some(line) = lines.next_line().await? {
        let (command, rest) = line
            .trim()
            .split_once(' ')
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line.trim(), ""));
        let state = runtime.snapshot();

        match command {
            "list" | "" => {}
            "add" => {
                composer.cancel_edit();
                composer.set_draft(rest);
                dispatcher.dispatch(composer.submit(&state))?;
            }
            "edit" => match state.get(&parse_id(rest)) {
                Some(item) => composer.begin_edit(item),
                None => println!("No todo with id {rest}"),
            },
            "save" => {
                if !rest.is_empty() {
                    composer.set_draft(rest);
                }
                dispatcher.dispatch(composer.submit(&state))?;
            }
            "cancel" => composer.cancel_edit(),
            "delete" => dispatcher.dispatch(Action::Delete(parse_id(rest)))?,
            "quit" | "exit" => break,
            other => println!("Unknown command: {other}"),
        }

        // Let the loop apply what was just queued before rendering
        tokio::task::yield_now().await;
        render(&runtime.snapshot(), &composer);
    }

    let store = runtime.shutdown().await?;
    println!("Applied actions: {:?}", store.log().names());
    Ok(())
}
