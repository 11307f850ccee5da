//! Command-line client for the todo API.
//!
//! Every mutation is followed by a full re-fetch, so what is printed is
//! always the server's view.

mod render;
mod transport;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todo_core::{CreateTodo, Todo, TodoClient, TodoFilter, TodoId, UpdateStatus};
use tracing_subscriber::EnvFilter;

use crate::render::render;
use crate::transport::Transport;

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Command-line client for the todo API")]
struct Cli {
    /// Base URL of the todo server.
    #[arg(long, env = "TODO_URL", default_value = "http://127.0.0.1:8080", global = true)]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show todos.
    List {
        /// all, undone or done.
        #[arg(long, default_value_t = TodoFilter::All)]
        filter: TodoFilter,
    },
    /// Add a todo. Words are joined with single spaces.
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a todo done.
    Done { id: TodoId },
    /// Mark a done todo as open again.
    Reopen { id: TodoId },
    /// Delete a todo.
    Delete { id: TodoId },
}

struct App {
    client: TodoClient,
    transport: Transport,
}

impl App {
    fn list(&self) -> Result<Vec<Todo>> {
        let response = self.transport.execute(self.client.build_list_todos())?;
        Ok(self.client.parse_list_todos(response)?)
    }

    fn run(&self, command: Command) -> Result<()> {
        let filter = match command {
            Command::List { filter } => filter,
            Command::Add { title } => {
                let input = CreateTodo {
                    title: title.join(" "),
                };
                let response = self.transport.execute(self.client.build_create_todo(&input)?)?;
                let todo = self.client.parse_create_todo(response).context("cannot add todo")?;
                println!("added #{}", todo.id);
                TodoFilter::All
            }
            Command::Done { id } => {
                let response = self.transport.execute(self.client.build_complete_todo(id))?;
                self.client
                    .parse_update_todo(response)
                    .with_context(|| format!("cannot complete todo {id}"))?;
                TodoFilter::All
            }
            Command::Reopen { id } => {
                let req = self.client.build_update_status(id, &UpdateStatus { status: false })?;
                let response = self.transport.execute(req)?;
                self.client
                    .parse_update_todo(response)
                    .with_context(|| format!("cannot reopen todo {id}"))?;
                TodoFilter::All
            }
            Command::Delete { id } => {
                let response = self.transport.execute(self.client.build_delete_todo(id))?;
                self.client
                    .parse_delete_todo(response)
                    .with_context(|| format!("cannot delete todo {id}"))?;
                TodoFilter::All
            }
        };

        let todos = self.list().context("cannot fetch todos")?;
        print!("{}", render(&filter.apply(todos)));
        Ok(())
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App {
        client: TodoClient::new(&cli.url),
        transport: Transport::default(),
    };
    app.run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_joins_words() {
        let cli = Cli::try_parse_from(["todo", "add", "Buy", "oat", "milk"]).unwrap();
        match cli.command {
            Command::Add { title } => assert_eq!(title.join(" "), "Buy oat milk"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_accepts_filter_names() {
        let cli = Cli::try_parse_from(["todo", "list", "--filter", "undone"]).unwrap();
        assert!(matches!(cli.command, Command::List { filter: TodoFilter::Open }));
        assert!(Cli::try_parse_from(["todo", "list", "--filter", "soon"]).is_err());
    }

    #[test]
    fn ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["todo", "done", "abc"]).is_err());
        let cli = Cli::try_parse_from(["todo", "--url", "http://h:1/", "delete", "4"]).unwrap();
        assert_eq!(cli.url, "http://h:1/");
        assert!(matches!(cli.command, Command::Delete { id: 4 }));
    }
}
