use std::fmt;
use std::str::FromStr;

use crate::types::Todo;

/// Client-side view over a fetched list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Open,
    Done,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Open => !todo.done,
            TodoFilter::Done => todo.done,
        }
    }

    pub fn apply(self, todos: Vec<Todo>) -> Vec<Todo> {
        todos.into_iter().filter(|todo| self.matches(todo)).collect()
    }
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TodoFilter::All),
            "open" | "undone" => Ok(TodoFilter::Open),
            "done" => Ok(TodoFilter::Done),
            other => Err(format!("unknown filter `{other}`; expected all|undone|done")),
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TodoFilter::All => "all",
            TodoFilter::Open => "undone",
            TodoFilter::Done => "done",
        })
    }
}
