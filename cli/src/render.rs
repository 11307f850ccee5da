use todo_core::Todo;

/// One line per todo: checkbox, id, title.
pub fn render(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "no todos\n".to_string();
    }
    let width = todos
        .iter()
        .map(|todo| todo.id.to_string().len())
        .max()
        .unwrap_or(1);
    todos
        .iter()
        .map(|todo| {
            let mark = if todo.done { 'x' } else { ' ' };
            format!("[{mark}] {:>width$}  {}\n", todo.id, todo.title)
        })
        .collect()
}
