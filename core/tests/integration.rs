//! Full lifecycle test against a live todo server.
//!
//! # Design
//! Starts the server on a random port with an in-memory store, then
//! exercises every client operation over real HTTP using ureq.

use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoFilter,
    UpdateStatus,
};
use todo_server::{AppState, SqliteStore, TodoService};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> TodoClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let store = SqliteStore::open_in_memory().unwrap();
            todo_server::run(listener, AppState::new(TodoService::new(store))).await
        })
        .unwrap();
    });

    TodoClient::new(&format!("http://{addr}"))
}

#[test]
fn crud_lifecycle() {
    let client = start_server();

    // List: empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Create.
    let req = client
        .build_create_todo(&CreateTodo {
            title: "Buy milk".to_string(),
        })
        .unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Buy milk");
    assert!(!created.done);

    // Get.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(created.id))).unwrap();
    assert_eq!(fetched, created);

    // Complete.
    let completed = client
        .parse_update_todo(execute(client.build_complete_todo(created.id)))
        .unwrap();
    assert!(completed.done);

    // Filtered views after a full re-fetch.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(TodoFilter::Done.apply(todos.clone()).len(), 1);
    assert!(TodoFilter::Open.apply(todos).is_empty());

    // Reopen.
    let req = client
        .build_update_status(created.id, &UpdateStatus { status: false })
        .unwrap();
    let reopened = client.parse_update_todo(execute(req)).unwrap();
    assert!(!reopened.done);

    // Invalid title surfaces as BadRequest.
    let req = client
        .build_create_todo(&CreateTodo {
            title: "   ".to_string(),
        })
        .unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }), "{err:?}");

    // Delete.
    client
        .parse_delete_todo(execute(client.build_delete_todo(created.id)))
        .unwrap();

    // Get after delete: NotFound.
    let err = client
        .parse_get_todo(execute(client.build_get_todo(created.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    // Complete after delete: NotFound.
    let err = client
        .parse_update_todo(execute(client.build_complete_todo(created.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    // List: empty again.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}
