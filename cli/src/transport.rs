//! Executes `todo-core` requests over the network.

use thiserror::Error;
use todo_core::{HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

#[derive(Debug, Error)]
#[error("{method} {path}: {source}")]
pub struct TransportError {
    method: HttpMethod,
    path: String,
    #[source]
    source: ureq::Error,
}

/// Blocking executor. Non-2xx statuses come back as data so the core client
/// decides what they mean.
pub struct Transport {
    agent: ureq::Agent,
}

impl Default for Transport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport {

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method, path, body, ..
        } = req;
        let result = match (method, body) {
            (HttpMethod::Get, _) => self.agent.get(&path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&path).send_empty(),
        };

        let fail = |source: ureq::Error| TransportError {
            method,
            path: path.clone(),
            source,
        };
        let mut response = result.map_err(fail)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(fail)?;
        debug!(%method, %path, status, "request executed");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
