//! Full confirm-then-refresh lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the controller over
//! real HTTP through a ureq-backed `Transport`. Validates that request
//! building, response parsing, and the mutation-then-refresh sequencing work
//! end-to-end with the actual server.

use task_sync::controller::FETCH_FAILED;
use task_sync::{
    dispatch, HttpMethod, HttpRequest, HttpResponse, Intent, NewTaskInput, Status,
    SyncController, Transport, TransportError,
};

/// Executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, leaving status
/// interpretation to the wire client. Transport-level failures (connection
/// refused and the like) become `TransportError`.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError {
            message: e.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Start the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            task_api_mock::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[tokio::test]
async fn confirm_then_refresh_lifecycle() {
    let base = start_server();
    let controller = SyncController::new(&base, UreqTransport::new());

    // Initial fetch — empty collection, settled Idle.
    controller.fetch_all().await.unwrap();
    assert!(controller.store().tasks().is_empty());
    assert_eq!(*controller.store().status(), Status::Idle);

    // Create through the draft, confirm the refreshed view.
    {
        let mut store = controller.store_mut();
        store.draft_mut().title = "Integration test".to_string();
        store.draft_mut().description = "end to end".to_string();
    }
    let input = NewTaskInput::from_draft(controller.store().draft()).unwrap();
    controller.create(&input).await.unwrap();

    let record = {
        let store = controller.store();
        assert_eq!(store.tasks().len(), 1);
        assert!(store.draft().title.is_empty());
        assert_eq!(*store.status(), Status::Idle);
        let record = store.tasks()[0].clone();
        assert_eq!(record.title, "Integration test");
        assert_eq!(record.description.as_deref(), Some("end to end"));
        assert!(!record.completed);
        record
    };

    // Toggle — post-refresh view shows the flip, everything else unchanged.
    controller.toggle_complete(&record).await.unwrap();
    {
        let store = controller.store();
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, record.id);
        assert_eq!(store.tasks()[0].title, record.title);
        assert_eq!(store.tasks()[0].description, record.description);
        assert!(store.tasks()[0].completed);
    }

    // Delete through the presentation boundary; the record leaves the view
    // only via the refresh.
    dispatch(&controller, Intent::ClickDelete(record.id)).await.unwrap();
    assert!(controller.store().tasks().is_empty());
    assert_eq!(*controller.store().status(), Status::Idle);
}

#[tokio::test]
async fn unreachable_server_sets_fetch_error() {
    // Nothing listens on port 1; the transport fails outright.
    let controller = SyncController::new("http://127.0.0.1:1/api", UreqTransport::new());

    controller.fetch_all().await.unwrap_err();
    assert_eq!(controller.store().status().error_message(), Some(FETCH_FAILED));
    assert!(controller.store().tasks().is_empty());
}
