//! Shared harness for tests that talk to a real HTTP listener.
//!
//! The stub service runs on its own thread with a dedicated Actix system so
//! the blocking client under test can call it from the test thread.

use std::net::TcpListener;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use user_sync::SyncedUser;

/// One request as seen by the stub service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    reply: Mutex<(u16, String)>,
}

/// Recording stand-in for the user sync service.
///
/// Every request, whatever its path, is recorded and answered with the
/// scripted status and body.
pub struct StubServer {
    base_url: String,
    state: Arc<StubState>,
    handle: ServerHandle,
    thread: Option<JoinHandle<std::io::Result<()>>>,
}

impl StubServer {
    /// Start a stub that answers every request with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let state = Arc::new(StubState {
            requests: Mutex::new(Vec::new()),
            reply: Mutex::new((status, body.to_owned())),
        });

        let (handle_tx, handle_rx) = mpsc::channel();
        let server_state = Arc::clone(&state);
        let thread = std::thread::spawn(move || {
            actix_rt::System::new().block_on(async move {
                let data = web::Data::from(server_state);
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(data.clone())
                        .default_service(web::to(record_and_reply))
                })
                .workers(1)
                .disable_signals()
                .listen(listener)?
                .run();
                handle_tx
                    .send(server.handle())
                    .expect("hand server handle to test thread");
                server.await
            })
        });
        let handle = handle_rx.recv().expect("stub server should start");

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
            thread: Some(thread),
        }
    }

    /// Base URL to pass as the client's host URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Change the scripted answer for subsequent requests.
    pub fn reply_with(&self, status: u16, body: &str) {
        *self.state.reply.lock().unwrap_or_else(PoisonError::into_inner) =
            (status, body.to_owned());
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        futures::executor::block_on(self.handle.stop(true));
        if let Some(thread) = self.thread.take() {
            thread.join().ok();
        }
    }
}

async fn record_and_reply(
    request: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubState>,
) -> HttpResponse {
    let header = |name: HeaderName| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let recorded = RecordedRequest {
        method: request.method().as_str().to_owned(),
        path: request.path().to_owned(),
        content_type: header(CONTENT_TYPE),
        authorization: header(AUTHORIZATION),
        body: body.to_vec(),
    };
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(recorded);

    let (status, reply) = state
        .reply
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    HttpResponse::build(StatusCode::from_u16(status).expect("scripted status is valid"))
        .content_type("application/json")
        .body(reply)
}

/// The user every scenario synchronises.
pub fn tester_user() -> SyncedUser {
    SyncedUser {
        developer_identifier: "6b4bd452-895d-4098-aa56-e6046b238e0f".to_owned(),
        account_identifier: "160744112".to_owned(),
        user_identifier: "513".to_owned(),
        email: "tester1@goog-test.junittest.appdirect.co".to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        user_name: "tester1".to_owned(),
    }
}
