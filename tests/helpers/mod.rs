use anyhow::{Context, Result};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use tokio::sync::oneshot;
use wavenote::domain::{Emoji, Note};
use wavenote::infrastructure::ApiConfig;

/// How the fake answers `GET /api/notes`
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Ok,
    Unavailable,
    Garbage,
}

struct BackendState {
    notes: Mutex<Vec<Note>>,
    list_mode: Mutex<ListMode>,
    reject_posts: Mutex<bool>,
    list_requests: AtomicUsize,
    create_requests: AtomicUsize,
}

#[derive(Debug, Deserialize)]
struct CreateNote {
    nickname: String,
    content: String,
    emoji: Emoji,
}

async fn list_notes(State(state): State<Arc<BackendState>>) -> (StatusCode, String) {
    state.list_requests.fetch_add(1, Ordering::SeqCst);
    let mode = *state.list_mode.lock().unwrap();
    match mode {
        ListMode::Ok => {
            let notes = state.notes.lock().unwrap().clone();
            (StatusCode::OK, serde_json::to_string(&notes).unwrap())
        }
        ListMode::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "down".to_string()),
        ListMode::Garbage => (StatusCode::OK, "<html>not json</html>".to_string()),
    }
}

async fn create_note(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>), (StatusCode, String)> {
    state.create_requests.fetch_add(1, Ordering::SeqCst);
    if *state.reject_posts.lock().unwrap() {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "database unavailable".to_string(),
        ));
    }

    let mut notes = state.notes.lock().unwrap();
    let note = Note {
        id: notes.iter().map(|n| n.id).max().unwrap_or(0) + 1,
        nickname: body.nickname,
        content: body.content,
        emoji: body.emoji,
    };
    notes.push(note.clone());
    Ok((StatusCode::CREATED, Json(note)))
}

/// In-process notes backend serving `GET`/`POST /api/notes` on a random port
pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    shutdown: Option<oneshot::Sender<()>>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn start() -> Result<Self> {
        Self::with_notes(vec![])
    }

    /// Start with notes stored in the given order; listings return that order
    pub fn with_notes(notes: Vec<Note>) -> Result<Self> {
        let state = Arc::new(BackendState {
            notes: Mutex::new(notes),
            list_mode: Mutex::new(ListMode::Ok),
            reject_posts: Mutex::new(false),
            list_requests: AtomicUsize::new(0),
            create_requests: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/api/notes", get(list_notes).post(create_note))
            .with_state(state.clone());

        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .expect("Failed to build runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind fake backend");
                addr_tx
                    .send(listener.local_addr().expect("Failed to read local addr"))
                    .expect("Failed to report address");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("Fake backend crashed");
            });
        });

        let addr = addr_rx.recv().context("Fake backend failed to start")?;
        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::parse(&self.url()).expect("Fake backend URL is valid")
    }

    pub fn set_list_mode(&self, mode: ListMode) {
        *self.state.list_mode.lock().unwrap() = mode;
    }

    pub fn reject_posts(&self, reject: bool) {
        *self.state.reject_posts.lock().unwrap() = reject;
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        self.state.notes.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> usize {
        self.state.list_requests.load(Ordering::SeqCst)
    }

    pub fn create_requests(&self) -> usize {
        self.state.create_requests.load(Ordering::SeqCst)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Config pointing at a local port nobody listens on
#[allow(dead_code)]
pub fn unreachable_config() -> Result<ApiConfig> {
    let listener = TcpListener::bind("127.0.0.1:0").context("Failed to reserve port")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(ApiConfig::parse(&format!("http://{}", addr))?)
}

#[allow(dead_code)]
pub fn note(id: i64, nickname: &str, content: &str, emoji: Emoji) -> Note {
    Note {
        id,
        nickname: nickname.to_string(),
        content: content.to_string(),
        emoji,
    }
}
