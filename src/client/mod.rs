//! Chat controller for a single user and a single conversation.
//!
//! All state lives in [`UiState`] and changes only through the event methods
//! on [`ChatController`]. A query goes through three steps: `begin_submit`
//! records the user's message and raises `loading`, `send` performs the proxy
//! call, and `settle` appends the assistant's reply and lowers `loading`
//! again. [`ChatController::submit`] runs all three in order. While a query is
//! in flight every further submit is a no-op, so at most one request is ever
//! outstanding.

pub mod reply;
pub mod transport;

use log::{debug, warn};

use crate::auth::AuthState;
use crate::web::models::{Message, QueryRequest};

pub use reply::{ClientError, HttpReply};
pub use transport::{ChatTransport, HttpTransport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub input_value: String,
    pub loading: bool,
    pub transcript: Vec<Message>,
    /// Sticky: once shown the transcript never collapses again.
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealed,
    AwaitingResponse,
}

pub struct ChatController<T> {
    transport: T,
    auth: AuthState,
    state: UiState,
    scroll_pending: bool,
}

impl<T: ChatTransport> ChatController<T> {
    pub fn new(transport: T, auth: AuthState) -> Self {
        Self {
            transport,
            auth,
            state: UiState::default(),
            scroll_pending: false,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn transcript(&self) -> &[Message] {
        &self.state.transcript
    }

    /// Where a signed-out user should be sent instead of seeing the chat.
    pub fn redirect_target(&self) -> Option<&str> {
        self.auth.redirect_target()
    }

    pub fn phase(&self) -> Phase {
        if self.state.loading {
            Phase::AwaitingResponse
        } else if self.state.revealed {
            Phase::Revealed
        } else {
            Phase::Idle
        }
    }

    /// Typing into the input. Ignored while a query is in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.state.loading {
            return;
        }
        self.state.input_value = text.into();
    }

    pub fn focus(&mut self) {
        self.reveal();
    }

    pub fn click(&mut self) {
        self.reveal();
    }

    /// Start a query. Returns the request to send, or `None` when the submit
    /// is a no-op (blank text, a query already in flight, or no session).
    pub fn begin_submit(&mut self, text: &str) -> Option<QueryRequest> {
        let query = text.trim();
        if query.is_empty() || self.state.loading {
            return None;
        }
        if let Some(target) = self.auth.redirect_target() {
            warn!("Submit ignored without a session, sign in at {}", target);
            return None;
        }

        self.reveal();
        self.push(Message::user(query));
        self.state.input_value.clear();
        self.set_loading(true);

        Some(QueryRequest {
            query: query.to_string(),
        })
    }

    pub async fn send(&self, request: &QueryRequest) -> Result<HttpReply, ClientError> {
        self.transport.post_query(request).await
    }

    /// Finish the in-flight query with whatever the proxy call produced.
    pub fn settle(&mut self, outcome: Result<HttpReply, ClientError>) {
        if !self.state.loading {
            warn!("Ignoring a reply with no query in flight");
            return;
        }

        if let Err(e) = &outcome {
            debug!("Proxy call failed: {}", e);
        }
        self.push(Message::assistant(reply::assistant_content(outcome)));
        self.set_loading(false);
    }

    /// Submit `text` and wait for the reply. Returns whether a request was made.
    pub async fn submit(&mut self, text: &str) -> bool {
        let Some(request) = self.begin_submit(text) else {
            return false;
        };
        let outcome = self.send(&request).await;
        self.settle(outcome);
        true
    }

    /// Submit whatever is currently typed into the input.
    pub async fn submit_input(&mut self) -> bool {
        let text = self.state.input_value.clone();
        self.submit(&text).await
    }

    /// True once after each change to the transcript or the loading flag, so
    /// the view knows to scroll the newest entry into sight.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    fn reveal(&mut self) {
        if !self.state.revealed {
            debug!("Revealing chat transcript");
            self.state.revealed = true;
        }
    }

    fn push(&mut self, message: Message) {
        self.state.transcript.push(message);
        self.scroll_pending = true;
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        self.scroll_pending = true;
    }
}
