//! Scripted capability implementations shared by the unit tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use reqwest::{
    header::{HeaderMap, HeaderValue, SET_COOKIE},
    Method, StatusCode,
};

use crate::{
    error::FetchError,
    http::{FetchRequest, FetchResponse, Fetcher},
    prompt::{PasswordPrompt, PasswordPromptOptions},
};

/// A fetcher driven by a `(method, url) -> response` script, recording every
/// request it performs. Requests outside the script fail like an
/// unreachable server.
pub(crate) struct ScriptedFetcher {
    responses: HashMap<(Method, String), FetchResponse>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond(mut self, method: Method, url: &str, response: FetchResponse) -> Self {
        self.responses.insert((method, url.to_string()), response);
        self
    }

    /// Every request performed so far, in order.
    pub(crate) fn recorded(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        self.responses
            .get(&(request.method.clone(), request.url.clone()))
            .cloned()
            .ok_or_else(|| FetchError::Connection(format!("no route to {}", request.url)))
    }
}

/// Builds a response with the given transport flag and status code.
pub(crate) fn response(ok: bool, status: u16) -> FetchResponse {
    FetchResponse {
        ok,
        status: StatusCode::from_u16(status).unwrap(),
        headers: HeaderMap::new(),
    }
}

/// Builds a response carrying a single `set-cookie` header.
pub(crate) fn response_with_cookie(ok: bool, status: u16, set_cookie: &str) -> FetchResponse {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, HeaderValue::from_str(set_cookie).unwrap());

    FetchResponse {
        ok,
        status: StatusCode::from_u16(status).unwrap(),
        headers,
    }
}

/// A prompt answering from a fixed script, counting how often it was shown.
pub(crate) struct ScriptedPrompt {
    answer: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedPrompt {
    /// A prompt the user answers with `password`.
    pub(crate) fn answering(password: &str) -> Self {
        Self {
            answer: Some(password.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A prompt the user dismisses.
    pub(crate) fn cancelled() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordPrompt for ScriptedPrompt {
    async fn show_input_box(&self, _options: PasswordPromptOptions) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}
