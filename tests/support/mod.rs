//! Test doubles shared by the behavior suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use quill_core::{HttpClient, HttpError, HttpRequest, HttpResponse, Sleeper};

/// Routes requests by URL prefix; each route replays its responses in
/// order and repeats the last one.
#[derive(Default)]
pub struct RoutedHttpClient {
    routes: Mutex<Vec<(String, VecDeque<Result<HttpResponse, HttpError>>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RoutedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, prefix: &str, responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .push((prefix.to_owned(), responses.into()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn requests_to(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.url.starts_with(prefix))
            .count()
    }
}

impl HttpClient for RoutedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let url = request.url.clone();
        self.requests.lock().expect("requests lock").push(request);

        let mut routes = self.routes.lock().expect("routes lock");
        let response = routes
            .iter_mut()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .and_then(|(_, responses)| {
                if responses.len() > 1 {
                    responses.pop_front()
                } else {
                    responses.front().cloned()
                }
            })
            .unwrap_or_else(|| Err(HttpError::new(format!("no route for {url}"))));

        Box::pin(async move { response })
    }
}

/// Records requested delays without waiting.
#[derive(Default)]
pub struct InstantSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl InstantSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().expect("sleeper lock").clone()
    }
}

impl Sleeper for InstantSleeper {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        self.slept.lock().expect("sleeper lock").push(duration);
        Box::pin(async {})
    }
}

pub const QUOTABLE_URL: &str = "https://quotable.test/random";
pub const TYPEFIT_URL: &str = "https://typefit.test/api/quotes";
pub const TAGS_URL: &str = "https://quotable.test/tags";

pub fn offline_error() -> Result<HttpResponse, HttpError> {
    Err(HttpError::new("connection refused"))
}

pub fn quotable_body(
    content: &str,
    author: &str,
    tags: &[&str],
) -> Result<HttpResponse, HttpError> {
    let body = serde_json::json!({
        "_id": "abc123",
        "content": content,
        "author": author,
        "tags": tags,
    });
    Ok(HttpResponse::ok_json(body.to_string()))
}

pub fn typefit_body(entries: &[(&str, Option<&str>)]) -> Result<HttpResponse, HttpError> {
    let body = entries
        .iter()
        .map(|(text, author)| serde_json::json!({ "text": text, "author": author }))
        .collect::<Vec<_>>();
    Ok(HttpResponse::ok_json(serde_json::Value::Array(body).to_string()))
}
