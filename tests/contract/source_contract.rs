use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use quill_core::{
    Category, CategoryDirectory, CategoryFilter, HttpClient, HttpError, HttpRequest, HttpResponse,
    ProviderId, QuotableAdapter, QuoteRequest, QuoteSource, SourceErrorKind, TypeFitAdapter,
};

/// Answers every request with the same canned result.
struct CannedHttpClient {
    response: Result<HttpResponse, HttpError>,
    urls: Mutex<Vec<String>>,
}

impl CannedHttpClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            urls: Mutex::new(Vec::new()),
        })
    }
}

impl HttpClient for CannedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.urls.lock().expect("urls lock").push(request.url);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

struct SourceCase {
    id: ProviderId,
    filter: CategoryFilter,
    success_body: &'static str,
    build: fn(Arc<dyn HttpClient>) -> Arc<dyn QuoteSource>,
}

fn quotable(http: Arc<dyn HttpClient>) -> Arc<dyn QuoteSource> {
    Arc::new(QuotableAdapter::with_http_client(
        http,
        "https://quotable.test/random",
    ))
}

fn typefit(http: Arc<dyn HttpClient>) -> Arc<dyn QuoteSource> {
    Arc::new(TypeFitAdapter::with_http_client(
        http,
        "https://typefit.test/api/quotes",
        Arc::new(CategoryDirectory::builtin()),
    ))
}

fn source_cases() -> Vec<SourceCase> {
    vec![
        SourceCase {
            id: ProviderId::Quotable,
            filter: CategoryFilter::Server,
            success_body: r#"{"_id":"q1","content":"Stay hungry.","author":"Steve Jobs","tags":["famous-quotes"]}"#,
            build: quotable,
        },
        SourceCase {
            id: ProviderId::Typefit,
            filter: CategoryFilter::Approximate,
            success_body: r#"[{"text":"Stay hungry.","author":"Steve Jobs"}]"#,
            build: typefit,
        },
    ]
}

#[test]
fn every_source_reports_its_identity_and_filter_capability() {
    for case in source_cases() {
        let source = (case.build)(CannedHttpClient::new(Ok(HttpResponse::ok_json("{}"))));

        assert_eq!(source.id(), case.id);
        assert_eq!(source.category_filter(), case.filter, "source '{}'", case.id);
        assert_eq!(
            source.supports_category_filter(),
            case.filter == CategoryFilter::Server,
            "source '{}'",
            case.id
        );
    }
}

#[test]
fn successful_payloads_map_to_canonical_quotes() {
    for case in source_cases() {
        let source = (case.build)(CannedHttpClient::new(Ok(HttpResponse::ok_json(
            case.success_body,
        ))));

        let quote = block_on(source.fetch(QuoteRequest::any()))
            .unwrap_or_else(|error| panic!("source '{}' fetch failed: {error}", case.id));

        assert_eq!(quote.text(), "Stay hungry.", "source '{}'", case.id);
        assert_eq!(quote.author(), "Steve Jobs", "source '{}'", case.id);
    }
}

#[test]
fn transport_failures_surface_as_transport_errors() {
    for case in source_cases() {
        let source = (case.build)(CannedHttpClient::new(Err(HttpError::new("dns failure"))));

        let error = block_on(source.fetch(QuoteRequest::any()))
            .expect_err("transport failure must propagate");

        assert_eq!(error.kind(), SourceErrorKind::Transport, "source '{}'", case.id);
        assert_eq!(error.code(), "source.transport");
    }
}

#[test]
fn non_success_statuses_surface_as_transport_errors() {
    for case in source_cases() {
        let source = (case.build)(CannedHttpClient::new(Ok(HttpResponse::with_status(
            500, "oops",
        ))));

        let error = block_on(source.fetch(QuoteRequest::any()))
            .expect_err("error status must propagate");

        assert_eq!(error.kind(), SourceErrorKind::Transport, "source '{}'", case.id);
        assert!(error.message().contains("500"), "source '{}'", case.id);
    }
}

#[test]
fn malformed_payloads_surface_as_schema_errors() {
    for case in source_cases() {
        let source = (case.build)(CannedHttpClient::new(Ok(HttpResponse::ok_json(
            "not json",
        ))));

        let error = block_on(source.fetch(QuoteRequest::any()))
            .expect_err("malformed body must propagate");

        assert_eq!(error.kind(), SourceErrorKind::Schema, "source '{}'", case.id);
        assert_eq!(error.code(), "source.schema");
    }
}

#[test]
fn category_requests_reach_only_server_side_filters_as_query_params() {
    let life = Category::from_slug("life").expect("valid category");

    for case in source_cases() {
        let http = CannedHttpClient::new(Ok(HttpResponse::ok_json(case.success_body)));
        let source = (case.build)(http.clone());

        block_on(source.fetch(QuoteRequest::in_category(life.clone())))
            .unwrap_or_else(|error| panic!("source '{}' fetch failed: {error}", case.id));

        let urls = http.urls.lock().expect("urls lock").clone();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0].contains("tags=life"),
            case.filter == CategoryFilter::Server,
            "source '{}': {}",
            case.id,
            urls[0]
        );
    }
}

fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);
    let mut future = std::pin::pin!(future);

    loop {
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => return output,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

fn noop_waker() -> Waker {
    // SAFETY: The vtable functions never dereference the data pointer.
    unsafe { Waker::from_raw(noop_raw_waker()) }
}

fn noop_raw_waker() -> RawWaker {
    RawWaker::new(std::ptr::null(), &NOOP_WAKER_VTABLE)
}

unsafe fn noop_clone(_: *const ()) -> RawWaker {
    noop_raw_waker()
}

unsafe fn noop(_: *const ()) {}

static NOOP_WAKER_VTABLE: RawWakerVTable =
    RawWakerVTable::new(noop_clone, noop, noop, noop);
