use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::{JobClient, JobError, JobRequest, JobResult};

/// Deployment configuration for the live scrape service.
///
/// Resolved once at composition time and handed to the client constructor;
/// the client never consults ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Endpoint URL of the scrape service.
    pub endpoint: String,
    /// API key sent in the `x-api-key` header. No default exists.
    pub api_key: String,
}

/// Dispatches scrape jobs to the live HTTP service.
///
/// One HTTPS POST per dispatch. Every failure mode is classified before
/// returning: no response reached the client → [`JobError::Network`],
/// explicit service rejection → [`JobError::Server`], anything else →
/// [`JobError::Unknown`].
pub struct RemoteJobClient {
    http_client: Arc<dyn HttpClient>,
    config: RemoteConfig,
}

impl RemoteJobClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: RemoteConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    async fn post_job(&self, request: &JobRequest) -> Result<JobResult, JobError> {
        let body = serde_json::to_string(&ScrapeJobBody::from_request(request))
            .map_err(|e| JobError::unknown(format!("failed to encode request body: {e}")))?;

        let http_request = HttpRequest::post(&self.config.endpoint)
            .with_header("content-type", "application/json")
            .with_auth(&HttpAuth::ApiKey(self.config.api_key.clone()))
            .with_body(body);

        tracing::debug!(
            endpoint = %self.config.endpoint,
            symbols = request.symbols.len(),
            format = %request.format,
            "dispatching scrape job"
        );

        let response = match self.http_client.execute(http_request).await {
            Ok(response) => response,
            Err(error) if error.is_transport() => {
                return Err(JobError::network(format!(
                    "no response received from server: {}",
                    error.message()
                )));
            }
            Err(error) => return Err(JobError::unknown(error.message().to_owned())),
        };

        if !response.is_success() {
            return Err(server_rejection(response.status, &response.body));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| JobError::unknown(format!("failed to decode scrape response: {e}")))
    }
}

impl JobClient for RemoteJobClient {
    fn dispatch<'a>(
        &'a self,
        request: JobRequest,
    ) -> Pin<Box<dyn Future<Output = Result<JobResult, JobError>> + Send + 'a>> {
        Box::pin(async move { self.post_job(&request).await })
    }
}

/// POST body in the scrape service wire format.
#[derive(Debug, Serialize)]
struct ScrapeJobBody<'a> {
    stock_symbols: &'a [String],
    start_date: String,
    end_date: String,
    output_format: &'static str,
}

impl<'a> ScrapeJobBody<'a> {
    fn from_request(request: &'a JobRequest) -> Self {
        Self {
            stock_symbols: &request.symbols,
            start_date: request.start_date(),
            end_date: request.end_date(),
            output_format: request.format.as_str(),
        }
    }
}

/// Optional error body shape; the service may omit it entirely.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_rejection(status: u16, body: &str) -> JobError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| status_line(status));
    JobError::server(status, message)
}

fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|parsed| parsed.canonical_reason())
    {
        Some(reason) => format!("HTTP {status} {reason}"),
        None => format!("HTTP {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_date, OutputFormat};
    use crate::http_client::{HttpError, HttpMethod, HttpResponse};
    use std::sync::Mutex;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    #[derive(Debug)]
    struct StubHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl StubHttpClient {
        fn returning(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for StubHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn client_with(transport: Arc<StubHttpClient>) -> RemoteJobClient {
        RemoteJobClient::new(
            transport,
            RemoteConfig {
                endpoint: String::from("https://scrape.example.test/dev/scrape"),
                api_key: String::from("test-key"),
            },
        )
    }

    fn sample_request() -> JobRequest {
        JobRequest::builder()
            .symbols(["AAPL", "MSFT"])
            .start_date(parse_date("2024-01-01").expect("valid date"))
            .end_date(parse_date("2024-01-31").expect("valid date"))
            .output_format(OutputFormat::Json)
            .build()
            .expect("valid request")
    }

    #[test]
    fn dispatch_sends_one_post_with_api_key_and_json_body() {
        let transport = Arc::new(StubHttpClient::returning(Err(HttpError::transport(
            "connection refused",
        ))));
        let client = client_with(Arc::clone(&transport));

        let _ = block_on(client.dispatch(sample_request()));

        let requests = transport.recorded_requests();
        assert_eq!(requests.len(), 1);

        let sent = &requests[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://scrape.example.test/dev/scrape");
        assert_eq!(
            sent.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            sent.headers.get("x-api-key").map(String::as_str),
            Some("test-key")
        );

        let body: serde_json::Value =
            serde_json::from_str(sent.body.as_deref().expect("body must be present"))
                .expect("body must be JSON");
        assert_eq!(body["stock_symbols"], serde_json::json!(["AAPL", "MSFT"]));
        assert_eq!(body["start_date"], "2024-01-01");
        assert_eq!(body["end_date"], "2024-01-31");
        assert_eq!(body["output_format"], "json");
    }

    #[test]
    fn rejection_with_message_body_classifies_as_server_error() {
        let transport = Arc::new(StubHttpClient::returning(Ok(HttpResponse::with_status(
            402,
            r#"{"message":"Payment Required"}"#,
        ))));
        let client = client_with(transport);

        let error = block_on(client.dispatch(sample_request())).expect_err("must fail");
        assert_eq!(
            error,
            JobError::Server {
                status: Some(402),
                message: String::from("Payment Required"),
            }
        );
    }

    #[test]
    fn rejection_without_message_body_falls_back_to_status_line() {
        let transport = Arc::new(StubHttpClient::returning(Ok(HttpResponse::with_status(
            500,
            "<html>oops</html>",
        ))));
        let client = client_with(transport);

        let error = block_on(client.dispatch(sample_request())).expect_err("must fail");
        assert_eq!(
            error,
            JobError::Server {
                status: Some(500),
                message: String::from("HTTP 500 Internal Server Error"),
            }
        );
    }

    #[test]
    fn transport_failure_classifies_as_network_error_never_server() {
        let transport = Arc::new(StubHttpClient::returning(Err(HttpError::transport(
            "connection refused",
        ))));
        let client = client_with(transport);

        let error = block_on(client.dispatch(sample_request())).expect_err("must fail");
        assert!(matches!(error, JobError::Network(_)), "got {error:?}");
    }

    #[test]
    fn unparseable_success_body_classifies_as_unknown_error() {
        let transport = Arc::new(StubHttpClient::returning(Ok(HttpResponse::ok_json(
            "not json at all",
        ))));
        let client = client_with(transport);

        let error = block_on(client.dispatch(sample_request())).expect_err("must fail");
        assert!(matches!(error, JobError::Unknown(_)), "got {error:?}");
    }

    #[test]
    fn success_body_is_consumed_verbatim() {
        let transport = Arc::new(StubHttpClient::returning(Ok(HttpResponse::ok_json(
            r#"{
                "s3_uri": "s3://stock-data-bucket/data/stock_data_AAPL_MSFT_20240131120000.json",
                "download_url": "https://stock-data-bucket.s3.amazonaws.com/data/stock_data_AAPL_MSFT_20240131120000.json",
                "expiration": "1 hour",
                "stock_symbols": ["AAPL", "MSFT"],
                "start_date": "2024-01-01",
                "end_date": "2024-01-31",
                "output_format": "json"
            }"#,
        ))));
        let client = client_with(transport);

        let result = block_on(client.dispatch(sample_request())).expect("must succeed");
        assert_eq!(result.stock_symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(result.output_format, "json");
        assert!(result.download_url.contains("stock_data_AAPL_MSFT"));
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
        // SAFETY: The vtable functions never dereference the data pointer and are no-op operations.
        unsafe { Waker::from_raw(noop_raw_waker()) }
    }

    fn noop_raw_waker() -> RawWaker {
        RawWaker::new(std::ptr::null(), &NOOP_RAW_WAKER_VTABLE)
    }

    unsafe fn noop_raw_waker_clone(_: *const ()) -> RawWaker {
        noop_raw_waker()
    }

    unsafe fn noop_raw_waker_wake(_: *const ()) {}

    unsafe fn noop_raw_waker_wake_by_ref(_: *const ()) {}

    unsafe fn noop_raw_waker_drop(_: *const ()) {}

    static NOOP_RAW_WAKER_VTABLE: RawWakerVTable = RawWakerVTable::new(
        noop_raw_waker_clone,
        noop_raw_waker_wake,
        noop_raw_waker_wake_by_ref,
        noop_raw_waker_drop,
    );
}
