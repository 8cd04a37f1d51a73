use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Response header carrying the handling time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Stamp every response with its wall-clock handling time, in seconds.
pub async fn process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}
