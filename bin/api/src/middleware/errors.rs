//! Global error interception.
//!
//! Panics anywhere below [`catch_panic_layer`] become the structured 500 body.
//! With the debug policy on, [`expose_error_details`] swaps the generic 500
//! message for the recorded cause.

use std::any::Any;

use axum::Json;
use axum::body::Body;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::{ErrorBody, INTERNAL_MESSAGE, InternalErrorCause};

/// Converts a caught panic into the structured 500 response.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    debug: bool,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let cause = panic_message(err.as_ref());
        tracing::error!(panic = %cause, "Handler panicked");

        let message = if self.debug {
            cause
        } else {
            INTERNAL_MESSAGE.to_owned()
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::internal(message)),
        )
            .into_response()
    }
}

pub fn catch_panic_layer(debug: bool) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder { debug })
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    }
}

/// Rewrite internal-error bodies to carry their cause. Debug policy only.
pub async fn expose_error_details(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let Some(InternalErrorCause(cause)) =
        response.extensions().get::<InternalErrorCause>().cloned()
    else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let mut response = Json(ErrorBody::internal(cause)).into_response();
    *response.status_mut() = parts.status;
    for (name, value) in parts.headers.iter() {
        response.headers_mut().insert(name.clone(), value.clone());
    }
    response
}
