//! Redirect dispatch.
//!
//! # Responsibilities
//! - Look up the request path in the redirect table
//! - On a hit, answer `302 Found` with the mapped `Location`
//! - On a miss, delegate the request unchanged to the fallback
//!
//! # Design Decisions
//! - Table and fallback are explicit struct fields, not closure captures
//! - Fallback is any `tower::Service` over `http` types, so the dispatcher
//!   is not tied to a concrete framework
//! - One lookup, one branch; request handling itself cannot fail

use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::{ready, Either, Ready};
use http::{header, HeaderValue, Request, Response, StatusCode};
use tower::Service;

use crate::observability::metrics;
use crate::routing::RedirectTable;

/// Request handler that redirects mapped paths and falls back otherwise.
///
/// Cloning is cheap: the table is shared via `Arc` and the fallback is
/// cloned, which lets the serving infrastructure invoke the handler from
/// many request contexts concurrently. The table is never mutated after
/// construction, so no synchronization is needed.
#[derive(Clone)]
pub struct RedirectHandler<F> {
    table: Arc<RedirectTable>,
    fallback: F,
}

impl<F> RedirectHandler<F> {
    /// Wrap a lookup table and a fallback handler.
    pub fn new(table: Arc<RedirectTable>, fallback: F) -> Self {
        Self { table, fallback }
    }
}

impl<F, ReqBody, ResBody> Service<Request<ReqBody>> for RedirectHandler<F>
where
    F: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = F::Error;
    type Future = Either<Ready<Result<Self::Response, Self::Error>>, F::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // Exact path component only; the query string is not part of the key.
        match self.table.target(req.uri().path()) {
            Some(url) => {
                tracing::debug!(path = %req.uri().path(), location = %url, "Redirecting");
                metrics::record_lookup(true);
                Either::Left(ready(Ok(found(url))))
            }
            None => {
                metrics::record_lookup(false);
                Either::Right(self.fallback.call(req))
            }
        }
    }
}

/// Build a `302 Found` response pointing at `target`.
///
/// Redirect targets are opaque strings, so a target that is not a valid
/// header value can only be caught here; it is answered with a 500 rather
/// than panicking in the serve loop.
fn found<B: Default>(target: &str) -> Response<B> {
    let mut res = Response::new(B::default());
    match HeaderValue::from_str(target) {
        Ok(location) => {
            *res.status_mut() = StatusCode::FOUND;
            res.headers_mut().insert(header::LOCATION, location);
        }
        Err(_) => {
            tracing::error!(location = %target, "Redirect target is not a valid header value");
            *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        }
    }
    res
}
