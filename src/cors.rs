use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, request::Parts, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;

const LOCAL_DEV_PREFIX: &str = "http://localhost";
const DEPLOYED_FRONTEND: &str = "https://tiger-tixs.vercel.app";

/// Which browser origins may call the service. Requests without an
/// `Origin` header (curl, server-to-server) are always let through.
#[derive(Clone, Debug)]
pub struct OriginPolicy {
    allowed: Arc<[String]>,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<String>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        origin.starts_with(LOCAL_DEV_PREFIX)
            || origin == DEPLOYED_FRONTEND
            || self.allowed.iter().any(|o| o == origin)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let policy = self.clone();
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    origin.to_str().map(|o| policy.is_allowed(o)).unwrap_or(false)
                },
            ))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    }
}

async fn reject_disallowed_origin(
    State(policy): State<OriginPolicy>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !policy.is_allowed(origin) {
            tracing::warn!(origin = %origin, allowed = ?policy.allowed, "blocked CORS request");
            return AppError::Forbidden("Not allowed by CORS".to_string()).into_response();
        }
    }
    next.run(req).await
}

/// Wraps `router` with the origin guard and the CORS response headers.
pub fn with_cors(router: Router, policy: OriginPolicy) -> Router {
    router
        .layer(middleware::from_fn_with_state(
            policy.clone(),
            reject_disallowed_origin,
        ))
        .layer(policy.cors_layer())
}
