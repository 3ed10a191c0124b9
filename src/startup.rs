use std::{net::TcpListener, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

use crate::configuration::EmailSettings;
use crate::email_client::EmailClient;
use crate::routes::{contact, health_check, not_found, privacy_policy, subscribe};

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub email: Arc<EmailSettings>,
    pub email_client: Arc<dyn EmailClient>,
}

pub fn router(email: EmailSettings, email_client: Arc<dyn EmailClient>) -> Router {
    Router::new()
        .route("/health_check", get(health_check))
        .route("/privacy-policy", get(privacy_policy))
        .route("/api/contact", post(contact))
        .route("/api/newsletter", post(subscribe))
        .fallback(not_found)
        .layer(
            // from https://docs.rs/tower-http/0.2.5/tower_http/request_id/index.html#using-trace
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(
                            DefaultMakeSpan::new()
                                .include_headers(true)
                                .level(Level::INFO),
                        )
                        .on_response(DefaultOnResponse::new().include_headers(true)),
                )
                .propagate_x_request_id(),
        )
        .with_state(AppState {
            email: Arc::new(email),
            email_client,
        })
}

pub async fn run(
    listener: TcpListener,
    email: EmailSettings,
    email_client: Arc<dyn EmailClient>,
) -> hyper::Result<()> {
    let app = router(email, email_client);

    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .await
}
