use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use shared::protocol::{send_notification_route, NotificationResponse};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

mod app_state;
mod config;
mod dispatcher;
mod mailer;
mod templates;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

use app_state::AppState;
use config::load_settings;
use dispatcher::Dispatcher;
use mailer::ResendMailer;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = load_settings();
    if settings.resend_api_key.is_empty() {
        warn!("RESEND_API_KEY is not set; every email send will be rejected by the provider");
    }
    let mailer = ResendMailer::new(&settings.resend_api_base, settings.resend_api_key.clone())?;
    info!(endpoint = %mailer.endpoint(), "email provider configured");
    let dispatcher = Dispatcher::new(settings.dispatcher_config(), Arc::new(mailer));

    let app = build_router(Arc::new(AppState { dispatcher }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, owner = %settings.owner_email, "notification dispatcher listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("x-supabase-client-platform"),
            HeaderName::from_static("x-supabase-client-platform-version"),
            HeaderName::from_static("x-supabase-client-runtime"),
            HeaderName::from_static("x-supabase-client-runtime-version"),
        ])
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", post(send_notification).options(preflight))
        .route(
            send_notification_route(),
            post(send_notification).options(preflight),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn send_notification(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<NotificationResponse>) {
    info!("send-notification invoked");
    // Oversized or unreadable bodies get the same failure envelope.
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return failure(rejection.body_text()),
    };
    match state.dispatcher.handle(&body).await {
        Ok(emails_sent) => {
            info!(emails_sent, "emails sent");
            (StatusCode::OK, Json(NotificationResponse::sent(emails_sent)))
        }
        Err(error) => failure(error.to_string()),
    }
}

fn failure(error: String) -> (StatusCode, Json<NotificationResponse>) {
    error!(%error, "send-notification failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(NotificationResponse::failed(error)),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
