use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
    Router,
};
use tokio::signal;
use tracing::Level;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use apprunner::clock::{Clock, SystemClock};
use apprunner::route::Route;
use apprunner::{routes, About, Home};

use crate::config::Config;
use crate::errors::ServerError;
use crate::server_utils::{log_server_start, CustomOnResponse};

#[derive(Clone)]
struct AppState {
    clock: Arc<dyn Clock + Send + Sync>,
}

fn site_routes() -> &'static [&'static dyn Route] {
    routes![Home, About]
}

fn site_router(clock: Arc<dyn Clock + Send + Sync>) -> Router {
    async fn handle_404() -> (StatusCode, &'static str) {
        (StatusCode::NOT_FOUND, "Not found")
    }

    let mut router: Router<AppState> = Router::new();
    for route in site_routes() {
        let route = *route;
        router = router.route(
            route.path(),
            get(move |State(state): State<AppState>| async move {
                Html(route.render(state.clock.as_ref()).into_string())
            }),
        );
    }

    router
        .fallback(handle_404)
        .layer(middleware::from_fn(record_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
        .with_state(AppState { clock })
}

// The URI is stashed in the response extensions so CustomOnResponse can log it.
async fn record_uri(req: Request, next: Next) -> Response {
    let uri = req.uri().clone();
    let mut res = next.run(req).await;

    res.extensions_mut().insert(uri);

    res
}

pub async fn start_site_server(start_time: Instant, config: Config) -> Result<(), ServerError> {
    let router = site_router(Arc::new(SystemClock));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log_server_start(start_time, listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
