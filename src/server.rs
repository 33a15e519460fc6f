use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::{
    Res, api,
    config::Settings,
    info,
    management::{InMemoryUserStore, SessionStore, UserStore},
    spotify::SpotifyClient,
};

/// Everything the route handlers share.
///
/// `shutdown` is cancelled on Ctrl-C; handlers hand child tokens to long
/// running work such as discography pagination.
#[derive(Clone)]
pub struct AppState {
    pub spotify: Arc<SpotifyClient>,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<SessionStore>,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(spotify: SpotifyClient, users: Arc<dyn UserStore>) -> Self {
        Self {
            spotify: Arc::new(spotify),
            users,
            sessions: Arc::new(SessionStore::new()),
            shutdown: CancellationToken::new(),
        }
    }

    /// State with an empty in-memory user table.
    pub fn in_memory(settings: &Settings) -> Res<Self> {
        let spotify = SpotifyClient::new(settings)?;
        Ok(Self::new(spotify, Arc::new(InMemoryUserStore::new())))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::welcome))
        .route("/health", get(api::health))
        .route("/signup", get(api::signup_page).post(api::signup))
        .route("/login", get(api::login_page).post(api::login))
        .route("/logout", get(api::logout))
        .route("/index", get(api::index_page).post(api::index_search))
        .route("/recommend", get(api::recommend_page).post(api::recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application until Ctrl-C or until `state.shutdown` is cancelled.
pub async fn start_server(state: AppState, addr: SocketAddr) -> Res<()> {
    let shutdown = state.shutdown.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = shutdown.cancelled() => {}
            }
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
