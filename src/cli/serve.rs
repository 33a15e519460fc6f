use crate::{config::Settings, error, server, warning};

/// Starts the web application and blocks until Ctrl-C.
pub async fn serve(settings: &Settings, open: bool) {
    let state = match server::AppState::in_memory(settings) {
        Ok(state) => state,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    if open {
        let url = format!("http://{}/", settings.server_addr);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    if let Err(e) = server::start_server(state, settings.server_addr).await {
        error!("Server stopped with an error. Err: {}", e);
    }
}
