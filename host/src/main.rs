use kanban_board_host::component::ComponentSource;
use kanban_board_host::web::{build_router, WebState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kanban_board_host=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let port: u16 = std::env::var("KANBAN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4174);

    let source = ComponentSource::from_env();
    match &source {
        ComponentSource::Packaged => info!("serving the packaged widget bundle"),
        ComponentSource::DevServer { url } => {
            info!("redirecting page loads to the dev server at {url}")
        }
    }

    let router = build_router(WebState::new(source));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind web server port");

    info!("listening on http://localhost:{port}");
    if let Ok(ip) = local_ip_address::local_ip() {
        info!("LAN address: http://{ip}:{port}");
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("web server error: {e}");
    }
}
