/**
 * Show Auth Server Entry Point
 *
 * Loads configuration, opens the user database and serves the
 * authentication API.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use show_auth::backend::server::{create_app, load_database, ServerConfig};
    use show_auth::shared::AuthConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let auth_config = AuthConfig::from_env()?;
    let server_config = ServerConfig::from_env();

    let store = load_database(&server_config.database_url).await?;
    let app = create_app(&auth_config, store);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin show-auth-server --features ssr");
    std::process::exit(1);
}
