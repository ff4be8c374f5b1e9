/// Jukebox Server - song catalog and static player assets
use clap::{Parser, Subcommand};
use jukebox_server::{config::ServerConfig, create_router, library::SongLibrary, state::AppState};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jukebox-server")]
#[command(about = "Jukebox song catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "JUKEBOX_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the catalog for a static directory as JSON
    Scan {
        /// Static directory path (containing songs/)
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jukebox_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { config: None }) {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Scan { path } => {
            scan_directory(&path).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = match config_path {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;

    tracing::info!("Starting Jukebox Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Static files: {:?}", config.library.static_dir);

    let library = Arc::new(SongLibrary::new(config.library.static_dir.clone()));
    let app = create_router(AppState::new(library));

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn scan_directory(path: &Path) -> anyhow::Result<()> {
    let tracks = SongLibrary::new(path).scan().await?;
    tracing::info!("Found {} songs", tracks.len());

    println!("{}", serde_json::to_string_pretty(&tracks)?);

    Ok(())
}
