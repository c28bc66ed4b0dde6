use clap::Parser;
use mock_server::{AppState, CreateUser};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// In-memory course-management API for local runs.
#[derive(Debug, Parser)]
#[command(name = "mock-server", version)]
struct Args {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Register this account at startup.
    #[arg(long, requires = "seed_password")]
    seed_email: Option<String>,

    #[arg(long, requires = "seed_email")]
    seed_password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mock_server=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let state = AppState::default();

    if let (Some(email), Some(password)) = (args.seed_email, args.seed_password) {
        state
            .register_user(CreateUser {
                email,
                password,
                last_name: String::new(),
                first_name: String::new(),
                middle_name: String::new(),
            })
            .await
            .map_err(|status| std::io::Error::other(format!("seeding user failed: {status}")))?;
    }

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    mock_server::run(listener, state).await
}
