//! Lifelog - single-user fact recorder over HTTP

use clap::{Parser, Subcommand};
use lifelog_gateway::{start_server, BindMode, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lifelog", about = "Lifelog - subject-verb-modifier fact recorder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short, long, default_value = "lan")]
        bind: String,
        /// Path to the fact store file
        #[arg(short, long, default_value = "store.json")]
        store: PathBuf,
        /// Directory of static assets served as a fallback
        #[arg(short, long)]
        assets: Option<PathBuf>,
        /// Directory for rolling log files (stdout only when omitted)
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
    /// Show version
    Version,
}

struct ServeArgs {
    port: u16,
    bind: String,
    store: PathBuf,
    assets: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: 3000,
            bind: "lan".into(),
            store: PathBuf::from("store.json"),
            assets: None,
            log_dir: None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            port,
            bind,
            store,
            assets,
            log_dir,
        }) => {
            serve(ServeArgs {
                port,
                bind,
                store,
                assets,
                log_dir,
            })
            .await
        }

        Some(Commands::Version) => {
            println!("lifelog v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        // No subcommand = serve with defaults
        None => serve(ServeArgs::default()).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lifelog_gateway=info,lifelog_store=info,tower_http=info".into());
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    // Keep the non-blocking writer's guard alive for the server's lifetime.
    let _guard = match &args.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "lifelog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    let bind = match args.bind.as_str() {
        "loopback" | "localhost" | "127.0.0.1" => BindMode::Loopback,
        _ => BindMode::Lan,
    };

    start_server(ServerConfig {
        port: args.port,
        bind,
        store_path: args.store,
        assets_dir: args.assets,
    })
    .await
}
