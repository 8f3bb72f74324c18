//! minishelf admin utility
//!
//! Local web form for adding entries to a gallery content store.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use minishelf_catalog::{GalleryStore, scan};

#[derive(Parser)]
#[command(name = "minishelf-admin")]
#[command(about = "Add entries to a minishelf gallery content store", long_about = None)]
struct Cli {
    /// Content store root (defaults to the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the local admin server with the entry form
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8484)]
        port: u16,
    },

    /// Print dropdown choices and known identifiers as JSON
    Scan,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let store = GalleryStore::new(cli.root.unwrap_or_else(|| PathBuf::from(".")));

    match cli.command {
        Commands::Serve { bind, port } => run_serve(store, &bind, port),
        Commands::Scan => run_scan(&store),
    }
}

fn run_serve(store: GalleryStore, bind: &str, port: u16) {
    log::info!("store root: {}", store.root().display());

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let app = minishelf_admin::create_router(Arc::new(store));
        let addr = format!("{bind}:{port}");

        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                eprintln!("Failed to bind {addr}: {e}");
                return;
            }
        };
        log::info!("minishelf admin listening on http://{addr}");

        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("Server error: {e}");
        }
    });
}

fn run_scan(store: &GalleryStore) {
    let metadata = scan(store);
    match serde_json::to_string_pretty(&metadata) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to encode metadata: {e}"),
    }
}
