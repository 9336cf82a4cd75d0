//! linekv - A Small In-Memory Key-Value Store
//!
//! This is the main entry point for the linekv server.
//! It reads the configuration, sets up logging and the shared store,
//! and runs the accept loop until Ctrl+C.

use linekv::config::{CliAction, Config};
use linekv::connection::ConnectionStats;
use linekv::server::accept_loop;
use linekv::storage::Store;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!(
        r#"
linekv - A Small In-Memory Key-Value Store

USAGE:
    linekv [OPTIONS]

OPTIONS:
    -h, --host <HOST>       Host to bind to (default: 0.0.0.0)
    -p, --port <PORT>       Port to listen on (default: 6379)
    -f, --framing <MODE>    line: one command per `\n`-terminated line (default)
                            read: one command per socket read
    -v, --version           Print version information
        --help              Print this help message

ENVIRONMENT:
    RUST_LOG                Log filter (default: info)

CONNECTING:
    $ nc localhost 6379
    SET name Ariz
    OK
    GET name
    Ariz
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("linekv version {}", linekv::VERSION);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Created once, shared by every connection, gone at exit
    let storage = Arc::new(Store::new());
    let stats = Arc::new(ConnectionStats::new());

    // Bind failure is fatal
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %config.bind_address(),
        framing = %config.framing,
        version = linekv::VERSION,
        "linekv server started"
    );

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received, stopping server..."),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
        }
    };

    tokio::select! {
        _ = accept_loop(listener, Arc::clone(&storage), config.framing, Arc::clone(&stats)) => {}
        _ = shutdown => {}
    }

    let store_stats = storage.stats();
    info!(
        keys = store_stats.keys,
        get_ops = store_stats.get_ops,
        set_ops = store_stats.set_ops,
        del_ops = store_stats.del_ops,
        exists_ops = store_stats.exists_ops,
        keys_ops = store_stats.keys_ops,
        "Store statistics"
    );
    info!(
        connections = stats.connections_accepted.load(Ordering::Relaxed),
        commands = stats.commands_processed.load(Ordering::Relaxed),
        bytes_read = stats.bytes_read.load(Ordering::Relaxed),
        bytes_written = stats.bytes_written.load(Ordering::Relaxed),
        "Connection statistics"
    );

    info!("Server shutdown complete");
    Ok(())
}
