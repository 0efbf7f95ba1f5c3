//! Worker entry point.
//!
//! Spawned with a socket path and the binary it will own; serves requests
//! sequentially until a termination signal, then saves and closes the
//! database on the way out.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ida_worker::engine::stub::StubEngine;
use ida_worker::{Server, Session};

#[derive(Parser)]
#[command(name = "ida-worker", version, about = "Headless binary-analysis worker")]
struct Args {
    /// Unix socket path to listen on
    #[arg(long)]
    socket: PathBuf,
    /// Binary this worker is bound to
    #[arg(long)]
    binary: PathBuf,
    /// Session identifier used in logs
    #[arg(long, default_value = "default")]
    session_id: String,
    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to stderr; stdout stays clean for whoever spawned us.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("ida_worker={}", args.log_level))),
        )
        .init();

    info!(
        socket = %args.socket.display(),
        binary = %args.binary.display(),
        session = %args.session_id,
        "starting worker"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let mut session = Session::new(args.binary, args.session_id, Box::new(StubEngine::new()));

    let outcome = runtime.block_on(async {
        let server = Server::bind(&args.socket).context("failed to bind worker socket")?;
        server
            .run(&mut session)
            .await
            .context("worker serve loop failed")
    });

    session.close(true);
    info!("worker stopped");
    outcome
}
