// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The process entry point. It uses the `clap` crate to parse
// command line arguments. All business logic is delegated to
// Layer 2 (application).
//
// Two commands are supported:
//   1. `serve`   — loads the model and runs the web server
//   2. `predict` — runs one prediction from the command line
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, PredictArgs, ServeArgs};

use crate::application::predict_use_case::PredictionService;
use crate::infra::model_store::ModelStore;
use crate::web::routes::{router, AppState};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "attrition-predictor",
    version = "0.1.0",
    about = "Predict employee attrition from a trained model, via web form or CLI."
)]
pub struct Cli {
    /// The subcommand to run (serve or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)   => run_serve(args),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

/// Handles the `serve` subcommand.
///
/// The model load is the only blocking initialization and it
/// completes before the listener binds — a process that cannot
/// load its artifact exits instead of accepting requests it
/// can never answer.
fn run_serve(args: ServeArgs) -> Result<()> {
    let model   = ModelStore::new(&args.model_path).load()?;
    let service = PredictionService::new(Arc::new(model));
    let state   = Arc::new(AppState { service });
    let app     = router(state, args.static_dir.as_ref());

    let addr = format!("{}:{}", args.host, args.port);

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Cannot bind to {addr}"))?;
        tracing::info!("Listening on http://{addr}");
        axum::serve(listener, app).await?;
        Ok(())
    })
}

/// Handles the `predict` subcommand.
/// Runs the exact same pipeline as the web handler — raw
/// strings in, label or message out — and prints the result.
fn run_predict(args: PredictArgs) -> Result<()> {
    let model   = ModelStore::new(&args.model_path).load()?;
    let service = PredictionService::new(Arc::new(model));

    match service.predict(&args.into()) {
        Ok(outcome) => println!("Prediction: {}", outcome.label()),
        Err(e)      => println!("Error: {e}"),
    }
    Ok(())
}
