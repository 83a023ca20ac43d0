//! Notewise — turns study notes into a summary, tags and a quiz.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use notewise_core::NotewiseConfig;
use notewise_ingest::{analyze_submission, Pipeline, Submission};
use notewise_server::{build_router, AppState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Notewise — summaries, tags and quizzes from study notes");
    println!();
    println!("Usage: notewise [command]");
    println!();
    println!("Commands:");
    println!("  (none) | serve           Start the server");
    println!("  analyze <file|-> [seed]  Analyze a .txt/.pdf file (or stdin) and print JSON");
    println!("  help                     Show this help message");
}

/// Run the pipeline on a local file or stdin and print the result.
fn run_analyze(config: NotewiseConfig, source: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let mut submission = Submission::new();
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        submission.push_text(&text);
    } else {
        let path = Path::new(source);
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(source);
        submission.push_file(filename, None, &bytes)?;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let pipeline = Pipeline::new(config.pipeline);
    let analysis = analyze_submission(&pipeline, submission, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = NotewiseConfig::from_env();
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "serve" => {}
            "analyze" => {
                if args.len() < 3 {
                    eprintln!("Usage: notewise analyze <file|-> [seed]");
                    std::process::exit(1);
                }
                let seed = match args.get(3) {
                    Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                        anyhow::anyhow!("seed must be an unsigned integer, got {:?}", raw)
                    })?),
                    None => None,
                };
                return run_analyze(config, &args[2], seed);
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'notewise help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let port = config.port;
    info!(
        "Pipeline: {} summary sentences, {} tags, {} questions, {} stopwords",
        config.pipeline.summary_sentences,
        config.pipeline.tag_limit,
        config.pipeline.question_count,
        config.pipeline.stopwords.len()
    );

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Notewise server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
