use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use huda::{DirectorySource, DisplayOptions, Engine, QueryConfig, RecordStore};

mod cli;
use cli::display::{render_outcome, render_query, render_stats, render_suggestions, Painter};
use cli::retry::{with_retry, MAX_RETRIES, RETRY_DELAY};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `HUDA_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HUDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), String> {
    let painter = Painter::detect();

    match command {
        Commands::Search {
            query,
            data,
            source,
            max_results,
            synonyms,
            json,
        } => {
            let engine = load_engine(&data, synonyms.as_deref())?;
            let options = DisplayOptions {
                source,
                max_results,
            };

            let answer = with_retry(MAX_RETRIES, RETRY_DELAY, || engine.process_query(&query));
            let outcome = match answer {
                Ok(outcome) => options.apply_to(outcome),
                Err(e) if e.is_retryable() => {
                    eprintln!(
                        "I apologize, but I encountered an error while processing your query. Please try again."
                    );
                    print_lines(render_suggestions(&painter, &huda::suggestions()));
                    return Err(e.to_string());
                }
                Err(e) => return Err(e.to_string()),
            };

            if json {
                print_json(&outcome)?;
            } else {
                print_lines(render_outcome(&painter, &query, &outcome));
            }
        }

        Commands::Explain {
            query,
            synonyms,
            json,
        } => {
            let engine = Engine::new(Arc::new(load_config(synonyms.as_deref())?));
            let structured = engine.interpret(&query);
            if json {
                print_json(&structured)?;
            } else {
                print_lines(render_query(&painter, &structured));
            }
        }

        Commands::Suggestions => {
            print_lines(render_suggestions(&painter, &huda::suggestions()));
        }

        Commands::Stats { data } => {
            let store = RecordStore::load(&DirectorySource::new(&data)).map_err(|e| e.to_string())?;
            print_lines(render_stats(
                &painter,
                &data.display().to_string(),
                store.verses().len(),
                store.sayings().len(),
            ));
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<QueryConfig, String> {
    match path {
        Some(path) => QueryConfig::from_file(path).map_err(|e| e.to_string()),
        None => Ok(QueryConfig::default()),
    }
}

fn load_engine(data: &Path, synonyms: Option<&Path>) -> Result<Engine, String> {
    let mut engine = Engine::new(Arc::new(load_config(synonyms)?));
    engine
        .load(&DirectorySource::new(data))
        .map_err(|e| e.to_string())?;
    Ok(engine)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("serialize: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
