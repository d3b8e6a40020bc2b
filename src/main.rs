//! # pagerag CLI Application
//!
//! Command-line interface for the pagerag pipeline with two subcommands:
//!
//! - `ingest`: fetch pages, embed them, and write them into the vector store
//! - `chat`: answer questions about the ingested pages interactively
//!
//! Both commands construct their service handles (model client, HTTP client,
//! vector store) up front and pass them down, so the library stays free of
//! globals.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

use pagerag::index::{VectorStore, COLLECTION_NAME, EMBEDDING_DIMENSIONS};
use pagerag::ingest::ingest_site;
use pagerag::model::Client;
use pagerag::processor::IngestOptions;
use pagerag::search::answer_question;

/// Pages ingested when no URLs are given on the command line
const DEFAULT_SEED_URLS: &[&str] = &["https://www.rust-lang.org/"];

#[derive(Parser)]
#[command(author, version, about = "Ingest web pages into a vector store and ask questions about them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch pages and store their embeddings
    Ingest(IngestArgs),

    /// Ask questions about the stored pages
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
struct IngestArgs {
    /// URLs to ingest; defaults to a built-in seed list
    urls: Vec<String>,

    /// Chunk size in words; must be at least 1
    #[arg(short, long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    chunk_size: u64,

    /// How many levels of internal links to follow
    #[arg(short = 'd', long, default_value = "0")]
    max_depth: u32,

    /// Vector store endpoint
    #[arg(long, default_value = "http://localhost:6333")]
    store_url: String,
}

#[derive(Args, Debug)]
struct ChatArgs {
    /// Vector store endpoint
    #[arg(long, default_value = "http://localhost:6333")]
    store_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest(args) => {
            ingest_command(args).await?;
        }
        Commands::Chat(args) => {
            chat_command(args).await?;
        }
    }

    Ok(())
}

#[instrument]
async fn ingest_command(args: IngestArgs) -> anyhow::Result<()> {
    let client = Client::new_openai_from_env();
    let http = reqwest::Client::new();
    let store = VectorStore::new(&args.store_url, COLLECTION_NAME, EMBEDDING_DIMENSIONS);

    let options = IngestOptions::builder()
        .chunk_size(args.chunk_size as usize)
        .max_depth(args.max_depth)
        .build();

    let urls: Vec<String> = if args.urls.is_empty() {
        DEFAULT_SEED_URLS.iter().map(|s| s.to_string()).collect()
    } else {
        args.urls
    };

    let mut total = 0;
    for url in &urls {
        println!("Ingesting {}...", url);
        let pages = ingest_site(&http, &client, &store, url, &options)
            .await
            .with_context(|| format!("failed to ingest {}", url))?;
        println!("Ingested {} pages from {}", pages.len(), url);
        total += pages.len();
    }

    println!("Done: {} pages across {} seed URLs", total, urls.len());
    Ok(())
}

#[instrument]
async fn chat_command(args: ChatArgs) -> anyhow::Result<()> {
    let client = Client::new_openai_from_env();
    let store = VectorStore::new(&args.store_url, COLLECTION_NAME, EMBEDDING_DIMENSIONS);

    println!("Ask a question about the ingested pages (empty line to quit)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut question = String::new();
        if stdin.lock().read_line(&mut question)? == 0 {
            break;
        }
        let question = question.trim();
        if question.is_empty() {
            break;
        }

        let answer = answer_question(&client, &store, question)
            .await
            .context("failed to answer question")?;
        println!("{}", answer);
        println!();
    }

    Ok(())
}
