use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reply_drafter::api::reply_routes;
use reply_drafter::channels::{self, InputFormat};
use reply_drafter::config::ReplyConfig;
use reply_drafter::pipeline::ReplyProcessor;
use reply_drafter::templates::Category;

#[derive(Parser, Debug)]
#[command(name = "reply-drafter", version, about = "Draft template replies to emails")]
struct Cli {
    /// JSON template table replacing the built-in one
    #[arg(long, global = true)]
    templates: Option<PathBuf>,
    /// Name used to sign replies
    #[arg(long, global = true)]
    signature: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draft a reply for each email file (stdin when none are given)
    Draft {
        files: Vec<PathBuf>,
        /// Use this category's template instead of classifying
        #[arg(long)]
        category: Option<Category>,
        /// Inputs are raw RFC 822 messages
        #[arg(long)]
        mime: bool,
        /// Print the full drafting result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the detected category of an email
    Classify {
        file: Option<PathBuf>,
        #[arg(long)]
        mime: bool,
    },
    /// List the templates in priority order
    Templates {
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only drafts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ReplyConfig::from_env()?;
    if let Some(path) = cli.templates {
        config.templates_path = Some(path);
    }
    if let Some(signature) = cli.signature {
        config.signature = signature;
    }

    let processor = Arc::new(ReplyProcessor::from_config(&config)?);

    match cli.command {
        Commands::Draft {
            files,
            category,
            mime,
            json,
        } => {
            let format = input_format(mime);
            let mut texts = Vec::with_capacity(files.len().max(1));
            if files.is_empty() {
                texts.push(channels::read_email(None, format).await?);
            }
            for path in &files {
                let text = channels::read_email(Some(path.as_path()), format)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                texts.push(text);
            }

            let results = processor.process_batch(&texts, category);
            if json {
                let out = match results.as_slice() {
                    [single] => serde_json::to_string_pretty(single)?,
                    many => serde_json::to_string_pretty(many)?,
                };
                println!("{out}");
            } else {
                let replies: Vec<&str> = results.iter().map(|r| r.reply.as_str()).collect();
                println!("{}", replies.join("\n\n---\n\n"));
            }
        }
        Commands::Classify { file, mime } => {
            let text = channels::read_email(file.as_deref(), input_format(mime)).await?;
            println!("{}", processor.classify(&text));
        }
        Commands::Templates { json } => {
            let store = processor.templates();
            if json {
                println!("{}", serde_json::to_string_pretty(&store.summaries())?);
            } else {
                for (category, t) in store.iter() {
                    println!("{:<16} {}", category.label(), t.description);
                    if !t.keywords.is_empty() {
                        println!("{:<16} keywords: {}", "", t.keywords.join(", "));
                    }
                }
            }
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let app = reply_routes(processor);
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
                .await
                .with_context(|| format!("Failed to bind port {port}"))?;
            tracing::info!(port, "Reply API server started");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn input_format(mime: bool) -> InputFormat {
    if mime {
        InputFormat::Mime
    } else {
        InputFormat::Plain
    }
}
