use std::io::{self, Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use tonewise::analyzer::analyze;
use tonewise::auth::{self, KeySource};
use tonewise::banner::{BannerInfo, print_banner, print_farewell};
use tonewise::clipboard::SystemClipboard;
use tonewise::commands::{
    CommandRegistry, CommandResult, SessionInfo, StateChange, switch_model,
};
use tonewise::consts::{MODEL_KEY, default_db_path};
use tonewise::generator::Generator;
use tonewise::generator::gemini::GeminiGenerator;
use tonewise::render;
use tonewise::rewrite::{RewriteClient, RewriteMode};
use tonewise::session::Session;
use tonewise::spinner::Spinner;
use tonewise::store::{SqliteStore, Store};
use tonewise::theme::Theme;

#[derive(Parser)]
#[command(
    name = "tonewise",
    version,
    about = "Type, and hear how it sounds. Live tone hints plus Gemini rewrites."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Gemini model (defaults to the last one used, then gemini-1.5-flash)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// SQLite database for the draft and preferences (use :memory: for ephemeral)
    #[arg(short, long, global = true)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print tone and suggestions for TEXT (or stdin) and exit
    Analyze {
        /// Emit JSON instead of the text panel
        #[arg(long)]
        json: bool,
        text: Vec<String>,
    },
    /// Rewrite TEXT (or stdin) once and print the result
    Rewrite {
        #[arg(value_enum)]
        mode: RewriteMode,
        text: Vec<String>,
    },
    /// Save a Gemini API key
    Login { key: String },
    /// Remove the saved Gemini API key
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with drafts or rewrites on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Analysis is pure; it never touches the store.
    if let Some(Command::Analyze { json, text }) = &cli.command {
        return run_analyze(*json, text);
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => default_db_path()?.to_string_lossy().into_owned(),
    };
    let store: Arc<dyn Store> = Arc::new(SqliteStore::open(&db_path)?);

    let model = match cli.model {
        Some(model) => Some(model),
        None => store.get(MODEL_KEY)?,
    };

    match cli.command {
        Some(Command::Login { key }) => {
            auth::login(store.as_ref(), &key)?;
            println!("✓ API key saved to {db_path}");
            Ok(())
        }
        Some(Command::Logout) => {
            auth::logout(store.as_ref())?;
            println!("✓ API key removed.");
            Ok(())
        }
        Some(Command::Rewrite { mode, text }) => {
            let (generator, _) = build_generator(store.as_ref(), model)?;
            run_rewrite(generator, mode, &read_text(&text)?).await
        }
        Some(Command::Analyze { .. }) => Ok(()),
        None => {
            let (generator, source) = build_generator(store.as_ref(), model)?;
            let store_label = if db_path == ":memory:" {
                "ephemeral".to_string()
            } else {
                db_path
            };
            run_repl(store, &store_label, generator, source).await
        }
    }
}

fn build_generator(
    store: &dyn Store,
    model: Option<String>,
) -> Result<(Arc<dyn Generator>, KeySource)> {
    let (api_key, source) = auth::resolve_api_key(store)?;
    if source == KeySource::Missing {
        tracing::warn!("no Gemini API key configured; rewrites will fail");
    }
    Ok((Arc::new(GeminiGenerator::new(model, api_key)), source))
}

/// Join CLI words, or read all of stdin when none were given.
fn read_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

fn run_analyze(json: bool, words: &[String]) -> Result<()> {
    let text = read_text(words)?;
    let analysis = analyze(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else if text.is_empty() {
        println!("  (empty text)");
    } else {
        print!("{}", render::analysis_panel(&text, &analysis, Theme::default()));
    }
    Ok(())
}

async fn run_rewrite(generator: Arc<dyn Generator>, mode: RewriteMode, text: &str) -> Result<()> {
    let message = format!("rewriting ({mode}) with {}", generator.model());
    let client = RewriteClient::new(generator);

    let spinner = Spinner::follow(&message, client.subscribe_loading());
    let result = client.rewrite(text, mode).await;
    spinner.stop().await;

    match result {
        Some(result) => println!("{result}"),
        None => eprintln!("nothing to rewrite: the text is blank"),
    }
    Ok(())
}

async fn run_repl(
    store: Arc<dyn Store>,
    store_label: &str,
    generator: Arc<dyn Generator>,
    source: KeySource,
) -> Result<()> {
    let mut auth_status = source.describe();
    let model = generator.model().to_string();
    let mut session = Session::open(Arc::clone(&store), generator, Arc::new(SystemClipboard));
    let registry = CommandRegistry::new();

    print_banner(&BannerInfo {
        model: &model,
        auth_status: &auth_status,
        theme: session.theme().as_str(),
        store: store_label,
    });

    if !session.text().is_empty() {
        println!("  restored draft ({})", render::counter(session.words(), session.chars()));
        print!(
            "{}",
            render::analysis_panel(session.text(), session.analysis(), session.theme())
        );
    }

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\n✎ ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let info = SessionInfo {
            auth_status: &auth_status,
            store: store_label,
        };

        // A pending rewrite cannot be cancelled; Ctrl+C leaves the REPL.
        let result = tokio::select! {
            result = registry.dispatch(&line, &mut session, &info) => result,
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
                break;
            }
        };

        match result {
            CommandResult::NotACommand => {
                session.set_text(line);
                print!(
                    "{}",
                    render::analysis_panel(session.text(), session.analysis(), session.theme())
                );
            }
            CommandResult::Handled => {}
            CommandResult::StateChanged(StateChange::Model(id)) => {
                if let Some(source) = switch_model(&session, store.as_ref(), &id).await {
                    auth_status = source.describe();
                }
            }
            CommandResult::Quit => break,
        }
    }

    print_farewell(session.words());
    Ok(())
}
