use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use pregacao_core::bible::books_in;
use pregacao_core::{
    build_generator, find_book, list_books, list_popular_themes, Config, Locale, OpenAIGenerator,
    SermonRequest, SessionController, Strategy, Testament,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pregacao")]
#[command(about = "Build a structured sermon outline from a Bible passage")]
struct Cli {
    /// Language: pt, en or es (defaults to the config file, then pt)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books of the Bible
    Books {
        /// Only one testament: old or new
        #[arg(short, long)]
        testament: Option<String>,
    },
    /// List suggested sermon themes
    Themes,
    /// List generation strategies and known OpenAI models
    Models,
    /// Persist a config value, e.g. `config locale es`
    Config {
        /// locale, strategy, model, openai_api_key, openai_base_url,
        /// temperature, max_tokens, timeout_secs or template_delay_ms
        key: String,
        value: String,
    },
    /// Generate a sermon outline
    Generate {
        /// Book name, as listed by `books`
        #[arg(short, long)]
        book: String,
        #[arg(short, long)]
        chapter: String,
        /// Verse range, e.g. "16-17"
        #[arg(short, long)]
        verses: Option<String>,
        /// Central theme
        #[arg(short, long)]
        theme: Option<String>,
        /// template or openai
        #[arg(short, long)]
        strategy: Option<String>,
        /// Model for the openai strategy
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().unwrap_or_else(|_| Config::new());

    if let Some(code) = &cli.locale {
        let locale = Locale::from_str(code).ok_or_else(|| anyhow!("Unknown locale: {}", code))?;
        config.locale = Some(locale);
    }

    match cli.command {
        Commands::Books { testament } => list_books_cmd(&config, testament.as_deref())?,
        Commands::Themes => list_themes_cmd(&config),
        Commands::Models => list_models_cmd(),
        Commands::Config { key, value } => set_config_cmd(&key, &value)?,
        Commands::Generate {
            book,
            chapter,
            verses,
            theme,
            strategy,
            model,
        } => {
            if let Some(s) = strategy {
                let strategy =
                    Strategy::from_str(&s).ok_or_else(|| anyhow!("Unknown strategy: {}", s))?;
                config.strategy = Some(strategy);
            }
            if model.is_some() {
                config.model = model;
            }

            let mut request = SermonRequest::new(book, chapter);
            if let Some(v) = verses {
                request = request.with_verses(v);
            }
            if let Some(t) = theme {
                request = request.with_theme(t);
            }
            generate_cmd(&config, request).await?
        }
    }

    Ok(())
}

fn list_books_cmd(config: &Config, testament: Option<&str>) -> Result<()> {
    let locale = config.locale();
    let books = match testament {
        Some(t) => {
            let testament =
                Testament::from_str(t).ok_or_else(|| anyhow!("Unknown testament: {}", t))?;
            books_in(locale, testament)
        }
        None => list_books(locale),
    };

    let bundle = locale.bundle();
    let mut last = None;
    for book in books {
        if last != Some(book.testament) {
            println!("\n{}", bundle.testament_name(book.testament).bold().blue());
            last = Some(book.testament);
        }
        println!("  {:<22} {}", book.name, book.chapters.to_string().dimmed());
    }

    Ok(())
}

fn list_themes_cmd(config: &Config) {
    for theme in list_popular_themes(config.locale()) {
        println!("• {}", theme);
    }
}

fn list_models_cmd() {
    println!("{}", "Strategies".bold().blue());
    for strategy in Strategy::all() {
        println!("  {:<10} {}", strategy.as_str(), strategy.display_name().dimmed());
    }
    println!("\n{}", "OpenAI models".bold().blue());
    for model in OpenAIGenerator::list_models() {
        println!("  {}", model);
    }
}

fn set_config_cmd(key: &str, value: &str) -> Result<()> {
    // Reload so the global --locale override is not persisted.
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let shown = if key == "openai_api_key" { "***" } else { value.trim() };
    println!("{} {} = {}", "Saved".green(), key, shown);
    Ok(())
}

async fn generate_cmd(config: &Config, request: SermonRequest) -> Result<()> {
    let locale = config.locale();
    let bundle = locale.bundle();

    if let Some(book) = find_book(locale, &request.book) {
        if let Ok(chapter) = request.chapter.trim().parse::<u32>() {
            if !book.has_chapter(chapter) {
                eprintln!("{}", bundle.chapter_limit_notice(&book)?.yellow());
            }
        }
    } else {
        eprintln!("{}", bundle.unknown_book_notice(&request.book)?.yellow());
    }

    let generator = build_generator(config)?;
    let session = SessionController::new(generator, locale).with_timeout(config.timeout());

    eprintln!(
        "{}",
        format!("{} ({})", bundle.generating, locale.display_name()).dimmed()
    );
    match session.submit(request).await {
        Ok(_) => {
            if let Some(text) = session.export_current() {
                println!("{}", text);
            }
            Ok(())
        }
        Err(err) => {
            if err.is_retryable() {
                eprintln!("{}", bundle.generation_failed.red());
            }
            Err(anyhow!(err))
        }
    }
}
