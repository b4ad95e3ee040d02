//! `versedeck` - build presentation decks from Bible references.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use versedeck::bible::{names, Corpus};
use versedeck::config::Config;
use versedeck::constants::output;
use versedeck::error::Error;
use versedeck::layout::LayoutMode;
use versedeck::pptx::PptxRenderer;
use versedeck::services::scripture::{Deck, ScriptureService};
use versedeck::services::slides::SlideRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "versedeck",
    version,
    about = "Generate slide decks from Bible references",
    after_help = "Examples:\n  versedeck 요3:16\n  versedeck 창1:1-5, 시23 --pack\n  versedeck 롬8:28-39 --standard --dry-run\n  versedeck --list-books"
)]
struct Cli {
    /// References such as 창1:1-5, 요3:16 or 시23 (commas or spaces between them)
    #[arg(value_name = "REFS")]
    refs: Vec<String>,

    /// Corpus dataset (KorRV.json layout)
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Directory the deck is written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Title font size in points
    #[arg(long, value_name = "PT")]
    title_pt: Option<f64>,

    /// Body font size in points
    #[arg(long, value_name = "PT")]
    body_pt: Option<f64>,

    /// Line spacing multiplier
    #[arg(long, value_name = "FACTOR")]
    line_spacing: Option<f64>,

    /// Pack as many verses per slide as fit
    #[arg(long)]
    pack: bool,

    /// Use 4:3 slides instead of 16:9
    #[arg(long)]
    standard: bool,

    /// Print the pages instead of writing a deck
    #[arg(long)]
    dry_run: bool,

    /// List book abbreviations in the corpus and exit
    #[arg(long)]
    list_books: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) -> versedeck::error::Result<()> {
        if let Some(path) = &self.corpus {
            config.corpus_path = Some(path.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(pt) = self.title_pt {
            config.title_pt = pt;
        }
        if let Some(pt) = self.body_pt {
            config.body_pt = pt;
        }
        if let Some(spacing) = self.line_spacing {
            config.line_spacing = spacing;
        }
        if self.pack {
            config.one_per_slide = false;
        }
        if self.standard {
            config.wide = false;
        }
        config.validate()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    cli.apply(&mut config)?;

    let corpus_path = config.corpus_path.clone().ok_or_else(|| {
        Error::config(
            format!("no {} found", output::CORPUS_FILE),
            "Pass --corpus <FILE> or set VERSEDECK_CORPUS",
        )
    })?;
    let corpus = Corpus::from_path(&corpus_path)?;

    if cli.list_books {
        let mut books: Vec<_> = corpus.books().iter().collect();
        books.sort_by_key(|b| names::canonical_position(&b.name).unwrap_or(usize::MAX));
        for book in books {
            println!("{}\t{}", book.name, book.display_name);
        }
        return Ok(());
    }

    let service = ScriptureService::new(&corpus);
    let deck = service.generate(&cli.refs.join(" "), &config.layout())?;

    if cli.dry_run {
        print_deck(&deck);
        return Ok(());
    }

    let renderer = PptxRenderer::new(config.aspect()).with_style(config.text_style());
    let output_path = write_deck(&renderer, &deck, &config.output_dir)?;

    let mode = match config.layout().mode {
        LayoutMode::OnePerPage => "one verse per slide",
        LayoutMode::GreedyPack => "packed",
    };
    println!(
        "{} slides ({mode}, {}) written to {}",
        deck.page_count(),
        config.aspect().name(),
        output_path.display()
    );
    Ok(())
}

fn print_deck(deck: &Deck) {
    let mut n = 0;
    for section in &deck.sections {
        println!("# {}", section.token);
        for page in &section.pages {
            n += 1;
            let title = if page.is_continuation() { "(continued)" } else { page.title.as_str() };
            println!("[{n}] {title}");
            for line in &page.lines {
                println!("    {}", line.rendered());
            }
        }
    }
}

fn write_deck(renderer: &dyn SlideRenderer, deck: &Deck, dir: &Path) -> Result<PathBuf> {
    remove_previous_decks(dir, renderer.extension());

    let stamp = chrono::Utc::now().timestamp();
    let path = dir.join(format!("{}combined_{stamp}.{}", output::FILE_PREFIX, renderer.extension()));
    renderer
        .render(deck, &path)
        .with_context(|| format!("writing {} deck", renderer.format_name()))?;
    Ok(path)
}

/// Delete earlier generated decks; failures only warn.
fn remove_previous_decks(dir: &Path, extension: &str) {
    let entries = match fs_err::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Could not scan {} for old decks: {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_old_deck = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(output::FILE_PREFIX))
            && path.extension().is_some_and(|e| e == extension);
        if !is_old_deck {
            continue;
        }
        match fs_err::remove_file(&path) {
            Ok(()) => tracing::info!("Removed old deck {}", path.display()),
            Err(e) => tracing::warn!("Could not remove old deck: {e}"),
        }
    }
}
