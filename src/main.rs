use clap::{Parser, Subcommand};
use deckpress::{Color, Deck, DeckGenerator, PaperSize, PipelineError, RenderConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Lay out pre-rendered card decks as duplex-ready print sheets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the printable PDF for a deck.
    Generate {
        /// Deck JSON exported by the editor.
        deck: PathBuf,
        /// Where to write the PDF.
        #[arg(short, long, default_value = "cards.pdf")]
        output: PathBuf,
        /// Override the deck's paper profile (letter or a4).
        #[arg(long)]
        paper: Option<String>,
        /// Draw dashed cut guides around every card.
        #[arg(long, default_value_t = false)]
        cut_guides: bool,
        /// Cut guide color as a hex string.
        #[arg(long)]
        guide_color: Option<String>,
        /// Document title.
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the computed grid as JSON.
    Layout {
        deck: PathBuf,
        #[arg(long)]
        paper: Option<String>,
    },
}

fn load_deck(path: &Path, paper: Option<&str>) -> Result<Deck, PipelineError> {
    let mut deck = Deck::from_path(path)?;
    if let Some(name) = paper {
        deck.paper_size = PaperSize::from_name(name);
    }
    Ok(deck)
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "deckpress=info");
        }
    }
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            deck,
            output,
            paper,
            cut_guides,
            guide_color,
            title,
        } => {
            let mut deck = load_deck(&deck, paper.as_deref())?;
            deck.draw_cut_guides |= cut_guides;

            let mut config = RenderConfig::default();
            if let Some(hex) = guide_color {
                config.cut_guide.color = Color::parse_hex(&hex).map_err(PipelineError::Config)?;
            }
            if let Some(title) = title {
                config.title = title;
            } else if !deck.name.is_empty() {
                config.title = deck.name.clone();
            }

            let report = DeckGenerator::with_config(config).generate_to_file(&deck, &output)?;
            println!(
                "Wrote {} pages ({} cards, {} placeholders) to {}",
                report.pages,
                report.cards,
                report.placeholders,
                output.display()
            );
        }
        Command::Layout { deck, paper } => {
            let deck = load_deck(&deck, paper.as_deref())?;
            let layout = DeckGenerator::new().layout_for(&deck)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }
    Ok(())
}
