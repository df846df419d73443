use std::fs;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

use deck_viewer::CardCatalog;
use deck_viewer::DeckDocument;
use deck_viewer::DeckSession;
use deck_viewer::FilterCriteria;
use deck_viewer::Result;
use deck_viewer::SectionId;
use deck_viewer::ViewerConfig;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print a deck, optionally filtered.
    Show {
        /// Path to the deck JSON file.
        deck: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// Print a JSON summary instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Draw a sample hand.
    Draw {
        /// Path to the deck JSON file.
        deck: PathBuf,
        /// Number of cards to draw. Defaults to the configured hand size.
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
        /// Include side deck copies in the pool.
        #[arg(long)]
        side: bool,
        /// Include extra deck copies in the pool.
        #[arg(long)]
        extra: bool,
    },
    /// Export a deck.
    Export {
        /// Path to the deck JSON file.
        deck: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write to a file instead of standard output.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Import an interchange file, resolving identities against a deck.
    Import {
        /// Path to the interchange file.
        file: PathBuf,
        /// Deck JSON whose cards resolve the identities.
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Case-insensitive search over name, types, attribute and text.
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    no_monsters: bool,
    #[arg(long)]
    no_spells: bool,
    #[arg(long)]
    no_traps: bool,
    #[arg(long)]
    level_min: Option<i64>,
    #[arg(long)]
    level_max: Option<i64>,
    /// Functional tag.
    #[arg(long)]
    tag: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_monsters(!self.no_monsters)
            .with_spells(!self.no_spells)
            .with_traps(!self.no_traps)
            .with_level_range(self.level_min, self.level_max);
        if let Some(text) = &self.text {
            criteria = criteria.with_text(text);
        }
        if let Some(tag) = &self.tag {
            criteria = criteria.with_tag(tag);
        }
        criteria
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Ydk,
    Json,
}

pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ViewerConfig::from_path(path)?,
        None => ViewerConfig::default(),
    };
    match cli.command {
        Command::Show { deck, filter, json } => {
            let mut session = open(config, &deck)?;
            session.set_criteria(filter.criteria());
            let view = session.view()?;
            if json {
                let summary = view.summary(session.sources());
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", view.name);
                if !view.author.is_empty() {
                    println!("by {}", view.author);
                }
                for section in &view.sections {
                    println!();
                    println!("{} ({})", section.section.title(), section.remaining_copies());
                    for row in &section.cards {
                        println!("{}x {}", row.remaining, row.card.name);
                    }
                }
            }
            Ok(())
        }
        Command::Draw {
            deck,
            count,
            seed,
            side,
            extra,
        } => {
            let mut config = config;
            if side {
                config = config.with_side();
            }
            if extra {
                config = config.with_extra();
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let mut session = open(config, &deck)?;
            let drawn = match count {
                Some(n) => session.draw(n)?,
                None => session.draw_hand()?,
            };
            println!("Drew {drawn} cards.");
            let view = session.view()?;
            for entry in &view.hand {
                match entry.section {
                    SectionId::Main => println!("  {}", entry.card.name),
                    other => println!("  {} [{}]", entry.card.name, other.key()),
                }
            }
            if let Some(size) = view.pool_size {
                println!("{size} cards left in the pool.");
            }
            Ok(())
        }
        Command::Export {
            deck,
            format,
            output,
        } => {
            let session = open(config, &deck)?;
            let rendered = match format {
                Format::Text => session.export_text()?,
                Format::Ydk => session.export_ydk()?,
                Format::Json => match session.deck() {
                    Some(deck) => serde_json::to_string_pretty(&DeckDocument::from_deck(deck))?,
                    None => return Err(deck_viewer::DeckError::NoActiveDeck),
                },
            };
            match output {
                Some(path) => fs::write(path, rendered)?,
                None => print!("{rendered}"),
            }
            Ok(())
        }
        Command::Import { file, catalog } => {
            let source = open(config.clone(), &catalog)?;
            let catalog = match source.deck() {
                Some(deck) => CardCatalog::from_deck(deck),
                None => return Err(deck_viewer::DeckError::NoActiveDeck),
            };
            let contents = fs::read_to_string(file)?;
            let mut session = DeckSession::new(config);
            let report = session.import_ydk(&contents, &catalog)?;
            for unknown in &report.unknown {
                match unknown.section {
                    Some(section) => eprintln!(
                        "line {}: unknown card {:?} in {}",
                        unknown.line, unknown.identity, section
                    ),
                    None => eprintln!("line {}: unrecognized {:?}", unknown.line, unknown.identity),
                }
            }
            let document = DeckDocument::from_deck(&report.deck);
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }
    }
}

fn open(config: ViewerConfig, deck: &Path) -> Result<DeckSession> {
    let mut session = DeckSession::new(config);
    session.load_path(deck)?;
    Ok(session)
}
