//! Interactive tier list host.
//!
//! # Responsibility
//! - Stand in for a rendering host: read line commands, drive the core
//!   session, print the board.
//! - Ingest image files as data URIs.

mod command;
mod ingest;

use clap::Parser;
use command::{parse_command, ColorArg, Command, ItemRef, HELP};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tierlist_core::{
    init_logging, BoardConfig, BoardSnapshot, ContainerId, HexColor, ItemId, ItemKind, LogLevel,
    SequentialIdGenerator, Session,
};

#[derive(Debug, Parser)]
#[command(name = "tierlist", version, about = "Build a tier list from the terminal")]
struct Args {
    /// JSON board config (tiers, palette, seed_words).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Start with an empty pool instead of the seed words.
    #[arg(long)]
    no_seed: bool,

    /// Fixed seed for colors and sequential item ids.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = &args.log_dir {
        let level = args
            .log_level
            .clone()
            .unwrap_or_else(|| LogLevel::build_default().as_str().to_string());
        init_logging(&level, &dir.to_string_lossy())?;
    }

    let config = match &args.config {
        Some(path) => BoardConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => BoardConfig::default(),
    };

    let mut session = match (args.seed, args.no_seed) {
        (Some(seed), no_seed) => {
            let ids = Box::new(SequentialIdGenerator::default());
            let rng = StdRng::seed_from_u64(seed);
            if no_seed {
                Session::empty(config, ids, rng)
            } else {
                Session::seeded(config, ids, rng)
            }
        }
        (None, true) => Session::empty(
            config,
            Box::new(tierlist_core::UuidIdGenerator),
            StdRng::from_entropy(),
        ),
        (None, false) => Session::new(config),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_board(&mut stdout, &session.snapshot())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => apply(&mut session, command, &mut stdout)?,
            Err(command::CommandError::Empty) => {}
            Err(err) => writeln!(stdout, "{err}")?,
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn apply(session: &mut Session, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Text(text) => {
            if session.add_text(&text).is_none() {
                writeln!(out, "ignored: text is blank")?;
            }
        }
        Command::Image(paths) => {
            for path in paths {
                match ingest::image_ref_from_file(&path) {
                    Ok(image) => {
                        session.add_image(image);
                    }
                    Err(err) => {
                        // Unreadable or non-image files produce no item.
                        warn!("event=image_ingest module=cli status=error reason={err}");
                        writeln!(out, "skipped {}: {err}", path.display())?;
                    }
                }
            }
        }
        Command::Move { item, target } => match resolve_item(&session.snapshot(), &item) {
            Some(item_id) => {
                session.begin_drag(item_id);
                session.drop_on(&ContainerId::from(target.as_str()));
            }
            None => writeln!(out, "no such item")?,
        },
        Command::Rename { tier, label } => {
            session.begin_edit(&tier);
            session.rename_tier(&tier, label);
            session.end_edit();
        }
        Command::Color { tier, color } => {
            session.begin_edit(&tier);
            match color {
                ColorArg::Palette(n) => session.pick_palette_color(&tier, n.wrapping_sub(1)),
                ColorArg::Hex(value) => match HexColor::parse(&value) {
                    Ok(color) => session.recolor_tier(&tier, color),
                    Err(err) => writeln!(out, "{err}")?,
                },
            }
            session.end_edit();
        }
        Command::Reset => session.reset(),
        Command::Show => print_board(out, &session.snapshot())?,
        Command::Export => {
            let json = serde_json::to_string_pretty(&session.snapshot())
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

/// Items in the order `print_board` numbers them: tiers top-down, then pool.
fn numbered_items(snapshot: &BoardSnapshot) -> Vec<ItemId> {
    snapshot
        .tiers
        .iter()
        .flat_map(|tier| tier.items.iter())
        .chain(snapshot.pool.iter())
        .map(|item| item.id)
        .collect()
}

fn resolve_item(snapshot: &BoardSnapshot, item: &ItemRef) -> Option<ItemId> {
    match item {
        ItemRef::Position(position) => numbered_items(snapshot)
            .get(position.checked_sub(1)?)
            .copied(),
        ItemRef::Id(id) => id.parse().ok(),
    }
}

fn print_board(out: &mut impl Write, snapshot: &BoardSnapshot) -> io::Result<()> {
    let mut number = 0;
    let mut describe = |kind: &ItemKind| {
        number += 1;
        match kind {
            ItemKind::Text { title, colors } => {
                format!("#{number} {title} ({}/{})", colors.text, colors.background)
            }
            ItemKind::Image { image } => format!("#{number} [image {} bytes]", image.as_str().len()),
        }
    };

    for tier in &snapshot.tiers {
        let items: Vec<String> = tier.items.iter().map(|item| describe(&item.kind)).collect();
        writeln!(
            out,
            "{:>8} {} {} | {}",
            tier.label,
            tier.color,
            tier.id,
            items.join("  ")
        )?;
    }
    let pool: Vec<String> = snapshot.pool.iter().map(|item| describe(&item.kind)).collect();
    writeln!(out, "{:>8} | {}", "pool", pool.join("  "))
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
