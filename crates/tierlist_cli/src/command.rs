//! Line command parsing for the interactive host.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Reference to one item: full id or 1-based position from `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Position(usize),
    Id(String),
}

/// Tier color argument: literal hex or palette index (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorArg {
    Hex(String),
    Palette(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Image(Vec<PathBuf>),
    Move { item: ItemRef, target: String },
    Rename { tier: String, label: String },
    Color { tier: String, color: ColorArg },
    Reset,
    Show,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument { command: &'static str, usage: &'static str },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::MissingArgument { command, usage } => {
                write!(f, "`{command}` is missing arguments; usage: {usage}")
            }
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  text <words...>              add a text item to the pool
  image <path> [path...]       add image items from files
  move <item> <container>      move item (# from `show` or id) to `pool` or a tier id
  rename <tier> <label...>     set a tier label
  color <tier> <#rrggbb|n>     set a tier color, n picks palette entry n
  reset                        restore default tiers and clear every item
  show                         print the board
  export                       print the board as json
  help                         print this message
  quit                         exit";

/// Parses one input line.
///
/// `text` and `rename` keep the rest of the line as written, minus the one
/// separating space.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };

    match name {
        "" => Err(CommandError::Empty),
        "text" => Ok(Command::Text(rest.to_string())),
        "image" => {
            let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
            if paths.is_empty() {
                return Err(missing("image", "image <path> [path...]"));
            }
            Ok(Command::Image(paths))
        }
        "move" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next()) {
                (Some(item), Some(target)) => Ok(Command::Move {
                    item: parse_item_ref(item),
                    target: target.to_string(),
                }),
                _ => Err(missing("move", "move <item> <container>")),
            }
        }
        "rename" => {
            let rest = rest.trim_start();
            match rest.split_once(char::is_whitespace) {
                Some((tier, label)) => Ok(Command::Rename {
                    tier: tier.to_string(),
                    label: label.trim().to_string(),
                }),
                None if !rest.is_empty() => Ok(Command::Rename {
                    tier: rest.to_string(),
                    label: String::new(),
                }),
                None => Err(missing("rename", "rename <tier> <label...>")),
            }
        }
        "color" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next()) {
                (Some(tier), Some(color)) => Ok(Command::Color {
                    tier: tier.to_string(),
                    color: parse_color_arg(color),
                }),
                _ => Err(missing("color", "color <tier> <#rrggbb|n>")),
            }
        }
        "reset" => Ok(Command::Reset),
        "show" | "ls" => Ok(Command::Show),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn missing(command: &'static str, usage: &'static str) -> CommandError {
    CommandError::MissingArgument { command, usage }
}

fn parse_item_ref(value: &str) -> ItemRef {
    match value.trim_start_matches('#').parse::<usize>() {
        Ok(position) if value.len() < 8 => ItemRef::Position(position),
        _ => ItemRef::Id(value.to_string()),
    }
}

fn parse_color_arg(value: &str) -> ColorArg {
    match value.parse::<usize>() {
        Ok(index) => ColorArg::Palette(index),
        Err(_) => ColorArg::Hex(value.to_string()),
    }
}
