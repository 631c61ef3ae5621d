use crate::types::{CompanyName, TickerSymbol, Wkn};
use crate::Error;
use std::path::PathBuf;

/// One parsed line of the interactive command surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: CompanyName,
        wkn: Wkn,
        symbol: TickerSymbol,
    },
    Delete {
        symbol: TickerSymbol,
    },
    Import {
        path: PathBuf,
        symbol: TickerSymbol,
    },
    Search {
        key: String,
    },
    Plot {
        symbol: TickerSymbol,
    },
    Save {
        file_name: String,
    },
    Load {
        file_name: String,
    },
    Print,
    Help,
    Quit,
}

impl Command {
    /// Parses a command line. The verb is case-insensitive; arguments are whitespace
    /// separated.
    ///
    /// `ADD` takes its last two arguments as WKN and symbol and joins everything before them
    /// into the company name, so names may contain spaces. `SEARCH` likewise joins all its
    /// arguments into one key.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` for an empty line, an unknown verb, or missing
    /// arguments.
    pub fn parse(line: &str) -> Result<Command, Error> {
        let mut tokens = line.split_whitespace();
        let verb = tokens
            .next()
            .ok_or_else(|| Error::InvalidArgument("No command given".to_string()))?;
        let args: Vec<&str> = tokens.collect();

        match verb.to_lowercase().as_str() {
            "add" => {
                if args.len() < 3 {
                    return Err(usage("ADD <NAME> <WKN> <SYMBOL>"));
                }
                let (name, rest) = args.split_at(args.len() - 2);
                Ok(Command::Add {
                    name: name.join(" "),
                    wkn: rest[0].to_string(),
                    symbol: rest[1].to_string(),
                })
            }
            "del" => Ok(Command::Delete {
                symbol: single_arg(&args, "DEL <SYMBOL>")?,
            }),
            "import" => match args.as_slice() {
                [path, symbol] => Ok(Command::Import {
                    path: PathBuf::from(*path),
                    symbol: symbol.to_string(),
                }),
                _ => Err(usage("IMPORT <PATH/TO/FILE> <SYMBOL>")),
            },
            "search" => {
                if args.is_empty() {
                    return Err(usage("SEARCH <SYMBOL>"));
                }
                Ok(Command::Search {
                    key: args.join(" "),
                })
            }
            "plot" => Ok(Command::Plot {
                symbol: single_arg(&args, "PLOT <SYMBOL>")?,
            }),
            "save" => Ok(Command::Save {
                file_name: single_arg(&args, "SAVE <FILENAME>")?,
            }),
            "load" => Ok(Command::Load {
                file_name: single_arg(&args, "LOAD <FILENAME>")?,
            }),
            "print" => Ok(Command::Print),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err(Error::InvalidArgument(format!("Unknown command '{}'", verb))),
        }
    }
}

fn single_arg(args: &[&str], example: &str) -> Result<String, Error> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(usage(example)),
    }
}

fn usage(example: &str) -> Error {
    Error::InvalidArgument(format!("You need to provide e.g. '{}'", example))
}
