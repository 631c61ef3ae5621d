use crate::models::{
    Command, PriceHistoryReader, Side, StockTable, TableDocument, TickerTableConfig,
};
use crate::types::PriceRow;
use crate::utils::render_chart;
use crate::Error;
use log::{debug, info};
use std::fmt::Write;

pub const MENU: &str = "\
Please select an option:
[ADD] - Add a stock <NAME WKN SYMBOL>
[DEL] - Delete a stock <SYMBOL>
[IMPORT] - Import csv data from <FILEPATH> to <SYMBOL>
[SEARCH] - Search stock <SYMBOL> or <NAME> and find current value
[PLOT] - Create a plot for <SYMBOL> of the last 30 days
[SAVE] - Save table to file <FILENAME>
[LOAD] - Load table from file <FILENAME>
[PRINT] - Print the occupied slots of the table
[QUIT] - Close program";

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text to show the user. May be empty.
    Message(String),
    Quit,
}

/// Owns a `StockTable` and runs parsed commands against it.
pub struct Interpreter {
    config: TickerTableConfig,
    table: StockTable,
}

impl Interpreter {
    /// Creates an interpreter over an empty table of `config.capacity` slots.
    pub fn new(config: TickerTableConfig) -> Result<Self, Error> {
        let table = StockTable::new(config.capacity)?;
        Ok(Self::with_table(config, table))
    }

    pub fn with_table(config: TickerTableConfig, table: StockTable) -> Self {
        Interpreter { config, table }
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    pub fn config(&self) -> &TickerTableConfig {
        &self.config
    }

    /// Parses and runs one line. Every error is turned into an informational message, so a
    /// bad command never ends the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("Command '{}' failed: {:?}", line.trim(), err);
                Outcome::Message(Self::describe_error(&err))
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, Error> {
        let message = match command {
            Command::Add { name, wkn, symbol } => {
                let slots = self.table.insert(&name, &wkn, &symbol)?;
                format!(
                    "Added {} ({}) at symbol_table index {}\nAdded {} ({}) at name_table index {}",
                    name, symbol, slots.symbol_index, name, symbol, slots.name_index
                )
            }
            Command::Delete { symbol } => {
                let removal = self.table.delete(&symbol)?;
                match removal.name_index {
                    Some(name_index) => format!(
                        "Deleted {} from symbol_table index {} and name_table index {}",
                        symbol, removal.symbol_index, name_index
                    ),
                    None => format!(
                        "Deleted {} from symbol_table index {}",
                        symbol, removal.symbol_index
                    ),
                }
            }
            Command::Import { path, symbol } => {
                if self.table.find_by_symbol(&symbol).is_none() {
                    return Err(Error::NotFound(symbol));
                }
                let rows = PriceHistoryReader::read_from_path(&path, self.config.history_window)?;
                let row_count = rows.len();
                let index = self.table.import_history(&symbol, rows)?;
                info!("Imported {} rows from {:?} into {}", row_count, path, symbol);
                format!(
                    "IMPORT {} to {} (symbol_table index {}): {} rows",
                    path.display(),
                    symbol,
                    index,
                    row_count
                )
            }
            Command::Search { key } => {
                let found = self
                    .table
                    .find(&key)
                    .ok_or_else(|| Error::NotFound(key.clone()))?;
                let mut message =
                    format!("Found {} in {}_table at index {}", key, found.side, found.index);
                if let Some(row) = found.stock.borrow().latest_row() {
                    let _ = write!(message, "\nNewest data for {}: {}", key, format_row(row));
                }
                message
            }
            Command::Plot { symbol } => {
                let found = self
                    .table
                    .find_by_symbol(&symbol)
                    .ok_or_else(|| Error::NotFound(symbol.clone()))?;
                let chart = render_chart(&found.stock.borrow(), self.config.close_column);
                chart.unwrap_or_else(|| format!("INFO: No price data imported for {}", symbol))
            }
            Command::Save { file_name } => {
                let path = self.config.table_file_path(&file_name);
                TableDocument::from_table(&self.table).save(&path)?;
                format!("Saved table to {}", path.display())
            }
            Command::Load { file_name } => {
                let path = self.config.table_file_path(&file_name);
                TableDocument::load(&path)?.restore_into(&mut self.table)?;
                format!("Loaded table from {}", path.display())
            }
            Command::Print => self.render_table(),
            Command::Help => MENU.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Message(message))
    }

    /// Lists the occupied slots of both sides: symbols for the symbol side, names for the
    /// name side.
    pub fn render_table(&self) -> String {
        let mut rendered = format!("{:=^30}\n", "| Hashtable |");

        for side in Side::ALL {
            let _ = writeln!(rendered, "{}_table:", side);
            for (_, index, stock) in self.table.iter_populated().filter(|(s, _, _)| *s == side) {
                let _ = writeln!(rendered, "{} {}", index, side.key_of(&stock.borrow()));
            }
        }

        rendered
    }

    fn describe_error(err: &Error) -> String {
        match err {
            Error::InvalidArgument(msg) => format!("INFO: {}", msg),
            Error::NotFound(key) => format!("INFO: {} not found", key),
            _ => format!("ERROR: {}", err),
        }
    }
}

fn format_row(row: &PriceRow) -> String {
    format!("[{}]", row.join(", "))
}
