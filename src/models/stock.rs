use crate::types::{CompanyName, PriceHistory, PriceRow, StockHandle, TickerSymbol, Wkn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::RefCell;
use std::rc::Rc;

/// A stock tracked by the table: its identity plus the most recently imported price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub name: CompanyName,
    pub wkn: Wkn,
    pub symbol: TickerSymbol,
    /// Serialized as `data`, which is `null` until something has been imported.
    #[serde(
        rename = "data",
        default,
        serialize_with = "serialize_history",
        deserialize_with = "deserialize_history"
    )]
    pub history: PriceHistory,
}

impl Stock {
    /// Creates a stock with an empty price history.
    pub fn new(name: &str, wkn: &str, symbol: &str) -> Self {
        Self::with_history(name, wkn, symbol, PriceHistory::new())
    }

    pub fn with_history(name: &str, wkn: &str, symbol: &str, history: PriceHistory) -> Self {
        Stock {
            name: name.to_string(),
            wkn: wkn.to_string(),
            symbol: symbol.to_string(),
            history,
        }
    }

    /// Wraps the stock in the shared handle stored by both slot arrays.
    pub fn into_handle(self) -> StockHandle {
        Rc::new(RefCell::new(self))
    }

    /// Replaces the whole price history.
    pub fn replace_history(&mut self, history: PriceHistory) {
        self.history = history;
    }

    /// The newest imported row, if any.
    pub fn latest_row(&self) -> Option<&PriceRow> {
        self.history.last()
    }

    /// Parses `column` of every row as a price, skipping rows where the field is missing or
    /// not a number.
    pub fn close_prices(&self, column: usize) -> Vec<f64> {
        self.history
            .iter()
            .filter_map(|row| row.get(column))
            .filter_map(|field| field.trim().parse::<f64>().ok())
            .collect()
    }
}

fn serialize_history<S>(history: &PriceHistory, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if history.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(history)
    }
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<PriceHistory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PriceHistory>::deserialize(deserializer)?.unwrap_or_default())
}
