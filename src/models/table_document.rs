use crate::models::{Side, Stock, StockTable};
use crate::types::{SlotIndex, StockHandle};
use crate::Error;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Occupied slots of one side, keyed by the decimal slot index.
pub type SlotCollection = BTreeMap<String, Stock>;

/// The on-disk form of a `StockTable`: every occupied slot of each side under its exact index.
/// Absent indices are empty slots.
///
/// ```json
/// {
///   "symbol_table": {"3": {"name": "Apple Inc", "wkn": "US1", "symbol": "AAPL", "data": null}},
///   "name_table": {"5": {"name": "Apple Inc", "wkn": "US1", "symbol": "AAPL", "data": null}}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    #[serde(default)]
    pub symbol_table: SlotCollection,
    #[serde(default)]
    pub name_table: SlotCollection,
}

impl TableDocument {
    /// Snapshots every occupied slot of `table`.
    pub fn from_table(table: &StockTable) -> Self {
        let mut document = TableDocument::default();

        for (side, index, stock) in table.iter_populated() {
            document
                .collection_mut(side)
                .insert(index.to_string(), stock.borrow().clone());
        }

        document
    }

    pub fn collection(&self, side: Side) -> &SlotCollection {
        match side {
            Side::Symbol => &self.symbol_table,
            Side::Name => &self.name_table,
        }
    }

    fn collection_mut(&mut self, side: Side) -> &mut SlotCollection {
        match side {
            Side::Symbol => &mut self.symbol_table,
            Side::Name => &mut self.name_table,
        }
    }

    /// Replaces the contents of `table` with the document's layout, replaying the saved slot
    /// indices without rehashing.
    ///
    /// A name-side record equal to a symbol-side record is restored as the same shared handle,
    /// so histories imported after loading stay visible through both sides.
    ///
    /// # Errors
    /// * `Error::ParserError` if a slot key is not a non-negative integer.
    /// * `Error::InvalidArgument` if a slot index is outside `table`. The table is left
    ///   untouched in both cases.
    pub fn restore_into(&self, table: &mut StockTable) -> Result<(), Error> {
        let mut slots: Vec<(Side, SlotIndex, &Stock)> = Vec::new();
        for side in Side::ALL {
            for (key, stock) in self.collection(side) {
                let index = parse_slot_index(side, key)?;
                if index >= table.capacity() {
                    return Err(Error::InvalidArgument(format!(
                        "{}_table index {} is outside a table of capacity {}",
                        side,
                        index,
                        table.capacity()
                    )));
                }
                slots.push((side, index, stock));
            }
        }

        table.clear();

        let mut restored: Vec<StockHandle> = Vec::new();
        for (side, index, stock) in slots {
            let handle = match side {
                Side::Symbol => {
                    let handle = stock.clone().into_handle();
                    restored.push(Rc::clone(&handle));
                    handle
                }
                Side::Name => restored
                    .iter()
                    .position(|candidate| *candidate.borrow() == *stock)
                    .map(|position| restored.swap_remove(position))
                    .unwrap_or_else(|| stock.clone().into_handle()),
            };
            table.load_slot(side, index, handle)?;
        }

        Ok(())
    }

    /// Writes the document as JSON to `path`.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;

        info!(
            "Saved {} symbol_table and {} name_table slots to {:?}",
            self.symbol_table.len(),
            self.name_table.len(),
            path
        );

        Ok(())
    }

    /// Reads a JSON document from `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let document: TableDocument = serde_json::from_reader(reader)?;

        info!(
            "Loaded {} symbol_table and {} name_table slots from {:?}",
            document.symbol_table.len(),
            document.name_table.len(),
            path
        );

        Ok(document)
    }
}

fn parse_slot_index(side: Side, key: &str) -> Result<SlotIndex, Error> {
    key.trim().parse::<SlotIndex>().map_err(|_| {
        Error::ParserError(format!(
            "{}_table slot key '{}' is not a slot index",
            side, key
        ))
    })
}
