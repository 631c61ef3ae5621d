use crate::models::{ProbeSequence, Stock};
use crate::types::{PriceHistory, SlotIndex, StockHandle};
use crate::Error;
use log::{debug, warn};
use std::fmt;
use std::rc::Rc;

/// Identifies one of the two slot arrays of a `StockTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Slots hashed by ticker symbol.
    Symbol,
    /// Slots hashed by company name.
    Name,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Symbol, Side::Name];

    /// The key `stock` is hashed by on this side.
    pub fn key_of(self, stock: &Stock) -> &str {
        match self {
            Side::Symbol => &stock.symbol,
            Side::Name => &stock.name,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Symbol => write!(f, "symbol"),
            Side::Name => write!(f, "name"),
        }
    }
}

/// Where one stock lives in each of the two slot arrays. The indices come from independent
/// probe sequences and are generally unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPair {
    pub symbol_index: SlotIndex,
    pub name_index: SlotIndex,
}

/// A successful lookup: the side and slot the key matched in, plus the shared record.
#[derive(Debug, Clone)]
pub struct StockMatch {
    pub side: Side,
    pub index: SlotIndex,
    pub stock: StockHandle,
}

/// The slots cleared by `StockTable::delete`.
#[derive(Debug, Clone)]
pub struct Removal {
    pub symbol_index: SlotIndex,
    /// `None` if the record had no name-side slot, which only happens for layouts restored
    /// from a document that listed it on the symbol side alone.
    pub name_index: Option<SlotIndex>,
    pub stock: StockHandle,
}

/// A fixed-capacity open-addressing table holding each stock twice: once in a slot array
/// hashed by ticker symbol and once in a slot array hashed by company name.
///
/// Both arrays hold clones of the same `StockHandle`, so a history imported through the symbol
/// side is visible through the name side. Insertion and deletion always touch both arrays.
/// There is no resizing; once the probe sequence of a key is exhausted, inserting it fails.
#[derive(Debug)]
pub struct StockTable {
    capacity: usize,
    symbol_table: Vec<Option<StockHandle>>,
    name_table: Vec<Option<StockHandle>>,
}

impl StockTable {
    /// Creates an empty table with `capacity` slots per side.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "table capacity must be positive".to_string(),
            ));
        }

        Ok(StockTable {
            capacity,
            symbol_table: vec![None; capacity],
            name_table: vec![None; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots on `side`.
    pub fn occupied(&self, side: Side) -> usize {
        self.slots(side).iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|&side| self.occupied(side) == 0)
    }

    /// The record stored at `index` on `side`, if any.
    pub fn get(&self, side: Side, index: SlotIndex) -> Option<&StockHandle> {
        self.slots(side).get(index).and_then(Option::as_ref)
    }

    /// Empties every slot of both arrays. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.symbol_table.iter_mut().for_each(|slot| *slot = None);
        self.name_table.iter_mut().for_each(|slot| *slot = None);
    }

    /// Creates a stock with an empty history and stores it in the first free slot of the
    /// symbol-side probe sequence of `symbol`, then in the first free slot of the name-side
    /// probe sequence of `name`.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` if `name` or `symbol` is empty.
    /// * `Error::TableFull` if either probe sequence is exhausted. The symbol side is written
    ///   before the name side is probed and is not rolled back: if only the name side is full,
    ///   the error carries the symbol-side index that now holds the record. Since every insert
    ///   and delete touches both sides, this can only happen after `load_slot` has populated
    ///   the sides unevenly.
    pub fn insert(&mut self, name: &str, wkn: &str, symbol: &str) -> Result<SlotPair, Error> {
        if name.is_empty() || symbol.is_empty() {
            return Err(Error::InvalidArgument(
                "stock name and symbol must not be empty".to_string(),
            ));
        }

        let stock = Stock::new(name, wkn, symbol).into_handle();

        let symbol_index = self.probe_free(Side::Symbol, symbol).ok_or_else(|| {
            warn!("Hash table is full: no free symbol_table slot for {}", symbol);
            Error::TableFull {
                side: Side::Symbol,
                placed: None,
            }
        })?;
        self.symbol_table[symbol_index] = Some(Rc::clone(&stock));
        debug!(
            "Added {} ({}) at symbol_table index {}",
            name, symbol, symbol_index
        );

        let name_index = match self.probe_free(Side::Name, name) {
            Some(index) => index,
            None => {
                warn!(
                    "Hash table is full: no free name_table slot for {}; {} stays at symbol_table index {}",
                    name, symbol, symbol_index
                );
                return Err(Error::TableFull {
                    side: Side::Name,
                    placed: Some(symbol_index),
                });
            }
        };
        self.name_table[name_index] = Some(stock);
        debug!("Added {} ({}) at name_table index {}", name, symbol, name_index);

        Ok(SlotPair {
            symbol_index,
            name_index,
        })
    }

    /// Looks `key` up as a ticker symbol first and, failing that, as a company name.
    ///
    /// Each side is searched along its own full probe sequence. Deleted slots are emptied
    /// rather than marked, so a search never stops early at an empty slot. Returns `None` for
    /// an empty key.
    pub fn find(&self, key: &str) -> Option<StockMatch> {
        if key.is_empty() {
            return None;
        }

        self.find_by_symbol(key).or_else(|| self.find_by_name(key))
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<StockMatch> {
        self.find_on(Side::Symbol, symbol)
    }

    pub fn find_by_name(&self, name: &str) -> Option<StockMatch> {
        self.find_on(Side::Name, name)
    }

    /// Both slot indices of the stock with ticker `symbol`.
    pub fn locate(&self, symbol: &str) -> Option<SlotPair> {
        let found = self.find_by_symbol(symbol)?;
        let name_index = self.name_slot_of(&found.stock)?;

        Some(SlotPair {
            symbol_index: found.index,
            name_index,
        })
    }

    /// Removes the stock with ticker `symbol` from both arrays.
    ///
    /// The name-side slot is located by probing with the record's own name, since it is
    /// unrelated to the symbol-side index.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` if `symbol` is empty.
    /// * `Error::NotFound` if no stock has that symbol.
    pub fn delete(&mut self, symbol: &str) -> Result<Removal, Error> {
        if symbol.is_empty() {
            return Err(Error::InvalidArgument(
                "stock symbol must not be empty".to_string(),
            ));
        }

        let found = self
            .find_by_symbol(symbol)
            .ok_or_else(|| Error::NotFound(symbol.to_string()))?;

        let name_index = self.name_slot_of(&found.stock);
        if let Some(name_index) = name_index {
            self.name_table[name_index] = None;
        }
        self.symbol_table[found.index] = None;

        debug!(
            "Deleted {} from symbol_table index {} and name_table index {:?}",
            symbol, found.index, name_index
        );

        Ok(Removal {
            symbol_index: found.index,
            name_index,
            stock: found.stock,
        })
    }

    /// Replaces the price history of the stock with ticker `symbol`. Trimming `rows` to the
    /// wanted window is up to the caller.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` if `symbol` is empty.
    /// * `Error::NotFound` if no stock has that symbol.
    pub fn import_history(&mut self, symbol: &str, rows: PriceHistory) -> Result<SlotIndex, Error> {
        if symbol.is_empty() {
            return Err(Error::InvalidArgument(
                "stock symbol must not be empty".to_string(),
            ));
        }

        let found = self
            .find_by_symbol(symbol)
            .ok_or_else(|| Error::NotFound(symbol.to_string()))?;

        debug!(
            "Replacing history of {} at symbol_table index {} with {} rows",
            symbol,
            found.index,
            rows.len()
        );
        found.stock.borrow_mut().replace_history(rows);

        Ok(found.index)
    }

    /// Every occupied slot in array order, symbol side first.
    pub fn iter_populated(&self) -> impl Iterator<Item = (Side, SlotIndex, &StockHandle)> + '_ {
        Side::ALL.into_iter().flat_map(move |side| {
            self.slots(side)
                .iter()
                .enumerate()
                .filter_map(move |(index, slot)| slot.as_ref().map(|stock| (side, index, stock)))
        })
    }

    /// Stores `stock` at exactly `index` on `side`, bypassing hashing and probing. Used to
    /// replay a saved layout; the index is trusted and not checked against the key's probe
    /// sequence.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `index` is outside the table.
    pub fn load_slot(&mut self, side: Side, index: SlotIndex, stock: StockHandle) -> Result<(), Error> {
        let capacity = self.capacity;
        let slot = self.slots_mut(side).get_mut(index).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{}_table index {} is outside a table of capacity {}",
                side, index, capacity
            ))
        })?;
        *slot = Some(stock);

        Ok(())
    }

    fn slots(&self, side: Side) -> &[Option<StockHandle>] {
        match side {
            Side::Symbol => &self.symbol_table,
            Side::Name => &self.name_table,
        }
    }

    fn slots_mut(&mut self, side: Side) -> &mut [Option<StockHandle>] {
        match side {
            Side::Symbol => &mut self.symbol_table,
            Side::Name => &mut self.name_table,
        }
    }

    fn probe_free(&self, side: Side, key: &str) -> Option<SlotIndex> {
        let slots = self.slots(side);
        ProbeSequence::for_key(key, self.capacity).find(|&index| slots[index].is_none())
    }

    fn find_on(&self, side: Side, key: &str) -> Option<StockMatch> {
        let slots = self.slots(side);

        ProbeSequence::for_key(key, self.capacity).find_map(|index| {
            slots[index]
                .as_ref()
                .filter(|stock| side.key_of(&stock.borrow()) == key)
                .map(|stock| StockMatch {
                    side,
                    index,
                    stock: Rc::clone(stock),
                })
        })
    }

    /// The name-side slot holding the same handle as `stock`. Probes by the record's name and
    /// falls back to a scan when the handle was restored at an index off its probe sequence.
    /// Only handle identity counts, so records with equal fields are never confused.
    fn name_slot_of(&self, stock: &StockHandle) -> Option<SlotIndex> {
        let name = stock.borrow().name.clone();
        let holds_record =
            |slot: &Option<StockHandle>| matches!(slot, Some(candidate) if Rc::ptr_eq(candidate, stock));

        ProbeSequence::for_key(&name, self.capacity)
            .find(|&index| holds_record(&self.name_table[index]))
            .or_else(|| self.name_table.iter().position(holds_record))
    }
}
