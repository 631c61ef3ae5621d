use crate::types::SlotIndex;
use crate::utils::{home_slot, string_hash};

/// Quadratic probe sequence over a table of `capacity` slots.
///
/// Yields `(home + i²) mod capacity` for `i = 0, 1, ..., capacity - 1`, so the first candidate
/// is the home slot itself and exactly `capacity` candidates are produced. The candidates are
/// not guaranteed to be distinct: once `i` passes `capacity / 2` the offsets repeat, so for
/// any capacity only about half of the slots are reachable from a given home slot. Callers
/// treat an exhausted sequence as a full table even if unreachable slots are still empty.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: SlotIndex,
    capacity: usize,
    attempt: usize,
}

impl ProbeSequence {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(home: SlotIndex, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        ProbeSequence {
            home: home % capacity,
            capacity,
            attempt: 0,
        }
    }

    /// Probe sequence starting at the home slot of `key`.
    pub fn for_key(key: &str, capacity: usize) -> Self {
        Self::new(home_slot(&string_hash(key), capacity), capacity)
    }

    pub fn home(&self) -> SlotIndex {
        self.home
    }
}

impl Iterator for ProbeSequence {
    type Item = SlotIndex;

    fn next(&mut self) -> Option<SlotIndex> {
        if self.attempt >= self.capacity {
            return None;
        }

        let i = self.attempt as u128;
        let capacity = self.capacity as u128;
        let index = (self.home as u128 + (i * i) % capacity) % capacity;
        self.attempt += 1;

        Some(index as SlotIndex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home_slot() {
        let probes: Vec<_> = ProbeSequence::new(3, 7).collect();
        assert_eq!(probes, vec![3, 4, 0, 5, 5, 0, 4]);
    }

    #[test]
    fn test_yields_capacity_candidates_in_range() {
        for capacity in [1, 2, 7, 16, 2003] {
            for home in [0, capacity / 2, capacity - 1] {
                let sequence = ProbeSequence::new(home, capacity);
                assert_eq!(sequence.len(), capacity);

                let probes: Vec<_> = sequence.collect();
                assert_eq!(probes.len(), capacity);
                assert!(probes.iter().all(|&index| index < capacity));
            }
        }
    }

    #[test]
    fn test_home_is_reduced_modulo_capacity() {
        let sequence = ProbeSequence::new(10, 7);
        assert_eq!(sequence.home(), 3);
    }

    #[test]
    fn test_does_not_overflow_for_large_capacity() {
        let capacity = usize::MAX / 2;
        let mut sequence = ProbeSequence::new(capacity - 1, capacity);
        assert_eq!(sequence.next(), Some(capacity - 1));
        assert_eq!(sequence.next(), Some(0));
    }
}
