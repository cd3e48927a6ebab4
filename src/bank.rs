// Copyright 2026 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A collection of independent counters.

use core::fmt;

use smallvec::SmallVec;

use crate::Counter;

/// A small owned collection of independent [`Counter`]s.
///
/// A bank is a convenience for the "one counter per slot" shape, such
/// as spawning a counter per loop iteration. Every slot owns its own
/// [`Counter`]; mutating one slot never affects its siblings. Banks of
/// up to 8 counters are stored inline without a heap allocation.
///
/// # Examples
///
/// ```
/// use tally::CounterBank;
///
/// let mut bank = CounterBank::with_len(3);
/// if let Some(c) = bank.counter_mut(1) {
///     c.increment();
///     c.increment();
/// }
///
/// let values: Vec<i64> = bank.values().collect();
/// assert_eq!(values, vec![0, 2, 0]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterBank {
    slots: SmallVec<[Counter; 8]>,
}

impl CounterBank {
    /// Create an empty bank.
    #[inline]
    pub fn new() -> CounterBank {
        CounterBank {
            slots: SmallVec::new(),
        }
    }

    /// Create a bank of `len` counters, each starting at zero.
    pub fn with_len(len: usize) -> CounterBank {
        CounterBank {
            slots: (0..len).map(|_| Counter::new()).collect(),
        }
    }

    /// Create a bank with one counter per initial value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::CounterBank;
    ///
    /// let bank = CounterBank::from_initials(&[1, 10, 100]);
    /// assert_eq!(bank.counter(2).map(|c| c.get()), Some(100));
    /// ```
    pub fn from_initials(initials: &[i64]) -> CounterBank {
        CounterBank {
            slots: initials
                .iter()
                .map(|&initial| Counter::with_initial(initial))
                .collect(),
        }
    }

    /// Append a counter starting at `initial` and return its slot index.
    pub fn add(&mut self, initial: i64) -> usize {
        self.slots.push(Counter::with_initial(initial));
        self.slots.len() - 1
    }

    /// The counter in slot `ix`, or `None` if the slot doesn't exist.
    #[inline]
    pub fn counter(&self, ix: usize) -> Option<&Counter> {
        self.slots.get(ix)
    }

    /// Mutable access to the counter in slot `ix`.
    ///
    /// Only the returned counter can be mutated through this borrow;
    /// the other slots are unreachable from it.
    #[inline]
    pub fn counter_mut(&mut self, ix: usize) -> Option<&mut Counter> {
        self.slots.get_mut(ix)
    }

    /// The number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the bank has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The current value of each slot, in slot order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().map(Counter::get)
    }

    /// The saturating sum of all slot values.
    pub fn total(&self) -> i64 {
        self.values().fold(0, i64::saturating_add)
    }
}

impl fmt::Debug for CounterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl From<&[i64]> for CounterBank {
    #[inline]
    fn from(initials: &[i64]) -> CounterBank {
        CounterBank::from_initials(initials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bank() {
        let bank = CounterBank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.total(), 0);
        assert!(bank.counter(0).is_none());
    }

    #[test]
    fn slots_start_at_zero() {
        let bank = CounterBank::with_len(4);
        assert_eq!(bank.len(), 4);
        assert!(bank.values().all(|v| v == 0));
    }

    #[test]
    fn slots_are_independent() {
        let mut bank = CounterBank::with_len(3);
        if let Some(c) = bank.counter_mut(0) {
            c.increment();
            c.increment();
        }
        let values: alloc::vec::Vec<i64> = bank.values().collect();
        assert_eq!(values, [2, 0, 0]);
    }

    #[test]
    fn add_returns_slot_index() {
        let mut bank = CounterBank::new();
        assert_eq!(bank.add(5), 0);
        assert_eq!(bank.add(7), 1);
        assert_eq!(bank.counter(1).map(Counter::get), Some(7));
        assert_eq!(bank.total(), 12);
    }

    #[test]
    fn one_counter_per_iteration() {
        let mut bank = CounterBank::new();
        for i in 0..5 {
            let ix = bank.add(0);
            for _ in 0..i {
                if let Some(c) = bank.counter_mut(ix) {
                    c.increment();
                }
            }
        }
        let values: alloc::vec::Vec<i64> = bank.values().collect();
        assert_eq!(values, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn total_saturates() {
        let bank = CounterBank::from_initials(&[i64::MAX, 1]);
        assert_eq!(bank.total(), i64::MAX);
    }
}
