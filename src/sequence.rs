// Copyright 2026 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A labeled generator of unique string ids.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::Counter;

/// A labeled generator of ids unique for the sequence's lifetime.
///
/// A `Sequence` pairs an immutable label, fixed at construction, with
/// a private [`Counter`]. Each call to [`next_id`] yields
/// `"{label}-{n}"` for the next value of `n`, so a single sequence
/// never repeats an id until its numeric part reaches [`i64::MAX`],
/// where the counter saturates and the final id repeats (see
/// [`next_id`]). Independently constructed sequences own
/// independent counters; two sequences with the same label will issue
/// overlapping ids, which is the intended behavior for namespaced
/// id streams.
///
/// # Examples
///
/// ```
/// use tally::Sequence;
///
/// let mut users = Sequence::new("user");
/// let mut orders = Sequence::new("order");
///
/// assert_eq!(users.next_id(), "user-0");
/// assert_eq!(users.next_id(), "user-1");
/// assert_eq!(orders.next_id(), "order-0");
/// ```
///
/// [`next_id`]: Sequence::next_id
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    label: String,
    counter: Counter,
}

impl Sequence {
    /// Create a sequence whose numeric part starts at zero.
    #[inline]
    pub fn new(label: impl Into<String>) -> Sequence {
        Sequence::starting_at(label, 0)
    }

    /// Create a sequence whose numeric part starts at `initial`.
    #[inline]
    pub fn starting_at(label: impl Into<String>, initial: i64) -> Sequence {
        Sequence {
            label: label.into(),
            counter: Counter::with_initial(initial),
        }
    }

    /// Issue the next id and advance the sequence.
    ///
    /// Ids are unique until the numeric part reaches [`i64::MAX`].
    /// The inner counter saturates there, so every later call returns
    /// `"{label}-9223372036854775807"` again. A zero-based sequence
    /// would need one id per call for almost three hundred years at a
    /// billion calls per second to hit the bound; start near the
    /// boundary only if repeats are acceptable.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.label, self.counter.get());
        self.counter.increment();
        id
    }

    /// The label this sequence was constructed with.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The number of ids issued so far.
    #[inline]
    pub fn issued(&self) -> i64 {
        self.counter.ticks()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}-*", self.label)
    }
}

impl From<&str> for Sequence {
    /// A zero-based sequence with the given label.
    #[inline]
    fn from(label: &str) -> Sequence {
        Sequence::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_up_from_zero() {
        let mut s = Sequence::new("id");
        assert_eq!(s.next_id(), "id-0");
        assert_eq!(s.next_id(), "id-1");
        assert_eq!(s.next_id(), "id-2");
        assert_eq!(s.issued(), 3);
    }

    #[test]
    fn starting_point_is_respected() {
        let mut s = Sequence::starting_at("ticket", 100);
        assert_eq!(s.next_id(), "ticket-100");
        assert_eq!(s.next_id(), "ticket-101");
        assert_eq!(s.issued(), 2);
    }

    #[test]
    fn sequences_are_independent() {
        let mut a = Sequence::new("a");
        let mut b = Sequence::new("b");
        a.next_id();
        a.next_id();
        assert_eq!(a.next_id(), "a-2");
        assert_eq!(b.next_id(), "b-0");
    }

    #[test]
    fn same_label_streams_overlap() {
        let mut a = Sequence::new("x");
        let mut b = Sequence::new("x");
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn saturated_sequence_repeats_final_id() {
        let mut s = Sequence::starting_at("x", i64::MAX);
        let last = s.next_id();
        assert_eq!(last, "x-9223372036854775807");
        assert_eq!(s.next_id(), last);
        assert_eq!(s.next_id(), last);
    }

    #[test]
    fn label_is_fixed() {
        let mut s = Sequence::new("node");
        s.next_id();
        assert_eq!(s.label(), "node");
    }
}
