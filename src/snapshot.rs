// Copyright 2026 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An immutable capture of a counter's state.

use core::fmt;

/// An immutable capture of a [`Counter`]'s state at a single moment.
///
/// A snapshot is a plain `Copy` value. Once taken it never changes,
/// no matter what happens to the counter it came from. This is the
/// tool for the capture-per-iteration pattern: when storing deferred
/// closures in a loop, capture a fresh snapshot in each iteration so
/// every closure sees the value at its own creation time rather than
/// a shared, still-moving counter.
///
/// # Examples
///
/// Each stored closure holds the value from its own iteration:
///
/// ```
/// use tally::Counter;
///
/// let mut c = Counter::new();
/// let mut deferred: Vec<Box<dyn Fn() -> i64>> = Vec::new();
/// for _ in 0..3 {
///     let snap = c.snapshot();
///     deferred.push(Box::new(move || snap.value()));
///     c.increment();
/// }
///
/// assert_eq!(c.get(), 3);
/// let seen: Vec<i64> = deferred.iter().map(|f| f()).collect();
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
///
/// [`Counter`]: crate::Counter
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    value: i64,
    origin: i64,
}

impl Snapshot {
    #[inline]
    pub(crate) const fn new(value: i64, origin: i64) -> Snapshot {
        Snapshot { value, origin }
    }

    /// The counter's value at capture time.
    #[inline]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// The origin of the counter the snapshot was taken from.
    #[inline]
    pub const fn origin(self) -> i64 {
        self.origin
    }

    /// The number of increments the counter had seen at capture time.
    ///
    /// Saturates at [`i64::MAX`] for spans that do not fit in an
    /// `i64`, exactly as [`Counter::ticks`] does.
    ///
    /// [`Counter::ticks`]: crate::Counter::ticks
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.value.saturating_sub(self.origin)
    }
}

impl From<Snapshot> for i64 {
    #[inline]
    fn from(snap: Snapshot) -> i64 {
        snap.value
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snapshot({} from {})", self.value, self.origin)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, formatter)
    }
}

#[cfg(test)]
mod tests {
    use crate::Counter;

    #[test]
    fn snapshot_is_fixed() {
        let mut c = Counter::new();
        c.increment();
        let snap = c.snapshot();
        c.increment();
        c.increment();
        assert_eq!(snap.value(), 1);
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn snapshot_carries_origin() {
        let mut c = Counter::with_initial(5);
        c.increment();
        let snap = c.snapshot();
        assert_eq!(snap.value(), 6);
        assert_eq!(snap.origin(), 5);
        assert_eq!(snap.ticks(), 1);
    }

    #[test]
    fn ticks_saturates_like_the_counter() {
        let mut c = Counter::with_initial(i64::MIN);
        c.advance(u64::MAX);
        let snap = c.snapshot();
        assert_eq!(snap.ticks(), i64::MAX);
        assert_eq!(snap.ticks(), c.ticks());
    }

    #[test]
    fn snapshots_order_by_value() {
        let mut c = Counter::new();
        let early = c.snapshot();
        c.increment();
        let late = c.snapshot();
        assert!(early < late);
        assert_eq!(i64::from(late), 1);
    }
}
