// Copyright 2026 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An encapsulated monotone counter.

use core::fmt;

use crate::Snapshot;

/// An encapsulated, monotonically non-decreasing counter.
///
/// A `Counter` owns a private integer value together with the immutable
/// value it was constructed with (its *origin*). The value can only be
/// read through [`get`] and advanced through [`increment`] (or
/// [`advance`]); there is no way to reach the underlying field directly,
/// and every constructed counter is fully independent of every other.
///
/// Incrementing saturates at [`i64::MAX`] rather than wrapping, so the
/// value never decreases.
///
/// # Examples
///
/// Each counter owns its own state:
///
/// ```
/// use tally::Counter;
///
/// let mut a = Counter::new();
/// let b = Counter::new();
///
/// a.increment();
/// a.increment();
///
/// assert_eq!(a.get(), 2);
/// assert_eq!(b.get(), 0);
/// ```
///
/// Counters can start from any value:
///
/// ```
/// use tally::Counter;
///
/// let mut c = Counter::with_initial(-3);
/// c.increment();
/// assert_eq!(c.get(), -2);
/// assert_eq!(c.origin(), -3);
/// ```
///
/// [`get`]: Counter::get
/// [`increment`]: Counter::increment
/// [`advance`]: Counter::advance
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    value: i64,
    origin: i64,
}

impl Counter {
    /// Create a new counter starting at zero.
    #[inline]
    pub const fn new() -> Counter {
        Counter::with_initial(0)
    }

    /// Create a new counter starting at `initial`.
    ///
    /// The initial value is not constrained; it also becomes the
    /// counter's [`origin`], which never changes afterwards.
    ///
    /// [`origin`]: Counter::origin
    #[inline]
    pub const fn with_initial(initial: i64) -> Counter {
        Counter {
            value: initial,
            origin: initial,
        }
    }

    /// Add 1 to the counter's value, saturating at [`i64::MAX`].
    ///
    /// This mutates only this counter; no other counter can observe
    /// the change.
    #[inline]
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// The current value.
    ///
    /// Reading has no side effect; the value moves only through
    /// [`increment`] and [`advance`].
    ///
    /// [`increment`]: Counter::increment
    /// [`advance`]: Counter::advance
    #[inline]
    pub const fn get(&self) -> i64 {
        self.value
    }

    /// The value this counter was constructed with.
    #[inline]
    pub const fn origin(&self) -> i64 {
        self.origin
    }

    /// The number of increments since construction.
    ///
    /// Equivalently, `get() - origin()`. The result is never negative;
    /// when the true span does not fit in an `i64` (a large negative
    /// origin advanced far past zero) it saturates at [`i64::MAX`],
    /// like [`increment`] itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::Counter;
    ///
    /// let mut c = Counter::with_initial(10);
    /// c.increment();
    /// c.increment();
    /// assert_eq!(c.get(), 12);
    /// assert_eq!(c.ticks(), 2);
    /// ```
    ///
    /// [`increment`]: Counter::increment
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.value.saturating_sub(self.origin)
    }

    /// Add `n` to the counter's value, saturating at [`i64::MAX`].
    ///
    /// `advance(1)` is the same as [`increment`].
    ///
    /// [`increment`]: Counter::increment
    #[inline]
    pub fn advance(&mut self, n: u64) {
        // Widen through i128 so the sum itself cannot overflow.
        let sum = i128::from(self.value) + i128::from(n);
        self.value = i64::try_from(sum).unwrap_or(i64::MAX);
    }

    /// Set the value back to the counter's [`origin`].
    ///
    /// [`origin`]: Counter::origin
    #[inline]
    pub fn reset(&mut self) {
        self.value = self.origin;
    }

    /// An immutable capture of the counter's current state.
    ///
    /// The snapshot is a plain value; it does not track the counter
    /// afterwards. See [`Snapshot`] for the capture-per-iteration
    /// pattern this supports.
    #[inline]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.value, self.origin)
    }
}

impl Default for Counter {
    #[inline]
    fn default() -> Counter {
        Counter::new()
    }
}

impl From<i64> for Counter {
    /// A counter starting at `initial`.
    #[inline]
    fn from(initial: i64) -> Counter {
        Counter::with_initial(initial)
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter({} from {})", self.value, self.origin)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, formatter)
    }
}
