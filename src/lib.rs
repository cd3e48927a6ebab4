// Copyright 2026 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encapsulated monotone counters, with snapshots and id sequences.
//!
//! The tally library contains small vocabulary types for private,
//! monotonically non-decreasing integer state. The core type is
//! [`Counter`]: an opaque handle whose value is reachable only through
//! its method surface, where every constructed handle is fully
//! independent of every other. Around it sit [`Snapshot`] (an immutable
//! capture for the value-at-creation-time pattern), [`Sequence`]
//! (labeled unique string ids), and [`CounterBank`] (many independent
//! counters behind one owner).
//!
//! # Examples
//!
//! Independent counters:
//!
//! ```
//! use tally::Counter;
//!
//! let mut visits = Counter::new();
//! let errors = Counter::new();
//!
//! visits.increment();
//! visits.increment();
//! visits.increment();
//!
//! assert_eq!(visits.get(), 3);
//! assert_eq!(errors.get(), 0);
//! ```
//!
//! Capturing a value per loop iteration instead of a live handle:
//!
//! ```
//! use tally::{Counter, Snapshot};
//!
//! let mut c = Counter::new();
//! let mut seen: Vec<Snapshot> = Vec::new();
//! for _ in 0..3 {
//!     seen.push(c.snapshot());
//!     c.increment();
//! }
//! let values: Vec<i64> = seen.into_iter().map(i64::from).collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! ```
//!
//! # Features
//!
//! The `std` feature is enabled by default but can be disabled; the
//! crate then builds with `alloc` alone, which [`Sequence`] and
//! [`CounterBank`] use for id strings and spilled slot storage. The
//! `serde` feature adds `Serialize`/`Deserialize` for every type.
//!
//! # Threading
//!
//! A counter has a single owner; nothing in this crate shares state.
//! To mutate one counter from several threads, wrap it in a
//! `Mutex<Counter>` on the caller's side.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod bank;
mod counter;
mod sequence;
mod snapshot;

pub use crate::bank::*;
pub use crate::counter::*;
pub use crate::sequence::*;
pub use crate::snapshot::*;
