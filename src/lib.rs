//! # stalw
//!
//! Small generic helpers for everyday number crunching and text cleanup.
//!
//! Every function is pure: it borrows its input, allocates at most one
//! owned copy, and never touches shared state, so all of them are safe to
//! call from any thread.
//!
//! ## Modules
//!
//! - [`numbers`] — The [`Number`] bound plus abs, min/max, clamp, range
//!   mapping and rounding
//! - [`stats`] — Mean, median and nearest value over slices
//! - [`collections`] — Occurrence counting and most-frequent elements
//! - [`geometry`] — Aspect-preserving fit into a bounding box
//! - [`translit`] — Cyrillic/Latin look-alike letter substitution
//!
//! ## Design Philosophy
//!
//! - **Generic over primitives**: one implementation for every integer
//!   and float type via [`num_traits`]
//! - **No sentinels**: empty input yields `None` or an empty `Vec`
//! - **Overflow-aware**: median and nearest avoid intermediate overflow;
//!   the one known limitation (mean summing in `T`) is documented
//! - **Property-based testing**: invariants verified via proptest

pub mod collections;
pub mod geometry;
pub mod numbers;
pub mod stats;
pub mod translit;

pub use collections::{count, most_frequent};
pub use geometry::{fit_to, Size};
pub use numbers::{abs, clamp, linear_xy, map_range, max, min, round, round_multiple, Number};
pub use stats::{mean, median, nearest};
pub use translit::{cyr_to_lat, lat_to_cyr};
