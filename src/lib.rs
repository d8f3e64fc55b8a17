//! # rankvec
//!
//! A growable, rank-indexed sequence container with amortized capacity
//! management, built-in searching, five interchangeable in-place sort
//! strategies, deduplication, shuffling, and visitor-based traversal.
//!
//! ## Overview
//!
//! The centerpiece is [`RankVec`], a resizable ordered collection of
//! homogeneous elements. It provides:
//!
//! - **Capacity management**: the backing buffer doubles when full and
//!   halves when the load factor drops to 25% or below, so appends are
//!   amortized O(1) and memory tracks the live contents.
//! - **Searching**: unordered linear [`find`](RankVec::find) and ordered
//!   predecessor [`search`](RankVec::search) (rightmost element `<=` the
//!   query).
//! - **Sorting**: bubble, selection, merge, randomized quick, and heap
//!   sorts behind one [`SortStrategy`]-selected entry point, all in place
//!   over a caller-chosen rank range.
//! - **Maintenance**: [`deduplicate`](RankVec::deduplicate) for unsorted
//!   contents, [`uniquify`](RankVec::uniquify) for sorted contents,
//!   Fisher–Yates [`unsort`](RankVec::unsort), and closure-based
//!   [`traverse`](RankVec::traverse)/[`traverse_mut`](RankVec::traverse_mut).
//!
//! Element types only ever need comparison bounds (`PartialEq`, `Ord`)
//! and `Clone` for the copying constructors. The container is
//! single-threaded; share it behind external synchronization if needed.
//!
//! ## Example
//!
//! ```rust
//! use rankvec::prelude::*;
//!
//! let mut vector = RankVec::from_slice(&[3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! vector.sort_range_with(0, 8, SortStrategy::Quick);
//! assert_eq!(vector.disordered(), 0);
//!
//! let removed = vector.uniquify();
//! assert_eq!(removed, 1); // the duplicate 1
//! assert_eq!(vector.as_slice(), [1, 2, 3, 4, 5, 6, 9]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the sort-strategy selector, and the capacity
/// floor constant.
///
/// # Usage
///
/// ```rust
/// use rankvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::storage::MIN_CAPACITY;
    pub use crate::vector::{RankVec, SortStrategy};
}

mod storage;
pub mod vector;

pub use storage::MIN_CAPACITY;
pub use vector::{RankVec, SortStrategy};
