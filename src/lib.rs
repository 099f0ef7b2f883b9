#![allow(unsafe_code)]

//! A fixed-capacity sequence buffer that overwrites its oldest element
//! when full.
//!
//! [`CBuffer<T>`] owns a heap block of exactly `capacity` slots, sized once
//! at construction and never resized. Elements are kept contiguous and
//! insertion-ordered: logical position 0 is always the oldest element,
//! `len() - 1` the newest. Inserting into a full buffer evicts the oldest
//! element by sliding the survivors one slot toward the front and writing
//! the new value at the tail (a shift-based sliding window, O(capacity)
//! per eviction — not a modulo-indexed ring).
//!
//! # Quick Start
//!
//! ```
//! use cbuffer::CBuffer;
//!
//! let mut buf = CBuffer::with_capacity(3);
//! for i in 0..3 {
//!     buf.insert(i);
//! }
//! assert!(buf.is_full());
//! assert_eq!(buf.to_string(), "[0][1][2]");
//!
//! // Full: the oldest element is evicted.
//! buf.insert(3);
//! assert_eq!(buf.to_string(), "[1][2][3]");
//!
//! // Oldest-first removal.
//! buf.remove();
//! assert_eq!(*buf.at(0).unwrap(), 2);
//! ```
//!
//! # Cursors
//!
//! [`begin`](CBuffer::begin)/[`end`](CBuffer::end) hand out [`Cursor`]s —
//! random-access positions over the valid range that can be dereferenced,
//! offset, compared and subtracted. [`begin_mut`](CBuffer::begin_mut)
//! yields a [`CursorMut`] with write access; it converts into a read-only
//! [`Cursor`] but never the other way around.
//!
//! ```
//! use cbuffer::CBuffer;
//!
//! let buf = CBuffer::from_iter_bounded(3, [10, 20, 30]);
//! let begin = buf.begin();
//! let end = buf.end();
//! assert_eq!(*begin, 10);
//! assert_eq!(begin[2], 30);
//! assert_eq!(begin.distance(&end), 3);
//! assert_eq!(begin + 3, end);
//! ```
//!
//! # Diagnostics
//!
//! Insert/remove outcomes can be observed through an injectable
//! [`Observer`]; the crate ships [`observer::Traced`], which forwards
//! events to `tracing`. Without an observer the buffer is silent.

mod buffer;
mod cursor;
mod error;
pub mod observer;
mod report;

pub use buffer::CBuffer;
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use observer::{Event, Observer};
pub use report::evaluate_if;
