//! Injectable diagnostics for buffer mutations.
//!
//! The buffer itself never writes to any output stream. Callers that want
//! the insert/remove diagnostics attach an [`Observer`] at construction
//! ([`CBuffer::with_observer`](crate::CBuffer::with_observer)) or later
//! ([`CBuffer::set_observer`](crate::CBuffer::set_observer)). The event
//! payloads and the levels [`Traced`] logs at are incidental, not a stable
//! contract.

use tracing::{debug, trace};

/// A mutation outcome reported to an [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An element was stored; `len` is the element count afterwards.
    /// Covers both the append and the overwrite-on-full path.
    Inserted { len: usize },
    /// `insert` on a zero-capacity buffer; nothing changed.
    InsertRejected,
    /// The oldest element was removed; `len` is the count afterwards.
    Removed { len: usize },
    /// `remove` on an empty buffer; nothing changed.
    RemoveRejected,
}

/// Sink for buffer mutation events.
///
/// Implementations must be cheap and must not call back into the buffer
/// (they receive `&self` while the buffer is mid-mutation borrow, so the
/// compiler rules out reentrancy anyway).
pub trait Observer: Send + Sync {
    fn on_event(&self, event: Event);
}

/// Forwards events to [`tracing`]: successful mutations at `trace`,
/// rejected ones at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Traced;

impl Observer for Traced {
    fn on_event(&self, event: Event) {
        match event {
            Event::Inserted { len } => trace!(len, "element inserted"),
            Event::InsertRejected => debug!("insert ignored: capacity is zero"),
            Event::Removed { len } => trace!(len, "oldest element removed"),
            Event::RemoveRejected => debug!("remove ignored: buffer is empty"),
        }
    }
}
