//! Public error type for buffer operations.
//!
//! Only indexed access has a caller-visible failure mode; every other
//! operation on the buffer is total. Failed element clones during bulk
//! construction surface as panics, with the partially-built storage fully
//! released first (see `CBuffer::filled`).

use thiserror::Error;

/// Errors returned by [`CBuffer`](crate::CBuffer) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Indexed access at or past the live element count. Signaled, never
    /// clamped.
    #[error("index {index} out of range: buffer holds {len} element(s)")]
    IndexOutOfRange {
        /// The requested logical position.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },
}
