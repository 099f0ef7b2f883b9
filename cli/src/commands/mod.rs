//! One module per demo command.

pub mod constructors;
pub mod contacts;
pub mod cursors;
pub mod empty;
pub mod evaluate;
pub mod full;
pub mod index;
pub mod insert;
pub mod remove;

use std::sync::Arc;

use cbuffer::CBuffer;
use cbuffer::observer::Traced;

/// Attaches the tracing observer when `--observe` was passed.
pub(crate) fn maybe_observed<T>(buf: CBuffer<T>, observe: bool) -> CBuffer<T> {
    if observe {
        buf.with_observer(Arc::new(Traced))
    } else {
        buf
    }
}
