//! Reporting helpers built purely on the cursor contract.
//!
//! Both the predicate reporter and the `Display` rendering walk the buffer
//! through `begin()`/`end()`, cursor equality and advancement only — they
//! never reach into the storage directly, and double as a workout of the
//! cursor surface.

use core::fmt::{self, Write};

use crate::buffer::CBuffer;

/// Applies `pred` to every element, oldest to newest, writing one line per
/// element into `out` as `[i]: <result>` with a 0-based index.
///
/// A single finite pass; calling it again re-walks the buffer from the
/// start. The only failure mode is the sink's.
///
/// ```
/// use cbuffer::{CBuffer, evaluate_if};
///
/// let buf = CBuffer::from_iter_bounded(3, [2, -2, 3]);
/// let mut out = String::new();
/// evaluate_if(&buf, |n| *n > 0, &mut out).unwrap();
/// assert_eq!(out, "[0]: true\n[1]: false\n[2]: true\n");
/// ```
pub fn evaluate_if<T, P, W>(buf: &CBuffer<T>, mut pred: P, out: &mut W) -> fmt::Result
where
    P: FnMut(&T) -> bool,
    W: Write,
{
    let end = buf.end();
    let mut cur = buf.begin();
    let mut i = 0usize;
    while cur != end {
        writeln!(out, "[{i}]: {}", pred(&*cur))?;
        cur += 1;
        i += 1;
    }
    Ok(())
}

/// Renders the buffer oldest-first with each element wrapped in brackets
/// and no separators, e.g. `[1][2][3]`; an empty buffer renders as the
/// literal `Empty cbuffer`.
impl<T: fmt::Display> fmt::Display for CBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cur = self.begin();
        let end = self.end();
        if cur == end {
            return f.write_str("Empty cbuffer");
        }
        while cur != end {
            write!(f, "[{}]", *cur)?;
            cur += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
