//! Every way to build a buffer, printed through its Display rendering.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let filled = maybe_observed(CBuffer::filled(3, 0), observe);
    println!("filled(3, 0):                {filled}");

    let empty = maybe_observed(CBuffer::<i32>::with_capacity(3), observe);
    println!("with_capacity(3):            {empty}");

    let zero = maybe_observed(CBuffer::<i32>::new(), observe);
    println!("new():                       {zero}");

    let copy = filled.clone();
    println!("filled.clone():              {copy}");

    let mut assigned = CBuffer::new();
    assigned.clone_from(&filled);
    println!("clone_from(&filled):         {assigned}");

    // A source longer than the capacity overwrites its own head.
    let bounded = maybe_observed(CBuffer::from_iter_bounded(3, 1..=5), observe);
    println!("from_iter_bounded(3, 1..=5): {bounded}");
}
