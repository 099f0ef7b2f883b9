//! Track is_empty across a fill/drain cycle.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::with_capacity(3), observe);
    println!("fresh with_capacity(3): is_empty = {}", buf.is_empty());

    for i in 0..3 {
        buf.insert(i);
    }
    println!("after three inserts:    is_empty = {}", buf.is_empty());

    for _ in 0..3 {
        buf.remove();
    }
    println!("after three removes:    is_empty = {}", buf.is_empty());
}
