//! Track is_full across removals and inserts.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::filled(3, 0), observe);
    println!("filled(3, 0):       is_full = {}", buf.is_full());

    buf.remove();
    println!("after one remove:   is_full = {}", buf.is_full());

    buf.insert(1);
    println!("after one insert:   is_full = {}", buf.is_full());

    let zero = maybe_observed(CBuffer::<i32>::new(), observe);
    println!("zero capacity new(): is_full = {}", zero.is_full());
}
