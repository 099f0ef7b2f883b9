//! Remove oldest-first down to empty, then refill.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::filled(3, 0), observe);
    println!("filled(3, 0):        {buf}");

    for _ in 0..3 {
        buf.remove();
    }
    println!("after three removes: {buf}");

    buf.insert(3);
    buf.insert(1);
    println!("after two inserts:   {buf}");

    buf.remove();
    println!("after one remove:    {buf}");

    buf.remove();
    println!("after another:       {buf}");
}
