//! Insert until the buffer starts evicting its oldest element.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::with_capacity(3), observe);
    for i in 0..3 {
        buf.insert(i);
    }
    println!("after filling:     {buf}");

    for i in 3..5 {
        buf.insert(i);
    }
    println!("after overwriting: {buf}");
}
