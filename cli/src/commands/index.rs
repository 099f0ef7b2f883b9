//! Checked indexed access, including the out-of-range failures.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::from_iter_bounded(3, 0..3), observe);
    println!("buffer: {buf}");

    for i in 0..4 {
        report(&buf, i);
    }

    buf.remove();
    println!("after one remove: {buf}");
    for i in 0..3 {
        report(&buf, i);
    }
}

fn report(buf: &CBuffer<i32>, index: usize) {
    match buf.at(index) {
        Ok(value) => println!("at({index}) = {value}"),
        Err(err) => println!("at({index}) failed: {err}"),
    }
}
