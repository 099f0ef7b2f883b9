//! Report predicates against every element, oldest to newest.

use cbuffer::{CBuffer, evaluate_if};

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::with_capacity(3), observe);
    buf.insert(2);
    buf.insert(-2);
    buf.insert(3);
    println!("buffer: {buf}");

    let mut out = String::new();
    evaluate_if(&buf, |n| *n > 0, &mut out).expect("writing to a String cannot fail");
    println!("greater than zero:");
    print!("{out}");

    out.clear();
    evaluate_if(&buf, |n| *n < 0, &mut out).expect("writing to a String cannot fail");
    println!("less than zero:");
    print!("{out}");
}
