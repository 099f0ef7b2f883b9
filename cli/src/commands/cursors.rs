//! Walk through the random-access cursor surface.

use cbuffer::CBuffer;

use super::maybe_observed;

pub fn run(observe: bool) {
    let mut buf = maybe_observed(CBuffer::from_iter_bounded(3, 0..3), observe);
    println!("buffer: {buf}");

    let begin = buf.begin();
    let end = buf.end();
    println!("*begin:              {}", *begin);
    println!("begin[1]:            {}", begin[1]);
    println!("begin.distance(end): {}", begin.distance(&end));
    println!("end - begin:         {}", end - begin);

    let mut cur = begin;
    cur += 1;
    println!("after += 1:          {}", *cur);
    cur -= 1;
    println!("after -= 1:          {}", *cur);
    println!("*(begin + 2):        {}", *(begin + 2));

    println!("begin == end:        {}", begin == end);
    println!("begin != end:        {}", begin != end);
    println!("begin < end:         {}", begin < end);
    println!("begin > end:         {}", begin > end);
    println!("begin <= end:        {}", begin <= end);
    println!("begin >= end:        {}", begin >= end);

    // The mutable cursor writes through; the read-only view follows.
    let mut cur = buf.begin_mut();
    while let Some(value) = cur.get_mut() {
        *value = -*value;
        cur += 1;
    }
    println!("after negating through a mutable cursor: {buf}");
}
