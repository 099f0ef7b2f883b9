//! Tests for the predicate reporter and the Display rendering.

use core::fmt;

use pretty_assertions::assert_eq;

use crate::{CBuffer, evaluate_if};

#[test]
fn reports_one_line_per_element_with_indexes() {
    let buf = CBuffer::from_iter_bounded(3, [2, -2, 3]);

    let mut out = String::new();
    evaluate_if(&buf, |n| *n > 0, &mut out).unwrap();
    assert_eq!(out, "[0]: true\n[1]: false\n[2]: true\n");

    let mut out = String::new();
    evaluate_if(&buf, |n| *n < 0, &mut out).unwrap();
    assert_eq!(out, "[0]: false\n[1]: true\n[2]: false\n");
}

#[test]
fn reports_nothing_for_an_empty_buffer() {
    let buf = CBuffer::<i32>::with_capacity(3);
    let mut out = String::new();
    evaluate_if(&buf, |_| true, &mut out).unwrap();
    assert_eq!(out, "");
}

#[test]
fn report_restarts_from_the_oldest_on_every_call() {
    let buf = CBuffer::from_iter_bounded(2, [1, 2]);
    let mut first = String::new();
    let mut second = String::new();
    evaluate_if(&buf, |n| *n == 1, &mut first).unwrap();
    evaluate_if(&buf, |n| *n == 1, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn display_of_empty_buffer_is_the_literal_marker() {
    assert_eq!(CBuffer::<i32>::new().to_string(), "Empty cbuffer");
    assert_eq!(CBuffer::<i32>::with_capacity(3).to_string(), "Empty cbuffer");
}

#[test]
fn display_wraps_each_element_with_no_separators() {
    let buf = CBuffer::from_iter_bounded(3, [0, 1, 2]);
    assert_eq!(buf.to_string(), "[0][1][2]");

    let partial = CBuffer::from_iter_bounded(3, [5]);
    assert_eq!(partial.to_string(), "[5]");
}

#[test]
fn display_follows_overwrites() {
    let mut buf = CBuffer::from_iter_bounded(3, [0, 1, 2]);
    buf.insert(3);
    assert_eq!(buf.to_string(), "[1][2][3]");
}

#[test]
fn display_renders_structured_elements() {
    struct Reading {
        channel: u8,
        value: i32,
    }

    impl fmt::Display for Reading {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ch{}={}", self.channel, self.value)
        }
    }

    let buf = CBuffer::from_iter_bounded(
        2,
        [
            Reading {
                channel: 1,
                value: -4,
            },
            Reading {
                channel: 2,
                value: 12,
            },
        ],
    );
    assert_eq!(buf.to_string(), "[ch1=-4][ch2=12]");
}
