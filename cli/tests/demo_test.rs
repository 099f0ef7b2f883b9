//! Integration tests for the demo commands.

use assert_cmd::Command;
use predicates::prelude::*;

fn cbuffer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cbuffer"))
}

#[test]
fn insert_shows_fill_then_overwrite() {
    cbuffer()
        .arg("insert")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0][1][2]"))
        .stdout(predicate::str::contains("[2][3][4]"));
}

#[test]
fn remove_drains_to_the_empty_marker() {
    cbuffer()
        .arg("remove")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0][0][0]"))
        .stdout(predicate::str::contains("Empty cbuffer"))
        .stdout(predicate::str::contains("[3][1]"));
}

#[test]
fn constructors_cover_every_variant() {
    cbuffer()
        .arg("constructors")
        .assert()
        .success()
        .stdout(predicate::str::contains("filled(3, 0):                [0][0][0]"))
        .stdout(predicate::str::contains("new():                       Empty cbuffer"))
        .stdout(predicate::str::contains("from_iter_bounded(3, 1..=5): [3][4][5]"));
}

#[test]
fn empty_tracks_the_fill_drain_cycle() {
    cbuffer()
        .arg("empty")
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh with_capacity(3): is_empty = true"))
        .stdout(predicate::str::contains("after three inserts:    is_empty = false"))
        .stdout(predicate::str::contains("after three removes:    is_empty = true"));
}

#[test]
fn index_reports_out_of_range_failures() {
    cbuffer()
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("at(2) = 2"))
        .stdout(predicate::str::contains(
            "at(3) failed: index 3 out of range: buffer holds 3 element(s)",
        ))
        .stdout(predicate::str::contains(
            "at(2) failed: index 2 out of range: buffer holds 2 element(s)",
        ));
}

#[test]
fn full_tracks_capacity_occupancy() {
    cbuffer()
        .arg("full")
        .assert()
        .success()
        .stdout(predicate::str::contains("filled(3, 0):       is_full = true"))
        .stdout(predicate::str::contains("after one remove:   is_full = false"))
        .stdout(predicate::str::contains("after one insert:   is_full = true"))
        .stdout(predicate::str::contains("zero capacity new(): is_full = false"));
}

#[test]
fn evaluate_prints_the_indexed_report() {
    cbuffer()
        .arg("evaluate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]: true\n[1]: false\n[2]: true"))
        .stdout(predicate::str::contains("[0]: false\n[1]: true\n[2]: false"));
}

#[test]
fn cursors_walk_the_random_access_surface() {
    cbuffer()
        .arg("cursors")
        .assert()
        .success()
        .stdout(predicate::str::contains("*begin:              0"))
        .stdout(predicate::str::contains("begin[1]:            1"))
        .stdout(predicate::str::contains("begin.distance(end): 3"))
        .stdout(predicate::str::contains("begin < end:         true"))
        .stdout(predicate::str::contains(
            "after negating through a mutable cursor: [0][-1][-2]",
        ));
}

#[test]
fn contacts_store_records_with_overwrite() {
    cbuffer()
        .arg("contacts")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Rossi Luca 5558372][Bianchi Paolo 5558372]"))
        .stdout(predicate::str::contains(
            "[Bianchi Paolo 5558372][Verdi Giovanni 5558372]",
        ))
        .stdout(predicate::str::contains(
            "[Verdi Giovanni 5558372][Ferrari Anna 5550117]",
        ));
}

#[test]
fn all_runs_every_demo() {
    cbuffer()
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== constructors ==="))
        .stdout(predicate::str::contains("=== contacts ==="));
}

#[test]
fn observe_flag_is_accepted_everywhere() {
    cbuffer().args(["insert", "--observe"]).assert().success();
}
