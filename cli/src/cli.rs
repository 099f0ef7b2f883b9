//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// cbuffer - demos for the fixed-capacity overwrite-on-full buffer
#[derive(Parser, Debug)]
#[command(name = "cbuffer", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Attach the tracing observer to every demo buffer
    /// (visible with RUST_LOG=trace)
    #[arg(long, global = true)]
    pub observe: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Walk through every construction variant
    Constructors,
    /// Insert until the buffer starts overwriting its oldest element
    Insert,
    /// Remove oldest-first down to empty and refill
    Remove,
    /// Track is_empty across a fill/drain cycle
    Empty,
    /// Checked indexed access, including out-of-range failures
    Index,
    /// Track is_full across removals and inserts
    Full,
    /// Report a predicate against every element
    Evaluate,
    /// Exercise the random-access cursor surface
    Cursors,
    /// Bounded storage of a contact-book record type
    Contacts,
    /// Run every demo in sequence
    All,
}
