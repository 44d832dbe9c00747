// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule assembly and board state for the Crewboard scheduling
//! board.
//!
//! This crate sits between the domain model and the API layer: it
//! turns one job's raw submission into the full list of canonical
//! `ScheduledDate` records, and holds the in-memory board state that
//! mutations reconcile against.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assemble;
mod error;
mod state;
#[cfg(test)]
mod tests;

pub use assemble::{AssembleRequest, RangeConfig, assemble};
pub use error::CoreError;
pub use state::BoardState;
