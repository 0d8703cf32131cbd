//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `castling.rs` - Castling preconditions and rights bookkeeping
//! - `status.rs` - Check, checkmate and stalemate decisions
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod perft;
