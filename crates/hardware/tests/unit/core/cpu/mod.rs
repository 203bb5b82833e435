//! # CPU Tests
//!
//! The single-step engine and the semantics of every RV32I instruction group.



/// Step engine contract: snapshots, PC advance, and `x0`.
pub mod step;
