// integrity_sim/src/lib.rs

// This crate replays recorded entity updates through the integrity core.
pub mod cli;
pub mod error;
pub mod replay;
pub mod scenario;
