// integrity_core/src/lib.rs

// This file defines the public modules of the library.
pub mod coders;
pub mod error;
pub mod models;
pub mod prelude;
pub mod spatial;
pub mod tolerance;
pub mod types;
pub mod verdict;
