// integrity_core/src/models/mod.rs

pub mod dead_reckoning;
