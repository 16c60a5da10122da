// src/pricing/mod.rs
pub mod european;
