// src/core.rs
pub mod classifier;
pub mod duplicates;
pub mod ignore;
pub mod tree;
