// src/core/mod.rs

pub mod clean;
pub mod tokenizer;
