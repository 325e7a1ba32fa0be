// src/handlers/mod.rs
pub mod calculator;
pub mod error;
pub mod history;
