// src/services/mod.rs
pub mod calculations;
pub mod formatting;
pub mod history;
pub mod store;
