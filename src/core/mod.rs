// src/core/mod.rs

pub mod error;
pub mod form;
pub mod numeric;

pub use error::InvalidArgument;
