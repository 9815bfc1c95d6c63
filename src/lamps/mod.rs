// src/lamps/mod.rs

pub mod lamp_array;
pub mod simulator;

// Re-export main types for convenience
pub use lamp_array::{Lamp, LampArray, LAMP_COUNT};
pub use simulator::{simulate, validate_day_count, validate_lamp_array};
