mod producer;

pub use producer::{CropCount, Producer, SoilUseTotals, StateCount};
