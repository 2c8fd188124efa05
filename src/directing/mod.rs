//! The Game Loop

mod director;

pub use director::Director;
