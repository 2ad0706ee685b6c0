pub mod moves;

pub use moves::{MovesReport, MovesService, StatFile, render};
