pub mod experiment;
pub mod params;
pub mod regime;
pub mod render;
pub mod simulation;
pub mod summary;

mod types;
mod util;
