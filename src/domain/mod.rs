pub mod ai;
pub mod entity;
pub mod placement;
pub mod rng;
pub mod tile;
