pub mod config;
pub mod grid;
pub mod normalize;
pub mod policy;
pub mod summary;
pub mod time_slots;
mod util;
