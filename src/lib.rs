pub mod args;
pub mod model;
pub mod snapshot;
pub mod utils;
