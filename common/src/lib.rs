pub mod messages;
mod snakes;

pub use snakes::*;
