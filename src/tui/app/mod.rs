mod menu;
mod state;

pub use state::*;
