pub mod commands;
pub mod element;
pub mod factory;

pub use commands::*;
pub use element::*;
pub use factory::*;
