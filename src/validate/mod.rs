pub mod diagnostics;
pub mod rules;

pub use diagnostics::*;
pub use rules::*;
