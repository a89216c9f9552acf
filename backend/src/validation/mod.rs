pub mod roster;
pub mod types;

pub use roster::validate;
pub use types::{Bound, Verdict, Violation};
