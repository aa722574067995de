pub mod add;
pub mod errors;

// -- Re-export the adder surface for more concise usage

pub use add::{add, checked_add, saturating_add, wrapping_add};
pub use errors::AddError;
