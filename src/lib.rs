pub mod adder;

pub use adder::AddError;
