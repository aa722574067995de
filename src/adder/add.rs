use crate::adder::errors::AddError;

/// Sum of two operands. Overflow wraps around via two's complement.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Sum of two operands, failing on overflow instead of wrapping.
pub fn checked_add(a: i64, b: i64) -> Result<i64, AddError> {
    a.checked_add(b).ok_or(AddError::Overflow { a, b })
}

/// Same policy as `add`, with the wraparound named at the call site.
pub fn wrapping_add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Sum of two operands, clamping to `i64::MIN` or `i64::MAX` on overflow.
pub fn saturating_add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

// -- Unit tests --
