//! Digit-wise carry and borrow checks.

/// True when adding `a` and `b` carries at any base-10 digit position.
pub fn has_carry(a: u64, b: u64) -> bool {
    let (mut x, mut y) = (a, b);
    let mut carry = 0;
    while x > 0 || y > 0 {
        let sum = x % 10 + y % 10 + carry;
        if sum >= 10 {
            return true;
        }
        carry = sum / 10;
        x /= 10;
        y /= 10;
    }
    false
}

/// True when subtracting `b` from `a` borrows at any digit position.
///
/// Digits are aligned at the ones place and the shorter operand is
/// zero-padded. Each column is compared on its own: a column borrows when
/// the digit of `b` exceeds the digit of `a`.
pub fn has_borrow(a: u64, b: u64) -> bool {
    let (mut x, mut y) = (a, b);
    while x > 0 || y > 0 {
        if x % 10 < y % 10 {
            return true;
        }
        x /= 10;
        y /= 10;
    }
    false
}
