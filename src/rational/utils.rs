use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Signed;

/// gcd(x, 0) = |x|, gcd(0, y) = |y|, result never negative
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

pub(crate) fn sign_of(value: &BigInt) -> i8 {
    match value.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

// divide out the gcd, then move the sign onto the numerator
// caller guarantees deno != 0
pub(crate) fn reduce_pair(nume: &BigInt, deno: &BigInt) -> (BigInt, BigInt) {
    let gcd = gcd(nume, deno);
    let (nume, deno) = (nume / &gcd, deno / &gcd);

    if deno.is_negative() { (-nume, -deno) } else { (nume, deno) }
}
