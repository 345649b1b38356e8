use subtle::{Choice, ConstantTimeEq};

/// Compare two sequences without leaking where they first differ.
///
/// Every index in `0..min(a.len(), b.len())` is compared with
/// [`ConstantTimeEq::ct_eq`] and folded into a [`Choice`]; the loop never
/// exits early. The length check runs only after the scan, so the running
/// time depends on the lengths alone. Lengths are not treated as secret.
pub fn constant_time_eq<T: ConstantTimeEq>(a: &[T], b: &[T]) -> bool {
    let mut equal = Choice::from(1u8);
    for (x, y) in a.iter().zip(b.iter()) {
        equal &= x.ct_eq(y);
    }

    if a.len() != b.len() {
        return false;
    }

    equal.into()
}
