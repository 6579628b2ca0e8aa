// ============================================================================
// Digit Magnitudes
// Unsigned base-10 big integers stored most-significant digit first
// ============================================================================
//
// Every function here works on magnitudes only. Signs and scales are handled
// by DecimalValue. Results never carry leading zeros; zero is `[0]`.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// Inline capacity covers the literals exchanges actually send.
pub(crate) type Digits = SmallVec<[u8; 32]>;

pub(crate) fn zero() -> Digits {
    smallvec![0]
}

#[inline]
pub(crate) fn is_zero(d: &[u8]) -> bool {
    d.iter().all(|&x| x == 0)
}

/// Drops leading zeros, keeping at least one digit.
pub(crate) fn trim_leading(d: &mut Digits) {
    let first = d
        .iter()
        .position(|&x| x != 0)
        .unwrap_or(d.len().saturating_sub(1));
    if first > 0 {
        d.drain(..first);
    }
    if d.is_empty() {
        d.push(0);
    }
}

/// Digits of an unsigned integer.
pub(crate) fn from_u128(mut n: u128) -> Digits {
    if n == 0 {
        return zero();
    }
    let mut out = Digits::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

/// Folds digits into a u128, `None` if the magnitude does not fit.
pub(crate) fn to_u128(d: &[u8]) -> Option<u128> {
    d.iter().try_fold(0u128, |acc, &x| {
        acc.checked_mul(10)?.checked_add(u128::from(x))
    })
}

fn significant(d: &[u8]) -> &[u8] {
    let first = d.iter().position(|&x| x != 0).unwrap_or(d.len());
    &d[first..]
}

/// Compare two magnitudes, ignoring any leading zeros.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Multiply by 10^n.
pub(crate) fn shift_left(d: &[u8], n: usize) -> Digits {
    let mut out = Digits::from_slice(d);
    trim_leading(&mut out);
    if n > 0 && !is_zero(&out) {
        out.extend(std::iter::repeat(0).take(n));
    }
    out
}

pub(crate) fn add(a: &[u8], b: &[u8]) -> Digits {
    let mut out = Digits::with_capacity(a.len().max(b.len()) + 1);
    let mut ia = a.iter().rev();
    let mut ib = b.iter().rev();
    let mut carry = 0u8;

    loop {
        let (x, y) = match (ia.next(), ib.next()) {
            (None, None) => break,
            (x, y) => (x.copied().unwrap_or(0), y.copied().unwrap_or(0)),
        };
        let sum = x + y + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }

    out.reverse();
    trim_leading(&mut out);
    out
}

/// Schoolbook subtraction. Requires `a >= b`.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Digits {
    debug_assert!(cmp(a, b) != Ordering::Less);

    let mut out = Digits::with_capacity(a.len());
    let mut ib = b.iter().rev();
    let mut borrow = 0i8;

    for &x in a.iter().rev() {
        let y = ib.next().copied().unwrap_or(0) as i8;
        let mut diff = x as i8 - y - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }

    out.reverse();
    trim_leading(&mut out);
    out
}

pub(crate) fn mul(a: &[u8], b: &[u8]) -> Digits {
    if is_zero(a) || is_zero(b) {
        return zero();
    }

    // Column sums, least significant first. 81 * len stays well inside u32.
    let mut columns = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().rev().enumerate() {
        for (j, &y) in b.iter().rev().enumerate() {
            columns[i + j] += u32::from(x) * u32::from(y);
        }
    }

    let mut out = Digits::with_capacity(columns.len());
    let mut carry = 0u32;
    for column in columns {
        let total = column + carry;
        out.push((total % 10) as u8);
        carry = total / 10;
    }
    while carry > 0 {
        out.push((carry % 10) as u8);
        carry /= 10;
    }

    out.reverse();
    trim_leading(&mut out);
    out
}

/// Long division. Returns `(quotient, remainder)`; `b` must be non-zero.
pub(crate) fn div_rem(a: &[u8], b: &[u8]) -> (Digits, Digits) {
    debug_assert!(!is_zero(b));

    let mut quotient = Digits::with_capacity(a.len());
    let mut remainder = zero();

    for &digit in a {
        remainder.push(digit);
        trim_leading(&mut remainder);

        let mut q = 0u8;
        while cmp(&remainder, b) != Ordering::Less {
            remainder = sub(&remainder, b);
            q += 1;
        }
        quotient.push(q);
    }

    trim_leading(&mut quotient);
    trim_leading(&mut remainder);
    (quotient, remainder)
}
