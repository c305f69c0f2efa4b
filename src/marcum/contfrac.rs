//! Continued fraction for the Bessel ratio I_ν(z)/I_{ν−1}(z).

use crate::special::{dwarf, epss};
use crate::FloatScalar;

/// Iteration cap; the fraction converges in a handful of terms for the
/// arguments the recurrence engines produce, the cap only bounds
/// pathological inputs. The last convergent is returned if it is reached.
const MAX_ITER: usize = 10_000;

/// Evaluation of the continued fraction for the ratio I_ν(z)/I_{ν−1}(z)
/// by the Lentz–Thompson algorithm.
pub(crate) fn fc<T: FloatScalar>(pnu: T, z: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let dw = dwarf::<T>();
    let eps = epss::<T>();

    let mut b = two * pnu / z;
    let mut f = dw;
    let mut c0 = f;
    let mut d0 = T::zero();
    let mut delta = T::zero();
    let mut m = 0;
    while (delta - one).abs() > eps && m < MAX_ITER {
        d0 = b + d0;
        if d0.abs() < dw {
            d0 = dw;
        }
        c0 = b + one / c0;
        if c0.abs() < dw {
            c0 = dw;
        }
        d0 = one / d0;
        delta = c0 * d0;
        f = f * delta;
        m += 1;
        b = two * (pnu + T::from(m).unwrap()) / z;
    }
    f
}
