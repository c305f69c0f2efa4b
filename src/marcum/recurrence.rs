//! Three-term homogeneous recurrences in μ, anchored by quadrature.
//!
//! Both engines shift the order to a nearby value where the integral
//! representation is well conditioned, evaluate two anchors there, and
//! step back to the requested order in the stable direction with the
//! Bessel-ratio continued fraction supplying the recurrence coefficient.

use crate::FloatScalar;

use super::contfrac::fc;
use super::quad::pqtrap;
use super::series::qser;
use super::Eval;

/// Capacity of the ratio buffer in `qrec`; the shift n3 is bounded by the
/// order limit of the recurrence region (μ < 135).
const CMU_CAP: usize = 301;

/// Recurrence for P, stepping the order upward from μ to μ + n3.
pub(crate) fn prec<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let b = one;

    let nu = y - x + b * b + b * (two * (x + y) + b * b).sqrt();
    let n1 = mu.to_i64().unwrap_or(0);
    let n2 = nu.to_i64().unwrap_or(0) + 2;
    let n3 = (n2 - n1).max(0);
    let mur = mu + T::from(n3).unwrap();
    let xi = two * (x * y).sqrt();
    let mut cmu = (y / x).sqrt() * fc(mur, xi);

    let up = pqtrap(mur + one, x, y);
    let low = pqtrap(mur, x, y);
    if up.underflow || low.underflow {
        return Eval::clamped(true);
    }
    let mut p1 = up.p;
    let mut p0 = low.p;
    let mut p = p0;
    for n in 0..n3 {
        p = ((one + cmu) * p0 - p1) / cmu;
        p1 = p0;
        p0 = p;
        cmu = y / (mur - T::from(n).unwrap() - one + x * cmu);
    }
    Eval::exact(p, one - p)
}

/// Recurrence for Q, stepping the order downward from μ to μ − n3; falls
/// back to the Q series or to `prec` when the shifted order would sit too
/// close to the transition line.
pub(crate) fn qrec<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let b = one;

    let nu = y - x + b * (b - (two * (x + y) + b * b).sqrt());
    if nu < T::from(5.0).unwrap() {
        return if x < T::from(200.0).unwrap() {
            qser(mu, x, y)
        } else {
            prec(mu, x, y)
        };
    }

    let n1 = mu.to_i64().unwrap_or(0);
    let n2 = (nu - one).to_i64().unwrap_or(0);
    let n3 = ((n1 - n2).max(0) as usize).min(CMU_CAP - 1);
    let mur = mu - T::from(n3).unwrap();
    let xi = two * (x * y).sqrt();
    let mut cmu = [T::zero(); CMU_CAP];
    cmu[0] = (y / x).sqrt() * fc(mu, xi);
    for n in 1..=n3 {
        cmu[n] = y / (mu - T::from(n).unwrap() + x * cmu[n - 1]);
    }

    let low = pqtrap(mur - one, x, y);
    let high = pqtrap(mur, x, y);
    if low.underflow || high.underflow {
        return Eval::clamped(false);
    }
    let mut q0 = low.q;
    let mut q1 = high.q;
    let mut q = q1;
    for n in 1..=n3 {
        let c = cmu[n3 + 1 - n];
        q = (one + c) * q1 - c * q0;
        q0 = q1;
        q1 = q;
    }
    Eval::exact(one - q, q)
}
