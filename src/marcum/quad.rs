//! Trapezoidal-rule integral representation, the fallback when no series,
//! recurrence or asymptotic expansion applies.

use crate::special::{chepolsum, explow};
use crate::FloatScalar;

use super::asymp::zetaxy;
use super::Eval;

/// Chebyshev coefficients of (x − sin x)/(x³/6) on |x| <= 1
/// (argument 2x² − 1).
const XMINSINX_FK: [f64; 9] = [
    1.95088260487819821294e-0,
    -0.244124470324439564863e-1,
    0.14574198156365500e-3,
    -0.5073893903402518e-6,
    0.11556455068443e-8,
    -0.185522118416e-11,
    0.22117315e-14,
    -0.2035e-17,
    0.15e-20,
];

/// (x − sin x)/(x³/6), cancellation-free near zero.
fn xminsinx<T: FloatScalar>(x: T) -> T {
    if x.abs() > T::one() {
        let x3 = x * x * x;
        T::from(6.0).unwrap() * (x - x.sin()) / x3
    } else {
        let t = T::from(2.0).unwrap() * x * x - T::one();
        chepolsum(t, &XMINSINX_FK)
    }
}

/// Integrand of the Marcum integral representation at angle `theta`.
///
/// `b0` is the current effective upper limit: once the exponential factor
/// falls below the series floor at some angle, everything beyond it is
/// zero and `b0` is pulled down so the trapezoid sums skip it.
fn integrand<T: FloatScalar>(theta: T, b0: &mut T, xis2: T, mu: T, wxis: T, ys: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();
    let six = T::from(6.0).unwrap();
    let lneps = T::from(1.0e-16).unwrap().ln();

    if theta > *b0 {
        return T::zero();
    }
    if theta.abs() < T::from(1.0e-10).unwrap() {
        let rtheta = (one + wxis) / (two * ys);
        let theta2 = theta * theta;
        let psitheta = -wxis * theta2 * half;
        return rtheta / (one - rtheta) * (mu * psitheta).exp();
    }

    let theta2 = theta * theta;
    let sintheta = theta.sin();
    let costheta = theta.cos();
    let ts = theta / sintheta;
    let s2 = sintheta * sintheta;
    let wx = (ts * ts + xis2).sqrt();
    let xminsinxtheta = xminsinx(theta);
    let p = xminsinxtheta * theta2 * ts / six;
    let term1 = (p * (ts + one) - theta2 - s2 * xis2) / (costheta * wx + wxis);
    let p = p * (one + (ts + one) / (wx + wxis)) / (one + wxis);
    let term2 = -p.ln_1p();
    let psitheta = term1 + term2;
    let mut f = mu * psitheta;
    if f > lneps {
        f = f.exp();
    } else {
        f = T::zero();
        *b0 = theta.min(*b0);
    }
    let rtheta = (ts + wx) / (two * ys);
    let sinth = (theta / two).sin();
    let p = (two * theta * sinth * sinth - xminsinxtheta * theta2 * theta / six) / (two * ys * s2);
    let dr = p * (one + ts / wx);
    let ft =
        (dr * sintheta + (costheta - rtheta) * rtheta) / (rtheta * (rtheta - two * costheta) + one);
    f * ft
}

/// Trapezoid sum over [a, b] with step h; d = 0 requests the endpoint
/// half-weight form, d = h/2 the midpoint refinement pass.
#[allow(clippy::too_many_arguments)]
fn trapsum<T: FloatScalar>(a: T, b: T, h: T, d: T, xis2: T, mu: T, wxis: T, ys: T) -> T {
    let two = T::from(2.0).unwrap();
    let mut b0 = b;
    let mut s = T::zero();
    let (mut aa, bb) = if d == T::zero() {
        s = integrand(a, &mut b0, xis2, mu, wxis, ys) / two;
        (a + h, b - h / two)
    } else {
        (a + d, b)
    };
    while aa < bb && aa < b0 {
        s = s + integrand(aa, &mut b0, xis2, mu, wxis, ys);
        aa = aa + h;
    }
    s * h
}

/// Adaptive trapezoid: start with 8 subintervals and halve the step until
/// the relative change is below `e`, between 2 and 10 refinements.
fn trap<T: FloatScalar>(a: T, b: T, e: T, xis2: T, mu: T, wxis: T, ys: T) -> T {
    let two = T::from(2.0).unwrap();
    let mut h = (b - a) / T::from(8.0).unwrap();
    let mut p = trapsum(a, b, h, T::zero(), xis2, mu, wxis, ys);
    let mut nc = 0;
    let mut v = T::one();
    while (v > e && nc < 10) || nc <= 2 {
        nc += 1;
        let q = trapsum(a, b, h, h / two, xis2, mu, wxis, ys);
        v = if q.abs() > T::zero() {
            (p / q - T::one()).abs()
        } else {
            T::zero()
        };
        h = h / two;
        p = (p + q) / two;
    }
    p
}

/// P and Q from the integral representation, approximated by the
/// trapezoidal rule.
pub(crate) fn pqtrap<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    let xs = x / mu;
    let ys = y / mu;
    let xis2 = T::from(4.0).unwrap() * xs * ys;
    let wxis = (one + xis2).sqrt();
    let epstrap = T::from(1.0e-13).unwrap();
    let pq = trap(T::zero(), T::from(3.0).unwrap(), epstrap, xis2, mu, wxis, ys);
    let zeta = zetaxy(xs, ys);
    let lexp = -mu * half * zeta * zeta;
    if lexp < explow::<T>() {
        // exponential factor below representable range; the limit side is
        // decided by which of P, Q vanishes
        Eval::clamped(!(y > x + mu))
    } else {
        let pq = pq * lexp.exp() / pi;
        if zeta < T::zero() {
            Eval::exact(one - pq, pq)
        } else {
            Eval::exact(-pq, one + pq)
        }
    }
}
