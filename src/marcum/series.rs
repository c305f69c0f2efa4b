//! Series expansions for P and Q in terms of incomplete gamma ratios.
//!
//! Active when x < 30: the Q series when y dominates x + μ, the P series
//! otherwise. Both choose between a forward sum of incomplete-gamma terms
//! and a numerically safer backward/recursive sum depending on whether the
//! leading term is representable.

use crate::special::{dompart, epss, explow, gamma_inc_pair, gamma_inc_upper, lgamma};
use crate::FloatScalar;

use super::{ln_guarded, Eval};

/// Series expansion for Q.
pub(crate) fn qser<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();

    let (_, q) = match gamma_inc_pair(mu, y) {
        Ok(pq) => pq,
        Err(_) => return Eval::clamped(true),
    };
    let lh0 = mu * y.ln() - y - lgamma(mu + one);
    if lh0 > explow::<T>() && x < T::from(100.0).unwrap() {
        // backward: ratios of successive gamma terms
        let mut q = q;
        let mut q0 = q;
        let mut h0 = lh0.exp();
        let xy = x * y;
        let delta = epss::<T>() / T::from(100.0).unwrap();
        let mut n = 0usize;
        while q0 / q > delta && n < 1000 {
            let n1 = T::from(n + 1).unwrap();
            q0 = x * (q0 + h0) / n1;
            h0 = xy * h0 / (n1 * (mu + n1));
            q = q + q0;
            n += 1;
        }
        let q = (-x).exp() * q;
        Eval::exact(one - q, q)
    } else {
        // forward: sum of dominant factors times upper ratios
        let mut s = T::zero();
        let mut k = 0usize;
        let tol = T::from(1e-16).unwrap();
        loop {
            let a = mu + T::from(k).unwrap();
            let q1 = match gamma_inc_upper(a, y) {
                Ok(q1) => q1,
                Err(_) => return Eval::clamped(true),
            };
            let t = dompart(T::from(k).unwrap(), x, false) * q1;
            s = s + t;
            k += 1;
            if s == T::zero() && k > 150 {
                break;
            }
            if s > T::zero() && t / s < tol && k > 10 {
                break;
            }
            if k >= 10_000 {
                break;
            }
        }
        Eval::exact(one - s, s)
    }
}

/// Series expansion for P, summed backward from a starting index.
pub(crate) fn pser<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();
    let xy = x * y;
    let lnx = ln_guarded(x);
    let lny = ln_guarded(y);

    let nnmax = startingpser(mu, x, y);
    let n = nnmax + 1;
    let nt = T::from(n).unwrap();
    let lh0 = -x - y + nt * lnx + (nt + mu) * lny - lgamma(mu + nt + one) - lgamma(nt + one);

    if lh0 < explow::<T>() {
        // leading term underflows: accumulate P(mu+k, y) terms backward,
        // scaled by e^(-x) at the end
        let expo = (-x).exp();
        let mut s = T::zero();
        let mut k = nnmax + 1;
        while k > 0 {
            let a = mu + T::from(k).unwrap();
            let p1 = match gamma_inc_pair(a, y) {
                Ok((p1, _)) => p1,
                Err(_) => return Eval::clamped(true),
            };
            s = s + factor(x, k) * p1;
            k -= 1;
        }
        let p0 = match gamma_inc_pair(mu, y) {
            Ok((p0, _)) => p0,
            Err(_) => return Eval::clamped(true),
        };
        let p = (s + p0) * expo;
        Eval::exact(p, one - p)
    } else {
        let mut h0 = lh0.exp();
        let (p_anchor, _q) = match gamma_inc_pair(mu + nt, y) {
            Ok(pq) => pq,
            Err(_) => return Eval::clamped(true),
        };
        let mut p1 = p_anchor * (-x + nt * lnx - lgamma(nt + one)).exp();
        let mut p = T::zero();
        let mut m = n;
        while m > 0 {
            let mt = T::from(m).unwrap();
            h0 = h0 * mt * (mu + mt) / xy;
            p1 = mt * p1 / x + h0;
            p = p + p1;
            m -= 1;
        }
        Eval::exact(p, one - p)
    }
}

/// x^n / n!, stable for moderate n.
fn factor<T: FloatScalar>(x: T, n: usize) -> T {
    let mut f = T::one();
    for i in 1..=n {
        f = f * (x / T::from(i).unwrap());
    }
    f
}

/// Starting index for the backward summation in `pser`, found by
/// fixed-point iteration on the log balance of the first neglected term.
fn startingpser<T: FloatScalar>(mu: T, x: T, y: T) -> usize {
    let one = T::one();
    let mulnmu = mu * mu.ln();
    let lnx = ln_guarded(x);
    let lny = ln_guarded(y);

    let mut n = if x < T::from(2.0).unwrap() {
        x + T::from(5.0).unwrap()
    } else {
        T::from(1.5).unwrap() * x
    };
    let mut n1 = T::zero();
    let mut a = 0;
    let mut b = 0;
    let mut guard = 0;
    while (n - n1).abs() > one && guard < 100 {
        n1 = n;
        n = ps(mu, mulnmu, lnx, y, lny, n, a, b);
        guard += 1;
    }
    n = n + one;
    if mu + n > y {
        if y > mu {
            a = 1;
        } else {
            b = 1;
        }
        n1 = T::zero();
        guard = 0;
        while (n - n1).abs() > one && guard < 100 {
            n1 = n;
            n = ps(mu, mulnmu, lnx, y, lny, n, a, b);
            guard += 1;
        }
    }
    if n < T::zero() {
        n = T::zero();
    }
    n.to_usize().unwrap_or(0) + 1
}

/// One fixed-point step of the balance equation behind `startingpser`;
/// the (a, b) pair selects which dominant terms the regime keeps.
#[allow(clippy::too_many_arguments)]
fn ps<T: FloatScalar>(mu: T, mulnmu: T, lnx: T, y: T, lny: T, n: T, a: i32, b: i32) -> T {
    let two = T::from(2.0).unwrap();
    let lneps = epss::<T>().ln();
    if a == 0 && b == 0 {
        (n - lneps) / (n.ln() - lnx)
    } else if a == 0 && b == 1 {
        (two * n - lneps + mulnmu - mu * (mu + n).ln()) / (n.ln() - lnx - lny + (mu + n).ln())
    } else {
        // a == 1, b == 0
        (two * n - lneps - y + mu * lny - mu * (mu + n).ln() + mu)
            / (n.ln() - lnx - lny + (mu + n).ln())
    }
}
