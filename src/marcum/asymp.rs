//! Asymptotic expansions: large argument product ξ and large order μ.

use crate::special::{epss, erfc, erfc_scaled, explow};
use crate::FloatScalar;

use super::fjk::{fjk_matrix, FJK_DIM};
use super::Eval;

/// ck polynomial coefficients of the ζ(x, y) series near the transition
/// line y = x + 1; ck\[k\] is a polynomial in x of degree k, scaled.
fn zeta_ck<T: FloatScalar>(x: T) -> [T; 11] {
    let c = |v: f64| T::from(v).unwrap();
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    let x5 = x4 * x;
    let x6 = x5 * x;
    let x7 = x6 * x;
    let x8 = x7 * x;
    let x9 = x8 * x;
    let x10 = x9 * x;
    [
        T::one(),
        -c(1.0 / 3.0) * (c(3.0) * x + T::one()),
        c(1.0 / 36.0) * (c(72.0) * x2 + c(42.0) * x + c(7.0)),
        -c(1.0 / 540.0) * (c(2700.0) * x3 + c(2142.0) * x2 + c(657.0) * x + c(73.0)),
        c(1.0 / 12960.0)
            * (c(1331.0)
                + c(15972.0) * x
                + c(76356.0) * x2
                + c(177552.0) * x3
                + c(181440.0) * x4),
        -c(1.0 / 272160.0)
            * (c(22409.0)
                + c(336135.0) * x
                + c(2115000.0) * x2
                + c(7097868.0) * x3
                + c(13105152.0) * x4
                + c(11430720.0) * x5),
        c(1.0 / 5443200.0)
            * (c(372571.0)
                + c(6706278.0) * x
                + c(52305684.0) * x2
                + c(228784392.0) * x3
                + c(602453376.0) * x4
                + c(935038080.0) * x5
                + c(718502400.0) * x6),
        -c(1.0 / 16329600.0)
            * (c(953677.0)
                + c(20027217.0) * x
                + c(186346566.0) * x2
                + c(1003641768.0) * x3
                + c(3418065864.0) * x4
                + c(7496168976.0) * x5
                + c(10129665600.0) * x6
                + c(7005398400.0) * x7),
        c(1.0 / 783820800.0)
            * (c(39833047.0)
                + c(955993128.0) * x
                + c(10332818424.0) * x2
                + c(66071604672.0) * x3
                + c(275568952176.0) * x4
                + c(776715910272.0) * x5
                + c(1472016602880.0) * x6
                + c(1773434373120.0) * x7
                + c(1120863744000.0) * x8),
        -c(1.0 / 387991296000.0)
            * (c(17422499659.0)
                + c(470407490793.0) * x
                + c(5791365522720.0) * x2
                + c(42859969263000.0) * x3
                + c(211370902874640.0) * x4
                + c(726288467241168.0) * x5
                + c(1759764571151616.0) * x6
                + c(2954947944510720.0) * x7
                + c(3228423729868800.0) * x8
                + c(1886413681152000.0) * x9),
        c(1.0 / 6518253772800.0)
            * (c(261834237251.0)
                + c(7855027117530.0) * x
                + c(108506889674064.0) * x2
                + c(912062714644368.0) * x3
                + c(5189556987668592.0) * x4
                + c(21011917557260448.0) * x5
                + c(61823384007654528.0) * x6
                + c(132131617757148672.0) * x7
                + c(200149640441008128.0) * x8
                + c(200855460151664640.0) * x9
                + c(109480590367948800.0) * x10),
    ]
}

/// Phase function ζ(x, y) of the uniform large-μ expansion, for arguments
/// already scaled by μ. Negative when y exceeds the transition line
/// y = x + 1. A direct closed form holds away from the line; near it the
/// cancellation is removed with a series in z/(2x+1)².
pub(crate) fn zetaxy<T: FloatScalar>(x: T, y: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let z = y - x - one;
    let x2p1 = two * x + one;
    if z.abs() < T::from(0.05).unwrap() {
        let ck = zeta_ck(x);
        let z2 = z / (x2p1 * x2p1);
        let mut s = one;
        let mut t = one;
        let mut k = 1;
        while t.abs() > T::from(1e-15).unwrap() && k < 11 {
            t = ck[k] * z2.powi(k as i32);
            s = s + t;
            k += 1;
        }
        -z / x2p1.sqrt() * s
    } else {
        let w = (one + four * x * y).sqrt();
        let res = (two * (x + y - w - (two * y / (one + w)).ln())).sqrt();
        if x + one < y {
            -res
        } else {
            res
        }
    }
}

/// Incomplete gamma Γ(1/2 − n, x), x ≥ 0, n = 0, 1, 2, ... Used to seed
/// the φₙ recurrence of the large-ξ expansion.
fn ignega<T: FloatScalar>(n: usize, x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let a = half - T::from(n).unwrap();
    let delta = epss::<T>() / T::from(100.0).unwrap();
    if x > T::from(1.5).unwrap() {
        // continued fraction, forward recursion of the even part
        let mut p = T::zero();
        let mut q = (x - one - a) * (x + one - a);
        let mut r = T::from(4.0).unwrap() * (x + one - a);
        let mut s = one - a;
        let mut ro = T::zero();
        let mut t = one;
        let mut g = one;
        let mut k = 0;
        while t / g > delta && k < 1000 {
            p = p + s;
            q = q + r;
            r = r + T::from(8.0).unwrap();
            s = s + T::from(2.0).unwrap();
            let tau = p * (one + ro);
            ro = tau / (q - tau);
            t = ro * t;
            g = g + t;
            k += 1;
        }
        g * (a * x.ln()).exp() / (x + one - a)
    } else {
        let mut t = one;
        let mut s = one / a;
        let mut k = 1;
        while (t / s).abs() > delta && k < 1000 {
            let kt = T::from(k).unwrap();
            t = -x * t / kt;
            s = s + t / (kt + a);
            k += 1;
        }
        let mut g = T::from(core::f64::consts::PI).unwrap().sqrt();
        for k in 1..=n {
            g = g / (half - T::from(k).unwrap());
        }
        x.exp() * (g - (a * x.ln()).exp() * s)
    }
}

/// Asymptotic expansion for large ξ = 2√(xy).
pub(crate) fn pqasyxy<T: FloatScalar>(mu: T, x: T, y: T) -> Eval<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();

    let s_plus = y >= x;
    let delta = epss::<T>() / T::from(100.0).unwrap();
    let xi = two * (x * y).sqrt();
    let sqxi = xi.sqrt();
    let rho = (y / x).sqrt();
    let sigmaxi = (y - x) * (y - x) / (x + y + xi);
    let mulrho = mu * rho.ln();
    if mulrho < explow::<T>() || mulrho > (T::max_value() / T::from(1000.0).unwrap()).ln() {
        // the dominant factor rho^mu over/underflows; the limit values are
        // certain to more digits than we can represent
        return Eval::clamped(!s_plus);
    }
    if sigmaxi > -explow::<T>() {
        // e^(-sigmaxi) underflows and so does the member computed here
        return Eval::clamped(!s_plus);
    }

    let rhomu = mulrho.exp();
    let er = erfc_scaled(sigmaxi.sqrt());
    let psi0 = half * rhomu * er / rho.sqrt();
    let nu = two * mu - one;
    let rhom = nu * (rho - one);
    let rhop = two * (rho + one);
    let mu2 = T::from(4.0).unwrap() * mu * mu;
    let eight_pi = T::from(8.0 * core::f64::consts::PI).unwrap();
    let sign = if s_plus { one } else { -one };
    let mut c = sign * rhomu / eight_pi.sqrt();

    const N0: usize = 100;
    let mut bn = [T::zero(); N0 + 1];
    let mut an = sqxi;
    bn[0] = one;
    let mut n = 0;
    while bn[n].abs() > delta && n < N0 {
        n += 1;
        let nt = T::from(n).unwrap();
        let tnm1 = two * nt - one;
        an = (mu2 - tnm1 * tnm1) * an / (T::from(8.0).unwrap() * nt * xi);
        bn[n] = an * (rhom - nt * rhop) / (rho * (nu + two * nt));
    }
    let n0 = n;
    let mut nrec = sigmaxi.to_usize().unwrap_or(0) + 1;
    if nrec > n0 {
        nrec = n0;
    }

    // phi_n seeded at nrec, forward recurrence above (stable direction),
    // backward below; at y = x the seed degenerates to its sigma -> 0 limit
    let mut phin = [T::zero(); N0 + 1];
    phin[nrec] = if sigmaxi > T::zero() {
        ((T::from(nrec).unwrap() - half) * sigmaxi.ln()).exp() * ignega(nrec, sigmaxi)
    } else {
        (T::from(nrec).unwrap() - half).recip()
    };
    for n in nrec + 1..=n0 {
        phin[n] = (one - sigmaxi * phin[n - 1]) / (T::from(n).unwrap() - half);
    }
    for n in (1..nrec).rev() {
        phin[n] = (one - (T::from(n).unwrap() + half) * phin[n + 1]) / sigmaxi;
    }

    let mut pq = psi0;
    for n in 1..=n0 {
        c = -c;
        pq = pq + c * bn[n] * phin[n];
    }
    pq = pq * (-sigmaxi).exp();
    if s_plus {
        Eval::exact(one - pq, pq)
    } else {
        Eval::exact(pq, one - pq)
    }
}

/// Uniform asymptotic expansion for large μ (Temme form), arguments scaled
/// by μ − 1 and the coefficient matrix read from the f_{j,k} table.
pub(crate) fn pqasymu<T: FloatScalar>(mu0: T, x0: T, y0: T) -> Eval<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();

    let mu = mu0 - one;
    let x = x0 / mu;
    let y = y0 / mu;
    let zeta0 = zetaxy(x, y);
    // a = +1 selects the Q limit (y beyond the transition line)
    let a: i32 = if zeta0 < T::zero() { 1 } else { -1 };
    let at = T::from(a).unwrap();
    let u = one / (two * x + one).sqrt();
    let fjk = fjk_matrix(u);
    let zeta = at * zeta0;
    let r = zeta * (mu / two).sqrt();

    let mut psik = [T::zero(); FJK_DIM + 1];
    psik[1] = (pi / (two * mu)).sqrt() * erfc(-r);
    let mut s = psik[1];
    let lexpor = -mu * half * zeta * zeta;
    if lexpor < explow::<T>() || lexpor > (T::max_value() / T::from(1000.0).unwrap()).ln() {
        // the directly computed member underflows; a = +1 means that
        // member is Q
        return Eval::clamped(a == -1);
    }

    let r = lexpor.exp();
    let mut muk = [T::zero(); FJK_DIM];
    muk[0] = one;
    let mut bk = s;
    let mut zetaj = one;
    let mut k = 1usize;
    while (bk / s).abs() > T::from(1e-30).unwrap() && k <= 16 {
        muk[k] = mu * muk[k - 1];
        psik[k + 1] = (T::from(k - 1).unwrap() * psik[k - 1] + r * zetaj) / mu;
        bk = T::zero();
        let mut b: i32 = 1;
        zetaj = -zeta * zetaj;
        for j in 0..=k {
            let t: i32 = if a == -1 && b == -1 { -1 } else { 1 };
            b = -b;
            bk = bk + T::from(t).unwrap() * fjk[j][k - j] * psik[j + 1] / muk[k - j];
        }
        s = s + bk;
        k += 1;
    }
    let r = (mu / (two * pi)).sqrt() * s;
    if a == 1 {
        Eval::exact(one - r, r)
    } else {
        Eval::exact(r, one - r)
    }
}
