//! Gamma, log-gamma and the Stirling-series helpers.
//!
//! Piecewise evaluation after Gil–Segura–Temme: Chebyshev expansions on the
//! central bands, the Stirling series beyond, reflection below. `gamstar`
//! and `stirling` are shared with the incomplete gamma ratio engine.

use crate::FloatScalar;
use super::{chepolsum, dwarf};

/// Euler–Mascheroni constant.
const EULER_GAMMA: f64 = 0.5772156649015328606065120900824024;

/// ln sqrt(2 pi).
const LN_SQRT_2PI: f64 = 0.9189385332046727417803297364056176;

/// Chebyshev coefficients of the Stirling series on 3 <= x < 12
/// (argument z = 18/x^2 - 1).
const STIRLING_A: [f64; 18] = [
    1.996379051590076518221,
    -0.17971032528832887213e-2,
    0.131292857963846713e-4,
    -0.2340875228178749e-6,
    0.72291210671127e-8,
    -0.3280997607821e-9,
    0.198750709010e-10,
    -0.15092141830e-11,
    0.1375340084e-12,
    -0.145728923e-13,
    0.17532367e-14,
    -0.2351465e-15,
    0.346551e-16,
    -0.55471e-17,
    0.9548e-18,
    -0.1748e-18,
    0.332e-19,
    -0.58e-20,
];

/// Rational coefficients of the Stirling series on 12 <= x < 1000.
const STIRLING_C: [f64; 7] = [
    0.25721014990011306473e-1,
    0.82475966166999631057e-1,
    -0.25328157302663562668e-2,
    0.60992926669463371e-3,
    -0.33543297638406e-3,
    0.250505279903e-3,
    0.30865217988013567769,
];

/// Chebyshev coefficients of g in ln Γ(1+x) = x(1−x)g(x), 0 <= x <= 1
/// (argument t = 2x − 1).
const AUXLOGGAM_A: [f64; 26] = [
    -0.98283078605877425496,
    0.7611416167043584304e-1,
    -0.843232496593277796e-2,
    0.107949372632860815e-2,
    -0.14900748003692965e-3,
    0.2151239988855679e-4,
    -0.319793298608622e-5,
    0.48516930121399e-6,
    -0.7471487821163e-7,
    0.1163829670017e-7,
    -0.182940043712e-8,
    0.28969180607e-9,
    -0.4615701406e-10,
    0.739281023e-11,
    -0.118942800e-11,
    0.19212069e-12,
    -0.3113976e-13,
    0.506284e-14,
    -0.82542e-15,
    0.13491e-15,
    -0.2210e-16,
    0.363e-17,
    -0.60e-18,
    0.98e-19,
    -0.2e-19,
    0.3e-20,
];

/// Chebyshev coefficients of g in 1/Γ(1+x) = 1 + x(x−1)g(x), 0 <= x <= 1
/// (argument t = 2x − 1).
const AUXGAM_D: [f64; 18] = [
    -1.013609258009865776949,
    0.784903531024782283535e-1,
    0.67588668743258315530e-2,
    -0.12790434869623468120e-2,
    0.462939838642739585e-4,
    0.43381681744740352e-5,
    -0.5326872422618006e-6,
    0.172233457410539e-7,
    0.8300542107118e-9,
    -0.10553994239968e-9,
    0.39415842851e-11,
    0.362068537e-13,
    -0.107440229e-13,
    0.5000413e-15,
    -0.62452e-17,
    -0.5185e-18,
    0.347e-19,
    -0.9e-21,
];

/// Log-gamma ln Γ(x) for x > 0.
///
/// Returns +∞ for x ≤ 0.
///
/// # Example
///
/// ```
/// use marcumq::special::lgamma;
///
/// assert!(lgamma(1.0_f64).abs() < 1e-14);
/// assert!((lgamma(4.0_f64) - 6.0_f64.ln()).abs() < 1e-13);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    if x >= three {
        (x - half) * x.ln() - x + T::from(LN_SQRT_2PI).unwrap() + stirling(x)
    } else if x >= two {
        (x - two) * (three - x) * auxloggam(x - two) + (x - two).ln_1p()
    } else if x >= one {
        (x - one) * (two - x) * auxloggam(x - one)
    } else if x > half {
        x * (one - x) * auxloggam(x) - (x - one).ln_1p()
    } else if x > T::zero() {
        x * (one - x) * auxloggam(x) - x.ln()
    } else {
        T::infinity()
    }
}

/// Euler gamma function Γ(x), x real.
///
/// Poles at the non-positive integers return ±∞ with the sign of the
/// surrounding branch.
///
/// # Example
///
/// ```
/// use marcumq::special::gamma;
///
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-14);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();
    let k = nint(x);
    let kt = T::from(k).unwrap();
    let dw = if k == 0 { dwarf::<T>() } else { T::epsilon() };

    if k <= 0 && (kt - x).abs() <= dw {
        // pole; sign alternates with parity (approach from the right)
        if k % 2 != 0 {
            -T::infinity()
        } else {
            T::infinity()
        }
    } else if x < T::from(0.45).unwrap() {
        pi / ((pi * x).sin() * gamma(one - x))
    } else if (kt - x).abs() < dw && x < T::from(21.0).unwrap() {
        // integer: (k-1)!
        let mut gam = one;
        for n in 2..=(k - 1) {
            gam = gam * T::from(n).unwrap();
        }
        gam
    } else if (kt - x - half).abs() < dw && x < T::from(21.0).unwrap() {
        // half-integer: sqrt(pi) * prod (n - 1/2)
        let mut gam = pi.sqrt();
        for n in 1..=(k - 1) {
            gam = gam * (T::from(n).unwrap() - half);
        }
        gam
    } else if x < T::from(3.0).unwrap() {
        // shift into [3, 4) and divide back down
        let k = if kt > x { k - 1 } else { k };
        let k1 = 3 - k;
        let z = T::from(k1).unwrap() + x;
        let mut gam = gamma(z);
        for n in 1..=k1 {
            gam = gam / (z - T::from(n).unwrap());
        }
        gam
    } else {
        let sqrt_2pi = T::from(2.0 * core::f64::consts::PI).unwrap().sqrt();
        sqrt_2pi * (-x + (x - half) * x.ln() + stirling(x)).exp()
    }
}

/// gamstar(x) = Γ(x) / (e^−x x^(x−1/2) √(2π)), i.e. exp(stirling(x)), x > 0.
pub(crate) fn gamstar<T: FloatScalar>(x: T) -> T {
    if x >= T::from(3.0).unwrap() {
        stirling(x).exp()
    } else if x > T::zero() {
        let half = T::from(0.5).unwrap();
        let sqrt_2pi = T::from(2.0 * core::f64::consts::PI).unwrap().sqrt();
        gamma(x) / ((-x + (x - half) * x.ln()).exp() * sqrt_2pi)
    } else {
        T::infinity()
    }
}

/// Stirling series ln Γ(x) − (x−1/2)ln x + x − ln √(2π), x > 0,
/// asymptotically 1/(12x) − 1/(360x³) + ...
pub(crate) fn stirling<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let ln_sqrt_2pi = T::from(LN_SQRT_2PI).unwrap();
    if x < dwarf::<T>() {
        T::max_value()
    } else if x < one {
        lgamma(x + one) - (x + half) * x.ln() - x + ln_sqrt_2pi
    } else if x < T::from(2.0).unwrap() {
        lgamma(x) - (x - half) * x.ln() + x - ln_sqrt_2pi
    } else if x < T::from(3.0).unwrap() {
        lgamma(x - one) - (x - half) * x.ln() + x - ln_sqrt_2pi + (x - one).ln()
    } else if x < T::from(12.0).unwrap() {
        let z = T::from(18.0).unwrap() / (x * x) - one;
        chepolsum(z, &STIRLING_A) / (T::from(12.0).unwrap() * x)
    } else {
        let z = one / (x * x);
        if x < T::from(1000.0).unwrap() {
            let c: [T; 7] = core::array::from_fn(|i| T::from(STIRLING_C[i]).unwrap());
            ((((((c[5] * z) + c[4]) * z + c[3]) * z + c[2]) * z + c[1]) * z + c[0])
                / (c[6] + z)
                / x
        } else {
            let c1680 = T::from(1680.0).unwrap();
            let c1260 = T::from(1260.0).unwrap();
            let c360 = T::from(360.0).unwrap();
            let c12 = T::from(12.0).unwrap();
            (((-z / c1680 + c1260.recip()) * z - c360.recip()) * z + c12.recip()) / x
        }
    }
}

/// Function g in ln Γ(1+x) = x(1−x)g(x), 0 <= x <= 1; continued outside
/// the band by recursion.
fn auxloggam<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let tiny = T::min_positive_value() * T::from(10.0).unwrap();
    if x < -one {
        T::infinity()
    } else if x.abs() <= tiny {
        -T::from(EULER_GAMMA).unwrap()
    } else if (x - one).abs() <= T::epsilon() {
        T::from(EULER_GAMMA).unwrap() - one
    } else if x < T::zero() {
        -(x * (one + x) * auxloggam(x + one) + x.ln_1p()) / (x * (one - x))
    } else if x < one {
        let t = T::from(2.0).unwrap() * x - one;
        chepolsum(t, &AUXLOGGAM_A)
    } else if x < T::from(1.5).unwrap() {
        ((x - one).ln_1p() + (x - one) * (T::from(2.0).unwrap() - x) * auxloggam(x - one))
            / (x * (one - x))
    } else {
        (x.ln() + (x - one) * (T::from(2.0).unwrap() - x) * auxloggam(x - one))
            / (x * (one - x))
    }
}

/// Function g in 1/Γ(1+x) = 1 + x(x−1)g(x), −1 <= x <= 1.
pub(crate) fn auxgam<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    if x < T::zero() {
        let x1 = one + x;
        -(one + x1 * x1 * auxgam(x1)) / (one - x)
    } else {
        let t = T::from(2.0).unwrap() * x - one;
        chepolsum(t, &AUXGAM_D)
    }
}

/// Nearest integer.
fn nint<T: FloatScalar>(x: T) -> i64 {
    let c = x.ceil();
    let t = x.floor();
    let r = if (x - c).abs() > (x - t).abs() { t } else { c };
    r.to_i64().unwrap_or(0)
}
