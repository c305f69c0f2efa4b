//! Generalized Marcum Q-function pair P_μ(x,y) and Q_μ(x,y).
//!
//! The computation follows the Gil–Segura–Temme method (ACM TOMS 939):
//! depending on the values of μ, x and y the pair is obtained from series
//! expansions in incomplete gamma function ratios, asymptotic expansions
//! for large argument product or for large order, three-term homogeneous
//! recurrence relations, or a trapezoidal-rule integral representation.
//! Whichever member of the pair is computed directly, the other is taken
//! as its complement, so `p + q == 1` holds to working accuracy whenever
//! no underflow was reported.
//!
//! Arguments use the Gil–Segura–Temme convention: the relation with the
//! Marcum functions of Matlab/Mathematica is
//! `Q_mu(x, y) = QM_mu(sqrt(2x), sqrt(2y))`, and similarly for P.
//!
//! # Example
//!
//! ```
//! use marcumq::{marcum, marcum_q};
//!
//! let r = marcum(5.0_f64, 2.0, 7.0).unwrap();
//! assert!((r.p + r.q - 1.0).abs() < 1e-12);
//!
//! // Q is decreasing in y
//! let q1 = marcum_q(5.0_f64, 2.0, 7.0).unwrap();
//! let q2 = marcum_q(5.0_f64, 2.0, 8.0).unwrap();
//! assert!(q2 < q1);
//! ```

use core::fmt;

use crate::FloatScalar;

mod asymp;
mod contfrac;
mod fjk;
mod quad;
mod recurrence;
mod series;

#[cfg(test)]
mod tests;

/// Order threshold above which the large-μ uniform asymptotic expansion
/// takes over from the recurrence engines.
const MU_LIM: f64 = 135.0;

/// A member falling below this after evaluation is clamped to exactly 0
/// (its complement to 1) and the result is reported as underflow.
const UNDERFLOW_CLAMP: f64 = 1e-290;

/// Errors from Marcum function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarcumError {
    /// An argument lies outside the admissible ranges
    /// 0 ≤ x ≤ 10000, 0 ≤ y ≤ 10000, 1 ≤ μ ≤ 10000 (x and y bounded via
    /// their half-squared internal scaling).
    OutOfRange,
}

impl fmt::Display for MarcumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "argument outside admissible range"),
        }
    }
}

/// Result of a Marcum function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarcumResult<T> {
    /// Lower function P_μ(x,y).
    pub p: T,
    /// Upper function Q_μ(x,y) = 1 − P_μ(x,y).
    pub q: T,
    /// True when one member underflowed and the pair was clamped to the
    /// exact limits {0, 1}. `p + q == 1` still holds, but the magnitude of
    /// the clamped member is not represented.
    pub underflow: bool,
}

/// Outcome of a single evaluation strategy, before final clamping.
pub(crate) struct Eval<T> {
    pub p: T,
    pub q: T,
    pub underflow: bool,
}

impl<T: FloatScalar> Eval<T> {
    /// Exact pair (p, q) with no underflow.
    pub fn exact(p: T, q: T) -> Self {
        Eval {
            p,
            q,
            underflow: false,
        }
    }

    /// Forced limit pair for an underflowed evaluation: q = 1 when
    /// `q_limit`, p = 1 otherwise.
    pub fn clamped(q_limit: bool) -> Self {
        let (p, q) = if q_limit {
            (T::zero(), T::one())
        } else {
            (T::one(), T::zero())
        };
        Eval {
            p,
            q,
            underflow: true,
        }
    }
}

/// Evaluation strategy selected for a parameter point, in internal
/// half-squared coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Series for Q in incomplete gamma ratios.
    QSeries,
    /// Series for P in incomplete gamma ratios.
    PSeries,
    /// Asymptotic expansion for large ξ = 2√(xy).
    AsympXi,
    /// Uniform asymptotic expansion for large μ.
    AsympMu,
    /// Three-term recurrence towards Q.
    QRecurrence,
    /// Three-term recurrence towards P.
    PRecurrence,
    /// Trapezoidal integral representation.
    Quadrature,
}

/// Select the evaluation strategy for internal coordinates
/// (μ, x = x₀²/2, y = y₀²/2).
pub(crate) fn resolve<T: FloatScalar>(mu: T, x: T, y: T) -> Strategy {
    let two = T::from(2.0).unwrap();
    let thirty = T::from(30.0).unwrap();
    let mu_lim = T::from(MU_LIM).unwrap();
    let w = (T::from(4.0).unwrap() * x + two * mu).sqrt();
    let xi = two * (x * y).sqrt();
    let y0 = x + mu - w;
    let y1 = x + mu + w;
    if y > x + mu && x < thirty {
        Strategy::QSeries
    } else if y <= x + mu && x < thirty {
        Strategy::PSeries
    } else if mu * mu < two * xi && xi > thirty {
        Strategy::AsympXi
    } else if mu >= mu_lim && y0 <= y && y <= y1 {
        Strategy::AsympMu
    } else if y <= y1 && y > x + mu && mu < mu_lim {
        Strategy::QRecurrence
    } else if y >= y0 && y <= x + mu && mu < mu_lim {
        Strategy::PRecurrence
    } else {
        Strategy::Quadrature
    }
}

/// Compute the Marcum function pair (P_μ(x,y), Q_μ(x,y)).
///
/// Admissible ranges (with xx = x²/2 and yy = y²/2 the internal scaling):
/// `0 <= xx <= 10000`, `0 <= yy <= 10000`, `1 <= mu <= 10000`. The aimed
/// relative accuracy within them is close to 1e-11 at f64.
///
/// A member smaller than about 1e-290 is clamped to exactly 0 (with the
/// complement set to 1) and reported through
/// [`underflow`](MarcumResult::underflow) rather than as an error.
///
/// # Errors
///
/// [`MarcumError::OutOfRange`] when any argument leaves the admissible box.
pub fn marcum<T: FloatScalar>(mu: T, x: T, y: T) -> Result<MarcumResult<T>, MarcumError> {
    let zero = T::zero();
    let one = T::one();
    let limit = T::from(10000.0).unwrap();
    let two = T::from(2.0).unwrap();

    let xx = x * x / two;
    let yy = y * y / two;
    if xx > limit || yy > limit || mu > limit || x < zero || y < zero || mu < one {
        return Err(MarcumError::OutOfRange);
    }

    let eval = match resolve(mu, xx, yy) {
        Strategy::QSeries => series::qser(mu, xx, yy),
        Strategy::PSeries => series::pser(mu, xx, yy),
        Strategy::AsympXi => asymp::pqasyxy(mu, xx, yy),
        Strategy::AsympMu => asymp::pqasymu(mu, xx, yy),
        Strategy::QRecurrence => recurrence::qrec(mu, xx, yy),
        Strategy::PRecurrence => recurrence::prec(mu, xx, yy),
        Strategy::Quadrature => quad::pqtrap(mu, xx, yy),
    };

    let mut p = eval.p;
    let mut q = eval.q;
    let mut underflow = eval.underflow;
    if !underflow {
        let clamp = T::from(UNDERFLOW_CLAMP).unwrap();
        if p < clamp {
            p = zero;
            q = one;
            underflow = true;
        }
        if q < clamp {
            q = zero;
            p = one;
            underflow = true;
        }
    }
    Ok(MarcumResult { p, q, underflow })
}

/// Lower Marcum function P_μ(x,y).
///
/// Convenience wrapper over [`marcum`](marcum()).
pub fn marcum_p<T: FloatScalar>(mu: T, x: T, y: T) -> Result<T, MarcumError> {
    Ok(marcum(mu, x, y)?.p)
}

/// Upper Marcum function Q_μ(x,y).
///
/// Convenience wrapper over [`marcum`](marcum()).
pub fn marcum_q<T: FloatScalar>(mu: T, x: T, y: T) -> Result<T, MarcumError> {
    Ok(marcum(mu, x, y)?.q)
}

/// Guarded natural log: arguments below the smallest normal magnitude are
/// lifted to it, so x = 0 stays finite.
pub(crate) fn ln_guarded<T: FloatScalar>(x: T) -> T {
    let tiny = T::min_positive_value();
    if x < tiny {
        tiny.ln()
    } else {
        x.ln()
    }
}
