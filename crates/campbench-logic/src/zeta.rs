//! Riemann zeta approximation and a critical-line zero search.
//!
//! `riemann_zeta` evaluates the globally convergent Hasse series for
//! `ζ(s)` with `Re(s) > 0`, dividing out the `1 − 2^(1−s)` factor to
//! handle the simple pole at `s = 1`. `find_first_zero` runs a
//! golden-section search on `|ζ(1/2 + it)|` to bracket the first
//! nontrivial zero near `t ≈ 14.1347`.
//!
//! Binomial coefficients in the inner summation are computed exactly
//! with `BigUint` via the row recurrence `C(n,k+1) = C(n,k)·(n−k)/(k+1)`,
//! so large term counts cannot overflow a fixed-width integer.

use crate::complex::{powc, Complex};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Default truncation tolerance for [`riemann_zeta`].
pub const DEFAULT_TOLERANCE: f64 = 1e-12;
/// Default outer-term budget for [`riemann_zeta`].
pub const DEFAULT_MAX_TERMS: usize = 64;
/// Real part along which [`find_first_zero`] searches.
pub const CRITICAL_LINE: f64 = 0.5;

/// Failure modes of the evaluator and the zero search.
///
/// Every variant is terminal for the call that produced it; nothing in
/// this module retries or translates an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Caller supplied a non-positive tolerance, a zero iteration/term
    /// budget, or an inverted search interval.
    InvalidParameter(&'static str),
    /// Argument outside the supported domain (`Re(s) ≤ 0` or non-finite).
    Domain,
    /// Argument too close to the pole at `s = 1` for stable division.
    NearPole,
    /// Term or iteration budget exhausted before the stopping criterion.
    Convergence,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidParameter(reason) => {
                write!(f, "invalid parameter: {}", reason)
            }
            EvalError::Domain => {
                write!(f, "argument must have a finite, strictly positive real part")
            }
            EvalError::NearPole => {
                write!(f, "argument is too close to the pole at 1 for a stable evaluation")
            }
            EvalError::Convergence => {
                write!(f, "did not converge within the allotted budget")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Approximate `ζ(s)` using the globally convergent Hasse series.
///
/// Supported arguments have `Re(s) > 0`. Arguments extremely close to
/// the simple pole at `s = 1` fail with [`EvalError::NearPole`] because
/// the quotient becomes numerically unstable. The outer summation stops
/// once a term magnitude drops below `tolerance`; exhausting `max_terms`
/// first fails with [`EvalError::Convergence`].
pub fn riemann_zeta(s: Complex, tolerance: f64, max_terms: usize) -> Result<Complex, EvalError> {
    if !(tolerance > 0.0) {
        return Err(EvalError::InvalidParameter("tolerance must be a positive real number"));
    }
    if max_terms == 0 {
        return Err(EvalError::InvalidParameter("max_terms must be at least 1"));
    }
    if !s.is_finite() || s.re <= 0.0 {
        return Err(EvalError::Domain);
    }

    // 1 − 2^(1−s), the alternating-series companion factor.
    let denominator = Complex::ONE - powc(2.0, Complex::new(1.0 - s.re, -s.im));
    if denominator.abs() < 10.0 * tolerance {
        return Err(EvalError::NearPole);
    }

    let mut total = Complex::ZERO;
    let mut converged = false;

    for n in 0..max_terms {
        let mut inner = Complex::ZERO;
        let mut binomial = BigUint::from(1u32);

        for k in 0..=n {
            let weight = binomial.to_f64().unwrap_or(f64::INFINITY);
            let contribution = powc((k + 1) as f64, -s).scale(weight);
            inner = if k % 2 == 0 {
                inner + contribution
            } else {
                inner - contribution
            };
            if k < n {
                binomial = binomial * ((n - k) as u64) / ((k + 1) as u64);
            }
        }

        // 2^-(n+1) is an exact power of two, so this scaling is lossless.
        let term = inner.scale(0.5f64.powi(n as i32 + 1));
        total = total + term;
        if term.abs() < tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(EvalError::Convergence);
    }

    Ok(total / denominator)
}

/// Parameters for [`find_first_zero`].
///
/// The defaults bracket the first nontrivial zero near `t ≈ 14.1347`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ZeroSearch {
    /// Lower bound for `t` along the imaginary axis.
    pub t_lower: f64,
    /// Upper bound for `t`. Must be strictly greater than `t_lower`.
    pub t_upper: f64,
    /// Desired precision of the imaginary component of the zero.
    pub tolerance: f64,
    /// Maximum number of interval refinements.
    pub max_iterations: usize,
    /// Truncation tolerance forwarded to [`riemann_zeta`] per probe.
    pub zeta_tolerance: f64,
    /// Term budget forwarded to [`riemann_zeta`] per probe.
    pub zeta_max_terms: usize,
}

impl Default for ZeroSearch {
    fn default() -> Self {
        ZeroSearch {
            t_lower: 13.0,
            t_upper: 15.0,
            tolerance: 1e-10,
            max_iterations: 64,
            zeta_tolerance: 1e-14,
            zeta_max_terms: 256,
        }
    }
}

/// Locate a zero of `ζ(s)` on the critical line by golden-section search.
///
/// Minimizes `|ζ(1/2 + it)|` over `[t_lower, t_upper]`, reusing one probe
/// per iteration as the interval shrinks by `1/φ`. Terminates when the
/// interval width falls below `tolerance`; exhausting `max_iterations`
/// first fails with [`EvalError::Convergence`]. Any probe failure from
/// [`riemann_zeta`] propagates unchanged.
pub fn find_first_zero(search: &ZeroSearch) -> Result<Complex, EvalError> {
    if !(search.t_lower < search.t_upper) {
        return Err(EvalError::InvalidParameter("t_lower must be strictly less than t_upper"));
    }
    if !(search.tolerance > 0.0) {
        return Err(EvalError::InvalidParameter("tolerance must be a positive real number"));
    }
    if search.max_iterations == 0 {
        return Err(EvalError::InvalidParameter("max_iterations must be at least 1"));
    }

    let inv_phi = 2.0 / (1.0 + 5.0f64.sqrt());

    let magnitude = |t: f64| -> Result<f64, EvalError> {
        let value = riemann_zeta(
            Complex::new(CRITICAL_LINE, t),
            search.zeta_tolerance,
            search.zeta_max_terms,
        )?;
        Ok(value.abs())
    };

    let mut lower = search.t_lower;
    let mut upper = search.t_upper;
    let mut width = upper - lower;
    let mut c = upper - inv_phi * width;
    let mut d = lower + inv_phi * width;
    let mut f_c = magnitude(c)?;
    let mut f_d = magnitude(d)?;
    let mut converged = false;

    for _ in 0..search.max_iterations {
        if upper - lower < search.tolerance {
            converged = true;
            break;
        }
        if f_c < f_d {
            // The minimum lies left of d: shrink from the right and
            // reuse c as the new right probe.
            upper = d;
            d = c;
            f_d = f_c;
            width = upper - lower;
            c = upper - inv_phi * width;
            f_c = magnitude(c)?;
        } else {
            lower = c;
            c = d;
            f_c = f_d;
            width = upper - lower;
            d = lower + inv_phi * width;
            f_d = magnitude(d)?;
        }
    }

    if !converged {
        return Err(EvalError::Convergence);
    }

    Ok(Complex::new(CRITICAL_LINE, 0.5 * (lower + upper)))
}
