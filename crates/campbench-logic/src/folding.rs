//! Spiral energy-barrier landscape for an infinitely folded sequence.
//!
//! A deterministic toy model generating complex numbers whose magnitudes
//! and phases follow a decaying logarithmic spiral, standing in for the
//! potential barriers met at ever deeper folding levels. Deterministic by
//! design so plots and the symmetry analysis are exactly reproducible.

use crate::complex::Complex;
use serde::{Deserialize, Serialize};

/// Parameter validation failure for [`SequenceFly`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldingError {
    /// Named parameter must be strictly positive.
    NonPositiveParameter(&'static str),
    /// Torsion must be a finite real number.
    NonFiniteTorsion,
    /// Pitch must be non-negative.
    NegativePitch,
}

impl std::fmt::Display for FoldingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoldingError::NonPositiveParameter(name) => {
                write!(f, "{} must be strictly positive", name)
            }
            FoldingError::NonFiniteTorsion => write!(f, "torsion must be a finite real number"),
            FoldingError::NegativePitch => write!(f, "pitch must be non-negative"),
        }
    }
}

impl std::error::Error for FoldingError {}

/// Generator for the folding energy barriers.
///
/// `base_energy` sets the zeroth barrier height, `fold_ratio` the
/// logarithmic growth before damping takes over, `damping` the per-level
/// exponential decay, `torsion` the imaginary tilt of the spiral, and
/// `pitch` the phase advance per square root of the folding level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceFly {
    pub base_energy: f64,
    pub fold_ratio: f64,
    pub damping: f64,
    pub torsion: f64,
    pub pitch: f64,
}

impl Default for SequenceFly {
    fn default() -> Self {
        SequenceFly {
            base_energy: 1.0,
            fold_ratio: 1.35,
            damping: 0.55,
            torsion: 0.8,
            pitch: 0.75,
        }
    }
}

impl SequenceFly {
    /// Build a validated generator.
    pub fn new(
        base_energy: f64,
        fold_ratio: f64,
        damping: f64,
        torsion: f64,
        pitch: f64,
    ) -> Result<Self, FoldingError> {
        if base_energy <= 0.0 {
            return Err(FoldingError::NonPositiveParameter("base_energy"));
        }
        if fold_ratio <= 0.0 {
            return Err(FoldingError::NonPositiveParameter("fold_ratio"));
        }
        if damping <= 0.0 {
            return Err(FoldingError::NonPositiveParameter("damping"));
        }
        if !torsion.is_finite() {
            return Err(FoldingError::NonFiniteTorsion);
        }
        if pitch < 0.0 {
            return Err(FoldingError::NegativePitch);
        }
        Ok(SequenceFly {
            base_energy,
            fold_ratio,
            damping,
            torsion,
            pitch,
        })
    }

    /// Complex barrier encountered at a folding `level`.
    ///
    /// Magnitudes shrink with depth while the phase keeps advancing and
    /// the imaginary tilt saturates, a decaying logarithmic spiral.
    pub fn barrier(&self, level: u32) -> Complex {
        if level == 0 {
            return Complex::from_real(self.base_energy);
        }

        let level_f = level as f64;
        let fold_progress = level_f.ln_1p();
        let amplitude = self.base_energy
            * (fold_progress * self.fold_ratio.ln() - self.damping * level_f).exp();
        let phase = self.pitch * level_f.sqrt();
        let (sin, cos) = phase.sin_cos();
        let spiral = Complex::new(cos, sin).scale(amplitude);
        let twist = Complex::new(1.0, self.torsion * level_f.sqrt().tanh());
        spiral * twist
    }

    /// Barrier sequence for the first `levels` folds.
    pub fn landscape(&self, levels: u32) -> Vec<Complex> {
        (0..levels).map(|level| self.barrier(level)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_is_purely_real() {
        let fly = SequenceFly::default();
        let barrier = fly.barrier(0);
        assert_eq!(barrier.re, fly.base_energy);
        assert_eq!(barrier.im, 0.0);
    }

    #[test]
    fn test_magnitudes_eventually_decay() {
        let fly = SequenceFly::default();
        let landscape = fly.landscape(30);
        // Damping dominates the fold-ratio growth well before level 30.
        assert!(landscape[29].abs() < landscape[1].abs());
        assert!(landscape[29].abs() < 1e-4);
    }

    #[test]
    fn test_landscape_is_deterministic() {
        let fly = SequenceFly::default();
        assert_eq!(fly.landscape(12), fly.landscape(12));
    }

    #[test]
    fn test_landscape_length() {
        let fly = SequenceFly::default();
        assert!(fly.landscape(0).is_empty());
        assert_eq!(fly.landscape(7).len(), 7);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            SequenceFly::new(0.0, 1.35, 0.55, 0.8, 0.75),
            Err(FoldingError::NonPositiveParameter("base_energy"))
        );
        assert_eq!(
            SequenceFly::new(1.0, 1.35, 0.55, f64::INFINITY, 0.75),
            Err(FoldingError::NonFiniteTorsion)
        );
        assert_eq!(
            SequenceFly::new(1.0, 1.35, 0.55, 0.8, -0.1),
            Err(FoldingError::NegativePitch)
        );
        assert!(SequenceFly::new(2.0, 1.1, 0.4, -0.5, 0.0).is_ok());
    }
}
