//! Symmetry-aware dimensionality reduction for complex sequences.
//!
//! A lightweight principal component analysis over the real/imaginary
//! components of a complex sequence. The 2×2 covariance matrix has a
//! closed-form eigen-decomposition, which yields the dominant axes of
//! the spiral geometry without any linear-algebra dependency.

use crate::complex::Complex;
use crate::folding::SequenceFly;
use serde::{Deserialize, Serialize};

/// Analysis validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymmetryError {
    /// At least two points are required for a covariance estimate.
    TooFewPoints(usize),
}

impl std::fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymmetryError::TooFewPoints(count) => {
                write!(f, "at least two complex points are required for analysis, got {}", count)
            }
        }
    }
}

impl std::error::Error for SymmetryError {}

/// A principal axis in the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxis {
    pub eigenvalue: f64,
    /// Unit direction, sign-normalised so the x component is non-negative.
    pub direction: (f64, f64),
}

/// Summary statistics describing the dimensionality of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetrySummary {
    pub centroid: (f64, f64),
    /// Leading axis first.
    pub axes: [PrincipalAxis; 2],
    /// `sqrt(λ₁/λ₂)`; infinite when the trailing eigenvalue vanishes.
    pub axis_ratio: f64,
}

impl SymmetrySummary {
    /// Fraction of variance captured by each axis.
    pub fn variance_explained(&self) -> (f64, f64) {
        let [leading, trailing] = self.axes;
        let total = leading.eigenvalue + trailing.eigenvalue;
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        (leading.eigenvalue / total, trailing.eigenvalue / total)
    }
}

fn mean(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let total_x: f64 = points.iter().map(|p| p.0).sum();
    let total_y: f64 = points.iter().map(|p| p.1).sum();
    (total_x / n, total_y / n)
}

/// Unbiased covariance of the planar points as `(xx, xy, yy)`.
fn covariance_matrix(points: &[(f64, f64)]) -> (f64, f64, f64) {
    let (mean_x, mean_y) = mean(points);
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_yy = 0.0;
    for (x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sum_xx += dx * dx;
        sum_xy += dx * dy;
        sum_yy += dy * dy;
    }
    let scale = 1.0 / (points.len() - 1) as f64;
    (sum_xx * scale, sum_xy * scale, sum_yy * scale)
}

fn normalize(vector: (f64, f64)) -> (f64, f64) {
    let (vx, vy) = vector;
    let length = vx.hypot(vy);
    if length == 0.0 {
        return (1.0, 0.0);
    }
    (vx / length, vy / length)
}

/// Closed-form eigen-decomposition of a symmetric 2×2 matrix
/// `[[a, b], [b, c]]`, leading axis first.
fn principal_axes(a: f64, b: f64, c: f64) -> [PrincipalAxis; 2] {
    let trace = a + c;
    let determinant = a * c - b * b;
    let discriminant = (trace * trace - 4.0 * determinant).max(0.0).sqrt();

    let eigenvalue_1 = 0.5 * (trace + discriminant);
    let eigenvalue_2 = 0.5 * (trace - discriminant);

    let eigenvector = |eigenvalue: f64| -> (f64, f64) {
        // Pick the better-conditioned column of (M − λI) to build the
        // null-space direction from.
        let vector = if b.abs() > 1e-12 || (a - eigenvalue).abs() > (c - eigenvalue).abs() {
            (b, eigenvalue - a)
        } else {
            (eigenvalue - c, b)
        };
        let unit = normalize(vector);
        if unit.0 < 0.0 {
            (-unit.0, -unit.1)
        } else {
            unit
        }
    };

    let mut leading = PrincipalAxis {
        eigenvalue: eigenvalue_1,
        direction: eigenvector(eigenvalue_1),
    };
    let mut trailing = PrincipalAxis {
        eigenvalue: eigenvalue_2,
        direction: eigenvector(eigenvalue_2),
    };
    if leading.eigenvalue < trailing.eigenvalue {
        std::mem::swap(&mut leading, &mut trailing);
    }
    [leading, trailing]
}

fn axis_ratio(axes: &[PrincipalAxis; 2]) -> f64 {
    let [leading, trailing] = axes;
    if trailing.eigenvalue <= 0.0 {
        return f64::INFINITY;
    }
    (leading.eigenvalue / trailing.eigenvalue).sqrt()
}

/// PCA-like analysis of a complex sequence, treating real and imaginary
/// components as planar coordinates.
pub fn analyze_complex_symmetry(sequence: &[Complex]) -> Result<SymmetrySummary, SymmetryError> {
    if sequence.len() < 2 {
        return Err(SymmetryError::TooFewPoints(sequence.len()));
    }

    let points: Vec<(f64, f64)> = sequence.iter().map(|z| (z.re, z.im)).collect();
    let (a, b, c) = covariance_matrix(&points);
    let axes = principal_axes(a, b, c);
    Ok(SymmetrySummary {
        centroid: mean(&points),
        axis_ratio: axis_ratio(&axes),
        axes,
    })
}

/// Analyse the symmetry of a fly's energy landscape.
///
/// `levels` must be at least two to produce a meaningful covariance
/// estimate.
pub fn analyze_fly_landscape(
    levels: u32,
    fly: &SequenceFly,
) -> Result<SymmetrySummary, SymmetryError> {
    if levels < 2 {
        return Err(SymmetryError::TooFewPoints(levels as usize));
    }
    analyze_complex_symmetry(&fly.landscape(levels))
}

/// Project a complex sequence onto the leading principal axis, giving the
/// trajectory in the reduced one-dimensional subspace.
pub fn project_onto_leading_axis(sequence: &[Complex], axes: &[PrincipalAxis; 2]) -> Vec<f64> {
    let (lx, ly) = axes[0].direction;
    sequence.iter().map(|z| z.re * lx + z.im * ly).collect()
}
