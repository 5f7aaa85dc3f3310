//! Bloch vectors and their extraction from kets.
//!
//! A ket `(a, b)` is mapped through its density matrix `ρ = |ψ><ψ|`:
//!
//! ```text
//! x = 2 Re(ρ₀₁)
//! y = 2 Im(ρ₁₀)
//! z = Re(ρ₀₀) - Re(ρ₁₁)
//! ```
//!
//! # Example
//!
//! ```
//! use bloch_rs::{bloch::BlochVector, ket::KetState};
//!
//! let v = BlochVector::from_ket(&KetState::Plus.to_ket());
//! assert!((v.x - 1.0).abs() < 1e-12);
//! ```

use std::{f64::consts::PI, fmt};

use pretty::RcDoc;

use crate::{
    ket::{Ket, density_matrix},
    text::{ToDoc, fmt_float},
};

/// A point on (or, for unnormalized input, off) the Bloch sphere.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +z is |0>, -z is |1>
    pub z: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        BlochVector { x, y, z }
    }

    /// Extract the Bloch vector of `ket`.
    ///
    /// Total over all complex pairs: an unnormalized ket gives a vector whose norm is `|a|² + |b|²`.
    pub fn from_ket(ket: &Ket) -> Self {
        let rho = density_matrix(ket);
        BlochVector {
            x: 2.0 * rho[(0, 1)].re,
            y: 2.0 * rho[(1, 0)].im,
            z: rho[(0, 0)].re - rho[(1, 1)].re,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether the vector lies on the sphere surface.
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Polar and azimuthal angles `(θ, φ)` with `φ ∈ [0, 2π)`.
    /// The zero vector maps to `(0, 0)`.
    pub fn angles(&self) -> (f64, f64) {
        let r = self.norm();
        if r < 1e-12 {
            return (0.0, 0.0);
        }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x).rem_euclid(2.0 * PI);
        (theta, phi)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise scaling, used to place labels beyond the tip.
    pub fn scale(self, k: f64) -> Self {
        BlochVector::new(self.x * k, self.y * k, self.z * k)
    }
}

impl From<&Ket> for BlochVector {
    fn from(ket: &Ket) -> Self {
        BlochVector::from_ket(ket)
    }
}

impl From<[f64; 3]> for BlochVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        BlochVector { x, y, z }
    }
}

impl ToDoc for BlochVector {
    fn to_doc(&self) -> RcDoc {
        RcDoc::text("(")
            .append(RcDoc::intersperse(
                [self.x, self.y, self.z].map(|c| RcDoc::text(fmt_float(c))),
                RcDoc::text(", "),
            ))
            .append(RcDoc::text(")"))
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex;

    use super::*;

    #[test]
    fn angles_of_poles() {
        let (theta, _) = BlochVector::new(0.0, 0.0, 1.0).angles();
        assert_relative_eq!(theta, 0.0);
        let (theta, _) = BlochVector::new(0.0, 0.0, -1.0).angles();
        assert_relative_eq!(theta, PI);
        let (theta, phi) = BlochVector::new(0.0, -1.0, 0.0).angles();
        assert_relative_eq!(theta, PI / 2.0);
        assert_relative_eq!(phi, 3.0 * PI / 2.0);
        assert_eq!(BlochVector::default().angles(), (0.0, 0.0));
    }

    #[test]
    fn angles_invert_from_angles() {
        let (theta, phi) = (1.1, 4.0);
        let v = BlochVector::from_ket(&Ket::from_angles(theta, phi));
        let (t, p) = v.angles();
        assert_relative_eq!(t, theta, epsilon = 1e-9);
        assert_relative_eq!(p, phi, epsilon = 1e-9);
    }

    #[test]
    fn unnormalized_norm_is_ket_norm() {
        let ket = Ket::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        let v = BlochVector::from_ket(&ket);
        assert_relative_eq!(v.norm(), 2.0, epsilon = 1e-12);
        assert!(!v.is_pure(1e-9));
    }

    #[test]
    fn pretty_prints_components() {
        let s = BlochVector::from([0.0, 1.0, 0.0]).to_pretty(80);
        assert!(s.starts_with("(0.0, "));
        assert!(s.ends_with(", 0.0)"));
    }
}
