//! Global phases, elements of the unit circle on the complex plane.

use std::f64::consts::PI;

use num_complex::Complex;
use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::{float, multispace0},
    combinator::delimited,
};

use crate::text::ToDoc;

/// Represents a global phase factor `e^{iπt}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Specifies the phase by a float, which should equal the angle divided by pi
    Angle(f64),
    /// -1 phase, equivalent to `Angle(1.0)`
    MinusOne,
    /// i phase, equivalent to `Angle(0.5)`
    Imag,
    /// -i phase, equivalent to `Angle(1.5)`
    MinusImag,
}

impl Phase {
    /// Construct a new `Phase` from a float representing the desired angle divided by pi.
    /// Uses special phase enum variants when possible.
    pub fn from_angle(f: f64) -> Self {
        let f = f.rem_euclid(2.0);
        if f == 0.5 {
            Phase::Imag
        } else if f == 1.0 {
            Phase::MinusOne
        } else if f == 1.5 {
            Phase::MinusImag
        } else {
            Phase::Angle(f)
        }
    }

    /// Construct a phase from an angle in radians.
    pub fn from_radians(phi: f64) -> Self {
        Phase::from_angle(phi / PI)
    }

    /// Returns the angle specified by this phase, divided by pi.
    /// e.g. if `phase.eval() == 1.0` then `phase` represents the angle `pi`
    pub fn eval(&self) -> f64 {
        match self {
            Phase::Angle(a) => *a,
            Phase::MinusOne => 1.0,
            Phase::Imag => 0.5,
            Phase::MinusImag => 1.5,
        }
    }

    /// The unit complex number this phase multiplies by.
    pub fn to_complex(self) -> Complex<f64> {
        match self {
            Phase::Angle(a) => Complex::cis(a * PI),
            Phase::MinusOne => -Complex::ONE,
            Phase::Imag => Complex::i(),
            Phase::MinusImag => -Complex::i(),
        }
    }
}

/// Parser for phase factors of the form `ph(0.5pi)`.
pub fn phase(input: &mut LocatingSlice<&str>) -> ModalResult<Phase> {
    delimited(
        ("ph(", multispace0),
        float,
        (multispace0, "pi", multispace0, ")"),
    )
    .map(Phase::from_angle)
    .parse_next(input)
}

impl ToDoc for Phase {
    fn to_doc(&self) -> RcDoc {
        match self {
            Phase::Angle(a) => RcDoc::text(format!("ph({a}pi)")),
            Phase::MinusOne => RcDoc::text("-1"),
            Phase::Imag => RcDoc::text("i"),
            Phase::MinusImag => RcDoc::text("-i"),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn special_angles_use_named_variants() {
        assert_eq!(Phase::from_angle(0.5), Phase::Imag);
        assert_eq!(Phase::from_angle(1.0), Phase::MinusOne);
        assert_eq!(Phase::from_angle(-0.5), Phase::MinusImag);
        assert_eq!(Phase::from_angle(0.25), Phase::Angle(0.25));
    }

    #[test]
    fn named_variants_agree_with_angles() {
        for p in [Phase::MinusOne, Phase::Imag, Phase::MinusImag] {
            let z = Complex::cis(p.eval() * PI);
            assert_relative_eq!(p.to_complex().re, z.re, epsilon = 1e-12);
            assert_relative_eq!(p.to_complex().im, z.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn parses_phase_factor() {
        let p = phase.parse(LocatingSlice::new("ph( 0.25 pi )")).unwrap();
        assert_eq!(p, Phase::Angle(0.25));
        let p = phase.parse(LocatingSlice::new("ph(0.5pi)")).unwrap();
        assert_eq!(p, Phase::Imag);
    }
}
