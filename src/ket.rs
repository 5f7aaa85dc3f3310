//! Single-qubit states in ket notation.

use std::f64::consts::FRAC_1_SQRT_2;

use faer::{Mat, mat};
use num_complex::Complex;
use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::{float, multispace0},
    combinator::{alt, cut_err, delimited, opt, preceded, separated_pair, terminated},
    error::{StrContext, StrContextValue},
    token::one_of,
};

use crate::{
    phase::{Phase, phase},
    text::{HasParser, ToDoc, fmt_complex},
};

/// The six named states sitting on the poles of the Bloch sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KetState {
    /// |0> pattern
    Zero,
    /// |1> pattern
    One,
    /// |+> pattern
    Plus,
    /// |-> pattern
    Minus,
    /// |+i> pattern
    PlusI,
    /// |-i> pattern
    MinusI,
}

const CISQRT2: Complex<f64> = Complex::new(FRAC_1_SQRT_2, 0.0);
const CISQRT2_I: Complex<f64> = Complex::new(0.0, FRAC_1_SQRT_2);

impl KetState {
    /// All named states, in the order their labels are drawn.
    pub const ALL: [KetState; 6] = [
        KetState::Zero,
        KetState::One,
        KetState::Plus,
        KetState::Minus,
        KetState::PlusI,
        KetState::MinusI,
    ];

    /// Returns the complement of the state, its antipode on the sphere.
    /// `state` and `state.compl()` form a basis of C^2
    pub fn compl(self) -> Self {
        match self {
            KetState::Zero => KetState::One,
            KetState::One => KetState::Zero,
            KetState::Plus => KetState::Minus,
            KetState::Minus => KetState::Plus,
            KetState::PlusI => KetState::MinusI,
            KetState::MinusI => KetState::PlusI,
        }
    }

    /// Returns the text between the bars of this ket.
    pub fn symbol(&self) -> &'static str {
        match self {
            KetState::Zero => "0",
            KetState::One => "1",
            KetState::Plus => "+",
            KetState::Minus => "−",
            KetState::PlusI => "+i",
            KetState::MinusI => "−i",
        }
    }

    /// Display label, e.g. `|+i⟩`.
    pub fn label(&self) -> String {
        format!("|{}⟩", self.symbol())
    }

    /// Returns the ket this `KetState` represents.
    pub fn to_ket(self) -> Ket {
        match self {
            KetState::Zero => Ket::new(Complex::ONE, Complex::ZERO),
            KetState::One => Ket::new(Complex::ZERO, Complex::ONE),
            KetState::Plus => Ket::new(CISQRT2, CISQRT2),
            KetState::Minus => Ket::new(CISQRT2, -CISQRT2),
            KetState::PlusI => Ket::new(CISQRT2, CISQRT2_I),
            KetState::MinusI => Ket::new(CISQRT2, -CISQRT2_I),
        }
    }
}

impl HasParser for KetState {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        preceded(
            "|",
            cut_err(terminated(
                alt((
                    "0".value(KetState::Zero),
                    "1".value(KetState::One),
                    "+i".value(KetState::PlusI),
                    alt(("-i", "−i")).value(KetState::MinusI),
                    "+".value(KetState::Plus),
                    alt(("-", "−")).value(KetState::Minus),
                ))
                .context(StrContext::Expected(StrContextValue::Description(
                    "one of `0`, `1`, `+`, `-`, `+i`, `-i`",
                ))),
                alt((">", "⟩")).context(StrContext::Expected(StrContextValue::CharLiteral('>'))),
            )),
        )
        .context(StrContext::Label("basis ket"))
        .parse_next(input)
    }
}

/// Amplitudes `(a, b)` of `a|0> + b|1>`.
///
/// Normalization is assumed but never checked; see [`Ket::is_normalized`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ket {
    /// Amplitude of |0>
    pub a: Complex<f64>,
    /// Amplitude of |1>
    pub b: Complex<f64>,
}

impl Ket {
    pub fn new(a: Complex<f64>, b: Complex<f64>) -> Self {
        Ket { a, b }
    }

    /// The state `cos(θ/2)|0> + e^{iφ}sin(θ/2)|1>`.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Ket::new(
            Complex::new((theta / 2.0).cos(), 0.0),
            Complex::cis(phi) * (theta / 2.0).sin(),
        )
    }

    /// Multiply both amplitudes by a global phase.
    pub fn with_global_phase(self, phase: Phase) -> Self {
        let p = phase.to_complex();
        Ket::new(self.a * p, self.b * p)
    }

    /// `|a|² + |b|²`
    pub fn norm_sqr(&self) -> f64 {
        self.a.norm_sqr() + self.b.norm_sqr()
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Rescale to unit norm. The zero vector is returned unchanged.
    pub fn normalized(self) -> Self {
        let n = self.norm_sqr().sqrt();
        if n == 0.0 {
            self
        } else {
            Ket::new(self.a / n, self.b / n)
        }
    }

    /// Returns the column vector this ket represents.
    pub fn to_state(&self) -> Mat<Complex<f64>> {
        mat![[self.a], [self.b]]
    }
}

impl From<KetState> for Ket {
    fn from(state: KetState) -> Self {
        state.to_ket()
    }
}

impl From<[Complex<f64>; 2]> for Ket {
    fn from([a, b]: [Complex<f64>; 2]) -> Self {
        Ket::new(a, b)
    }
}

/// The pure-state density matrix `ρ = |ψ><ψ|`.
pub fn density_matrix(ket: &Ket) -> Mat<Complex<f64>> {
    let state = ket.to_state();
    state.as_ref() * state.adjoint()
}

impl ToDoc for Ket {
    fn to_doc(&self) -> RcDoc {
        RcDoc::text("[")
            .append(RcDoc::text(fmt_complex(self.a)))
            .append(RcDoc::text(","))
            .append(RcDoc::line())
            .append(RcDoc::text(fmt_complex(self.b)))
            .append(RcDoc::text("]"))
            .group()
    }
}

fn sign(input: &mut LocatingSlice<&str>) -> ModalResult<f64> {
    one_of(['+', '-'])
        .map(|c| if c == '-' { -1.0 } else { 1.0 })
        .parse_next(input)
}

fn unit_imag(input: &mut LocatingSlice<&str>) -> ModalResult<Complex<f64>> {
    (opt(sign), "i")
        .map(|(s, _)| Complex::new(0.0, s.unwrap_or(1.0)))
        .parse_next(input)
}

fn number(input: &mut LocatingSlice<&str>) -> ModalResult<Complex<f64>> {
    let re: f64 = float.parse_next(input)?;
    if opt("i").parse_next(input)?.is_some() {
        return Ok(Complex::new(0.0, re));
    }
    let im = opt((
        delimited(multispace0, sign, multispace0),
        opt(float::<_, f64, _>),
        "i",
    ))
    .map(|o| o.map_or(0.0, |(s, m, _)| s * m.unwrap_or(1.0)))
    .parse_next(input)?;
    Ok(Complex::new(re, im))
}

/// Parse a complex literal: `0.5`, `-2i`, `i`, `0.5-0.5i`.
pub fn complex(input: &mut LocatingSlice<&str>) -> ModalResult<Complex<f64>> {
    alt((number, unit_imag))
        .context(StrContext::Label("complex number"))
        .parse_next(input)
}

/// Parse an amplitude, a complex literal optionally preceded by a phase factor.
pub fn amplitude(input: &mut LocatingSlice<&str>) -> ModalResult<Complex<f64>> {
    alt((
        (
            terminated(phase, (multispace0, opt("*"), multispace0)),
            opt(complex),
        )
            .map(|(p, z): (Phase, Option<Complex<f64>>)| p.to_complex() * z.unwrap_or(Complex::ONE)),
        complex,
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "amplitude such as `0.7071` or `ph(0.5pi) 0.7071`",
    )))
    .parse_next(input)
}

impl HasParser for Ket {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        alt((
            KetState::parser.map(KetState::to_ket),
            preceded(
                "[",
                cut_err(delimited(
                    multispace0,
                    separated_pair(
                        amplitude,
                        (multispace0, ",", multispace0)
                            .context(StrContext::Expected(StrContextValue::CharLiteral(','))),
                        amplitude,
                    ),
                    (multispace0, "]")
                        .context(StrContext::Expected(StrContextValue::CharLiteral(']'))),
                )),
            )
            .map(|(a, b)| Ket::new(a, b)),
        ))
        .context(StrContext::Label("ket"))
        .parse_next(input)
    }
}
