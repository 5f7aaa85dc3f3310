//! Time-ordered sequences of kets.

use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::multispace0,
    combinator::{eof, opt, repeat_till},
    error::{StrContext, StrContextValue},
};

use crate::{
    bloch::BlochVector,
    error::BlochError,
    ket::Ket,
    text::{HasParser, comment_parser, parse_complete},
};

/// A non-empty, caller-ordered sequence of kets.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory(Vec<Ket>);

impl Trajectory {
    /// Fails with [`BlochError::EmptyTrajectory`] if `kets` is empty.
    pub fn new(kets: Vec<Ket>) -> Result<Self, BlochError> {
        if kets.is_empty() {
            Err(BlochError::EmptyTrajectory)
        } else {
            Ok(Trajectory(kets))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ket> {
        self.into_iter()
    }

    /// The final ket, the "current" state of the evolution.
    pub fn current(&self) -> &Ket {
        // Non-empty by construction.
        &self.0[self.0.len() - 1]
    }

    /// Bloch vectors of every ket, in order.
    pub fn bloch_path(&self) -> Vec<BlochVector> {
        self.iter().map(BlochVector::from).collect()
    }

    /// Parse whitespace or comma separated ket literals, with `//` comments.
    pub fn parse_str(src: &str) -> Result<Self, BlochError> {
        let kets = parse_complete(kets, src, "trajectory")?;
        Trajectory::new(kets)
    }
}

impl TryFrom<Vec<Ket>> for Trajectory {
    type Error = BlochError;

    fn try_from(kets: Vec<Ket>) -> Result<Self, Self::Error> {
        Trajectory::new(kets)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Ket;
    type IntoIter = std::slice::Iter<'a, Ket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn kets(input: &mut LocatingSlice<&str>) -> ModalResult<Vec<Ket>> {
    repeat_till(
        0..,
        (Ket::parser, multispace0, opt(","), comment_parser)
            .map(|(ket, ..)| ket)
            .context(StrContext::Expected(StrContextValue::Description(
                "ket or end of input",
            ))),
        eof,
    )
    .map(|(kets, _)| kets)
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ket::KetState;

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            Trajectory::new(vec![]),
            Err(BlochError::EmptyTrajectory)
        ));
        assert!(matches!(
            Trajectory::parse_str("  // nothing here\n"),
            Err(BlochError::EmptyTrajectory)
        ));
    }

    #[test]
    fn parses_mixed_literals() {
        let src = "// rotate from |0> towards |1>\n|0>\n[0.7071, 0.7071],\n|1>  // end\n";
        let t = Trajectory::parse_str(src).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(*t.current(), KetState::One.to_ket());
    }

    #[test]
    fn path_follows_order() {
        let t = Trajectory::new(vec![KetState::Zero.into(), KetState::Plus.into()]).unwrap();
        let path = t.bloch_path();
        assert_eq!(path.len(), 2);
        assert!(path[0].z > 0.99);
        assert!(path[1].x > 0.99);
    }

    fn parse_error(src: &str) -> (usize, String) {
        match Trajectory::parse_str(src) {
            Err(BlochError::Parse { span, message, .. }) => (span.offset(), message),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_basis_state_is_located() {
        let (offset, message) = parse_error("|0> |2>");
        assert_eq!(offset, 5);
        assert!(!message.is_empty());
    }

    #[test]
    fn bad_amplitude_inside_trajectory_is_located() {
        let (offset, message) = parse_error("|0>\n|1>\n[0.5, x]\n");
        assert_eq!(offset, 14);
        assert!(message.contains("amplitude"), "message was {message:?}");
    }

    #[test]
    fn trailing_text_is_reported() {
        let (offset, message) = parse_error("|0> xyz");
        assert_eq!(offset, 4);
        assert!(message.contains("ket or end of input"), "message was {message:?}");
    }

    #[test]
    fn iterates_in_order() {
        let t = Trajectory::try_from(vec![KetState::Zero.to_ket(), KetState::One.to_ket()]).unwrap();
        let states: Vec<_> = (&t).into_iter().copied().collect();
        assert_eq!(states, vec![KetState::Zero.to_ket(), KetState::One.to_ket()]);
    }
}
