//! Helpers for parsing and pretty printing.

use float_pretty_print::PrettyPrintFloat;
use num_complex::Complex;
use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::{multispace0, till_line_ending},
    combinator::{delimited, repeat},
};

use crate::error::BlochError;

/// Trait for types which can be pretty-printed
pub trait ToDoc {
    /// Produce an `RcDoc` for pretty-printing.
    fn to_doc(&self) -> RcDoc;

    /// Render the document to a string at the given width.
    fn to_pretty(&self, width: usize) -> String {
        self.to_doc().pretty(width).to_string()
    }
}

/// Trait for types which can be parsed
pub trait HasParser: Sized {
    /// Parse an element of this type.
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self>;

    /// Parse the whole of `src` as a single element, allowing surrounding whitespace and comments.
    fn parse_str(src: &str, what: &'static str) -> Result<Self, BlochError> {
        parse_complete(Self::parser, src, what)
    }
}

/// Skip whitespace and `//` line comments.
pub fn comment_parser(input: &mut LocatingSlice<&str>) -> ModalResult<()> {
    (
        multispace0,
        repeat::<_, _, (), _, _>(0.., ("//", till_line_ending, multispace0).value(())),
    )
        .parse_next(input)?;
    Ok(())
}

/// Run `parser` over the whole of `src`, turning a failure into a spanned [`BlochError::Parse`].
pub fn parse_complete<T>(
    parser: fn(&mut LocatingSlice<&str>) -> ModalResult<T>,
    src: &str,
    what: &'static str,
) -> Result<T, BlochError> {
    delimited(comment_parser, parser, comment_parser)
        .parse(LocatingSlice::new(src))
        .map_err(|e| BlochError::Parse {
            what,
            src: src.to_owned(),
            span: (e.offset(), 0).into(),
            message: e.inner().to_string(),
        })
}

/// Format a float, printing numerically zero values as `0.0`.
pub fn fmt_float(x: f64) -> String {
    if x.abs() < 1e-9 {
        "0.0".to_owned()
    } else {
        format!("{}", PrettyPrintFloat(x))
    }
}

/// Format a complex number, dropping parts that are numerically zero.
pub fn fmt_complex(z: Complex<f64>) -> String {
    match (z.re.abs() > 1e-9, z.im.abs() > 1e-9) {
        (false, false) => "0.0".to_owned(),
        (true, false) => fmt_float(z.re),
        (false, true) => format!("{}i", fmt_float(z.im)),
        (true, true) if z.im < 0.0 => format!("{} - {}i", fmt_float(z.re), fmt_float(-z.im)),
        (true, true) => format!("{} + {}i", fmt_float(z.re), fmt_float(z.im)),
    }
}
