//! Pattern primitives shared by the header grammars
//!
//! TOPAS headers are free text written for humans, so the grammars are built
//! from a few small pieces: unsigned integers, real numbers in any of the
//! usual notations, `:` separators, and "everything else on the line" names.

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{char, digit1, one_of, space0, space1};
use nom::combinator::{map_res, opt, recognize, rest, verify};
use nom::error::{Error, ErrorKind};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{pair, preceded, terminated, tuple};
use nom::{Err, IResult};

/// More convenient error creation for nom
pub fn cause(i: &str) -> Err<Error<&str>> {
    Err::Error(Error::new(i, ErrorKind::Fail))
}

/// Unsigned integer value
pub fn uint(i: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(i)
}

/// Real value in decimal or scientific notation
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction like `.5`), and an optional exponent. Things like `inf` or `nan`
/// are deliberately not accepted here.
pub fn real(i: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(i)
}

/// The `:` between a label and its description, e.g. `12 : Weight`
pub fn separator(i: &str) -> IResult<&str, char> {
    terminated(preceded(space0, char(':')), space1)(i)
}

/// Everything left on the line, trimmed, which must not be empty
pub fn name(i: &str) -> IResult<&str, &str> {
    let (i, name) = verify(rest, |s: &str| !s.trim().is_empty())(i)?;
    Ok((i, name.trim()))
}

/// List of consecutive whitespace separated values as f64
///
/// Values must be separated by whitespace, so parsing stops at a token like
/// `1.2.3` and leaves it in the remainder.
pub fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    terminated(separated_list1(space1, double), space0)(i.trim_start())
}
