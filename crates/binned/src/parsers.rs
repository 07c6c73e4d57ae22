//! Library of parser functions for scorer headers
//!
//! All parsers expect a line that has already had any `#` comment marker and
//! surrounding whitespace removed.

// crate modules
use crate::dimension::{Axis, BinnedDimension};

// topas modules
use topas_utils::parsers::{cause, real, uint};

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, space1};
use nom::combinator::opt;
use nom::sequence::tuple;
use nom::IResult;

/// Scored quantity, unit, and statistics from one header line
#[derive(Debug, PartialEq)]
pub(crate) struct Scored {
    pub quantity: String,
    pub unit: Option<String>,
    pub statistics: Vec<String>,
}

/// Parse `<axis> in <N> bin(s) of <width> <unit>` for a specific axis
///
/// The singular form is written with two spaces, `bin  of`, but any amount of
/// whitespace is accepted.
pub(crate) fn binning(i: &str, axis: Axis) -> IResult<&str, BinnedDimension> {
    let (i, _) = tuple((tag(axis.label()), space1, tag("in"), space1))(i)?;
    let (i, n_bins) = uint(i)?;
    let (i, _) = tuple((space1, tag("bin"), opt(char('s')), space1, tag("of"), space1))(i)?;
    let (i, bin_width) = real(i)?;
    let (i, _) = tuple((space1, tag(axis.unit())))(i)?;
    Ok((i, BinnedDimension::new(axis, n_bins, bin_width)))
}

/// Parse `<quantity> ( <unit> ) : <statistics...>`
///
/// Both the quantity and the unit are greedy, so the last ` : ` and the last
/// ` ( ` before it are the delimiters.
pub(crate) fn scored_with_unit(i: &str) -> IResult<&str, Scored> {
    let (lhs, statistics) = split_statistics(i)?;
    let inner = lhs.strip_suffix(" )").ok_or_else(|| cause(i))?;
    let (quantity, unit) = inner.rsplit_once(" ( ").ok_or_else(|| cause(i))?;

    if quantity.is_empty() || unit.is_empty() {
        return Err(cause(i));
    }

    Ok((
        "",
        Scored {
            quantity: quantity.to_string(),
            unit: Some(unit.to_string()),
            statistics,
        },
    ))
}

/// Parse `<quantity> : <statistics...>` for unitless quantities
pub(crate) fn scored_unitless(i: &str) -> IResult<&str, Scored> {
    let (quantity, statistics) = split_statistics(i)?;

    if quantity.is_empty() {
        return Err(cause(i));
    }

    Ok((
        "",
        Scored {
            quantity: quantity.to_string(),
            unit: None,
            statistics,
        },
    ))
}

/// Try the unit form first, falling back to unitless
pub(crate) fn scored(i: &str) -> IResult<&str, Scored> {
    alt((scored_with_unit, scored_unitless))(i)
}

/// Split at the last ` : ` into the left hand side and statistic names
fn split_statistics(i: &str) -> IResult<&str, Vec<String>> {
    let (lhs, rhs) = i.rsplit_once(" : ").ok_or_else(|| cause(i))?;
    let statistics = rhs
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<String>>();

    if statistics.is_empty() {
        return Err(cause(i));
    }

    Ok((lhs, statistics))
}
