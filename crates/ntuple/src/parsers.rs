//! Library of parser functions for phase space headers

// topas modules
use topas_utils::parsers::{name, separator, uint};

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{char, one_of, space0};
use nom::sequence::{delimited, tuple};
use nom::IResult;

/// One line of a binary column description, in either style
#[derive(Debug, PartialEq)]
pub(crate) enum BinaryColumn<'a> {
    /// `f4: Position X (cm)`
    New {
        kind: char,
        width: usize,
        name: &'a str,
    },
    /// ` 0- 3: Position X (cm)`
    Old {
        start: usize,
        end: usize,
        name: &'a str,
    },
}

// ! Boolean checks
/// Checks for `<index>: <name>` column lines
pub(crate) fn is_ascii_column(i: &str) -> bool {
    ascii_column(i).is_ok()
}

/// Checks for either style of binary column line
pub(crate) fn is_binary_column(i: &str) -> bool {
    binary_column(i).is_ok()
}

// ! Parser combinators
/// Parse `<index>: <name>` into the column index and name
pub(crate) fn ascii_column(i: &str) -> IResult<&str, (usize, &str)> {
    let (i, index) = delimited(space0, uint, separator)(i)?;
    let (i, name) = name(i)?;
    Ok((i, (index, name)))
}

/// Parse a binary column line, new style first
pub(crate) fn binary_column(i: &str) -> IResult<&str, BinaryColumn<'_>> {
    alt((binary_new_column, binary_old_column))(i)
}

/// Parse `<kind><width>: <name>`, where the kind is one of `b`, `f`, or `i`
pub(crate) fn binary_new_column(i: &str) -> IResult<&str, BinaryColumn<'_>> {
    let (i, (_, kind, width, _)) = tuple((space0, one_of("bfi"), uint, separator))(i)?;
    let (i, name) = name(i)?;
    Ok((i, BinaryColumn::New { kind, width, name }))
}

/// Parse `<start> - <end> : <name>` byte ranges
pub(crate) fn binary_old_column(i: &str) -> IResult<&str, BinaryColumn<'_>> {
    let (i, (_, start, _, _, _, end, _)) =
        tuple((space0, uint, space0, char('-'), space0, uint, separator))(i)?;
    let (i, name) = name(i)?;
    Ok((i, BinaryColumn::Old { start, end, name }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_columns() {
        assert_eq!(
            ascii_column(" 1: Position X (cm)"),
            Ok(("", (1, "Position X (cm)")))
        );
        assert_eq!(
            ascii_column("10 : Flag to tell if Third Direction Cosine is Negative (1 means true)"),
            Ok((
                "",
                (10, "Flag to tell if Third Direction Cosine is Negative (1 means true)")
            ))
        );
        // interior whitespace is kept, the ends are trimmed
        assert_eq!(
            ascii_column("3: Energy  (MeV)  "),
            Ok(("", (3, "Energy  (MeV)")))
        );
    }

    #[test]
    fn ascii_column_rejections() {
        assert!(!is_ascii_column(""));
        assert!(!is_ascii_column("Number of Scored Particles: 104"));
        assert!(!is_ascii_column("f4: Position X (cm)"));
        assert!(!is_ascii_column("4:"));
    }

    #[test]
    fn new_style_binary_columns() {
        assert_eq!(
            binary_column("f4: Position X (cm)"),
            Ok((
                "",
                BinaryColumn::New {
                    kind: 'f',
                    width: 4,
                    name: "Position X (cm)"
                }
            ))
        );
        assert_eq!(
            binary_column("b1: Flag to tell if this is the First Scored Particle from this History (1 means true)"),
            Ok((
                "",
                BinaryColumn::New {
                    kind: 'b',
                    width: 1,
                    name: "Flag to tell if this is the First Scored Particle from this History (1 means true)"
                }
            ))
        );
    }

    #[test]
    fn old_style_binary_columns() {
        assert_eq!(
            binary_column(" 0- 3: Position X (cm)"),
            Ok((
                "",
                BinaryColumn::Old {
                    start: 0,
                    end: 3,
                    name: "Position X (cm)"
                }
            ))
        );
        assert_eq!(
            binary_column("32 - 32 : Flag"),
            Ok((
                "",
                BinaryColumn::Old {
                    start: 32,
                    end: 32,
                    name: "Flag"
                }
            ))
        );
    }

    #[test]
    fn binary_column_rejections() {
        assert!(!is_binary_column(""));
        assert!(!is_binary_column("Number of Bytes per Particle: 34"));
        assert!(!is_binary_column("u4: Unsigned"));
        assert!(!is_binary_column(" 1: Position X (cm)"));
    }
}
