use std::collections::HashSet;

use log::trace;
use nom::{
    IResult, Parser,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, multispace0, not_line_ending, space0},
    combinator::opt,
    multi::many0,
    sequence::preceded,
};

use crate::error::{Error, Result};

/// A named variant of a route, given by the ordered identifiers of the stops it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteVariant {
    pub name: String,
    pub stops: Vec<String>,
}

impl RouteVariant {
    pub fn new(
        name: impl Into<String>,
        stops: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reads route variants in the plain text format.
///
/// Each non-empty line has the form `<name>: <stop> <stop> ...`.
/// Names are trimmed and must be unique, stops are separated by spaces or tabs.
/// A `#` starts a comment that runs until the end of the line, either on its own line or after the stops.
pub fn read_route_variants(mut reader: impl std::io::Read) -> Result<Vec<RouteVariant>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_route_variants(&input)
}

/// See [`read_route_variants`].
pub fn parse_route_variants(input: &str) -> Result<Vec<RouteVariant>> {
    let (_, variants) = parse_route_variants_plain(input)?;

    let mut names = HashSet::new();
    for variant in &variants {
        if !names.insert(variant.name.as_str()) {
            return Err(Error::DuplicateVariantName(variant.name.clone()));
        }
    }

    Ok(variants)
}

fn parse_route_variants_plain(input: &str) -> IResult<&str, Vec<RouteVariant>> {
    let mut variants = Vec::new();
    let (mut input, _) = multispace0(input)?;

    while !input.is_empty() {
        let remaining = if let Ok((remaining, comment)) = parse_comment(input) {
            trace!("Skipping comment '{comment}'");
            remaining
        } else {
            let (remaining, variant) = parse_route_variant(input)?;
            trace!(
                "Parsed route variant '{}' with {} stops",
                variant.name,
                variant.stops.len()
            );
            variants.push(variant);
            remaining
        };
        input = multispace0(remaining)?.0;
    }

    Ok((input, variants))
}

fn parse_route_variant(input: &str) -> IResult<&str, RouteVariant> {
    let (input, name) = take_till(|c: char| c == ':' || c == '\n' || c == '\r').parse(input)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }));
    }

    let input = char(':')(input)?.0;
    let (input, stops) = many0(preceded(
        space0,
        take_till1(|c: char| c.is_whitespace() || c == '#'),
    ))
    .parse(input)?;
    let (input, _) = opt(parse_comment).parse(input)?;

    Ok((input, RouteVariant::new(name, stops)))
}

/// Parses a `#` comment, optionally preceded by spaces, and returns its trimmed text without the line break.
fn parse_comment(input: &str) -> IResult<&str, &str> {
    let input = space0(input)?.0;
    let input = char('#')(input)?.0;
    let (input, comment) = not_line_ending(input)?;
    Ok((input, comment.trim()))
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{RouteVariant, parse_comment, parse_route_variants, read_route_variants};

    #[test]
    fn parse_variants() {
        let input = "# Line 7\n\
            \n\
            inbound: central market harbour\n\
            \t inbound express : central harbour  \r\n\
            # depot runs\n\
            depot:depot central\n\
            empty:\n";

        assert_eq!(
            parse_route_variants(input).unwrap(),
            vec![
                RouteVariant::new("inbound", ["central", "market", "harbour"]),
                RouteVariant::new("inbound express", ["central", "harbour"]),
                RouteVariant::new("depot", ["depot", "central"]),
                RouteVariant::new("empty", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn read_variants() {
        let input = "a: 1 2 3\nb: 1 3";
        let variants = read_route_variants(input.as_bytes()).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1].stops, vec!["1", "3"]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_route_variants("").unwrap().is_empty());
        assert!(parse_route_variants("\n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn trailing_comments() {
        let input = "inbound: central market # express skips market\n\
            outbound: harbour central#depot\r\n\
            short: central \t# \n";

        assert_eq!(
            parse_route_variants(input).unwrap(),
            vec![
                RouteVariant::new("inbound", ["central", "market"]),
                RouteVariant::new("outbound", ["harbour", "central"]),
                RouteVariant::new("short", ["central"]),
            ]
        );
    }

    #[test]
    fn comments() {
        assert_eq!(
            parse_comment("  # express service \nnext").unwrap(),
            ("\nnext", "express service")
        );
        assert_eq!(parse_comment("#").unwrap(), ("", ""));
        assert!(parse_comment("line: a b").is_err());
    }

    #[test]
    fn duplicate_names() {
        assert!(matches!(
            parse_route_variants("a: 1 2\nb: 2\n a : 3"),
            Err(Error::DuplicateVariantName(name)) if name == "a"
        ));
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(
            parse_route_variants("a 1 2\n"),
            Err(Error::Parser { .. })
        ));
        assert!(matches!(
            parse_route_variants(": 1 2\n"),
            Err(Error::Parser {
                kind: nom::error::ErrorKind::Verify,
                ..
            })
        ));
    }
}
