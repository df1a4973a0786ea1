//! Common parsing functions used by the various parsers
use nom::{
    IResult,
    Parser,
    error::{ParseError, VerboseError},
    sequence::delimited,
    character::complete::multispace0,
};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub fn ws<'a, F, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
    where
    E: ParseError<&'a str>,
    F: Parser<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}
