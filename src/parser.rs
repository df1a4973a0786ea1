//! Version strings arrive from the command line and need to be parsed into
//! their components.

mod common;
mod version;

use nom::error::convert_error;
use nom::combinator::all_consuming;

use tracing::{instrument, event, Level};

use self::version::{version, patch_number};

use crate::models::Version;

use anyhow::{Result, anyhow};
use common::ws;

/// Receives a parser which it will run with the given input, and returns the parsed result.
/// Errors are unwrapped into a string with some additional context on where parsing errors
/// occured for the user.
fn parse_with_better_errors<'a, T>(input: &'a str, parser: impl Fn(&'a str) -> common::VResult<'a, T>) -> Result<T> {
    match all_consuming(ws(parser))(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(e) => {
            match e {
                nom::Err::Error(inner_e) | nom::Err::Failure(inner_e) => {
                    let fancy_error = convert_error(input, inner_e);
                    Err(anyhow!("Failed to parse: {}", fancy_error))
                },
                _ => {
                    Err(anyhow!("Failed to parse: {}", e))
                },
            }
        }
    }
}

#[instrument]
pub fn parse_version(input: &str) -> Result<Version> {
    let parsed = parse_with_better_errors(input, version)?;
    event!(Level::DEBUG, "Parsed version: {:?}", parsed);
    Ok(parsed)
}

/// Leading digit run of a patch segment; trailing suffixes are ignored.
/// `None` when the segment does not start with a digit or the number overflows.
pub fn parse_patch_number(segment: &str) -> Option<u32> {
    patch_number(segment).ok().map(|(_, number)| number)
}
