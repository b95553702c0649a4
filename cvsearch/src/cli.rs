use std::io::{self, Write};

use cve_sources::{search, Feed, FetchError, Query};

use crate::present::{SearchBody, TerminalRenderer};

pub const USAGE: &str = "Use: cvsearch <keyword(s)>";

#[derive(Debug, Clone, Copy)]
pub enum Output {
    Terminal(TerminalRenderer),
    Json,
}

/// Runs one lookup and returns the lines to print.
pub fn report(
    feed: &dyn Feed,
    keywords: &[String],
    output: Output,
) -> Result<Vec<String>, FetchError> {
    let query = Query::new(&keywords.join(" "));
    let result = search::lookup(feed, &query)?;

    Ok(match output {
        Output::Terminal(renderer) => renderer.render(&result),
        Output::Json => {
            let body = SearchBody::from(result);
            let json = serde_json::to_string_pretty(&body)
                .expect("search bodies hold only strings, numbers and maps with integer keys");
            vec![json]
        }
    })
}

/// One command line run, as parsed from the arguments.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub keywords: &'a [String],
    pub output: Output,
    /// Exit with [`exit_code`] instead of 0 when the lookup fails.
    pub fail_on_error: bool,
}

/// Runs a command line lookup, printing the report to `out` and failures to
/// `err`. Returns the process exit status.
pub fn run<W: Write, E: Write>(
    feed: &dyn Feed,
    invocation: Invocation,
    out: &mut W,
    err: &mut E,
) -> io::Result<u8> {
    if invocation.keywords.is_empty() {
        writeln!(out, "{USAGE}")?;
        return Ok(1);
    }

    match report(feed, invocation.keywords, invocation.output) {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
            Ok(0)
        }
        Err(error) => {
            log::error!("{}", error);
            writeln!(err, "Error. Try again. ({error})")?;

            if invocation.fail_on_error {
                Ok(exit_code(&error))
            } else {
                Ok(0)
            }
        }
    }
}

/// Process exit code for a failed lookup, one per failure kind.
pub fn exit_code(error: &FetchError) -> u8 {
    match error {
        FetchError::Network(_) => 2,
        FetchError::Timeout(_) => 3,
        FetchError::HttpStatus(_) => 4,
        FetchError::Decode(_) => 5,
        FetchError::Client(_) => 6,
    }
}
