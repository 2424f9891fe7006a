// Grammar library, matcher and decomposer for SIP/SIPS URIs

use nom::{combinator::all_consuming, IResult};
use tracing::debug;

use crate::error::{Error, Result};

// Type alias for parser result
pub type ParseResult<'a, O> = IResult<&'a str, O>;

pub mod common_chars;
pub(crate) mod decompose;
pub mod uri;

pub(crate) use decompose::decompose;
pub use uri::{split, Captures};

/// Runs `grammar` over the whole of `text`, reporting a mismatch as an
/// invalid `component`.
pub(crate) fn check_component<'a, O>(
    component: &str,
    grammar: impl FnMut(&'a str) -> ParseResult<'a, O>,
    text: &'a str,
) -> Result<O> {
    all_consuming(grammar)(text)
        .map(|(_, value)| value)
        .map_err(|_| {
            debug!(component, value = text, "rejecting URI component");
            Error::invalid_component(
                component,
                format!("{text:?} does not match the {component} grammar"),
            )
        })
}
