//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse a comma-separated resistance list
///
/// Structural errors (doubled or trailing commas) come from the grammar.
/// Every entry is then checked, so one call reports all bad values at once.
pub fn parse(input: &str) -> Result<ResistanceList, Vec<ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    let entries = list_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(ParseError::from).collect::<Vec<_>>())?;

    if entries.is_empty() {
        return Err(vec![ParseError::Empty]);
    }

    validate(entries)
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn list_parser<'a, I>() -> impl Parser<'a, I, Vec<Spanned<Entry>>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let entry = select! {
        Token::Number(n) => Entry::Value(n),
        Token::Invalid(s) => Entry::Invalid(s),
    }
    .map_with(|entry, e| Spanned::new(entry, span_range(&e.span())));

    entry
        .separated_by(just(Token::Comma))
        .collect::<Vec<_>>()
        .then_ignore(end())
}

fn validate(entries: Vec<Spanned<Entry>>) -> Result<ResistanceList, Vec<ParseError>> {
    let mut values = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for Spanned { node, span } in entries {
        match node {
            Entry::Invalid(text) => errors.push(ParseError::InvalidNumber { span, text }),
            // Exponent overflow ("1e999") lexes fine but is not a usable value
            Entry::Value(v) if !v.is_finite() => errors.push(ParseError::InvalidNumber {
                span,
                text: v.to_string(),
            }),
            Entry::Value(v) if v < 0.0 => errors.push(ParseError::Negative { span, value: v }),
            // Adding zero folds "-0" into 0 so it is never drawn as "-0Ω"
            Entry::Value(v) => values.push(Spanned::new(v + 0.0, span)),
        }
    }

    if errors.is_empty() {
        Ok(ResistanceList { values })
    } else {
        Err(errors)
    }
}
