//! Lexer for resistance lists using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token(",")]
    Comma,

    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok(), priority = 3)]
    Number(f64),

    // Anything else between separators: "abc", "10k", "1..2"
    #[regex(r"[^,\s]+", |lex| lex.slice().to_string(), priority = 1)]
    Invalid(String),
}

/// Lex input string into tokens with spans
///
/// Bytes the lexer cannot classify become `Token::Invalid` so they surface as
/// errors instead of being dropped.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(move |(tok, span)| match tok {
        Ok(t) => (t, span),
        Err(()) => (Token::Invalid(input[span.clone()].to_string()), span),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_numbers_and_commas() {
        assert_eq!(
            tokens("10,20, 4.7"),
            vec![
                Token::Number(10.0),
                Token::Comma,
                Token::Number(20.0),
                Token::Comma,
                Token::Number(4.7)
            ]
        );
    }

    #[test]
    fn test_exponent_and_sign() {
        assert_eq!(
            tokens("1e3 -5 .5 +2"),
            vec![
                Token::Number(1000.0),
                Token::Number(-5.0),
                Token::Number(0.5),
                Token::Number(2.0)
            ]
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(
            tokens("abc,10k"),
            vec![
                Token::Invalid("abc".to_string()),
                Token::Comma,
                Token::Invalid("10k".to_string())
            ]
        );
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = lex(" 10 ,x").map(|(_, s)| s).collect();
        assert_eq!(spans, vec![1..3, 4..5, 5..6]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokens(" \t\n").is_empty());
    }
}
