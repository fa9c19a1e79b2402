use logos::Logos;

/// Represents a lexical token in a rule condition.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the condition language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    ///
    /// A float is a digit run, a dot, and another digit run. Exponent
    /// notation and digit separators are not part of the grammar.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens: `true` or `false`.
    ///
    /// These are reserved words, matched before the identifier rule.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens, delimited by `"` or `'`.
    ///
    /// The lexer scans to the next matching delimiter in a single pass;
    /// there is no escape processing, so a literal cannot embed its own
    /// delimiter.
    #[regex(r#""[^"]*""#, parse_string)]
    #[regex(r"'[^']*'", parse_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `grade` or
    /// `matches`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    ///
    /// Recognized by the lexer because it appears in legacy rule sources,
    /// but not part of the expression grammar; the parser rejects it.
    #[token("=")]
    Equals,

    /// Newlines advance the line counter and are otherwise discarded.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the delimiters from a string literal slice.
///
/// The slice is known to start and end with the same quote character, so
/// only the interior is kept.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
