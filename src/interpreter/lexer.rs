use std::fmt;

use logos::{FilterResult, Lexer, Logos, Skip};

use crate::{ast::Position, error::LexError};

/// The lexical class of a token.
///
/// Literal-bearing kinds carry their value; every other kind is fixed text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    Identifier(String),
    /// `let`
    Let,
    /// `const`
    Const,
    /// `fn`
    Fn,
    /// `for`
    For,
    /// `while`
    While,
    /// `=`
    Equals,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// Appended once, after the last lexeme.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    /// Describes the token the way diagnostics quote it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "number {n}"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::EndOfFile => return write!(f, "end of file"),
            Self::Let => "let",
            Self::Const => "const",
            Self::Fn => "fn",
            Self::For => "for",
            Self::While => "while",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
        };
        write!(f, "'{text}'")
    }
}

/// Byte offsets of a lexeme in the source, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

/// A classified, positioned lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the lexeme is.
    pub kind:     TokenKind,
    /// Line and column of the first character.
    pub position: Position,
    /// Where the lexeme sits in the source.
    pub span:     Span,
}

impl Token {
    /// Returns the raw text this token was scanned from.
    ///
    /// # Example
    /// ```
    /// use april::interpreter::lexer::scan;
    ///
    /// let source = "let total = 12.5;";
    /// let tokens = scan(source).unwrap();
    ///
    /// assert_eq!(tokens[1].lexeme(source), "total");
    /// assert_eq!(tokens[3].lexeme(source), "12.5");
    /// ```
    #[must_use]
    pub fn lexeme<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.start..self.span.end).unwrap_or_default()
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so every token can be given a
/// line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

/// Why the generated lexer stopped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    IllegalCharacter,
    MalformedBlockComment,
    UnterminatedBlockComment,
}

/// The lexemes as matched by logos, before comments and line breaks are
/// dropped.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("fn")]
    Fn,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    #[regex(r"@[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,
    #[token("#", block_comment)]
    BlockComment,
    #[token("\n", newline)]
    NewLine,
    #[token("=")]
    Equals,
    #[token("==")]
    EqualEqual,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}

impl RawToken {
    /// Converts to the public token kind; trivia has none.
    fn cook(self) -> Option<TokenKind> {
        let kind = match self {
            Self::LineComment | Self::BlockComment | Self::NewLine => return None,
            Self::Number(n) => TokenKind::Number(n),
            Self::Identifier(name) => TokenKind::Identifier(name),
            Self::Let => TokenKind::Let,
            Self::Const => TokenKind::Const,
            Self::Fn => TokenKind::Fn,
            Self::For => TokenKind::For,
            Self::While => TokenKind::While,
            Self::Equals => TokenKind::Equals,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Bang => TokenKind::Bang,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::AndAnd => TokenKind::AndAnd,
            Self::OrOr => TokenKind::OrOr,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
        };
        Some(kind)
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Advances the line bookkeeping past a line break.
fn newline(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

/// Consumes a `#| ... |#` block comment, honouring nested openers.
///
/// The lexer has matched only the `#`; the rest of the comment is scanned by
/// hand so nesting depth can be counted, which a regular pattern cannot do.
fn block_comment(lex: &mut Lexer<RawToken>) -> FilterResult<(), LexErrorKind> {
    let rest = lex.remainder().as_bytes();
    if rest.first() != Some(&b'|') {
        return FilterResult::Error(LexErrorKind::MalformedBlockComment);
    }

    let base = lex.span().end;
    let mut depth = 1_usize;
    let mut index = 1;
    let mut line = lex.extras.line;
    let mut line_start = lex.extras.line_start;

    while index < rest.len() {
        match (rest[index], rest.get(index + 1)) {
            (b'#', Some(b'|')) => {
                depth += 1;
                index += 2;
            },
            (b'|', Some(b'#')) => {
                depth -= 1;
                index += 2;
                if depth == 0 {
                    lex.extras.line = line;
                    lex.extras.line_start = line_start;
                    lex.bump(index);
                    return FilterResult::Skip;
                }
            },
            (b'\n', _) => {
                line += 1;
                index += 1;
                line_start = base + index;
            },
            _ => index += 1,
        }
    }

    FilterResult::Error(LexErrorKind::UnterminatedBlockComment)
}

/// Computes the 1-based line and column of byte `offset`.
fn position_at(source: &str, extras: &LexerExtras, offset: usize) -> Position {
    let column = source.get(extras.line_start..offset)
                       .map_or(0, |prefix| prefix.chars().count());
    Position::new(extras.line, column + 1)
}

/// Converts source text into tokens.
///
/// Whitespace and comments are dropped. The returned sequence always ends with
/// exactly one [`TokenKind::EndOfFile`] token.
///
/// # Errors
/// Returns a [`LexError`] for the first character that starts no token, for a
/// `#` not followed by `|`, and for a block comment still open at the end of
/// input.
///
/// # Example
/// ```
/// use april::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("x #| note #| nested |# |# >= 2").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier("x".into()),
///                 TokenKind::GreaterEqual,
///                 TokenKind::Number(2.0),
///                 TokenKind::EndOfFile]);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawToken::lexer_with_extras(source,
                                                LexerExtras { line:       1,
                                                              line_start: 0, });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = position_at(source, &lexer.extras, span.start);

        match result {
            Ok(raw) => {
                if let Some(kind) = raw.cook() {
                    tokens.push(Token { kind,
                                        position,
                                        span: Span { start: span.start,
                                                     end:   span.end, } });
                }
            },
            Err(LexErrorKind::IllegalCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::IllegalCharacter { character, position });
            },
            Err(LexErrorKind::MalformedBlockComment) => {
                return Err(LexError::MalformedBlockComment { position });
            },
            Err(LexErrorKind::UnterminatedBlockComment) => {
                return Err(LexError::UnterminatedBlockComment { position });
            },
        }
    }

    let end = source.len();
    tokens.push(Token { kind:     TokenKind::EndOfFile,
                        position: position_at(source, &lexer.extras, end),
                        span:     Span { start: end, end }, });

    tracing::debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}
