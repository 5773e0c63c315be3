use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Tokens that carry text keep it exactly as written in the source.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `shout`
    #[token("shout")]
    Shout,
    /// `ask`
    #[token("ask")]
    Ask,
    /// `stash`
    #[token("stash")]
    Stash,
    /// `if`
    #[token("if")]
    If,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `plunder`
    #[token("plunder")]
    Plunder,
    /// `booty`
    #[token("booty")]
    Booty,
    /// `be`
    #[token("be")]
    Be,
    /// Boolean literal tokens, `aye` or `nay`.
    #[token("aye", |_| true)]
    #[token("nay", |_| false)]
    Bool(bool),
    /// Decimal literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Float(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens. The payload excludes the quotes.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// Identifier tokens; variable or procedure names such as `gold`.
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
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Any other character, kept verbatim. Malformed input surfaces later as
    /// a syntax error instead of a lexical one.
    #[regex(r#"[^a-zA-Z0-9_ \t\f\r\n+\-*/<>.,()\[\]{}]"#, |lex| lex.slice().to_string())]
    Punct(String),
    /// End of a logical source line.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shout => write!(f, "shout"),
            Self::Ask => write!(f, "ask"),
            Self::Stash => write!(f, "stash"),
            Self::If => write!(f, "if"),
            Self::Loop => write!(f, "loop"),
            Self::Plunder => write!(f, "plunder"),
            Self::Booty => write!(f, "booty"),
            Self::Be => write!(f, "be"),
            Self::Bool(true) => write!(f, "aye"),
            Self::Bool(false) => write!(f, "nay"),
            Self::Float(text) | Self::Integer(text) | Self::Identifier(text) | Self::Punct(text) => {
                write!(f, "{text}")
            },
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::NewLine => write!(f, "line break"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Converts source text into `(Token, line)` pairs.
///
/// Every line is trimmed first. Blank lines and lines whose first character is
/// `#` are dropped before any tokens are produced. Each surviving line is
/// terminated with a [`Token::NewLine`]. Line numbers are 1-based and refer to
/// the original source, so comments still count.
///
/// Tokenization never fails; characters the lexer cannot classify become
/// [`Token::Punct`].
///
/// # Example
/// ```
/// use piratelang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("# a comment\nshout \"ahoy\"\n");
///
/// assert_eq!(tokens,
///            vec![(Token::Shout, 2),
///                 (Token::Str("ahoy".to_string()), 2),
///                 (Token::NewLine, 2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();

        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut lexer = Token::lexer(text);

        while let Some(token) = lexer.next() {
            match token {
                Ok(tok) => tokens.push((tok, line)),
                Err(()) => tokens.push((Token::Punct(lexer.slice().to_string()), line)),
            }
        }

        tokens.push((Token::NewLine, line));
    }

    tokens
}
