use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// This enum defines all recognized tokens of the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+|[0-9]+", parse_number)]
    Number(f64),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `define`
    #[token("define")]
    Define,
    /// `auto`
    #[token("auto")]
    Auto,
    /// `return`
    #[token("return")]
    Return,
    /// `halt`
    #[token("halt")]
    Halt,
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-z][a-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `# Line comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `/* Block comments, possibly spanning lines. */`
    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
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
    /// `!`
    #[token("!")]
    Bang,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `^=`
    #[token("^=")]
    PowAssign,
    /// `++`
    #[token("++")]
    Incr,
    /// `--`
    #[token("--")]
    Decr,
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
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// Line terminator; ends a top-level command.
    #[token("\n")]
    Newline,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// Any character for which no other rule applies.
    ///
    /// The scanner reports the character and keeps going; the parser then
    /// fails on this token and resynchronises at the next line terminator.
    #[regex(r".", priority = 0)]
    Illegal,
}

/// A scanned token: its kind, its source text, and the position of its first
/// character. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// The token kind.
    pub token:  Token,
    /// The text the token was scanned from. For [`Token::Illegal`] this is
    /// the printable rendering of the offending bytes.
    pub lexeme: String,
    /// The source line of the token.
    pub line:   usize,
    /// The column of the token's first character.
    pub column: usize,
}

/// Scans a complete source text into tokens.
///
/// Scanning never fails: characters outside the lexical surface are turned
/// into [`Token::Illegal`] entries and reported as
/// [`ParseError::IllegalCharacter`] diagnostics, and scanning continues with
/// the next character.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The token sequence and the illegal-character diagnostics, in source
/// order.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::scan;
///
/// let (tokens, faults) = scan("1 + 2\n");
/// assert_eq!(tokens.len(), 4);
/// assert!(faults.is_empty());
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Lexed>, Vec<ParseError>) {
    let starts = line_starts(source);
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut faults = Vec::new();

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        let (line, column) = locate(&starts, span.start);

        match item {
            Ok(Token::Illegal) | Err(()) => {
                let rendered = render_illegal(lexer.slice());
                faults.push(ParseError::IllegalCharacter { rendered: rendered.clone(),
                                                           line,
                                                           column });
                tokens.push(Lexed { token: Token::Illegal,
                                    lexeme: rendered,
                                    line,
                                    column });
            },
            Ok(token) => {
                tokens.push(Lexed { token,
                                    lexeme: lexer.slice().to_string(),
                                    line,
                                    column });
            },
        }
    }

    (tokens, faults)
}

/// Byte offsets at which each source line begins.
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in source.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Resolves a byte offset to a 1-based `(line, column)` pair.
fn locate(starts: &[usize], offset: usize) -> (usize, usize) {
    let line = starts.partition_point(|&start| start <= offset);
    (line, offset - starts[line - 1] + 1)
}

/// Renders bytes that have no lexical rule in a printable form: printable
/// ASCII stands for itself, control bytes become `^X`, and everything above
/// ASCII becomes a three-digit octal escape.
fn render_illegal(slice: &str) -> String {
    let mut rendered = String::new();
    for byte in slice.bytes() {
        match byte {
            0x20..=0x7e => rendered.push(byte as char),
            0x00..=0x1f => {
                rendered.push('^');
                rendered.push((byte ^ 0x40) as char);
            },
            _ => rendered.push_str(&format!("\\{byte:03o}")),
        }
    }
    rendered
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
