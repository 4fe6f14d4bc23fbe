#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// A byte for which no lexical rule applies.
    ///
    /// Reported by the scanner; the token stream continues past it, so the
    /// parser will subsequently raise an [`ParseError::UnexpectedToken`] for
    /// the same position and resynchronise.
    IllegalCharacter {
        /// Printable rendering of the offending bytes (`^X` for control
        /// bytes, `\ooo` for bytes outside ASCII).
        rendered: String,
        /// The source line where the character occurred.
        line:     usize,
        /// The column of the character.
        column:   usize,
    },
    /// Found a token for which no production applies.
    UnexpectedToken {
        /// The offending lexeme, exactly as it appeared in the source.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the lexeme's first character.
        column: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of the expected token, e.g. `"')'"`.
        expected: &'static str,
        /// The lexeme that was found instead.
        lexeme:   String,
        /// The source line where the error occurred.
        line:     usize,
        /// The column of the lexeme's first character.
        column:   usize,
    },
    /// The input ended in the middle of a command.
    UnexpectedEndOfInput {
        /// The source line where input ran out.
        line:   usize,
        /// The column where input ran out.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // The illegal-character format carries no comma between the line
            // and column fields.
            Self::IllegalCharacter { rendered,
                                     line,
                                     column, } => {
                write!(f, "illegal character: {rendered} at line {line} column {column}")
            },

            Self::UnexpectedToken { lexeme, line, column } => {
                write!(f, "syntax error \"{lexeme}\" at line {line}, column {column}")
            },

            Self::ExpectedToken { expected,
                                  lexeme,
                                  line,
                                  column, } => {
                write!(f,
                       "expected {expected}, found \"{lexeme}\" at line {line}, column {column}")
            },

            Self::UnexpectedEndOfInput { line, column } => {
                write!(f, "unexpected end of input at line {line}, column {column}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
