use strum_macros::Display;

/// Kind of a lexical unit. Displays as the bare variant name, so a
/// `StringLiteral` shows up as `StringLiteral` regardless of its payload.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TokenType {
    // Keywords.
    Print,

    // Literals.
    StringLiteral(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tokentype: TokenType,
}

impl Token {
    pub fn new(tokentype: TokenType) -> Token {
        Token { tokentype }
    }
}
