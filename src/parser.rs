use crate::ast::{Program, Statement};
use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenType};
use tracing::{debug, trace};

/// Builds a program from tokens.
///
/// Returns `None` when there are no tokens at all, which is distinct from a
/// program that parsed to zero statements. Malformed statements are reported
/// and skipped.
pub fn parse(tokens: &[Token]) -> (Option<Program>, Vec<Diagnostic>) {
    Parser::new(tokens).parse()
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(tokens = self.tokens.len()))]
    pub fn parse(mut self) -> (Option<Program>, Vec<Diagnostic>) {
        if self.tokens.is_empty() {
            debug!("no tokens, nothing to parse");
            return (None, self.diagnostics);
        }

        let mut program = Program::default();
        while let Some(token) = self.peek() {
            if let Some(statement) = self.statement(token) {
                trace!(?statement, "statement");
                program.statements.push(statement);
            }
        }

        debug!(
            statements = program.statements.len(),
            diagnostics = self.diagnostics.len(),
            "parsed tokens"
        );
        (Some(program), self.diagnostics)
    }

    /// Handles the token under the cursor and always moves the cursor forward
    /// by one token, or by two when a `PRINT` consumes its string.
    fn statement(&mut self, token: &'a Token) -> Option<Statement> {
        let next = self.peek_next();
        self.advance();
        match (&token.tokentype, next.map(|t| &t.tokentype)) {
            (TokenType::Print, Some(TokenType::StringLiteral(value))) => {
                self.advance();
                Some(Statement::Print(value.clone()))
            }
            (TokenType::Print, Some(_)) => {
                self.diagnostics.push(Diagnostic::MissingStringAfterPrint {
                    kind: token.tokentype.clone(),
                });
                None
            }
            // A trailing PRINT with nothing after it is dropped without a report.
            (TokenType::Print, None) => None,
            (other, _) => {
                self.diagnostics.push(Diagnostic::UnexpectedToken {
                    kind: other.clone(),
                });
                None
            }
        }
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }
    fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.current + 1)
    }
}
