use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenType};
use phf::phf_map;
use tracing::{debug, trace};

static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map! {
    "PRINT" => TokenType::Print,
};

/// Classifies words into tokens. Unrecognized words are reported and skipped,
/// so the result may hold fewer tokens than there were words.
#[tracing::instrument(level = "debug", skip_all, fields(words = words.len()))]
pub fn lex(words: &[&str]) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    for word in words {
        match lex_word(word) {
            Some(tokentype) => {
                trace!(%tokentype, word, "token");
                tokens.push(Token::new(tokentype));
            }
            None => diagnostics.push(Diagnostic::UnrecognizedWord {
                word: word.to_string(),
            }),
        }
    }

    debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed words"
    );
    (tokens, diagnostics)
}

fn lex_word(word: &str) -> Option<TokenType> {
    if let Some(keyword) = KEYWORDS.get(word) {
        return Some(keyword.clone());
    }
    // Every quote is dropped from the literal, not only the delimiters.
    if word.len() >= 2 && word.starts_with('\'') && word.ends_with('\'') {
        return Some(TokenType::StringLiteral(word.replace('\'', "")));
    }
    None
}

#[cfg(test)]
mod lexer_tests {
    use crate::diagnostic::Diagnostic;
    use crate::lexer;
    use crate::token::TokenType;

    #[test]
    fn print_and_string() {
        let (tokens, diagnostics) = lexer::lex(&["PRINT", "'Hello'"]);
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].tokentype, TokenType::Print);
        assert_eq!(
            tokens[1].tokentype,
            TokenType::StringLiteral("Hello".to_string())
        );
    }

    #[test]
    fn strips_every_quote() {
        let (tokens, _) = lexer::lex(&["'a''b'", "'it's'"]);
        assert_eq!(tokens[0].tokentype, TokenType::StringLiteral("ab".to_string()));
        assert_eq!(tokens[1].tokentype, TokenType::StringLiteral("its".to_string()));
    }

    #[test]
    fn empty_quotes_make_empty_string() {
        let (tokens, diagnostics) = lexer::lex(&["''"]);
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].tokentype, TokenType::StringLiteral(String::new()));
    }

    #[test]
    fn empty_input() {
        let (tokens, diagnostics) = lexer::lex(&[]);
        assert!(tokens.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unrecognized_words_are_skipped() {
        let (tokens, diagnostics) = lexer::lex(&["FOO", "'", "print", "'x", "PRINT"]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].tokentype, TokenType::Print);
        let words: Vec<String> = diagnostics
            .iter()
            .map(|d| match d {
                Diagnostic::UnrecognizedWord { word } => word.clone(),
                other => panic!("unexpected diagnostic {:?}", other),
            })
            .collect();
        assert_eq!(words, vec!["FOO", "'", "print", "'x"]);
        assert_eq!(diagnostics[0].to_string(), "Unexpected token: FOO");
    }
}
