use pretty_assertions::assert_eq;
use printlang::diagnostic::{Diagnostic, RunError, Stage};
use printlang::interpreter::Interpreter;
use printlang::print_handler::PrintHandler;
use printlang::token::TokenType;

fn run(source: &str) -> (Result<Vec<Diagnostic>, RunError>, Vec<String>) {
    let mut interpreter = Interpreter::new(PrintHandler::buffer());
    let result = printlang::run(source, &mut interpreter);
    (result, interpreter.output().lines().to_vec())
}

#[test]
fn hello_world() {
    let (result, output) = run("PRINT 'Hello' PRINT ',' PRINT 'World'");
    assert_eq!(result.unwrap(), vec![]);
    assert_eq!(output, vec!["Hello", ",", "World"]);
}

#[test]
fn statements_span_lines() {
    let (result, output) = run("\n    PRINT 'Hello' PRINT ','\n    PRINT 'World'\n");
    assert!(result.unwrap().is_empty());
    assert_eq!(output, vec!["Hello", ",", "World"]);
}

#[test]
fn lone_print_does_nothing() {
    let (result, output) = run("PRINT");
    assert_eq!(result.unwrap(), vec![]);
    assert!(output.is_empty());
}

#[test]
fn unknown_word_and_stray_string() {
    let (result, output) = run("FOO 'bar'");
    let diagnostics = result.unwrap();
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::UnrecognizedWord {
                word: "FOO".to_string()
            },
            Diagnostic::UnexpectedToken {
                kind: TokenType::StringLiteral("bar".to_string())
            },
        ]
    );
    assert_eq!(diagnostics[0].stage(), Stage::Lexer);
    assert_eq!(diagnostics[1].stage(), Stage::Parser);
    assert!(output.is_empty());
}

#[test]
fn good_statements_survive_bad_ones() {
    let (result, output) = run("PRINT 'a' junk PRINT PRINT 'b' 'c' PRINT");
    let messages: Vec<String> = result.unwrap().iter().map(|d| d.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Unexpected token: junk",
            "Expected string after print, but got token: Print",
            "Unexpected token: 'StringLiteral'",
        ]
    );
    assert_eq!(output, vec!["a", "b"]);
}

#[test]
fn empty_source_has_no_program() {
    let (result, output) = run("   ");
    match result {
        Err(RunError::MissingProgram { diagnostics }) => assert!(diagnostics.is_empty()),
        other => panic!("expected no program, got {:?}", other),
    }
    assert!(output.is_empty());
}

#[test]
fn only_unknown_words_has_no_program() {
    let (result, _) = run("hello world");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "No program to run.");
    match err {
        RunError::MissingProgram { diagnostics } => assert_eq!(diagnostics.len(), 2),
        other => panic!("expected no program, got {:?}", other),
    }
}

#[test]
fn embedded_quotes_are_dropped() {
    let (_, output) = run("PRINT 'it's' PRINT 'a''b'");
    assert_eq!(output, vec!["its", "ab"]);
}

#[test]
fn compile_keeps_tokens() {
    let compilation = printlang::compile("PRINT 'x' FOO");
    let kinds: Vec<String> = compilation
        .tokens
        .iter()
        .map(|t| t.tokentype.to_string())
        .collect();
    assert_eq!(kinds, vec!["Print", "StringLiteral"]);
    assert_eq!(compilation.diagnostics.len(), 1);
    assert_eq!(compilation.program.unwrap().statements.len(), 1);
}

#[test]
fn program_can_run_twice() {
    let program = printlang::compile("PRINT 'one' PRINT 'two'").program.unwrap();
    let mut interpreter = Interpreter::new(PrintHandler::buffer());
    interpreter.interpret(&program).unwrap();
    let first = interpreter.output().lines().to_vec();
    interpreter.output_mut().clear();
    interpreter.interpret(&program).unwrap();
    assert_eq!(interpreter.output().lines().to_vec(), first);
}
