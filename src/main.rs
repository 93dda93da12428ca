use clap::{crate_version, App, Arg, ErrorKind};
use printlang::ast::AstPrinter;
use printlang::diagnostic::RunError;
use printlang::interpreter::Interpreter;
use printlang::print_handler::{write_line, PrintHandler};
use std::fs;
use std::io;

const DEMO: &str = "
    PRINT 'Hello' PRINT ','
    PRINT 'World'
";

enum Source {
    File(String),
    Inline(String),
    Demo,
}

impl Source {
    fn read(self) -> io::Result<String> {
        match self {
            Source::File(path) => fs::read_to_string(path),
            Source::Inline(text) => Ok(text),
            Source::Demo => Ok(DEMO.to_string()),
        }
    }
}

struct Flags {
    tokens: bool,
    ast: bool,
    check: bool,
}

fn main() {
    init_tracing();
    let (source, flags) = parse_args();
    let source = match source.read() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read script: {}", e);
            std::process::exit(66);
        }
    };
    match run(&source, &flags) {
        Ok(()) => (),
        Err(err @ RunError::MissingProgram { .. }) => {
            eprintln!("{}", err);
            std::process::exit(65);
        }
        // The reader went away, e.g. `| head`; nothing left to say.
        Err(RunError::Output(ref e)) if e.kind() == io::ErrorKind::BrokenPipe => (),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(74);
        }
    }
}

fn parse_args() -> (Source, Flags) {
    let app = App::new("printlang")
        .version(crate_version!())
        .about("Runs scripts made of PRINT 'string' statements")
        .arg(
            Arg::with_name("script")
                .help("Script file to run; the demo script runs when omitted")
                .index(1)
                .conflicts_with("eval"),
        )
        .arg(
            Arg::with_name("eval")
                .short("e")
                .long("eval")
                .value_name("SOURCE")
                .takes_value(true)
                .help("Runs SOURCE instead of a script file"),
        )
        .arg(
            Arg::with_name("tokens")
                .long("tokens")
                .help("Prints every token before running"),
        )
        .arg(
            Arg::with_name("ast")
                .long("ast")
                .help("Prints the parsed program before running"),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Reports diagnostics without running the program"),
        );

    let matches = match app.get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                eprintln!("{}", e.message);
                std::process::exit(64);
            }
        },
    };

    let source = if let Some(path) = matches.value_of("script") {
        Source::File(path.to_string())
    } else if let Some(text) = matches.value_of("eval") {
        Source::Inline(text.to_string())
    } else {
        Source::Demo
    };
    let flags = Flags {
        tokens: matches.is_present("tokens"),
        ast: matches.is_present("ast"),
        check: matches.is_present("check"),
    };
    (source, flags)
}

/// Reports diagnostics on stderr, then writes the requested dumps and the
/// program's output to stdout. `--check` evaluates into a silent handler.
fn run(source: &str, flags: &Flags) -> Result<(), RunError> {
    let compilation = printlang::compile(source);
    for diagnostic in &compilation.diagnostics {
        eprintln!("{}", diagnostic);
    }
    let program = match compilation.program {
        Some(program) => program,
        None => {
            return Err(RunError::MissingProgram {
                diagnostics: compilation.diagnostics,
            })
        }
    };

    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if flags.tokens {
            for token in &compilation.tokens {
                write_line(&mut out, &format!("Token: [{}]", token.tokentype))?;
            }
        }
        if flags.ast {
            for line in program.accept(&mut AstPrinter {}) {
                write_line(&mut out, &line)?;
            }
        }
    }

    let handler = if flags.check {
        PrintHandler::Silent
    } else {
        PrintHandler::Stdout
    };
    Interpreter::new(handler).interpret(&program)?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only log when RUST_LOG is set, and keep logs off stdout.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
