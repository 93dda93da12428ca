use crate::ast::{Program, Statement, Visitor};
use crate::print_handler::PrintHandler;
use std::io;
use tracing::trace;

pub struct Interpreter {
    output: PrintHandler,
}

impl Visitor<Statement, io::Result<()>> for Interpreter {
    fn visit(&mut self, stmt: &Statement) -> io::Result<()> {
        match stmt {
            Statement::Print(value) => {
                trace!(value = value.as_str(), "print");
                self.output.println(value)
            }
        }
    }
}

impl Interpreter {
    pub fn new(output: PrintHandler) -> Interpreter {
        Interpreter { output }
    }
    /// Runs every statement once, in order. The program is left untouched, so
    /// interpreting it again repeats the same output. Stops at the first write
    /// the output handler fails.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn interpret(&mut self, program: &Program) -> io::Result<()> {
        for statement in &program.statements {
            self.execute(statement)?;
        }
        Ok(())
    }
    fn execute(&mut self, stmt: &Statement) -> io::Result<()> {
        stmt.accept(self)
    }
    pub fn output(&self) -> &PrintHandler {
        &self.output
    }
    pub fn output_mut(&mut self) -> &mut PrintHandler {
        &mut self.output
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(PrintHandler::default())
    }
}
