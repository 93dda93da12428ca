/// A single statement. Open for new kinds of statement; today the language
/// only has `PRINT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Print(String),
}

/// Statements of a whole script, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

pub trait Visitor<T, Output> {
    fn visit(&mut self, n: &T) -> Output;
}

impl Statement {
    pub fn accept<T, V: Visitor<Statement, T> + ?Sized>(&self, v: &mut V) -> T {
        v.visit(self)
    }
}

impl Program {
    pub fn accept<T, V: Visitor<Statement, T> + ?Sized>(&self, v: &mut V) -> Vec<T> {
        self.statements.iter().map(|s| s.accept(&mut *v)).collect()
    }
}

/// Renders statements as s-expressions, e.g. `(print Hello)`.
pub struct AstPrinter {}

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, args: &[&str]) -> String {
        let mut x = String::from("(");
        x.push_str(name);
        for arg in args {
            x.push(' ');
            x.push_str(arg);
        }
        x.push(')');
        x
    }
}

impl Visitor<Statement, String> for AstPrinter {
    fn visit(&mut self, n: &Statement) -> String {
        match n {
            Statement::Print(value) => self.parenthesize("print", &[value.as_str()]),
        }
    }
}
