use core::fmt;
use std::io::Write;

use tracing::trace;

use crate::{
    config::Limits,
    context::{Context, Name},
    error::{Error, Result},
    expr::Expr,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print(Expr),
    Assign { name: Name, value: Expr },
    Compound(Vec<Stmt>),
    If { condition: Expr, body: Box<Stmt> },
    While { condition: Expr, body: Box<Stmt> },
}

impl Stmt {
    pub fn print(value: Expr) -> Self {
        Stmt::Print(value)
    }

    pub fn assign(name: Name, value: Expr) -> Self {
        Stmt::Assign { name, value }
    }

    pub fn compound(statements: Vec<Stmt>) -> Self {
        Stmt::Compound(statements)
    }

    pub fn if_then(condition: Expr, body: Stmt) -> Self {
        Stmt::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Runs the statement with no iteration limit.
    pub fn execute<W: Write + ?Sized>(&self, ctxt: &mut Context, out: &mut W) -> Result<()> {
        self.execute_with(ctxt, out, &Limits::default())
    }

    pub fn execute_with<W: Write + ?Sized>(
        &self,
        ctxt: &mut Context,
        out: &mut W,
        limits: &Limits,
    ) -> Result<()> {
        match self {
            Stmt::Print(value) => {
                let value = value.eval(&*ctxt);
                out.write_all(value.as_str().as_bytes())?;
            }
            Stmt::Assign { name, value } => {
                let value = value.eval(&*ctxt);
                ctxt.set(name, value)?;
            }
            Stmt::Compound(statements) => {
                for statement in statements {
                    statement.execute_with(ctxt, out, limits)?;
                }
            }
            Stmt::If { condition, body } => {
                if condition.eval(&*ctxt).is_truthy() {
                    body.execute_with(ctxt, out, limits)?;
                }
            }
            Stmt::While { condition, body } => {
                let mut iterations: u64 = 0;
                while condition.eval(&*ctxt).is_truthy() {
                    if let Some(limit) = limits.max_iterations {
                        if iterations >= limit {
                            return Err(Error::IterationLimit { limit });
                        }
                    }
                    iterations += 1;
                    body.execute_with(ctxt, out, limits)?;
                }
                trace!(iterations, "loop finished");
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stmt::Print(value) => write!(f, "print {};", value),
            Stmt::Assign { name, value } => write!(f, "{} = {};", name, value),
            Stmt::Compound(statements) => {
                let statements: Vec<String> = statements.iter().map(|s| s.to_string()).collect();
                write!(f, "{{ {} }}", statements.join(" "))
            }
            Stmt::If { condition, body } => write!(f, "if {} {}", condition, body),
            Stmt::While { condition, body } => write!(f, "while {} {}", condition, body),
        }
    }
}
