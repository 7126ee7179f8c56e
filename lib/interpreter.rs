use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::{config::Limits, context::Context, error, lexer::Lexer, parser::Parser, stmt::Stmt};

pub struct Interpreter<W: Write> {
    context: Context,
    out: W,
    limits: Limits,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self::with_limits(out, Limits::default())
    }

    pub fn with_limits(out: W, limits: Limits) -> Self {
        Self {
            context: Context::new(),
            out,
            limits,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn execute(&mut self, statement: &Stmt) -> error::Result<()> {
        debug!(%statement, "execute");
        statement.execute_with(&mut self.context, &mut self.out, &self.limits)
    }

    /// Parses and runs `source` one statement at a time, returning how many
    /// statements ran. Statements before a parse error have already run when
    /// the error is returned.
    pub fn run(&mut self, source: &str) -> Result<usize> {
        let lexer = Lexer::new(source);
        let mut parser = Parser::new(lexer).with_max_depth(self.limits.max_depth);

        let mut count = 0;
        while let Some(statement) = parser.next_statement()? {
            self.execute(&statement)?;
            count += 1;
        }
        self.out.flush()?;

        debug!(statements = count, variables = self.context.len(), "program finished");
        Ok(count)
    }
}
