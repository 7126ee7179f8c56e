pub mod config;
pub mod context;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod stmt;
pub mod token;
pub mod value;

pub use config::Limits;
pub use context::{Context, Name, Scope};
pub use error::Error;
pub use expr::{Expr, Operator};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use stmt::Stmt;
pub use value::Value;
