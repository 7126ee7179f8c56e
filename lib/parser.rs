use anyhow::{anyhow, bail, Result};

use crate::{
    config::DEFAULT_MAX_DEPTH,
    context::Name,
    expr::{Expr, Operator},
    lexer::Lexer,
    stmt::Stmt,
    token::Token,
};

#[derive(Debug, Clone, PartialOrd, PartialEq, Eq, Ord)]
enum Precedence {
    Lowest,
    Or,
    And,
    Equals,
    Less,
    Sum,
    Product,
}

impl Precedence {
    fn from_token(token: &Token) -> Self {
        match token {
            Token::Or => Precedence::Or,
            Token::And => Precedence::And,
            Token::Eq => Precedence::Equals,
            Token::Lt => Precedence::Less,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Asterisk | Token::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

fn infix_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Sum),
        Token::Minus => Some(Operator::Difference),
        Token::Asterisk => Some(Operator::Product),
        Token::Slash => Some(Operator::Quotient),
        Token::Lt => Some(Operator::Less),
        Token::Eq => Some(Operator::Equals),
        Token::Or => Some(Operator::Or),
        Token::And => Some(Operator::And),
        _ => None,
    }
}

pub struct Parser {
    lexer: Lexer,
    cur_token: Option<Token>,
    peek_token: Option<Token>,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        Self {
            cur_token: lexer.next_token(),
            peek_token: lexer.next_token(),
            lexer,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn next_statement(&mut self) -> Result<Option<Stmt>> {
        if self.cur_token.is_none() {
            return Ok(None);
        }
        let statement = self.parse_statement()?;
        self.next_token();
        Ok(Some(statement))
    }

    pub fn parse_program(&mut self) -> Result<Vec<Stmt>> {
        let mut statements = Vec::new();
        while let Some(statement) = self.next_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    fn cur_token(&self) -> Result<Token> {
        self.cur_token
            .clone()
            .ok_or(anyhow!("unexpected end of input"))
    }

    fn next_token(&mut self) -> &mut Self {
        self.cur_token = self.peek_token.take();
        self.peek_token = self.lexer.next_token();
        self
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token
            .as_ref()
            .map_or(Precedence::Lowest, Precedence::from_token)
    }

    fn cur_precedence(&self) -> Precedence {
        self.cur_token
            .as_ref()
            .map_or(Precedence::Lowest, Precedence::from_token)
    }

    fn expect_peek(&mut self, exp_token: Token) -> Result<()> {
        let peek_token = self
            .peek_token
            .clone()
            .ok_or(anyhow!("expected {exp_token}, found end of input"))?;
        if peek_token.variant_eq(exp_token.clone()) {
            self.next_token();
            Ok(())
        } else {
            bail!("expected next token to be {exp_token}, found {peek_token}")
        }
    }

    /// Runs `parse` one nesting level deeper, failing once `max_depth` is
    /// reached.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.max_depth {
            bail!("nesting deeper than {} levels", self.max_depth);
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_statement(&mut self) -> Result<Stmt> {
        self.nested(|parser| match parser.cur_token()? {
            Token::Print => parser.parse_print_statement(),
            Token::If => parser.parse_if_statement(),
            Token::While => parser.parse_while_statement(),
            Token::Lbrace => parser.parse_compound_statement(),
            Token::Ident(name) => parser.parse_assignment(&name),
            token => bail!("expected a statement, found {token}"),
        })
    }

    fn parse_print_statement(&mut self) -> Result<Stmt> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Semicolon)?;
        Ok(Stmt::print(value))
    }

    fn parse_assignment(&mut self, name: &str) -> Result<Stmt> {
        let name = Name::new(name)?;
        self.expect_peek(Token::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Semicolon)?;
        Ok(Stmt::assign(name, value))
    }

    fn parse_condition(&mut self) -> Result<Expr> {
        self.expect_peek(Token::Lparen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Rparen)?;
        self.next_token();
        Ok(condition)
    }

    fn parse_if_statement(&mut self) -> Result<Stmt> {
        let condition = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(Stmt::if_then(condition, body))
    }

    fn parse_while_statement(&mut self) -> Result<Stmt> {
        let condition = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(Stmt::while_loop(condition, body))
    }

    fn parse_compound_statement(&mut self) -> Result<Stmt> {
        let mut statements = Vec::new();
        self.next_token();
        loop {
            match self.cur_token {
                Some(Token::Rbrace) => break,
                None => bail!("expected }}, found end of input"),
                Some(_) => {
                    statements.push(self.parse_statement()?);
                    self.next_token();
                }
            }
        }
        Ok(Stmt::compound(statements))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expr> {
        self.nested(|parser| {
            let mut left_exp = match parser.cur_token()? {
                Token::Ident(name) => Expr::variable(Name::new(&name)?),
                Token::Number(value) | Token::String(value) => Expr::literal(value),
                Token::Lparen => parser.parse_grouped_expression()?,
                token => bail!("no prefix parse function for {token}"),
            };

            // left-deep chains nest one level per operator
            let mut chain = 0;
            while precedence < parser.peek_precedence() {
                chain += 1;
                if parser.depth + chain > parser.max_depth {
                    bail!("nesting deeper than {} levels", parser.max_depth);
                }
                parser.next_token();
                // the right operand sits below every link of the chain
                parser.depth += chain;
                let infix = parser.parse_infix_expression(left_exp);
                parser.depth -= chain;
                left_exp = infix?;
            }

            Ok(left_exp)
        })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Result<Expr> {
        let token = self.cur_token()?;
        let operator = infix_operator(&token).ok_or(anyhow!("{token} is not an operator"))?;
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Ok(Expr::binary(left, operator, right))
    }

    fn parse_grouped_expression(&mut self) -> Result<Expr> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Rparen)?;
        Ok(expression)
    }
}
