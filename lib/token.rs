use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Ident(String),
    Number(String),
    String(String),
    Illegal(String),

    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,

    Lt,
    Eq,
    Or,
    And,

    Semicolon,

    Lparen,
    Rparen,
    Lbrace,
    Rbrace,

    Print,
    If,
    While,
}

impl Token {
    pub fn variant_eq(&self, other: Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "{}", ident),
            Token::Number(value) => write!(f, "{}", value),
            Token::String(value) => write!(f, "{:?}", value),
            Token::Illegal(value) => write!(f, "{}", value),

            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),

            Token::Lt => write!(f, "<"),
            Token::Eq => write!(f, "=="),
            Token::Or => write!(f, "||"),
            Token::And => write!(f, "&&"),

            Token::Semicolon => write!(f, ";"),

            Token::Lparen => write!(f, "("),
            Token::Rparen => write!(f, ")"),
            Token::Lbrace => write!(f, "{{"),
            Token::Rbrace => write!(f, "}}"),

            Token::Print => write!(f, "print"),
            Token::If => write!(f, "if"),
            Token::While => write!(f, "while"),
        }
    }
}
