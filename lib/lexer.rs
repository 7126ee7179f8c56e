use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::Token;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut keywords = HashMap::new();
        keywords.insert("print", Token::Print);
        keywords.insert("if", Token::If);
        keywords.insert("while", Token::While);
        keywords
    };
}

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let char = self.char?;
        let token = match char {
            '=' if self.is_next_char('=') => {
                self.read_char();
                Token::Eq
            }
            '=' => Token::Assign,
            '|' if self.is_next_char('|') => {
                self.read_char();
                Token::Or
            }
            '&' if self.is_next_char('&') => {
                self.read_char();
                Token::And
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '<' => Token::Lt,
            ';' => Token::Semicolon,
            '(' => Token::Lparen,
            ')' => Token::Rparen,
            '{' => Token::Lbrace,
            '}' => Token::Rbrace,
            '"' => return Some(self.read_string()),
            _ if char.is_ascii_digit() => return Some(Token::Number(self.read_number())),
            _ if char.is_ascii_alphabetic() || char == '_' => {
                let literal = self.read_while(|char| char.is_ascii_alphanumeric() || char == '_');
                let token = KEYWORDS
                    .get(literal.as_str())
                    .cloned()
                    .unwrap_or(Token::Ident(literal));
                return Some(token);
            }
            _ => Token::Illegal(char.to_string()),
        };

        self.read_char();

        Some(token)
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn is_next_char(&self, ch: char) -> bool {
        self.chars.get(self.position + 1).eq(&Some(&ch))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.char.is_some_and(|char| char.is_whitespace()) {
                self.read_char();
            }
            if self.char != Some('#') {
                break;
            }
            while self.char.is_some_and(|char| char != '\n') {
                self.read_char();
            }
        }
    }

    fn read_while(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if !condition(char) {
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }

    fn read_number(&mut self) -> String {
        let mut literal = self.read_while(|char| char.is_ascii_digit());
        let next_is_digit = self
            .chars
            .get(self.position + 1)
            .is_some_and(|char| char.is_ascii_digit());
        if self.char == Some('.') && next_is_digit {
            literal.push('.');
            self.read_char();
            literal.push_str(&self.read_while(|char| char.is_ascii_digit()));
        }
        literal
    }

    fn read_string(&mut self) -> Token {
        let mut literal = String::new();
        self.read_char();
        loop {
            match self.char {
                None => return Token::Illegal(format!("\"{}", literal)),
                Some('"') => {
                    self.read_char();
                    return Token::String(literal);
                }
                Some('\\') => {
                    self.read_char();
                    match self.char {
                        Some('n') => literal.push('\n'),
                        Some('t') => literal.push('\t'),
                        Some('"') => literal.push('"'),
                        Some('\\') => literal.push('\\'),
                        Some(other) => {
                            literal.push('\\');
                            literal.push(other);
                        }
                        None => return Token::Illegal(format!("\"{}\\", literal)),
                    }
                    self.read_char();
                }
                Some(char) => {
                    literal.push(char);
                    self.read_char();
                }
            }
        }
    }
}
