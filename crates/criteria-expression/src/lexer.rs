//! Lexer: turns expression text into [`Token`]s.
//!
//! Two ambiguities are resolved from context rather than from the
//! character alone. A `-` directly followed by a digit starts a negative
//! number only where an operand is expected, otherwise it is subtraction.
//! A `/` where an operand is expected opens a regex literal, otherwise it is
//! division. "Operand expected" means: start of input, after `(`, after any
//! binary operator, or at the start of a list element.

use crate::error::ExprError;
use crate::operators::Operator;
use crate::pattern::{self, REGEX_FLAGS};
use crate::source::{Position, Source};
use crate::token::{Token, TokenKind};
use crate::value::Value;
use crate::MAX_LIST_DEPTH;

/// Characters that end a keyword/placeholder run.
const DELIMITERS: &[char] = &[
    '"', '(', ')', '+', '-', '*', '/', '<', '>', '=', '!', '[', ']', ',',
];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

pub struct Lexer {
    source: Source,
    expect_operand: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Lexer {
            source: Source::new(text),
            expect_operand: true,
        }
    }

    /// Lexes the whole text.
    pub fn tokenize(text: &str) -> Result<Vec<Token>, ExprError> {
        let mut lexer = Lexer::new(text);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, ExprError> {
        let Some(c) = self.source.next_significant()? else {
            return Ok(None);
        };
        let position = self.source.position();
        let kind = self.read(c, position, 0)?;
        self.expect_operand = matches!(kind, TokenKind::Operator(op) if op != Operator::CloseParen);
        Ok(Some(Token::new(kind, position)))
    }

    fn read(&mut self, c: char, position: Position, depth: usize) -> Result<TokenKind, ExprError> {
        let kind = match c {
            '(' => self.single(Operator::OpenParen),
            ')' => self.single(Operator::CloseParen),
            '+' => self.single(Operator::Add),
            '*' => self.single(Operator::Multiply),
            '-' if self.expect_operand && self.next_is_digit() => {
                TokenKind::Operand(self.number(position)?)
            }
            '-' => self.single(Operator::Subtract),
            '/' if self.expect_operand => TokenKind::Operand(self.regex(position)?),
            '/' => self.single(Operator::Divide),
            '"' => TokenKind::Operand(self.string(position)?),
            '>' | '<' | '!' | '=' => TokenKind::Operator(self.comparator(position)?),
            '[' => TokenKind::Operand(self.list(position, depth)?),
            c if c.is_ascii_digit() => TokenKind::Operand(self.number(position)?),
            c if is_delimiter(c) => {
                return Err(ExprError::syntax(
                    format!("Unexpected character '{}'", c),
                    position,
                ))
            }
            _ => self.word(),
        };
        Ok(kind)
    }

    fn single(&mut self, op: Operator) -> TokenKind {
        self.source.bump();
        TokenKind::Operator(op)
    }

    fn next_is_digit(&self) -> bool {
        self.source.peek_at(1).is_some_and(|c| c.is_ascii_digit())
    }

    fn number(&mut self, position: Position) -> Result<Value, ExprError> {
        let mut text = String::new();
        if self.source.peek() == Some('-') {
            text.push('-');
            self.source.bump();
        }
        while let Some(c) = self.source.peek() {
            if c.is_ascii_alphanumeric() || c == '.' {
                text.push(c);
                self.source.bump();
                // A sign directly after the exponent marker belongs to the number.
                if matches!(c, 'e' | 'E') {
                    if let Some(sign @ ('+' | '-')) = self.source.peek() {
                        text.push(sign);
                        self.source.bump();
                    }
                }
            } else {
                break;
            }
        }
        text.parse::<f64>().map(Value::Number).map_err(|_| {
            ExprError::syntax(format!("Malformed number \"{}\"", text), position)
        })
    }

    fn string(&mut self, position: Position) -> Result<Value, ExprError> {
        self.source.bump();
        let mut text = String::new();
        loop {
            match self.source.bump() {
                None => return Err(ExprError::syntax("Unterminated string", position)),
                Some('"') => break,
                Some('\\') => match self.source.bump() {
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some(other) => {
                        text.push('\\');
                        text.push(other);
                    }
                    None => return Err(ExprError::syntax("Unterminated string", position)),
                },
                Some(c) => text.push(c),
            }
        }
        Ok(Value::String(text))
    }

    fn regex(&mut self, position: Position) -> Result<Value, ExprError> {
        let unterminated = || ExprError::syntax("Unterminated regular expression", position);
        self.source.bump();
        let mut body = String::new();
        loop {
            match self.source.bump() {
                None => return Err(unterminated()),
                Some('/') => break,
                Some('\\') => match self.source.bump() {
                    Some('/') => body.push('/'),
                    Some(other) => {
                        body.push('\\');
                        body.push(other);
                    }
                    None => return Err(unterminated()),
                },
                Some(c) => body.push(c),
            }
        }
        let mut flags = Vec::new();
        while let Some(flag) = self.source.peek().filter(|c| c.is_ascii_alphabetic()) {
            if !REGEX_FLAGS.contains(&flag) {
                return Err(ExprError::syntax(
                    format!("Unknown regular expression flag '{}'", flag),
                    self.source.position(),
                ));
            }
            flags.push(flag);
            self.source.bump();
        }
        Ok(Value::Regex(pattern::with_flags(&body, &flags)))
    }

    fn comparator(&mut self, position: Position) -> Result<Operator, ExprError> {
        let mut symbol = String::new();
        if let Some(c) = self.source.bump() {
            symbol.push(c);
        }
        if self.source.peek() == Some('=') {
            symbol.push('=');
            self.source.bump();
        }
        Operator::from_symbol(&symbol).ok_or_else(|| {
            ExprError::syntax(format!("Illegal comparator \"{}\"", symbol), position)
        })
    }

    fn list(&mut self, open: Position, depth: usize) -> Result<Value, ExprError> {
        if depth >= MAX_LIST_DEPTH {
            return Err(ExprError::syntax(
                format!("List nesting exceeds {} levels", MAX_LIST_DEPTH),
                open,
            ));
        }
        let unterminated = || ExprError::syntax("Unterminated list", open);
        self.source.bump();
        let mut items = Vec::new();
        if self.source.next_significant()? == Some(']') {
            self.source.bump();
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.element(depth)?.ok_or_else(unterminated)?);
            match self.source.next_significant()? {
                None => return Err(unterminated()),
                Some(',') => {
                    self.source.bump();
                }
                Some(']') => {
                    self.source.bump();
                    return Ok(Value::List(items));
                }
                Some(c) => {
                    return Err(ExprError::syntax(
                        format!("Expected ',' or ']' in list, found '{}'", c),
                        self.source.position(),
                    ))
                }
            }
        }
    }

    /// Reads one list element. Only literals and placeholders are allowed.
    fn element(&mut self, depth: usize) -> Result<Option<Value>, ExprError> {
        let Some(c) = self.source.next_significant()? else {
            return Ok(None);
        };
        let position = self.source.position();
        if c == ',' || c == ']' {
            return Err(ExprError::syntax(
                format!("Expected list element, found '{}'", c),
                position,
            ));
        }
        self.expect_operand = true;
        match self.read(c, position, depth + 1)? {
            TokenKind::Operand(value) => Ok(Some(value)),
            TokenKind::Operator(op) => Err(ExprError::syntax(
                format!("Operator \"{}\" is not allowed inside a list", op),
                position,
            )),
        }
    }

    fn word(&mut self) -> TokenKind {
        let mut word = String::new();
        while let Some(c) = self.source.peek() {
            if is_delimiter(c) {
                break;
            }
            word.push(c);
            self.source.bump();
        }
        match word.as_str() {
            "true" => TokenKind::Operand(Value::Boolean(true)),
            "false" => TokenKind::Operand(Value::Boolean(false)),
            "null" => TokenKind::Operand(Value::Null),
            "and" => TokenKind::Operator(Operator::And),
            "or" => TokenKind::Operator(Operator::Or),
            "in" => TokenKind::Operator(Operator::In),
            "matches" => TokenKind::Operator(Operator::Matches),
            _ => TokenKind::Operand(Value::Placeholder(word)),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, ExprError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
