//! Character source: position-tracked cursor over the expression text.
//!
//! Comments are treated as trivia. `next_significant` skips them together
//! with whitespace, so the lexer only ever sees a comment-free stream. A
//! comment can only open where a token could start, which keeps `//` inside
//! a string or a regex literal intact.

use crate::error::ExprError;

/// 1-based line/column of a character in the original expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

pub struct Source {
    chars: Vec<char>,
    index: usize,
    position: Position,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Source {
            chars: text.chars().collect(),
            index: 0,
            position: Position::default(),
        }
    }

    /// Position of the current (not yet consumed) character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Looks `offset` characters past the current one without consuming.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Consumes the current character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Skips whitespace and comments, returning the next significant
    /// character without consuming it, or `None` at end of input.
    pub fn next_significant(&mut self) -> Result<Option<char>, ExprError> {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '/' && self.peek_at(1) == Some('/') {
                self.skip_line_comment();
            } else if c == '/' && self.peek_at(1) == Some('*') {
                self.skip_block_comment()?;
            } else {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    // Stops before the newline; the newline is ordinary whitespace.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ExprError> {
        let start = self.position;
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => return Err(ExprError::syntax("Unterminated block comment", start)),
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn significant(text: &str) -> String {
        let mut source = Source::new(text);
        let mut out = String::new();
        while let Some(c) = source.next_significant().unwrap() {
            out.push(c);
            source.bump();
        }
        out
    }

    #[test]
    fn test_strips_line_comments() {
        assert_eq!(significant("double//a\n"), "double");
        assert_eq!(significant("double//a"), "double");
        assert_eq!(significant("// line\ndouble"), "double");
    }

    #[test]
    fn test_strips_block_comments() {
        assert_eq!(significant("double< -1 /* min */, 0.98>"), "double<-1,0.98>");
        assert_eq!(significant("/* a\n b */x"), "x");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut source = Source::new("double/*");
        for _ in 0.."double".len() {
            source.next_significant().unwrap();
            source.bump();
        }
        let err = source.next_significant().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.position(), Some(Position::new(1, 7)));
    }

    #[test]
    fn test_tracks_line_and_column() {
        let mut source = Source::new("a\n  b");
        assert_eq!(source.position(), Position::new(1, 1));
        source.bump();
        source.bump();
        assert_eq!(source.position(), Position::new(2, 1));
        assert_eq!(source.next_significant().unwrap(), Some('b'));
        assert_eq!(source.position(), Position::new(2, 3));
    }

    #[test]
    fn test_comment_advances_position() {
        let mut source = Source::new("/* ab */ c");
        assert_eq!(source.next_significant().unwrap(), Some('c'));
        assert_eq!(source.position(), Position::new(1, 10));
        assert!(!source.is_at_end());
    }
}
