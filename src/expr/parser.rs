//! Recursive-descent parser for canonical expression text.
//!
//! ```text
//! expr := term ('*' term)*
//! term := 'sin(' expr ')' | 'cos(' expr ')' | 'x' | 'y' | 'pi' | '(' expr ')'
//! ```
//!
//! Whitespace is ignored everywhere. `*` folds to the left. The grammar has
//! no `pi*` lookahead, so `sin(pi*x)` is `Sin(Times(ConstPi, VarX))`.
//! Nesting of `sin(`, `cos(` and `(` is limited to [`MAX_NESTING`] levels.

use super::Expr;
use crate::error::{Expected, SyntaxError};

/// Deepest accepted nesting of `sin(`, `cos(` and `(` groups. Generated
/// trees never come close; the limit keeps hostile text off the stack.
pub const MAX_NESTING: usize = 256;

/// Parse expression text into a tree.
///
/// # Errors
///
/// Returns a [`SyntaxError`] at the first character that does not fit the
/// grammar, including anything left over after a complete expression.
pub fn parse(text: &str) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(text);
    let expr = parser.expr()?;
    if parser.peek().is_some() {
        return Err(parser.error(Expected::End));
    }
    Ok(expr)
}

struct Parser {
    /// Non-whitespace characters with their character index in the input.
    chars: Vec<(usize, char)>,
    /// Cursor into `chars`.
    pos: usize,
    /// Input length in characters, reported at end of input.
    len: usize,
    /// Currently open groups.
    depth: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        let chars: Vec<(usize, char)> = text
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();
        Self {
            chars,
            pos: 0,
            len: text.chars().count(),
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn error(&self, expected: Expected) -> SyntaxError {
        match self.chars.get(self.pos) {
            Some(&(position, c)) => SyntaxError {
                position,
                found: Some(c),
                expected,
            },
            None => SyntaxError {
                position: self.len,
                found: None,
                expected,
            },
        }
    }

    /// Consume `literal` character by character.
    fn expect(&mut self, literal: &'static str) -> Result<(), SyntaxError> {
        for want in literal.chars() {
            if self.peek() != Some(want) {
                return Err(self.error(Expected::Literal(literal)));
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// Open a group, failing at the opening character once too deep.
    fn open(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(Expected::Shallower));
        }
        self.depth += 1;
        Ok(())
    }

    /// Consume the closing `)` of a group.
    fn close(&mut self) -> Result<(), SyntaxError> {
        self.expect(")")?;
        self.depth -= 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, SyntaxError> {
        let mut lhs = self.term()?;
        while self.peek() == Some('*') {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::times(lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some('s') => {
                self.open()?;
                self.expect("sin(")?;
                let arg = self.expr()?;
                self.close()?;
                Ok(Expr::sin(arg))
            }
            Some('c') => {
                self.open()?;
                self.expect("cos(")?;
                let arg = self.expr()?;
                self.close()?;
                Ok(Expr::cos(arg))
            }
            Some('x') => {
                self.pos += 1;
                Ok(Expr::VarX)
            }
            Some('y') => {
                self.pos += 1;
                Ok(Expr::VarY)
            }
            Some('p') => {
                self.expect("pi")?;
                Ok(Expr::ConstPi)
            }
            Some('(') => {
                self.open()?;
                self.pos += 1;
                let inner = self.expr()?;
                self.close()?;
                Ok(inner)
            }
            _ => Err(self.error(Expected::Term)),
        }
    }
}
