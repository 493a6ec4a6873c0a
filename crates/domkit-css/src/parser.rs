//! Selector parser
//!
//! Recursive descent over the selector text. Produces a [`SelectorList`] or a
//! [`SelectorError`] naming the first problem found.

use crate::selectors::{AttributeMatcher, AttributeSelector, NthExpression, PseudoClass, SelectorComponent};
use crate::{Combinator, ComplexSelector, CompoundSelector, SelectorError, SelectorList};

pub(crate) fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let mut parser = Parser::new(input);
    let list = parser.selector_list()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(list),
        Some(c) => Err(parser.error(format!("unexpected {c:?}"))),
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || c == '\\' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> SelectorError {
        SelectorError::Invalid {
            selector: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn unexpected(&self) -> SelectorError {
        match self.peek() {
            Some(c) => self.error(format!("unexpected {c:?} at offset {}", self.pos)),
            None => self.error("unexpected end of selector"),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Skip whitespace, returning whether any was consumed
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn selector_list(&mut self) -> Result<SelectorList, SelectorError> {
        let mut selectors = Vec::new();
        loop {
            self.skip_whitespace();
            selectors.push(self.complex()?);
            self.skip_whitespace();
            if !self.eat(',') {
                break;
            }
        }
        Ok(SelectorList(selectors))
    }

    fn complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_whitespace = self.skip_whitespace();
            let combinator = match self.peek() {
                Some('>') => Combinator::Child,
                Some('+') => Combinator::NextSibling,
                Some('~') => Combinator::SubsequentSibling,
                None | Some(',') | Some(')') => break,
                Some(_) if had_whitespace => Combinator::Descendant,
                Some(_) => return Err(self.unexpected()),
            };
            if combinator != Combinator::Descendant {
                self.bump();
                self.skip_whitespace();
            }
            compounds.push(self.compound()?);
            combinators.push(combinator);
        }

        Ok(ComplexSelector { compounds, combinators })
    }

    fn compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut parts = Vec::new();

        match self.peek() {
            Some('*') => {
                self.bump();
                parts.push(SelectorComponent::Universal);
            }
            Some(c) if is_ident_start(c) => {
                let name = self.ident()?;
                parts.push(SelectorComponent::Type(name.to_ascii_lowercase()));
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    parts.push(SelectorComponent::Id(self.ident()?));
                }
                Some('.') => {
                    self.bump();
                    parts.push(SelectorComponent::Class(self.ident()?));
                }
                Some('[') => {
                    self.bump();
                    parts.push(SelectorComponent::Attribute(self.attribute()?));
                }
                Some(':') => {
                    self.bump();
                    if self.peek() == Some(':') {
                        return Err(self.error("pseudo-elements are not supported in queries"));
                    }
                    parts.push(SelectorComponent::PseudoClass(self.pseudo_class()?));
                }
                _ => break,
            }
        }

        if parts.is_empty() {
            return Err(match self.peek() {
                None => self.error("expected a selector"),
                Some(_) => self.unexpected(),
            });
        }
        Ok(CompoundSelector(parts))
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        match (self.peek(), self.peek_at(1)) {
            (Some(c), _) if !is_ident_start(c) => return Err(self.unexpected()),
            (None, _) => return Err(self.error("expected identifier")),
            (Some('-'), Some(d)) if d.is_ascii_digit() => {
                return Err(self.error("identifier cannot start with '-' and a digit"));
            }
            _ => {}
        }

        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                out.push(self.escape()?);
            } else if is_ident_char(c) {
                self.bump();
                out.push(c);
            } else {
                break;
            }
        }

        if out.is_empty() || out == "-" {
            return Err(self.error("expected identifier"));
        }
        Ok(out)
    }

    /// Escape sequence after a backslash: up to six hex digits or one literal char
    fn escape(&mut self) -> Result<char, SelectorError> {
        let mut hex = String::new();
        while hex.len() < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            hex.extend(self.bump());
        }
        if hex.is_empty() {
            return self.bump().ok_or_else(|| self.error("dangling escape"));
        }
        if self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
        let code = u32::from_str_radix(&hex, 16).map_err(|_| self.error("bad escape"))?;
        Ok(char::from_u32(code)
            .filter(|&c| c != '\0')
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn quoted(&mut self) -> Result<String, SelectorError> {
        let Some(quote) = self.bump() else {
            return Err(self.error("expected string"));
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn attribute(&mut self) -> Result<AttributeSelector, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        if self.eat(']') {
            return Ok(AttributeSelector { name, matcher: None, case_insensitive: false });
        }

        let make: fn(String) -> AttributeMatcher = match (self.peek(), self.peek_at(1)) {
            (Some('='), _) => AttributeMatcher::Exact,
            (Some('~'), Some('=')) => AttributeMatcher::Contains,
            (Some('|'), Some('=')) => AttributeMatcher::DashMatch,
            (Some('^'), Some('=')) => AttributeMatcher::Prefix,
            (Some('$'), Some('=')) => AttributeMatcher::Suffix,
            (Some('*'), Some('=')) => AttributeMatcher::Substring,
            _ => return Err(self.unexpected()),
        };
        if !self.eat('=') {
            self.bump();
            self.bump();
        }

        self.skip_whitespace();
        let value = match self.peek() {
            Some('"') | Some('\'') => self.quoted()?,
            _ => self.ident()?,
        };
        self.skip_whitespace();

        let case_insensitive = match self.peek() {
            Some('i') | Some('I') => {
                self.bump();
                true
            }
            Some('s') | Some('S') => {
                self.bump();
                false
            }
            _ => false,
        };
        self.skip_whitespace();
        self.expect(']')?;

        Ok(AttributeSelector {
            name,
            matcher: Some(make(value)),
            case_insensitive,
        })
    }

    fn pseudo_class(&mut self) -> Result<PseudoClass, SelectorError> {
        let name = self.ident()?;

        if !self.eat('(') {
            return PseudoClass::from_name(&name)
                .ok_or_else(|| self.error(format!("unknown pseudo-class :{name}")));
        }

        let lower = name.to_ascii_lowercase();
        let pseudo = match lower.as_str() {
            "not" | "is" | "where" => {
                let inner = self.selector_list()?;
                self.skip_whitespace();
                match lower.as_str() {
                    "not" => PseudoClass::Not(inner),
                    "is" => PseudoClass::Is(inner),
                    _ => PseudoClass::Where(inner),
                }
            }
            "nth-child" | "nth-last-child" | "nth-of-type" | "nth-last-of-type" => {
                let arg = self.argument()?;
                let expr = NthExpression::parse(&arg)
                    .ok_or_else(|| self.error(format!("bad An+B expression {arg:?}")))?;
                match lower.as_str() {
                    "nth-child" => PseudoClass::NthChild(expr),
                    "nth-last-child" => PseudoClass::NthLastChild(expr),
                    "nth-of-type" => PseudoClass::NthOfType(expr),
                    _ => PseudoClass::NthLastOfType(expr),
                }
            }
            _ => return Err(self.error(format!("unknown pseudo-class :{name}()"))),
        };

        self.expect(')')?;
        Ok(pseudo)
    }

    /// Raw text up to (not including) the closing parenthesis
    fn argument(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ')' {
                return Ok(self.chars[start..self.pos].iter().collect());
            }
            self.pos += 1;
        }
        Err(self.error("unclosed '('"))
    }
}
