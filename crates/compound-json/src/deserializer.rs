//! JSON text → [`Value`] tree.
//!
//! A single-pass recursive-descent parser. The scan state (byte cursor,
//! 1-based line and column) lives in a [`Cursor`] local to one call, and every
//! error carries the line and column at which parsing stopped.
//!
//! # Grammar notes
//!
//! - Dispatch is on the first character of a value: `{`, `[`, `"`, an ASCII
//!   letter (literal word), or a digit / `+` / `-` (number).
//! - Literals are the case-sensitive words `null`, `true` and `false`.
//! - Numbers are scanned greedily over digits, `.`, `e`/`E`, `+` and `-`, then
//!   read as `i64` if possible and as `f64` otherwise. `42` is an `Int`,
//!   `42.0` and `1e3` are `Float`s, and integers outside the `i64` range fall
//!   through to `Float`.
//! - `\uXXXX` decodes to one UTF-16 code unit. Surrogate halves are not paired
//!   up; a lone surrogate becomes U+FFFD. Unknown escapes (`\q`) yield the
//!   escaped character itself.
//! - Only the first complete value is parsed. Whatever follows it is ignored
//!   unless [`DeserializeOptions::allow_trailing_content`] is turned off.

use crate::compound::Compound;
use crate::error::{JsonError, Result};
use crate::list::List;
use crate::value::Value;
use tracing::{debug, trace};

const COMPOUND_OPEN: char = '{';
const COMPOUND_CLOSE: char = '}';
const LIST_OPEN: char = '[';
const LIST_CLOSE: char = ']';
const SEPARATOR: char = ',';
const VALUE_DEFINITION: char = ':';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Default bound on compound/list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`Deserializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeserializeOptions {
    /// Maximum number of nested compounds/lists. Guards the recursion against
    /// hostile input.
    pub max_depth: usize,
    /// When `false`, anything other than whitespace after the top-level value
    /// is an error.
    pub allow_trailing_content: bool,
}

impl DeserializeOptions {
    /// Default depth limit, trailing content rejected.
    pub const fn strict() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_content: false,
        }
    }
}

impl Default for DeserializeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_content: true,
        }
    }
}

/// Parse `text` with the default [`DeserializeOptions`].
///
/// ```
/// use compound_json::{deserialize, Value};
///
/// let value = deserialize(r#"{"name": "Alice", "age": 30}"#).unwrap();
/// let Value::Compound(person) = value else { panic!("expected a compound") };
/// assert_eq!(person.get_verified::<&str>("name").unwrap(), "Alice");
/// assert_eq!(person.get_verified::<i64>("age").unwrap(), 30);
/// ```
pub fn deserialize(text: &str) -> Result<Value> {
    Deserializer::new().deserialize(text)
}

/// A reusable parser configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deserializer {
    options: DeserializeOptions,
}

impl Deserializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DeserializeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DeserializeOptions {
        self.options
    }

    /// Parse the first JSON value in `text`.
    ///
    /// Either the whole tree is returned or a [`JsonError::Deserialize`]; no
    /// partial tree escapes a failed call.
    pub fn deserialize(&self, text: &str) -> Result<Value> {
        let mut parser = Parser {
            cursor: Cursor::new(text),
            options: self.options,
            depth: 0,
        };
        let result = parser.parse_document();
        match &result {
            Ok(value) => trace!(
                bytes = text.len(),
                root = value.type_name(),
                "deserialized JSON document"
            ),
            Err(JsonError::Deserialize {
                message,
                line,
                column,
            }) => debug!(line, column, %message, "JSON deserialization failed"),
            Err(_) => {}
        }
        result
    }
}

/// Position-tracking view over the input text.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume one character. A newline moves to column 1 of the next line.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn error(&self, message: impl Into<String>) -> JsonError {
        JsonError::Deserialize {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    options: DeserializeOptions,
    depth: usize,
}

impl Parser<'_> {
    fn parse_document(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;

        if !self.options.allow_trailing_content {
            self.cursor.skip_whitespace();
            if !self.cursor.is_at_end() {
                return Err(self.cursor.error("Unexpected trailing content."));
            }
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek() {
            Some(COMPOUND_OPEN) => self.parse_compound().map(Value::Compound),
            Some(LIST_OPEN) => self.parse_list().map(Value::List),
            Some(QUOTE) => self.parse_string().map(Value::Str),
            Some(c) if c.is_ascii_alphabetic() => self.parse_literal(),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => self.parse_number(),
            _ => Err(self.cursor.error("Invalid value.")),
        }
    }

    /// Count one level of nesting, failing past `max_depth`. Called with the
    /// cursor on the opening bracket.
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.cursor.error(format!(
                "Maximum nesting depth of {} exceeded.",
                self.options.max_depth
            )));
        }
        Ok(())
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.cursor.peek() != Some(expected) {
            return Err(self.cursor.error(format!("Expected '{expected}'.")));
        }
        self.cursor.advance();
        Ok(())
    }

    /// After an entry: consume a separator if present and report whether one
    /// was consumed. Anything but a separator or `close` is an error.
    fn parse_separator(&mut self, close: char) -> Result<bool> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(SEPARATOR) => {
                self.cursor.advance();
                self.cursor.skip_whitespace();
                Ok(true)
            }
            Some(c) if c == close => Ok(false),
            None => Ok(false),
            Some(_) => Err(self
                .cursor
                .error(format!("Expected '{SEPARATOR}' or '{close}'."))),
        }
    }

    /// `{ "key": value, ... }`
    ///
    /// `expecting_entry` is set exactly when a separator was just consumed, so
    /// `{"a":1,}` fails on the `}` instead of closing the compound.
    fn parse_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        self.expect(COMPOUND_OPEN)?;
        self.cursor.skip_whitespace();

        let mut compound = Compound::new();
        let mut expecting_entry = false;
        loop {
            match self.cursor.peek() {
                None => break,
                Some(COMPOUND_CLOSE) if !expecting_entry => break,
                _ => {}
            }

            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some(VALUE_DEFINITION) {
                return Err(self.cursor.error("Expected value assignment after key."));
            }
            self.cursor.advance();
            self.cursor.skip_whitespace();

            let value = self.parse_value()?;
            compound.add(key, value)?;

            expecting_entry = self.parse_separator(COMPOUND_CLOSE)?;
        }

        self.expect(COMPOUND_CLOSE)?;
        self.depth -= 1;
        Ok(compound)
    }

    /// `[ value, ... ]`, with the same separator discipline as compounds.
    fn parse_list(&mut self) -> Result<List> {
        self.enter()?;
        self.expect(LIST_OPEN)?;
        self.cursor.skip_whitespace();

        let mut list = List::new();
        let mut expecting_entry = false;
        loop {
            match self.cursor.peek() {
                None => break,
                Some(LIST_CLOSE) if !expecting_entry => break,
                _ => {}
            }

            let value = self.parse_value()?;
            list.add(value)?;

            expecting_entry = self.parse_separator(LIST_CLOSE)?;
        }

        self.expect(LIST_CLOSE)?;
        self.depth -= 1;
        Ok(list)
    }

    fn parse_string(&mut self) -> Result<String> {
        if self.cursor.peek() != Some(QUOTE) {
            return Err(self.cursor.error("Missing starting quote for string."));
        }
        self.cursor.advance();

        let mut out = String::new();
        loop {
            match self.cursor.advance() {
                None => return Err(self.cursor.error("Missing ending quote for string.")),
                Some(QUOTE) => return Ok(out),
                Some(ESCAPE) => {
                    let ch = self.parse_escape()?;
                    out.push(ch);
                }
                Some(ch) => out.push(ch),
            }
        }
    }

    /// Decode the escape sequence following a consumed backslash.
    fn parse_escape(&mut self) -> Result<char> {
        let Some(escaped) = self.cursor.advance() else {
            return Err(self.cursor.error("Incomplete escape sequence."));
        };
        Ok(match escaped {
            't' => '\t',
            'n' => '\n',
            'f' => '\u{0C}',
            'r' => '\r',
            'b' => '\u{08}',
            'u' => self.parse_codepoint()?,
            other => other,
        })
    }

    /// Exactly four hex digits, one UTF-16 code unit.
    fn parse_codepoint(&mut self) -> Result<char> {
        let mut digits = String::with_capacity(4);
        for _ in 0..4 {
            match self.cursor.advance() {
                Some(ch) => digits.push(ch),
                None => return Err(self.cursor.error("Incomplete codepoint.")),
            }
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(self.cursor.error(format!("Invalid codepoint {digits}.")));
        }
        let unit = u32::from_str_radix(&digits, 16)
            .map_err(|_| self.cursor.error(format!("Invalid codepoint {digits}.")))?;
        Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn parse_literal(&mut self) -> Result<Value> {
        let start = self.cursor.pos;
        while self.cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.cursor.advance();
        }
        let word = &self.cursor.text[start..self.cursor.pos];

        match word {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(self.cursor.error(format!("Unknown literal \"{word}\"."))),
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.cursor.pos;
        while self.cursor.peek().is_some_and(is_number_char) {
            self.cursor.advance();
        }
        let token = &self.cursor.text[start..self.cursor.pos];

        match parse_number_token(token) {
            Some(value) => Ok(value),
            None => Err(self
                .cursor
                .error(format!("Couldn't parse number \"{token}\"."))),
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Integer first, then float. A float that overflows to infinity is rejected
/// because it could never be written back out.
fn parse_number_token(token: &str) -> Option<Value> {
    if let Ok(i) = token.parse::<i64>() {
        return Some(Value::Int(i));
    }
    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Value::Float(f)),
        _ => None,
    }
}
