//! GON tokenizer — raw text into a flat list of tokens.
//!
//! The scan is a small state machine over three modes:
//!
//! - **Normal**: `{ } [ ]` are emitted as single-character tokens, `= , :`
//!   and whitespace only end the pending bare token, `#` starts a comment,
//!   `"` starts a quoted string, anything else extends the pending token.
//! - **String**: characters are taken literally until an unescaped `"`.
//!   A backslash escapes the next character; `\n` becomes a newline, any
//!   other escaped character is kept as-is. The closing quote always emits a
//!   token, so `""` yields an empty token.
//! - **Comment**: everything up to and including the next newline is dropped.
//!
//! Tokens carry no kind tag. The parser re-derives structure from the text.
//! Tokenizing never fails: an unterminated string simply runs to the end of
//! input and is emitted there.

/// Tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    InString { escaped: bool },
    InComment,
}

/// Incremental tokenizer. Feed it one character at a time with
/// [`Tokenizer::feed`] and collect the tokens with [`Tokenizer::finish`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    mode: Mode,
    pending: String,
    tokens: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            pending: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Advance the state machine by one character.
    pub fn feed(&mut self, c: char) {
        match self.mode {
            Mode::Normal => self.feed_normal(c),
            Mode::InString { escaped: true } => {
                self.pending.push(if c == 'n' { '\n' } else { c });
                self.mode = Mode::InString { escaped: false };
            }
            Mode::InString { escaped: false } => match c {
                '\\' => self.mode = Mode::InString { escaped: true },
                '"' => {
                    self.tokens.push(std::mem::take(&mut self.pending));
                    self.mode = Mode::Normal;
                }
                _ => self.pending.push(c),
            },
            Mode::InComment => {
                if c == '\n' {
                    self.mode = Mode::Normal;
                }
            }
        }
    }

    fn feed_normal(&mut self, c: char) {
        match c {
            '{' | '}' | '[' | ']' => {
                self.flush();
                self.tokens.push(c.to_string());
            }
            '=' | ',' | ':' | ' ' | '\t' | '\r' | '\n' => self.flush(),
            '#' => {
                self.flush();
                self.mode = Mode::InComment;
            }
            '"' => {
                self.flush();
                self.mode = Mode::InString { escaped: false };
            }
            _ => self.pending.push(c),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.tokens.push(std::mem::take(&mut self.pending));
        }
    }

    /// Flush any pending token and return every token in order.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.tokens
    }
}

/// Split `text` into GON tokens.
///
/// ```
/// use gon_core::tokenize;
///
/// assert_eq!(tokenize("a=b,c:d"), vec!["a", "b", "c", "d"]);
/// assert_eq!(tokenize("list [1 2]"), vec!["list", "[", "1", "2", "]"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new();
    for c in text.chars() {
        tokenizer.feed(c);
    }
    tokenizer.finish()
}
