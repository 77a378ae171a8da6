//! GON parser — recursive descent over the token list into a [`Document`].
//!
//! Three productions, chosen by the literal text of the next token:
//!
//! - `{` starts an **object**: pairs of `name value` until `}`.
//! - `[` starts an **array**: values until `]`.
//! - anything else is a **scalar**.
//!
//! Scalar type inference runs numeric detection first (integer literals with
//! optional `0x`/`0` base prefixes, then floats), after which the exact
//! literals `null`, `true` and `false` override whatever was inferred. The
//! tokenizer does not keep quoting, so `"true"` is a Bool as well.
//!
//! Whole documents are wrapped in an implicit object, so a file is a flat list
//! of `name value` pairs without braces at the top level.
//!
//! # Running out of tokens
//!
//! The cursor returns `None` once the tokens are exhausted and remembers that
//! it did. An object or array loop that hits the end reports a structural
//! error through the document's [`ErrorHook`], then stops and keeps whatever
//! it built so far. Each unclosed delimiter is reported once.
//!
//! # Nesting limit
//!
//! At most [`MAX_DEPTH`] objects and arrays may be open at once, the implicit
//! top-level object included. A deeper container is reported as
//! [`GonError::TooDeep`]; if the hook continues, its tokens are skipped up to
//! the matching close and a Null node takes its place.

use std::path::Path;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::{Delimiter, GonError, Result};
use crate::hook::{error_hook, ErrorHook};
use crate::tokenizer::tokenize;
use crate::types::{Document, Kind, Node, NodeId};

/// Deepest nesting of objects and arrays the parser will build.
pub const MAX_DEPTH: usize = 256;

/// Cursor over a token list with one token of lookahead.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [String],
    position: usize,
    exhausted: bool,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [String]) -> Self {
        Self {
            tokens,
            position: 0,
            exhausted: false,
        }
    }

    /// The next token without consuming it. `None` past the end, which also
    /// marks the cursor as exhausted.
    pub fn peek(&mut self) -> Option<&'t str> {
        let token = self.tokens.get(self.position).map(String::as_str);
        if token.is_none() {
            self.exhausted = true;
        }
        token
    }

    /// Consume and return the next token. `None` past the end, which also
    /// marks the cursor as exhausted.
    pub fn read(&mut self) -> Option<&'t str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Whether `peek` or `read` has ever run past the end.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

/// Parse a token list into a tree. The first value in `tokens` becomes the
/// root; tokens after it are ignored.
pub fn parse_tokens(tokens: &[String], hook: Arc<dyn ErrorHook>) -> Result<Document> {
    let mut builder = TreeBuilder {
        cursor: TokenCursor::new(tokens),
        doc: Document::empty(hook),
        depth: 0,
    };
    let root = builder.parse_value()?;
    builder.doc.set_root(root);
    if builder.cursor.remaining() > 0 {
        debug!(
            "ignoring {} token(s) after the root value",
            builder.cursor.remaining()
        );
    }
    Ok(builder.doc)
}

struct TreeBuilder<'t> {
    cursor: TokenCursor<'t>,
    doc: Document,
    depth: usize,
}

impl TreeBuilder<'_> {
    fn parse_value(&mut self) -> Result<NodeId> {
        match self.cursor.peek() {
            Some("{" | "[") if self.depth >= MAX_DEPTH => self.skip_too_deep(),
            Some("{") => {
                self.depth += 1;
                let id = self.parse_object();
                self.depth -= 1;
                id
            }
            Some("[") => {
                self.depth += 1;
                let id = self.parse_array();
                self.depth -= 1;
                id
            }
            Some(_) => Ok(self.parse_scalar()),
            None => {
                trace!("value expected but tokens ran out");
                Ok(self.doc.push(Node::null()))
            }
        }
    }

    fn parse_object(&mut self) -> Result<NodeId> {
        self.cursor.read(); // '{'
        let mut node = Node::with_kind(Kind::Object);

        loop {
            let name = match self.cursor.read() {
                Some("}") => break,
                Some(name) => name,
                None => {
                    self.report_unclosed(Delimiter::Brace, &node)?;
                    break;
                }
            };
            trace!("object member {name:?}");
            let child = self.parse_value()?;
            self.doc.set_name(child, name);
            node.push_child(child, Some(name));
        }

        Ok(self.doc.push(node))
    }

    fn parse_array(&mut self) -> Result<NodeId> {
        self.cursor.read(); // '['
        let mut node = Node::with_kind(Kind::Array);

        loop {
            match self.cursor.peek() {
                Some("]") => {
                    self.cursor.read();
                    break;
                }
                Some(_) => {}
                None => {
                    self.report_unclosed(Delimiter::Bracket, &node)?;
                    break;
                }
            }
            let child = self.parse_value()?;
            node.push_child(child, None);
        }

        Ok(self.doc.push(node))
    }

    /// Report the over-deep container at the cursor, then consume it whole.
    fn skip_too_deep(&mut self) -> Result<NodeId> {
        self.doc.report(GonError::TooDeep { limit: MAX_DEPTH })?;
        let mut open = 0usize;
        while let Some(token) = self.cursor.read() {
            match token {
                "{" | "[" => open += 1,
                "}" | "]" => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        Ok(self.doc.push(Node::null()))
    }

    fn parse_scalar(&mut self) -> NodeId {
        let text = self.cursor.read().unwrap_or_default();
        self.doc.push(infer_scalar(text))
    }

    fn report_unclosed(&self, delimiter: Delimiter, partial: &Node) -> Result<()> {
        let what = match delimiter {
            Delimiter::Brace => "object",
            Delimiter::Bracket => "array",
        };
        self.doc.report(GonError::Structural {
            delimiter,
            message: format!(
                "input ended inside an {what} after {} member(s)",
                partial.children.len()
            ),
        })
    }
}

/// Build a scalar node from one token, inferring its kind.
pub(crate) fn infer_scalar(text: &str) -> Node {
    let mut node = Node::with_kind(Kind::String);
    node.text = text.to_string();

    let int = parse_integer_literal(text);
    let float = text.parse::<f64>().ok();
    if int.is_some() || float.is_some() {
        node.kind = Kind::Number;
        node.integral = int.is_some();
        node.int = int.unwrap_or_else(|| float.map_or(0, |f| f as i64));
        node.float = float.unwrap_or_else(|| int.map_or(0.0, |i| i as f64));
    }

    match text {
        "null" => node.kind = Kind::Null,
        "true" => {
            node.kind = Kind::Bool;
            node.boolean = true;
        }
        "false" => {
            node.kind = Kind::Bool;
            node.boolean = false;
        }
        _ => {}
    }

    node
}

/// Parse an integer literal the way C's `strtoll` with base 0 reads it:
/// optional sign, then `0x`/`0X` hex, a leading `0` for octal, or decimal.
/// The whole text must be consumed. Values outside the `i64` range saturate.
fn parse_integer_literal(text: &str) -> Option<i64> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (16, hex)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(digits, radix).unwrap_or(u64::MAX));
    let signed = if negative { -magnitude } else { magnitude };
    Some(signed.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// Parses documents with a fixed [`ErrorHook`].
#[derive(Clone)]
pub struct Loader {
    hook: Arc<dyn ErrorHook>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader").finish_non_exhaustive()
    }
}

impl Loader {
    /// A loader using the current process-wide hook.
    pub fn new() -> Self {
        Self {
            hook: error_hook(),
        }
    }

    /// A loader reporting to `hook` instead of the process-wide one.
    pub fn with_hook(hook: Arc<dyn ErrorHook>) -> Self {
        Self { hook }
    }

    /// Parse a document body held in memory.
    ///
    /// The text is wrapped in an implicit object before tokenizing. The
    /// closing brace goes on its own line so a trailing comment without a
    /// newline cannot swallow it.
    pub fn load_from_buffer(&self, text: &str) -> Result<Document> {
        let wrapped = format!("{{{text}\n}}");
        let tokens = tokenize(&wrapped);
        debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
        let doc = parse_tokens(&tokens, Arc::clone(&self.hook))?;
        debug!("parsed {} nodes", doc.node_count() - 1);
        Ok(doc)
    }

    /// Read and parse the document at `path`.
    ///
    /// A read failure is reported to the hook as [`GonError::Io`]; if the hook
    /// continues, the result is an empty document.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!("read {} bytes from {}", bytes.len(), path.display());
                self.load_from_buffer(&String::from_utf8_lossy(&bytes))
            }
            Err(source) => {
                self.hook.report(GonError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                self.load_from_buffer("")
            }
        }
    }
}

/// Parse a document body with the process-wide hook.
///
/// ```
/// let doc = gon_core::load_from_buffer("width 640 title \"Main Window\"").unwrap();
/// let root = doc.root();
/// assert_eq!(root.get("width").unwrap().as_int().unwrap(), 640);
/// assert_eq!(root.get("title").unwrap().as_str().unwrap(), "Main Window");
/// ```
pub fn load_from_buffer(text: &str) -> Result<Document> {
    Loader::new().load_from_buffer(text)
}

/// Read and parse the document at `path` with the process-wide hook.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    Loader::new().load(path)
}
