//! Read-only handles into a parsed tree, with typed accessors.
//!
//! A [`Value`] is a `Copy` handle (document reference plus node id). Accessors
//! come in two flavours:
//!
//! - **strict** (`as_str`, `as_int`, `as_uint`, `as_number`, `as_bool`) report a
//!   [`GonError::Type`] to the document's hook when the kind does not match. With
//!   the default [`FailFast`](crate::FailFast) hook that error is returned; a hook
//!   that continues gets the node's raw payload back instead.
//! - **defaulted** (`as_str_or`, `as_int_or`, ...) return the fallback on a
//!   mismatch and never touch the hook.
//!
//! Missing keys are not errors: `get` on an object without the key, or on a
//! Null value, yields the shared Null value, so lookups chain freely.

use std::fmt;
use std::path::Path;

use crate::encoder;
use crate::error::{GonError, Result};
use crate::path;
use crate::types::{Document, Kind, Node, NodeId};

/// A handle to one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct Value<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Value<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub(crate) fn node(&self) -> &'a Node {
        self.doc.node(self.id)
    }

    fn null(&self) -> Value<'a> {
        self.doc.null()
    }

    fn type_error(&self, operation: &'static str, expected: &'static str) -> Result<()> {
        self.doc.report(GonError::Type {
            operation,
            expected,
            found: self.kind(),
        })
    }

    /// The document this value belongs to.
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.node().kind
    }

    /// The key this node was stored under in its parent object; empty for the
    /// root and for array elements.
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// True unless this is a Null value.
    pub fn exists(&self) -> bool {
        self.kind() != Kind::Null
    }

    /// True for the shared Null value that failed lookups return, as opposed
    /// to a `null` literal that appeared in the source.
    pub fn is_shared_null(&self) -> bool {
        self.id == NodeId::NULL
    }

    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    // ------------------------------------------------------------------
    // Strict accessors
    // ------------------------------------------------------------------

    /// The literal text of a String, Number or Bool.
    pub fn as_str(&self) -> Result<&'a str> {
        if !self.is_textual() {
            self.type_error("as_str", "a string, number or bool")?;
        }
        Ok(&self.node().text)
    }

    /// The integer form of a Number. Float literals are truncated toward zero.
    pub fn as_int(&self) -> Result<i64> {
        if self.kind() != Kind::Number {
            self.type_error("as_int", "a number")?;
        }
        Ok(self.node().int)
    }

    /// The integer form of a Number reinterpreted as unsigned; negative
    /// values wrap.
    pub fn as_uint(&self) -> Result<u64> {
        if self.kind() != Kind::Number {
            self.type_error("as_uint", "a number")?;
        }
        Ok(self.node().int as u64)
    }

    /// The floating-point form of a Number.
    pub fn as_number(&self) -> Result<f64> {
        if self.kind() != Kind::Number {
            self.type_error("as_number", "a number")?;
        }
        Ok(self.node().float)
    }

    pub fn as_bool(&self) -> Result<bool> {
        if self.kind() != Kind::Bool {
            self.type_error("as_bool", "a bool")?;
        }
        Ok(self.node().boolean)
    }

    // ------------------------------------------------------------------
    // Defaulted accessors
    // ------------------------------------------------------------------

    pub fn as_str_or(&self, default: &'a str) -> &'a str {
        if self.is_textual() {
            &self.node().text
        } else {
            default
        }
    }

    pub fn as_int_or(&self, default: i64) -> i64 {
        match self.kind() {
            Kind::Number => self.node().int,
            _ => default,
        }
    }

    pub fn as_uint_or(&self, default: u64) -> u64 {
        match self.kind() {
            Kind::Number => self.node().int as u64,
            _ => default,
        }
    }

    pub fn as_number_or(&self, default: f64) -> f64 {
        match self.kind() {
            Kind::Number => self.node().float,
            _ => default,
        }
    }

    pub fn as_bool_or(&self, default: bool) -> bool {
        match self.kind() {
            Kind::Bool => self.node().boolean,
            _ => default,
        }
    }

    fn is_textual(&self) -> bool {
        matches!(self.kind(), Kind::String | Kind::Number | Kind::Bool)
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Whether this is an object with a member named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.kind() == Kind::Object && self.node().index.contains_key(name)
    }

    /// Whether `index` is a valid position. Anything that is not an array
    /// counts as a one-element array of itself, so this is always true for
    /// non-arrays.
    pub fn contains_index(&self, index: i64) -> bool {
        if self.kind() != Kind::Array {
            return true;
        }
        usize::try_from(index).is_ok_and(|i| i < self.node().children.len())
    }

    /// Look up a member by name.
    ///
    /// Null values and objects without the key yield the shared Null value.
    /// Any other kind is a type error.
    pub fn get(&self, name: &str) -> Result<Value<'a>> {
        match self.kind() {
            Kind::Null => Ok(self.null()),
            Kind::Object => Ok(self.member(name).unwrap_or_else(|| self.null())),
            _ => {
                self.type_error("get", "an object")?;
                Ok(self.null())
            }
        }
    }

    /// Look up an array element by position.
    ///
    /// Non-arrays are a type error and positions past the end are an
    /// [`GonError::IndexOutOfRange`]; both yield the shared Null value if the
    /// hook continues.
    pub fn at(&self, index: usize) -> Result<Value<'a>> {
        if self.kind() != Kind::Array {
            self.type_error("at", "an array")?;
            return Ok(self.null());
        }
        match self.element(index) {
            Some(value) => Ok(value),
            None => {
                self.doc.report(GonError::IndexOutOfRange {
                    index,
                    len: self.node().children.len(),
                })?;
                Ok(self.null())
            }
        }
    }

    /// Number of array elements. Non-arrays are a type error.
    pub fn len(&self) -> Result<usize> {
        if self.kind() != Kind::Array {
            self.type_error("len", "an array")?;
        }
        Ok(self.node().children.len())
    }

    /// True for arrays and objects without children, and for scalars.
    pub fn is_empty(&self) -> bool {
        self.node().children.is_empty()
    }

    /// Resolve a dotted path such as `window.size.0`. Unresolvable paths
    /// yield the shared Null value; this never reports to the hook.
    pub fn lookup(&self, path: &str) -> Value<'a> {
        path::lookup(*self, path)
    }

    /// The member `name` resolves to, without reporting anything.
    pub(crate) fn member(&self, name: &str) -> Option<Value<'a>> {
        let node = self.node();
        if node.kind != Kind::Object {
            return None;
        }
        let position = *node.index.get(name)?;
        Some(Value::new(self.doc, node.children[position]))
    }

    /// The array element at `index`, without reporting anything.
    pub(crate) fn element(&self, index: usize) -> Option<Value<'a>> {
        let node = self.node();
        if node.kind != Kind::Array {
            return None;
        }
        node.children.get(index).map(|&id| Value::new(self.doc, id))
    }

    /// Children in insertion order. For objects this includes members whose
    /// name was later redefined.
    pub fn children(&self) -> impl Iterator<Item = Value<'a>> + 'a {
        let doc = self.doc;
        self.node()
            .children
            .iter()
            .map(move |&id| Value::new(doc, id))
    }

    /// Object members as `(name, value)` pairs in insertion order, redefined
    /// names included.
    pub fn members(&self) -> impl Iterator<Item = (&'a str, Value<'a>)> + 'a {
        self.children().map(|child| (child.name(), child))
    }

    /// Whether this child of an object is the one its name resolves to.
    pub(crate) fn is_current_member_of(&self, parent: &Value<'a>, position: usize) -> bool {
        parent.node().index.get(self.name()) == Some(&position)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Serialize this value to GON text.
    pub fn to_text(&self) -> String {
        encoder::to_text(self)
    }

    /// Serialize an object in file form (members without the outer braces).
    pub fn to_document_text(&self) -> Result<String> {
        encoder::to_document_text(self)
    }

    /// Write this object to `path` in file form.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_document_text()?;
        std::fs::write(path, text).map_err(|source| GonError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Human-readable dump of the tree, one line per node.
    pub fn debug_dump(&self) -> String {
        encoder::debug_dump(self)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        match node.kind {
            Kind::Null => write!(f, "null"),
            Kind::Bool => write!(f, "{}", node.boolean),
            Kind::Number => write!(f, "{}", node.text),
            Kind::String => write!(f, "{:?}", node.text),
            Kind::Array => f.debug_list().entries(self.children()).finish(),
            Kind::Object => f.debug_map().entries(self.members()).finish(),
        }
    }
}

/// Structural equality: same kinds, names and scalar values, children
/// compared in order.
impl<'b> PartialEq<Value<'b>> for Value<'_> {
    fn eq(&self, other: &Value<'b>) -> bool {
        let (a, b) = (self.node(), other.node());
        if a.kind != b.kind || a.name != b.name {
            return false;
        }
        match a.kind {
            Kind::Null => true,
            Kind::Bool => a.boolean == b.boolean,
            Kind::String | Kind::Number => a.text == b.text,
            Kind::Object | Kind::Array => {
                a.children.len() == b.children.len()
                    && self.children().zip(other.children()).all(|(x, y)| x == y)
            }
        }
    }
}
