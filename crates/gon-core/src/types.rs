//! Arena storage for a parsed GON tree.
//!
//! A [`Document`] owns every node of one tree in a flat `Vec`. Composite nodes
//! refer to their children by [`NodeId`]; objects additionally keep a
//! name → position map into their child list. Slot 0 of every arena is the
//! shared Null node returned by lookups that fail; it is never renamed and
//! never gets children.
//!
//! Nodes are pushed bottom-up while parsing (children before their parent) and
//! the arena is read-only once [`parse_tokens`](crate::parser::parse_tokens)
//! returns. Callers navigate it through [`Value`] handles.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::encoder;
use crate::error::{GonError, Result};
use crate::hook::ErrorHook;
use crate::value::Value;

/// The kind of a GON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    String,
    Number,
    Bool,
    Object,
    Array,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Bool => "bool",
            Kind::Object => "object",
            Kind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The shared Null node every document reserves at slot 0.
    pub const NULL: NodeId = NodeId(0);
}

/// One node of the tree.
///
/// `text`, `int`, `float` and `boolean` make up the scalar payload; `children`
/// and `index` the composite payload. Which half is meaningful follows `kind`.
/// Number nodes carry both numeric forms, `integral` records whether the
/// literal itself was an integer literal.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub kind: Kind,
    pub name: String,
    pub text: String,
    pub int: i64,
    pub float: f64,
    pub boolean: bool,
    pub integral: bool,
    pub children: Vec<NodeId>,
    pub index: HashMap<String, usize>,
}

impl Node {
    pub fn null() -> Self {
        Self::with_kind(Kind::Null)
    }

    pub fn with_kind(kind: Kind) -> Self {
        Self {
            kind,
            name: String::new(),
            text: String::new(),
            int: 0,
            float: 0.0,
            boolean: false,
            integral: false,
            children: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a child, recording `name` in the lookup map for objects.
    /// A repeated name overwrites the map entry; the earlier child stays in
    /// `children`.
    pub fn push_child(&mut self, child: NodeId, name: Option<&str>) {
        if let Some(name) = name {
            self.index.insert(name.to_string(), self.children.len());
        }
        self.children.push(child);
    }
}

/// A parsed GON tree.
///
/// Cloning a document clones the whole arena; the error hook is shared.
#[derive(Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    hook: Arc<dyn ErrorHook>,
}

impl Document {
    /// An arena holding only the shared Null node. The root is Null until
    /// the parser sets it.
    pub(crate) fn empty(hook: Arc<dyn ErrorHook>) -> Self {
        Self {
            nodes: vec![Node::null()],
            root: NodeId::NULL,
            hook,
        }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn set_name(&mut self, id: NodeId, name: &str) {
        if id != NodeId::NULL {
            self.nodes[id.0].name = name.to_string();
        }
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Hand an error to this document's hook.
    pub(crate) fn report(&self, error: GonError) -> Result<()> {
        self.hook.report(error)
    }

    /// The root of the tree. For documents produced by
    /// [`load`](crate::load) or [`load_from_buffer`](crate::load_from_buffer)
    /// this is always an Object.
    pub fn root(&self) -> Value<'_> {
        Value::new(self, self.root)
    }

    /// The shared Null value of this document.
    pub fn null(&self) -> Value<'_> {
        Value::new(self, NodeId::NULL)
    }

    /// Number of nodes in the arena, the shared Null node included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The hook this document reports accessor errors to.
    pub fn hook(&self) -> &Arc<dyn ErrorHook> {
        &self.hook
    }

    /// Render the document in file form: every top-level member on its own
    /// line, without the outer braces.
    pub fn to_text(&self) -> Result<String> {
        encoder::to_document_text(&self.root())
    }

    /// Write the document to `path` in file form.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.root().save(path)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root())
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}
