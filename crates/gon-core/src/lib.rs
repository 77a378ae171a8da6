//! # gon-core
//!
//! Pure-Rust parser, value tree and serializer for **GON (Glaiel Object Notation)**.
//!
//! GON is JSON without the punctuation: braces for objects, brackets for
//! arrays, bare or quoted scalars and `#` line comments. `=`, `,` and `:` are
//! accepted as separators but never required, and a file is an object body
//! without enclosing braces.
//!
//! ```text
//! # window settings
//! window {
//!     title "Main Window"
//!     size [640 480]
//!     fullscreen false
//! }
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use gon_core::load_from_buffer;
//!
//! let doc = load_from_buffer("window { title \"Main\" size [640 480] }").unwrap();
//! let window = doc.root().get("window").unwrap();
//! assert_eq!(window.get("title").unwrap().as_str().unwrap(), "Main");
//! assert_eq!(window.lookup("size.1").as_int().unwrap(), 480);
//!
//! // Missing keys are not errors; defaulted accessors never fail.
//! assert!(window.get("vsync").unwrap().as_bool_or(true));
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — text → tokens (normal/string/comment state machine)
//! - [`parser`] — tokens → [`Document`] by recursive descent; [`Loader`], [`load`]
//! - [`types`] — the arena ([`Document`], [`Kind`], [`NodeId`])
//! - [`value`] — [`Value`] handles with strict and defaulted accessors
//! - [`encoder`] — tree → GON text, and the debug dump
//! - `path` — dotted path lookup (`a.b.0`), exposed as [`Value::lookup`]
//! - [`json`] — `serde` export and JSON helpers
//! - [`hook`] — the error-reporting hook ([`FailFast`], [`LogAndContinue`])
//! - [`error`] — error types

pub mod encoder;
pub mod error;
pub mod hook;
pub mod json;
pub mod parser;
mod path;
pub mod tokenizer;
pub mod types;
pub mod value;

pub use error::{Delimiter, GonError, Result};
pub use hook::{error_hook, reset_error_hook, set_error_hook, ErrorHook, FailFast, LogAndContinue};
pub use json::{to_json, to_json_pretty, to_json_value};
pub use parser::{load, load_from_buffer, parse_tokens, Loader, TokenCursor, MAX_DEPTH};
pub use tokenizer::{tokenize, Mode, Tokenizer};
pub use types::{Document, Kind, NodeId};
pub use value::Value;
