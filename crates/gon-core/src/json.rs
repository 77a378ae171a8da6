//! JSON export through `serde`.
//!
//! [`Value`] implements [`Serialize`], so any serde format can consume a GON
//! tree. Mapping:
//!
//! - Null → `null`, Bool → boolean, String → string
//! - Number → integer when the literal was an integer literal, float
//!   otherwise; non-finite floats (`inf`, `nan`) become `null`
//! - Array → array
//! - Object → object with one entry per distinct name, holding the value
//!   the name resolves to (the last definition), placed where that
//!   definition appears

use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::error::Result;
use crate::types::Kind;
use crate::value::Value;

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let node = self.node();
        match node.kind {
            Kind::Null => serializer.serialize_unit(),
            Kind::Bool => serializer.serialize_bool(node.boolean),
            Kind::String => serializer.serialize_str(&node.text),
            Kind::Number if node.integral => serializer.serialize_i64(node.int),
            Kind::Number if node.float.is_finite() => serializer.serialize_f64(node.float),
            Kind::Number => serializer.serialize_unit(),
            Kind::Array => {
                let mut seq = serializer.serialize_seq(Some(node.children.len()))?;
                for child in self.children() {
                    seq.serialize_element(&child)?;
                }
                seq.end()
            }
            Kind::Object => {
                let mut map = serializer.serialize_map(Some(node.index.len()))?;
                for (position, child) in self.children().enumerate() {
                    if child.is_current_member_of(self, position) {
                        map.serialize_entry(child.name(), &child)?;
                    }
                }
                map.end()
            }
        }
    }
}

/// Compact JSON text for `value`.
///
/// ```
/// let doc = gon_core::load_from_buffer("name Alice scores [95 87]").unwrap();
/// let json = gon_core::to_json(&doc.root()).unwrap();
/// assert_eq!(json, r#"{"name":"Alice","scores":[95,87]}"#);
/// ```
pub fn to_json(value: &Value<'_>) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Pretty-printed JSON text for `value`.
pub fn to_json_pretty(value: &Value<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `value` as a `serde_json::Value`.
pub fn to_json_value(value: &Value<'_>) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
