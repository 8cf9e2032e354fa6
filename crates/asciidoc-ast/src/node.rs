//! The typed syntax tree built from the parser's JSON output.
//!
//! Each JSON object has the shape
//! `{ "type": "AsciiDoc:TEXT", "text"?: "...", "startOffset": 0, "endOffset": 5, "children"?: [...] }`.
//! Offsets may arrive as integers, as floats (`5.0`), or as formatted number strings
//! (`"5.0"`); fractional parts are truncated.

use std::fmt;
use std::io::Read;
use std::ops::Range;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::AstError;
use crate::node_type::NodeType;

/// One element of the parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type", deserialize_with = "deserialize_type")]
    pub kind: NodeType,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(deserialize_with = "deserialize_offset")]
    pub start_offset: usize,
    #[serde(deserialize_with = "deserialize_offset")]
    pub end_offset: usize,
    #[serde(default, deserialize_with = "deserialize_children")]
    pub children: Vec<Node>,
}

impl Node {
    /// Build a leaf node. Mostly useful for tests and tools that synthesize trees.
    pub fn leaf(kind: NodeType, text: impl Into<String>, start_offset: usize) -> Self {
        let text = text.into();
        let end_offset = start_offset + text.len();
        Self {
            kind,
            text: Some(text),
            start_offset,
            end_offset,
            children: Vec::new(),
        }
    }

    /// Build a container spanning its children (empty span at 0 when there are none).
    pub fn container(kind: NodeType, children: Vec<Node>) -> Self {
        let start_offset = children.first().map_or(0, |c| c.start_offset);
        let end_offset = children.last().map_or(start_offset, |c| c.end_offset);
        Self {
            kind,
            text: None,
            start_offset,
            end_offset,
            children,
        }
    }

    /// Parse and validate a tree from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, AstError> {
        let node: Node = serde_json::from_str(json)?;
        node.validate()?;
        Ok(node)
    }

    /// Parse and validate a tree from a reader yielding a JSON document.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, AstError> {
        let node: Node = serde_json::from_reader(reader)?;
        node.validate()?;
        Ok(node)
    }

    /// A node carrying literal text. Its children, if any, are not visited.
    pub fn is_leaf(&self) -> bool {
        self.text.is_some()
    }

    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Number of source bytes covered by the node.
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Leaves in depth-first, pre-order order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Check that no span is inverted and that children stay inside their parent.
    pub fn validate(&self) -> Result<(), AstError> {
        if self.start_offset > self.end_offset {
            return Err(self.invalid_span("start offset is past end offset"));
        }
        for child in &self.children {
            if child.start_offset < self.start_offset || child.end_offset > self.end_offset {
                return Err(child.invalid_span(&format!(
                    "not contained in parent {}@{}..{}",
                    self.kind, self.start_offset, self.end_offset
                )));
            }
            child.validate()?;
        }
        Ok(())
    }

    fn invalid_span(&self, reason: &str) -> AstError {
        AstError::InvalidSpan {
            kind: self.kind,
            start: self.start_offset,
            end: self.end_offset,
            reason: reason.to_string(),
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(
            f,
            "{:indent$}{}@{}..{}",
            "",
            self.kind,
            self.start_offset,
            self.end_offset,
            indent = depth * 2
        )?;
        if let Some(text) = &self.text {
            write!(f, " {:?}", text)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented outline, one node per line: `TYPE@start..end "text"`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Iterator returned by [`Node::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_leaf() {
                return Some(node);
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}

fn deserialize_type<'de, D>(deserializer: D) -> Result<NodeType, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    tag.parse().map_err(de::Error::custom)
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Node>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_offset<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OffsetVisitor)
}

struct OffsetVisitor;

impl<'de> Visitor<'de> for OffsetVisitor {
    type Value = usize;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative offset as a number or a number string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<usize, E> {
        usize::try_from(v).map_err(|_| E::custom(format!("offset {v} out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<usize, E> {
        usize::try_from(v).map_err(|_| E::custom(format!("negative offset {v}")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<usize, E> {
        if !v.is_finite() || v < 0.0 || v >= usize::MAX as f64 {
            return Err(E::custom(format!("invalid offset {v}")));
        }
        Ok(v.trunc() as usize)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<usize, E> {
        parse_offset(v).ok_or_else(|| E::custom(format!("invalid offset {v:?}")))
    }
}

/// Parse a formatted offset such as `"12"`, `"12.0"`, or `"1.2E3"`, truncating fractions.
fn parse_offset(s: &str) -> Option<usize> {
    if s.contains(['e', 'E']) {
        let v: f64 = s.parse().ok()?;
        return (v.is_finite() && v >= 0.0 && v < usize::MAX as f64).then(|| v.trunc() as usize);
    }
    let integral = s.split('.').next()?;
    integral.parse().ok()
}
