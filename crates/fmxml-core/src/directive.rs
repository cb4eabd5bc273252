//! Directive vocabulary
//!
//! A directive is one key/value entry of a command set. The keys the remote
//! server understands form a fixed vocabulary; everything else (field names,
//! raw keys handed in by the caller) is carried as `DirectiveKey::Custom`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest and highest sort rank accepted by the server.
pub const MIN_SORT_RANK: u8 = 1;
pub const MAX_SORT_RANK: u8 = 9;

/// Key of a single directive
///
/// The wire strings are fixed by the remote API and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectiveKey {
    /// `-db`: target database (scope)
    Db,
    /// `-lay`: target layout (scope)
    Lay,
    /// `-findall`
    FindAll,
    /// `-find`
    Find,
    /// `-new`
    New,
    /// `-edit`
    Edit,
    /// `-delete`
    Delete,
    /// `-recid`: internal record identifier
    RecId,
    /// `-script`
    Script,
    /// `-script.param`
    ScriptParam,
    /// `-max`
    Max,
    /// `-skip`
    Skip,
    /// `-sortfield.<rank>`
    SortField(u8),
    /// `-sortorder.<rank>`
    SortOrder(u8),
    /// A field name or any other caller-supplied key
    Custom(String),
}

impl DirectiveKey {
    /// Render the exact key the remote API expects
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            DirectiveKey::Db => Cow::Borrowed("-db"),
            DirectiveKey::Lay => Cow::Borrowed("-lay"),
            DirectiveKey::FindAll => Cow::Borrowed("-findall"),
            DirectiveKey::Find => Cow::Borrowed("-find"),
            DirectiveKey::New => Cow::Borrowed("-new"),
            DirectiveKey::Edit => Cow::Borrowed("-edit"),
            DirectiveKey::Delete => Cow::Borrowed("-delete"),
            DirectiveKey::RecId => Cow::Borrowed("-recid"),
            DirectiveKey::Script => Cow::Borrowed("-script"),
            DirectiveKey::ScriptParam => Cow::Borrowed("-script.param"),
            DirectiveKey::Max => Cow::Borrowed("-max"),
            DirectiveKey::Skip => Cow::Borrowed("-skip"),
            DirectiveKey::SortField(rank) => Cow::Owned(format!("-sortfield.{}", rank)),
            DirectiveKey::SortOrder(rank) => Cow::Owned(format!("-sortorder.{}", rank)),
            DirectiveKey::Custom(name) => Cow::Borrowed(name.as_str()),
        }
    }

    /// Map a raw key back onto the vocabulary
    ///
    /// Known wire strings become their variant, so `"-find"` handed in as a
    /// raw key is still recognised as the find operation. Sort keys are only
    /// recognised for ranks 1 through 9; anything else is `Custom`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "-db" => DirectiveKey::Db,
            "-lay" => DirectiveKey::Lay,
            "-findall" => DirectiveKey::FindAll,
            "-find" => DirectiveKey::Find,
            "-new" => DirectiveKey::New,
            "-edit" => DirectiveKey::Edit,
            "-delete" => DirectiveKey::Delete,
            "-recid" => DirectiveKey::RecId,
            "-script" => DirectiveKey::Script,
            "-script.param" => DirectiveKey::ScriptParam,
            "-max" => DirectiveKey::Max,
            "-skip" => DirectiveKey::Skip,
            _ => {
                if let Some(rank) = raw.strip_prefix("-sortfield.").and_then(parse_rank) {
                    DirectiveKey::SortField(rank)
                } else if let Some(rank) = raw.strip_prefix("-sortorder.").and_then(parse_rank) {
                    DirectiveKey::SortOrder(rank)
                } else {
                    DirectiveKey::Custom(raw.to_string())
                }
            }
        }
    }

    /// True for the mutually exclusive operation markers
    ///
    /// Both find variants share `-find`, so six operations use five markers.
    pub fn is_operation(&self) -> bool {
        matches!(
            self,
            DirectiveKey::FindAll
                | DirectiveKey::Find
                | DirectiveKey::New
                | DirectiveKey::Edit
                | DirectiveKey::Delete
        )
    }

    /// True for the scope directives written by priming
    pub fn is_scope(&self) -> bool {
        matches!(self, DirectiveKey::Db | DirectiveKey::Lay)
    }
}

fn parse_rank(digits: &str) -> Option<u8> {
    let rank: u8 = digits.parse().ok()?;
    // "01" parses to 1 but is not the wire form of rank 1
    if digits.len() == 1 && (MIN_SORT_RANK..=MAX_SORT_RANK).contains(&rank) {
        Some(rank)
    } else {
        None
    }
}

impl fmt::Display for DirectiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<&str> for DirectiveKey {
    fn from(raw: &str) -> Self {
        DirectiveKey::parse(raw)
    }
}

impl From<String> for DirectiveKey {
    fn from(raw: String) -> Self {
        DirectiveKey::parse(&raw)
    }
}

/// Value of a single directive
///
/// Markers carry no value (`-find`); everything else is text or an integer.
/// Serializes as JSON `null`, string or number respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Marker,
    Text(String),
    Integer(i64),
}

impl DirectiveValue {
    /// The value as it goes on the wire; `None` for a marker
    pub fn as_wire(&self) -> Option<Cow<'_, str>> {
        match self {
            DirectiveValue::Marker => None,
            DirectiveValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
            DirectiveValue::Integer(n) => Some(Cow::Owned(n.to_string())),
        }
    }

    /// True when the value cannot serve as a required identifier
    ///
    /// Markers, whitespace-only text and zero (as integer or text) count as
    /// missing.
    pub fn is_blank(&self) -> bool {
        match self {
            DirectiveValue::Marker => true,
            DirectiveValue::Text(text) => matches!(text.trim(), "" | "0"),
            DirectiveValue::Integer(n) => *n == 0,
        }
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::Text(value.to_string())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::Text(value)
    }
}

impl From<&String> for DirectiveValue {
    fn from(value: &String) -> Self {
        DirectiveValue::Text(value.clone())
    }
}

impl From<i64> for DirectiveValue {
    fn from(value: i64) -> Self {
        DirectiveValue::Integer(value)
    }
}

impl From<i32> for DirectiveValue {
    fn from(value: i32) -> Self {
        DirectiveValue::Integer(i64::from(value))
    }
}

impl From<u32> for DirectiveValue {
    fn from(value: u32) -> Self {
        DirectiveValue::Integer(i64::from(value))
    }
}

impl From<u8> for DirectiveValue {
    fn from(value: u8) -> Self {
        DirectiveValue::Integer(i64::from(value))
    }
}

impl<T: Into<DirectiveValue>> From<Option<T>> for DirectiveValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DirectiveValue::Marker, Into::into)
    }
}
