//! Todo items and their identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a todo item.
///
/// Remote feeds hand out integers, while locally generated ids may be
/// either integers or UUID text. Serialized untagged, so JSON `1` and
/// `"abc"` both decode. An item that arrives without an id keeps
/// [`TodoId::Missing`], which serializes as `null`.
///
/// # Example
///
/// ```rust
/// use todo_state::core::TodoId;
///
/// let numeric: TodoId = serde_json::from_str("7").unwrap();
/// let text: TodoId = serde_json::from_str("\"a1\"").unwrap();
///
/// assert_eq!(numeric, TodoId::Int(7));
/// assert_eq!(text, TodoId::from("a1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
    #[default]
    Missing,
}

impl TodoId {
    /// The integer value, if this is a numeric id.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Read an id from arbitrary JSON without failing.
    ///
    /// Integers stay numeric, strings stay text, `null` or an absent value
    /// is `Missing`, and anything else keeps its JSON text.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Self::Int)
                .unwrap_or_else(|| Self::Text(n.to_string())),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => f.write_str("-"),
        }
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A unit of work with a unique identifier and a display title.
///
/// Unknown fields in incoming JSON (`userId`, `completed`, ...) are ignored.
/// Items are accepted as-is: a missing `id` becomes [`TodoId::Missing`] and
/// a missing `title` an empty string.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Read one feed element without failing.
    ///
    /// Non-object elements and ill-typed fields are kept rather than
    /// rejected; a non-string title keeps its JSON text.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: TodoId::from_value(value.get("id")),
            title: title_from_value(value.get("title")),
        }
    }
}

pub(crate) fn title_from_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Build a `Vec<TodoItem>` from `id => title` pairs.
///
/// # Example
///
/// ```
/// use todo_state::todos;
///
/// let items = todos![1 => "Buy milk", 2 => "Walk dog"];
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].title, "Walk dog");
/// ```
#[macro_export]
macro_rules! todos {
    ($($id:expr => $title:expr),* $(,)?) => {
        vec![$($crate::core::TodoItem::new($id, $title)),*]
    };
}
