//! Actions accepted by the todo transition function.

use super::item::{title_from_value, TodoId, TodoItem};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of an [`Action::Update`]: the id to match and its new title.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TitleUpdate {
    pub id: TodoId,
    pub title: String,
}

/// A request to transition the todo collection.
///
/// On the wire actions are adjacently tagged, e.g.
/// `{"type":"DELETE_TODO","payload":3}`. Unknown tags decode to
/// [`Action::Unrecognized`] whatever their payload, and known payloads are
/// read as-is (an item without an id keeps [`TodoId::Missing`]). Only a
/// `SET_TODOS` payload that is not an array fails to decode.
///
/// # Example
///
/// ```rust
/// use todo_state::core::{Action, TodoId};
///
/// let action: Action = serde_json::from_str(r#"{"type":"DELETE_TODO","payload":3}"#).unwrap();
/// assert_eq!(action, Action::Delete(TodoId::Int(3)));
///
/// let json = r#"{"type":"TOGGLE_TODO","payload":{"id":1}}"#;
/// let unknown: Action = serde_json::from_str(json).unwrap();
/// assert_eq!(unknown, Action::Unrecognized);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// Replace the whole collection verbatim
    #[serde(rename = "SET_TODOS")]
    ReplaceAll(Vec<TodoItem>),

    /// Append one item
    #[serde(rename = "ADD_TODO")]
    Add(TodoItem),

    /// Remove the item with this id
    #[serde(rename = "DELETE_TODO")]
    Delete(TodoId),

    /// Replace the title of the item with this id
    #[serde(rename = "UPDATE_TODO")]
    Update(TitleUpdate),

    /// Anything else; applying it is a no-op
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

/// Wire envelope read before the tag is interpreted.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;

        let action = match kind.as_str() {
            "SET_TODOS" => match payload {
                Value::Array(items) => {
                    Self::ReplaceAll(items.iter().map(TodoItem::from_value).collect())
                }
                other => {
                    return Err(de::Error::custom(format!(
                        "SET_TODOS payload must be an array, got {other}"
                    )))
                }
            },
            "ADD_TODO" => Self::Add(TodoItem::from_value(&payload)),
            "DELETE_TODO" => Self::Delete(TodoId::from_value(Some(&payload))),
            "UPDATE_TODO" => Self::Update(TitleUpdate {
                id: TodoId::from_value(payload.get("id")),
                title: title_from_value(payload.get("title")),
            }),
            _ => Self::Unrecognized,
        };
        Ok(action)
    }
}

impl Action {
    /// Build an update action.
    pub fn update(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self::Update(TitleUpdate {
            id: id.into(),
            title: title.into(),
        })
    }

    /// Wire tag of the action, used for logging and the action log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReplaceAll(_) => "SET_TODOS",
            Self::Add(_) => "ADD_TODO",
            Self::Delete(_) => "DELETE_TODO",
            Self::Update(_) => "UPDATE_TODO",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
