//! List documents: YAML (or JSON) descriptions of a todo list.
//!
//! ```yaml
//! title: Today's Todos
//! todos:
//!   - title: Buy milk
//!   - title: Clean room
//!     done: true
//! ```
//!
//! Entries are kept as untyped values until they reach
//! [`TodoList::add_value`], so an entry that is not a todo object surfaces as
//! [`TodoError::TypeMismatch`](crate::error::TodoError::TypeMismatch) rather
//! than a parse error.
//!
//! Plain YAML scalars are text wherever a title is expected: `title: 2024`
//! names the list "2024" and `- title: 1984` names a todo "1984".

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::list::TodoList;

#[derive(Debug, Default, Deserialize)]
struct ListDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    todos: Vec<Value>,
}

/// Parses a list document, using `default_title` when it names no title.
///
/// An empty document yields an empty list.
///
/// # Errors
///
/// Returns [`TodoError::Document`](crate::error::TodoError::Document) for
/// malformed YAML and
/// [`TodoError::TypeMismatch`](crate::error::TodoError::TypeMismatch) for an
/// entry that is not a todo object.
pub fn parse_document(text: &str, default_title: &str) -> Result<TodoList> {
    let doc: ListDocument = if text.trim().is_empty() {
        ListDocument::default()
    } else {
        serde_yaml::from_str(text)?
    };

    let mut list = TodoList::new(doc.title.unwrap_or_else(|| default_title.to_owned()));
    for mut entry in doc.todos {
        scalar_title_as_text(&mut entry);
        list.add_value(&entry)?;
    }
    Ok(list)
}

/// Rewrites a numeric or boolean `title` of a mapping entry as a string.
fn scalar_title_as_text(entry: &mut Value) {
    let Value::Object(map) = entry else {
        return;
    };
    let Some(title) = map.get_mut("title") else {
        return;
    };
    let text = match title {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return,
    };
    *title = Value::String(text);
}
