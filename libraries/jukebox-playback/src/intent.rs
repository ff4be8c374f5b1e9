//! Listener intents
//!
//! Every control on the page and every keyboard shortcut maps to one
//! [`Intent`]. Row positions arrive as raw integers from the page and are
//! range-checked when dispatched.

use serde::{Deserialize, Serialize};

/// A request from the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Intent {
    /// Activate the catalog row
    PlayRow(i64),
    /// Add the catalog row to the manual queue
    EnqueueRow(i64),
    TogglePlay,
    Next,
    Previous,
    ToggleShuffle,
    ToggleLoop,
    /// Seek to a percentage of the current track
    Seek(f64),
    /// Set volume (0.0 - 1.0)
    Volume(f64),
    /// Check or uncheck a catalog row for playlist creation
    SelectRow { row: i64, selected: bool },
    SelectAll,
    DeselectAll,
    ShowQueue,
    ClearQueue,
    /// Save the current selection under a name
    CreatePlaylist(String),
    PlayPlaylist(String),
    DeletePlaylist(String),
}

impl Intent {
    /// Map a keyboard `code` to its shortcut
    ///
    /// Only `Space`, `ArrowRight` and `ArrowLeft` are bound. Callers should
    /// skip this while a text field has focus.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Self::TogglePlay),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(Intent::from_key_code("Space"), Some(Intent::TogglePlay));
        assert_eq!(Intent::from_key_code("ArrowRight"), Some(Intent::Next));
        assert_eq!(Intent::from_key_code("ArrowLeft"), Some(Intent::Previous));
        assert_eq!(Intent::from_key_code("KeyA"), None);
        assert_eq!(Intent::from_key_code("ArrowUp"), None);
    }

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let intent: Intent = serde_json::from_str(r#"{"type":"playRow","value":3}"#).unwrap();
        assert_eq!(intent, Intent::PlayRow(3));

        let intent: Intent = serde_json::from_str(r#"{"type":"next"}"#).unwrap();
        assert_eq!(intent, Intent::Next);
    }
}
