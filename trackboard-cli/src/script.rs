//! Gesture scripts: recorded drag events replayed against a board.
//!
//! A script is a list of events. In YAML:
//!
//! ```yaml
//! - start: item-1a
//! - over: item-2a
//! - over: ~          # pointer left every droppable
//! - end: item-2a
//! - cancel
//! ```

use serde::{Deserialize, Serialize};
use trackboard_dnd::Identifier;

/// One pointer event from the host's drag-and-drop sensor.
///
/// Externally tagged. YAML documents spell a variant as a single-key map,
/// so scripts go through [`GestureScript`], which reads them that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureEvent {
    Start(Identifier),
    Over(Option<Identifier>),
    End(Option<Identifier>),
    Cancel,
}

/// An ordered list of gesture events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureScript {
    #[serde(with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub events: Vec<GestureEvent>,
}

impl GestureScript {
    /// Create a script from events in order
    pub fn new(events: Vec<GestureEvent>) -> Self {
        Self { events }
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
