//! Item value object

use serde::{Deserialize, Serialize};

/// A labelled candidate the player can be asked to find (Value Object)
///
/// For the flag quiz the name is a country and the description is a
/// textual rendering of its flag. Identity is the name alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Item {
    /// Create a new item
    ///
    /// # Panics
    /// Panics if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Item name cannot be empty");
        Self {
            name,
            description: None,
        }
    }

    /// Try to create a new item, returning None if the name is blank
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self {
                name,
                description: None,
            })
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::new(s)
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::new(s)
    }
}
