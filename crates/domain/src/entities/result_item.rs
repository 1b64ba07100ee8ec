//! Presentable result items and the instructions handed back to the host

use serde::{Deserialize, Serialize};

/// What happens when a result item is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ItemAction {
    /// Replace the visible query text
    SetQuery(String),
    /// Replay an opaque payload into the action executor
    CustomAction(String),
    /// Open a secondary menu of items
    ShowMenu(Vec<ResultItem>),
    /// Close the result list
    Dismiss,
    /// Do nothing
    Ignore,
}

/// A single selectable (or informational) row in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Primary text
    pub label: String,
    /// Secondary text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the host may highlight this item as a search match
    pub selectable: bool,
    /// Action on enter
    pub primary_action: ItemAction,
    /// Action on alt-enter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<ItemAction>,
}

impl ResultItem {
    /// Create a non-selectable item with the given primary action
    pub fn new(label: impl Into<String>, primary_action: ItemAction) -> Self {
        Self {
            label: label.into(),
            description: None,
            selectable: false,
            primary_action,
            secondary_action: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark as selectable
    #[must_use]
    pub const fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Set the secondary action
    #[must_use]
    pub fn with_secondary(mut self, action: ItemAction) -> Self {
        self.secondary_action = Some(action);
        self
    }
}

/// The dispatcher's answer to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// Render these items
    ItemList(Vec<ResultItem>),
    /// Replace the query text, which re-triggers evaluation
    RewriteQuery(String),
    /// Leave the view untouched
    NoOp,
}

impl RenderInstruction {
    /// Items carried by an `ItemList`, empty otherwise
    pub fn items(&self) -> &[ResultItem] {
        match self {
            Self::ItemList(items) => items,
            Self::RewriteQuery(_) | Self::NoOp => &[],
        }
    }
}
