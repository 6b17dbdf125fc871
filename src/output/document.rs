use super::component::{Action, OutputComponent};
use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// The compiled, versioned flow handed to the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub version: String,
    pub screens: Vec<OutputScreen>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputScreen {
    pub id: String,
    pub title: String,
    /// Reserved by the schema; always empty.
    pub data: Map<String, Value>,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Layout {
    SingleColumnLayout { children: Vec<LayoutChild> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutChild {
    Form {
        name: String,
        children: Vec<OutputComponent>,
    },
}

impl OutputDocument {
    /// Serializes the document into compact JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Serializes the document into indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::Deserialization(e.to_string()))
    }

    /// Writes the indented JSON form of the document to `path`.
    pub fn save(&self, path: &str) -> Result<(), ExportError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| ExportError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Every synthesized field name, in document order.
    pub fn field_names(&self) -> Vec<&str> {
        self.screens
            .iter()
            .flat_map(|screen| screen.components())
            .filter_map(OutputComponent::field_name)
            .collect()
    }

    pub fn screen(&self, id: &str) -> Option<&OutputScreen> {
        self.screens.iter().find(|s| s.id == id)
    }
}

impl OutputScreen {
    /// All components of the screen's form, footer included.
    pub fn components(&self) -> &[OutputComponent] {
        let Layout::SingleColumnLayout { children } = &self.layout;
        match children.first() {
            Some(LayoutChild::Form { children, .. }) => children,
            None => &[],
        }
    }

    pub fn footer(&self) -> Option<&OutputComponent> {
        self.components().iter().rev().find(|c| c.is_footer())
    }

    /// The footer's click action, if the screen has a footer.
    pub fn action(&self) -> Option<&Action> {
        match self.footer() {
            Some(OutputComponent::Footer {
                on_click_action, ..
            }) => Some(on_click_action),
            _ => None,
        }
    }

    /// Absence of the marker means "not terminal".
    pub fn is_terminal(&self) -> bool {
        self.terminal.unwrap_or(false)
    }
}
