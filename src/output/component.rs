use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A compiled component as the rendering engine expects it.
///
/// The `type` tag and the kebab-case keys (`input-type`, `data-source`, `on-click-action`) are
/// part of the output schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputComponent {
    TextHeading {
        text: String,
    },
    TextBody {
        text: String,
    },
    Media {
        src: String,
    },
    TextInput {
        label: String,
        name: String,
        #[serde(rename = "input-type")]
        input_type: InputType,
        required: bool,
    },
    TextArea {
        label: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        required: bool,
    },
    DatePicker {
        label: String,
        name: String,
        required: bool,
    },
    RadioButtonsGroup {
        label: String,
        name: String,
        required: bool,
        #[serde(rename = "data-source")]
        data_source: Vec<DataSourceOption>,
    },
    Footer {
        label: String,
        #[serde(rename = "on-click-action")]
        on_click_action: Action,
    },
}

impl OutputComponent {
    /// The synthesized field name, for field-bearing components.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            OutputComponent::TextInput { name, .. }
            | OutputComponent::TextArea { name, .. }
            | OutputComponent::DatePicker { name, .. }
            | OutputComponent::RadioButtonsGroup { name, .. } => Some(name),
            OutputComponent::TextHeading { .. }
            | OutputComponent::TextBody { .. }
            | OutputComponent::Media { .. }
            | OutputComponent::Footer { .. } => None,
        }
    }

    pub fn is_footer(&self) -> bool {
        matches!(self, OutputComponent::Footer { .. })
    }
}

/// Input kinds accepted by `TextInput`. Only plain text is produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
}

/// One selectable entry of a `RadioButtonsGroup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceOption {
    pub id: String,
    pub title: String,
}

/// What a footer does when pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: ActionName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextTarget>,
    /// Field name -> `${form.<name>}` template, in registration order.
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionName {
    Navigate,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTarget {
    pub name: String,
    #[serde(rename = "type")]
    pub target_type: TargetType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Screen,
}
