use crate::output::{Action, ActionName, NextTarget, OutputComponent, TargetType};
use serde_json::{Map, Value};

pub const CONTINUE_LABEL: &str = "Continue";
pub const DONE_LABEL: &str = "Done";

/// `SCREEN_<index>`
pub fn screen_id(index: usize) -> String {
    format!("SCREEN_{}", index)
}

/// The template expression that reads a field back out of the form.
pub fn form_binding(field_name: &str) -> String {
    format!("${{form.{}}}", field_name)
}

/// Builds the footer closing the screen at `screen_index`.
///
/// Non-terminal screens navigate to the next position; the terminal one completes the flow.
/// The payload forwards every field registered on the screen, in registration order.
pub(super) fn build_footer(
    screen_index: usize,
    is_last: bool,
    field_names: &[String],
) -> OutputComponent {
    let payload: Map<String, Value> = field_names
        .iter()
        .map(|name| (name.clone(), Value::String(form_binding(name))))
        .collect();

    let (label, action) = if is_last {
        (
            DONE_LABEL,
            Action {
                name: ActionName::Complete,
                next: None,
                payload,
            },
        )
    } else {
        (
            CONTINUE_LABEL,
            Action {
                name: ActionName::Navigate,
                next: Some(NextTarget {
                    name: screen_id(screen_index + 1),
                    target_type: TargetType::Screen,
                }),
                payload,
            },
        )
    };

    OutputComponent::Footer {
        label: label.to_string(),
        on_click_action: action,
    }
}
