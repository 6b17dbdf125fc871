use super::component::ActionName;
use super::document::OutputDocument;
use itertools::Itertools;
use std::fmt;

/// Renders the navigation graph of a compiled document as plain text, one line per screen.
///
/// ```text
/// flow (schema 6.0)
///   SCREEN_0 "Welcome" -> SCREEN_1 [fields: screen_0_Name_1]
///   SCREEN_1 "Thanks" (terminal) [fields: -]
/// ```
pub struct FlowOutline<'a> {
    pub document: &'a OutputDocument,
}

impl<'a> FlowOutline<'a> {
    pub fn new(document: &'a OutputDocument) -> Self {
        Self { document }
    }
}

impl fmt::Display for FlowOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "flow (schema {})", self.document.version)?;
        if self.document.screens.is_empty() {
            return writeln!(f, "  <no screens>");
        }

        for screen in &self.document.screens {
            write!(f, "  {} {:?}", screen.id, screen.title)?;
            match screen.action() {
                Some(action) if action.name == ActionName::Navigate => {
                    let target = action.next.as_ref().map_or("?", |n| n.name.as_str());
                    write!(f, " -> {}", target)?;
                }
                Some(_) => {}
                None => write!(f, " <no footer>")?,
            }
            if screen.is_terminal() {
                write!(f, " (terminal)")?;
            }

            let fields = screen
                .action()
                .map(|action| action.payload.keys().join(", "))
                .filter(|joined| !joined.is_empty())
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, " [fields: {}]", fields)?;
        }
        Ok(())
    }
}
