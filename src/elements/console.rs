use indoc::formatdoc;

use super::make_inputs;
use crate::template::{ComposeError, Element};

/// A console sink printing records as JSON, used in place of the real
/// destination when debugging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Console {
    pub component_id: String,
    pub inputs: Vec<String>,
}

impl Console {
    pub fn new(component_id: impl Into<String>, inputs: Vec<String>) -> Self {
        Self {
            component_id: component_id.into(),
            inputs,
        }
    }
}

impl Element for Console {
    fn name(&self) -> String {
        self.component_id.clone()
    }

    fn render(&self) -> Result<String, ComposeError> {
        Ok(formatdoc! {r#"
            [sinks.{id}]
            type = "console"
            inputs = {inputs}
            encoding.codec = "json"
            "#,
            id = self.component_id,
            inputs = make_inputs(&self.inputs),
        })
    }
}
