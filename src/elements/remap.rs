use indoc::formatdoc;

use super::{indent, make_inputs};
use crate::template::{ComposeError, Element};

/// A `remap` transform running a VRL program over every record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Remap {
    pub desc: Option<String>,
    pub component_id: String,
    pub inputs: Vec<String>,
    pub vrl: String,
}

impl Element for Remap {
    fn name(&self) -> String {
        self.component_id.clone()
    }

    fn render(&self) -> Result<String, ComposeError> {
        let desc = self
            .desc
            .as_ref()
            .map(|desc| format!("# {}\n", desc))
            .unwrap_or_default();
        Ok(formatdoc! {r#"
            {desc}[transforms.{id}]
            type = "remap"
            inputs = {inputs}
            source = '''
            {source}
            '''
            "#,
            desc = desc,
            id = self.component_id,
            inputs = make_inputs(&self.inputs),
            source = indent(&self.vrl, 2),
        })
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn render() {
        let remap = Remap {
            desc: Some("Set level".into()),
            component_id: "set_level".into(),
            inputs: vec!["in".into()],
            vrl: ".level = \"info\"\n\ndel(.tag)".into(),
        };

        assert_eq!("set_level", remap.name());
        assert_eq!(
            indoc::indoc! {r#"
                # Set level
                [transforms.set_level]
                type = "remap"
                inputs = ["in"]
                source = '''
                  .level = "info"

                  del(.tag)
                '''
            "#},
            remap.render().unwrap()
        );
    }

    #[test]
    fn render_without_description() {
        let remap = Remap {
            desc: None,
            component_id: "noop".into(),
            inputs: vec!["a".into(), "b".into()],
            vrl: ".".into(),
        };

        assert_eq!(
            indoc::indoc! {r#"
                [transforms.noop]
                type = "remap"
                inputs = ["a","b"]
                source = '''
                  .
                '''
            "#},
            remap.render().unwrap()
        );
    }
}
