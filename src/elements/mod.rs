//! Elements shared by every output adapter.

mod aws_auth;
mod console;
mod remap;

pub use aws_auth::AwsAuth;
pub use console::Console;
pub use remap::Remap;

/// Quote `value` as a TOML string.
pub fn quote(value: &str) -> String {
    toml::Value::String(value.to_owned()).to_string()
}

/// Render component ids as the value of an `inputs` key.
pub fn make_inputs<S: AsRef<str>>(inputs: &[S]) -> String {
    let quoted = inputs
        .iter()
        .map(|input| quote(input.as_ref()))
        .collect::<Vec<_>>();
    format!("[{}]", quoted.join(","))
}

/// Indent every non-blank line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_strings() {
        assert_eq!(r#""us-east-1""#, quote("us-east-1"));
        assert_eq!(r#""""#, quote(""));
    }

    #[test]
    fn inputs() {
        assert_eq!("[]", make_inputs::<&str>(&[]));
        assert_eq!(r#"["a"]"#, make_inputs(&["a"]));
        assert_eq!(
            r#"["app-pipeline","infra_pipeline"]"#,
            make_inputs(&["app-pipeline".to_string(), "infra_pipeline".to_string()])
        );
    }

    #[test]
    fn indents_non_blank_lines() {
        assert_eq!("  a\n\n    b", indent("a\n\n  b", 2));
    }
}
