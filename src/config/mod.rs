use std::fmt;

use serde::Deserialize;

pub mod format;
mod id;

pub use format::Format;
pub use id::format_component_id;

/// A set of outputs to render into one pipeline configuration document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForwarderSpec {
    #[serde(default)]
    pub outputs: Vec<ForwarderOutput>,
}

/// An output together with the upstream components it reads from.
#[derive(Clone, Debug, Deserialize)]
pub struct ForwarderOutput {
    #[serde(flatten)]
    pub output: OutputSpec,

    /// Component ids of the upstream stages feeding this output.
    #[serde(default)]
    pub inputs: Vec<String>,
}

/// Declarative description of one log destination.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Unique within a forwarder; the component ids are derived from it.
    pub name: String,

    pub r#type: OutputType,

    /// Custom endpoint overriding the destination's default one.
    #[serde(default)]
    pub url: String,

    /// Name of the secret bundle holding this output's credentials.
    #[serde(default)]
    pub secret: Option<OutputSecretSpec>,

    #[serde(default)]
    pub cloudwatch: Option<CloudwatchOutput>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OutputSecretSpec {
    pub name: String,
}

/// Type tag selecting the output adapter.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum OutputType {
    Cloudwatch,
    /// Any type this generator has no adapter for.
    Other(String),
}

impl From<String> for OutputType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cloudwatch" => OutputType::Cloudwatch,
            _ => OutputType::Other(s),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputType::Cloudwatch => write!(f, "cloudwatch"),
            OutputType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Options for the CloudWatch Logs destination.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CloudwatchOutput {
    pub region: String,

    /// Prepended, followed by a `.`, to every log group name. Unset and
    /// blank prefixes are both ignored.
    #[serde(default)]
    pub group_prefix: Option<String>,

    #[serde(default)]
    pub group_by: GroupBy,
}

/// How application logs are grouped into log groups.
///
/// Unrecognized values fall back to grouping by log type.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum GroupBy {
    #[default]
    LogType,
    NamespaceName,
    NamespaceUuid,
}

impl From<String> for GroupBy {
    fn from(s: String) -> Self {
        match s.as_str() {
            "namespaceName" => GroupBy::NamespaceName,
            "namespaceUUID" => GroupBy::NamespaceUuid,
            _ => GroupBy::LogType,
        }
    }
}

/// Process wide flags controlling generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Route every output to a console sink instead of its destination.
    pub debug: bool,
}
