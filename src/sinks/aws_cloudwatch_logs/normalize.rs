//! The transform computing each record's log group and stream names.
//!
//! The rules run in order and later rules overwrite what earlier ones set:
//!
//! 1. a `file` field becomes the stream name, as a dotted `kubernetes.` path
//! 2. application logs are grouped by the configured field
//! 3. audit logs go to the `audit` group, streamed per node and tag
//! 4. infrastructure logs go to the `infrastructure` group, streamed per host
//! 5. journal logs are streamed per host and tag
//!
//! `tag` and `source_type` are dropped before records leave the transform.

use indoc::formatdoc;

use crate::{
    config::{CloudwatchOutput, GroupBy},
    elements::Remap,
};

pub const NORMALIZE_SUFFIX: &str = "normalize_group_and_streams";

/// Tag carried by records read from the systemd journal.
pub const JOURNAL_SYSTEM_TAG: &str = ".journal.system";

/// Collector variable holding the name of the node it runs on.
const NODE_NAME_VAR: &str = "${VECTOR_SELF_NODE_NAME}";

pub fn normalize_component_id(output_component_id: &str) -> String {
    format!("{}_{}", output_component_id, NORMALIZE_SUFFIX)
}

/// Prefix for every log group name: the configured prefix followed by a `.`,
/// or nothing when the prefix is unset or blank.
pub fn log_group_prefix(cloudwatch: &CloudwatchOutput) -> String {
    match cloudwatch.group_prefix.as_deref() {
        Some(prefix) if !prefix.trim().is_empty() => format!("{}.", prefix),
        _ => String::new(),
    }
}

/// Record field used to name the log group of application logs.
pub fn log_group_name_field(group_by: GroupBy) -> &'static str {
    match group_by {
        GroupBy::NamespaceName => ".kubernetes.namespace_name",
        GroupBy::NamespaceUuid => ".kubernetes.namespace_uid",
        GroupBy::LogType => ".log_type",
    }
}

pub fn normalize_group_and_stream_name(
    log_group_name_field: &str,
    log_group_prefix: &str,
    component_id: &str,
    inputs: &[String],
) -> Remap {
    // The application fallback is never prefixed.
    let app_group_name = format!("{} + {}", vrl_string(log_group_prefix), log_group_name_field);
    let audit_group_name = vrl_string(&format!("{}audit", log_group_prefix));
    let infra_group_name = vrl_string(&format!("{}infrastructure", log_group_prefix));

    let vrl = formatdoc! {r#"
        .group_name = "default"
        .stream_name = "default"

        if (.file != null) {{
          .file = "kubernetes" + replace!(.file, "/", ".")
          .stream_name = del(.file)
        }}

        if (.log_type == "application") {{
          .group_name = ({app_group_name}) ?? "application"
        }}
        if (.log_type == "audit") {{
          .group_name = {audit_group_name}
          .stream_name = ({node_name} + .tag) ?? .stream_name
        }}
        if (.log_type == "infrastructure") {{
          .group_name = {infra_group_name}
          .stream_name = (.hostname + "." + .stream_name) ?? .stream_name
        }}
        if (.tag == {journal_tag}) {{
          .stream_name = (.hostname + .tag) ?? .stream_name
        }}
        del(.tag)
        del(.source_type)"#,
        app_group_name = app_group_name,
        audit_group_name = audit_group_name,
        infra_group_name = infra_group_name,
        node_name = vrl_string(NODE_NAME_VAR),
        journal_tag = vrl_string(JOURNAL_SYSTEM_TAG),
    };

    Remap {
        desc: Some("Cloudwatch Group and Stream Names".to_string()),
        component_id: component_id.to_string(),
        inputs: inputs.to_vec(),
        vrl,
    }
}

// VRL string literals share JSON's quoting.
fn vrl_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
