//! Output adapter for AWS CloudWatch Logs.
//!
//! Each output becomes a `remap` transform naming the log group and stream of
//! every record, followed by the `aws_cloudwatch_logs` sink reading from it.

mod config;
mod normalize;


use snafu::{OptionExt, ensure};

pub use self::{
    config::{
        ACCESS_KEY_ID, CloudwatchLogs, Endpoint, SECRET_ACCESS_KEY, endpoint_config,
        security_config,
    },
    normalize::{
        JOURNAL_SYSTEM_TAG, NORMALIZE_SUFFIX, log_group_name_field, log_group_prefix,
        normalize_component_id, normalize_group_and_stream_name,
    },
};
use super::{BuildError, MissingCloudwatchOptionsSnafu, MissingRegionSnafu, OutputAdapter};
use crate::{
    config::{GenerateOptions, OutputSpec, format_component_id},
    elements::Console,
    secrets::Secret,
    template::Element,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct CloudwatchAdapter;

impl OutputAdapter for CloudwatchAdapter {
    fn conf(
        &self,
        output: &OutputSpec,
        inputs: &[String],
        secret: Option<&Secret>,
        options: &GenerateOptions,
    ) -> Result<Vec<Box<dyn Element>>, BuildError> {
        conf(output, inputs, secret, options)
    }
}

/// Elements for `output`: the normalization transform reading `inputs`,
/// then either the sink or, in debug mode, a console sink.
///
/// Debug mode never renders a region, endpoint or credentials.
pub fn conf(
    output: &OutputSpec,
    inputs: &[String],
    secret: Option<&Secret>,
    options: &GenerateOptions,
) -> Result<Vec<Box<dyn Element>>, BuildError> {
    let cloudwatch = output
        .cloudwatch
        .as_ref()
        .context(MissingCloudwatchOptionsSnafu {
            name: output.name.clone(),
        })?;

    let output_name = format_component_id(&output.name);
    let component_id = normalize_component_id(&output_name);
    let normalize = normalize_group_and_stream_name(
        log_group_name_field(cloudwatch.group_by),
        &log_group_prefix(cloudwatch),
        &component_id,
        inputs,
    );

    if options.debug {
        return Ok(vec![
            Box::new(normalize),
            Box::new(Console::new(output_name, vec![component_id])),
        ]);
    }

    Ok(vec![
        Box::new(normalize),
        Box::new(output_conf(
            output,
            &[component_id],
            secret,
            &cloudwatch.region,
        )?),
    ])
}

/// The sink itself, sending to `region` which may differ from the one in
/// `output`.
pub fn output_conf(
    output: &OutputSpec,
    inputs: &[String],
    secret: Option<&Secret>,
    region: &str,
) -> Result<CloudwatchLogs, BuildError> {
    ensure!(
        !region.trim().is_empty(),
        MissingRegionSnafu {
            name: output.name.clone()
        }
    );

    let component_id = format_component_id(&output.name);
    Ok(CloudwatchLogs {
        desc: "Cloudwatch Logs".to_string(),
        security: security_config(secret, &component_id),
        endpoint: endpoint_config(output, &component_id),
        component_id,
        inputs: inputs.to_vec(),
        region: region.to_string(),
    })
}
