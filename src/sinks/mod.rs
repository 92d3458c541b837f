use snafu::{Snafu, ensure};

use crate::{
    config::{GenerateOptions, OutputSpec, OutputType, format_component_id},
    internal_events::OutputGenerated,
    secrets::Secret,
    template::Element,
};

pub mod aws_cloudwatch_logs;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum BuildError {
    #[snafu(display("No output adapter for type \"{}\"", output_type))]
    UnsupportedOutputType { output_type: OutputType },
    #[snafu(display("Output \"{}\" does not produce a valid component id", name))]
    EmptyComponentId { name: String },
    #[snafu(display("Output \"{}\" has no inputs", name))]
    NoInputs { name: String },
    #[snafu(display("Output \"{}\" of type cloudwatch is missing its cloudwatch options", name))]
    MissingCloudwatchOptions { name: String },
    #[snafu(display("Output \"{}\" must set a region", name))]
    MissingRegion { name: String },
}

/// Translates one output specification into the elements configuring it.
///
/// Every adapter emits the elements in pipeline order, keyed by component ids
/// derived from the output name so that outputs from different adapters can
/// share a document.
pub trait OutputAdapter: Send + Sync {
    fn conf(
        &self,
        output: &OutputSpec,
        inputs: &[String],
        secret: Option<&Secret>,
        options: &GenerateOptions,
    ) -> Result<Vec<Box<dyn Element>>, BuildError>;
}

/// Find the adapter handling outputs of type `output_type`.
pub fn adapter_for(output_type: &OutputType) -> Result<&'static dyn OutputAdapter, BuildError> {
    match output_type {
        OutputType::Cloudwatch => Ok(&aws_cloudwatch_logs::CloudwatchAdapter),
        OutputType::Other(_) => UnsupportedOutputTypeSnafu {
            output_type: output_type.clone(),
        }
        .fail(),
    }
}

/// Build the elements for `output` with the adapter registered for its type.
pub fn build_output(
    output: &OutputSpec,
    inputs: &[String],
    secret: Option<&Secret>,
    options: &GenerateOptions,
) -> Result<Vec<Box<dyn Element>>, BuildError> {
    let component_id = format_component_id(&output.name);
    ensure!(
        !component_id.is_empty(),
        EmptyComponentIdSnafu {
            name: output.name.clone()
        }
    );
    ensure!(
        !inputs.is_empty(),
        NoInputsSnafu {
            name: output.name.clone()
        }
    );

    let elements = adapter_for(&output.r#type)?.conf(output, inputs, secret, options)?;
    emit!(OutputGenerated {
        component_id: &component_id,
        elements: elements.len(),
        debug: options.debug,
    });
    Ok(elements)
}
