#![allow(missing_docs)]
use std::{
    collections::HashMap,
    fs::{File, create_dir_all},
    io::Write,
    path::{Path, PathBuf},
};

use clap::Parser;
use colored::*;
use snafu::{ResultExt, Snafu};

use crate::{
    config::{Format, ForwarderSpec, GenerateOptions, format},
    internal_events::{DocumentGenerated, GenerateFailed, SecretNotFound},
    secrets::{self, Secret},
    sinks::{BuildError, build_output},
    template::{ComposeError, Element, compose},
};

#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case")]
pub struct Opts {
    /// Forwarder spec listing the outputs to generate.
    ///
    /// File format is detected from the file name unless `--format` is given.
    #[arg(long, env = "VECTOR_OUTPUT_GEN_SPEC")]
    pub spec: PathBuf,

    /// Secret bundles: a map of secret name to credential keys and values.
    #[arg(long)]
    pub secret: Option<PathBuf>,

    /// Route every output to a console sink instead of its destination.
    #[arg(long)]
    pub debug: bool,

    /// Format of the spec and secret files.
    #[arg(long)]
    pub format: Option<Format>,

    /// Write the configuration to a file instead of stdout.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Snafu)]
pub enum GenerateError {
    #[snafu(display("Failed to generate output \"{}\": {}", name, source))]
    BuildOutput { name: String, source: BuildError },
    #[snafu(display("Failed to compose configuration: {}", source))]
    Compose { source: ComposeError },
}

/// Generate the configuration document for every output of `spec`.
///
/// The document is all or nothing: if any output fails to build, or two
/// outputs collide in the document, no configuration is returned.
pub fn generate_conf(
    spec: &ForwarderSpec,
    secrets: &HashMap<String, Secret>,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let mut elements: Vec<Box<dyn Element>> = Vec::new();

    for forwarder_output in &spec.outputs {
        let output = &forwarder_output.output;
        let secret = output.secret.as_ref().and_then(|secret| {
            let found = secrets.get(&secret.name);
            if found.is_none() {
                emit!(SecretNotFound {
                    output: &output.name,
                    secret: &secret.name,
                });
            }
            found
        });

        let built = build_output(output, &forwarder_output.inputs, secret, options)
            .context(BuildOutputSnafu {
                name: output.name.clone(),
            })
            .inspect_err(|error| emit!(GenerateFailed { error }))?;
        elements.extend(built);
    }

    let document = compose(&elements)
        .context(ComposeSnafu)
        .inspect_err(|error| emit!(GenerateFailed { error }))?;
    emit!(DocumentGenerated {
        outputs: spec.outputs.len(),
        byte_size: document.len(),
    });
    Ok(document)
}

fn load_and_generate(opts: &Opts) -> Result<String, Vec<String>> {
    let spec: ForwarderSpec = format::load_from_path(&opts.spec, opts.format)?;
    let secrets = match &opts.secret {
        Some(path) => secrets::load_from_path(path, opts.format)?,
        None => HashMap::new(),
    };
    let options = GenerateOptions { debug: opts.debug };

    generate_conf(&spec, &secrets, &options).map_err(|error| vec![error.to_string()])
}

pub fn cmd(opts: &Opts) -> exitcode::ExitCode {
    let result = load_and_generate(opts).and_then(|conf| match &opts.file {
        Some(path) => write_config(path, &conf)
            .map(|()| {
                info!(message = "Config file written.", path = ?path);
            })
            .map_err(|error| vec![format!("failed to write to file: {}", error)]),
        None => {
            #[allow(clippy::print_stdout)]
            {
                println!("{}", conf);
            }
            Ok(())
        }
    });

    match result {
        Ok(()) => exitcode::OK,
        Err(errs) => {
            #[allow(clippy::print_stderr)]
            {
                errs.iter().for_each(|e| eprintln!("{}", e.red()));
            }
            exitcode::CONFIG
        }
    }
}

fn write_config(filepath: &Path, body: &str) -> crate::Result<()> {
    if filepath.exists() {
        // If the file exists, we don't want to overwrite, that's just rude.
        Err(format!("{:?} already exists", &filepath).into())
    } else {
        if let Some(directory) = filepath.parent() {
            create_dir_all(directory)?;
        }
        File::create(filepath)
            .and_then(|mut file| file.write_all(format!("{}\n", body).as_bytes()))
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use similar_asserts::assert_eq;

    use super::*;
    use crate::config::{
        CloudwatchOutput, ForwarderOutput, OutputSecretSpec, OutputSpec, OutputType,
    };

    fn cloudwatch(name: &str, region: &str, inputs: &[&str]) -> ForwarderOutput {
        ForwarderOutput {
            output: OutputSpec {
                name: name.into(),
                r#type: OutputType::Cloudwatch,
                url: String::new(),
                secret: None,
                cloudwatch: Some(CloudwatchOutput {
                    region: region.into(),
                    ..Default::default()
                }),
            },
            inputs: inputs.iter().map(|i| i.to_string()).collect(),
        }
    }

    fn spec(outputs: Vec<ForwarderOutput>) -> ForwarderSpec {
        ForwarderSpec { outputs }
    }

    #[test]
    fn generate_two_outputs() {
        let doc = generate_conf(
            &spec(vec![
                cloudwatch("cw-east", "us-east-1", &["app"]),
                cloudwatch("cw-west", "us-west-2", &["infra", "audit"]),
            ]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap();

        let headers = doc
            .lines()
            .filter(|line| line.starts_with('['))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                "[transforms.cw_east_normalize_group_and_streams]",
                "[sinks.cw_east]",
                "[transforms.cw_west_normalize_group_and_streams]",
                "[sinks.cw_west]",
            ],
            headers
        );
        assert!(doc.contains("inputs = [\"infra\",\"audit\"]"));
        assert!(doc.contains("region = \"us-west-2\""));
    }

    #[test]
    fn generate_uses_referenced_secret() {
        let mut output = cloudwatch("cw", "us-east-1", &["app"]);
        output.output.secret = Some(OutputSecretSpec {
            name: "cw-secret".into(),
        });
        let secrets = HashMap::from([(
            "cw-secret".to_string(),
            Secret::from_iter([("aws_access_key_id", "id"), ("aws_secret_access_key", "key")]),
        )]);

        let doc = generate_conf(&spec(vec![output]), &secrets, &GenerateOptions::default()).unwrap();
        assert!(doc.contains("auth.access_key_id = \"id\"\nauth.secret_access_key = \"key\""));
    }

    #[test]
    fn generate_missing_secret_is_not_an_error() {
        let mut output = cloudwatch("cw", "us-east-1", &["app"]);
        output.output.secret = Some(OutputSecretSpec {
            name: "absent".into(),
        });

        let doc = generate_conf(
            &spec(vec![output]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(!doc.contains("auth."));
    }

    #[test]
    fn generate_identical_outputs_once() {
        let doc = generate_conf(
            &spec(vec![
                cloudwatch("cw", "us-east-1", &["app"]),
                cloudwatch("cw", "us-east-1", &["app"]),
            ]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap();

        assert_eq!(1, doc.matches("[sinks.cw]").count());
    }

    #[test]
    fn generate_colliding_outputs_fails() {
        // Both names format to the component id `cw_1`.
        let err = generate_conf(
            &spec(vec![
                cloudwatch("cw-1", "us-east-1", &["app"]),
                cloudwatch("cw.1", "eu-west-1", &["app"]),
            ]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap_err();

        assert_eq!(
            "Failed to compose configuration: Element \"cw_1\" is defined more than once with different contents",
            err.to_string()
        );
    }

    #[test]
    fn generate_sink_named_like_transform_fails() {
        // The second output's sink reuses the first output's transform id.
        let err = generate_conf(
            &spec(vec![
                cloudwatch("a", "us-east-1", &["app"]),
                cloudwatch("a_normalize_group_and_streams", "us-east-1", &["app"]),
            ]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap_err();

        assert_eq!(
            "Failed to compose configuration: Element \"a_normalize_group_and_streams\" is defined more than once with different contents",
            err.to_string()
        );
    }

    #[test]
    fn generate_fails_as_a_whole() {
        let mut broken = cloudwatch("broken", "us-east-1", &["app"]);
        broken.output.r#type = OutputType::Other("splunk".into());

        let err = generate_conf(
            &spec(vec![cloudwatch("cw", "us-east-1", &["app"]), broken]),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap_err();

        assert_eq!(
            "Failed to generate output \"broken\": No output adapter for type \"splunk\"",
            err.to_string()
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn failing_generation_logs(level: tracing::Level) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut broken = cloudwatch("broken", "us-east-1", &["app"]);
        broken.output.r#type = OutputType::Other("splunk".into());
        tracing::subscriber::with_default(subscriber, || {
            generate_conf(
                &spec(vec![broken]),
                &HashMap::new(),
                &GenerateOptions::default(),
            )
            .unwrap_err();
        });
        logs.contents()
    }

    #[test]
    fn generate_failure_is_only_logged_at_debug() {
        // The command prints the error itself.
        assert_eq!("", failing_generation_logs(tracing::Level::INFO));
        assert!(
            failing_generation_logs(tracing::Level::DEBUG)
                .contains("Configuration generation failed")
        );
    }

    #[test]
    fn generate_debug_document() {
        let doc = generate_conf(
            &spec(vec![cloudwatch("cw1", "us-east-1", &["app-pipeline"])]),
            &HashMap::new(),
            &GenerateOptions { debug: true },
        )
        .unwrap();

        assert!(doc.ends_with(indoc::indoc! {r#"
            [sinks.cw1]
            type = "console"
            inputs = ["cw1_normalize_group_and_streams"]
            encoding.codec = "json""#}));
        assert!(!doc.contains("region"));
    }

    #[test]
    fn generate_empty_spec() {
        let doc = generate_conf(
            &ForwarderSpec::default(),
            &HashMap::new(),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert_eq!("", doc);
    }

    #[test]
    fn write_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/vector.toml");

        write_config(&path, "[sinks.cw]").unwrap();
        assert_eq!(
            "[sinks.cw]\n",
            std::fs::read_to_string(&path).unwrap()
        );
        assert!(write_config(&path, "[sinks.other]").is_err());
        assert_eq!(
            "[sinks.cw]\n",
            std::fs::read_to_string(&path).unwrap()
        );
    }
}
