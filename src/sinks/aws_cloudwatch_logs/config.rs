use indoc::formatdoc;

use crate::{
    config::OutputSpec,
    elements::{AwsAuth, make_inputs, quote},
    secrets::{Secret, get_from_secret},
    template::{ComposeError, Element, Fragment, compose_one},
};

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

/// The `aws_cloudwatch_logs` sink.
///
/// Group and stream names are left as templates resolved per record by the
/// collector, from the fields set by the normalization transform.
#[derive(Debug)]
pub struct CloudwatchLogs {
    pub desc: String,
    pub component_id: String,
    pub inputs: Vec<String>,
    pub region: String,
    pub security: Fragment,
    pub endpoint: Fragment,
}

impl Element for CloudwatchLogs {
    fn name(&self) -> String {
        self.component_id.clone()
    }

    fn render(&self) -> Result<String, ComposeError> {
        Ok(formatdoc! {r#"
            # {desc}
            [sinks.{id}]
            type = "aws_cloudwatch_logs"
            inputs = {inputs}
            region = {region}
            compression = "none"
            group_name = "{{{{ group_name }}}}"
            stream_name = "{{{{ stream_name }}}}"
            {security}
            encoding.codec = "json"
            request.concurrency = 2
            {endpoint}
            "#,
            desc = self.desc,
            id = self.component_id,
            inputs = make_inputs(&self.inputs),
            region = quote(&self.region),
            security = compose_one(&self.security)?,
            endpoint = compose_one(&self.endpoint)?,
        })
    }

    fn fragments(&self) -> Vec<&Fragment> {
        vec![&self.security, &self.endpoint]
    }
}

/// A custom endpoint for the sink.
///
/// Custom endpoints usually point at emulators or proxies without a
/// certificate the collector would trust, so verification is turned off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub parent: String,
    pub url: String,
}

impl Element for Endpoint {
    fn name(&self) -> String {
        format!("{}.endpoint", self.parent)
    }

    fn render(&self) -> Result<String, ComposeError> {
        Ok(format!(
            "endpoint = {}\ntls.verify_certificate = false",
            quote(&self.url)
        ))
    }
}

/// Static credentials from the output's secret, if it carries any.
pub fn security_config(secret: Option<&Secret>, parent: &str) -> Fragment {
    let auth = AwsAuth {
        parent: parent.to_string(),
        key_id: get_from_secret(secret, ACCESS_KEY_ID),
        key_secret: get_from_secret(secret, SECRET_ACCESS_KEY),
    };
    if auth.is_empty() {
        Fragment::Empty
    } else {
        Fragment::new(auth)
    }
}

pub fn endpoint_config(output: &OutputSpec, parent: &str) -> Fragment {
    if output.url.is_empty() {
        Fragment::Empty
    } else {
        Fragment::new(Endpoint {
            parent: parent.to_string(),
            url: output.url.clone(),
        })
    }
}
