use super::quote;
use crate::template::{ComposeError, Element};

/// Static AWS access key credentials for a sink.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsAuth {
    /// Identity of the sink these credentials belong to.
    pub parent: String,
    pub key_id: String,
    pub key_secret: String,
}

impl AwsAuth {
    pub fn is_empty(&self) -> bool {
        self.key_id.is_empty() && self.key_secret.is_empty()
    }
}

impl std::fmt::Debug for AwsAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsAuth")
            .field("parent", &self.parent)
            .field("key_id", &(!self.key_id.is_empty()))
            .field("key_secret", &(!self.key_secret.is_empty()))
            .finish()
    }
}

impl Element for AwsAuth {
    fn name(&self) -> String {
        format!("{}.auth", self.parent)
    }

    fn render(&self) -> Result<String, ComposeError> {
        let mut lines = Vec::new();
        if !self.key_id.is_empty() {
            lines.push(format!("auth.access_key_id = {}", quote(&self.key_id)));
        }
        if !self.key_secret.is_empty() {
            lines.push(format!(
                "auth.secret_access_key = {}",
                quote(&self.key_secret)
            ));
        }
        Ok(lines.join("\n"))
    }
}
