use super::InternalEvent;

#[derive(Debug)]
pub struct OutputGenerated<'a> {
    pub component_id: &'a str,
    pub elements: usize,
    pub debug: bool,
}

impl InternalEvent for OutputGenerated<'_> {
    fn emit_logs(&self) {
        debug!(
            message = "Output configuration generated.",
            component_id = %self.component_id,
            elements = self.elements,
            debug = self.debug,
        );
    }
}

#[derive(Debug)]
pub struct DuplicateElementSkipped<'a> {
    pub name: &'a str,
}

impl InternalEvent for DuplicateElementSkipped<'_> {
    fn emit_logs(&self) {
        debug!(message = "Identical element redefined, keeping first definition.", name = %self.name);
    }
}

#[derive(Debug)]
pub struct CredentialKeyMissing<'a> {
    pub key: &'a str,
}

impl InternalEvent for CredentialKeyMissing<'_> {
    fn emit_logs(&self) {
        trace!(message = "Credential key not present in secret.", key = %self.key);
    }
}

#[derive(Debug)]
pub struct DocumentGenerated {
    pub outputs: usize,
    pub byte_size: usize,
}

impl InternalEvent for DocumentGenerated {
    fn emit_logs(&self) {
        info!(
            message = "Pipeline configuration generated.",
            outputs = self.outputs,
            byte_size = self.byte_size,
        );
    }
}

#[derive(Debug)]
pub struct GenerateFailed<'a> {
    pub error: &'a crate::GenerateError,
}

impl InternalEvent for GenerateFailed<'_> {
    fn emit_logs(&self) {
        debug!(message = "Configuration generation failed, nothing emitted.", error = %self.error);
    }
}

#[derive(Debug)]
pub struct SecretNotFound<'a> {
    pub output: &'a str,
    pub secret: &'a str,
}

impl InternalEvent for SecretNotFound<'_> {
    fn emit_logs(&self) {
        warn!(
            message = "Referenced secret not found, generating without credentials.",
            output = %self.output,
            secret = %self.secret,
        );
    }
}
