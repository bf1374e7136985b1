/// Editable copy of the service base URL shown above the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceUrlDraft {
    /// Text in the URL field; replaced whenever settings are applied.
    pub text: String,
    /// Why the last save was rejected.
    pub error: Option<String>,
}
