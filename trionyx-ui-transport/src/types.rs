use serde::{Deserialize, Deserializer, Serialize};

// ============ Envelope ============

/// Payload returned by every endpoint that drives a dialog or a panel.
///
/// Every field is optional on the wire. Defaults are applied once, while
/// deserializing: absent or `null` strings become `""`, absent flags become
/// `false`, absent lists become empty. Controllers never re-check presence.
///
/// # Example
///
/// ```rust
/// use trionyx_ui_transport::ResponseEnvelope;
///
/// let envelope: ResponseEnvelope =
///     serde_json::from_str(r#"{"title": "Edit user", "submit_label": "Save"}"#).unwrap();
/// assert_eq!(envelope.title, "Edit user");
/// assert_eq!(envelope.content, "");
/// assert_eq!(envelope.submit_label(), Some("Save"));
/// assert!(!envelope.close);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseEnvelope {
    /// Overlay title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Body HTML.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Label of the submit control; the control is omitted when empty.
    #[serde(deserialize_with = "null_as_default")]
    pub submit_label: String,
    /// When non-empty the host navigates here and the overlay ends.
    #[serde(deserialize_with = "null_as_default")]
    pub redirect_url: String,
    /// Next submit target (multi-step dialogs).
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Terminates the overlay.
    #[serde(deserialize_with = "null_as_default")]
    pub close: bool,
    /// Set by form dialogs once the form has been saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Panel colour scheme.
    #[serde(deserialize_with = "null_as_default")]
    pub theme: PanelTheme,
    /// Panel HTML rendered above the scrolling content.
    #[serde(deserialize_with = "null_as_default")]
    pub fixed_content: String,
    /// Panel action menu.
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<EnvelopeAction>,
    /// Application status (`"success"`, `"error"`, `"fail"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnvelopeStatus>,
    /// Error message accompanying a non-success status.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Free-form payload.
    pub data: serde_json::Value,
}

impl ResponseEnvelope {
    /// Submit label, if the submit control should be shown.
    pub fn submit_label(&self) -> Option<&str> {
        non_empty(&self.submit_label)
    }

    /// Redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        non_empty(&self.redirect_url)
    }

    /// Next submit URL, if the envelope rebinds the form.
    pub fn next_url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    /// `true` only when the status field is present and equals `"success"`.
    pub fn has_success_status(&self) -> bool {
        matches!(self.status, Some(EnvelopeStatus::Success))
    }

    /// `true` when the envelope explicitly reports an application failure.
    ///
    /// A missing status is not a failure: plain dialog views never send one.
    pub fn is_failure(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| *status != EnvelopeStatus::Success)
    }

    /// Human readable reason for a failure, falling back to the status string.
    pub fn failure_message(&self) -> String {
        if let Some(message) = non_empty(&self.message) {
            return message.to_string();
        }
        match &self.status {
            Some(status) => format!("Request failed with status '{}'", status.as_str()),
            None => "Request failed".to_string(),
        }
    }
}

/// Application status of an envelope (JSend style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvelopeStatus {
    Success,
    Error,
    Fail,
    /// Any other value sent by the backend.
    Other(String),
}

impl EnvelopeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Fail => "fail",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for EnvelopeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "fail" => Self::Fail,
            _ => Self::Other(value),
        }
    }
}

impl From<EnvelopeStatus> for String {
    fn from(value: EnvelopeStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Panel colour scheme. Unknown values fall back to [`PanelTheme::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PanelTheme {
    #[default]
    Light,
    Dark,
}

impl From<String> for PanelTheme {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl From<PanelTheme> for String {
    fn from(value: PanelTheme) -> Self {
        match value {
            PanelTheme::Light => "light".to_string(),
            PanelTheme::Dark => "dark".to_string(),
        }
    }
}

/// One entry of a panel action menu, as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeAction {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// CSS classes of the original link (`"text-danger"`, `"btn-success"`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    /// Render a separator instead of (or before) the entry.
    #[serde(deserialize_with = "null_as_default")]
    pub divider: bool,
    /// Open the URL in a dialog instead of navigating.
    #[serde(deserialize_with = "null_as_default")]
    pub dialog: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dialog_options: DialogOptions,
    /// Reload the panel once the dialog reports success.
    #[serde(deserialize_with = "null_as_default")]
    pub reload: bool,
}

/// Options for opening a dialog from an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogOptions {
    #[serde(deserialize_with = "null_as_default")]
    pub size: DialogSize,
}

/// Width class of a modal dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DialogSize {
    #[default]
    Default,
    Small,
    Large,
    ExtraLarge,
    Full,
}

impl DialogSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Small => "small",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
            Self::Full => "full",
        }
    }
}

impl From<String> for DialogSize {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "small" | "sm" => Self::Small,
            "large" | "lg" => Self::Large,
            "extra-large" | "extra_large" | "xl" => Self::ExtraLarge,
            "full" => Self::Full,
            _ => Self::Default,
        }
    }
}

impl From<DialogSize> for String {
    fn from(value: DialogSize) -> Self {
        value.as_str().to_string()
    }
}

// ============ Requests ============

/// HTTP verb of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Options,
    Trace,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Safe methods never change server state and never carry the anti-forgery token.
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options | Self::Trace)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against a dialog or panel endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    /// Absolute, or relative to the transport's base URL.
    pub url: String,
    /// Multipart body for unsafe methods, query parameters for safe ones.
    pub form: Option<FormData>,
}

impl TransportRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            form: None,
        }
    }

    pub fn post(url: impl Into<String>, form: FormData) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            form: Some(form),
        }
    }
}

/// Serialized form, in document order, including file fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<FormField>,
}

/// A single form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`FormData::push_text`].
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn push_file(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) {
        self.fields.push(FormField::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type,
            bytes,
        });
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// First text value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            FormField::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Text fields only, for query-string encoding.
    pub fn text_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|field| match field {
            FormField::Text { name, value } => Some((name.as_str(), value.as_str())),
            FormField::File { .. } => None,
        })
    }
}

// ============ Helpers ============

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Treats an explicit `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ResponseEnvelope {
        serde_json::from_str(json).unwrap_or_else(|e| panic!("invalid test envelope: {e}"))
    }

    #[test]
    fn empty_object_gets_defaults() {
        let envelope = parse("{}");
        assert_eq!(envelope, ResponseEnvelope::default());
        assert_eq!(envelope.submit_label(), None);
        assert_eq!(envelope.redirect_target(), None);
        assert_eq!(envelope.next_url(), None);
        assert!(!envelope.is_failure());
        assert!(!envelope.has_success_status());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let envelope = parse(
            r#"{"title": null, "content": null, "close": null, "actions": null, "theme": null}"#,
        );
        assert_eq!(envelope.title, "");
        assert_eq!(envelope.content, "");
        assert!(!envelope.close);
        assert!(envelope.actions.is_empty());
        assert_eq!(envelope.theme, PanelTheme::Light);
    }

    #[test]
    fn dialog_envelope_fields() {
        let envelope = parse(
            r#"{
                "title": "Update user",
                "content": "<form></form>",
                "submit_label": "save",
                "url": "/dialog/model/trionyx/user/2/edit/",
                "success": false
            }"#,
        );
        assert_eq!(envelope.submit_label(), Some("save"));
        assert_eq!(envelope.next_url(), Some("/dialog/model/trionyx/user/2/edit/"));
        assert_eq!(envelope.success, Some(false));
    }

    #[test]
    fn panel_envelope_with_actions() {
        let envelope = parse(
            r#"{
                "status": "success",
                "title": "Item 1",
                "theme": "dark",
                "fixed_content": "<b>fixed</b>",
                "actions": [
                    {"label": "Edit", "url": "/x/1/edit", "dialog": true,
                     "dialog_options": {"size": "large"}},
                    {"divider": true},
                    {"label": "Delete", "url": "/x/1/delete", "class": "text-danger",
                     "dialog": true, "dialog_options": {}, "reload": true}
                ]
            }"#,
        );
        assert!(envelope.has_success_status());
        assert_eq!(envelope.theme, PanelTheme::Dark);
        assert_eq!(envelope.actions.len(), 3);
        assert_eq!(envelope.actions[0].dialog_options.size, DialogSize::Large);
        assert!(envelope.actions[1].divider);
        assert_eq!(envelope.actions[1].label, "");
        assert!(envelope.actions[2].reload);
        assert_eq!(envelope.actions[2].dialog_options.size, DialogSize::Default);
    }

    #[test]
    fn error_status_is_failure() {
        let envelope = parse(r#"{"status": "error", "message": "Could not load user"}"#);
        assert!(envelope.is_failure());
        assert_eq!(envelope.failure_message(), "Could not load user");

        let envelope = parse(r#"{"status": "denied"}"#);
        assert_eq!(
            envelope.status,
            Some(EnvelopeStatus::Other("denied".to_string()))
        );
        assert_eq!(envelope.failure_message(), "Request failed with status 'denied'");
    }

    #[test]
    fn unknown_theme_and_size_fall_back() {
        assert_eq!(PanelTheme::from("sepia".to_string()), PanelTheme::Light);
        assert_eq!(DialogSize::from("huge".to_string()), DialogSize::Default);
        assert_eq!(DialogSize::from("XL".to_string()), DialogSize::ExtraLarge);
    }

    #[test]
    fn safe_methods() {
        assert!(HttpMethod::Get.is_safe());
        assert!(HttpMethod::Trace.is_safe());
        assert!(!HttpMethod::Post.is_safe());
        assert!(!HttpMethod::Delete.is_safe());
    }

    #[test]
    fn form_data_lookup() {
        let mut form = FormData::new().text("email", "info@trionyx.com");
        form.push_file("avatar", "me.png", Some("image/png".to_string()), vec![1, 2, 3]);
        form.push_text("email", "second@trionyx.com");

        assert_eq!(form.len(), 3);
        assert_eq!(form.get("email"), Some("info@trionyx.com"));
        assert_eq!(form.get("avatar"), None);
        assert_eq!(form.text_pairs().count(), 2);
        assert_eq!(form.fields()[1].name(), "avatar");
    }
}
