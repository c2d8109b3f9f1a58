use serde::{Deserialize, Serialize};
use trionyx_ui_transport::{DialogOptions, EnvelopeAction, PanelTheme, ResponseEnvelope};

/// Visual weight of a panel action, derived from the CSS class the backend sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Default,
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

impl ActionStyle {
    /// `"text-danger"`, `"btn btn-success"`, ... → style. First match wins.
    pub fn from_class(class: &str) -> Self {
        class
            .split_whitespace()
            .find_map(|token| {
                let name = token
                    .strip_prefix("text-")
                    .or_else(|| token.strip_prefix("btn-"))
                    .or_else(|| token.strip_prefix("bg-"))
                    .unwrap_or(token);
                match name {
                    "primary" => Some(Self::Primary),
                    "success" => Some(Self::Success),
                    "info" => Some(Self::Info),
                    "warning" => Some(Self::Warning),
                    "danger" => Some(Self::Danger),
                    _ => None,
                }
            })
            .unwrap_or_default()
    }
}

/// What running an action does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionBehavior {
    Navigate,
    OpenDialog(DialogOptions),
}

/// Entry of the panel action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAction {
    pub label: String,
    pub url: String,
    pub style: ActionStyle,
    pub behavior: ActionBehavior,
    /// Reload the panel once a dialog opened by this action reports success.
    pub reload_on_success: bool,
    pub divider: bool,
}

impl PanelAction {
    /// Dividers and entries without a URL cannot be run.
    pub fn is_runnable(&self) -> bool {
        !self.divider && !self.url.is_empty()
    }
}

impl From<EnvelopeAction> for PanelAction {
    fn from(action: EnvelopeAction) -> Self {
        let behavior = if action.dialog {
            ActionBehavior::OpenDialog(action.dialog_options)
        } else {
            ActionBehavior::Navigate
        };
        Self {
            style: ActionStyle::from_class(&action.class),
            label: action.label,
            url: action.url,
            behavior,
            reload_on_success: action.reload,
            divider: action.divider,
        }
    }
}

/// Everything a panel surface renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub fixed_content: String,
    pub content: String,
    pub theme: PanelTheme,
    pub actions: Vec<PanelAction>,
}

impl PanelContent {
    /// The action menu is hidden when there is nothing to show.
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}

impl From<ResponseEnvelope> for PanelContent {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self {
            title: envelope.title,
            fixed_content: envelope.fixed_content,
            content: envelope.content,
            theme: envelope.theme,
            actions: envelope.actions.into_iter().map(PanelAction::from).collect(),
        }
    }
}
