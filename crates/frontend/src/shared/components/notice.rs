//! Inline status notice (alert box with a severity icon)

use crate::shared::icons::icon;
use leptos::prelude::*;

/// How urgent a notice is; picks its icon and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Success,
    Danger,
}

/// Background, border and text colour of a notice
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub foreground: &'static str,
}

impl Severity {
    /// Unknown levels fall back to `Info`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" => Severity::Warning,
            "success" => Severity::Success,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Severity::Info => "info-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Success => "check-circle",
            Severity::Danger => "exclamation-circle",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Severity::Info => Palette {
                background: "#cff4fc",
                border: "#9eeaf9",
                foreground: "#055160",
            },
            Severity::Warning => Palette {
                background: "#fff3cd",
                border: "#ffe69c",
                foreground: "#664d03",
            },
            Severity::Success => Palette {
                background: "#d1e7dd",
                border: "#a3cfbb",
                foreground: "#0a3622",
            },
            Severity::Danger => Palette {
                background: "#f8d7da",
                border: "#f1aeb5",
                foreground: "#58151c",
            },
        }
    }
}

#[component]
pub fn Notice(
    /// Text shown next to the icon
    #[prop(into)]
    message: String,
    severity: Severity,
) -> impl IntoView {
    let palette = severity.palette();
    let style = format!(
        "display: flex; align-items: center; gap: 8px; padding: 12px 16px; margin: 12px 0; \
         border-radius: 6px; background: {}; border: 1px solid {}; color: {};",
        palette.background, palette.border, palette.foreground
    );

    view! {
        <div role="alert" class=format!("notice notice--{}", severity.as_str()) style=style>
            {icon(severity.icon_name())}
            <span>{message}</span>
        </div>
    }
}
