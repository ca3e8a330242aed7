//! Transient user notifications emitted by the wizard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Visual tone of a notice.
pub enum NoticeVariant {
    /// A rule blocked the user's action.
    Destructive,
    /// An action completed.
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Toast-style message with a fixed title and description.
pub struct Notice {
    /// Visual tone.
    pub variant: NoticeVariant,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub description: String,
}

impl Notice {
    /// Builds a destructive notice.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Builds a success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Notice shown once the simulated payment has been processed.
    pub fn shipment_created() -> Self {
        Self::success(
            "Success!",
            "Shipment created successfully! Redirecting to your shipments.",
        )
    }
}
