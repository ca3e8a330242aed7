//! Ordered wizard stages and progress-indicator helpers.

use serde::{Deserialize, Serialize};

/// Number of stages in the wizard.
pub const STAGE_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// One screen of the linear order wizard.
///
/// Declaration order is wizard order; the review summary comes before payment.
pub enum WizardStage {
    /// Sender contact details.
    #[default]
    Sender,
    /// Receiver contact details.
    Receiver,
    /// Parcel content, value and weight.
    Package,
    /// Carrier and delivery mode.
    Carrier,
    /// Read-only review with per-section edit shortcuts.
    Summary,
    /// Card entry and simulated payment.
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Progress-indicator state of a stage relative to the active one.
pub enum StageMarker {
    /// Stage lies behind the active stage.
    Completed,
    /// Stage is the active stage.
    Active,
    /// Stage is still ahead.
    Upcoming,
}

impl WizardStage {
    /// All stages in wizard order.
    pub const ORDER: [Self; STAGE_COUNT] = [
        Self::Sender,
        Self::Receiver,
        Self::Package,
        Self::Carrier,
        Self::Summary,
        Self::Payment,
    ];

    /// First stage of the wizard.
    pub const FIRST: Self = Self::Sender;

    /// Final stage of the wizard.
    pub const LAST: Self = Self::Payment;

    fn index(self) -> usize {
        match self {
            Self::Sender => 0,
            Self::Receiver => 1,
            Self::Package => 2,
            Self::Carrier => 3,
            Self::Summary => 4,
            Self::Payment => 5,
        }
    }

    /// One-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Resolves a one-based stage number.
    pub fn from_number(number: u8) -> Option<Self> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx).copied())
    }

    /// Stage after this one, if any.
    pub fn next(self) -> Option<Self> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// Stage before this one, if any.
    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| Self::ORDER.get(idx).copied())
    }

    /// Whether the summary may send the user back to this stage for editing.
    pub fn is_editable_from_summary(self) -> bool {
        self < Self::Summary
    }

    /// Short label shown under the progress indicator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sender => "Sender",
            Self::Receiver => "Receiver",
            Self::Package => "Package",
            Self::Carrier => "Carrier",
            Self::Summary => "Summary",
            Self::Payment => "Payment",
        }
    }

    /// Stable token for routing and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Receiver => "receiver",
            Self::Package => "package",
            Self::Carrier => "carrier",
            Self::Summary => "summary",
            Self::Payment => "payment",
        }
    }

    /// Marker for this stage while `active` is the current stage.
    pub fn marker(self, active: Self) -> StageMarker {
        match self.cmp(&active) {
            std::cmp::Ordering::Less => StageMarker::Completed,
            std::cmp::Ordering::Equal => StageMarker::Active,
            std::cmp::Ordering::Greater => StageMarker::Upcoming,
        }
    }
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.token(), self.number())
    }
}

/// Progress markers for every stage while `active` is current, in wizard order.
pub fn progress_markers(active: WizardStage) -> [(WizardStage, StageMarker); STAGE_COUNT] {
    WizardStage::ORDER.map(|stage| (stage, stage.marker(active)))
}
