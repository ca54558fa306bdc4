//! Per-foal activity status records supplied by the caller

use crate::core::types::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatusKind {
    Available,
    OnCooldown,
    CompletedToday,
    Locked,
}

impl ActivityStatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatusKind::Available => "Available",
            ActivityStatusKind::OnCooldown => "On Cooldown",
            ActivityStatusKind::CompletedToday => "Completed Today",
            ActivityStatusKind::Locked => "Locked",
        }
    }
}

/// Where one activity stands for one foal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentActivityStatus {
    pub activity_id: String,
    pub status: ActivityStatusKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available_at: Option<Timestamp>,
}

impl EnrichmentActivityStatus {
    pub fn available(activity_id: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            status: ActivityStatusKind::Available,
            next_available_at: None,
        }
    }

    pub fn on_cooldown(activity_id: impl Into<String>, next_available_at: Timestamp) -> Self {
        Self {
            activity_id: activity_id.into(),
            status: ActivityStatusKind::OnCooldown,
            next_available_at: Some(next_available_at),
        }
    }

    pub fn with_status(activity_id: impl Into<String>, status: ActivityStatusKind) -> Self {
        Self {
            activity_id: activity_id.into(),
            status,
            next_available_at: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == ActivityStatusKind::Available
    }
}
