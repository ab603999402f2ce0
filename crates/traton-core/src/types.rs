use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Identity
// =============================================================================

/// Unique identifier for a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Chart data
// =============================================================================

/// Mean salinity for one ocean basin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OceanSalinity {
    pub ocean_name: String,
    /// Practical Salinity Units.
    pub salinity_psu: f64,
    /// Longitude band the reading covers, e.g. `140°W-160°E`.
    pub region: String,
}

/// Salinity at one depth layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthSalinity {
    pub depth_label: String,
    pub salinity_psu: f64,
}

/// Monthly mean sea temperature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTemperature {
    pub month_label: String,
    pub temperature_c: f64,
}

/// Typed chart dataset attached to a reply.
///
/// The variant fully determines which series are present. Serialized with an
/// internal `type` tag and camelCase field names so a display surface can
/// consume the JSON as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartPayload {
    #[default]
    None,
    /// Two bar charts: salinity per ocean basin and per depth layer.
    #[serde(rename_all = "camelCase")]
    BarPair {
        ocean_series: Vec<OceanSalinity>,
        depth_series: Vec<DepthSalinity>,
    },
    /// One line chart of temperature over months.
    LineSeries { points: Vec<MonthlyTemperature> },
}

impl ChartPayload {
    pub fn is_none(&self) -> bool {
        matches!(self, ChartPayload::None)
    }

    /// Chart-type hint for renderers: `"bar"`, `"line"`, or nothing.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            ChartPayload::None => None,
            ChartPayload::BarPair { .. } => Some("bar"),
            ChartPayload::LineSeries { .. } => Some("line"),
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry in a conversation log. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    /// Pre-formatted text; line breaks are significant.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub chart: ChartPayload,
}

impl Message {
    /// A user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
            chart: ChartPayload::None,
        }
    }

    /// An assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>, chart: ChartPayload) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            chart,
        }
    }
}
