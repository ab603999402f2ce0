//! Canned response synthesis.
//!
//! Every [`Topic`] maps to one fixed narrative and one fixed chart dataset.
//! The query text is never echoed back; only the topic matters.

use serde::{Deserialize, Serialize};
use traton_core::types::{ChartPayload, DepthSalinity, MonthlyTemperature, OceanSalinity};

use crate::matcher::Topic;

// =============================================================================
// Response
// =============================================================================

/// Structured answer ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Topic that produced this response.
    pub topic: Topic,
    /// Narrative text with significant line breaks.
    pub content: String,
    /// `ChartPayload::None` unless the topic declares a chart.
    pub chart: ChartPayload,
}

// =============================================================================
// Static datasets
// =============================================================================

/// (ocean, PSU, longitude band) along the equator, March 2023.
const EQUATORIAL_SALINITY: [(&str, f64, &str); 3] = [
    ("Pacific", 34.65, "140°W-160°E"),
    ("Atlantic", 36.10, "40°W-10°E"),
    ("Indian", 34.95, "40°E-100°E"),
];

const SALINITY_BY_DEPTH: [(&str, f64); 3] = [
    ("Surface", 35.0),
    ("Mixed Layer", 35.2),
    ("Thermocline", 35.15),
];

const SIX_MONTH_TEMPERATURE: [(&str, f64); 6] = [
    ("Sep", 28.5),
    ("Oct", 29.2),
    ("Nov", 29.8),
    ("Dec", 30.1),
    ("Jan", 29.6),
    ("Feb", 28.9),
];

const SALINITY_TEXT: &str = "Salinity Levels at the Equator - March 2023

What is Salinity?
Salinity measures how \"salty\" ocean water is in PSU (Practical Salinity Units).

Ocean Comparison:
• Pacific Ocean: 34.65 PSU (least salty)
• Atlantic Ocean: 36.1 PSU (most salty)\x20\x20
• Indian Ocean: 34.95 PSU (medium)

Why Different Saltiness?
- Atlantic: High evaporation leaves more salt behind
- Pacific: Heavy tropical rains dilute the salt
- Indian: Mix of both conditions

Depth Analysis:
Surface waters show variation due to rainfall and evaporation, while deeper layers remain more stable.

Data Source:
847 ARGO floats collected measurements along the equator, diving to 2000m depth every 10 days.";

const TEMPERATURE_TEXT: &str = "Ocean Temperature Trends - Last 6 Months

Current Temperature Range: 26.8°C - 30.2°C (80°F - 86°F)

Temperature Changes:
Ocean warming trend: +0.3°C above normal seasonal average.
El Niño climate pattern contributing to increased heat retention.

Measurement System:
1,247 robotic ARGO floats continuously monitor temperature while drifting with ocean currents, providing real-time data coverage.";

const CURRENTS_TEXT: &str = "Atlantic Ocean Currents - Ocean Highway System

Major Current Systems:
• Gulf Stream: Warm water moving north at 3-4 mph
• North Atlantic Current: Extension toward Europe
• Equatorial Counter Current: Opposite direction flow

Temperature Zones:
- Warm currents: 26-32°C
- Cool currents: 18-24°C

Tracking Method:
2,134 floating robots follow currents, diving 2000m every 10 days to map three-dimensional ocean movement patterns.

Function: These currents act as Earth's heat distribution system, moving warm tropical water to cooler regions.";

const ECOSYSTEM_TEXT: &str = "Ocean Temperature & Marine Ecosystem Health

Temperature Impact on Marine Life:

Phytoplankton (Ocean Plants):
Optimal temperature: 18-24°C
These microscopic plants form the base of ocean food webs.

Fish Migration Patterns:
Fish follow the 20°C comfort zone, migrating when temperatures shift beyond optimal ranges.

Coral Reef Health:
Stress threshold: 29°C sustained temperature
Extended heat exposure causes coral bleaching and mortality.

Monitoring System:
892 specialized ARGO floats with bio-optical sensors track:
- Dissolved oxygen levels
- Ocean acidity (pH)
- Chlorophyll concentration
- Food web productivity

Current ocean health status monitored 24/7 through autonomous underwater monitoring network.";

const DEFAULT_TEXT: &str = "TratonAI Ocean Data Assistant

Available Data Services:
- Ocean temperature analysis
- Salinity level mapping\x20\x20
- Current pattern tracking
- Climate impact assessment

Data Sources:
3,800+ ARGO robotic floats operating globally
- 10-day measurement cycles
- 0-2000m depth profiling
- Temperature, salinity, pressure sensors
- Advanced models include biogeochemical sensors

Coverage: Millions of ocean profiles collected since 2000

Example Queries:
- \"Pacific Ocean temperature trends\"
- \"Atlantic salinity patterns\"\x20\x20
- \"Current systems near Japan\"
- \"Marine ecosystem changes\"

Ready to analyze ocean data and explain findings in clear, accessible terms.";

// =============================================================================
// ResponseBuilder
// =============================================================================

/// Builds the fixed response for a topic. Pure and total.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the response for `topic`.
    pub fn build(&self, topic: Topic) -> Response {
        let (content, chart) = match topic {
            Topic::SalinityEquatorMarch2023 => (SALINITY_TEXT, salinity_chart()),
            Topic::TemperatureTrend => (TEMPERATURE_TEXT, temperature_chart()),
            Topic::AtlanticCurrents => (CURRENTS_TEXT, ChartPayload::None),
            Topic::MarineEcosystem => (ECOSYSTEM_TEXT, ChartPayload::None),
            Topic::Default => (DEFAULT_TEXT, ChartPayload::None),
        };

        Response {
            topic,
            content: content.to_string(),
            chart,
        }
    }
}

fn salinity_chart() -> ChartPayload {
    ChartPayload::BarPair {
        ocean_series: EQUATORIAL_SALINITY
            .iter()
            .map(|&(ocean, psu, region)| OceanSalinity {
                ocean_name: ocean.to_string(),
                salinity_psu: psu,
                region: region.to_string(),
            })
            .collect(),
        depth_series: SALINITY_BY_DEPTH
            .iter()
            .map(|&(depth, psu)| DepthSalinity {
                depth_label: depth.to_string(),
                salinity_psu: psu,
            })
            .collect(),
    }
}

fn temperature_chart() -> ChartPayload {
    ChartPayload::LineSeries {
        points: SIX_MONTH_TEMPERATURE
            .iter()
            .map(|&(month, temp)| MonthlyTemperature {
                month_label: month.to_string(),
                temperature_c: temp,
            })
            .collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================
