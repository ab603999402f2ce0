//! Fixed strings offered to the display surface.
//!
//! Quick actions only pre-fill the input field. The engine gives them no
//! special treatment; they are matched like any typed query.

/// Greeting seeded into sessions created with a welcome message.
pub const WELCOME_MESSAGE: &str = "Welcome to TratonAI! I can help you explore ARGO oceanographic data, analyze marine patterns, and answer questions about ocean conditions. What would you like to discover today?";

/// Label shown while a reply is pending.
pub const TYPING_INDICATOR: &str = "Analyzing ARGO data...";

/// A suggested query shown as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Temperature",
        query: "Show me the current sea surface temperature in the Pacific Ocean",
    },
    QuickAction {
        label: "Salinity",
        query: "Show me salinity levels at the equator in March 2023",
    },
    QuickAction {
        label: "Currents",
        query: "Show me the current patterns in the Atlantic Ocean",
    },
    QuickAction {
        label: "Ecosystems",
        query: "What marine ecosystems are affected by temperature changes?",
    },
];
