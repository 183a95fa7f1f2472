use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A region code as supplied by the caller, e.g. "CA" or "NY".
///
/// No validation is performed; whatever the caller sends is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertQuery {
    pub state: String,
}

impl AlertQuery {
    pub fn new(state: impl Into<String>) -> Self {
        Self { state: state.into() }
    }
}

/// Decoded body of `/alerts/active/area/{state}`.
///
/// `features: None` (missing or `null`) and `features: Some(vec![])` are
/// different outcomes for the caller. Only a JSON object decodes; any other
/// top-level value is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AlertPayload {
    pub features: Option<Vec<AlertFeature>>,
}

impl TryFrom<Map<String, Value>> for AlertPayload {
    type Error = serde_json::Error;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let features = match body.remove("features") {
            Some(value) => serde_json::from_value(value)?,
            None => None,
        };

        Ok(Self { features })
    }
}

/// One active alert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertProperties {
    #[serde(default)]
    pub event: Option<String>,

    #[serde(default, rename = "areaDesc")]
    pub area_desc: Option<String>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub instructions: Option<String>,

    /// The live NWS API spells it `instruction`.
    #[serde(default)]
    pub instruction: Option<String>,
}

impl AlertProperties {
    /// `instructions`, falling back to NWS's `instruction`.
    pub fn instructions_text(&self) -> Option<&str> {
        self.instructions.as_deref().or(self.instruction.as_deref())
    }
}
