use crate::model::AlertFeature;

/// Placeholder for any field the alert doesn't carry.
pub const UNKNOWN: &str = "Unknown";

/// Render one alert as `Label: value` lines in a fixed order.
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    let or_unknown = |v: Option<&str>| v.unwrap_or(UNKNOWN).to_string();

    [
        ("Event", or_unknown(props.event.as_deref())),
        ("Area", or_unknown(props.area_desc.as_deref())),
        ("Severity", or_unknown(props.severity.as_deref())),
        ("Description", or_unknown(props.description.as_deref())),
        ("Instructions", or_unknown(props.instructions_text())),
    ]
    .iter()
    .map(|(label, value)| format!("{label}: {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}
