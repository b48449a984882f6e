//! Reading the opaque service responses.
//!
//! The service contract is not fixed, so everything here is an optional read:
//! a missing or oddly-typed field simply yields `None`.

use std::fmt;

use serde_json::Value;

/// The `error` field of a response body, if the service reported one.
///
/// Only a meaningful value counts: `null`, `false`, `0` and blank strings are
/// ignored so the rest of the body is still rendered.
pub fn service_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) if message.trim().is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Headline figures read out of a response, when present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YieldSummary {
    /// Yield in kg/ha. Read from `yield`, falling back to `predicted_yield`.
    pub yield_kg_per_ha: Option<f64>,
    /// Model confidence as a fraction in `[0, 1]`.
    pub confidence: Option<f64>,
}

impl YieldSummary {
    pub fn from_json(body: &Value) -> Self {
        let number = |key: &str| body.get(key).and_then(Value::as_f64).filter(|v| v.is_finite());
        Self {
            yield_kg_per_ha: number("yield").or_else(|| number("predicted_yield")),
            confidence: number("confidence"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.yield_kg_per_ha.is_none() && self.confidence.is_none()
    }

    pub fn risk(&self) -> RiskBucket {
        RiskBucket::from_confidence(self.confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
    Unknown,
}

impl RiskBucket {
    pub fn from_confidence(confidence: Option<f64>) -> Self {
        match confidence {
            Some(c) if c.is_nan() => RiskBucket::Unknown,
            Some(c) if c >= 0.8 => RiskBucket::Low,
            Some(c) if c >= 0.6 => RiskBucket::Moderate,
            Some(_) => RiskBucket::High,
            None => RiskBucket::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low Risk",
            RiskBucket::Moderate => "Moderate Risk",
            RiskBucket::High => "High Risk",
            RiskBucket::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds to whole kilograms and groups thousands: `4000.0` -> `"4,000 kg/ha"`.
pub fn format_yield(kg_per_ha: f64) -> String {
    format!("{} kg/ha", group_thousands(kg_per_ha.round() as i64))
}

/// `0.9` -> `"90%"`.
pub fn format_confidence(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Relative change from `baseline` to `value`, in percent.
pub fn percentage_change(baseline: f64, value: f64) -> Option<f64> {
    if baseline == 0.0 || !baseline.is_finite() || !value.is_finite() {
        return None;
    }
    Some((value - baseline) / baseline * 100.0)
}

/// Signed, one decimal: `12.345` -> `"+12.3%"`.
pub fn format_change(percent: f64) -> String {
    format!("{:+.1}%", percent)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_buckets() {
        assert_eq!(RiskBucket::from_confidence(Some(0.85)).label(), "Low Risk");
        assert_eq!(RiskBucket::from_confidence(Some(0.65)).label(), "Moderate Risk");
        assert_eq!(RiskBucket::from_confidence(Some(0.3)).label(), "High Risk");
        assert_eq!(RiskBucket::from_confidence(None).label(), "Unknown");
    }

    #[test]
    fn test_risk_thresholds_are_inclusive() {
        assert_eq!(RiskBucket::from_confidence(Some(0.8)), RiskBucket::Low);
        assert_eq!(RiskBucket::from_confidence(Some(0.6)), RiskBucket::Moderate);
        assert_eq!(RiskBucket::from_confidence(Some(0.5999)), RiskBucket::High);
        assert_eq!(RiskBucket::from_confidence(Some(f64::NAN)), RiskBucket::Unknown);
    }

    #[test]
    fn test_end_to_end_summary() {
        let summary = YieldSummary::from_json(&json!({"yield": 4000, "confidence": 0.9}));
        assert_eq!(format_yield(summary.yield_kg_per_ha.unwrap()), "4,000 kg/ha");
        assert_eq!(format_confidence(summary.confidence.unwrap()), "90%");
        assert_eq!(summary.risk().to_string(), "Low Risk");
    }

    #[test]
    fn test_summary_reads_predicted_yield_and_ignores_junk() {
        let summary = YieldSummary::from_json(&json!({"predicted_yield": 2512.4}));
        assert_eq!(summary.yield_kg_per_ha, Some(2512.4));
        assert_eq!(summary.confidence, None);

        let summary = YieldSummary::from_json(&json!({"yield": "lots", "confidence": null}));
        assert!(summary.is_empty());

        let summary = YieldSummary::from_json(&json!([1, 2, 3]));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_service_error_reads() {
        assert_eq!(service_error(&json!({"error": "boom"})), Some("boom".to_string()));
        assert_eq!(service_error(&json!({"error": null})), None);
        assert_eq!(service_error(&json!({"error": {"code": 7}})), Some("{\"code\":7}".to_string()));
        assert_eq!(service_error(&json!({"yield": 1})), None);
        assert_eq!(service_error(&json!({"error": true})), Some("true".to_string()));
    }

    #[test]
    fn test_falsy_service_error_is_ignored() {
        assert_eq!(service_error(&json!({"yield": 4000, "error": false})), None);
        assert_eq!(service_error(&json!({"yield": 4000, "error": ""})), None);
        assert_eq!(service_error(&json!({"yield": 4000, "error": "  "})), None);
        assert_eq!(service_error(&json!({"yield": 4000, "error": 0})), None);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_yield(0.0), "0 kg/ha");
        assert_eq!(format_yield(999.4), "999 kg/ha");
        assert_eq!(format_yield(1234567.0), "1,234,567 kg/ha");
        assert_eq!(format_yield(-4500.0), "-4,500 kg/ha");
    }

    #[test]
    fn test_percentage_change() {
        let change = percentage_change(4000.0, 4400.0).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
        assert_eq!(percentage_change(0.0, 10.0), None);
        assert_eq!(format_change(-12.345), "-12.3%");
        assert_eq!(format_change(10.0), "+10.0%");
    }
}
