//! Dataset - Realtime Node Pricing Snapshot
//!
//! Wire decoding of the backend's `miso-rt-data` document. Numeric fields arrive
//! either as JSON numbers or numeric strings and are kept as received until
//! display time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use snafu::ResultExt;

use crate::error::{DecodeSnafu, Error, Result};

/// A price component as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    /// Anything else (bool, object, ...), never numeric
    Other(serde_json::Value),
}

impl PriceValue {
    /// Parse into a finite number
    ///
    /// Text is trimmed before parsing. Non-finite results (`NaN`, `inf`) count
    /// as unparseable.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(s) => s.trim().parse::<f64>().ok()?,
            PriceValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        PriceValue::Number(value)
    }
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        PriceValue::Text(value.to_string())
    }
}

/// A single priced node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node name, unique within a dataset
    #[serde(default)]
    pub node: String,
    /// Locational marginal price
    #[serde(default)]
    pub lmp: Option<PriceValue>,
    /// Marginal congestion component
    #[serde(default)]
    pub mcc: Option<PriceValue>,
    /// Marginal loss component
    #[serde(default)]
    pub mlc: Option<PriceValue>,
}

impl NodeRecord {
    pub fn new(
        node: impl Into<String>,
        lmp: impl Into<PriceValue>,
        mcc: impl Into<PriceValue>,
        mlc: impl Into<PriceValue>,
    ) -> Self {
        Self {
            node: node.into(),
            lmp: Some(lmp.into()),
            mcc: Some(mcc.into()),
            mlc: Some(mlc.into()),
        }
    }
}

/// Snapshot of one backend response, replaced wholesale on every successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub interval_start: Option<DateTime<Utc>>,
    pub interval_end: Option<DateTime<Utc>>,
    pub node_count: usize,
    pub nodes: Vec<NodeRecord>,
}

#[derive(Debug, Deserialize)]
struct WireDataset {
    #[serde(default, deserialize_with = "deserialize_interval")]
    interval_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_interval")]
    interval_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_count")]
    node_count: Option<usize>,
    #[serde(default)]
    nodes: Option<Vec<NodeRecord>>,
}

impl Dataset {
    /// Decode a response body fetched from `url`
    ///
    /// A body without a `nodes` array is rejected with [`Error::MissingNodes`].
    pub fn from_json(url: &str, body: &str) -> Result<Self> {
        let wire: Option<WireDataset> = serde_json::from_str(body).context(DecodeSnafu { url })?;
        let Some(wire) = wire else {
            return Err(Error::MissingNodes {
                url: url.to_string(),
            });
        };
        let Some(nodes) = wire.nodes else {
            return Err(Error::MissingNodes {
                url: url.to_string(),
            });
        };

        let node_count = wire.node_count.unwrap_or(nodes.len());

        Ok(Self {
            interval_start: wire.interval_start,
            interval_end: wire.interval_end,
            node_count,
            nodes,
        })
    }

    /// Build a dataset from records, deriving the node count
    pub fn from_nodes(nodes: Vec<NodeRecord>) -> Self {
        Self {
            interval_start: None,
            interval_end: None,
            node_count: nodes.len(),
            nodes,
        }
    }
}

/// Parse an interval timestamp
///
/// Accepts RFC 3339 (converted to UTC) or an offset-less ISO timestamp, which
/// the backend emits in UTC.
pub fn parse_interval_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_interval<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = raw.as_ref().and_then(|v| v.as_str()).and_then(parse_interval_time);
    if parsed.is_none() {
        if let Some(value) = raw.filter(|v| !v.is_null()) {
            tracing::warn!(%value, "Unparseable interval timestamp");
        }
    }
    Ok(parsed)
}

/// Non-negative whole count from a number or numeric string
fn parse_count(value: &serde_json::Value) -> Option<usize> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    usize::try_from(n).ok()
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = raw.as_ref().and_then(parse_count);
    if parsed.is_none() {
        if let Some(value) = raw.filter(|v| !v.is_null()) {
            tracing::warn!(%value, "Unusable node_count, counting nodes instead");
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const URL: &str = "http://localhost:8000/api/miso-rt-data/";

    #[test]
    fn test_decode_backend_document() {
        let body = r#"{
            "interval_start": "2025-03-01T14:05:00",
            "interval_end": "2025-03-01T14:10:00",
            "node_count": 2,
            "nodes": [
                {"id": 1, "node": "AECI.ALTW", "lmp": 23.41, "mcc": -0.12, "mlc": 0.53},
                {"id": 2, "node": "ALTE.ALTE", "lmp": "25.10", "mcc": "0.00", "mlc": "1.2"}
            ]
        }"#;

        let dataset = Dataset::from_json(URL, body).expect("decode");
        assert_eq!(dataset.node_count, 2);
        assert_eq!(dataset.nodes.len(), 2);
        assert_eq!(dataset.nodes[0].node, "AECI.ALTW");
        assert_eq!(dataset.nodes[0].lmp, Some(PriceValue::Number(23.41)));
        assert_eq!(dataset.nodes[1].lmp, Some(PriceValue::Text("25.10".to_string())));

        let start = dataset.interval_start.expect("start");
        assert_eq!((start.hour(), start.minute()), (14, 5));
        let end = dataset.interval_end.expect("end");
        assert_eq!((end.hour(), end.minute()), (14, 10));
    }

    #[test]
    fn test_missing_nodes_is_failure() {
        let body = r#"{"interval_start": "2025-03-01T14:05:00", "node_count": 0}"#;
        let err = Dataset::from_json(URL, body).expect_err("must fail");
        assert!(matches!(err, Error::MissingNodes { .. }));
    }

    #[test]
    fn test_null_body_is_failure() {
        let err = Dataset::from_json(URL, "null").expect_err("must fail");
        assert!(matches!(err, Error::MissingNodes { .. }));
    }

    #[test]
    fn test_malformed_body_is_decode_failure() {
        let err = Dataset::from_json(URL, "<html>502</html>").expect_err("must fail");
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_error_payload_is_failure() {
        let body = r#"{"error": "Failed to fetch data from MISO API. Status code: 503"}"#;
        let err = Dataset::from_json(URL, body).expect_err("must fail");
        assert!(matches!(err, Error::MissingNodes { .. }));
    }

    #[test]
    fn test_node_count_falls_back_to_len() {
        let body = r#"{"nodes": [{"node": "A", "lmp": 1}, {"node": "B", "lmp": 2}]}"#;
        let dataset = Dataset::from_json(URL, body).expect("decode");
        assert_eq!(dataset.node_count, 2);
        assert!(dataset.interval_start.is_none());
    }

    #[test]
    fn test_loose_node_count_forms() {
        let nodes = r#"[{"node": "A", "lmp": 1}, {"node": "B", "lmp": 2}]"#;
        let decode = |count: &str| {
            let body = format!(r#"{{"node_count": {count}, "nodes": {nodes}}}"#);
            Dataset::from_json(URL, &body).expect("decode").node_count
        };

        assert_eq!(decode(r#""2""#), 2);
        assert_eq!(decode("2.0"), 2);
        assert_eq!(decode("7"), 7);
        assert_eq!(decode(r#"" 9 ""#), 9);
        // Unusable counts fall back to the array length
        assert_eq!(decode("-3"), 2);
        assert_eq!(decode("2.5"), 2);
        assert_eq!(decode(r#""two""#), 2);
        assert_eq!(decode("null"), 2);
        assert_eq!(decode("[1]"), 2);
    }

    #[test]
    fn test_odd_values_do_not_fail_decode() {
        let body = r#"{
            "interval_start": 12345,
            "nodes": [{"node": "A", "lmp": true, "mcc": null}]
        }"#;
        let dataset = Dataset::from_json(URL, body).expect("decode");
        assert!(dataset.interval_start.is_none());
        assert_eq!(dataset.nodes[0].lmp.as_ref().and_then(PriceValue::as_f64), None);
        assert_eq!(dataset.nodes[0].mcc, None);
        assert_eq!(dataset.nodes[0].mlc, None);
    }

    #[test]
    fn test_price_value_parse() {
        assert_eq!(PriceValue::from(42.5).as_f64(), Some(42.5));
        assert_eq!(PriceValue::from(" 42.5 ").as_f64(), Some(42.5));
        assert_eq!(PriceValue::from("-3").as_f64(), Some(-3.0));
        assert_eq!(PriceValue::from("abc").as_f64(), None);
        assert_eq!(PriceValue::from("").as_f64(), None);
        assert_eq!(PriceValue::from("NaN").as_f64(), None);
        assert_eq!(PriceValue::from(f64::NAN).as_f64(), None);
        assert_eq!(PriceValue::from(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn test_parse_interval_time_variants() {
        assert!(parse_interval_time("2025-03-01T14:05:00").is_some());
        assert!(parse_interval_time("2025-03-01T14:05:00.250").is_some());

        let offset = parse_interval_time("2025-03-01T09:05:00-05:00").expect("rfc3339");
        assert_eq!(offset.hour(), 14);

        assert!(parse_interval_time("yesterday").is_none());
    }
}
