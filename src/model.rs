//! Dashboard data model
//!
//! Wire types for the two dashboard endpoints and the records the view
//! layer derives from them.
//!
//! Both endpoints wrap their payload in a `{ "result": ... }` envelope. A
//! missing or `null` result decodes to the empty value for that endpoint,
//! which is also what the dashboard shows before anything has loaded.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DashboardResult;

/// Aggregate counters shown at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub total_point: f64,
    pub total_power: f64,
    pub total_asterix: f64,
    pub stake_address_count: f64,
}

impl SummaryRecord {
    /// Shallow-merge a fetched patch over this record, producing a new snapshot
    pub fn merge(&self, patch: &SummaryPatch) -> Self {
        Self {
            total_point: patch.total_point.unwrap_or(self.total_point),
            total_power: patch.total_power.unwrap_or(self.total_power),
            total_asterix: patch.total_asterix.unwrap_or(self.total_asterix),
            stake_address_count: patch
                .stake_address_count
                .unwrap_or(self.stake_address_count),
        }
    }

    /// Counters as `(wire key, value)` pairs, in display order
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("totalPoint", self.total_point),
            ("totalPower", self.total_power),
            ("totalAsterix", self.total_asterix),
            ("stakeAddressCount", self.stake_address_count),
        ]
    }
}

/// Summary payload as fetched; absent or `null` fields keep their defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPatch {
    #[serde(default, deserialize_with = "de::counter")]
    pub total_point: Option<f64>,
    #[serde(default, deserialize_with = "de::counter")]
    pub total_power: Option<f64>,
    #[serde(default, deserialize_with = "de::counter")]
    pub total_asterix: Option<f64>,
    #[serde(default, deserialize_with = "de::counter")]
    pub stake_address_count: Option<f64>,
}

impl SummaryPatch {
    /// Merge over the default (all zero) summary
    pub fn into_record(self) -> SummaryRecord {
        SummaryRecord::default().merge(&self)
    }
}

/// One leaderboard entry per address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    /// 1-based fetch-order position, assigned by [`assign_indices`]
    #[serde(skip_deserializing)]
    pub index: usize,

    #[serde(default, deserialize_with = "de::text")]
    pub owner_address: String,

    /// Numeric string; may be empty
    #[serde(default, deserialize_with = "de::text")]
    pub point: String,

    #[serde(
        default,
        deserialize_with = "de::nullable_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub asterix: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::nullable_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub power: Option<String>,
}

impl ListRecord {
    pub fn new(owner_address: impl Into<String>, point: impl Into<String>) -> Self {
        Self {
            owner_address: owner_address.into(),
            point: point.into(),
            ..Default::default()
        }
    }
}

/// A list record plus its display-only short address
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedListRecord {
    #[serde(flatten)]
    pub record: ListRecord,
    pub short_address: String,
}

/// `{ "result": T }` response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub result: Option<T>,
}

impl<T: Default> Envelope<T> {
    pub fn into_result(self) -> T {
        self.result.unwrap_or_default()
    }
}

/// Number records 1..=n in fetch order, overwriting any index sent by the server
pub fn assign_indices(mut records: Vec<ListRecord>) -> Vec<ListRecord> {
    for (i, record) in records.iter_mut().enumerate() {
        record.index = i + 1;
    }
    records
}

/// Decode a `/dashboard/summary` response body
pub fn decode_summary(body: &[u8]) -> DashboardResult<SummaryPatch> {
    let envelope: Envelope<SummaryPatch> = serde_json::from_slice(body)?;
    Ok(envelope.into_result())
}

/// Decode a `/dashboard/list` response body and assign indices
pub fn decode_list(body: &[u8]) -> DashboardResult<Vec<ListRecord>> {
    let envelope: Envelope<Vec<ListRecord>> = serde_json::from_slice(body)?;
    Ok(assign_indices(envelope.into_result()))
}

/// Lenient field decoders; the endpoints mix JSON numbers and numeric strings.
mod de {
    use super::*;
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(serde_json::Number),
        Text(String),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Number(n) => n.to_string(),
                Scalar::Text(s) => s,
            }
        }
    }

    pub fn counter<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Scalar>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Scalar::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("counter out of range: {}", n))),
            Some(Scalar::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid counter: {:?}", s))),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?
            .map(Scalar::into_text)
            .unwrap_or_default())
    }

    pub fn nullable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
    }
}
