//! Data records: the values filled into a template's fields

use crate::template::Template;
use crate::types::Result;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

/// A scalar field value.
///
/// Numbers keep the literal text they were written with (`2.50`, `1e2`,
/// integers wider than 64 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Raw string form; numbers keep the representation they were given in
    pub fn display(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Whether a checkbox bound to this value is checked
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            // Literals too large for f64 are non-zero
            FieldValue::Number(n) => n.as_f64().is_none_or(|v| v != 0.0),
            FieldValue::Text(s) => {
                let s = s.trim().to_ascii_lowercase();
                !matches!(s.as_str(), "" | "false" | "0" | "off" | "no")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<FieldValue, E> {
                Ok(FieldValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<FieldValue, E> {
                Ok(FieldValue::Number(v.into()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<FieldValue, E> {
                Ok(FieldValue::Number(v.into()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<FieldValue, E> {
                serde_json::Number::from_f64(v)
                    .map(FieldValue::Number)
                    .ok_or_else(|| E::custom(format!("non-finite number {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<FieldValue, E> {
                Ok(FieldValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<FieldValue, E> {
                Ok(FieldValue::Text(v))
            }

            // serde_json hands arbitrary-precision numbers over as a one-entry map
            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<FieldValue, A::Error> {
                serde_json::Number::deserialize(MapAccessDeserializer::new(map))
                    .map(FieldValue::Number)
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

/// Field name to value mapping. JSON `null` entries are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<FieldValue>>",
    into = "BTreeMap<String, FieldValue>"
)]
pub struct DataRecord {
    values: BTreeMap<String, FieldValue>,
}

impl From<BTreeMap<String, Option<FieldValue>>> for DataRecord {
    fn from(map: BTreeMap<String, Option<FieldValue>>) -> Self {
        Self {
            values: map
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        }
    }
}

impl From<DataRecord> for BTreeMap<String, FieldValue> {
    fn from(record: DataRecord) -> Self {
        record.values
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DataRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}

/// Parse records from JSON: either one object or an array of objects
pub fn records_from_json(json: &str) -> Result<Vec<DataRecord>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<DataRecord>),
        One(DataRecord),
    }

    Ok(match serde_json::from_str(json)? {
        OneOrMany::Many(records) => records,
        OneOrMany::One(record) => vec![record],
    })
}

/// Parse records from CSV: the header row names the fields, each row is one record.
/// Empty cells are left absent.
pub fn records_from_csv(reader: impl Read) -> Result<Vec<DataRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: DataRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// A required field without a usable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub page: usize,
    pub name: String,
}

/// List required fields the record leaves absent or blank, in page order
pub fn missing_required(template: &Template, record: &DataRecord) -> Vec<MissingField> {
    template
        .fields()
        .filter(|(_, field)| field.required)
        .filter(|(_, field)| record.get(&field.name).is_none_or(FieldValue::is_empty))
        .map(|(page, field)| MissingField {
            page,
            name: field.name.clone(),
        })
        .collect()
}
