use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::warn;
use wayclass::EdgeAttributes;

/// One line of input: an opaque ID and the way's tags.
#[derive(Deserialize, Debug)]
pub struct WayRecord {
    #[serde(default)]
    pub id: JsonValue,
    pub tags: Tags,
}

/// Tags either as ordered `[key, value]` pairs or as an object.
///
/// Objects keep their key order (`serde_json` is built with `preserve_order`).
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Tags {
    Pairs(Vec<(String, String)>),
    Object(Map<String, JsonValue>),
}

impl Tags {
    /// Iterates over the string-valued tags in order.
    /// Non-string values cannot be OSM tags and are skipped.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        match self {
            Tags::Pairs(pairs) => Box::new(
                pairs
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            ),
            Tags::Object(object) => Box::new(object.iter().filter_map(|(key, value)| {
                if let JsonValue::String(value) = value {
                    Some((key.as_str(), value.as_str()))
                } else {
                    warn!(key = key.as_str(), %value, "Skipping non-string tag value");
                    None
                }
            })),
        }
    }
}

/// Bike and foot access as numeric codes rather than names.
#[derive(Serialize, Debug)]
struct EdgeCodes {
    car_direct: u32,
    car_reverse: u32,
    bike_direct: u8,
    bike_reverse: u8,
    foot: u8,
}

impl From<&EdgeAttributes> for EdgeCodes {
    fn from(value: &EdgeAttributes) -> Self {
        Self {
            car_direct: value.car_direct(),
            car_reverse: value.car_reverse(),
            bike_direct: value.bike_direct().code(),
            bike_reverse: value.bike_reverse().code(),
            foot: value.foot().code(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Attributes {
    Named(EdgeAttributes),
    Coded(EdgeCodes),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_null(id: &&JsonValue) -> bool {
    id.is_null()
}

/// One line of output.
#[derive(Serialize, Debug)]
pub struct ClassifiedWay<'a> {
    #[serde(skip_serializing_if = "is_null")]
    id: &'a JsonValue,
    #[serde(flatten)]
    attributes: Attributes,
}

impl ClassifiedWay<'_> {
    pub fn new<'a>(
        id: &'a JsonValue,
        attributes: EdgeAttributes,
        numeric_codes: bool,
    ) -> ClassifiedWay<'a> {
        ClassifiedWay {
            id,
            attributes: if numeric_codes {
                Attributes::Coded(EdgeCodes::from(&attributes))
            } else {
                Attributes::Named(attributes)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_keep_order_and_duplicates() {
        let record: WayRecord = serde_json::from_str(
            r#"{"id": 1, "tags": [["highway", "motorway"], ["highway", "residential"]]}"#,
        )
        .unwrap();
        let tags: Vec<_> = record.tags.iter().collect();
        assert_eq!(
            tags,
            vec![("highway", "motorway"), ("highway", "residential")]
        );
    }

    #[test]
    fn test_object_keeps_order_and_skips_non_strings() {
        let record: WayRecord = serde_json::from_str(
            r#"{"tags": {"oneway": "yes", "lanes": 2, "cycleway": "opposite"}}"#,
        )
        .unwrap();
        assert_eq!(record.id, JsonValue::Null);
        let tags: Vec<_> = record.tags.iter().collect();
        assert_eq!(tags, vec![("oneway", "yes"), ("cycleway", "opposite")]);
    }
}
