//! # Overpass API Loader
//!
//! Fetches Czech municipality and city/town data from the Overpass API,
//! trying a fixed mirror list in order until one yields a usable
//! payload.
//!
//! ## Attempt semantics
//!
//! An attempt succeeds only when the mirror returns HTTP 200, the body
//! is non-empty, it parses as the Overpass JSON envelope and it carries
//! at least one element. Anything else — transport error, timeout,
//! empty body, parse failure, zero elements — is logged as a warning
//! and the next mirror is tried. When every mirror has failed the
//! loader returns [`Error::SourcesExhausted`]; there is no backoff and
//! no partial-result caching between attempts.
//!
//! Elements missing a name or coordinates are skipped and counted, not
//! fatal.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::record::{Record, TownRecord};
use crate::source::{excerpt, Loaded, Transport};

/// Query for all municipalities: administrative boundaries at
/// admin_level 8 within the Czech area, with computed centers.
pub const MUNICIPALITY_QUERY: &str = r#"
[out:json][timeout:300];
area["ISO3166-1"="CZ"]->.cz;
(
  relation["boundary"="administrative"]["admin_level"="8"](area.cz);
);
out center;
"#;

/// Query for city and town place nodes within the Czech area.
pub const TOWNS_QUERY: &str = r#"
[out:json][timeout:120];
area["ISO3166-1"="CZ"]->.cz;
(
  node["place"="city"](area.cz);
  node["place"="town"](area.cz);
);
out;
"#;

/// Overpass response envelope. Only the fields the loaders read.
#[derive(Debug, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
pub struct Element {
    pub id: i64,
    /// Coordinates present on nodes.
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Computed center, present on relations queried with `out center`.
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default, rename = "is_in:county")]
    pub county: Option<String>,
    #[serde(default, rename = "is_in:state")]
    pub state: Option<String>,
}

/// Fetch all Czech municipalities (admin_level=8) via the mirror list.
pub fn fetch_municipalities(
    transport: &dyn Transport,
    mirrors: &[&str],
) -> Result<Loaded<Record>> {
    let payload = fetch_payload(transport, mirrors, MUNICIPALITY_QUERY)?;
    Ok(municipality_records(payload))
}

/// Fetch Czech city/town place nodes via the mirror list.
pub fn fetch_towns(transport: &dyn Transport, mirrors: &[&str]) -> Result<Loaded<TownRecord>> {
    let payload = fetch_payload(transport, mirrors, TOWNS_QUERY)?;
    Ok(town_records(payload))
}

/// Try each mirror in order; first usable payload wins.
fn fetch_payload(transport: &dyn Transport, mirrors: &[&str], query: &str) -> Result<Payload> {
    for mirror in mirrors {
        log::info!("Trying {mirror}");
        match try_mirror(transport, mirror, query) {
            Ok(payload) => {
                log::info!("Received {} elements from {mirror}", payload.elements.len());
                return Ok(payload);
            }
            Err(err) => log::warn!("{mirror} failed: {err}"),
        }
    }
    Err(Error::SourcesExhausted {
        attempts: mirrors.len(),
    })
}

fn try_mirror(transport: &dyn Transport, mirror: &str, query: &str) -> Result<Payload> {
    let body = transport.post_form(mirror, &[("data", query)])?;
    let payload = parse_payload(&body)?;
    if payload.elements.is_empty() {
        return Err(Error::Payload {
            message: "no elements in response".to_string(),
            excerpt: excerpt(&body),
        });
    }
    Ok(payload)
}

/// Parse the raw response body into the Overpass envelope.
pub fn parse_payload(body: &str) -> Result<Payload> {
    if body.trim().is_empty() {
        return Err(Error::Payload {
            message: "empty response body".to_string(),
            excerpt: String::new(),
        });
    }
    serde_json::from_str(body).map_err(|e| Error::Payload {
        message: e.to_string(),
        excerpt: excerpt(body),
    })
}

/// Project relation elements into municipality records. Elements
/// without a name or a computed center are skipped and counted; a
/// blank name counts as missing.
pub fn municipality_records(payload: Payload) -> Loaded<Record> {
    let mut records = Vec::new();
    let mut skipped = 0;
    for element in payload.elements {
        let (Some(name), Some(center)) = (element.tags.name, element.center) else {
            skipped += 1;
            continue;
        };
        if name.trim().is_empty() {
            skipped += 1;
            continue;
        }
        records.push(Record {
            name,
            kod: None,
            lat: center.lat,
            lon: center.lon,
            okres: element.tags.county.unwrap_or_default(),
            kraj: element.tags.state.unwrap_or_default(),
            kod_okresu: None,
            kod_kraje: None,
            psc: None,
            osm_id: Some(element.id),
        });
    }
    Loaded { records, skipped }
}

/// Project place nodes into town records. Nodes without a name or
/// coordinates are skipped and counted; a blank name counts as
/// missing.
pub fn town_records(payload: Payload) -> Loaded<TownRecord> {
    let mut records = Vec::new();
    let mut skipped = 0;
    for element in payload.elements {
        let (Some(name), Some(lat), Some(lon)) = (element.tags.name, element.lat, element.lon)
        else {
            skipped += 1;
            continue;
        };
        if name.trim().is_empty() {
            skipped += 1;
            continue;
        }
        records.push(TownRecord {
            name,
            lat,
            lon,
            place_type: element.tags.place.unwrap_or_default(),
            population: element.tags.population.unwrap_or_default(),
            osm_id: element.id,
        });
    }
    Loaded { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory transport feeding a scripted sequence of responses.
    struct FakeTransport {
        responses: RefCell<Vec<Result<String>>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn new(responses: Vec<Result<String>>) -> Self {
            FakeTransport {
                responses: RefCell::new(responses),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        fn post_form(&self, url: &str, _form: &[(&str, &str)]) -> Result<String> {
            self.calls.borrow_mut().push(url.to_string());
            self.responses.borrow_mut().remove(0)
        }

        fn get(&self, url: &str) -> Result<String> {
            self.calls.borrow_mut().push(url.to_string());
            self.responses.borrow_mut().remove(0)
        }
    }

    fn network_err(url: &str) -> Error {
        Error::Network {
            url: url.to_string(),
            message: "connection refused".to_string(),
        }
    }

    const RELATION_BODY: &str = r#"{
        "elements": [
            {
                "id": 435541,
                "center": {"lat": 49.9522, "lon": 15.7952},
                "tags": {
                    "name": "Chrudim",
                    "is_in:county": "Chrudim",
                    "is_in:state": "Pardubický kraj"
                }
            },
            {
                "id": 435542,
                "tags": {"name": "Bezejmenov"}
            }
        ]
    }"#;

    const NODE_BODY: &str = r#"{
        "elements": [
            {
                "id": 435514,
                "lat": 50.0874654,
                "lon": 14.4212535,
                "tags": {"name": "Praha", "place": "city", "population": "1384732"}
            },
            {
                "id": 435515,
                "lat": 49.7,
                "lon": 13.4,
                "tags": {"place": "town"}
            }
        ]
    }"#;

    #[test]
    fn test_fallback_uses_third_mirror_after_two_failures() {
        let transport = FakeTransport::new(vec![
            Err(network_err("https://a")),
            Err(network_err("https://b")),
            Ok(RELATION_BODY.to_string()),
        ]);

        let loaded =
            fetch_municipalities(&transport, &["https://a", "https://b", "https://c"]).unwrap();

        assert_eq!(transport.calls.borrow().len(), 3);
        assert_eq!(transport.calls.borrow()[2], "https://c");
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].name, "Chrudim");
    }

    #[test]
    fn test_all_mirrors_failing_exhausts_sources() {
        let transport = FakeTransport::new(vec![
            Err(network_err("https://a")),
            Ok(String::new()),
            Ok("not json".to_string()),
        ]);

        let err = fetch_municipalities(&transport, &["https://a", "https://b", "https://c"])
            .unwrap_err();
        assert!(matches!(err, Error::SourcesExhausted { attempts: 3 }));
    }

    #[test]
    fn test_empty_element_list_counts_as_failure() {
        let transport = FakeTransport::new(vec![
            Ok(r#"{"elements": []}"#.to_string()),
            Ok(RELATION_BODY.to_string()),
        ]);

        let loaded = fetch_municipalities(&transport, &["https://a", "https://b"]).unwrap();
        assert_eq!(transport.calls.borrow().len(), 2);
        assert_eq!(loaded.records.len(), 1);
    }

    #[test]
    fn test_parse_payload_rejects_empty_body() {
        let err = parse_payload("  \n").unwrap_err();
        assert!(matches!(err, Error::Payload { .. }));
    }

    #[test]
    fn test_parse_payload_reports_excerpt_for_garbage() {
        let err = parse_payload("<html>mirror busy</html>").unwrap_err();
        match err {
            Error::Payload { excerpt, .. } => assert!(excerpt.contains("mirror busy")),
            other => panic!("expected Payload error, got {other:?}"),
        }
    }

    #[test]
    fn test_municipality_records_projects_tags_and_center() {
        let payload = parse_payload(RELATION_BODY).unwrap();
        let loaded = municipality_records(payload);

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
        let record = &loaded.records[0];
        assert_eq!(record.name, "Chrudim");
        assert_eq!(record.okres, "Chrudim");
        assert_eq!(record.kraj, "Pardubický kraj");
        assert_eq!(record.osm_id, Some(435541));
        assert!((record.lat - 49.9522).abs() < 1e-9);
    }

    #[test]
    fn test_municipality_records_skips_blank_names() {
        let body = r#"{
            "elements": [
                {"id": 1, "center": {"lat": 49.0, "lon": 15.0}, "tags": {"name": ""}},
                {"id": 2, "center": {"lat": 49.1, "lon": 15.1}, "tags": {"name": "  "}},
                {"id": 3, "center": {"lat": 49.2, "lon": 15.2}, "tags": {"name": "Telč"}}
            ]
        }"#;
        let loaded = municipality_records(parse_payload(body).unwrap());

        assert_eq!(loaded.skipped, 2);
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].name, "Telč");
        assert!(loaded.records.iter().all(|r| !r.name.trim().is_empty()));
    }

    #[test]
    fn test_town_records_skips_blank_names() {
        let body = r#"{
            "elements": [
                {"id": 1, "lat": 49.0, "lon": 15.0, "tags": {"name": "", "place": "town"}},
                {"id": 2, "lat": 49.2, "lon": 15.2, "tags": {"name": "Polná", "place": "town"}}
            ]
        }"#;
        let loaded = town_records(parse_payload(body).unwrap());

        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].name, "Polná");
    }

    #[test]
    fn test_town_records_skips_unnamed_nodes() {
        let payload = parse_payload(NODE_BODY).unwrap();
        let loaded = town_records(payload);

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
        let town = &loaded.records[0];
        assert_eq!(town.name, "Praha");
        assert_eq!(town.place_type, "city");
        assert_eq!(town.population, "1384732");
        assert_eq!(town.osm_id, 435514);
    }

    #[test]
    fn test_queries_target_czech_area() {
        assert!(MUNICIPALITY_QUERY.contains(r#""ISO3166-1"="CZ""#));
        assert!(MUNICIPALITY_QUERY.contains("admin_level"));
        assert!(TOWNS_QUERY.contains(r#""place"="city""#));
        assert!(TOWNS_QUERY.contains(r#""place"="town""#));
    }
}
