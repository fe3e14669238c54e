//! # Data Model
//!
//! The flat record types written to the output JSON files, plus the
//! `Named` trait that the sorter keys on.
//!
//! Field names are part of the output contract and are kept in Czech to
//! match the files consumed downstream (`kod` = municipality code,
//! `okres` = district, `kraj` = region, `psc` = postal code). Optional
//! fields are omitted from the serialized output entirely rather than
//! emitted as null.

use serde::{Deserialize, Serialize};

/// One row of geographic/administrative data for a named place.
///
/// All loaders produce this shape; sources that lack a field (for
/// example Overpass has no municipality code) leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the municipality. Never empty.
    pub name: String,
    /// Official municipality code, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kod: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// District name. Empty string when the source does not carry it.
    #[serde(default)]
    pub okres: String,
    /// Region name. Empty string when the source does not carry it.
    #[serde(default)]
    pub kraj: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kod_okresu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kod_kraje: Option<String>,
    /// Postal code, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psc: Option<String>,
    /// OpenStreetMap element id, for records loaded from Overpass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
}

impl Record {
    /// Minimal constructor used by tests and examples: a name and a
    /// coordinate pair, everything else absent.
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Record {
            name: name.to_string(),
            kod: None,
            lat,
            lon,
            okres: String::new(),
            kraj: String::new(),
            kod_okresu: None,
            kod_kraje: None,
            psc: None,
            osm_id: None,
        }
    }

    /// Project down to the field subset the merged town list carries:
    /// name, code, coordinates, district and region. Postal code, the
    /// per-district/region codes and the OSM id are dropped.
    pub fn projected(&self) -> Record {
        Record {
            name: self.name.clone(),
            kod: self.kod.clone(),
            lat: self.lat,
            lon: self.lon,
            okres: self.okres.clone(),
            kraj: self.kraj.clone(),
            kod_okresu: None,
            kod_kraje: None,
            psc: None,
            osm_id: None,
        }
    }
}

/// A city/town place node from the towns fetch.
///
/// Separate from [`Record`] because the towns output carries the place
/// class and raw population tag instead of administrative names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// OSM place class: `"city"` for large cities, `"town"` otherwise.
    #[serde(rename = "type")]
    pub place_type: String,
    /// Raw population tag as a string; empty when untagged.
    #[serde(default)]
    pub population: String,
    pub osm_id: i64,
}

/// Anything with a display name the writer can sort on.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Record {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TownRecord {
    fn name(&self) -> &str {
        &self.name
    }
}
