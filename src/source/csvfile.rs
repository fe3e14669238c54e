//! # Delimited-File Loaders
//!
//! Two CSV sources feed municipality records:
//!
//! - a local export (`souradnice_raw.csv`) with a fixed Czech column
//!   header contract, read by the `convert` command, and
//! - the vyskocilm/czech-cities CSV on GitHub, fetched as the fallback
//!   when every Overpass mirror fails.
//!
//! A missing required column in the local file is a hard error naming
//! the column; individual rows with unparsable coordinates or blank
//! names are skipped and counted, and the run continues.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::source::{excerpt, Loaded, Transport};

/// Header contract of the local coordinate export.
const REQUIRED_COLUMNS: [&str; 9] = [
    "Obec",
    "Kód obce",
    "Okres",
    "Kód okresu",
    "Kraj",
    "Kód kraje",
    "PSČ",
    "Latitude",
    "Longitude",
];

#[derive(Debug, Deserialize)]
struct LocalRow {
    #[serde(rename = "Obec")]
    name: String,
    #[serde(rename = "Kód obce")]
    kod: String,
    #[serde(rename = "Okres")]
    okres: String,
    #[serde(rename = "Kód okresu")]
    kod_okresu: String,
    #[serde(rename = "Kraj")]
    kraj: String,
    #[serde(rename = "Kód kraje")]
    kod_kraje: String,
    #[serde(rename = "PSČ")]
    psc: String,
    #[serde(rename = "Latitude")]
    lat: String,
    #[serde(rename = "Longitude")]
    lon: String,
}

/// Row shape of the czech-cities GitHub export. Columns the loader
/// does not consume (`nazev_ascii`, code columns) are simply ignored.
#[derive(Debug, Deserialize)]
struct GithubRow {
    #[serde(default)]
    kod: String,
    #[serde(default)]
    nazev: String,
    #[serde(default)]
    okres_nazev: String,
    #[serde(default)]
    kraj_nazev: String,
    #[serde(default)]
    psc: String,
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lng: String,
}

/// Read the local coordinate CSV into municipality records.
pub fn read_csv_file(path: &Path) -> Result<Loaded<Record>> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Csv {
            path: display.clone(),
            message: e.to_string(),
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(Error::MissingColumn {
                column: column.to_string(),
                path: display,
            });
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0;
    for row in reader.deserialize::<LocalRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                log::warn!("Skipping unreadable row in {display}: {err}");
                skipped += 1;
                continue;
            }
        };
        match build_record(
            &row.name,
            &row.lat,
            &row.lon,
            &row.okres,
            &row.kraj,
            Some(&row.kod),
            Some(&row.kod_okresu),
            Some(&row.kod_kraje),
            Some(&row.psc),
        ) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    Ok(Loaded { records, skipped })
}

/// Fetch and parse the czech-cities CSV export.
pub fn fetch_github_csv(transport: &dyn Transport, url: &str) -> Result<Loaded<Record>> {
    let body = transport.get(url)?;
    if body.trim().is_empty() {
        return Err(Error::Payload {
            message: "empty CSV body".to_string(),
            excerpt: String::new(),
        });
    }

    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut records = Vec::new();
    let mut skipped = 0;
    for row in reader.deserialize::<GithubRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                log::warn!("Skipping unreadable row from {url}: {err}");
                skipped += 1;
                continue;
            }
        };
        match build_record(
            &row.nazev,
            &row.lat,
            &row.lng,
            &row.okres_nazev,
            &row.kraj_nazev,
            Some(&row.kod),
            None,
            None,
            Some(&row.psc),
        ) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if records.is_empty() {
        return Err(Error::Payload {
            message: "no usable rows in CSV".to_string(),
            excerpt: excerpt(&body),
        });
    }
    Ok(Loaded { records, skipped })
}

/// Assemble a record from string fields, rejecting blank names and
/// unparsable coordinates. Empty optional fields become `None`.
#[allow(clippy::too_many_arguments)]
fn build_record(
    name: &str,
    lat: &str,
    lon: &str,
    okres: &str,
    kraj: &str,
    kod: Option<&str>,
    kod_okresu: Option<&str>,
    kod_kraje: Option<&str>,
    psc: Option<&str>,
) -> Option<Record> {
    if name.trim().is_empty() {
        return None;
    }
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;

    let non_empty = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    Some(Record {
        name: name.trim().to_string(),
        kod: non_empty(kod),
        lat,
        lon,
        okres: okres.trim().to_string(),
        kraj: kraj.trim().to_string(),
        kod_okresu: non_empty(kod_okresu),
        kod_kraje: non_empty(kod_kraje),
        psc: non_empty(psc),
        osm_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LOCAL_HEADER: &str = "Obec,Kód obce,Okres,Kód okresu,Kraj,Kód kraje,PSČ,Latitude,Longitude";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_read_csv_file_parses_rows() {
        let file = write_csv(&format!(
            "{LOCAL_HEADER}\n\
             Brno,582786,Brno-město,CZ0642,Jihomoravský kraj,CZ064,60200,49.1950602,16.6068371\n\
             Aš,554499,Cheb,CZ0411,Karlovarský kraj,CZ041,35201,50.2239,12.195"
        ));

        let loaded = read_csv_file(file.path()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped, 0);

        let brno = &loaded.records[0];
        assert_eq!(brno.name, "Brno");
        assert_eq!(brno.kod.as_deref(), Some("582786"));
        assert_eq!(brno.psc.as_deref(), Some("60200"));
        assert_eq!(brno.kod_kraje.as_deref(), Some("CZ064"));
        assert!((brno.lat - 49.1950602).abs() < 1e-9);
    }

    #[test]
    fn test_read_csv_file_missing_column_names_it() {
        let file = write_csv("Obec,Okres,Kraj\nBrno,Brno-město,Jihomoravský kraj");
        let err = read_csv_file(file.path()).unwrap_err();
        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "Kód obce"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_read_csv_file_skips_bad_coordinates() {
        let file = write_csv(&format!(
            "{LOCAL_HEADER}\n\
             Brno,582786,Brno-město,CZ0642,Jihomoravský kraj,CZ064,60200,not-a-number,16.6\n\
             Cheb,554481,Cheb,CZ0411,Karlovarský kraj,CZ041,35002,50.0796,12.3739"
        ));

        let loaded = read_csv_file(file.path()).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.records[0].name, "Cheb");
    }

    #[test]
    fn test_read_csv_file_missing_file() {
        let err = read_csv_file(Path::new("/nonexistent/souradnice.csv")).unwrap_err();
        assert!(matches!(err, Error::Csv { .. }));
    }

    struct FakeTransport {
        response: RefCell<Option<Result<String>>>,
    }

    impl Transport for FakeTransport {
        fn post_form(&self, _url: &str, _form: &[(&str, &str)]) -> Result<String> {
            unreachable!("CSV fallback never POSTs");
        }

        fn get(&self, _url: &str) -> Result<String> {
            self.response.borrow_mut().take().unwrap()
        }
    }

    #[test]
    fn test_fetch_github_csv_parses_rows() {
        let body = "kod,nazev,nazev_ascii,okres_kod,okres_nazev,kraj_kod,kraj_nazev,psc,lat,lng\n\
                    554481,Cheb,Cheb,CZ0411,Cheb,CZ041,Karlovarský kraj,35002,50.0796,12.3739\n\
                    ,Bezejmenov,Bezejmenov,,,,,,,";
        let transport = FakeTransport {
            response: RefCell::new(Some(Ok(body.to_string()))),
        };

        let loaded = fetch_github_csv(&transport, "https://example.test/obce.csv").unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.records[0].name, "Cheb");
        assert_eq!(loaded.records[0].okres, "Cheb");
        assert_eq!(loaded.records[0].kod_okresu, None);
    }

    #[test]
    fn test_fetch_github_csv_rejects_empty_body() {
        let transport = FakeTransport {
            response: RefCell::new(Some(Ok("  ".to_string()))),
        };
        let err = fetch_github_csv(&transport, "https://example.test/obce.csv").unwrap_err();
        assert!(matches!(err, Error::Payload { .. }));
    }

    #[test]
    fn test_fetch_github_csv_rejects_unusable_csv() {
        let transport = FakeTransport {
            response: RefCell::new(Some(Ok("completely,different,columns\n1,2,3".to_string()))),
        };
        let err = fetch_github_csv(&transport, "https://example.test/obce.csv").unwrap_err();
        match err {
            Error::Payload { message, .. } => assert!(message.contains("no usable rows")),
            other => panic!("expected Payload error, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_github_csv_propagates_transport_error() {
        let transport = FakeTransport {
            response: RefCell::new(Some(Err(Error::Network {
                url: "https://example.test/obce.csv".to_string(),
                message: "timed out".to_string(),
            }))),
        };
        let err = fetch_github_csv(&transport, "https://example.test/obce.csv").unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }
}
