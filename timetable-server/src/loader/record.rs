//! Raw train records.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LoadError;

/// One train as it arrives from outside, before any domain construction.
///
/// Keys are camelCase. The German keys of older data files
/// (`triebfahrzeuge`, `steuerwagen`, `waggons`, `abteile`, `route`) are
/// accepted as aliases. Missing lists default to empty and a missing
/// control car flag defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRecord {
    /// Train name or number (e.g., "ICE 1001")
    pub name: String,

    /// Traction unit tags (`DieselLok`, `ELok`, ...)
    #[serde(default, alias = "triebfahrzeuge")]
    pub traction_unit_types: Vec<String>,

    /// Whether the train runs with a control car
    #[serde(default, alias = "steuerwagen")]
    pub has_control_car: bool,

    /// Wagon tags (`Personenwagen`, `Speisewagen`, `Gitterwaggon`, ...)
    #[serde(default, alias = "waggons")]
    pub wagon_types: Vec<String>,

    /// Compartment numbers, indexed like `wagon_types`.
    /// Only entries at passenger wagon positions are used.
    #[serde(default, alias = "abteile")]
    pub compartment_numbers_by_wagon_index: Vec<Vec<i64>>,

    /// Station names in travel order
    #[serde(default, alias = "route")]
    pub route_station_names: Vec<String>,
}

/// Parse a JSON array of train records.
pub fn parse_records(json: &str) -> Result<Vec<TrainRecord>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of train records from a file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<TrainRecord>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_camel_case_keys() {
        let json = r#"[{
            "name": "S1",
            "tractionUnitTypes": ["ELok", "ELok"],
            "hasControlCar": false,
            "wagonTypes": ["Personenwagen", "Personenwagen"],
            "compartmentNumbersByWagonIndex": [[1], [2]],
            "routeStationNames": ["Dortmund", "Bochum"]
        }]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "S1");
        assert_eq!(record.traction_unit_types, vec!["ELok", "ELok"]);
        assert!(!record.has_control_car);
        assert_eq!(record.wagon_types, vec!["Personenwagen", "Personenwagen"]);
        assert_eq!(record.compartment_numbers_by_wagon_index, vec![vec![1], vec![2]]);
        assert_eq!(record.route_station_names, vec!["Dortmund", "Bochum"]);
    }

    #[test]
    fn parse_german_keys() {
        let json = r#"[{
            "name": "RE1",
            "triebfahrzeuge": ["ELok"],
            "steuerwagen": true,
            "waggons": ["Personenwagen"],
            "abteile": [[1, 2]],
            "route": ["Hamm", "Dortmund"]
        }]"#;

        let records = parse_records(json).unwrap();
        let record = &records[0];
        assert_eq!(record.traction_unit_types, vec!["ELok"]);
        assert!(record.has_control_car);
        assert_eq!(record.wagon_types, vec!["Personenwagen"]);
        assert_eq!(record.compartment_numbers_by_wagon_index, vec![vec![1, 2]]);
        assert_eq!(record.route_station_names, vec!["Hamm", "Dortmund"]);
    }

    #[test]
    fn missing_fields_default() {
        let records = parse_records(r#"[{"name": "Lz 1"}]"#).unwrap();
        assert_eq!(
            records[0],
            TrainRecord {
                name: "Lz 1".into(),
                ..TrainRecord::default()
            }
        );
    }

    #[test]
    fn negative_compartment_numbers_parse() {
        let json = r#"[
            {"name": "S1", "route": ["A", "B"]},
            {"name": "X", "waggons": ["Personenwagen"], "abteile": [[-1]], "route": ["A", "B"]}
        ]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "S1");
        assert_eq!(records[1].compartment_numbers_by_wagon_index, vec![vec![-1]]);
    }

    #[test]
    fn missing_name_rejected() {
        assert!(matches!(
            parse_records(r#"[{"waggons": []}]"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn not_an_array_rejected() {
        assert!(matches!(
            parse_records(r#"{"name": "S1"}"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn serialises_camel_case() {
        let record = TrainRecord {
            name: "S1".into(),
            has_control_car: true,
            ..TrainRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["hasControlCar"], true);
        assert_eq!(json["routeStationNames"], serde_json::json!([]));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "RB 40", "route": ["Essen", "Hagen"]}}]"#
        )
        .unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].route_station_names, vec!["Essen", "Hagen"]);
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fehlt.json");

        match read_records(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
