//! Built-in sample trains.
//!
//! Served when no record file is configured.

use super::TrainRecord;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four sample trains: a regional express, an ICE, an S-Bahn and a
/// freight train.
pub fn sample_records() -> Vec<TrainRecord> {
    vec![
        TrainRecord {
            name: "RE1".into(),
            traction_unit_types: strings(&["ELok"]),
            has_control_car: true,
            wagon_types: strings(&["Personenwagen", "Personenwagen", "Personenwagen"]),
            compartment_numbers_by_wagon_index: vec![vec![1, 2], vec![3, 4], vec![5, 6]],
            route_station_names: strings(&[
                "Hamm",
                "Dortmund",
                "Essen",
                "Düsseldorf",
                "Köln",
                "Aachen",
            ]),
        },
        TrainRecord {
            name: "ICE 1001".into(),
            traction_unit_types: strings(&["ELok"]),
            has_control_car: true,
            wagon_types: strings(&[
                "Personenwagen",
                "Personenwagen",
                "Speisewagen",
                "Personenwagen",
                "Personenwagen",
                "Personenwagen",
            ]),
            compartment_numbers_by_wagon_index: vec![
                vec![1, 2],
                vec![3, 4],
                vec![],
                vec![5, 6],
                vec![7, 8],
                vec![9, 10],
            ],
            route_station_names: strings(&[
                "Hamburg Hbf",
                "Hannover Hbf",
                "Göttingen",
                "Kassel-Wilhelmshöhe",
                "Fulda",
                "Würzburg Hbf",
                "Nürnberg Hbf",
                "Ingolstadt Hbf",
                "München Hbf",
            ]),
        },
        TrainRecord {
            name: "S1".into(),
            traction_unit_types: strings(&["ELok", "ELok"]),
            has_control_car: false,
            wagon_types: strings(&["Personenwagen", "Personenwagen"]),
            compartment_numbers_by_wagon_index: vec![vec![1], vec![2]],
            route_station_names: strings(&[
                "Dortmund",
                "Bochum",
                "Essen",
                "Duisburg",
                "Düsseldorf",
                "Solingen",
            ]),
        },
        TrainRecord {
            name: "Güter 501".into(),
            traction_unit_types: strings(&["DieselLok"]),
            has_control_car: false,
            wagon_types: strings(&["Gitterwaggon", "Gitterwaggon", "Gitterwaggon"]),
            compartment_numbers_by_wagon_index: vec![vec![], vec![], vec![]],
            route_station_names: strings(&["Hamburg Hafen", "Hannover", "Kassel", "Frankfurt"]),
        },
    ]
}
