use std::path::Path;

use chrono::{Duration, Utc};
use rusqlite::Connection;

use car_status_api::adapters::db::{
    DbError, insert_car, insert_charge, insert_charging_process, insert_position, insert_state,
    open_connection, run_migrations, schema_version, upsert_settings,
};
use car_status_api::domain::models::{
    NewCarRecord, NewChargeRecord, NewChargingProcessRecord, NewPositionRecord, NewStateRecord,
    UnitSettings,
};

fn main() {
    if let Err(error) = run() {
        eprintln!("failed to create test db: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut path = "./data/car_status_test.db".to_string();
    let mut force = false;
    let mut seed = false;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--path" => {
                let Some(value) = args.get(index + 1) else {
                    return Err("--path requires a value".to_string());
                };
                path = value.clone();
                index += 2;
            }
            "--force" => {
                force = true;
                index += 1;
            }
            "--seed" => {
                seed = true;
                index += 1;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
    }

    let path_ref = Path::new(&path);
    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|error| format!("failed to create parent directory: {error}"))?;
    }

    if force && path_ref.exists() {
        std::fs::remove_file(path_ref)
            .map_err(|error| format!("failed to remove existing db file: {error}"))?;
    }

    let mut connection = open_connection(&path).map_err(|error| error.to_string())?;
    run_migrations(&mut connection).map_err(|error| error.to_string())?;
    let version = schema_version(&connection).map_err(|error| error.to_string())?;

    if seed {
        seed_demo_car(&connection).map_err(|error| error.to_string())?;
        println!("seeded demo car with ID 1");
    }

    println!("created/updated test db at: {path}");
    println!("schema version: {version}");
    Ok(())
}

fn seed_demo_car(connection: &Connection) -> Result<(), DbError> {
    let timestamp = |age: Duration| (Utc::now() - age).format("%Y-%m-%d %H:%M:%S").to_string();

    insert_car(
        connection,
        &NewCarRecord {
            id: 1,
            name: Some("Demo Car".to_string()),
            model: Some("3".to_string()),
            trim_badging: Some("LR AWD".to_string()),
            exterior_color: Some("MidnightSilver".to_string()),
            wheel_type: Some("Pinwheel18".to_string()),
            spoiler_type: Some("None".to_string()),
            vin: Some("5YJ3E7EB0KF000001".to_string()),
        },
    )?;

    insert_state(
        connection,
        &NewStateRecord {
            car_id: 1,
            state: "online".to_string(),
            start_date: timestamp(Duration::hours(2)),
            end_date: None,
        },
    )?;

    insert_position(
        connection,
        &NewPositionRecord {
            car_id: 1,
            date: timestamp(Duration::minutes(1)),
            latitude: Some(52.520_008),
            longitude: Some(13.404_954),
            speed: Some(0),
            power: Some(-11),
            odometer: Some(23_456.7),
            battery_level: Some(64),
            usable_battery_level: Some(63),
            ideal_battery_range_km: Some(312.4),
            est_battery_range_km: Some(280.1),
            rated_battery_range_km: Some(305.9),
            elevation: Some(34),
            outside_temp: Some(7.5),
            inside_temp: Some(19.0),
            is_climate_on: Some(false),
            is_preconditioning: Some(false),
            tpms_pressure_fl: Some(2.9),
            tpms_pressure_fr: Some(2.9),
            tpms_pressure_rl: Some(2.95),
            tpms_pressure_rr: Some(2.95),
        },
    )?;

    let process = insert_charging_process(
        connection,
        &NewChargingProcessRecord {
            car_id: 1,
            start_date: timestamp(Duration::minutes(40)),
            end_date: None,
        },
    )?;

    insert_charge(
        connection,
        &NewChargeRecord {
            charging_process_id: process,
            date: timestamp(Duration::minutes(1)),
            charger_power: Some(11),
            charger_voltage: Some(229),
            charger_phases: Some(3),
            charger_actual_current: Some(16),
            charge_energy_added: Some(7.3),
        },
    )?;

    upsert_settings(
        connection,
        &UnitSettings {
            unit_of_length: "km".to_string(),
            unit_of_pressure: "bar".to_string(),
            unit_of_temperature: "C".to_string(),
        },
    )
}

fn print_help() {
    println!("create_test_db");
    println!();
    println!("Usage:");
    println!("  cargo run --bin create_test_db -- [--path <file>] [--force] [--seed]");
    println!();
    println!("Options:");
    println!("  --path <file>   target sqlite file (default: ./data/car_status_test.db)");
    println!("  --force         delete existing file before creating");
    println!("  --seed          insert a demo car with a live charging session");
}
