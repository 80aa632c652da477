use chrono::{DateTime, Utc};

use crate::domain::models::RawStatusRecord;
use crate::domain::status_response::{
    BatteryDetails, CarDetails, CarExterior, CarGeodata, CarIdentity, CarStatus, CarVersions,
    ChargingDetails, ClimateDetails, DEFAULT_CHARGING_STATE, DEFAULT_UNIT_OF_LENGTH,
    DEFAULT_UNIT_OF_PRESSURE, DEFAULT_UNIT_OF_TEMPERATURE, DrivingDetails, Location,
    PhysicalStatus, StatusResponse, TpmsDetails, UNSOURCED_DEFAULTS, Units,
};
use crate::domain::timezone::DisplayTimezone;
use crate::domain::vehicle_state::VehicleState;

/// Builds the complete response for one car. Every absent column collapses to
/// the zero value of its output type; `now` stands in for a missing
/// state-since timestamp.
pub fn map_status(
    record: &RawStatusRecord,
    state: &VehicleState,
    timezone: DisplayTimezone,
    now: DateTime<Utc>,
) -> StatusResponse {
    let defaults = UNSOURCED_DEFAULTS;
    let plugged_in = flag(record.is_charging);

    StatusResponse {
        car: CarIdentity {
            car_id: record.car_id,
            car_name: text(&record.name),
        },
        status: CarStatus {
            display_name: display_name(record),
            state: state.as_str().to_string(),
            state_since: timezone.format(record.state_since.unwrap_or(now)),
            odometer: float(record.odometer),
            car_status: PhysicalStatus {
                healthy: defaults.healthy,
                locked: defaults.locked,
                sentry_mode: defaults.sentry_mode,
                windows_open: defaults.windows_open,
                doors_open: defaults.doors_open,
                trunk_open: defaults.trunk_open,
                frunk_open: defaults.frunk_open,
                is_user_present: defaults.is_user_present,
            },
            car_details: CarDetails {
                model: text(&record.model),
                trim_badging: text(&record.trim_badging),
            },
            car_exterior: CarExterior {
                exterior_color: text(&record.exterior_color),
                spoiler_type: text(&record.spoiler_type),
                wheel_type: text(&record.wheel_type),
            },
            car_geodata: CarGeodata {
                location: Location {
                    latitude: float(record.latitude),
                    longitude: float(record.longitude),
                },
            },
            car_versions: CarVersions {
                version: defaults.version.to_string(),
                update_available: defaults.update_available,
                update_version: defaults.update_version.to_string(),
            },
            driving_details: DrivingDetails {
                shift_state: defaults.shift_state.to_string(),
                power: int(record.power),
                speed: int(record.speed),
                heading: defaults.heading,
                elevation: int(record.elevation),
            },
            climate_details: ClimateDetails {
                is_climate_on: flag(record.is_climate_on),
                inside_temp: float(record.inside_temp),
                outside_temp: float(record.outside_temp),
                is_preconditioning: flag(record.is_preconditioning),
            },
            battery_details: BatteryDetails {
                est_battery_range: float(record.est_battery_range_km),
                rated_battery_range: float(record.rated_battery_range_km),
                ideal_battery_range: float(record.ideal_battery_range_km),
                battery_level: int(record.battery_level),
                usable_battery_level: int(record.usable_battery_level),
            },
            charging_details: ChargingDetails {
                plugged_in,
                charging_state: charging_state(record),
                charge_energy_added: float(record.charge_energy_added),
                charge_limit_soc: defaults.charge_limit_soc,
                // no door sensor is stored, an active session implies an open port
                charge_port_door_open: plugged_in,
                charger_actual_current: int(record.charger_actual_current) as f64,
                charger_phases: int(record.charger_phases),
                charger_power: int(record.charger_power) as f64,
                charger_voltage: int(record.charger_voltage),
                charge_current_request: defaults.charge_current_request,
                charge_current_request_max: defaults.charge_current_request_max,
                scheduled_charging_start_time: defaults.scheduled_charging_start_time.to_string(),
                time_to_full_charge: defaults.time_to_full_charge,
            },
            tpms_details: TpmsDetails {
                tpms_pressure_fl: float(record.tpms_pressure_fl),
                tpms_pressure_fr: float(record.tpms_pressure_fr),
                tpms_pressure_rl: float(record.tpms_pressure_rl),
                tpms_pressure_rr: float(record.tpms_pressure_rr),
            },
        },
        units: Units {
            unit_of_length: text_or(&record.unit_of_length, DEFAULT_UNIT_OF_LENGTH),
            unit_of_pressure: text_or(&record.unit_of_pressure, DEFAULT_UNIT_OF_PRESSURE),
            unit_of_temperature: text_or(&record.unit_of_temperature, DEFAULT_UNIT_OF_TEMPERATURE),
        },
    }
}

pub fn display_name(record: &RawStatusRecord) -> String {
    if let Some(name) = non_empty(&record.name) {
        return name.to_string();
    }

    match &record.model {
        Some(model) => model.clone(),
        None => format!("Car {}", record.car_id),
    }
}

fn charging_state(record: &RawStatusRecord) -> String {
    non_empty(&record.charging_state)
        .unwrap_or(DEFAULT_CHARGING_STATE)
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn text_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

fn float(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

fn int(value: Option<i64>) -> i64 {
    value.unwrap_or(0)
}

fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use serde_json::Value;

    use super::{display_name, map_status};
    use crate::domain::models::RawStatusRecord;
    use crate::domain::timezone::DisplayTimezone;
    use crate::domain::vehicle_state::VehicleState;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("fixed timestamp should be valid")
    }

    fn complete_record() -> RawStatusRecord {
        RawStatusRecord {
            car_id: 1,
            name: Some("Test Car".to_string()),
            model: Some("Model 3".to_string()),
            trim_badging: Some("Performance".to_string()),
            exterior_color: Some("Red".to_string()),
            wheel_type: Some("Sport".to_string()),
            spoiler_type: Some("None".to_string()),
            vin: Some("5YJ3E1EA4JF123456".to_string()),
            position_date: Some(now() - Duration::minutes(2)),
            latitude: Some(37.7749),
            longitude: Some(-122.4194),
            speed: Some(65),
            power: Some(150),
            odometer: Some(12_345.6),
            battery_level: Some(85),
            usable_battery_level: Some(83),
            ideal_battery_range_km: Some(400.5),
            est_battery_range_km: Some(380.2),
            rated_battery_range_km: Some(420.8),
            elevation: Some(42),
            outside_temp: Some(18.5),
            inside_temp: Some(22.3),
            is_climate_on: Some(true),
            is_preconditioning: Some(false),
            tpms_pressure_fl: Some(2.9),
            tpms_pressure_fr: Some(2.9),
            tpms_pressure_rl: Some(3.0),
            tpms_pressure_rr: Some(3.0),
            state: Some("online".to_string()),
            state_since: Some(now() - Duration::hours(1)),
            is_charging: Some(true),
            charging_state: Some("charging".to_string()),
            charger_power: Some(11),
            charger_voltage: Some(240),
            charger_phases: Some(3),
            charger_actual_current: Some(16),
            charge_energy_added: Some(5.2),
            unit_of_length: Some("km".to_string()),
            unit_of_pressure: Some("bar".to_string()),
            unit_of_temperature: Some("C".to_string()),
        }
    }

    fn collect_nulls(value: &Value, path: String, nulls: &mut Vec<String>) {
        match value {
            Value::Null => nulls.push(path),
            Value::Object(map) => {
                for (key, child) in map {
                    collect_nulls(child, format!("{path}.{key}"), nulls);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    collect_nulls(child, format!("{path}[{index}]"), nulls);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn maps_complete_record() {
        let response = map_status(
            &complete_record(),
            &VehicleState::Recorded("online".to_string()),
            DisplayTimezone::utc(),
            now(),
        );

        assert_eq!(response.car.car_id, 1);
        assert_eq!(response.car.car_name, "Test Car");
        assert_eq!(response.status.display_name, "Test Car");
        assert_eq!(response.status.state, "online");
        assert_eq!(response.status.state_since, "2026-03-01T11:00:00Z");
        assert_eq!(response.status.odometer, 12_345.6);
        assert_eq!(response.status.car_details.model, "Model 3");
        assert_eq!(response.status.car_details.trim_badging, "Performance");
        assert_eq!(response.status.car_exterior.exterior_color, "Red");
        assert_eq!(response.status.car_geodata.location.latitude, 37.7749);
        assert_eq!(response.status.car_geodata.location.longitude, -122.4194);
        assert_eq!(response.status.driving_details.speed, 65);
        assert_eq!(response.status.driving_details.elevation, 42);
        assert_eq!(response.status.battery_details.battery_level, 85);
        assert_eq!(response.status.battery_details.est_battery_range, 380.2);
        assert!(response.status.climate_details.is_climate_on);
        assert_eq!(response.status.climate_details.outside_temp, 18.5);

        let charging = &response.status.charging_details;
        assert!(charging.plugged_in);
        assert!(charging.charge_port_door_open);
        assert_eq!(charging.charging_state, "charging");
        assert_eq!(charging.charger_power, 11.0);
        assert_eq!(charging.charger_voltage, 240);
        assert_eq!(charging.charger_phases, 3);
        assert_eq!(charging.charger_actual_current, 16.0);
        assert_eq!(charging.charge_energy_added, 5.2);

        assert_eq!(response.status.tpms_details.tpms_pressure_rl, 3.0);
        assert_eq!(response.units.unit_of_length, "km");
    }

    #[test]
    fn defaults_every_field_for_identity_only_record() {
        let response = map_status(
            &RawStatusRecord::empty(2),
            &VehicleState::Unknown,
            DisplayTimezone::utc(),
            now(),
        );

        assert_eq!(response.car.car_name, "");
        assert_eq!(response.status.display_name, "Car 2");
        assert_eq!(response.status.state, "unknown");
        assert_eq!(response.status.state_since, "2026-03-01T12:00:00Z");
        assert_eq!(response.status.odometer, 0.0);
        assert!(response.status.car_status.healthy);
        assert!(!response.status.car_status.locked);
        assert!(!response.status.car_status.sentry_mode);
        assert_eq!(response.status.car_versions.version, "");
        assert_eq!(response.status.driving_details.shift_state, "");
        assert_eq!(response.status.driving_details.heading, 0);
        assert!(!response.status.climate_details.is_climate_on);
        assert_eq!(response.status.battery_details.usable_battery_level, 0);

        let charging = &response.status.charging_details;
        assert!(!charging.plugged_in);
        assert!(!charging.charge_port_door_open);
        assert_eq!(charging.charging_state, "disconnected");
        assert_eq!(charging.charge_limit_soc, 0);
        assert_eq!(charging.scheduled_charging_start_time, "");
        assert_eq!(charging.time_to_full_charge, 0.0);

        assert_eq!(response.units.unit_of_length, "km");
        assert_eq!(response.units.unit_of_pressure, "bar");
        assert_eq!(response.units.unit_of_temperature, "C");
    }

    #[test]
    fn serialized_response_never_contains_null() {
        for record in [RawStatusRecord::empty(3), complete_record()] {
            let response = map_status(
                &record,
                &VehicleState::Unknown,
                DisplayTimezone::utc(),
                now(),
            );
            let json = serde_json::to_value(&response).expect("response should serialize");

            let mut nulls = Vec::new();
            collect_nulls(&json, "data".to_string(), &mut nulls);
            assert!(nulls.is_empty(), "null fields: {nulls:?}");

            for path in [
                "/car/car_id",
                "/status/car_status/sentry_mode",
                "/status/car_versions/update_available",
                "/status/driving_details/heading",
                "/status/charging_details/time_to_full_charge",
                "/status/tpms_details/tpms_pressure_fl",
                "/units/unit_of_pressure",
            ] {
                assert!(json.pointer(path).is_some(), "missing {path}");
            }
        }
    }

    #[test]
    fn empty_charging_state_defaults_to_disconnected() {
        let record = RawStatusRecord {
            charging_state: Some(String::new()),
            is_charging: Some(false),
            ..RawStatusRecord::empty(4)
        };
        let response = map_status(&record, &VehicleState::Online, DisplayTimezone::utc(), now());

        assert_eq!(response.status.charging_details.charging_state, "disconnected");
        assert!(!response.status.charging_details.plugged_in);
    }

    #[test]
    fn renders_timestamps_in_display_timezone() {
        let timezone = DisplayTimezone::parse("+02:00").expect("offset should parse");
        let response = map_status(&complete_record(), &VehicleState::Online, timezone, now());

        assert_eq!(response.status.state_since, "2026-03-01T13:00:00+02:00");
    }

    #[test]
    fn picks_display_name_from_name_then_model_then_id() {
        let named = RawStatusRecord {
            name: Some("My Tesla".to_string()),
            model: Some("Model S".to_string()),
            ..RawStatusRecord::empty(1)
        };
        let model_only = RawStatusRecord {
            model: Some("Model 3".to_string()),
            ..RawStatusRecord::empty(2)
        };
        let empty_name = RawStatusRecord {
            name: Some(String::new()),
            model: Some("Model Y".to_string()),
            ..RawStatusRecord::empty(3)
        };

        assert_eq!(display_name(&named), "My Tesla");
        assert_eq!(display_name(&model_only), "Model 3");
        assert_eq!(display_name(&empty_name), "Model Y");
        assert_eq!(display_name(&RawStatusRecord::empty(4)), "Car 4");
    }
}
