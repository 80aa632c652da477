use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStatusRecord {
    pub car_id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub trim_badging: Option<String>,
    pub exterior_color: Option<String>,
    pub wheel_type: Option<String>,
    pub spoiler_type: Option<String>,
    pub vin: Option<String>,

    pub position_date: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<i64>,
    pub power: Option<i64>,
    pub odometer: Option<f64>,
    pub battery_level: Option<i64>,
    pub usable_battery_level: Option<i64>,
    pub ideal_battery_range_km: Option<f64>,
    pub est_battery_range_km: Option<f64>,
    pub rated_battery_range_km: Option<f64>,
    pub elevation: Option<i64>,
    pub outside_temp: Option<f64>,
    pub inside_temp: Option<f64>,
    pub is_climate_on: Option<bool>,
    pub is_preconditioning: Option<bool>,
    pub tpms_pressure_fl: Option<f64>,
    pub tpms_pressure_fr: Option<f64>,
    pub tpms_pressure_rl: Option<f64>,
    pub tpms_pressure_rr: Option<f64>,

    pub state: Option<String>,
    pub state_since: Option<DateTime<Utc>>,

    pub is_charging: Option<bool>,
    pub charging_state: Option<String>,
    pub charger_power: Option<i64>,
    pub charger_voltage: Option<i64>,
    pub charger_phases: Option<i64>,
    pub charger_actual_current: Option<i64>,
    pub charge_energy_added: Option<f64>,

    pub unit_of_length: Option<String>,
    pub unit_of_pressure: Option<String>,
    pub unit_of_temperature: Option<String>,
}

impl RawStatusRecord {
    pub fn empty(car_id: i64) -> Self {
        Self {
            car_id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCarRecord {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub trim_badging: Option<String>,
    pub exterior_color: Option<String>,
    pub wheel_type: Option<String>,
    pub spoiler_type: Option<String>,
    pub vin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPositionRecord {
    pub car_id: i64,
    pub date: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<i64>,
    pub power: Option<i64>,
    pub odometer: Option<f64>,
    pub battery_level: Option<i64>,
    pub usable_battery_level: Option<i64>,
    pub ideal_battery_range_km: Option<f64>,
    pub est_battery_range_km: Option<f64>,
    pub rated_battery_range_km: Option<f64>,
    pub elevation: Option<i64>,
    pub outside_temp: Option<f64>,
    pub inside_temp: Option<f64>,
    pub is_climate_on: Option<bool>,
    pub is_preconditioning: Option<bool>,
    pub tpms_pressure_fl: Option<f64>,
    pub tpms_pressure_fr: Option<f64>,
    pub tpms_pressure_rl: Option<f64>,
    pub tpms_pressure_rr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStateRecord {
    pub car_id: i64,
    pub state: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewChargingProcessRecord {
    pub car_id: i64,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewChargeRecord {
    pub charging_process_id: i64,
    pub date: String,
    pub charger_power: Option<i64>,
    pub charger_voltage: Option<i64>,
    pub charger_phases: Option<i64>,
    pub charger_actual_current: Option<i64>,
    pub charge_energy_added: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitSettings {
    pub unit_of_length: String,
    pub unit_of_pressure: String,
    pub unit_of_temperature: String,
}
