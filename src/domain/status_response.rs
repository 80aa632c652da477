use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusResponse {
    pub car: CarIdentity,
    pub status: CarStatus,
    pub units: Units,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarIdentity {
    pub car_id: i64,
    pub car_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarStatus {
    pub display_name: String,
    pub state: String,
    pub state_since: String,
    pub odometer: f64,
    pub car_status: PhysicalStatus,
    pub car_details: CarDetails,
    pub car_exterior: CarExterior,
    pub car_geodata: CarGeodata,
    pub car_versions: CarVersions,
    pub driving_details: DrivingDetails,
    pub climate_details: ClimateDetails,
    pub battery_details: BatteryDetails,
    pub charging_details: ChargingDetails,
    pub tpms_details: TpmsDetails,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhysicalStatus {
    pub healthy: bool,
    pub locked: bool,
    pub sentry_mode: bool,
    pub windows_open: bool,
    pub doors_open: bool,
    pub trunk_open: bool,
    pub frunk_open: bool,
    pub is_user_present: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarDetails {
    pub model: String,
    pub trim_badging: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarExterior {
    pub exterior_color: String,
    pub spoiler_type: String,
    pub wheel_type: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarGeodata {
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarVersions {
    pub version: String,
    pub update_available: bool,
    pub update_version: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrivingDetails {
    pub shift_state: String,
    pub power: i64,
    pub speed: i64,
    pub heading: i64,
    pub elevation: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClimateDetails {
    pub is_climate_on: bool,
    pub inside_temp: f64,
    pub outside_temp: f64,
    pub is_preconditioning: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatteryDetails {
    pub est_battery_range: f64,
    pub rated_battery_range: f64,
    pub ideal_battery_range: f64,
    pub battery_level: i64,
    pub usable_battery_level: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChargingDetails {
    pub plugged_in: bool,
    pub charging_state: String,
    pub charge_energy_added: f64,
    pub charge_limit_soc: i64,
    pub charge_port_door_open: bool,
    pub charger_actual_current: f64,
    pub charger_phases: i64,
    pub charger_power: f64,
    pub charger_voltage: i64,
    pub charge_current_request: i64,
    pub charge_current_request_max: i64,
    pub scheduled_charging_start_time: String,
    pub time_to_full_charge: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TpmsDetails {
    pub tpms_pressure_fl: f64,
    pub tpms_pressure_fr: f64,
    pub tpms_pressure_rl: f64,
    pub tpms_pressure_rr: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Units {
    pub unit_of_length: String,
    pub unit_of_pressure: String,
    pub unit_of_temperature: String,
}

/// Values for response fields that no stored table can populate. The mapper
/// copies them in as-is for every car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsourcedDefaults {
    pub healthy: bool,
    pub locked: bool,
    pub sentry_mode: bool,
    pub windows_open: bool,
    pub doors_open: bool,
    pub trunk_open: bool,
    pub frunk_open: bool,
    pub is_user_present: bool,
    pub version: &'static str,
    pub update_available: bool,
    pub update_version: &'static str,
    pub shift_state: &'static str,
    pub heading: i64,
    pub charge_limit_soc: i64,
    pub charge_current_request: i64,
    pub charge_current_request_max: i64,
    pub scheduled_charging_start_time: &'static str,
    pub time_to_full_charge: f64,
}

pub const UNSOURCED_DEFAULTS: UnsourcedDefaults = UnsourcedDefaults {
    // a stored record exists for the car
    healthy: true,
    locked: false,
    sentry_mode: false,
    windows_open: false,
    doors_open: false,
    trunk_open: false,
    frunk_open: false,
    is_user_present: false,
    version: "",
    update_available: false,
    update_version: "",
    shift_state: "",
    heading: 0,
    charge_limit_soc: 0,
    charge_current_request: 0,
    charge_current_request_max: 0,
    scheduled_charging_start_time: "",
    time_to_full_charge: 0.0,
};

pub const DEFAULT_CHARGING_STATE: &str = "disconnected";
pub const DEFAULT_UNIT_OF_LENGTH: &str = "km";
pub const DEFAULT_UNIT_OF_PRESSURE: &str = "bar";
pub const DEFAULT_UNIT_OF_TEMPERATURE: &str = "C";
