use crate::domain::status_response::StatusResponse;

pub const MILES_PER_KILOMETER: f64 = 0.621_371_192_237_334;
pub const PSI_PER_BAR: f64 = 14.503_773_773;

pub const LENGTH_MILES: &str = "mi";
pub const TEMPERATURE_FAHRENHEIT: &str = "F";
pub const PRESSURE_PSI: &str = "psi";

pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * MILES_PER_KILOMETER
}

pub fn kilometers_to_miles_rounded(kilometers: i64) -> i64 {
    (kilometers as f64 * MILES_PER_KILOMETER).round() as i64
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

/// Rewrites distance, temperature and pressure fields in place according to
/// `response.units`. Stored values are km, Celsius and bar; any other unit
/// label leaves the fields untouched.
pub fn apply_unit_preferences(response: &mut StatusResponse) {
    let status = &mut response.status;

    if response.units.unit_of_length == LENGTH_MILES {
        status.odometer = kilometers_to_miles(status.odometer);
        let battery = &mut status.battery_details;
        battery.est_battery_range = kilometers_to_miles(battery.est_battery_range);
        battery.rated_battery_range = kilometers_to_miles(battery.rated_battery_range);
        battery.ideal_battery_range = kilometers_to_miles(battery.ideal_battery_range);
        status.driving_details.speed = kilometers_to_miles_rounded(status.driving_details.speed);
    }

    if response.units.unit_of_temperature == TEMPERATURE_FAHRENHEIT {
        let climate = &mut status.climate_details;
        climate.inside_temp = celsius_to_fahrenheit(climate.inside_temp);
        climate.outside_temp = celsius_to_fahrenheit(climate.outside_temp);
    }

    if response.units.unit_of_pressure == PRESSURE_PSI {
        let tpms = &mut status.tpms_details;
        tpms.tpms_pressure_fl = bar_to_psi(tpms.tpms_pressure_fl);
        tpms.tpms_pressure_fr = bar_to_psi(tpms.tpms_pressure_fr);
        tpms.tpms_pressure_rl = bar_to_psi(tpms.tpms_pressure_rl);
        tpms.tpms_pressure_rr = bar_to_psi(tpms.tpms_pressure_rr);
    }
}
