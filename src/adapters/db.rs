use rusqlite::{Connection, Row, params};
use thiserror::Error;

use crate::domain::models::{
    NewCarRecord, NewChargeRecord, NewChargingProcessRecord, NewPositionRecord, NewStateRecord,
    RawStatusRecord, UnitSettings,
};

pub const LATEST_SCHEMA_VERSION: u32 = 1;

const MIGRATIONS: &[(u32, &str)] = &[(
    1,
    r#"
CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY,
    name TEXT,
    model TEXT,
    trim_badging TEXT,
    exterior_color TEXT,
    wheel_type TEXT,
    spoiler_type TEXT,
    vin TEXT
);

CREATE TABLE IF NOT EXISTS positions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars (id),
    date TEXT NOT NULL,
    latitude REAL,
    longitude REAL,
    speed INTEGER,
    power INTEGER,
    odometer REAL,
    battery_level INTEGER,
    usable_battery_level INTEGER,
    ideal_battery_range_km REAL,
    est_battery_range_km REAL,
    rated_battery_range_km REAL,
    elevation INTEGER,
    outside_temp REAL,
    inside_temp REAL,
    is_climate_on INTEGER,
    is_preconditioning INTEGER,
    tpms_pressure_fl REAL,
    tpms_pressure_fr REAL,
    tpms_pressure_rl REAL,
    tpms_pressure_rr REAL
);

CREATE INDEX IF NOT EXISTS idx_positions_car_id_date
ON positions (car_id, date DESC);

CREATE TABLE IF NOT EXISTS states (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars (id),
    state TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_states_car_id_start_date
ON states (car_id, start_date DESC);

CREATE TABLE IF NOT EXISTS charging_processes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_id INTEGER NOT NULL REFERENCES cars (id),
    start_date TEXT NOT NULL,
    end_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_charging_processes_car_id_end_date
ON charging_processes (car_id, end_date);

CREATE TABLE IF NOT EXISTS charges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    charging_process_id INTEGER NOT NULL REFERENCES charging_processes (id),
    date TEXT NOT NULL,
    charger_power INTEGER,
    charger_voltage INTEGER,
    charger_phases INTEGER,
    charger_actual_current INTEGER,
    charge_energy_added REAL
);

CREATE INDEX IF NOT EXISTS idx_charges_charging_process_id_date
ON charges (charging_process_id, date DESC);

CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY,
    unit_of_length TEXT,
    unit_of_pressure TEXT,
    unit_of_temperature TEXT
);
"#,
)];

const CAR_EXISTS_QUERY: &str = "SELECT EXISTS(SELECT 1 FROM cars WHERE id = ?1)";

// Each "latest" row is picked by the instant its timestamp denotes, then id.
// Timestamps are TEXT in mixed formats (space or `T` separator, optional
// offset), so ordering goes through julianday() rather than string order.
const CAR_STATUS_QUERY: &str = "
SELECT
    c.id,
    c.name,
    c.model,
    c.trim_badging,
    c.exterior_color,
    c.wheel_type,
    c.spoiler_type,
    c.vin,
    p.date,
    p.latitude,
    p.longitude,
    p.speed,
    p.power,
    p.odometer,
    p.battery_level,
    p.usable_battery_level,
    p.ideal_battery_range_km,
    p.est_battery_range_km,
    p.rated_battery_range_km,
    p.elevation,
    p.outside_temp,
    p.inside_temp,
    p.is_climate_on,
    p.is_preconditioning,
    p.tpms_pressure_fl,
    p.tpms_pressure_fr,
    p.tpms_pressure_rl,
    p.tpms_pressure_rr,
    s.state,
    s.start_date,
    CASE WHEN cp.id IS NOT NULL THEN 1 ELSE 0 END AS is_charging,
    CASE WHEN cp.id IS NOT NULL THEN 'charging' ELSE 'disconnected' END AS charging_state,
    ch.charger_power,
    ch.charger_voltage,
    ch.charger_phases,
    ch.charger_actual_current,
    ch.charge_energy_added,
    st.unit_of_length,
    st.unit_of_pressure,
    st.unit_of_temperature
FROM cars c
LEFT JOIN positions p ON p.id = (
    SELECT p2.id FROM positions p2
    WHERE p2.car_id = c.id
    ORDER BY julianday(p2.date) DESC, p2.id DESC
    LIMIT 1
)
LEFT JOIN states s ON s.id = (
    SELECT s2.id FROM states s2
    WHERE s2.car_id = c.id
    ORDER BY julianday(s2.start_date) DESC, s2.id DESC
    LIMIT 1
)
LEFT JOIN charging_processes cp ON cp.id = (
    SELECT cp2.id FROM charging_processes cp2
    WHERE cp2.car_id = c.id AND cp2.end_date IS NULL
    ORDER BY julianday(cp2.start_date) DESC, cp2.id DESC
    LIMIT 1
)
LEFT JOIN charges ch ON ch.id = (
    SELECT ch2.id FROM charges ch2
    WHERE ch2.charging_process_id = cp.id
    ORDER BY julianday(ch2.date) DESC, ch2.id DESC
    LIMIT 1
)
LEFT JOIN settings st ON st.id = (SELECT MIN(id) FROM settings)
WHERE c.id = ?1";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unsupported schema version {current}; latest supported is {latest}")]
    UnsupportedSchemaVersion { current: u32, latest: u32 },
}

pub fn open_connection(path: &str) -> Result<Connection, DbError> {
    Connection::open(path).map_err(DbError::from)
}

pub fn run_migrations(connection: &mut Connection) -> Result<(), DbError> {
    let current_version = schema_version(connection)?;

    if current_version > LATEST_SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            current: current_version,
            latest: LATEST_SCHEMA_VERSION,
        });
    }

    let transaction = connection.transaction()?;

    for (version, sql) in MIGRATIONS {
        if *version > current_version {
            transaction.execute_batch(sql)?;
            transaction.pragma_update(None, "user_version", version)?;
        }
    }

    transaction.commit()?;

    Ok(())
}

pub fn schema_version(connection: &Connection) -> Result<u32, DbError> {
    let version = connection.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

pub fn car_exists(connection: &Connection, car_id: i64) -> Result<bool, DbError> {
    let exists = connection.query_row(CAR_EXISTS_QUERY, params![car_id], |row| row.get(0))?;
    Ok(exists)
}

pub fn get_car_status(
    connection: &Connection,
    car_id: i64,
) -> Result<Option<RawStatusRecord>, DbError> {
    let mut statement = connection.prepare(CAR_STATUS_QUERY)?;

    let mut rows = statement.query(params![car_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(raw_status_from_row(row)?));
    }

    Ok(None)
}

fn raw_status_from_row(row: &Row<'_>) -> rusqlite::Result<RawStatusRecord> {
    Ok(RawStatusRecord {
        car_id: row.get(0)?,
        name: row.get(1)?,
        model: row.get(2)?,
        trim_badging: row.get(3)?,
        exterior_color: row.get(4)?,
        wheel_type: row.get(5)?,
        spoiler_type: row.get(6)?,
        vin: row.get(7)?,
        position_date: row.get(8)?,
        latitude: row.get(9)?,
        longitude: row.get(10)?,
        speed: row.get(11)?,
        power: row.get(12)?,
        odometer: row.get(13)?,
        battery_level: row.get(14)?,
        usable_battery_level: row.get(15)?,
        ideal_battery_range_km: row.get(16)?,
        est_battery_range_km: row.get(17)?,
        rated_battery_range_km: row.get(18)?,
        elevation: row.get(19)?,
        outside_temp: row.get(20)?,
        inside_temp: row.get(21)?,
        is_climate_on: row.get(22)?,
        is_preconditioning: row.get(23)?,
        tpms_pressure_fl: row.get(24)?,
        tpms_pressure_fr: row.get(25)?,
        tpms_pressure_rl: row.get(26)?,
        tpms_pressure_rr: row.get(27)?,
        state: row.get(28)?,
        state_since: row.get(29)?,
        is_charging: row.get(30)?,
        charging_state: row.get(31)?,
        charger_power: row.get(32)?,
        charger_voltage: row.get(33)?,
        charger_phases: row.get(34)?,
        charger_actual_current: row.get(35)?,
        charge_energy_added: row.get(36)?,
        unit_of_length: row.get(37)?,
        unit_of_pressure: row.get(38)?,
        unit_of_temperature: row.get(39)?,
    })
}

pub fn insert_car(connection: &Connection, car: &NewCarRecord) -> Result<i64, DbError> {
    connection.execute(
        "INSERT INTO cars (id, name, model, trim_badging, exterior_color, wheel_type, spoiler_type, vin)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            car.id,
            car.name,
            car.model,
            car.trim_badging,
            car.exterior_color,
            car.wheel_type,
            car.spoiler_type,
            car.vin,
        ],
    )?;

    Ok(car.id)
}

pub fn insert_position(
    connection: &Connection,
    position: &NewPositionRecord,
) -> Result<i64, DbError> {
    connection.execute(
        "INSERT INTO positions (
             car_id, date, latitude, longitude, speed, power, odometer, battery_level,
             usable_battery_level, ideal_battery_range_km, est_battery_range_km,
             rated_battery_range_km, elevation, outside_temp, inside_temp, is_climate_on,
             is_preconditioning, tpms_pressure_fl, tpms_pressure_fr, tpms_pressure_rl,
             tpms_pressure_rr
         ) VALUES (
             ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
             ?19, ?20, ?21
         )",
        params![
            position.car_id,
            position.date,
            position.latitude,
            position.longitude,
            position.speed,
            position.power,
            position.odometer,
            position.battery_level,
            position.usable_battery_level,
            position.ideal_battery_range_km,
            position.est_battery_range_km,
            position.rated_battery_range_km,
            position.elevation,
            position.outside_temp,
            position.inside_temp,
            position.is_climate_on,
            position.is_preconditioning,
            position.tpms_pressure_fl,
            position.tpms_pressure_fr,
            position.tpms_pressure_rl,
            position.tpms_pressure_rr,
        ],
    )?;

    Ok(connection.last_insert_rowid())
}

pub fn insert_state(connection: &Connection, state: &NewStateRecord) -> Result<i64, DbError> {
    connection.execute(
        "INSERT INTO states (car_id, state, start_date, end_date) VALUES (?1, ?2, ?3, ?4)",
        params![state.car_id, state.state, state.start_date, state.end_date],
    )?;

    Ok(connection.last_insert_rowid())
}

pub fn insert_charging_process(
    connection: &Connection,
    process: &NewChargingProcessRecord,
) -> Result<i64, DbError> {
    connection.execute(
        "INSERT INTO charging_processes (car_id, start_date, end_date) VALUES (?1, ?2, ?3)",
        params![process.car_id, process.start_date, process.end_date],
    )?;

    Ok(connection.last_insert_rowid())
}

pub fn insert_charge(connection: &Connection, charge: &NewChargeRecord) -> Result<i64, DbError> {
    connection.execute(
        "INSERT INTO charges (
             charging_process_id, date, charger_power, charger_voltage, charger_phases,
             charger_actual_current, charge_energy_added
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            charge.charging_process_id,
            charge.date,
            charge.charger_power,
            charge.charger_voltage,
            charge.charger_phases,
            charge.charger_actual_current,
            charge.charge_energy_added,
        ],
    )?;

    Ok(connection.last_insert_rowid())
}

pub fn upsert_settings(connection: &Connection, settings: &UnitSettings) -> Result<(), DbError> {
    connection.execute(
        "INSERT INTO settings (id, unit_of_length, unit_of_pressure, unit_of_temperature)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT (id) DO UPDATE SET
             unit_of_length = excluded.unit_of_length,
             unit_of_pressure = excluded.unit_of_pressure,
             unit_of_temperature = excluded.unit_of_temperature",
        params![
            settings.unit_of_length,
            settings.unit_of_pressure,
            settings.unit_of_temperature,
        ],
    )?;

    Ok(())
}
