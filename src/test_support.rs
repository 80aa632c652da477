use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use rusqlite::Connection;

use crate::adapters::db::{open_connection, run_migrations};

const SCRATCH_DIR: &str = "./target/car-status-scratch";
const TEMPLATE_OVERRIDE_VAR: &str = "CAR_STATUS_TEMPLATE_DB";

static SCRATCH_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Fresh, already-migrated TeslaMate schema for one test. Each call gets its
/// own file copied from a template that is migrated once per test binary.
pub fn scratch_connection(label: &str) -> Connection {
    let path = scratch_db_path(label);
    std::fs::create_dir_all(SCRATCH_DIR).expect("scratch dir should be creatable");
    std::fs::copy(migrated_template(), &path).expect("template should be copied");

    open_connection(path.to_string_lossy().as_ref()).expect("scratch db should open")
}

fn migrated_template() -> &'static PathBuf {
    static TEMPLATE: OnceLock<PathBuf> = OnceLock::new();

    TEMPLATE.get_or_init(|| {
        let path = std::env::var(TEMPLATE_OVERRIDE_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SCRATCH_DIR).join("schema-template.sqlite"));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).expect("template dir should be creatable");
        }

        let mut connection =
            open_connection(path.to_string_lossy().as_ref()).expect("template db should open");
        run_migrations(&mut connection).expect("template should migrate");

        path
    })
}

fn scratch_db_path(label: &str) -> PathBuf {
    let sequence = SCRATCH_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PathBuf::from(SCRATCH_DIR).join(format!("{label}-{}-{sequence}.sqlite", std::process::id()))
}
