//! Endpoint paths served by the AmberDay backend.
//!
//! Paths are relative to the configured base URL and always start with `/`.

/// `GET` — currently persisted backup destination.
pub const BACKUP_PATH: &str = "/settings/backup/path";

/// `POST` — run the service-side folder picker and persist the choice.
pub const BACKUP_PATH_SELECT: &str = "/settings/backup/path/select";

/// `GET` — every backup record, newest first.
pub const BACKUPS: &str = "/backups/";

/// `GET` — backup records of one anchor, newest first.
pub fn backups_for_anchor(anchor_id: i64) -> String {
    format!("/backups/by-anchor/{anchor_id}")
}

/// Joins `base_url` and an absolute endpoint `path`, tolerating trailing
/// slashes on the base.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
