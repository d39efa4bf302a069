//! State file helpers shared by the lifecycle commands.

use std::path::Path;

use serde_json::Value;

use crate::error::CliError;

/// Read and parse a JSON state file.
pub fn read_state(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::State {
        path: path.display().to_string(),
        source,
    })
}

/// Rewrite a state file with `state`, pretty-printed.
pub fn write_state(path: &Path, state: &Value) -> Result<(), CliError> {
    let mut contents = serde_json::to_string_pretty(state).map_err(|source| CliError::State {
        path: path.display().to_string(),
        source,
    })?;
    contents.push('\n');
    std::fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn state_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("group.json");
        let state = json!({ "id": "9", "group_name": "ops" });
        write_state(&path, &state).unwrap();
        assert_eq!(read_state(&path).unwrap(), state);
    }

    #[test]
    fn malformed_state_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_state(&path).unwrap_err();
        assert!(matches!(err, CliError::State { .. }));
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }
}
