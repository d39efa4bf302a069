//! Output formatting: JSON and YAML.
//!
//! Every command result is a JSON tree; `--output` picks how it is printed.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render any serializable value in the chosen format.
pub fn render<T: Serialize>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(render_err)?,
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(render_err)?,
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(render_err)?,
    };
    Ok(rendered)
}

fn render_err(err: impl std::fmt::Display) -> CliError {
    CliError::Render(err.to_string())
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end());
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn formats_differ_only_in_layout() {
        let value = json!({ "id": "7", "user_name": "alice" });
        assert_eq!(
            render(OutputFormat::JsonCompact, &value).unwrap(),
            r#"{"id":"7","user_name":"alice"}"#
        );
        assert!(render(OutputFormat::Json, &value).unwrap().contains("\n  \"id\": \"7\""));
        assert!(render(OutputFormat::Yaml, &value).unwrap().contains("user_name: alice"));
    }
}
