use std::path::Path;

use serde::de::DeserializeOwned;

use crate::FieldMap;
use crate::TrustForgeError;
use crate::TrustForgeResult;

/// Load a structured input record (wizard data, iron-chain data, ...) from a
/// JSON or TOML file, dispatching on the file extension.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> TrustForgeResult<T> {
	let content = std::fs::read_to_string(path).map_err(|e| {
		TrustForgeError::DataFile {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

	parse_record(&content, ext, &path.display().to_string())
}

/// Load a flat token-name-to-value field map from a JSON or TOML file.
pub fn load_field_map(path: &Path) -> TrustForgeResult<FieldMap> {
	load_record(path)
}

fn parse_record<T: DeserializeOwned>(
	content: &str,
	extension: &str,
	path_display: &str,
) -> TrustForgeResult<T> {
	match extension {
		"json" => {
			serde_json::from_str(content).map_err(|e| {
				TrustForgeError::DataFile {
					path: path_display.to_string(),
					reason: e.to_string(),
				}
			})
		}
		"toml" => {
			toml::from_str(content).map_err(|e| {
				TrustForgeError::DataFile {
					path: path_display.to_string(),
					reason: e.to_string(),
				}
			})
		}
		other => Err(TrustForgeError::UnsupportedDataFormat(other.to_string())),
	}
}
