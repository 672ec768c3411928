use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LocalizeError, Result};
use crate::model::locale_map::LocaleMap;

/// Serializes `map` and writes it to `path`, replacing any existing file.
pub fn write_locale(path: &Path, map: &LocaleMap, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(map)?
    } else {
        serde_json::to_string(map)?
    };

    write_atomic(path, json.as_bytes())?;

    debug!(path = %path.display(), strings = map.len(), "wrote locale file");
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);

    fs::write(&tmp, bytes).map_err(|e| LocalizeError::file_access(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(LocalizeError::file_access(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "locale".to_string(),
    };
    p.set_file_name(format!(".{file_name}.tmp"));
    p
}
