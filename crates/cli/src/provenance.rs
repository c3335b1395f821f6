use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source location that requested the sidecar.
#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Provenance block: which code produced an artifact, how, and from what.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsite: Option<Callsite>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    /// Block without a callsite or outputs (used by `report`).
    pub fn new(command: impl Into<String>, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: pipeflow::VERSION,
            command: command.into(),
            callsite: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, command: &str, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let loc = Location::caller();
    let doc = Provenance {
        callsite: Some(Callsite {
            file: loc.file(),
            line: loc.line(),
        }),
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Provenance::new(command, params)
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash: build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_build = option_env!("GIT_COMMIT").filter(|s| !s.is_empty());
    if let Some(rev) = from_build {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/sinks.txt"));
        assert_eq!(derived, Path::new("/tmp/out/sinks.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("sinks.txt");
        let path = write_sidecar(&artifact, "solve", json!({"strict": true})).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "solve");
        assert_eq!(parsed["params"]["strict"], true);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["version"], pipeflow::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }

    #[test]
    fn report_block_omits_callsite() {
        let doc = serde_json::to_value(Provenance::new("report", json!({}))).unwrap();
        assert!(doc.get("callsite").is_none());
        assert_eq!(doc["outputs"], json!([]));
    }
}
