use anyhow::{Context, Result};
use figures::api::Shape;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub command: &'static str,
    /// Figure count per kind label, over the figures that made it into the artifact.
    pub kinds: BTreeMap<&'static str, usize>,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, shapes: &[Shape], params: Value) -> Self {
        let mut kinds = BTreeMap::new();
        for shape in shapes {
            *kinds.entry(shape.kind().label()).or_insert(0) += 1;
        }
        Self {
            command,
            kinds,
            params,
        }
    }

    pub fn figure_count(&self) -> usize {
        self.kinds.values().sum()
    }
}

/// Write `<artifact>.provenance.json` next to the artifact.
///
/// Records the git commit, library version, callsite, command, the figures
/// drawn or summarised (total and per kind), params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let figure_count = payload.figure_count();
    let doc = json!({
        "code_rev": current_git_rev(),
        "figures_version": figures::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "figures": {
            "count": figure_count,
            "kinds": payload.kinds
        },
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/gallery.svg");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/gallery.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_command_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("summary.json");
        fs::write(&artifact, "{}").unwrap();
        let shapes = [
            Shape::circle("#8B0000", 1.0),
            Shape::rectangle("#800020", 2.0, 3.0),
            Shape::circle("#8B0000", 2.0),
        ];
        let payload = Payload::new("summary", &shapes, json!({"input": null, "rejected": 0}));
        assert_eq!(payload.figure_count(), 3);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "summary");
        assert_eq!(parsed["params"]["rejected"], 0);
        assert_eq!(parsed["figures_version"], figures::VERSION);
        assert_eq!(parsed["figures"]["count"], 3);
        assert_eq!(parsed["figures"]["kinds"]["Circle"], 2);
        assert_eq!(parsed["figures"]["kinds"]["Rectangle"], 1);
        assert!(parsed["figures"]["kinds"].get("Triangle").is_none());
    }
}
