//! `<artifact>.provenance.json` sidecars: which engine build produced an artifact,
//! from which input, under which layout and thread counts.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use shapebench::Representation;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run description recorded next to an artifact.
#[derive(Clone, Debug, Serialize)]
pub struct Payload {
    /// Subcommand that wrote the artifact (`run`, `sweep`).
    pub command: &'static str,
    #[serde(serialize_with = "repr_name")]
    pub mode: Representation,
    /// Thread counts exercised; a single entry for `run`.
    pub threads: Vec<usize>,
    pub input: PathBuf,
    pub shapes: usize,
    /// Command-specific extras (operation, kind, repeat count).
    pub extra: Value,
    pub label: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, mode: Representation, input: &Path, shapes: usize) -> Self {
        Self {
            command,
            mode,
            threads: Vec::new(),
            input: input.to_path_buf(),
            shapes,
            extra: Value::Null,
            label: None,
        }
    }

    pub fn threads(mut self, threads: &[usize]) -> Self {
        self.threads = threads.to_vec();
        self
    }

    pub fn extra(mut self, extra: Value) -> Self {
        self.extra = extra;
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

fn repr_name<S: serde::Serializer>(mode: &Representation, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(mode.name())
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    run: &'a Payload,
    output: &'a Path,
}

/// Build identity only (used by `report`).
#[derive(Serialize)]
pub struct Build<'a> {
    pub code_rev: String,
    pub engine_version: &'static str,
    pub label: Option<&'a str>,
}

pub fn block(label: Option<&str>) -> Build<'_> {
    Build {
        code_rev: code_rev(),
        engine_version: shapebench::VERSION,
        label,
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        engine_version: shapebench::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run: payload,
        output: artifact,
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing provenance {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance");
    Ok(path)
}

/// `results/occ.json` → `results/occ.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `SHAPEBENCH_REV` if set, else `git describe --always --dirty`, else `unknown`.
pub fn code_rev() -> String {
    if let Some(rev) = std::env::var("SHAPEBENCH_REV").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
