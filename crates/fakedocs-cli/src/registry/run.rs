use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use fakedocs_generate::output::OutputFormat;
use fakedocs_generate::{GenerationReport, Variant};

use super::{RegistryError, RegistryResult};

/// Serializable reader options for a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOptions {
    pub variant: Variant,
    pub count: usize,
    pub required_field: Option<String>,
    pub seed: Option<u64>,
    pub pools: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Metadata captured at run start, before reader options are resolved.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub run_dir: PathBuf,
    pub format: OutputFormat,
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
pub struct RunConfig<'a> {
    pub run_id: &'a str,
    pub started_at: String,
    pub options: &'a RunOptions,
}

/// Paths for run artifacts.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub records_path: PathBuf,
    pub report_path: PathBuf,
    pub logs_path: PathBuf,
}

/// Creates the run directory and an empty log file.
///
/// `config.json` is written separately once the reader options are known,
/// so logging can be installed before they are resolved.
pub fn start_run(ctx: &RunContext) -> RegistryResult<RunPaths> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let root = ctx
        .run_dir
        .join(format!("{timestamp}__run_{}", ctx.run_id));

    create_dir_all(&root)?;

    let paths = RunPaths {
        config_path: root.join("config.json"),
        records_path: root.join(format!("records.{}", ctx.format.extension())),
        report_path: root.join("report.json"),
        logs_path: root.join("logs.ndjson"),
        root,
    };

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.logs_path)?;

    Ok(paths)
}

pub fn write_run_config(
    paths: &RunPaths,
    ctx: &RunContext,
    options: &RunOptions,
) -> RegistryResult<()> {
    let config = RunConfig {
        run_id: &ctx.run_id,
        started_at: ctx.started_at.to_rfc3339(),
        options,
    };
    write_json(&paths.config_path, &config)
}

pub fn write_report(paths: &RunPaths, report: &GenerationReport) -> RegistryResult<()> {
    write_json(&paths.report_path, report)
}

/// Copies the run's records file to `out_path`, creating parent directories.
pub fn copy_records(paths: &RunPaths, out_path: &Path) -> RegistryResult<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    std::fs::copy(&paths.records_path, out_path)?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> RegistryResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value).map_err(RegistryError::from)
}
