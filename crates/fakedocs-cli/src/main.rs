mod registry;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fakedocs_core::RecordSource;
use fakedocs_generate::output::OutputFormat;
use fakedocs_generate::output::csv::write_records_csv_file;
use fakedocs_generate::output::ndjson::write_records_ndjson_file;
use fakedocs_generate::{
    DocumentReader, GenerationError, GenerationReport, ReaderOptions, ReferencePools, Variant,
    classify,
};
use registry::{
    RunContext, RunOptions, copy_records, init_run_logging, start_run, write_report,
    write_run_config,
};
use settings::{ResolvedOverrides, ResolvedSettings, SettingsError, load_settings};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "fakedocs", version, about = "Synthetic document generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a reader, drain every record to disk and close it.
    Generate(GenerateArgs),
    /// Print the kind inferred for each field name.
    InspectField(InspectArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Record schema to produce.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,
    /// Number of records; unparsable values fall back to the variant default.
    #[arg(long)]
    count: Option<String>,
    /// Extra field for the extensible variant.
    #[arg(long)]
    required_field: Option<String>,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format for the records file.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Directory with pool override files.
    #[arg(long)]
    pools: Option<PathBuf>,
    /// Optional TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
    /// Optional extra copy of the records file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Field names to classify.
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Catalog,
    Extensible,
    Staff,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Catalog => Variant::Catalog,
            VariantArg::Extensible => Variant::Extensible,
            VariantArg::Staff => Variant::Staff,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Ndjson,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Ndjson => OutputFormat::Ndjson,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::InspectField(args) => {
            run_inspect(args);
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        variant,
        count,
        required_field,
        seed,
        format,
        pools,
        config,
        run_dir,
        out,
    } = args;

    let file = match &config {
        Some(path) => load_settings(path)?,
        None => Default::default(),
    };
    let overrides = ResolvedOverrides {
        variant: variant.map(Variant::from),
        count,
        required_field,
        seed,
        pools,
        format: format.map(OutputFormat::from),
    };
    let settings = ResolvedSettings::merge(file, overrides);

    let wants_extra_field = settings
        .required_field
        .as_deref()
        .is_some_and(|field| !field.trim().is_empty());
    if wants_extra_field && !settings.variant.accepts_extra_field() {
        return Err(CliError::InvalidConfig(format!(
            "--required-field needs the extensible variant, got '{}'",
            settings.variant
        )));
    }

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        run_dir,
        format: settings.format,
    };

    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    let (options, reference_pools) = resolve_reader(&settings)?;
    write_run_config(
        &run_paths,
        &run_ctx,
        &RunOptions {
            variant: options.variant,
            count: options.count,
            required_field: options.required_field.clone(),
            seed: options.seed,
            pools: settings.pools.clone(),
            format: settings.format,
        },
    )?;

    tracing::info!(event = "run_started", run_id = %run_id, variant = %options.variant);

    let timer = Instant::now();
    let mut report = GenerationReport::new(run_id.clone(), &options);
    let mut reader = DocumentReader::new(options, Arc::new(reference_pools));
    if let Some((name, kind)) = reader.extra_field() {
        report.record_extra_field(name, kind);
    }

    let mut generated = 0_u64;
    let mut journal = |produced: u64| {
        generated = produced;
        tracing::debug!(event = "progress", produced);
    };
    reader.open(&mut journal);
    report.records_generated = generated;

    let fields = RecordSource::field_names(&reader);
    let written = match settings.format {
        OutputFormat::Ndjson => {
            write_records_ndjson_file(&run_paths.records_path, reader.records())
        }
        OutputFormat::Csv => {
            write_records_csv_file(&run_paths.records_path, &fields, reader.records())
                .map_err(GenerationError::from)
        }
    };
    let bytes_written = match written {
        Ok(bytes) => bytes,
        Err(err) => {
            reader.close();
            tracing::warn!(event = "run_failed", error = %err);
            return Err(err.into());
        }
    };

    report.records_emitted = reader.emitted();
    report.open_cycles = reader.open_cycles();
    report.bytes_written = bytes_written;
    reader.close();

    tracing::info!(
        event = "records_written",
        path = %run_paths.records_path.display(),
        records = report.records_emitted,
        bytes = bytes_written
    );

    if let Some(out) = &out {
        copy_records(&run_paths, out)?;
        tracing::info!(event = "records_copied", path = %out.display());
    }

    report.finish(timer.elapsed());
    write_report(&run_paths, &report)?;
    tracing::info!(
        event = "run_finished",
        status = "success",
        run_dir = %run_paths.root.display(),
        duration_ms = report.duration_ms
    );

    Ok(())
}

/// Resolves reader options and pools; logs count fallbacks and pool overrides.
fn resolve_reader(
    settings: &ResolvedSettings,
) -> Result<(ReaderOptions, ReferencePools), CliError> {
    let options = ReaderOptions::from_config(settings.variant, &settings.config_map());
    let reference_pools = match &settings.pools {
        Some(dir) => settings.variant.default_pools().with_overrides(dir)?,
        None => settings.variant.default_pools(),
    };
    Ok((options, reference_pools))
}

fn run_inspect(args: InspectArgs) {
    for name in args.names {
        println!("{name}\t{}", classify(&name));
    }
}
