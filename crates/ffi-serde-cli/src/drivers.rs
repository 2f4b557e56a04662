//! Directory drivers for the annotate, generate and classify commands.
//!
//! Files are processed independently and in name order. A file that fails
//! is recorded in the summary and the run moves on; nothing is written for
//! that file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{error, info, info_span, warn};

use ffi_serde_core::{GenerateOptions, annotate, classify_unit, generate, output_file_name};
use ffi_serde_model::{DeclarativeRules, EligibilityRules, ManualRules};
use ffi_serde_scan::{SourceUnit, list_binding_files, scan};

use crate::files::{write_atomic, write_backup};
use crate::options::DriverOptions;
use crate::types::{ClassifiedFile, ClassifyReport, FileOutcome, FileStatus, RunSummary};

/// Adds `Serialize, Deserialize` to eligible derive lists, rewriting each
/// binding file in place after backing it up.
pub fn run_annotate(options: &DriverOptions, rules: &DeclarativeRules) -> Result<RunSummary> {
    run_each(options, "annotate", |path| annotate_file(path, options, rules))
}

/// Writes a generated codec unit next to each binding file.
pub fn run_generate(
    options: &DriverOptions,
    rules: &ManualRules,
    generate_options: &GenerateOptions,
) -> Result<RunSummary> {
    run_each(options, "generate", |path| {
        generate_file(path, options, rules, generate_options)
    })
}

/// Classifies every declaration of every binding file without writing.
pub fn run_classify(options: &DriverOptions, rules: &EligibilityRules) -> Result<ClassifyReport> {
    let mut report = ClassifyReport::default();
    for path in discover(options)? {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();
        match read_unit(&path) {
            Ok(unit) => report.files.push(ClassifiedFile {
                declarations: classify_unit(&unit, rules),
                path,
            }),
            Err(err) => {
                error!("{err:#}");
                report.errors.push(format!("{}: {err:#}", path.display()));
            }
        }
    }
    Ok(report)
}

fn discover(options: &DriverOptions) -> Result<Vec<PathBuf>> {
    let files = list_binding_files(&options.dir, &options.prefix)
        .with_context(|| format!("discover binding files in {}", options.dir.display()))?;
    if files.is_empty() {
        warn!(
            dir = %options.dir.display(),
            prefix = %options.prefix,
            "no binding files found"
        );
    }
    Ok(files)
}

fn run_each<F>(
    options: &DriverOptions,
    command: &'static str,
    mut process: F,
) -> Result<RunSummary>
where
    F: FnMut(&Path) -> Result<FileOutcome>,
{
    let mut files = Vec::new();
    for path in discover(options)? {
        let span = info_span!("file", path = %path.display());
        let _guard = span.enter();
        let outcome = match process(&path) {
            Ok(outcome) => {
                info!(
                    applied = outcome.applied,
                    skipped = outcome.skipped,
                    status = %outcome.status,
                    "processed binding file"
                );
                outcome
            }
            Err(err) => {
                error!("{err:#}");
                FileOutcome::failed(path, format!("{err:#}"))
            }
        };
        files.push(outcome);
    }
    Ok(RunSummary {
        command,
        dir: options.dir.clone(),
        dry_run: options.dry_run,
        files,
    })
}

fn read_unit(path: &Path) -> Result<SourceUnit> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    scan(&text).with_context(|| format!("scan {}", path.display()))
}

fn annotate_file(
    path: &Path,
    options: &DriverOptions,
    rules: &DeclarativeRules,
) -> Result<FileOutcome> {
    let unit = read_unit(path)?;
    let annotated = annotate(&unit, rules);
    let report = &annotated.report;

    let status = if !annotated.changed() {
        FileStatus::Unchanged
    } else if options.dry_run {
        FileStatus::DryRun
    } else {
        let backup = write_backup(path, &unit.text(), &options.backup_suffix)
            .context("write backup")?;
        write_atomic(path, &annotated.text).context("rewrite binding file")?;
        info!(backup = %backup.display(), "annotated in place");
        FileStatus::Written
    };

    Ok(FileOutcome {
        input: path.to_path_buf(),
        output: annotated.changed().then(|| path.to_path_buf()),
        declarations: report.total(),
        applied: report.annotated_count(),
        skipped: report.total() - report.annotated_count(),
        conflicts: 0,
        status,
    })
}

fn generate_file(
    path: &Path,
    options: &DriverOptions,
    rules: &ManualRules,
    generate_options: &GenerateOptions,
) -> Result<FileOutcome> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("{} has no UTF-8 file name", path.display()))?;
    let output_name =
        output_file_name(file_name, &options.prefix, &generate_options.output_prefix)
            .ok_or_else(|| {
                anyhow!(
                    "{file_name} does not start with `{}` followed by a suffix",
                    options.prefix
                )
            })?;
    let output = path.with_file_name(output_name);
    if output == path {
        bail!("output {} would overwrite its input", output.display());
    }

    let unit = read_unit(path)?;
    let generated = generate(&unit, rules, generate_options)
        .with_context(|| format!("generate codec for {}", path.display()))?;
    let report = &generated.report;
    if !report.conflicts.is_empty() {
        warn!(
            count = report.conflicts.len(),
            "declarations already derive serde; use either annotate or generate for this file"
        );
    }

    let unchanged = fs::read_to_string(&output).is_ok_and(|existing| existing == generated.text);
    let status = if unchanged {
        FileStatus::Unchanged
    } else if options.dry_run {
        FileStatus::DryRun
    } else {
        write_atomic(&output, &generated.text).context("write codec unit")?;
        FileStatus::Written
    };

    Ok(FileOutcome {
        input: path.to_path_buf(),
        output: Some(output),
        declarations: report.total(),
        applied: report.generated.len(),
        skipped: report.hand_written.len(),
        conflicts: report.conflicts.len(),
        status,
    })
}
