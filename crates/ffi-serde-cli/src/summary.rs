use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ffi_serde_cli::types::{ClassifyReport, FileOutcome, FileStatus, RunSummary};
use ffi_serde_model::Classification;

pub fn print_summary(summary: &RunSummary) {
    println!("Command: {}", summary.command);
    println!("Directory: {}", summary.dir.display());
    if summary.dry_run {
        println!("Dry run: no files were written");
    }
    let applied_label = match summary.command {
        "annotate" => "Annotated",
        _ => "Generated",
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Output"),
        header_cell("Declarations"),
        header_cell(applied_label),
        header_cell("Skipped"),
        header_cell("Conflicts"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut total_declarations = 0usize;
    let mut total_applied = 0usize;
    let mut total_skipped = 0usize;
    let mut total_conflicts = 0usize;
    for file in &summary.files {
        total_declarations += file.declarations;
        total_applied += file.applied;
        total_skipped += file.skipped;
        total_conflicts += file.conflicts;
        table.add_row(vec![
            file_cell(&file.input),
            output_cell(file),
            Cell::new(file.declarations),
            count_cell(file.applied, Color::Green),
            dim_cell(file.skipped),
            count_cell(file.conflicts, Color::Yellow),
            status_cell(&file.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_declarations).add_attribute(Attribute::Bold),
        count_cell(total_applied, Color::Green).add_attribute(Attribute::Bold),
        dim_cell(total_skipped).add_attribute(Attribute::Bold),
        count_cell(total_conflicts, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let errors = summary.errors();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for error in errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_classification(report: &ClassifyReport) {
    for file in &report.files {
        println!("{}", file.path.display());
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Kind"),
            header_cell("Name"),
            header_cell("Line"),
            header_cell("Derive"),
            header_cell("Generated"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        for row in &file.declarations {
            table.add_row(vec![
                dim_cell(row.kind),
                Cell::new(&row.name),
                dim_cell(row.line),
                classification_cell(row.declarative),
                classification_cell(row.manual),
            ]);
        }
        println!("{table}");
    }
    if report.has_errors() {
        eprintln!("Errors:");
        for error in &report.errors {
            eprintln!("- {error}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(path: &Path) -> Cell {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn output_cell(file: &FileOutcome) -> Cell {
    match &file.output {
        Some(path) if path != &file.input => file_cell(path).fg(Color::Green),
        Some(_) => Cell::new("in place").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn status_cell(status: &FileStatus) -> Cell {
    let color = match status {
        FileStatus::Written => Color::Green,
        FileStatus::Unchanged => Color::DarkGrey,
        FileStatus::DryRun => Color::Yellow,
        FileStatus::Failed(_) => Color::Red,
    };
    Cell::new(status).fg(color).add_attribute(Attribute::Bold)
}

fn classification_cell(classification: Classification) -> Cell {
    match classification {
        Classification::DeclarativeEligible | Classification::ManualEligible => {
            Cell::new(classification).fg(Color::Green)
        }
        Classification::HandWritten => Cell::new(classification).fg(Color::Cyan),
        Classification::Excluded(_) => dim_cell(classification),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
