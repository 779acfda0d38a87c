use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crm_cli::migrate::MigrationReport;
use crm_model::{MappingSpec, SplitRule};

pub fn print_summary(report: &MigrationReport) {
    println!("Input: {}", report.input.display());
    match &report.outputs {
        Some(outputs) => {
            println!("Accepted: {}", outputs.accepted_csv.display());
            println!("Rejections: {}", outputs.rejection_report.display());
            println!("Dropped values: {}", outputs.dropped_report.display());
        }
        None => println!("Dry run: nothing written to {}", report.output_dir.display()),
    }

    let summary = report.result.summary();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Errors"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table, 80);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.input).add_attribute(Attribute::Bold),
        count_cell(summary.accepted, Color::Green),
        count_cell(summary.rejected, Color::Red),
        count_cell(summary.errors, Color::Red),
        count_cell(summary.soft_failures, Color::Yellow),
    ]);
    println!("{table}");
    print_error_breakdown(report);
}

fn print_error_breakdown(report: &MigrationReport) {
    let breakdown = report.result.error_breakdown();
    if breakdown.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Reason"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table, 120);
    align_column(&mut table, 2, CellAlignment::Right);
    for ((field, reason), count) in breakdown {
        table.add_row(vec![
            Cell::new(field).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(reason),
            count_cell(count, Color::Red),
        ]);
    }
    println!();
    println!("Rejections:");
    println!("{table}");
}

pub fn print_mapping(spec: &MappingSpec) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Legacy"),
        header_cell("Canonical"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table, 100);
    for entry in spec.renames() {
        table.add_row(vec![
            Cell::new(&entry.legacy).fg(Color::Blue),
            Cell::new(entry.canonical),
            dim_cell("rename"),
        ]);
    }
    for entry in spec.splits() {
        let targets: Vec<&str> = entry.targets.iter().map(|field| field.as_str()).collect();
        let rule = match entry.rule {
            SplitRule::Whitespace => "split on whitespace".to_string(),
            SplitRule::Delimiter(delimiter) => format!("split on '{delimiter}'"),
        };
        table.add_row(vec![
            Cell::new(&entry.legacy).fg(Color::Blue),
            Cell::new(targets.join(", ")),
            dim_cell(rule),
        ]);
    }
    println!("{table}");

    let unproduced = spec.unproduced_required_fields();
    if !unproduced.is_empty() {
        let names: Vec<&str> = unproduced.iter().map(|field| field.as_str()).collect();
        eprintln!(
            "warning: required fields never produced: {}",
            names.join(", ")
        );
    }
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
