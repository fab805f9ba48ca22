use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvxml_cli::pipeline::ConvertSummary;

/// Prints the run summary to stderr; stdout may be carrying the XML.
pub fn print_summary(summary: &ConvertSummary) {
    eprintln!("{}", summary_table(summary));
    if summary.has_errors() {
        eprintln!();
        eprintln!("Rejected lines:");
        eprintln!("{}", rejected_table(summary));
    }
}

fn summary_table(summary: &ConvertSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Lines read"), Cell::new(summary.lines)]);
    table.add_row(vec![Cell::new("Blank"), dim_cell(summary.blank)]);
    table.add_row(vec![Cell::new("Comments"), dim_cell(summary.comments)]);
    table.add_row(vec![
        Cell::new("Header line"),
        match summary.header_line {
            Some(line) => Cell::new(line),
            None => Cell::new("none").fg(Color::Yellow),
        },
    ]);
    table.add_row(vec![Cell::new("Records"), Cell::new(summary.records)]);
    table.add_row(vec![
        Cell::new("Output lines"),
        Cell::new(summary.fragments),
    ]);
    table.add_row(vec![
        Cell::new("Rejected").add_attribute(Attribute::Bold),
        count_cell(summary.rejected.len(), Color::Red),
    ]);
    table
}

fn rejected_table(summary: &ConvertSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Line"), header_cell("Reason")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for rejected in &summary.rejected {
        table.add_row(vec![
            Cell::new(rejected.line).fg(Color::Red),
            Cell::new(&rejected.message),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
