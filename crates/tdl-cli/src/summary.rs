use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tdl_cli::report::NOT_APPLICABLE;

use crate::types::ProfileResult;

pub fn print_profile(result: &ProfileResult) {
    println!("Source: {}", result.input.display());
    println!("SHA-256: {}", result.fingerprint);
    println!("Delimiter: {}", result.delimiter);
    println!("Rows: {}", result.rows);
    if let Some(path) = &result.json {
        println!("JSON: {}", path.display());
    }
    if let Some(path) = &result.canonical_out {
        println!("Canonical CSV: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Rows"),
        header_cell("Mode"),
        header_cell("Mean"),
        header_cell("Median"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for summary in &result.columns {
        table.add_row(vec![
            Cell::new(&summary.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            type_cell(&summary.value_type),
            Cell::new(summary.rows),
            value_cell(&summary.mode),
            value_cell(&summary.mean),
            value_cell(&summary.median),
        ]);
    }
    println!("{table}");

    if result.numeric_columns.is_empty() {
        println!("Numeric columns: none");
    } else {
        println!("Numeric columns: {}", result.numeric_columns.join(", "));
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(value_type: &str) -> Cell {
    let color = match value_type {
        "int" | "float" => Color::Green,
        "empty" => Color::DarkGrey,
        _ => Color::Yellow,
    };
    Cell::new(value_type).fg(color)
}

fn value_cell(value: &str) -> Cell {
    if value == NOT_APPLICABLE {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
