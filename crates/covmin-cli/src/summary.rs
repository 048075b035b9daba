use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ConvertResult, RunResult};

pub fn print_summary(result: &ConvertResult) {
    println!("Output: {}", result.output_dir.display());
    println!("Publisher: {}", result.publisher);
    println!("{}", summary_table(result));
    if let Some(concatenated) = &result.concatenated {
        println!(
            "Concatenated: {} ({} rows, {})",
            concatenated.path.display(),
            concatenated.rows,
            concatenated.entity_header
        );
        if let Some(remote) = &concatenated.published {
            println!("  -> {remote}");
        }
    }
}

pub fn summary_table(result: &ConvertResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Run"),
        header_cell("Entity column"),
        header_cell("Samples"),
        header_cell("Dropped"),
        header_cell("Controls"),
        header_cell("Table"),
        header_cell("Published"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut total_samples = 0usize;
    let mut total_dropped = 0usize;
    let mut total_controls = 0usize;
    for run in &result.runs {
        total_samples += run.samples;
        total_dropped += run.dropped_rows;
        total_controls += run.controls_renamed;
        table.add_row(run_row(run));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_samples).add_attribute(Attribute::Bold),
        count_cell(total_dropped, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_controls, Color::Magenta).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

fn run_row(run: &RunResult) -> Vec<Cell> {
    let file_name = run
        .table_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| run.table_path.display().to_string());
    vec![
        Cell::new(&run.run_name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&run.entity_header),
        Cell::new(run.samples),
        count_cell(run.dropped_rows, Color::Yellow),
        count_cell(run.controls_renamed, Color::Magenta),
        Cell::new(file_name),
        published_cell(!run.published.is_empty()),
    ]
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

fn published_cell(published: bool) -> Cell {
    if published {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
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
