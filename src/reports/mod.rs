use cipherforge::breaker::{CaesarReport, RunSummary};
use cipherforge::cipher::{CipherKey, ALPHABET};
use cipherforge::scorer::WindowScore;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Two-row grid: alphabet on top, the letter each one maps to below.
pub fn print_key_grid(name: &str, key: &CipherKey) {
    println!("\nKey: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let top: Vec<Cell> = ALPHABET
        .iter()
        .map(|&b| {
            Cell::new((b as char).to_string())
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold)
        })
        .collect();
    let bottom: Vec<Cell> = key
        .to_string()
        .chars()
        .map(|c| Cell::new(c.to_string()).set_alignment(CellAlignment::Center))
        .collect();

    table.add_row(top);
    table.add_row(bottom);
    println!("{}", table);
}

pub fn print_caesar_report(report: &CaesarReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rot").add_attribute(Attribute::Bold),
        Cell::new("Words").fg(Color::Cyan),
        Cell::new("Text"),
    ]);

    for c in &report.candidates {
        table.add_row(vec![
            Cell::new(c.rotation).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}/{}", c.matches, report.word_count))
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
            Cell::new(&c.text),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_run_table(runs: &[RunSummary], best: f64) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Run").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Trials"),
        Cell::new("Accepted"),
        Cell::new("Key"),
    ]);

    for i in 0..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in runs {
        let score_cell = Cell::new(format!("{:.2}", r.score));
        let score_cell = if r.score == best {
            score_cell.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            score_cell
        };
        table.add_row(vec![
            Cell::new(r.run),
            score_cell,
            Cell::new(r.trials),
            Cell::new(r.accepted),
            Cell::new(r.key.to_string()),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_window_breakdown(windows: &[WindowScore]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Quadgram"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for (i, w) in windows.iter().enumerate() {
        let quad = Cell::new(&w.quadgram);
        let quad = if w.known { quad } else { quad.fg(Color::Red) };
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Right),
            quad,
            Cell::new(format!("{:.4}", w.score)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}
