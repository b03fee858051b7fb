//! Example: Render the same table in every style and encoding
//!
//! Run with: cargo run -p biscuit-table --example render_table
//!
//! Set `RUST_LOG=biscuit_table=trace` to watch the measure and render passes.

use biscuit_table::{Align, Attribute, BasicColor, Color, Colors, Style, Table, TableResult, row};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> TableResult<()> {
    init_tracing();

    let mut table = Table::new();
    table.append_header(row!["#", "First Name", "Last Name", "Salary"]);
    table.append_rows([
        row![1, "Arya", "Stark", 3000],
        row![20, "Jon", "Snow", 2000, "You know nothing, Jon Snow!"],
        row![300, "Tyrion", "Lannister", 5000],
    ]);
    table.append_footer(row!["", "", "Total", 10000]);

    for style in Style::presets() {
        println!("=== {} ===", style.name);
        table.set_style(style);
        println!("{}\n", table.render());
    }

    println!("=== auto-index, capped columns ===");
    let mut indexed = Table::new();
    indexed.append_rows([
        row![1, "Arya", "Stark", 3000],
        row![20, "Jon", "Snow", 2000, "You know nothing, Jon Snow!"],
    ]);
    indexed.set_auto_index(true);
    indexed.set_allowed_column_lengths(vec![0, 0, 0, 0, 12]);
    indexed.set_align(vec![Align::Default, Align::Center]);
    println!("{}\n", indexed.render());

    println!("=== colors ===");
    table.set_style(Style::rounded());
    table.set_colors_header(vec![Colors::new(vec![
        Color::Fg(BasicColor::BrightRed),
        Color::Attr(Attribute::Bold),
    ])]);
    table.set_colors(vec![Colors::default(), Colors::from(Color::Fg(BasicColor::Cyan))]);
    println!("{}\n", table.render());

    println!("=== fitted to the terminal ===");
    if let Some(width) = table.fit_to_terminal() {
        println!("(capped at {width} columns)");
    }
    table.set_output_mirror(std::io::stdout());
    table.render_mirrored()?;
    println!();

    println!("=== csv ===\n{}\n", table.render_csv());
    println!("=== markdown ===\n{}\n", table.render_markdown());
    println!("=== html ===\n{}", table.render_html());
    Ok(())
}
