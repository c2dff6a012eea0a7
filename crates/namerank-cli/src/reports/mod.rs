use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use namerank_core::{RankedName, ScoreComponents, ScoringWeights};

pub fn print_breakdown(name: &str, components: &ScoreComponents, w: &ScoringWeights) {
    let c = components.rounded();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Component").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Max"),
    ]);
    table.add_row(vec![
        Cell::new("Frequency"),
        Cell::new(format!("{:.1}", c.frequency_score)),
        Cell::new(format!("{:.0}", w.frequency_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Structure"),
        Cell::new(format!("{:.1}", c.structural_score)),
        Cell::new(format!("{:.0}", w.structural_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Letter distribution"),
        Cell::new(format!("{:.1}", c.letter_uniqueness)),
        Cell::new(format!("{:.0}", w.letter_dist_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", c.total_score)).fg(Color::Cyan),
        Cell::new("100"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\nComponent scores for '{}':\n{}", name, table);
}

pub fn print_ranking(ranked: &[RankedName]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for (i, entry) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.label),
            Cell::new(format!("{:.1}", entry.score)),
        ]);
    }

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", table);
}
