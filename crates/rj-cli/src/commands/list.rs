use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let provider = super::open_dir(dir)?;
    let journeys = rj_content::discover_journeys(provider.root());

    if journeys.is_empty() {
        println!("  No journeys found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Description"]);

    for journey in &journeys {
        table.add_row(vec![
            journey.id.clone(),
            journey.title.clone(),
            super::truncate(&journey.description, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} journey{}",
        journeys.len(),
        if journeys.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
