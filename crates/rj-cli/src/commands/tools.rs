use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rj_core::ContentProvider;

pub fn run(dir: &Path) -> Result<(), String> {
    let provider = super::open_dir(dir)?;
    let catalog = provider.load_catalog().map_err(|e| e.to_string())?;

    if catalog.is_empty() {
        println!("  The toolkit catalog is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Resist cost", "Use benefit", "Description"]);

    for (id, tool) in catalog.iter() {
        table.add_row(vec![
            id.to_string(),
            tool.title.clone(),
            format!("-{}", tool.default_resist_cost),
            format!("-{}", tool.default_use_benefit),
            super::truncate(&tool.description, 50),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} tool{}",
        catalog.len(),
        if catalog.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
