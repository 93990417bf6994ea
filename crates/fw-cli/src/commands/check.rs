use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let definition = super::load_definition(Some(path))?;
    let report = fw_content::validate(&definition);

    if report.is_valid() {
        println!("  All checks passed for '{}'.", definition.metadata.title);
        println!(
            "  {} rooms, {} items, {} NPCs",
            definition.rooms.len(),
            definition.items.len(),
            definition.npcs.len()
        );
        return Ok(());
    }

    for error in &report.errors {
        eprintln!("  error: {error}");
    }
    let count = report.errors.len();
    Err(format!(
        "{count} validation error{}",
        if count == 1 { "" } else { "s" }
    ))
}
