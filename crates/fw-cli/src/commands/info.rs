use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let definition = super::load_definition(path)?;
    let report = fw_content::validate(&definition);
    if !report.is_valid() {
        return Err(format!("invalid game definition: {report}"));
    }

    let meta = &definition.metadata;
    println!("  {} v{}", meta.title.bold(), meta.version);
    println!("  by {}", meta.author);
    if !meta.description.is_empty() {
        println!("\n  {}", meta.description);
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Items", "NPCs"]);

    let mut room_ids: Vec<&String> = definition.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let room = &definition.rooms[room_id];
        let name = if room_id == &meta.starting_room_id {
            format!("{} (start)", room.name)
        } else {
            room.name.clone()
        };
        let exits: Vec<&str> = room.exits.iter().map(|e| e.direction.as_str()).collect();
        table.add_row(vec![
            name,
            join_or_dash(&exits),
            join_or_dash(&room.items.iter().map(String::as_str).collect::<Vec<_>>()),
            join_or_dash(&room.npcs.iter().map(String::as_str).collect::<Vec<_>>()),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} rooms, {} items, {} NPCs",
        definition.rooms.len(),
        definition.items.len(),
        definition.npcs.len()
    );

    Ok(())
}

fn join_or_dash(parts: &[&str]) -> String {
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}
