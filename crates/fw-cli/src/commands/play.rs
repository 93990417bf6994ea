//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use fw_engine::{GameEngine, GameState};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let definition = super::load_definition(path)?;

    let mut engine = GameEngine::new();
    engine.on_output(|message| println!("{message}"));
    engine.load_game(definition).map_err(|e| e.to_string())?;

    println!();
    engine.start_new_game().map_err(|e| e.to_string())?;
    println!();
    println!(
        "  Type 'help' for commands, 'save <file>' / 'restore <file>' for snapshots, 'quit' to exit.\n"
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        // Snapshots are host concerns; the engine only sees play commands.
        if let Some(file) = input.strip_prefix("save ") {
            match save_session(&engine, file.trim()) {
                Ok(()) => println!("{}\n", "Saved.".green()),
                Err(e) => println!("{}\n", e.yellow()),
            }
            continue;
        }
        if let Some(file) = input.strip_prefix("restore ") {
            match restore_session(&mut engine, file.trim()) {
                Ok(()) => println!("{}\n", "Restored.".green()),
                Err(e) => println!("{}\n", e.yellow()),
            }
            continue;
        }

        let result = engine.process_command(input);
        if result.message.is_empty() {
            println!();
        } else if result.success {
            println!("{}\n", result.message);
        } else {
            println!("{}\n", result.message.yellow());
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
    }

    Ok(())
}

fn save_session(engine: &GameEngine, path: &str) -> Result<(), String> {
    let snapshot = engine.save_game().map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {path}: {e}"))
}

fn restore_session(engine: &mut GameEngine, path: &str) -> Result<(), String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let snapshot: GameState =
        serde_json::from_str(&text).map_err(|e| format!("failed to parse {path}: {e}"))?;
    engine.load_game_state(&snapshot).map_err(|e| e.to_string())
}
