pub mod check;
pub mod info;
pub mod play;

use std::path::Path;

use fw_content::GameDefinition;

/// Read a game definition from disk, or fall back to the built-in sample.
fn load_definition(path: Option<&Path>) -> Result<GameDefinition, String> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("failed to parse {}: {e}", path.display()))
        }
        None => Ok(fw_content::sample_game()),
    }
}
