//! Store for the free-text recipe file: named multi-line blocks separated by
//! a single blank line. Updates are read-modify-write over the whole file;
//! untouched blocks come back byte-identical.

use crate::errors::StoreError;
use crate::event_log::EventLog;
use crate::models::RecipeBlock;
use log::{error, warn};
use std::fs;
use std::path::Path;

/// Separator between blocks in the backing file.
const BLOCK_SEPARATOR: &str = "\n\n";
const HEADER_PREFIX: &str = "Recipe: ";

fn read_blocks(path: &Path) -> Result<Vec<String>, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::from_io(path, e))?;
    Ok(content
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn try_update(name: &str, new_instructions: &str, path: &Path) -> Result<(), StoreError> {
    let mut blocks = read_blocks(path)?;
    let header = format!("{}{}", HEADER_PREFIX, name);

    // First block whose header line matches wins; duplicates further down
    // are left alone.
    let slot = blocks
        .iter()
        .position(|block| block.lines().next() == Some(header.as_str()))
        .ok_or_else(|| StoreError::RecipeNotFound {
            name: name.to_string(),
        })?;

    // The header line is kept verbatim; only the body is replaced.
    blocks[slot] = format!("{}\n{}", header, new_instructions);

    fs::write(path, blocks.join(BLOCK_SEPARATOR)).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Replaces the body of the named recipe, leaving every other block
/// untouched and the block order intact.
///
/// Returns false without touching the file when the name is not found, and
/// false without creating the file when it does not exist. Logs a
/// "Recipe updated" event on success.
pub fn update_recipe(name: &str, new_instructions: &str, path: &Path, log: &EventLog) -> bool {
    match try_update(name, new_instructions, path) {
        Ok(()) => {
            log.append("Recipe updated", &format!("Updated recipe '{}'", name));
            true
        }
        Err(StoreError::RecipeNotFound { name }) => {
            warn!("Recipe not found: {}", name);
            false
        }
        Err(StoreError::NotFound { path }) => {
            warn!("Recipes file not found: {}", path.display());
            false
        }
        Err(err) => {
            error!("Error updating recipe: {}", err);
            false
        }
    }
}

/// Parses every well-formed block into name plus body lines, in file order.
/// Blocks without the `Recipe: ` header prefix are skipped.
pub fn read_recipes(path: &Path) -> Vec<RecipeBlock> {
    let blocks = match read_blocks(path) {
        Ok(blocks) => blocks,
        Err(StoreError::NotFound { path }) => {
            warn!("Recipes file not found: {}", path.display());
            return Vec::new();
        }
        Err(err) => {
            error!("Error reading recipes: {}", err);
            return Vec::new();
        }
    };

    blocks
        .iter()
        .filter_map(|block| {
            let mut lines = block.lines();
            let name = lines.next()?.strip_prefix(HEADER_PREFIX)?;
            Some(RecipeBlock {
                name: name.to_string(),
                body: lines.map(str::to_string).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_match_is_exact_not_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.txt");
        fs::write(&path, "Recipe: Basil Extra\nold line\n").unwrap();
        let log = EventLog::new(dir.path().join("system_log.txt"));

        assert!(!update_recipe("Basil", "new line", &path, &log));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Recipe: Basil Extra\nold line\n"
        );
    }

    #[test]
    fn read_recipes_skips_headerless_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.txt");
        fs::write(&path, "just some notes\n\nRecipe: Basil\nline 1\nline 2").unwrap();

        let recipes = read_recipes(&path);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Basil");
        assert_eq!(recipes[0].body, vec!["line 1", "line 2"]);
    }
}
