//! Implementation of the `patchdiff init` command.
//!
//! Writes a commented `patchdiff.yaml` holding the default settings.

use crate::cli::InitArgs;
use patchdiff::error::{PatchDiffError, Result};
use patchdiff::fs::atomic_write_file;
use std::path::Path;

/// Config template written by `patchdiff init`.
const CONFIG_TEMPLATE: &str = r#"# patchdiff configuration

# Struct definition file the patch records are decoded with.
schema: JD-08.patchdef

# Struct each patch record is interpreted as, and the label of its row.
root_struct: PatchVST
root_label: Patch

# Byte offset of the patch record in each input file.
offset: 0

# Output format: text or json.
format: text

# Row filters. Command-line flags can turn these on.
filters:
  diff_only: false
  show_unknown: false
  show_precomputed: false
"#;

/// Execute the `patchdiff init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    write_template(&args.path, args.force)?;
    println!("Wrote {}", args.path.display());
    Ok(())
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PatchDiffError::UserError(format!(
            "'{}' already exists; use --force to overwrite it",
            path.display()
        )));
    }
    atomic_write_file(path, CONFIG_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patchdiff::config::Config;
    use tempfile::TempDir;

    #[test]
    fn template_matches_defaults() {
        assert_eq!(Config::from_yaml(CONFIG_TEMPLATE).unwrap(), Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patchdiff.yaml");
        std::fs::write(&path, "root_label: Mine\n").unwrap();

        let err = write_template(&path, false).unwrap_err();
        assert!(matches!(err, PatchDiffError::UserError(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "root_label: Mine\n");

        write_template(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
