//! Commands that add or remove whole enums.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{Context, EnumSession};
use crate::model::EnumEntry;

use super::helpers::{save_session, SaveOptions};

/// Options for the add-enum command.
#[derive(Debug, Clone, Default)]
pub struct AddEnumOptions {
    pub file: PathBuf,
    pub name: String,
    /// Entry arguments (`Name`, `Name=Value`, with optional `//Comment`).
    /// Empty keeps the default entry.
    pub entries: Vec<String>,
    pub save: SaveOptions,
}

/// Creates an enum and writes it to the file.
pub fn add_enum(ctx: &Context, options: AddEnumOptions) -> Result<()> {
    tracing::info!("Adding enum {} to {}", options.name, options.file.display());
    let mut session = EnumSession::load(ctx, &options.file)?;
    session.create_enum(&options.name)?;
    if !options.entries.is_empty() {
        let entries = options
            .entries
            .iter()
            .map(|arg| EnumEntry::from_arg(arg))
            .collect();
        session.set_entries(&options.name, entries)?;
    }
    save_session(ctx, &mut session, &options.save)
}

/// Options for the remove-enum command.
#[derive(Debug, Clone, Default)]
pub struct RemoveEnumOptions {
    pub file: PathBuf,
    pub name: String,
    pub save: SaveOptions,
}

/// Deletes an enum from the file.
pub fn remove_enum(ctx: &Context, options: RemoveEnumOptions) -> Result<()> {
    tracing::info!(
        "Removing enum {} from {}",
        options.name,
        options.file.display()
    );
    let mut session = EnumSession::load(ctx, &options.file)?;
    session.remove_enum(&options.name)?;
    save_session(ctx, &mut session, &options.save)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EnumSpliceError;
    use crate::test_utils::color_document;
    use std::fs;
    use tempfile::tempdir;

    fn quiet() -> SaveOptions {
        SaveOptions {
            quiet: true,
            ..SaveOptions::default()
        }
    }

    fn setup() -> (tempfile::TempDir, Context) {
        let dir = tempdir().unwrap();
        let mut text = color_document().join("\n");
        text.push('\n');
        fs::write(dir.path().join("Colors.cs"), text).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        (dir, ctx)
    }

    #[test]
    fn test_add_enum_with_entries() {
        let (dir, ctx) = setup();
        let options = AddEnumOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Shape".to_string(),
            entries: vec!["Square".to_string(), "Circle=4//round".to_string()],
            save: quiet(),
        };
        add_enum(&ctx, options).unwrap();

        let written = fs::read_to_string(dir.path().join("Colors.cs")).unwrap();
        assert!(written.ends_with(
            "}\n\n    public enum Shape\n    {\n        Square,\n        Circle = 4, //round\n    }\n"
        ));
    }

    #[test]
    fn test_add_existing_enum_fails() {
        let (dir, ctx) = setup();
        let before = fs::read_to_string(dir.path().join("Colors.cs")).unwrap();
        let options = AddEnumOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Color".to_string(),
            entries: Vec::new(),
            save: quiet(),
        };
        assert!(matches!(
            add_enum(&ctx, options),
            Err(EnumSpliceError::DuplicateName(_))
        ));
        assert_eq!(
            fs::read_to_string(dir.path().join("Colors.cs")).unwrap(),
            before
        );
    }

    #[test]
    fn test_remove_enum() {
        let (dir, ctx) = setup();
        let options = RemoveEnumOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Color".to_string(),
            save: quiet(),
        };
        remove_enum(&ctx, options).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("Colors.cs")).unwrap(),
            "namespace N\n{\n}\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let (dir, ctx) = setup();
        let before = fs::read_to_string(dir.path().join("Colors.cs")).unwrap();
        let options = RemoveEnumOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Color".to_string(),
            save: SaveOptions {
                dry_run: true,
                ..SaveOptions::default()
            },
        };
        remove_enum(&ctx, options).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("Colors.cs")).unwrap(),
            before
        );
    }
}
