//! Show command implementation.

use std::path::PathBuf;

use crate::errors::{EnumSpliceError, Result};
use crate::interface::{Context, EnumSession};
use crate::writers::render_block;

/// Options for the show command.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub file: PathBuf,
    pub name: String,
}

/// Prints one enum as it would be regenerated.
pub fn show(ctx: &Context, options: ShowOptions) -> Result<()> {
    for line in show_lines(ctx, &options)? {
        println!("{}", line);
    }
    Ok(())
}

fn show_lines(ctx: &Context, options: &ShowOptions) -> Result<Vec<String>> {
    let session = EnumSession::load(ctx, &options.file)?;
    let block = session
        .get(&options.name)
        .ok_or_else(|| EnumSpliceError::NotFound(options.name.clone()))?;
    Ok(render_block(
        block.name.as_str(),
        &block.entries,
        "",
        &ctx.config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{color_document, lines};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_show_regenerates_block() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Colors.cs"), color_document().join("\n")).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let options = ShowOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Color".to_string(),
        };
        assert_eq!(
            show_lines(&ctx, &options).unwrap(),
            lines(&[
                "public enum Color",
                "{",
                "    Red,",
                "    Green = 2, //ok",
                "}",
            ])
        );
    }

    #[test]
    fn test_show_unknown_enum() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Colors.cs"), color_document().join("\n")).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let options = ShowOptions {
            file: PathBuf::from("Colors.cs"),
            name: "Shape".to_string(),
        };
        assert!(matches!(
            show(&ctx, options),
            Err(EnumSpliceError::NotFound(name)) if name == "Shape"
        ));
    }
}
