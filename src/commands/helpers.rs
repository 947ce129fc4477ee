//! Shared command helpers.

use crate::errors::Result;
use crate::interface::{Context, EnumSession, SaveReport};
use crate::io::Transaction;

/// Write options shared by every command that edits a file.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Write even if the file changed since it was read.
    pub force: bool,
    /// Show what would be written without writing.
    pub dry_run: bool,
    /// Show unified diffs of what would change.
    pub diff: bool,
    /// Suppress normal output.
    pub quiet: bool,
}

/// Saves a session according to `options`.
pub fn save_session(ctx: &Context, session: &mut EnumSession, options: &SaveOptions) -> Result<()> {
    let plan = session.plan_save(ctx)?;
    if !plan.changed {
        if !options.quiet {
            println!("No changes to {}.", plan.path.display());
        }
        return Ok(());
    }

    if options.diff || options.dry_run {
        let mut transaction = Transaction::new();
        transaction.write(&plan.path, plan.text);
        if options.diff {
            for diff in transaction.diffs() {
                println!("{}", diff);
            }
        } else {
            println!("Would perform {} actions:", transaction.len());
            for desc in transaction.describe() {
                println!("  {}", desc);
            }
            print_report(&plan.report);
        }
        return Ok(());
    }

    let report = session.save(ctx, options.force)?;
    if !options.quiet {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SaveReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// One line per non-empty group of the report.
fn report_lines(report: &SaveReport) -> Vec<String> {
    let groups = [
        ("Deleted", &report.deleted),
        ("Updated", &report.updated),
        ("Inserted", &report.inserted),
        ("Not found", &report.missing),
    ];
    groups
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
        .collect()
}
