//! enumsplice CLI - edit enum declarations in source files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use enumsplice::commands::{self, SaveOptions};
use enumsplice::config::{read_config, read_config_file};
use enumsplice::interface::Context;

#[derive(Parser)]
#[command(name = "enumsplice")]
#[command(author, version, about = "Edit enum declarations embedded in source files", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by commands that write the file.
#[derive(Args)]
struct WriteArgs {
    /// Write even if the file was modified since it was read
    #[arg(short, long)]
    force: bool,

    /// Dry run - show what would be done without doing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show a unified diff instead of writing
    #[arg(long)]
    diff: bool,
}

impl From<WriteArgs> for SaveOptions {
    fn from(args: WriteArgs) -> Self {
        SaveOptions {
            force: args.force,
            dry_run: args.dry_run,
            diff: args.diff,
            quiet: false,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every enum in a file
    List {
        file: PathBuf,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one enum as it would be regenerated
    Show { file: PathBuf, name: String },

    /// Add a new enum
    AddEnum {
        file: PathBuf,
        name: String,

        /// Entry as Name, Name=Value, optionally followed by //Comment
        #[arg(short, long = "entry", value_name = "ENTRY")]
        entries: Vec<String>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Delete an enum
    RemoveEnum {
        file: PathBuf,
        name: String,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Append an entry to an enum
    AddEntry {
        file: PathBuf,
        #[arg(value_name = "ENUM")]
        enum_name: String,
        /// Entry name (a numbered default when omitted)
        name: Option<String>,

        /// Value expression
        #[arg(long)]
        value: Option<String>,

        /// Trailing comment, without the // marker
        #[arg(long)]
        comment: Option<String>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Remove an entry from an enum
    RemoveEntry {
        file: PathBuf,
        #[arg(value_name = "ENUM")]
        enum_name: String,
        name: String,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Rename an entry
    RenameEntry {
        file: PathBuf,
        #[arg(value_name = "ENUM")]
        enum_name: String,
        old: String,
        new: String,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Replace all entries of an enum
    SetEntries {
        file: PathBuf,
        #[arg(value_name = "ENUM")]
        enum_name: String,
        /// Entries as Name, Name=Value, optionally followed by //Comment
        #[arg(value_name = "ENTRY")]
        entries: Vec<String>,

        #[command(flatten)]
        write: WriteArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match cli.config {
        Some(ref path) => read_config_file(path),
        None => read_config(&base_dir),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context::new(config, base_dir);

    let result = match cli.command {
        Commands::List { file, json } => commands::list(&ctx, commands::ListOptions { file, json }),

        Commands::Show { file, name } => commands::show(&ctx, commands::ShowOptions { file, name }),

        Commands::AddEnum {
            file,
            name,
            entries,
            write,
        } => {
            let options = commands::AddEnumOptions {
                file,
                name,
                entries,
                save: write.into(),
            };
            commands::add_enum(&ctx, options)
        }

        Commands::RemoveEnum { file, name, write } => {
            let options = commands::RemoveEnumOptions {
                file,
                name,
                save: write.into(),
            };
            commands::remove_enum(&ctx, options)
        }

        Commands::AddEntry {
            file,
            enum_name,
            name,
            value,
            comment,
            write,
        } => {
            let options = commands::AddEntryOptions {
                file,
                enum_name,
                name,
                value,
                comment,
                save: write.into(),
            };
            commands::add_entry(&ctx, options)
        }

        Commands::RemoveEntry {
            file,
            enum_name,
            name,
            write,
        } => {
            let options = commands::RemoveEntryOptions {
                file,
                enum_name,
                name,
                save: write.into(),
            };
            commands::remove_entry(&ctx, options)
        }

        Commands::RenameEntry {
            file,
            enum_name,
            old,
            new,
            write,
        } => {
            let options = commands::RenameEntryOptions {
                file,
                enum_name,
                old,
                new,
                save: write.into(),
            };
            commands::rename_entry(&ctx, options)
        }

        Commands::SetEntries {
            file,
            enum_name,
            entries,
            write,
        } => {
            let options = commands::SetEntriesOptions {
                file,
                enum_name,
                entries,
                save: write.into(),
            };
            commands::set_entries(&ctx, options)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
