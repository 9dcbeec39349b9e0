use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use lynx_store::{Bookmark, BookmarkField, BookmarkStore, Registry, StoreError};

mod launch;

#[derive(Debug, Parser)]
#[command(name = "lynx")]
#[command(about = "Persist named aliases for URIs in a local SQLite store")]
#[command(version)]
struct Cli {
    /// Database file path.
    #[arg(long, global = true, default_value = "lynx.db")]
    db: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all bookmarks.
    Ls(LsArgs),
    /// Add a bookmark under an alias.
    Add(AddArgs),
    /// Launch the URI of an alias with the default application.
    Open(OpenArgs),
    /// Remove a bookmark.
    Rm(RmArgs),
    /// Update the alias or uri of a bookmark.
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct LsArgs {
    /// Emit the bookmark list as JSON instead of one line per bookmark.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Alias to store the bookmark under.
    alias: String,
    /// Resource location to associate with the alias.
    uri: String,
}

#[derive(Debug, Args)]
struct OpenArgs {
    /// Alias whose URI should be opened.
    alias: String,
}

#[derive(Debug, Args)]
struct RmArgs {
    /// Alias to remove.
    alias: String,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Alias identifying the bookmark to change.
    alias: String,
    /// Literal keyword `set`.
    #[arg(value_name = "set")]
    set_keyword: String,
    /// Field to change: `alias` or `uri`.
    field: String,
    /// Literal keyword `to`.
    #[arg(value_name = "to")]
    to_keyword: String,
    /// New value for the field.
    value: String,
}

fn main() {
    // Diagnostics go to stderr so stdout stays clean for listings.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; clap's default for them is 2.
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let Some(command) = cli.command else {
        // Bare invocation prints usage and succeeds.
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(err) = run(&cli.db, command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(db: &Path, command: Command) -> Result<(), String> {
    let store = BookmarkStore::open(db).map_err(|e| e.to_string())?;
    let mut registry = Registry::load_from(&store).map_err(|e| e.to_string())?;

    match command {
        Command::Ls(args) => run_ls(&registry, args),
        Command::Add(args) => run_add(&store, &mut registry, args),
        Command::Open(args) => run_open(&registry, args),
        Command::Rm(args) => run_rm(&store, args),
        Command::Update(args) => run_update(&store, args),
    }
}

fn run_ls(registry: &Registry, args: LsArgs) -> Result<(), String> {
    if args.json {
        let json = serde_json::to_string_pretty(registry.list())
            .map_err(|err| format!("failed to serialize bookmarks: {err}"))?;
        println!("{json}");
        return Ok(());
    }

    if registry.is_empty() {
        println!("no bookmarks saved");
        return Ok(());
    }
    for bookmark in registry.list() {
        println!("{bookmark}");
    }
    Ok(())
}

fn run_add(store: &BookmarkStore, registry: &mut Registry, args: AddArgs) -> Result<(), String> {
    store
        .insert(&args.alias, &args.uri)
        .map_err(|e| e.to_string())?;
    // Mirror only successful durable writes.
    registry.append(Bookmark::new(&args.alias, &args.uri));
    println!("added {}: {}", args.alias, args.uri);
    Ok(())
}

fn run_open(registry: &Registry, args: OpenArgs) -> Result<(), String> {
    let bookmark = registry
        .find(&args.alias)
        .ok_or_else(|| StoreError::NotFound(args.alias.clone()).to_string())?;
    launch::launch_default_app(&bookmark.uri).map_err(|e| e.to_string())
}

fn run_rm(store: &BookmarkStore, args: RmArgs) -> Result<(), String> {
    store.delete(&args.alias).map_err(|e| e.to_string())?;
    println!("removed {}", args.alias);
    Ok(())
}

fn run_update(store: &BookmarkStore, args: UpdateArgs) -> Result<(), String> {
    // Whitelist the column before any statement is prepared. The literal
    // `set`/`to` slots are positional only and intentionally unvalidated.
    let field: BookmarkField = args.field.parse().map_err(|e: StoreError| e.to_string())?;
    store
        .update_field(&args.alias, field, &args.value)
        .map_err(|e| e.to_string())?;
    println!("updated {field} of {}", args.alias);
    Ok(())
}
