use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use passfort_core::{
    DEFAULT_PASSWORD_LENGTH, PASSWORD_TABLE, PasswordEntry, Predicate, Record, Value,
    generate_password,
};
use passfort_store::{Store, ensure_schema, with_store_reported};

mod auth;
mod interchange;
mod prompt;
mod report;
mod table;

use report::ConsoleReporter;

const DB_FILE_NAME: &str = "database.db";

/// Entry field selectable with `list --copy`.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
enum CopyField {
    Name,
    Website,
    Username,
    Password,
}

impl CopyField {
    fn column(self) -> &'static str {
        match self {
            CopyField::Name => "name",
            CopyField::Website => "website",
            CopyField::Username => "username",
            CopyField::Password => "password",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "passfort")]
#[command(about = "Local password manager backed by an embedded database")]
struct Cli {
    /// Directory containing the database file
    /// (default: ~/.local/share/passfort/database).
    #[arg(long, global = true)]
    db_dir: Option<PathBuf>,
    /// Surface backend error details in diagnostics.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List password entries.
    List(ListArgs),
    /// Add a new password entry interactively.
    Add,
    /// Edit an existing password entry.
    Edit(EditArgs),
    /// Delete a password entry.
    Delete(DeleteArgs),
    /// Generate a random password.
    Generate(GenerateArgs),
    /// Export entries to a CSV file.
    Export(ExportArgs),
    /// Import entries from a CSV file.
    Import(ImportArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Seconds to keep the listing on screen before clearing it.
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,
    /// Limit the number of entries displayed.
    #[arg(short, long, default_value_t = 10)]
    limit: u32,
    /// Only show entries whose name contains this term.
    #[arg(short = 'S', long)]
    search: Option<String>,
    /// Entry ID for --copy.
    #[arg(short, long)]
    password_id: Option<i64>,
    /// Print the selected field of the entry given by --password-id.
    #[arg(long, value_enum)]
    copy: Option<CopyField>,
    /// Show passwords in clear text.
    #[arg(short, long)]
    show: bool,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// ID of the entry to edit.
    #[arg(short, long)]
    password_id: i64,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// ID of the entry to delete.
    #[arg(short, long)]
    password_id: i64,
    /// Delete without confirmation.
    #[arg(short, long)]
    force: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Length of the generated password.
    #[arg(long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    length: usize,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Output CSV file.
    output: PathBuf,
}

#[derive(Debug, Args)]
struct ImportArgs {
    /// Input CSV file.
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let db_dir = cli.db_dir.clone().unwrap_or_else(default_db_dir);

    // Everything that touches stored credentials requires OS login;
    // password generation alone is unauthenticated.
    let authenticated = if matches!(&cli.command, Command::Generate(_)) {
        Ok(())
    } else {
        auth::authenticate()
    };

    let result = authenticated.and_then(|()| match cli.command {
        Command::List(args) => run_list(&db_dir, cli.verbose, args),
        Command::Add => run_add(&db_dir, cli.verbose),
        Command::Edit(args) => run_edit(&db_dir, cli.verbose, args),
        Command::Delete(args) => run_delete(&db_dir, cli.verbose, args),
        Command::Generate(args) => run_generate(args),
        Command::Export(args) => run_export(&db_dir, cli.verbose, args),
        Command::Import(args) => run_import(&db_dir, cli.verbose, args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn default_db_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| String::from("."));
    PathBuf::from(home).join(".local/share/passfort/database")
}

/// Opens a store session against the configured database, ensuring the
/// schema exists, and runs `body` inside it.
fn with_session<R>(
    db_dir: &Path,
    verbose: bool,
    body: impl FnOnce(&mut Store) -> R,
) -> Result<R, String> {
    with_store_reported(db_dir, DB_FILE_NAME, Box::new(ConsoleReporter), |store| {
        store.set_verbose(verbose);
        ensure_schema(store);
        body(store)
    })
    .map_err(|err| err.to_string())
}

fn run_list(db_dir: &Path, verbose: bool, args: ListArgs) -> Result<(), String> {
    if args.copy.is_some() && args.password_id.is_none() {
        return Err("--password-id is required when using --copy".to_string());
    }

    with_session(db_dir, verbose, |store| {
        let columns = store.columns(PASSWORD_TABLE);
        let rows: Vec<Record> = store
            .select(PASSWORD_TABLE, None, None, Some(args.limit))
            .into_iter()
            .filter(|row| match (&args.search, row.get("name")) {
                (Some(term), Some(Value::Text(name))) => name.contains(term.as_str()),
                (Some(_), _) => false,
                (None, _) => true,
            })
            .collect();
        print!("{}", table::render(&columns, &rows, args.show));

        if let (Some(id), Some(field)) = (args.password_id, args.copy) {
            print_field(store, id, field);
        }
    })?;

    if args.timeout > 0 {
        std::thread::sleep(Duration::from_secs(args.timeout));
        // ANSI clear so passwords do not linger on screen.
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }
    Ok(())
}

fn print_field(store: &Store, id: i64, field: CopyField) {
    let row = store.select_one(
        PASSWORD_TABLE,
        None,
        Some(&Predicate::new().eq("id", id)),
    );
    match row.as_ref().and_then(|r| r.get(field.column())) {
        Some(value) if !value.is_null() => {
            println!("{}: {value}", field.column());
        }
        _ => eprintln!(
            "error: no {} found for the specified password ID",
            field.column()
        ),
    }
}

fn run_add(db_dir: &Path, verbose: bool) -> Result<(), String> {
    let name = prompt::line("Name for the password entry")?;
    let website = prompt::line("Website URL for the password entry")?;
    let username = prompt::line("Username for the password entry")?;
    let password = prompt::hidden_confirmed("Password for the password entry")?;
    let note = prompt::line("Additional notes for the password entry (optional)")?;

    let entry = PasswordEntry {
        id: None,
        name,
        website,
        username: none_if_empty(username),
        password,
        note: none_if_empty(note),
    };

    let inserted = with_session(db_dir, verbose, |store| {
        store.insert(PASSWORD_TABLE, &entry.to_record())
    })?;

    match inserted {
        Some(id) => {
            println!("Password entry added successfully (ID {id}).");
            Ok(())
        }
        None => Err("password entry could not be added".to_string()),
    }
}

fn run_edit(db_dir: &Path, verbose: bool, args: EditArgs) -> Result<(), String> {
    let id = args.password_id;
    with_session(db_dir, verbose, |store| -> Result<(), String> {
        let predicate = Predicate::new().eq("id", id);
        let row = store
            .select_one(PASSWORD_TABLE, None, Some(&predicate))
            .ok_or_else(|| format!("record with ID {id} not found"))?;
        let current = PasswordEntry::from_record(&row)
            .ok_or_else(|| format!("record with ID {id} is malformed"))?;

        let name = prompt::line_with_default("Name for the password entry", &current.name)?;
        let website =
            prompt::line_with_default("Website URL for the password entry", &current.website)?;
        let username = prompt::line_with_default(
            "Username for the password entry",
            current.username.as_deref().unwrap_or(""),
        )?;
        let password =
            prompt::line_with_default("Password for the password entry", &current.password)?;
        let note = prompt::line_with_default(
            "Additional notes for the password entry (optional)",
            current.note.as_deref().unwrap_or(""),
        )?;

        let values = Record::new()
            .with("name", name)
            .with("website", website)
            .with("username", none_if_empty(username))
            .with("password", password)
            .with("note", none_if_empty(note));

        if store.update(PASSWORD_TABLE, &values, Some(&predicate)) {
            println!("Record with ID {id} successfully updated.");
            Ok(())
        } else {
            Err(format!("record with ID {id} not found"))
        }
    })?
}

fn run_delete(db_dir: &Path, verbose: bool, args: DeleteArgs) -> Result<(), String> {
    if args.force {
        println!("Force deleting password without confirmation.");
    } else if !prompt::confirm("Do you really want to delete the password?")? {
        println!("Aborted.");
        return Ok(());
    }

    let removed = with_session(db_dir, verbose, |store| {
        store.delete(
            PASSWORD_TABLE,
            Some(&Predicate::new().eq("id", args.password_id)),
        )
    })?;

    if removed {
        println!(
            "Password entry with ID {} deleted successfully.",
            args.password_id
        );
        Ok(())
    } else {
        Err(format!(
            "password entry with ID {} not found",
            args.password_id
        ))
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    println!("{}", generate_password(args.length));
    Ok(())
}

fn run_export(db_dir: &Path, verbose: bool, args: ExportArgs) -> Result<(), String> {
    let exported = with_session(db_dir, verbose, |store| {
        interchange::export(store, &args.output)
    })??;

    if exported > 0 {
        println!(
            "Passwords exported successfully to: {}",
            args.output.display()
        );
    } else {
        eprintln!("warning: no passwords found for export");
    }
    Ok(())
}

fn run_import(db_dir: &Path, verbose: bool, args: ImportArgs) -> Result<(), String> {
    let imported = with_session(db_dir, verbose, |store| {
        interchange::import(store, &args.file)
    })??;

    if imported > 0 {
        println!("Successfully imported {imported} passwords.");
        Ok(())
    } else {
        Err("no passwords were imported; check your CSV file format".to_string())
    }
}

fn none_if_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
