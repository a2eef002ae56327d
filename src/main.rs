use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    process::exit,
};

use clap::{ArgGroup, Parser};
use mcrename::{Direction, Error, RewriteOptions, Rewriter, SymbolTables, read_table};

/// Translate Java sources between Forge and Fabric Minecraft mappings.
///
/// Reads source text from stdin (or --input) and writes the rewritten text to
/// stdout (or --output). Pipe the result through a Java formatter.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["to_fabric", "to_forge", "dump_tables"])
        .required(true)
))]
struct Args {
    /// Rewrite Forge names to Fabric names
    #[arg(long = "to_fabric")]
    to_fabric: bool,

    /// Rewrite Fabric names to Forge names
    #[arg(long = "to_forge")]
    to_forge: bool,

    /// Print the symbol tables in use as JSON and exit
    #[arg(long)]
    dump_tables: bool,

    /// The input file to read instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The output file to write instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class name table (.csv or .json) replacing the built-in one
    #[arg(long)]
    classes: Option<PathBuf>,

    /// Member name table (.csv or .json) replacing the built-in one
    #[arg(long)]
    members: Option<PathBuf>,

    /// Drop platform-only imports still pending at end of input instead of emitting them
    #[arg(long)]
    no_eof_flush: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut tables = SymbolTables::builtin();
    if let Some(path) = &args.classes {
        tables = tables.with_classes(read_table(path)?);
    }
    if let Some(path) = &args.members {
        tables = tables.with_members(read_table(path)?);
    }

    if args.dump_tables {
        let mut stdout = io::stdout().lock();
        tables.to_json_writer(&mut stdout)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let direction = if args.to_fabric {
        Direction::ToFabric
    } else {
        Direction::ToForge
    };
    let options = RewriteOptions {
        flush_pending_at_eof: !args.no_eof_flush,
    };
    let rewriter = Rewriter::new(direction, &tables, options)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let stats = rewriter.process(reader, writer)?;
    log::info!(
        "{}: rewrote {} of {} lines, consolidated {} imports",
        direction,
        stats.lines_changed,
        stats.lines_read,
        stats.imports_consolidated
    );
    Ok(())
}
