#![allow(clippy::uninlined_format_args)]

use propescape::{parse_code_point, CodePoint, Error, PropertyMatcher, PropertyTable, Resolver};
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn parse_cp(s: &str) -> Result<CodePoint, String> {
    parse_code_point(s).ok_or_else(|| format!("Invalid code point: {}", s))
}

#[derive(Debug, StructOpt)]
#[structopt(name = "propescape-tool")]
struct Opt {
    /// The property escape, e.g. '\p{Script=Gurmukhi}'.
    escape: Option<String>,

    /// The code points to test, as U+0A3C, 0x0A3C or decimal.
    #[structopt(parse(try_from_str = parse_cp))]
    code_points: Vec<CodePoint>,

    /// Dump the intervals of the resolved set to stdout.
    #[structopt(long)]
    dump: bool,

    /// List the known scripts and their aliases.
    #[structopt(long)]
    list: bool,

    /// Print the Unicode version of the script tables.
    #[structopt(long)]
    unicode_version: bool,
}

fn list_scripts(table: &PropertyTable) {
    for property in table.properties() {
        let aliases: Vec<&str> = property.aliases().collect();
        if aliases.is_empty() {
            println!("{}", property.name());
        } else {
            println!("{} ({})", property.name(), aliases.join(", "));
        }
    }
}

fn dump_set(m: &PropertyMatcher) {
    let set = m.set();
    for iv in set.intervals() {
        if iv.first() == iv.last() {
            println!("U+{:04X}", iv.first());
        } else {
            println!("U+{:04X}..U+{:04X}", iv.first(), iv.last());
        }
    }
    println!(
        "{} intervals, {} code points",
        set.intervals().len(),
        set.count_codepoints()
    );
}

fn exec_on_code_point(m: &PropertyMatcher, cp: CodePoint) {
    match m.matches(cp) {
        Ok(true) => println!("U+{:04X}: match", cp),
        Ok(false) => println!("U+{:04X}: no match", cp),
        Err(err) => println!("U+{:04X}: {}", cp, err),
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Opt::from_args();
    let resolver = Resolver::unicode();

    if args.unicode_version {
        let (major, minor, update) = propescape::UNICODE_VERSION;
        println!("Unicode {}.{}.{}", major, minor, update);
    }
    if args.list {
        list_scripts(resolver.table());
    }

    let Some(escape) = args.escape else {
        if !args.list && !args.unicode_version {
            Opt::clap().print_help().ok();
            println!();
            std::process::exit(2);
        }
        return Ok(());
    };

    let m = resolver.compile(&escape)?;
    debug!(
        intervals = m.set().intervals().len(),
        "compiled {}", escape
    );
    if args.dump {
        dump_set(&m);
    }
    for cp in args.code_points {
        exec_on_code_point(&m, cp);
    }
    Ok(())
}
