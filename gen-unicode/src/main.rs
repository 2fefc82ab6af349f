use codegen::Scope;
use std::env;
use std::path::PathBuf;
use std::process;

mod scripts;

const USAGE: &str = "usage: gen-unicode <UCD_DIR> [SCRIPT...]

Writes the script table module to stdout. If SCRIPT names are given, only
those scripts are emitted.";

pub(crate) struct GenUnicode {
    scope: Scope,
    invocation: String,
    version: (u64, u64, u64),
    only_scripts: Vec<String>,
    scripts: Vec<ucd_parse::Script>,
    property_value_aliases: Vec<ucd_parse::PropertyValueAlias>,
}

impl GenUnicode {
    fn new(ucd_dir: PathBuf, only_scripts: Vec<String>) -> GenUnicode {
        let version = ucd_parse::ucd_directory_version(&ucd_dir)
            .expect("could not determine the UCD version");
        let scripts = ucd_parse::parse(&ucd_dir).expect("could not parse Scripts.txt");
        let property_value_aliases =
            ucd_parse::parse(&ucd_dir).expect("could not parse PropertyValueAliases.txt");
        let invocation = format!(
            "gen-unicode ucd-{}.{}.{} {}",
            version.0,
            version.1,
            version.2,
            only_scripts.join(" ")
        );
        GenUnicode {
            scope: Scope::new(),
            invocation: invocation.trim_end().to_string(),
            version,
            only_scripts,
            scripts,
            property_value_aliases,
        }
    }

    fn wants_script(&self, long: &str) -> bool {
        self.only_scripts.is_empty() || self.only_scripts.iter().any(|s| s == long)
    }

    fn generate(mut self) -> String {
        self.scope.import("crate::codepointset", "Interval");
        self.scope.import("crate::table", "ScriptData");
        self.scope.raw(&format!(
            "/// The version of the Unicode Character Database the tables were generated from.\n\
             pub const UNICODE_VERSION: (u8, u8, u8) = ({}, {}, {});",
            self.version.0, self.version.1, self.version.2
        ));
        self.generate_scripts();
        format!(
            "// Generated by gen-unicode from the Unicode Character Database. Do not edit.\n// {}\n\n{}\n",
            self.invocation,
            self.scope.to_string()
        )
    }
}

/// Sort and merge overlapping or abutting ranges.
pub(crate) fn pack_adjacent_chars(chars: &mut Vec<(u32, u32)>) {
    chars.sort_unstable();
    let mut packed: Vec<(u32, u32)> = Vec::with_capacity(chars.len());
    for &(first, last) in chars.iter() {
        match packed.last_mut() {
            Some(prev) if prev.1 + 1 >= first => prev.1 = prev.1.max(last),
            _ => packed.push((first, last)),
        }
    }
    *chars = packed;
}

/// Format ranges as `Interval::new` expressions.
pub(crate) fn chars_to_intervals(chars: &[(u32, u32)]) -> Vec<String> {
    chars
        .iter()
        .map(|&(first, last)| format!("Interval::new(0x{:04X}, 0x{:04X}),", first, last))
        .collect()
}

fn main() {
    let mut args = env::args().skip(1);
    let Some(ucd_dir) = args.next() else {
        eprintln!("{}", USAGE);
        process::exit(2);
    };
    let generator = GenUnicode::new(PathBuf::from(ucd_dir), args.collect());
    print!("{}", generator.generate());
}
