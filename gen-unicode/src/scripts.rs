use crate::{chars_to_intervals, pack_adjacent_chars, GenUnicode};
use ucd_parse::Codepoints;

struct Script {
    names: Vec<String>,
    const_name: String,
    codepoints: Vec<(u32, u32)>,
}

// TODO: Wait for https://github.com/tc39/ecma262/issues/3190 to be resolved.
const EXCLUDED_SCRIPTS: [&str; 2] = ["Unknown", "Katakana_Or_Hiragana"];

impl GenUnicode {
    pub(crate) fn generate_scripts(&mut self) {
        let mut scripts = Vec::new();

        for alias in &self.property_value_aliases {
            if alias.property != "sc"
                || EXCLUDED_SCRIPTS.contains(&alias.long.as_str())
                || !self.wants_script(&alias.long)
            {
                continue;
            }
            let mut names = vec![alias.long.clone()];
            if alias.long != alias.abbreviation {
                names.push(alias.abbreviation.clone());
            }
            names.extend(alias.aliases.iter().cloned());

            let mut codepoints: Vec<_> = self
                .scripts
                .iter()
                .filter(|sc| sc.script == alias.long)
                .map(|sc| codepoints_to_range(&sc.codepoints))
                .collect();
            pack_adjacent_chars(&mut codepoints);

            scripts.push(Script {
                names,
                const_name: alias.long.to_uppercase(),
                codepoints,
            });
        }
        scripts.sort_by(|a, b| a.names[0].cmp(&b.names[0]));

        let mut entries = Vec::with_capacity(scripts.len());
        for script in &scripts {
            let ranges = chars_to_intervals(&script.codepoints);
            self.scope.raw(&format!(
                "const {}: [Interval; {}] = [\n    {}\n];",
                script.const_name,
                ranges.len(),
                ranges.join("\n    ")
            ));
            entries.push(format!(
                "ScriptData {{ names: &[{}], ranges: &{} }},",
                script
                    .names
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(", "),
                script.const_name,
            ));
        }

        self.scope.raw(&format!(
            "pub(crate) const SCRIPTS: [ScriptData; {}] = [\n    {}\n];",
            entries.len(),
            entries.join("\n    ")
        ));
    }
}

fn codepoints_to_range(cp: &Codepoints) -> (u32, u32) {
    match cp {
        Codepoints::Single(cp) => (cp.value(), cp.value()),
        Codepoints::Range(range) => (range.start.value(), range.end.value()),
    }
}
