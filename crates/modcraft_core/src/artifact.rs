use crate::ModItem;

/// Extension of the exported file; the content is plain text, not an archive.
const ARTIFACT_EXTENSION: &str = "jar";
const FALLBACK_STEM: &str = "untitled-mod";
const MAX_STEM_CHARS: usize = 80;

/// The downloadable summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModArtifact {
    pub file_name: String,
    pub content: String,
}

impl ModArtifact {
    pub fn build(mod_name: &str, forge_version: &str, items: &[ModItem]) -> Self {
        Self {
            file_name: artifact_file_name(mod_name),
            content: render_artifact(mod_name, forge_version, items),
        }
    }
}

/// Mod name shown on the result card: the first three `' '`-separated
/// tokens of the raw description, joined by a single space.
///
/// Consecutive spaces produce empty tokens, so `"a  b c"` yields `"a  b"`.
pub fn derive_mod_name(prompt: &str) -> String {
    prompt.split(' ').take(3).collect::<Vec<_>>().join(" ")
}

/// Text content of the exported `.jar` file.
pub fn render_artifact(mod_name: &str, forge_version: &str, items: &[ModItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("- {} ({}): {}", item.name, item.kind, item.description))
        .collect();
    format!(
        "# {mod_name}\n\nGenerated for Forge {forge_version}\n\nItems:\n{}",
        lines.join("\n")
    )
}

/// `{slug}.jar`, where the slug is the lower-cased mod name with every
/// whitespace run replaced by `-`.
///
/// Characters that are not allowed in file names become `_`.
pub fn artifact_file_name(mod_name: &str) -> String {
    let mut stem = String::with_capacity(mod_name.len());
    let mut in_whitespace = false;
    for c in mod_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_forbidden(c) {
            stem.push('_');
        } else {
            stem.extend(c.to_lowercase());
        }
    }

    let mut stem: String = stem.chars().take(MAX_STEM_CHARS).collect();
    if stem.chars().all(|c| matches!(c, '-' | '_' | '.')) {
        stem = FALLBACK_STEM.to_string();
    }
    if is_reserved_windows_name(&stem) {
        stem.push('_');
    }
    format!("{stem}.{ARTIFACT_EXTENSION}")
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
        "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
