//! Source lints.
//!
//! 1. The economy core (`src/economy/`) must stay free of terminal and DOM
//!    crates so it runs and tests natively.
//! 2. Key hints like `[U]` in `src/ui/render.rs` must go through
//!    `push_action()`; a plain `push(` draws the hint but leaves it
//!    untappable.

use std::fs;
use std::path::{Path, PathBuf};

const PRESENTATION_CRATES: &[&str] = &["ratzilla", "ratatui", "web_sys", "js_sys", "tachyonfx"];

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Lines that mention a presentation crate as a path (`ratzilla::`, `use web_sys`).
fn presentation_references(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_comment(line))
        .filter(|(_, line)| {
            PRESENTATION_CRATES
                .iter()
                .any(|c| line.contains(&format!("{c}::")) || line.contains(&format!("use {c}")))
        })
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

/// True for `[X]` where X is a single key character.
fn contains_key_hint(s: &str) -> bool {
    s.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'[' && w[2] == b']' && (w[1].is_ascii_alphanumeric() || w[1] == b' '))
}

fn untappable_key_hints(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_comment(line))
        .filter(|(_, line)| contains_key_hint(line))
        .filter(|(_, line)| line.contains(".push(") && !line.contains("push_action("))
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

#[test]
fn economy_core_has_no_presentation_dependencies() {
    let mut files = Vec::new();
    rust_files(&src_dir().join("economy"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/economy");

    let mut msg = String::new();
    for file in &files {
        let source = fs::read_to_string(file).unwrap();
        for (line, text) in presentation_references(&source) {
            msg.push_str(&format!("  {}:{}: {}\n", file.display(), line, text));
        }
    }
    assert!(
        msg.is_empty(),
        "economy core references presentation crates:\n{msg}"
    );
}

#[test]
fn key_hints_are_tappable() {
    let path = src_dir().join("ui/render.rs");
    let source = fs::read_to_string(&path).unwrap();
    let violations = untappable_key_hints(&source);
    assert!(
        violations.is_empty(),
        "key hints rendered with push() in {}: {:?}",
        path.display(),
        violations
    );
}

mod tests {
    use super::*;

    #[test]
    fn detects_crate_paths() {
        let src = "use ratzilla::ratatui::Frame;\nlet w = web_sys::window();\n";
        assert_eq!(presentation_references(src).len(), 2);
    }

    #[test]
    fn ignores_comments_and_plain_words() {
        let src = "// ratzilla::DomBackend\nlet ratzilla_like = 1;\n";
        assert!(presentation_references(src).is_empty());
    }

    #[test]
    fn key_hint_detection() {
        assert!(contains_key_hint("[C]"));
        assert!(contains_key_hint(" [1] Buy Farm"));
        assert!(!contains_key_hint("[]"));
        assert!(!contains_key_hint("[{}]"));
        assert!(!contains_key_hint("[CC]"));
    }

    #[test]
    fn flags_push_with_key_hint() {
        let src = r#"al.push(Line::from(" [U] Upgrade"));"#;
        assert_eq!(untappable_key_hints(src).len(), 1);
        let ok = r#"al.push_action(Line::from(" [U] Upgrade"), UPGRADE, true);"#;
        assert!(untappable_key_hints(ok).is_empty());
    }
}
