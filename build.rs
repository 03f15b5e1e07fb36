//! Build script to generate the embedded secret word list
//!
//! Reads the word list file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));

    generate_word_list(
        "data/secrets.txt",
        &Path::new(&out_dir).join("secrets.rs"),
        "SECRETS",
        "Candidate secret words (six letters each)",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/secrets.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines and `#` comments are allowed in the source list
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    write_word_list(output_path, &words, const_name, doc_comment)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

fn write_word_list(
    output_path: &Path,
    words: &[&str],
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())
}
