//! Build script to generate the embedded sample dictionary
//!
//! Reads `word<TAB>count` records and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/nouns.tsv",
        &Path::new(&out_dir).join("sample.rs"),
        "SAMPLE",
        "Sample noun dictionary with popularity counts",
    );

    println!("cargo:rerun-if-changed=data/nouns.tsv");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<(&str, u64)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((word, count)) => {
                let count = count
                    .trim()
                    .parse()
                    .unwrap_or_else(|e| panic!("Bad count in {input_path} for {word:?}: {e}"));
                (word, count)
            }
            None => (line, 1),
        })
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u64)] = &[").unwrap();

    for (word, weight) in records {
        writeln!(output, "    ({word:?}, {weight}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of records in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
