// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_list_document(sections: usize) -> String {
    let base = "# Title\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n  - Another nested item\n- Another item\n\n1. First\n2. Second\n\n   Loose continuation.\n3. Third\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(sections)
}

/// Lists typed straight under paragraphs, the shape live preview degrades.
#[allow(dead_code)]
pub fn generate_degraded_document(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("Notes for section {section}\n"));
        for item in 0..4 {
            content.push_str(&format!("- item {item}\n  - detail {item}\n"));
        }
        content.push('\n');
    }
    content
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("{}- level {level}\n", "  ".repeat(level)));
    }
    content
}
