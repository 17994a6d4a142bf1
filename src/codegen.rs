// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

// This file renders the C++ declaration that embeds a byte sequence as an
// array literal. Rendering is pure: bytes in, generated source text out.

/// Number of byte literals per output row.
const ROW_WIDTH: usize = 8;

/// Render a complete header declaration for `contents`, naming the array
/// `name` inside the `json_tests` namespace.
///
/// The inline comment after the opening brace records the exact byte count,
/// and every byte (including the last) is emitted as a comma-terminated
/// two-digit lowercase hex literal, 8 per row.
pub fn header(name: &str, contents: &[u8]) -> String {
    let mut out = String::new();

    out.push_str("namespace json_tests{\n");
    out.push_str(&format!(
        "   static unsigned const char {}[] = {{ // {}\n",
        name,
        contents.len()
    ));

    for row in contents.chunks(ROW_WIDTH) {
        let literals: Vec<String> = row.iter().map(|b| format!("0x{b:02x},")).collect();
        out.push_str(&literals.join(" "));
        out.push('\n');
    }

    out.push_str(" };\n");
    out.push_str("};\n");

    out
}
