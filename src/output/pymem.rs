//! pymem reader script generator.
//!
//! Produces a standalone Python script that attaches to a process with
//! pymem and keeps printing the value of every entry. Address expressions
//! and type labels are resolved here; anything that cannot be resolved is
//! still emitted so the user can fix it by hand.

use std::path::Path;

use super::formatter::OutputFormatter;
use crate::resolve::{
    classify_address, lookup_type, AddressKind, ReadOperation, DEFAULT_TYPE, STRING_READ_LEN,
};
use crate::table::Entry;

const HEADER: &[&str] = &[
    "# Generated file",
    "import time",
    "from pymem import Pymem",
    "from pymem.process import module_from_name",
    "",
    "def connect():",
    "    process_name = input('Enter process name (game.exe): ').strip()",
    "    if not process_name:",
    "        raise RuntimeError('Process name required')",
    "    return Pymem(process_name)",
    "",
    "def read_all(pm):",
    "    values = {}",
];

const FOOTER: &[&str] = &[
    "    return values",
    "",
    "if __name__ == '__main__':",
    "    pm = connect()",
    "    while True:",
    "        vals = read_all(pm)",
    "        for k, v in vals.items():",
    "            print(f\"{k}: {v}\")",
    "        time.sleep(0.25)",
];

/// Formatter that generates a continuous pymem reader script.
pub struct PymemFormatter;

impl OutputFormatter for PymemFormatter {
    fn format(&self, entries: &[Entry]) -> String {
        let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();
        lines.extend(entries.iter().map(read_block));
        lines.extend(FOOTER.iter().map(|l| l.to_string()));
        lines.join("\n")
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn forces_extension(&self) -> bool {
        true
    }

    fn summary(&self, entry_count: usize, path: &Path) -> String {
        format!(
            "Wrote continuous Pymem reader to {} ({} entries)",
            path.display(),
            entry_count
        )
    }
}

/// Renders the statements of `read_all` that read one entry.
fn read_block(entry: &Entry) -> String {
    let mut lines = Vec::with_capacity(6);

    lines.push(format!(
        "    # {} ({})",
        single_line(&entry.title),
        single_line(&entry.variable_type)
    ));

    match classify_address(&entry.address) {
        AddressKind::ModuleRelative { module, offset } => {
            lines.push(format!(
                "    mod = module_from_name(pm.process_handle, {})",
                py_str(&module)
            ));
            lines.push(format!("    addr = mod.lpBaseOfDll + {}", py_hex(offset)));
        }
        AddressKind::NumericAbsolute(value) => {
            lines.push(format!("    addr = {}", py_hex(value)));
        }
        AddressKind::Unrecognized(raw) => {
            lines.push(format!(
                "    addr = {}  # unknown format, adjust manually",
                py_str(&raw)
            ));
        }
    }

    let read = match lookup_type(&entry.variable_type) {
        Some(info) if info.operation == ReadOperation::String => {
            format!("pm.read_string(addr, {})", STRING_READ_LEN)
        }
        Some(info) => format!("pm.{}(addr)", info.operation.name()),
        None => format!(
            "pm.read_bytes(addr, {})",
            DEFAULT_TYPE.width.unwrap_or(4)
        ),
    };
    lines.push(format!("    value = {}", read));

    lines.push(format!("    values[{}] = value", py_str(&entry.title)));
    lines.push(String::new());

    lines.join("\n")
}

/// Keeps comment text on one line.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Renders an integer the way Python's `hex()` does.
fn py_hex(value: i128) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

/// Renders a Python string literal following `repr()` quoting rules.
fn py_str(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut literal = String::with_capacity(text.len() + 2);
    literal.push(quote);

    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c == quote => {
                literal.push('\\');
                literal.push(c);
            }
            c if !is_printable(c) => literal.push_str(&escape_code_point(c)),
            c => literal.push(c),
        }
    }

    literal.push(quote);
    literal
}

/// Characters Python's `repr()` writes as escapes: controls, separators
/// other than the ASCII space, format characters, private use code points
/// and noncharacters. Unassigned code points are written as-is.
fn is_printable(c: char) -> bool {
    !matches!(
        c as u32,
        0x00..=0x1F
            | 0x7F..=0xA0
            | 0xAD
            | 0x600..=0x605
            | 0x61C
            | 0x6DD
            | 0x70F
            | 0x890..=0x891
            | 0x8E2
            | 0x1680
            | 0x180E
            | 0x2000..=0x200F
            | 0x2028..=0x202F
            | 0x205F..=0x2064
            | 0x2066..=0x206F
            | 0x3000
            | 0xE000..=0xF8FF
            | 0xFDD0..=0xFDEF
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
            | 0xF0000..=0x10FFFF
    ) && (c as u32 & 0xFFFE) != 0xFFFE
}

fn escape_code_point(c: char) -> String {
    match c as u32 {
        code @ 0..=0xFF => format!("\\x{:02x}", code),
        code @ 0x100..=0xFFFF => format!("\\u{:04x}", code),
        code => format!("\\U{:08x}", code),
    }
}
