use std::sync::LazyLock;

use regex::Regex;

/// `<module>+<offset>`: the module token has no whitespace or `+`, the
/// offset token is restricted to hex digits and `x`.
static MODULE_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^\s+]+)\s*\+\s*([0-9a-fA-Fx]+)\s*$").expect("valid regex")
});

/// Classification of an address expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressKind {
    /// A plain integer address.
    NumericAbsolute(i128),
    /// An offset from the base of a loaded module.
    ModuleRelative { module: String, offset: i128 },
    /// Anything else, kept verbatim.
    Unrecognized(String),
}

/// Classifies an address string.
///
/// Module-relative notation is tried first, then a plain integer literal.
/// Everything else is [`AddressKind::Unrecognized`] with the input preserved.
pub fn classify_address(address: &str) -> AddressKind {
    if let Some((module, offset)) = parse_module_offset(address) {
        return AddressKind::ModuleRelative { module, offset };
    }

    match parse_int_literal(address) {
        Some(value) => AddressKind::NumericAbsolute(value),
        None => AddressKind::Unrecognized(address.to_string()),
    }
}

fn parse_module_offset(address: &str) -> Option<(String, i128)> {
    let captures = MODULE_OFFSET.captures(address)?;
    let offset_text = &captures[2];

    // Cheat Engine writes offsets as bare hex ("1A2B3C").
    let offset = parse_int_literal(offset_text).or_else(|| parse_bare_hex(offset_text))?;

    Some((captures[1].to_string(), offset))
}

fn parse_bare_hex(text: &str) -> Option<i128> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    i128::from_str_radix(digits, 16).ok()
}

/// Parses an integer literal with automatic base detection.
///
/// Accepts surrounding whitespace, an optional sign, decimal digits (no
/// leading zeros unless the value is zero), `0x`/`0o`/`0b` prefixes in any
/// case, and single underscores between digits. Values are `i128` so full
/// 64-bit unsigned addresses fit; anything wider is rejected.
pub fn parse_int_literal(text: &str) -> Option<i128> {
    let text = text.trim();

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let prefix = unsigned.get(..2).map(|p| p.to_ascii_lowercase());
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") => (16, &unsigned[2..]),
        Some("0o") => (8, &unsigned[2..]),
        Some("0b") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };

    // An underscore may directly follow a base prefix.
    let digits = if radix == 10 {
        digits
    } else {
        digits.strip_prefix('_').unwrap_or(digits)
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    if radix == 10 && cleaned.starts_with('0') && cleaned.chars().any(|c| c != '0') {
        return None;
    }

    let magnitude = u128::from_str_radix(&cleaned, radix).ok()?;
    if negative {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    }
}
