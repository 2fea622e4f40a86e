/// One named memory location from a cheat table.
///
/// All fields are already cleaned (trimmed, one layer of enclosing quotes
/// removed). Missing source fields are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Display name, taken from `Description`, else `Name`, else `text`.
    pub title: String,
    /// Type label as written in the table (e.g. "4 Bytes", "Float").
    pub variable_type: String,
    /// Address expression (e.g. "0x1000" or "game.exe+1A2B3C").
    pub address: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        variable_type: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            variable_type: variable_type.into(),
            address: address.into(),
        }
    }
}
