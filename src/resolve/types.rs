/// Semantic read performed for a variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOperation {
    Float,
    Double,
    Int,
    UChar,
    Short,
    String,
}

impl ReadOperation {
    /// Name of the pymem reader method.
    pub fn name(&self) -> &'static str {
        match self {
            ReadOperation::Float => "read_float",
            ReadOperation::Double => "read_double",
            ReadOperation::Int => "read_int",
            ReadOperation::UChar => "read_uchar",
            ReadOperation::Short => "read_short",
            ReadOperation::String => "read_string",
        }
    }
}

/// Read operation and byte width for a type label.
///
/// `width` is `None` for string reads, which use a fixed
/// [`STRING_READ_LEN`] buffer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub operation: ReadOperation,
    pub width: Option<usize>,
}

impl TypeInfo {
    const fn new(operation: ReadOperation, width: Option<usize>) -> Self {
        Self { operation, width }
    }
}

/// Bytes read for string values.
pub const STRING_READ_LEN: usize = 256;

/// Used for labels missing from the table (including the empty label).
pub const DEFAULT_TYPE: TypeInfo = TypeInfo::new(ReadOperation::Int, Some(4));

// Labels are matched exactly, case included.
const TYPE_TABLE: [(&str, TypeInfo); 11] = [
    ("Float", TypeInfo::new(ReadOperation::Float, Some(4))),
    ("Double", TypeInfo::new(ReadOperation::Double, Some(8))),
    ("4 Bytes", TypeInfo::new(ReadOperation::Int, Some(4))),
    ("4Bytes", TypeInfo::new(ReadOperation::Int, Some(4))),
    ("Dword", TypeInfo::new(ReadOperation::Int, Some(4))),
    ("Byte", TypeInfo::new(ReadOperation::UChar, Some(1))),
    ("1 Byte", TypeInfo::new(ReadOperation::UChar, Some(1))),
    ("2 Bytes", TypeInfo::new(ReadOperation::Short, Some(2))),
    ("Short", TypeInfo::new(ReadOperation::Short, Some(2))),
    ("Signed 4 Bytes", TypeInfo::new(ReadOperation::Int, Some(4))),
    ("String", TypeInfo::new(ReadOperation::String, None)),
];

/// Looks a label up in the type table without applying the default.
pub fn lookup_type(label: &str) -> Option<TypeInfo> {
    TYPE_TABLE
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, info)| *info)
}

/// Resolves a label, falling back to [`DEFAULT_TYPE`] for unknown labels.
pub fn resolve_type(label: &str) -> TypeInfo {
    lookup_type(label).unwrap_or(DEFAULT_TYPE)
}
