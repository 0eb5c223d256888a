//! Resolved type representation.

use std::fmt;

/// Handle to a type in a [`TypeGraph`](super::TypeGraph) arena.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A `::`-joined path of IDL identifiers.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        QualifiedName { segments }
    }

    pub fn root(name: &str) -> Self {
        QualifiedName {
            segments: vec![name.to_owned()],
        }
    }

    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        QualifiedName { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last identifier.
    pub fn name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Everything but the last identifier.
    pub fn scope(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, scope)) => scope,
            None => &[],
        }
    }

    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("::"))
    }
}

/// Fixed-width numeric kinds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Numeric {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl Numeric {
    /// Wire width in bytes.
    pub fn width(self) -> usize {
        match self {
            Numeric::I8 | Numeric::U8 => 1,
            Numeric::I16 | Numeric::U16 => 2,
            Numeric::I32 | Numeric::U32 | Numeric::F32 => 4,
            Numeric::I64 | Numeric::U64 | Numeric::F64 => 8,
        }
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            Numeric::U8 | Numeric::U16 | Numeric::U32 | Numeric::U64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Numeric::F32 | Numeric::F64)
    }

    /// The Rust primitive with the same width and signedness.
    pub fn rust_name(self) -> &'static str {
        match self {
            Numeric::I8 => "i8",
            Numeric::U8 => "u8",
            Numeric::I16 => "i16",
            Numeric::U16 => "u16",
            Numeric::I32 => "i32",
            Numeric::U32 => "u32",
            Numeric::I64 => "i64",
            Numeric::U64 => "u64",
            Numeric::F32 => "f32",
            Numeric::F64 => "f64",
        }
    }

    /// Inclusive integer range, `None` for floats.
    pub fn int_range(self) -> Option<(i128, i128)> {
        let range = match self {
            Numeric::I8 => (i8::MIN as i128, i8::MAX as i128),
            Numeric::U8 => (0, u8::MAX as i128),
            Numeric::I16 => (i16::MIN as i128, i16::MAX as i128),
            Numeric::U16 => (0, u16::MAX as i128),
            Numeric::I32 => (i32::MIN as i128, i32::MAX as i128),
            Numeric::U32 => (0, u32::MAX as i128),
            Numeric::I64 => (i64::MIN as i128, i64::MAX as i128),
            Numeric::U64 => (0, u64::MAX as i128),
            Numeric::F32 | Numeric::F64 => return None,
        };
        Some(range)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Member {
    pub name: String,
    pub ty: TypeId,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StructKind {
    Plain,
    Exception,
    Request { operation_number: u32 },
    Response { operation_number: u32 },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StructType {
    pub name: QualifiedName,
    pub kind: StructKind,
    pub members: Vec<Member>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SequenceType {
    pub name: QualifiedName,
    pub element: TypeId,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MapType {
    pub name: QualifiedName,
    pub key: TypeId,
    pub value: TypeId,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Enumerator {
    pub name: String,
    pub value: i32,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EnumType {
    pub name: QualifiedName,
    pub enumerators: Vec<Enumerator>,
}

impl EnumType {
    pub fn contains(&self, value: i32) -> bool {
        self.enumerators.iter().any(|e| e.value == value)
    }
}

/// Every type the compiler knows how to encode.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Type {
    Bool,
    Numeric(Numeric),
    String { wide: bool },
    /// Opaque byte blob.
    Buffer,
    Struct(StructType),
    Sequence(SequenceType),
    Map(MapType),
    Enum(EnumType),
    /// A compound type declared but defined elsewhere.
    Forward(QualifiedName),
}

impl Type {
    /// Struct, exception, request, response, sequence, map and forward types.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Type::Struct(_) | Type::Sequence(_) | Type::Map(_) | Type::Forward(_)
        )
    }

    /// The declared name of a user type; `None` for primitives.
    pub fn qualified_name(&self) -> Option<&QualifiedName> {
        match self {
            Type::Struct(s) => Some(&s.name),
            Type::Sequence(s) => Some(&s.name),
            Type::Map(m) => Some(&m.name),
            Type::Enum(e) => Some(&e.name),
            Type::Forward(name) => Some(name),
            Type::Bool | Type::Numeric(_) | Type::String { .. } | Type::Buffer => None,
        }
    }

    /// Whether values of this type have a total order (usable as map keys).
    pub fn is_orderable(&self) -> bool {
        match self {
            Type::Bool | Type::String { .. } | Type::Buffer | Type::Enum(_) => true,
            Type::Numeric(n) => !n.is_float(),
            _ => false,
        }
    }

    /// IDL spelling of a primitive or the qualified name of a user type.
    pub fn describe(&self) -> String {
        match self {
            Type::Bool => "bool".to_owned(),
            Type::Numeric(n) => n.rust_name().to_owned(),
            Type::String { wide: false } => "string".to_owned(),
            Type::String { wide: true } => "wstring".to_owned(),
            Type::Buffer => "buffer".to_owned(),
            other => other
                .qualified_name()
                .map(QualifiedName::to_string)
                .unwrap_or_default(),
        }
    }
}
