//! Raw descriptor structures, as produced by the parser before any class names are resolved.
//! See [§4.3](https://docs.oracle.com/javase/specs/jvms/se8/html/jvms-4.html#jvms-4.3) of the
//! JVM specification.

use std::fmt;

/// The character codes used by descriptors.
pub mod codes {
    pub const BYTE: char = 'B';
    pub const CHAR: char = 'C';
    pub const DOUBLE: char = 'D';
    pub const FLOAT: char = 'F';
    pub const INT: char = 'I';
    pub const LONG: char = 'J';
    pub const SHORT: char = 'S';
    pub const BOOLEAN: char = 'Z';
    pub const VOID: char = 'V';
    pub const CLASS: char = 'L';
    pub const CLASS_END: char = ';';
    pub const ARRAY: char = '[';
    pub const PARAMETERS_START: char = '(';
    pub const PARAMETERS_END: char = ')';
}

/// An array type may have at most this many dimensions.
pub const MAX_DIMENSIONS: usize = 255;

/// A primitive type, or `void`. Every primitive is encoded by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    /// Only meaningful as a method return type, but accepted wherever a unit is.
    Void,
}

impl Primitive {
    /// Every primitive, including `Void`.
    pub const ALL: [Primitive; 9] = [Primitive::Byte, Primitive::Char, Primitive::Double,
                                     Primitive::Float, Primitive::Int, Primitive::Long,
                                     Primitive::Short, Primitive::Boolean, Primitive::Void];

    /// Returns the primitive encoded by `code`, or `None` if `code` is not a primitive code.
    pub fn from_code(code: char) -> Option<Primitive> {
        match code {
            codes::BYTE => Some(Primitive::Byte),
            codes::CHAR => Some(Primitive::Char),
            codes::DOUBLE => Some(Primitive::Double),
            codes::FLOAT => Some(Primitive::Float),
            codes::INT => Some(Primitive::Int),
            codes::LONG => Some(Primitive::Long),
            codes::SHORT => Some(Primitive::Short),
            codes::BOOLEAN => Some(Primitive::Boolean),
            codes::VOID => Some(Primitive::Void),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match *self {
            Primitive::Byte => codes::BYTE,
            Primitive::Char => codes::CHAR,
            Primitive::Double => codes::DOUBLE,
            Primitive::Float => codes::FLOAT,
            Primitive::Int => codes::INT,
            Primitive::Long => codes::LONG,
            Primitive::Short => codes::SHORT,
            Primitive::Boolean => codes::BOOLEAN,
            Primitive::Void => codes::VOID,
        }
    }

    /// The Java keyword naming this type.
    pub fn name(&self) -> &'static str {
        match *self {
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Boolean => "boolean",
            Primitive::Void => "void",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One unit of a descriptor. Class names are borrowed from the descriptor being parsed and are
/// still in internal form (`java/lang/Object`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType<'a> {
    Base(Primitive),
    Object(&'a str),
    /// One array dimension around the component type.
    Array(Box<FieldType<'a>>),
}

impl<'a> FieldType<'a> {
    /// Wraps `element` in `dimensions` array dimensions.
    pub fn array_of(element: FieldType<'a>, dimensions: usize) -> FieldType<'a> {
        let mut ty = element;
        for _ in 0..dimensions {
            ty = FieldType::Array(Box::new(ty));
        }
        ty
    }
}
