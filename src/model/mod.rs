//! Structures for [JVM descriptors](https://docs.oracle.com/javase/specs/jvms/se8/html/jvms-4.html#jvms-4.3)
//! and the type trees decoded from them.

pub mod ast;
pub mod descriptor;

pub use self::ast::{ClassRef, MethodSignature, ParameterDeclaration, ParameterList, Type};
pub use self::descriptor::{FieldType, Primitive};
