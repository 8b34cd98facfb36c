//! Contains a parser for JVM field and method descriptors.
//!
//! # Examples
//!
//! Basic usage:
//! ```
//! use jvm_descriptors::parser::descriptor::field_type;
//! use jvm_descriptors::model::descriptor::{FieldType, Primitive};
//!
//! let (rest, ty) = field_type("[IJ").unwrap();
//! assert_eq!(ty, FieldType::Array(Box::new(FieldType::Base(Primitive::Int))));
//! assert_eq!(rest, "J");
//! ```

pub mod descriptor;
