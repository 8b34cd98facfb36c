//! Decodes the field and method descriptors of compiled classes into type trees, so that a
//! compiler frontend can synthesize declarations for members it only knows from bytecode.
//!
//! ```
//! use jvm_descriptors::decoder::{Decoder, Diagnostic, Unresolved};
//!
//! let mut resolver = Unresolved;
//! let mut diagnostics: Vec<Diagnostic> = vec![];
//! let mut decoder = Decoder::new(&mut resolver, &mut diagnostics);
//! let parameters = decoder.decode_parameters("ILjava/lang/String;[B").unwrap();
//! assert_eq!(parameters.to_string(), "int p0, java.lang.String p1, byte[] p2");
//! ```

#[macro_use]
extern crate log;

extern crate nom;

pub mod decoder;
pub mod logging;
pub mod model;
pub mod parser;

pub use decoder::{is_boolean, Decoder};
