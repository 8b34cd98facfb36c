#![cfg(test)]

extern crate jvm_descriptors;

use jvm_descriptors::decoder::{ClassResolver, Decoder, Diagnostic, LogSink, ReferencedClasses};
use jvm_descriptors::logging::SimpleLogger;
use jvm_descriptors::model::{ClassRef, Primitive, Type};
use jvm_descriptors::parser::descriptor::Error;

/// Stands in for the frontend's class loader: records every lookup, including repeated ones.
#[derive(Default)]
struct RecordingResolver {
    lookups: Vec<String>,
}

impl ClassResolver for RecordingResolver {
    fn resolve_class(&mut self, internal_name: &str) -> ClassRef {
        self.lookups.push(String::from(internal_name));
        ClassRef::new(internal_name)
    }
}

/// A field or method as read from a class file: name and raw descriptor.
struct Member {
    name: &'static str,
    descriptor: &'static str,
}

const MEMBERS: [Member; 4] = [
    Member { name: "main", descriptor: "([Ljava/lang/String;)V" },
    Member { name: "broken", descriptor: "(ILjava/lang/Object)V" },
    Member { name: "put", descriptor: "(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;" },
    Member { name: "matrix", descriptor: "()[[D" },
];

#[test]
fn test_synthesize_methods() {
    let _ = SimpleLogger::init();
    let mut resolver = RecordingResolver::default();
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let mut synthesized = vec![];
    {
        let mut decoder = Decoder::new(&mut resolver, &mut diagnostics);
        for member in MEMBERS.iter() {
            if let Some(signature) = decoder.decode_method(member.descriptor) {
                synthesized.push(format!("{} {}({})", signature.return_type, member.name,
                                         signature.parameters));
            }
        }
    }

    // the malformed member is skipped and the others are still synthesized
    assert_eq!(synthesized, vec![
        "void main(java.lang.String[] p0)",
        "java.lang.Object put(java.lang.Object p0, java.lang.Object p1)",
        "double[][] matrix()",
    ]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].descriptor, "(ILjava/lang/Object)V");
    assert_eq!(diagnostics[0].error, Error::UnterminatedClassName);
    assert_eq!(resolver.lookups, vec!["java/lang/String", "java/lang/Object", "java/lang/Object",
                                      "java/lang/Object"]);
}

#[test]
fn test_referenced_classes() {
    let mut classes = ReferencedClasses::new();
    let mut sink = LogSink::new();
    {
        let mut decoder = Decoder::new(&mut classes, &mut sink);
        decoder.decode_parameters("Ljava/util/List;ILjava/util/Map;Ljava/util/List;").unwrap();
        decoder.decode_type("[Ljava/util/Map$Entry;").unwrap();
        assert_eq!(decoder.decode_type("Ljava/util/List<TE;>;"), None);
    }
    assert_eq!(sink.reported(), 1);
    let names: Vec<&str> = classes.classes().iter().map(|class| class.internal_name()).collect();
    assert_eq!(names, vec!["java/util/List", "java/util/Map", "java/util/Map$Entry"]);
}

#[test]
fn test_field_types() {
    let mut resolver = RecordingResolver::default();
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let mut decoder = Decoder::new(&mut resolver, &mut diagnostics);

    let ty = decoder.decode_type("[[[Ljava/lang/Object;").unwrap();
    assert_eq!(ty.dimensions(), 3);
    assert_eq!(*ty.element_type(), Type::Class(ClassRef::new("java/lang/Object")));
    assert_eq!(ty.to_string(), "java.lang.Object[][][]");

    let ty = decoder.decode_type("J").unwrap();
    assert_eq!(ty, Type::Primitive(Primitive::Long));
    assert!(!ty.is_reference());
}

#[test]
fn test_boolean_literal_check() {
    // only a bare boolean field gets its int constant rendered as a boolean literal
    assert!(jvm_descriptors::is_boolean("Z"));
    assert!(!jvm_descriptors::is_boolean("[Z"));
    assert!(!jvm_descriptors::is_boolean("I"));
}
