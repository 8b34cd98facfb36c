//! Turning class names found in descriptors into class references.

use std::collections::HashMap;

use model::ast::ClassRef;

/// Turns the internal name of a class referenced by a descriptor into a reference node.
///
/// Implementations may load the referenced class lazily, which can in turn decode that class's
/// own descriptors with a new `Decoder`.
pub trait ClassResolver {
    fn resolve_class(&mut self, internal_name: &str) -> ClassRef;
}

/// Builds class references directly from their names, without recording anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unresolved;

impl ClassResolver for Unresolved {
    fn resolve_class(&mut self, internal_name: &str) -> ClassRef {
        ClassRef::new(internal_name)
    }
}

/// Interns every class referenced by decoded descriptors, so that the referenced classes can be
/// loaded once decoding is finished.
#[derive(Debug, Default)]
pub struct ReferencedClasses {
    classes: HashMap<String, ClassRef>,
    /// Names in the order they were first referenced.
    order: Vec<String>,
}

impl ReferencedClasses {
    pub fn new() -> Self {
        ReferencedClasses {
            classes: HashMap::new(),
            order: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, internal_name: &str) -> bool {
        self.classes.contains_key(internal_name)
    }

    /// Returns the referenced classes in the order they were first referenced.
    pub fn classes(&self) -> Vec<&ClassRef> {
        self.order.iter().filter_map(|name| self.classes.get(name)).collect()
    }
}

impl ClassResolver for ReferencedClasses {
    fn resolve_class(&mut self, internal_name: &str) -> ClassRef {
        if let Some(class) = self.classes.get(internal_name) {
            return class.clone();
        }

        let class = ClassRef::new(internal_name);
        self.classes.insert(String::from(internal_name), class.clone());
        self.order.push(String::from(internal_name));
        class
    }
}
