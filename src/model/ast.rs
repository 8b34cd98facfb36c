//! The type-expression tree handed to member synthesis. Unlike the raw descriptor structures,
//! these own their data and class references have been through a `ClassResolver`.

use std::fmt;
use std::ops::Index;

use model::descriptor::{codes, Primitive};

/// A reference to a class that has not been resolved to a declaration yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    internal_name: String,
}

impl ClassRef {
    pub fn new<S: Into<String>>(internal_name: S) -> ClassRef {
        ClassRef { internal_name: internal_name.into() }
    }

    /// The name as it appears in the class file, e.g. `java/lang/String`.
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// The dotted package name, e.g. `java.lang`. Empty for a class in the default package.
    pub fn package_name(&self) -> String {
        match self.internal_name.rfind('/') {
            Some(index) => self.internal_name[..index].replace('/', "."),
            None => String::new(),
        }
    }

    /// The class name without its package, e.g. `String`.
    pub fn simple_name(&self) -> &str {
        match self.internal_name.rfind('/') {
            Some(index) => &self.internal_name[index + 1..],
            None => &self.internal_name,
        }
    }

    /// The dotted fully-qualified name, e.g. `java.lang.String`.
    pub fn source_name(&self) -> String {
        self.internal_name.replace('/', ".")
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.source_name())
    }
}

/// A decoded type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(Primitive),
    Class(ClassRef),
    /// One array dimension. Multi-dimensional arrays are nested `Array`s.
    Array(Box<Type>),
}

impl Type {
    pub fn array_of(component: Type) -> Type {
        Type::Array(Box::new(component))
    }

    /// The number of array dimensions, zero for non-array types.
    pub fn dimensions(&self) -> usize {
        let mut dimensions = 0;
        let mut ty = self;
        while let Type::Array(ref component) = *ty {
            dimensions += 1;
            ty = &**component;
        }
        dimensions
    }

    /// The innermost non-array type. For a non-array type this is the type itself.
    pub fn element_type(&self) -> &Type {
        let mut ty = self;
        while let Type::Array(ref component) = *ty {
            ty = &**component;
        }
        ty
    }

    pub fn is_primitive(&self) -> bool {
        match *self {
            Type::Primitive(_) => true,
            _ => false,
        }
    }

    pub fn is_void(&self) -> bool {
        *self == Type::Primitive(Primitive::Void)
    }

    /// Returns true for class and array types.
    pub fn is_reference(&self) -> bool {
        !self.is_primitive()
    }

    /// Re-encodes the type as a descriptor.
    pub fn descriptor(&self) -> String {
        let mut descriptor = String::new();
        self.write_descriptor(&mut descriptor);
        descriptor
    }

    fn write_descriptor(&self, out: &mut String) {
        let mut ty = self;
        loop {
            match *ty {
                Type::Primitive(primitive) => return out.push(primitive.code()),
                Type::Class(ref class) => {
                    out.push(codes::CLASS);
                    out.push_str(class.internal_name());
                    return out.push(codes::CLASS_END);
                },
                Type::Array(ref component) => {
                    out.push(codes::ARRAY);
                    ty = &**component;
                },
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Type::Primitive(primitive) => write!(f, "{}", primitive),
            Type::Class(ref class) => write!(f, "{}", class),
            Type::Array(ref component) => {
                try!(write!(f, "{}", component));
                f.write_str("[]")
            },
        }
    }
}

/// A formal parameter synthesized from a descriptor. Descriptors carry no parameter names, so the
/// name is derived from the parameter's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterDeclaration {
    pub index: usize,
    pub name: String,
    pub ty: Type,
}

impl fmt::Display for ParameterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Parameter declarations in formal parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParameterList {
    parameters: Vec<ParameterDeclaration>,
}

impl ParameterList {
    pub fn new() -> ParameterList {
        ParameterList { parameters: vec![] }
    }

    /// Appends a parameter of type `ty`, named `<prefix><index>` where `index` is the number of
    /// parameters already in the list.
    pub fn push(&mut self, prefix: &str, ty: Type) {
        let index = self.parameters.len();
        self.parameters.push(ParameterDeclaration {
            index: index,
            name: format!("{}{}", prefix, index),
            ty: ty,
        });
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParameterDeclaration> {
        self.parameters.get(index)
    }

    pub fn iter(&self) -> ::std::slice::Iter<ParameterDeclaration> {
        self.parameters.iter()
    }

    /// The parameter types, in order.
    pub fn types(&self) -> Vec<&Type> {
        self.parameters.iter().map(|parameter| &parameter.ty).collect()
    }
}

impl Index<usize> for ParameterList {
    type Output = ParameterDeclaration;
    fn index(&self, index: usize) -> &Self::Output {
        &self.parameters[index]
    }
}

impl IntoIterator for ParameterList {
    type Item = ParameterDeclaration;
    type IntoIter = ::std::vec::IntoIter<ParameterDeclaration>;
    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a ParameterDeclaration;
    type IntoIter = ::std::slice::Iter<'a, ParameterDeclaration>;
    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                try!(f.write_str(", "));
            }
            try!(write!(f, "{}", parameter));
        }
        Ok(())
    }
}

/// The decoded form of a complete method descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub parameters: ParameterList,
    pub return_type: Type,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) -> {}", self.parameters, self.return_type)
    }
}
