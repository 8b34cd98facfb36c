//! Decoding descriptors into type trees for member synthesis.
//!
//! A `Decoder` borrows the two collaborators it needs: a `ClassResolver`, which turns the class
//! names found in descriptors into reference nodes, and a `DiagnosticSink`, which receives a
//! `Diagnostic` for every malformed descriptor. A malformed descriptor never aborts the caller;
//! the offending decode reports once and yields `None`.

pub mod diagnostics;
pub mod resolver;

use nom;

use model::ast::{MethodSignature, ParameterList, Type};
use model::descriptor::{codes, FieldType};
use parser::descriptor::{end, field_type, parameters_end, parameters_start};
use parser::descriptor::{DescriptorError, Error, Input, ParseResult};

pub use self::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use self::resolver::{ClassResolver, ReferencedClasses, Unresolved};

/// Parameter `n` of a decoded parameter list is named `PARAMETER_PREFIX` followed by `n`.
pub const PARAMETER_PREFIX: &'static str = "p";

type DecodeResult<'d, T> = Result<(Input<'d>, T), DescriptorError<'d>>;

/// Returns true if the descriptor starts with the `boolean` type code.
///
/// Only the first character is inspected, so this is false for `[Z`, an array of `boolean`.
pub fn is_boolean(descriptor: &str) -> bool {
    descriptor.starts_with(codes::BOOLEAN)
}

fn flatten<'d, O>(result: ParseResult<'d, O>) -> DecodeResult<'d, O> {
    match result {
        Ok((rest, o)) => Ok((rest, o)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
        // complete parsers never ask for more input, but treat it as running out
        Err(nom::Err::Incomplete(_)) => Err(DescriptorError::new("", Error::UnexpectedEnd)),
    }
}

/// Parses units until the input is exhausted or, if `enclosed` is true, until the closing
/// parenthesis, which is consumed and required.
fn units<'d>(input: Input<'d>, enclosed: bool) -> DecodeResult<'d, Vec<FieldType<'d>>> {
    let mut units = vec![];
    let mut rest = input;
    loop {
        if enclosed {
            let (after, closed) = try!(flatten(parameters_end(rest)));
            if closed.is_some() {
                return Ok((after, units));
            }
        } else if rest.is_empty() {
            return Ok((rest, units));
        }
        let (after, unit) = try!(flatten(field_type(rest)));
        units.push(unit);
        rest = after;
    }
}

fn method<'d>(input: Input<'d>)
              -> Result<(Vec<FieldType<'d>>, FieldType<'d>), DescriptorError<'d>> {
    let (rest, _) = try!(flatten(parameters_start(input)));
    let (rest, parameters) = try!(units(rest, true));
    let (rest, return_type) = try!(flatten(field_type(rest)));
    try!(flatten(end(rest)));
    Ok((parameters, return_type))
}

/// Decodes descriptors into `Type` trees, resolving class names through `R` and reporting
/// malformed descriptors to `S`.
///
/// Every entry point parses the whole descriptor before anything is resolved, so a malformed
/// descriptor produces exactly one diagnostic and no calls to the resolver.
pub struct Decoder<'a, R: 'a, S: 'a> {
    resolver: &'a mut R,
    sink: &'a mut S,
}

impl<'a, R: ClassResolver, S: DiagnosticSink> Decoder<'a, R, S> {
    pub fn new(resolver: &'a mut R, sink: &'a mut S) -> Self {
        Decoder {
            resolver: resolver,
            sink: sink,
        }
    }

    /// Decodes a field or return descriptor, which must consist of exactly one unit.
    pub fn decode_type(&mut self, descriptor: &str) -> Option<Type> {
        let result = flatten(field_type(descriptor)).and_then(|(rest, unit)| {
            try!(flatten(end(rest)));
            Ok(unit)
        });
        self.report(descriptor, result).map(|unit| self.resolve(unit))
    }

    /// Decodes the unit at the front of `input` and returns it along with the rest of the input.
    /// Nothing is reported on failure; the error is returned to the caller instead.
    pub fn decode_unit<'d>(&mut self, input: Input<'d>)
                           -> Result<(Type, Input<'d>), DescriptorError<'d>> {
        let (rest, unit) = try!(flatten(field_type(input)));
        trace!("decoded unit {:?}", &input[..input.len() - rest.len()]);
        Ok((self.resolve(unit), rest))
    }

    /// Decodes the concatenated parameter units of a method descriptor, without the surrounding
    /// parentheses. If any unit is malformed, a single diagnostic covering the whole parameter
    /// descriptor is reported and no list is returned.
    pub fn decode_parameters(&mut self, descriptor: &str) -> Option<ParameterList> {
        let result = units(descriptor, false).map(|(_, units)| units);
        let parameters = self.report(descriptor, result).map(|units| self.declare(units));
        if let Some(ref parameters) = parameters {
            debug!("decoded parameters {:?} as ({})", descriptor, parameters);
        }
        parameters
    }

    /// Decodes a complete method descriptor, such as `([Ljava/lang/String;)V`.
    pub fn decode_method(&mut self, descriptor: &str) -> Option<MethodSignature> {
        let result = method(descriptor);
        let signature = self.report(descriptor, result).map(|(parameters, return_type)| {
            MethodSignature {
                parameters: self.declare(parameters),
                return_type: self.resolve(return_type),
            }
        });
        if let Some(ref signature) = signature {
            debug!("decoded method {:?} as {}", descriptor, signature);
        }
        signature
    }

    /// Names the units by position, in order.
    fn declare(&mut self, units: Vec<FieldType>) -> ParameterList {
        let mut parameters = ParameterList::new();
        for unit in units {
            let ty = self.resolve(unit);
            parameters.push(PARAMETER_PREFIX, ty);
        }
        parameters
    }

    fn resolve(&mut self, unit: FieldType) -> Type {
        let mut unit = unit;
        let mut dimensions = 0;
        let mut ty = loop {
            unit = match unit {
                FieldType::Base(primitive) => break Type::Primitive(primitive),
                FieldType::Object(name) => break Type::Class(self.resolver.resolve_class(name)),
                FieldType::Array(component) => *component,
            };
            dimensions += 1;
        };
        for _ in 0..dimensions {
            ty = Type::array_of(ty);
        }
        ty
    }

    fn report<T>(&mut self, descriptor: &str, result: Result<T, DescriptorError>) -> Option<T> {
        match result {
            Ok(t) => Some(t),
            Err(e) => {
                self.sink.report(Diagnostic::new(descriptor, e));
                None
            },
        }
    }
}
