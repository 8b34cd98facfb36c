use std::error;
use std::fmt;

use nom;
use nom::bytes::complete::take_till;
use nom::character::complete::{anychar, char};
use nom::multi::many0_count;

use model::descriptor::{codes, FieldType, Primitive, MAX_DIMENSIONS};

pub type Input<'a> = &'a str;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, DescriptorError<'a>>;

/// What went wrong while parsing a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The character at the start of a unit is not a type code.
    UnknownTypeCode { code: char },
    /// An `L` unit is not terminated by `;`.
    UnterminatedClassName,
    /// An `L` unit is immediately followed by `;`.
    EmptyClassName,
    /// An array type has more than `MAX_DIMENSIONS` dimensions.
    TooManyDimensions { dimensions: usize },
    /// The input ended where a unit was expected.
    UnexpectedEnd,
    /// A required character was not found.
    Expected { expected: char },
    /// Input remains after a complete descriptor.
    TrailingCharacters,
    /// Any other error raised by a nom combinator.
    Nom(nom::error::ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownTypeCode { code } => write!(f, "unknown type code {:?}", code),
            Error::UnterminatedClassName => write!(f, "class name is not terminated by ';'"),
            Error::EmptyClassName => write!(f, "class name is empty"),
            Error::TooManyDimensions { dimensions } =>
                write!(f, "array type has {} dimensions, at most {} are allowed", dimensions,
                       MAX_DIMENSIONS),
            Error::UnexpectedEnd => write!(f, "descriptor ended where a type was expected"),
            Error::Expected { expected } => write!(f, "expected {:?}", expected),
            Error::TrailingCharacters => write!(f, "unexpected characters after the descriptor"),
            Error::Nom(kind) => write!(f, "parse error ({})", kind.description()),
        }
    }
}

impl error::Error for Error {}

/// A parse error together with the input that was left when it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorError<'a> {
    pub remaining: Input<'a>,
    pub error: Error,
}

impl<'a> DescriptorError<'a> {
    pub fn new(remaining: Input<'a>, error: Error) -> Self {
        DescriptorError {
            remaining: remaining,
            error: error,
        }
    }

    /// The byte offset of the error within `descriptor`, which must be the input the failed
    /// parse started from.
    pub fn offset(&self, descriptor: &str) -> usize {
        descriptor.len() - self.remaining.len()
    }
}

impl<'a> nom::error::ParseError<Input<'a>> for DescriptorError<'a> {
    fn from_error_kind(input: Input<'a>, kind: nom::error::ErrorKind) -> Self {
        let error = match kind {
            nom::error::ErrorKind::Eof => Error::UnexpectedEnd,
            kind => Error::Nom(kind),
        };
        DescriptorError::new(input, error)
    }

    fn append(_: Input<'a>, _: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: Input<'a>, c: char) -> Self {
        DescriptorError::new(input, Error::Expected { expected: c })
    }
}

fn fail<'a, O>(input: Input<'a>, error: Error) -> ParseResult<'a, O> {
    Err(nom::Err::Failure(DescriptorError::new(input, error)))
}

/// Parses the body of a class unit, after the `L`: the internal name and the terminating `;`.
fn class_name<'a>(input: Input<'a>) -> ParseResult<'a, &'a str> {
    let (rest, name) =
        take_till::<_, Input<'a>, DescriptorError<'a>>(|c: char| c == codes::CLASS_END)(input)?;
    if rest.is_empty() {
        return fail(input, Error::UnterminatedClassName);
    }
    if name.is_empty() {
        return fail(input, Error::EmptyClassName);
    }
    let (rest, _) = char(codes::CLASS_END)(rest)?;
    Ok((rest, name))
}

/// Parses a single unit that is not an array: a primitive or a class.
fn element_type<'a>(input: Input<'a>) -> ParseResult<'a, FieldType<'a>> {
    let (rest, code) = anychar(input)?;
    if code == codes::CLASS {
        let (rest, name) = class_name(rest)?;
        return Ok((rest, FieldType::Object(name)));
    }
    match Primitive::from_code(code) {
        Some(primitive) => Ok((rest, FieldType::Base(primitive))),
        None => fail(input, Error::UnknownTypeCode { code: code }),
    }
}

/// Parses one unit from the front of `input`, returning it along with the unconsumed rest.
///
/// Array markers are counted and the element type is wrapped once per marker, so the first `[`
/// becomes the outermost dimension. More than `MAX_DIMENSIONS` markers are an error.
pub fn field_type<'a>(input: Input<'a>) -> ParseResult<'a, FieldType<'a>> {
    let (rest, dimensions) = many0_count(char(codes::ARRAY))(input)?;
    if dimensions > MAX_DIMENSIONS {
        return fail(input, Error::TooManyDimensions { dimensions: dimensions });
    }
    let (rest, element) = element_type(rest)?;
    Ok((rest, FieldType::array_of(element, dimensions)))
}

/// Succeeds only if nothing is left of `input`.
pub fn end<'a>(input: Input<'a>) -> ParseResult<'a, ()> {
    if input.is_empty() {
        Ok((input, ()))
    } else {
        fail(input, Error::TrailingCharacters)
    }
}

/// Parses the `(` that opens the parameters of a method descriptor.
pub fn parameters_start<'a>(input: Input<'a>) -> ParseResult<'a, ()> {
    let (rest, _) = char(codes::PARAMETERS_START)(input)?;
    Ok((rest, ()))
}

/// Parses the `)` that closes the parameters of a method descriptor, returning `None` without
/// consuming anything if `input` does not start with one.
pub fn parameters_end<'a>(input: Input<'a>) -> ParseResult<'a, Option<()>> {
    nom::combinator::opt(nom::combinator::map(char(codes::PARAMETERS_END), |_| ()))(input)
}

#[cfg(test)]
mod test {
    use super::*;
    use model::descriptor::{FieldType, Primitive};

    fn error_of(r: ParseResult<FieldType>) -> Error {
        match r {
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => e.error,
            res => panic!("Oops {:?}.", res),
        }
    }

    #[test]
    fn test_primitive() {
        assert_eq!(field_type("IJ"), Ok(("J", FieldType::Base(Primitive::Int))));
        assert_eq!(field_type("V"), Ok(("", FieldType::Base(Primitive::Void))));
    }

    #[test]
    fn test_class() {
        assert_eq!(field_type("Ljava/lang/String;I"),
                   Ok(("I", FieldType::Object("java/lang/String"))));
    }

    #[test]
    fn test_array() {
        let r = field_type("[[ILjava/lang/Object;");
        assert_eq!(r, Ok(("Ljava/lang/Object;",
                          FieldType::array_of(FieldType::Base(Primitive::Int), 2))));
        let r = field_type("[Ljava/lang/Object;");
        assert_eq!(r, Ok(("", FieldType::Array(Box::new(FieldType::Object("java/lang/Object"))))));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(error_of(field_type("Q")), Error::UnknownTypeCode { code: 'Q' });
        assert_eq!(error_of(field_type("[<")), Error::UnknownTypeCode { code: '<' });
    }

    #[test]
    fn test_class_errors() {
        assert_eq!(error_of(field_type("Ljava/lang/String")), Error::UnterminatedClassName);
        assert_eq!(error_of(field_type("L;")), Error::EmptyClassName);
    }

    #[test]
    fn test_missing_component() {
        assert_eq!(error_of(field_type("[")), Error::UnexpectedEnd);
        assert_eq!(error_of(field_type("")), Error::UnexpectedEnd);
    }

    #[test]
    fn test_error_offset() {
        let descriptor = "[[Q";
        match field_type(descriptor) {
            Err(nom::Err::Failure(e)) => assert_eq!(e.offset(descriptor), 2),
            res => panic!("Oops {:?}.", res),
        }
    }

    #[test]
    fn test_dimension_limit() {
        let descriptor = format!("{}I", "[".repeat(MAX_DIMENSIONS));
        match field_type(&descriptor) {
            Ok((rest, _)) => assert_eq!(rest, ""),
            res => panic!("Oops {:?}.", res),
        }
        let descriptor = format!("{}I", "[".repeat(MAX_DIMENSIONS + 1));
        assert_eq!(error_of(field_type(&descriptor)),
                   Error::TooManyDimensions { dimensions: MAX_DIMENSIONS + 1 });
    }

    #[test]
    fn test_parameters_end() {
        assert_eq!(parameters_end(")V"), Ok(("V", Some(()))));
        assert_eq!(parameters_end("I)V"), Ok(("I)V", None)));
    }
}
