pub mod ast;
mod lexer;
mod parser;

pub use ast::DiceTerm;
pub use parser::{ModifierError, ParseError, ParseErrorKind};

/// Parses a flat dice expression such as `2d6+1d4+2` into its dice terms, in input order.
///
/// A bare integer sets the modifier of the dice term before it. An expression without
/// any dice group parses to an empty list.
///
/// # Examples
/// ```
/// # use dice_roll::parse;
/// let terms = parse("1d6+2d4+2").unwrap();
/// assert_eq!(terms.len(), 2);
/// assert_eq!(terms[1].modifier(), 2);
/// assert_eq!(terms[1].to_string(), "2d4+2");
/// ```
pub fn parse(s: &str) -> Result<Vec<DiceTerm>, ParseError> {
    parser::Parser::new(s).parse()
}
