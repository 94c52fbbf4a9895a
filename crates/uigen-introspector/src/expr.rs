//! Type expression parser.
//!
//! Schema documents spell field types the way a data class would annotate
//! them:
//!
//! ```text
//! expr  := term ('|' term)*
//! term  := IDENT ( '[' expr (',' expr)* ']' )?
//! IDENT := name ('.' name)*
//! ```
//!
//! Module prefixes are ignored (`datetime.datetime`, `typing.Optional`).
//! An identifier that names a declared enum becomes [`TypeDesc::Enum`];
//! any identifier that is neither builtin nor an enum is a class reference.
//!
//! Only `Optional`, `Union`, `List` and `Sequence` have their arguments
//! interpreted. Any other generic (`Dict[str, int]`, `Tuple[int, ...]`,
//! `Literal['a', 'b']`) is kept as an opaque [`TypeDesc::Class`] of its bare
//! name; its arguments only have to be balanced and may contain literals.
//!
//! # Examples
//!
//! ```
//! use uigen_introspector::{ScalarType, TypeDesc, TypeScope, parse_type_expr};
//!
//! let scope = TypeScope::new();
//! let ty = parse_type_expr("Optional[datetime.datetime]", &scope).unwrap();
//! assert_eq!(ty, TypeDesc::optional(TypeDesc::Scalar(ScalarType::DateTime)));
//!
//! let ty = parse_type_expr("str | int | None", &scope).unwrap();
//! assert_eq!(ty.to_string(), "str | int | None");
//! ```

use crate::types::{EnumDesc, ScalarType, TypeDesc};
use std::collections::BTreeMap;
use uigen_core::{Error, Result};

/// Enum declarations visible while parsing type expressions.
#[derive(Debug, Clone, Default)]
pub struct TypeScope {
    enums: BTreeMap<String, EnumDesc>,
}

impl TypeScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an enum.
    pub fn declare_enum(&mut self, desc: EnumDesc) {
        self.enums.insert(desc.name.clone(), desc);
    }

    /// Declares an enum, builder style.
    #[must_use]
    pub fn with_enum(mut self, desc: EnumDesc) -> Self {
        self.declare_enum(desc);
        self
    }

    /// Looks up a declared enum.
    #[must_use]
    pub fn enum_named(&self, name: &str) -> Option<&EnumDesc> {
        self.enums.get(name)
    }
}

/// Parses a type expression.
///
/// # Errors
///
/// Returns [`Error::TypeExpression`] if the expression is malformed or a
/// generic receives the wrong number of arguments.
pub fn parse_type_expr(expression: &str, scope: &TypeScope) -> Result<TypeDesc> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        expression,
        tokens,
        pos: 0,
        scope,
    };
    let ty = parser.expr()?;
    match parser.peek() {
        None => Ok(ty),
        Some(tok) => Err(parser.error(format!("unexpected {tok} after type"))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    /// String, number or `...`; only valid inside opaque generic arguments
    Literal(String),
    Open,
    Close,
    Comma,
    Pipe,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "'{name}'"),
            Self::Literal(text) => write!(f, "literal {text}"),
            Self::Open => f.write_str("'['"),
            Self::Close => f.write_str("']'"),
            Self::Comma => f.write_str("','"),
            Self::Pipe => f.write_str("'|'"),
        }
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expression.char_indices().peekable();

    while let Some(&(_, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '[' | ']' | ',' | '|' => {
                chars.next();
                tokens.push(match c {
                    '[' => Token::Open,
                    ']' => Token::Close,
                    ',' => Token::Comma,
                    _ => Token::Pipe,
                });
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '.' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if ident.ends_with('.') || ident.contains("..") {
                    return Err(type_error(expression, format!("malformed name '{ident}'")));
                }
                tokens.push(Token::Ident(ident));
            }
            quote @ ('\'' | '"') => {
                chars.next();
                let mut text = String::from(quote);
                loop {
                    match chars.next() {
                        Some((_, '\\')) => {
                            text.push('\\');
                            if let Some((_, escaped)) = chars.next() {
                                text.push(escaped);
                            }
                        }
                        Some((_, c)) if c == quote => break,
                        Some((_, c)) => text.push(c),
                        None => {
                            return Err(type_error(expression, format!("unterminated string {text}")));
                        }
                    }
                }
                text.push(quote);
                tokens.push(Token::Literal(text));
            }
            c if c.is_ascii_digit() || c == '-' || c == '.' => {
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' {
                        text.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let numeric = text.trim_start_matches('-').starts_with(|d: char| d.is_ascii_digit());
                if text != "..." && !numeric {
                    return Err(type_error(expression, format!("malformed literal '{text}'")));
                }
                tokens.push(Token::Literal(text));
            }
            other => {
                return Err(type_error(
                    expression,
                    format!("unexpected character '{other}'"),
                ));
            }
        }
    }

    if tokens.is_empty() {
        return Err(type_error(expression, "empty type expression"));
    }
    Ok(tokens)
}

fn type_error(expression: &str, reason: impl Into<String>) -> Error {
    Error::TypeExpression {
        expression: expression.to_string(),
        reason: reason.into(),
    }
}

struct Parser<'a> {
    expression: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    scope: &'a TypeScope,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        tok
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        type_error(self.expression, reason)
    }

    fn expect(&mut self, want: &Token) -> Result<()> {
        match self.next() {
            Some(tok) if &tok == want => Ok(()),
            Some(tok) => Err(self.error(format!("expected {want}, found {tok}"))),
            None => Err(self.error(format!("expected {want}, found end of input"))),
        }
    }

    fn expr(&mut self) -> Result<TypeDesc> {
        let mut members = vec![self.term()?];
        while self.peek() == Some(&Token::Pipe) {
            self.pos += 1;
            members.push(self.term()?);
        }
        if members.len() == 1 {
            return Ok(members.remove(0));
        }
        TypeDesc::union(members)
    }

    fn term(&mut self) -> Result<TypeDesc> {
        let ident = match self.next() {
            Some(Token::Ident(ident)) => ident,
            Some(tok) => return Err(self.error(format!("expected a type name, found {tok}"))),
            None => return Err(self.error("expected a type name, found end of input")),
        };
        let name = ident.rsplit('.').next().unwrap_or(&ident).to_string();

        if self.peek() != Some(&Token::Open) {
            return Ok(self.simple(&name));
        }
        self.pos += 1;

        if !matches!(name.as_str(), "Optional" | "Union" | "List" | "list" | "Sequence") {
            return match self.simple(&name) {
                TypeDesc::Class(_) => {
                    self.skip_args(&name)?;
                    Ok(TypeDesc::Class(name))
                }
                _ => Err(self.error(format!("'{name}' does not take type arguments"))),
            };
        }

        let mut args = vec![self.expr()?];
        while self.peek() == Some(&Token::Comma) {
            self.pos += 1;
            args.push(self.expr()?);
        }
        self.expect(&Token::Close)?;
        self.generic(&name, args)
    }

    /// Consumes the arguments of an opaque generic up to its closing `]`.
    fn skip_args(&mut self, name: &str) -> Result<()> {
        if self.peek() == Some(&Token::Close) {
            return Err(self.error(format!("'{name}[]' has no type arguments")));
        }
        let mut depth = 1usize;
        while depth > 0 {
            match self.next() {
                Some(Token::Open) => depth += 1,
                Some(Token::Close) => depth -= 1,
                Some(_) => {}
                None => return Err(self.error("expected ']', found end of input")),
            }
        }
        Ok(())
    }

    fn generic(&self, name: &str, mut args: Vec<TypeDesc>) -> Result<TypeDesc> {
        match name {
            "Optional" => {
                if args.len() != 1 {
                    return Err(self.error(format!(
                        "Optional takes 1 argument, got {}",
                        args.len()
                    )));
                }
                Ok(TypeDesc::optional(args.remove(0)))
            }
            "Union" => TypeDesc::union(args),
            "List" | "list" | "Sequence" => {
                if args.len() != 1 {
                    return Err(self.error(format!("{name} takes 1 argument, got {}", args.len())));
                }
                Ok(TypeDesc::list(args.remove(0)))
            }
            other => Err(self.error(format!("'{other}' is not a known generic"))),
        }
    }

    fn simple(&self, name: &str) -> TypeDesc {
        match name {
            "None" | "NoneType" => TypeDesc::None,
            "Any" => TypeDesc::Any,
            "str" => TypeDesc::Scalar(ScalarType::Str),
            "int" => TypeDesc::Scalar(ScalarType::Int),
            "float" => TypeDesc::Scalar(ScalarType::Float),
            "bool" => TypeDesc::Scalar(ScalarType::Bool),
            "Decimal" => TypeDesc::Scalar(ScalarType::Decimal),
            "datetime" => TypeDesc::Scalar(ScalarType::DateTime),
            "date" => TypeDesc::Scalar(ScalarType::Date),
            "timedelta" => TypeDesc::Scalar(ScalarType::TimeDelta),
            "List" | "list" => TypeDesc::list(TypeDesc::Any),
            other => self
                .scope
                .enum_named(other)
                .map_or_else(|| TypeDesc::Class(other.to_string()), |e| TypeDesc::Enum(e.clone())),
        }
    }
}
