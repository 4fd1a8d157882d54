//! A small prefix-notation expression language used by the console.
//!
//! ```text
//! expression := literal | identifier | function
//! function   := "(" identifier ")"
//!             | "(" identifier arguments ")"
//! arguments  := expression (whitespace expression)*
//! literal    := string | double | integer
//! ```
//!
//! Functions nest, so `function` and `arguments` refer back to
//! `expression` through [`lazy`] parsers.

use std::{fmt, sync::Arc};

use clap::ValueEnum;
use log::debug;
use serde::Deserialize;

use braid::{BoxedParser, Parser, combinator::Pattern, lazy, pattern};

/// The grammar rule the console parses each line with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// A single function application, e.g. `(add 1 2)`.
    #[default]
    Function,
    /// Any expression, including bare literals and identifiers.
    Expression,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Function => write!(f, "function"),
            Rule::Expression => write!(f, "expression"),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A double-quoted string, quotes removed.
    String(String),
    Integer(i64),
    Double(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write!(f, "String(\"{value}\")"),
            Literal::Integer(value) => write!(f, "Integer({value})"),
            Literal::Double(value) => write!(f, "Double({value})"),
        }
    }
}

/// A name, e.g. a function name or a bare variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the identifier's text.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self.name)
    }
}

/// The arguments of a function application, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentList {
    arguments: Vec<Expression>,
}

impl ArgumentList {
    /// Create an argument list.
    pub fn new(arguments: Vec<Expression>) -> Self {
        Self { arguments }
    }

    /// Get the arguments in order.
    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Args(")?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}

/// A function application such as `(max 1 (min 2 3))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    identifier: Identifier,
    arguments: ArgumentList,
}

impl Function {
    /// Create a function application.
    pub fn new(identifier: Identifier, arguments: ArgumentList) -> Self {
        Self {
            identifier,
            arguments,
        }
    }

    /// Get the function name.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Get the arguments.
    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({}, {})", self.identifier, self.arguments)
    }
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Function(Function),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => fmt::Display::fmt(literal, f),
            Expression::Identifier(identifier) => fmt::Display::fmt(identifier, f),
            Expression::Function(function) => fmt::Display::fmt(function, f),
        }
    }
}

/// Compiled terminals shared by every rule.
struct Tokens {
    literal: Arc<BoxedParser<Literal>>,
    identifier: Arc<Pattern>,
    open: Arc<Pattern>,
    close: Arc<Pattern>,
    whitespace: Arc<Pattern>,
}

impl Tokens {
    fn compile() -> braid::Result<Self> {
        let string = pattern(r#""([^"]+)""#)?
            .map(|quoted| Literal::String(quoted.trim_matches('"').to_string()));
        let double = pattern(r"-?(((\.\d+|\d+\.\d*)([eE]-?\d+)?)|Infinity|NaN)")?
            .try_map(|text| text.parse::<f64>().map(Literal::Double));
        let integer =
            pattern(r"\d+")?.try_map(|digits| digits.parse::<i64>().map(Literal::Integer));

        Ok(Self {
            literal: Arc::new(string.or(double).or(integer).boxed()),
            identifier: Arc::new(pattern(r"[a-zA-Z_][a-zA-Z0-9_]*")?),
            open: Arc::new(pattern(r"\(\s*")?),
            close: Arc::new(pattern(r"\s*\)")?),
            whitespace: Arc::new(pattern(r"\s*")?),
        })
    }
}

fn expression(tokens: &Arc<Tokens>) -> BoxedParser<Expression> {
    let literal = Arc::clone(&tokens.literal).map(Expression::Literal);
    let identifier = Arc::clone(&tokens.identifier)
        .map(|name| Expression::Identifier(Identifier::new(name)));

    literal
        .or(identifier)
        .or(function(tokens).map(Expression::Function))
        .boxed()
}

fn function(tokens: &Arc<Tokens>) -> BoxedParser<Function> {
    let nullary = Arc::clone(&tokens.open)
        .then(Arc::clone(&tokens.identifier))
        .then(Arc::clone(&tokens.close))
        .map(|seq| {
            let (_, name, _) = seq.into_tuple3();
            Function::new(Identifier::new(name), ArgumentList::default())
        });

    let deferred = Arc::clone(tokens);
    let polyadic = lazy(move || {
        Arc::clone(&deferred.open)
            .then(Arc::clone(&deferred.identifier))
            .then(Arc::clone(&deferred.whitespace))
            .then(arguments(&deferred))
            .then(Arc::clone(&deferred.close))
            .map(|seq| {
                let (_, name, _, arguments, _) = seq.into_tuple5();
                Function::new(Identifier::new(name), arguments)
            })
    });

    nullary.or(polyadic).boxed()
}

fn arguments(tokens: &Arc<Tokens>) -> BoxedParser<ArgumentList> {
    let deferred = Arc::clone(tokens);

    lazy(move || expression(&deferred))
        .repeat1()
        .separated_by(Arc::clone(&tokens.whitespace))
        .map(ArgumentList::new)
        .boxed()
}

/// Entry points into the expression language.
///
/// Every entry point is anchored at the end of the input.
pub struct Grammar {
    tokens: Arc<Tokens>,
}

impl Grammar {
    /// Compile the grammar's terminals.
    ///
    /// # Errors
    ///
    /// Returns [`braid::Error`] if a terminal pattern fails to compile.
    pub fn new() -> braid::Result<Self> {
        let tokens = Tokens::compile()?;
        debug!("Compiled expression grammar");
        Ok(Self {
            tokens: Arc::new(tokens),
        })
    }

    /// Get the parser for a single function application.
    pub fn function(&self) -> BoxedParser<Function> {
        function(&self.tokens).end().boxed()
    }

    /// Get the parser for any expression.
    pub fn expression(&self) -> BoxedParser<Expression> {
        expression(&self.tokens).end().boxed()
    }

    /// Get the entry point for `rule`, producing an [`Expression`] either way.
    pub fn parser(&self, rule: Rule) -> BoxedParser<Expression> {
        match rule {
            Rule::Function => function(&self.tokens)
                .map(Expression::Function)
                .end()
                .boxed(),
            Rule::Expression => self.expression(),
        }
    }
}
