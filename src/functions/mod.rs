use crate::ast::Operator;

/// A callable keyword and the number of parameters it takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionSpec {
    pub keyword: &'static str,
    pub arity: usize,
    pub operator: Operator,
}

/// The closed set of functions a formula may call. Lookups are case-sensitive.
pub static FUNCTIONS: [FunctionSpec; 4] = [
    FunctionSpec {
        keyword: "add",
        arity: 2,
        operator: Operator::Add,
    },
    FunctionSpec {
        keyword: "subtract",
        arity: 2,
        operator: Operator::Subtract,
    },
    FunctionSpec {
        keyword: "multiply",
        arity: 2,
        operator: Operator::Multiply,
    },
    FunctionSpec {
        keyword: "divide",
        arity: 2,
        operator: Operator::Divide,
    },
];

pub fn lookup(keyword: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|spec| spec.keyword == keyword)
}
