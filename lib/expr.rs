use core::fmt;

use crate::{
    context::{Name, Scope},
    value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Difference,
    Product,
    Quotient,
    Less,
    Equals,
    Or,
    And,
}

impl Operator {
    fn apply(self, left: Value, right: Value) -> Value {
        match self {
            Operator::Sum => Value::from_number(left.to_number() + right.to_number()),
            Operator::Difference => Value::from_number(left.to_number() - right.to_number()),
            Operator::Product => Value::from_number(left.to_number() * right.to_number()),
            Operator::Quotient => Value::from_number(left.to_number() / right.to_number()),
            Operator::Less => Value::from_bool(left.to_number() < right.to_number()),
            // raw text, no numeric coercion
            Operator::Equals => Value::from_bool(left == right),
            Operator::Or => Value::from_bool(left.is_truthy() || right.is_truthy()),
            Operator::And => Value::from_bool(left.is_truthy() && right.is_truthy()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Sum => "+",
            Operator::Difference => "-",
            Operator::Product => "*",
            Operator::Quotient => "/",
            Operator::Less => "<",
            Operator::Equals => "==",
            Operator::Or => "||",
            Operator::And => "&&",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Variable(Name),
    Binary {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn variable(name: Name) -> Self {
        Expr::Variable(name)
    }

    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn sum(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Sum, right)
    }

    pub fn difference(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Difference, right)
    }

    pub fn product(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Product, right)
    }

    pub fn quotient(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Quotient, right)
    }

    pub fn less(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Less, right)
    }

    pub fn equals(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Equals, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::Or, right)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(left, Operator::And, right)
    }

    /// Binary operators evaluate their left operand completely before the
    /// right one, and always evaluate both: `||` and `&&` do not
    /// short-circuit.
    pub fn eval<S: Scope + ?Sized>(&self, scope: &S) -> Value {
        match self {
            Expr::Literal(value) => value.clone(),
            Expr::Variable(name) => scope.get(name.as_str()),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = left.eval(scope);
                let right = right.eval(scope);
                operator.apply(left, right)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{:?}", value.as_str()),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::context::Context;

    fn lit(text: &str) -> Expr {
        Expr::literal(text)
    }

    fn var(name: &str) -> Expr {
        Expr::variable(Name::new(name).unwrap())
    }

    fn eval(expr: &Expr) -> String {
        expr.eval(&Context::new()).into_string()
    }

    // records every variable read, in order
    struct RecordingScope {
        values: HashMap<&'static str, &'static str>,
        reads: RefCell<Vec<String>>,
    }

    impl RecordingScope {
        fn new(values: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                values: values.into_iter().collect(),
                reads: RefCell::new(vec![]),
            }
        }

        fn reads(&self) -> Vec<String> {
            self.reads.borrow().clone()
        }
    }

    impl Scope for RecordingScope {
        fn get(&self, name: &str) -> Value {
            self.reads.borrow_mut().push(name.to_string());
            Value::from(self.values.get(name).copied().unwrap_or(""))
        }
    }

    #[test]
    fn literal_evaluates_to_copy() {
        let expr = lit("hello");
        assert_eq!(eval(&expr), "hello");
        assert_eq!(eval(&expr), "hello");
    }

    #[test]
    fn unset_variable_is_empty() {
        assert_eq!(eval(&var("x")), "");
    }

    #[test]
    fn variable_reads_context() {
        let mut ctxt = Context::new();
        ctxt.set(&Name::new("x").unwrap(), Value::from("abc")).unwrap();
        assert_eq!(var("x").eval(&ctxt).as_str(), "abc");
    }

    #[test]
    fn arithmetic() {
        let tests = vec![
            (Expr::sum(lit("3"), lit("4")), "7.000000"),
            (Expr::sum(lit("0.5"), lit("0.25")), "0.750000"),
            (Expr::difference(lit("3"), lit("4")), "-1.000000"),
            (Expr::product(lit("2.5"), lit("4")), "10.000000"),
            (Expr::quotient(lit("1"), lit("3")), "0.333333"),
            (Expr::quotient(lit("7"), lit("2")), "3.500000"),
            (Expr::sum(lit("abc"), lit("2")), "2.000000"),
            (Expr::sum(lit("12apples"), lit("")), "12.000000"),
            (Expr::product(var("unset"), lit("9")), "0.000000"),
            (
                Expr::sum(Expr::product(lit("2"), lit("3")), lit("1")),
                "7.000000",
            ),
        ];

        for (expr, expected) in tests {
            assert_eq!(eval(&expr), expected, "{}", expr);
        }
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(eval(&Expr::quotient(lit("1"), lit("0"))), "inf");
        assert_eq!(eval(&Expr::quotient(lit("-1"), lit("0"))), "-inf");
        assert!(eval(&Expr::quotient(lit("0"), lit("0"))).ends_with("nan"));
    }

    #[test]
    fn less() {
        let tests = vec![
            (Expr::less(lit("1"), lit("2")), "t"),
            (Expr::less(lit("2"), lit("1")), ""),
            (Expr::less(lit("2"), lit("2.000000")), ""),
            (Expr::less(lit("10"), lit("9")), ""),
            (Expr::less(lit(""), lit("1")), "t"),
            (Expr::less(lit("-1"), var("unset")), "t"),
        ];

        for (expr, expected) in tests {
            assert_eq!(eval(&expr), expected, "{}", expr);
        }
    }

    #[test]
    fn equals_compares_text() {
        let tests = vec![
            (Expr::equals(lit("3.000000"), lit("3.000000")), "t"),
            (Expr::equals(lit("3"), lit("3.000000")), ""),
            (Expr::equals(lit("abc"), lit("abc")), "t"),
            (Expr::equals(lit(""), var("unset")), "t"),
            (
                Expr::equals(Expr::sum(lit("1"), lit("2")), lit("3.000000")),
                "t",
            ),
        ];

        for (expr, expected) in tests {
            assert_eq!(eval(&expr), expected, "{}", expr);
        }
    }

    #[test]
    fn boolean_operators() {
        let tests = vec![
            (Expr::or(lit(""), lit("")), ""),
            (Expr::or(lit("t"), lit("")), "t"),
            (Expr::or(lit(""), lit("0")), "t"),
            (Expr::and(lit("t"), lit("0")), "t"),
            (Expr::and(lit("t"), lit("")), ""),
            (Expr::and(lit(""), lit("t")), ""),
        ];

        for (expr, expected) in tests {
            assert_eq!(eval(&expr), expected, "{}", expr);
        }
    }

    #[test]
    fn or_and_evaluate_both_operands() {
        let cases = vec![
            (Expr::or(var("yes"), var("no")), "t"),
            (Expr::or(var("no"), var("yes")), "t"),
            (Expr::and(var("no"), var("yes")), ""),
            (Expr::and(var("yes"), var("no")), ""),
        ];

        for (expr, expected) in cases {
            let scope = RecordingScope::new(vec![("yes", "t"), ("no", "")]);
            assert_eq!(expr.eval(&scope).as_str(), expected);
            let reads = scope.reads();
            assert_eq!(reads.len(), 2, "{}", expr);
            assert!(reads.contains(&"yes".to_string()));
            assert!(reads.contains(&"no".to_string()));
        }
    }

    #[test]
    fn operands_evaluate_left_to_right() {
        let scope = RecordingScope::new(vec![]);
        let expr = Expr::sum(
            Expr::less(var("a"), var("b")),
            Expr::equals(var("c"), var("d")),
        );
        expr.eval(&scope);
        assert_eq!(scope.reads(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn display() {
        let expr = Expr::or(Expr::less(var("i"), lit("3")), lit("t"));
        assert_eq!(expr.to_string(), r#"((i < "3") || "t")"#);
    }
}
