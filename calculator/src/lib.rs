//! Four-function arithmetic on `f64`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("`{0}` is not a valid operator; expected one of + - * /")]
    UnknownOperator(String),

    #[error("`{0}` is not a number")]
    InvalidNumber(String),

    #[error("expected `<number> <operator> <number>`")]
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        })
    }
}

pub fn calculate(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Div => Ok(a / b),
    }
}

/// A binary expression such as `12 + 5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

impl Expression {
    /// Parses exactly three whitespace-separated tokens.
    pub fn parse(input: &str) -> Result<Self, CalcError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let [lhs, op, rhs] = tokens.as_slice() else {
            return Err(CalcError::Malformed);
        };
        Self::from_parts(lhs, op, rhs)
    }

    pub fn from_parts(lhs: &str, op: &str, rhs: &str) -> Result<Self, CalcError> {
        Ok(Self {
            lhs: parse_number(lhs)?,
            op: op.parse()?,
            rhs: parse_number(rhs)?,
        })
    }

    pub fn evaluate(&self) -> Result<f64, CalcError> {
        calculate(self.lhs, self.rhs, self.op)
    }
}

fn parse_number(token: &str) -> Result<f64, CalcError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber(token.to_string()))
}
