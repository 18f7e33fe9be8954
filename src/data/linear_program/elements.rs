//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Not;
use std::str::FromStr;

use enum_map::Enum;
use num_bigint::BigInt;
use num_traits::One;

use crate::io::error::ParseError;

/// Direction of optimization, read from the first token of a problem file.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl FromStr for Objective {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "max" => Ok(Objective::Maximize),
            "min" => Ok(Objective::Minimize),
            other => Err(ParseError::ObjectiveSense(other.to_string())),
        }
    }
}

/// The relation between the left- and right-hand side of a constraint.
///
/// Only inequalities are supported.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintRelation {
    /// `<=`, standardized with a positive slack.
    Less,
    /// `>=`, standardized with a negative slack (a surplus variable).
    Greater,
}

impl ConstraintRelation {
    /// Characters that relation tokens are made of.
    const TOKEN_CHARACTERS: [char; 3] = ['<', '>', '='];

    /// Whether a token looks like a relation, supported or not.
    ///
    /// Used by the reader to tell relation tokens apart from (possibly malformed) numbers.
    pub fn is_relation_token(token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| Self::TOKEN_CHARACTERS.contains(&c))
    }

    /// Coefficient of the slack variable that turns this inequality into an equality.
    #[must_use]
    pub fn slack_coefficient(self) -> BigInt {
        match self {
            ConstraintRelation::Less => BigInt::one(),
            ConstraintRelation::Greater => -BigInt::one(),
        }
    }
}

/// Direction after multiplying both sides by `-1`.
impl Not for ConstraintRelation {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintRelation::Less => ConstraintRelation::Greater,
            ConstraintRelation::Greater => ConstraintRelation::Less,
        }
    }
}

impl FromStr for ConstraintRelation {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "<=" => Ok(ConstraintRelation::Less),
            ">=" => Ok(ConstraintRelation::Greater),
            other => Err(ParseError::UnsupportedConstraint(other.to_string())),
        }
    }
}

impl Display for ConstraintRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            ConstraintRelation::Less => "<=",
            ConstraintRelation::Greater => ">=",
        })
    }
}

/// What a column of the tableau stands for.
///
/// Columns are added while the algorithm runs; every column keeps the role it was created with.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnRole {
    /// Variable of the original problem.
    Structural,
    /// Slack or surplus variable added during standardization.
    Slack,
    /// Variable that only exists to find a first feasible basis.
    Artificial,
    /// Slack of a cut row inserted by the all-integer variant.
    Cut,
    /// The `z` column tracking the scale of the objective function value.
    ObjectiveValue,
    /// The `b` column.
    RightHandSide,
}

impl ColumnRole {
    /// Bookkeeping columns trail the tableau and are never selected as pivot column.
    pub fn is_bookkeeping(self) -> bool {
        matches!(self, ColumnRole::ObjectiveValue | ColumnRole::RightHandSide)
    }
}
