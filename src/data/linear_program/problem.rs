//! # Linear programs as read from a file
//!
//! A `Problem` is the typed form of the input: an objective direction, cost coefficients and a
//! list of inequality constraints. It is validated on construction and immutable afterwards.
use num_bigint::BigInt;

use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::io::error::InconsistencyError;

/// A single inequality `coefficients · x (<= | >=) right_hand_side`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// One coefficient per structural variable.
    pub coefficients: Vec<BigInt>,
    /// Direction of the inequality.
    pub relation: ConstraintRelation,
    /// Constant on the right-hand side.
    pub right_hand_side: BigInt,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(
        coefficients: Vec<BigInt>,
        relation: ConstraintRelation,
        right_hand_side: BigInt,
    ) -> Self {
        Self { coefficients, relation, right_hand_side }
    }
}

/// Linear program `max / min c · x` subject to inequality constraints and `x >= 0`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem {
    objective: Objective,
    cost: Vec<BigInt>,
    constraints: Vec<Constraint>,
}

impl Problem {
    /// Create a new problem.
    ///
    /// # Errors
    ///
    /// If there are no variables, or when a constraint has a different number of coefficients than
    /// the objective function.
    pub fn new(
        objective: Objective,
        cost: Vec<BigInt>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, InconsistencyError> {
        if cost.is_empty() {
            return Err(InconsistencyError::new("the objective function has no coefficients"));
        }

        if let Some((index, constraint)) = constraints.iter().enumerate()
            .find(|(_, constraint)| constraint.coefficients.len() != cost.len()) {
            return Err(InconsistencyError::new(format!(
                "constraint {} has {} coefficients, but the objective function has {}",
                index + 1, constraint.coefficients.len(), cost.len(),
            )));
        }

        Ok(Self { objective, cost, constraints })
    }

    /// Whether to maximize or minimize.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective function coefficients, as read.
    pub fn cost(&self) -> &[BigInt] {
        &self.cost
    }

    /// All constraints, in input order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of structural variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// The relation of every constraint, in order.
    pub fn relations(&self) -> Vec<ConstraintRelation> {
        self.constraints.iter().map(|constraint| constraint.relation).collect()
    }
}
