//! # Parsing plain problem files
//!
//! The format is whitespace delimited. The file starts with the token `max` or `min`, directly
//! followed by the objective function coefficients on the rest of that line. Every following
//! non-empty line describes one constraint: its coefficients, a relation and the right-hand side.
//!
//! ```text
//! max 1 3 1
//! 2 4 1 <= 7
//! 3 -1 2 <= 3
//! ```
use num_bigint::BigInt;

use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::linear_program::problem::{Constraint, Problem};
use crate::io::error::{ImportError, InconsistencyError, ParseError};

/// Length of the `max` or `min` token that starts a problem.
const OBJECTIVE_SENSE_LENGTH: usize = 3;

/// Parse a complete problem.
///
/// # Arguments
///
/// * `program`: Contents of a problem file.
///
/// # Errors
///
/// Parse errors for malformed tokens, inconsistency errors if the rows don't describe a linear
/// program.
pub fn parse(program: &str) -> Result<Problem, ImportError> {
    let sense = program.chars().take(OBJECTIVE_SENSE_LENGTH).collect::<String>();
    let objective = sense.parse::<Objective>().map_err(|error| error.at_line(1))?;

    // The rest of the first line holds the objective function
    let mut lines = into_lines(&program[sense.len()..]);

    let (line_number, line) = lines.next()
        .ok_or_else(|| InconsistencyError::new("the problem has no objective function"))?;
    let cost = parse_objective_row(line).map_err(|error| error.at_line(line_number))?;

    let constraints = lines
        .map(|(line_number, line)| parse_constraint_row(line, line_number))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem::new(objective, cost, constraints)?)
}

/// Split text into numbered, non-empty lines.
///
/// Numbering starts at 1.
fn into_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Convert all tokens to integers.
///
/// # Errors
///
/// A `ParseError::NotDigit` for the first token that isn't an integer.
pub fn to_int<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<BigInt>, ParseError> {
    tokens.iter()
        .map(|token| {
            let token: &str = token.as_ref();
            token.parse::<BigInt>().map_err(|_| ParseError::NotDigit(token.to_string()))
        })
        .collect()
}

fn parse_objective_row(line: &str) -> Result<Vec<BigInt>, ParseError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if let Some(token) = tokens.iter().find(|token| ConstraintRelation::is_relation_token(token)) {
        // Read as a number, this gives the clearest message
        return Err(ParseError::NotDigit(token.to_string()));
    }

    to_int(&tokens)
}

/// Parse a line holding coefficients, a relation and a right-hand side, in that order.
fn parse_constraint_row(line: &str, line_number: usize) -> Result<Constraint, ImportError> {
    let mut tokens = line.split_whitespace().collect::<Vec<_>>();

    let relations = tokens.iter().enumerate()
        .filter(|(_, token)| ConstraintRelation::is_relation_token(token))
        .map(|(index, token)| (index, *token))
        .collect::<Vec<_>>();
    let (index, relation) = match relations.as_slice() {
        [(index, token)] => {
            let relation = token.parse::<ConstraintRelation>()
                .map_err(|error| error.at_line(line_number))?;
            (*index, relation)
        },
        [] => return Err(InconsistencyError::new(format!(
            "line {line_number}: constraint without relation",
        )).into()),
        _ => return Err(InconsistencyError::new(format!(
            "line {line_number}: constraint with more than one relation",
        )).into()),
    };
    if index + 2 != tokens.len() {
        return Err(InconsistencyError::new(format!(
            "line {line_number}: the relation should be followed by exactly one right-hand side value",
        )).into());
    }
    tokens.remove(index);

    let mut values = to_int(&tokens).map_err(|error| error.at_line(line_number))?;
    let right_hand_side = values.pop()
        .ok_or_else(|| InconsistencyError::new(format!("line {line_number}: no right-hand side")))?;

    Ok(Constraint::new(values, relation, right_hand_side))
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;

    use crate::data::linear_program::elements::{ConstraintRelation, Objective};
    use crate::io::error::{ImportError, ParseError};
    use crate::io::parse::{parse, to_int};

    #[test]
    fn to_int_digits() {
        let expected = [1, 0, 12345, -1234, 98172].into_iter().map(BigInt::from).collect::<Vec<_>>();
        assert_eq!(to_int(&["1", "0", "12345", "-1234", "98172"]), Ok(expected));
    }

    #[test]
    fn to_int_not_digits() {
        assert_eq!(to_int(&["123", "432", "a"]), Err(ParseError::NotDigit("a".to_string())));
        assert_eq!(to_int(&["0zas", "-12", "flac"]), Err(ParseError::NotDigit("0zas".to_string())));
    }

    #[test]
    fn parse_problem() {
        let problem = parse("min 2 3\n\n1 1 >= 4\n1 3 >= -6\n").unwrap();

        assert_eq!(problem.objective(), Objective::Minimize);
        assert_eq!(problem.cost(), &[BigInt::from(2), BigInt::from(3)]);
        assert_eq!(problem.relations(), vec![ConstraintRelation::Greater; 2]);
        assert_eq!(problem.constraints()[1].right_hand_side, BigInt::from(-6));
    }

    #[test]
    fn objective_sense() {
        match parse("mux 1 2\n1 1 <= 3") {
            Err(ImportError::Parse(error)) => {
                assert_eq!(error.root(), &ParseError::ObjectiveSense("mux".to_string()));
            },
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unsupported_constraint() {
        match parse("max 1 2\n1 1 = 3") {
            Err(ImportError::Parse(ParseError::AtLine { line, source })) => {
                assert_eq!(line, 2);
                assert_eq!(*source, ParseError::UnsupportedConstraint("=".to_string()));
            },
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn not_digit() {
        match parse("max 1 2\n1 b <= 3") {
            Err(ImportError::Parse(error)) => {
                assert_eq!(error.root(), &ParseError::NotDigit("b".to_string()));
            },
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn inconsistent() {
        assert!(matches!(parse("max 1 2\n1 1 3"), Err(ImportError::LinearProgram(_))));
        assert!(matches!(parse("max 1 2\n1 <= 1 3"), Err(ImportError::LinearProgram(_))));
        assert!(matches!(parse("max 1 2\n1 1 1 <= 3"), Err(ImportError::LinearProgram(_))));
        assert!(matches!(parse("max"), Err(ImportError::LinearProgram(_))));
    }
}
