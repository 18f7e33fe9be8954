//! # Snapshots of the tableau
//!
//! A `Snapshot` is a read-only view of the tableau at one moment of the algorithm, together with
//! the cell about to be pivoted on. Its `Display` implementation renders a bordered grid.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
use crate::data::linear_program::elements::ColumnRole;

/// The tableau as it is shown to an observer.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a, K> {
    tableau: &'a Tableau<K>,
    pivot: Option<Pivot>,
    pseudo_pivot: Option<Pivot>,
    iteration: usize,
    phase: Phase,
}

impl<'a, K: Kind> Snapshot<'a, K> {
    /// View a tableau without any pivot information.
    pub fn new(tableau: &'a Tableau<K>) -> Self {
        Self { tableau, pivot: None, pseudo_pivot: None, iteration: 0, phase: Phase::Two }
    }

    /// Mark the cell that will be pivoted on, and the cell that was selected before a cut
    /// replaced it.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Pivot, pseudo_pivot: Option<Pivot>) -> Self {
        self.pivot = Some(pivot);
        self.pseudo_pivot = pseudo_pivot;
        self
    }

    /// Set the moment this snapshot is taken.
    ///
    /// # Arguments
    ///
    /// * `iteration`: Number of pivots performed before.
    /// * `phase`: Phase of the two phase method.
    #[must_use]
    pub fn at(mut self, iteration: usize, phase: Phase) -> Self {
        self.iteration = iteration;
        self.phase = phase;
        self
    }

    /// The viewed tableau.
    pub fn tableau(&self) -> &'a Tableau<K> {
        self.tableau
    }

    /// Cell about to be pivoted on, if any.
    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }

    /// Cell originally selected, if a cut was inserted to pivot on instead.
    pub fn pseudo_pivot(&self) -> Option<Pivot> {
        self.pseudo_pivot
    }

    /// Number of pivots performed before this snapshot was taken.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Phase of the algorithm.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of artificial columns in the tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.tableau.nr_artificial_variables()
    }

    fn headers(&self) -> Vec<String> {
        let mut nr_artificial = 0;
        self.tableau.roles().iter().enumerate()
            .map(|(j, role)| match role {
                ColumnRole::Artificial => {
                    nr_artificial += 1;
                    format!("y{}", nr_artificial - 1)
                },
                ColumnRole::ObjectiveValue => "z".to_string(),
                ColumnRole::RightHandSide => "b".to_string(),
                _ => format!("x{}", j + 1 - nr_artificial),
            })
            .collect()
    }

    fn cell(&self, i: usize, j: usize) -> String {
        let value = self.tableau.get(i, j);
        let here = Some(Pivot { row: i, column: j });
        if self.pivot == here {
            let (open, close) = K::PIVOT_MARKERS;
            format!("{open}{value}{close}")
        } else if self.pseudo_pivot == here {
            format!("[{value}]")
        } else {
            value.to_string()
        }
    }
}

impl<K: Kind> Display for Snapshot<'_, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        if self.iteration != 0 {
            match self.phase {
                Phase::One => writeln!(f, "Tableau {} (phase 1)", self.iteration)?,
                Phase::Two => writeln!(f, "Tableau {}", self.iteration)?,
            }
        }

        let headers = self.headers();
        let cells = (0..self.tableau.nr_rows())
            .map(|i| (0..self.tableau.nr_columns()).map(|j| self.cell(i, j)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let widths = headers.iter().enumerate()
            .map(|(j, header)| cells.iter().map(|row| row[j].len()).chain([header.len()]).max().unwrap_or(0))
            .collect::<Vec<_>>();

        let separator = format!("+{}+", widths.iter().map(|&width| "-".repeat(width + 2)).join("+"));
        let line = |texts: &[String]| format!(
            "|{}|",
            texts.iter().zip(&widths).map(|(text, &width)| format!(" {text:>width$} ")).join("|"),
        );

        writeln!(f, "{separator}")?;
        writeln!(f, "{}", line(&headers))?;
        writeln!(f, "{separator}")?;
        for (i, row) in cells.iter().enumerate() {
            writeln!(f, "{}", line(row))?;
            // Objective row apart from the constraints
            if i == 0 && cells.len() > 1 {
                writeln!(f, "{separator}")?;
            }
        }
        write!(f, "{separator}")
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::Phase;
    use crate::algorithm::two_phase::tableau::kind::all_integer::AllInteger;
    use crate::algorithm::two_phase::tableau::kind::continuous::Continuous;
    use crate::algorithm::two_phase::tableau::snapshot::Snapshot;
    use crate::algorithm::two_phase::tableau::{Pivot, Tableau};
    use crate::tests::rows;

    #[test]
    fn continuous() {
        let tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[1, 3, 0, -1, 0],
            &[2, 4, 1, 0, 7],
        ]), 2);
        let snapshot = Snapshot::new(&tableau).with_pivot(Pivot { row: 1, column: 1 }, None);

        assert_eq!(snapshot.to_string(), "\
+----+-----+----+----+---+
| x1 |  x2 | x3 |  z | b |
+----+-----+----+----+---+
|  1 |   3 |  0 | -1 | 0 |
+----+-----+----+----+---+
|  2 | [4] |  1 |  0 | 7 |
+----+-----+----+----+---+");
    }

    #[test]
    fn all_integer_with_cut() {
        let tableau = Tableau::<AllInteger>::from_rows(rows(&[
            &[1, 0, 0, 0],
            &[2, 6, 0, 5],
            &[1, 3, 1, 2],
        ]), 1);
        let snapshot = Snapshot::new(&tableau)
            .with_pivot(Pivot { row: 2, column: 0 }, Some(Pivot { row: 1, column: 0 }))
            .at(4, Phase::Two);

        assert_eq!(snapshot.to_string(), "\
Tableau 4
+-----+----+----+---+
|  x1 | x2 | x3 | b |
+-----+----+----+---+
|   1 |  0 |  0 | 0 |
+-----+----+----+---+
| [2] |  6 |  0 | 5 |
| (1) |  3 |  1 | 2 |
+-----+----+----+---+");
    }

    #[test]
    fn artificial_headers() {
        let mut tableau = Tableau::<Continuous>::from_rows(rows(&[
            &[1, 0, -1, 0],
            &[1, -1, 0, 3],
        ]), 1);
        tableau.insert_column(crate::data::linear_program::elements::ColumnRole::Artificial, Some((1, 1.into())));
        let snapshot = Snapshot::new(&tableau).at(2, Phase::One);

        let text = snapshot.to_string();
        assert!(text.starts_with("Tableau 2 (phase 1)\n"));
        assert!(text.contains("| x1 | x2 | y0 |  z | b |"));
        assert_eq!(snapshot.nr_artificial_variables(), 1);
    }
}
