//! Fixed-width tables of individuals.
//!
//! Used as the details of a failed check so the offending log can be
//! inspected by hand: one row per individual, index column first.

use crate::data::log::FitnessLog;

/// A plain right-aligned text table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    /// Render with two spaces between columns, no trailing newline
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_line(&self.headers));
        for row in &self.rows {
            lines.push(format_line(row));
        }
        lines.join("\n")
    }
}

/// Format a fitness value, keeping a decimal point on whole numbers
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Efficiency table sorted by connectivity, overall deviation, then edge
/// value, with a Yes/No `pareto` column from `mask`.
pub fn efficiency_table(log: &FitnessLog, mask: &[bool]) -> Table {
    let mut order: Vec<usize> = (0..log.individuals.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = &log.individuals[a].fitness;
        let fb = &log.individuals[b].fitness;
        fa.connectivity
            .total_cmp(&fb.connectivity)
            .then(fa.overall_deviation.total_cmp(&fb.overall_deviation))
            .then(fa.edge_value.total_cmp(&fb.edge_value))
    });

    let mut table = Table::new(&[
        "",
        "front",
        "connectivity_fitness",
        "overall_deviation_fitness",
        "edge_value_fitness",
        "pareto",
    ]);
    for i in order {
        let individual = &log.individuals[i];
        table.push_row(vec![
            individual.row.to_string(),
            individual.front.to_string(),
            format_value(individual.fitness.connectivity),
            format_value(individual.fitness.overall_deviation),
            format_value(individual.fitness.edge_value),
            if mask[i] { "Yes" } else { "No" }.to_string(),
        ]);
    }
    table
}

/// Table in log order comparing claimed and reference fronts; mismatched
/// rows are marked with `*`.
pub fn front_table(log: &FitnessLog, reference: &[usize]) -> Table {
    let mut table = Table::new(&[
        "",
        "front",
        "reference_front",
        "edge_value_fitness",
        "connectivity_fitness",
        "overall_deviation_fitness",
        "mismatch",
    ]);
    for (individual, &expected) in log.individuals.iter().zip(reference) {
        table.push_row(vec![
            individual.row.to_string(),
            individual.front.to_string(),
            expected.to_string(),
            format_value(individual.fitness.edge_value),
            format_value(individual.fitness.connectivity),
            format_value(individual.fitness.overall_deviation),
            if individual.front != expected { "*" } else { "" }.to_string(),
        ]);
    }
    table
}
