//! Mixed-integer formulation of the landing problem.
//!
//! `MilpModel` is a small backend-neutral vocabulary: variables with kinds
//! and bounds, linear constraints, and a linear objective with a direction.
//! [`FormulationBuilder`] translates an instance and an objective variant
//! into such a model; the `milp` module hands it to an actual solver
//! backend. Keeping the model neutral lets the formulation be inspected and
//! tested without any solver present.
//!
//! # Reference
//! Beasley et al. (2000), "Scheduling Aircraft Landings — The Static Case";
//! Williams (2013), "Model Building in Mathematical Programming" (big-M
//! disjunctions)

mod builder;

pub use builder::{Formulation, FormulationBuilder};

/// Index of a decision variable within a [`MilpModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// Variable domain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Continuous,
    Integer,
    Binary,
}

/// A decision variable: kind plus inclusive bounds.
///
/// `upper` may be `f64::INFINITY` for an unbounded-above variable; binary
/// variables ignore their bounds.
#[derive(Debug, Clone)]
pub struct VarDef {
    pub name: String,
    pub kind: VarKind,
    pub lower: f64,
    pub upper: f64,
}

/// A linear expression: Σ coefficient·variable + constant.
#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    pub terms: Vec<(VarId, f64)>,
    pub constant: f64,
}

impl LinearExpr {
    /// The zero expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coefficient · var` and returns self.
    pub fn term(mut self, var: VarId, coefficient: f64) -> Self {
        self.terms.push((var, coefficient));
        self
    }

    /// Evaluates the expression against a dense value vector.
    pub fn value_in(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coefficient)| coefficient * values[var.0])
            .sum::<f64>()
            + self.constant
    }
}

/// Constraint direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

/// A linear constraint `expr ⋈ rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub expr: LinearExpr,
    pub comparison: Comparison,
    pub rhs: f64,
}

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

/// A complete mixed-integer linear model.
#[derive(Debug, Clone)]
pub struct MilpModel {
    vars: Vec<VarDef>,
    constraints: Vec<LinearConstraint>,
    objective: LinearExpr,
    sense: ObjectiveSense,
}

impl MilpModel {
    /// An empty minimization model.
    pub fn new() -> Self {
        Self {
            vars: Vec::new(),
            constraints: Vec::new(),
            objective: LinearExpr::new(),
            sense: ObjectiveSense::Minimize,
        }
    }

    /// Adds a variable and returns its id.
    pub fn add_var(
        &mut self,
        name: impl Into<String>,
        kind: VarKind,
        lower: f64,
        upper: f64,
    ) -> VarId {
        self.vars.push(VarDef {
            name: name.into(),
            kind,
            lower,
            upper,
        });
        VarId(self.vars.len() - 1)
    }

    /// Adds the constraint `expr ⋈ rhs`.
    pub fn add_constraint(&mut self, expr: LinearExpr, comparison: Comparison, rhs: f64) {
        self.constraints.push(LinearConstraint {
            expr,
            comparison,
            rhs,
        });
    }

    /// Sets the objective and its direction.
    pub fn set_objective(&mut self, objective: LinearExpr, sense: ObjectiveSense) {
        self.objective = objective;
        self.sense = sense;
    }

    pub fn variables(&self) -> &[VarDef] {
        &self.vars
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl Default for MilpModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_building() {
        let mut model = MilpModel::new();
        let x = model.add_var("x", VarKind::Integer, 0.0, 10.0);
        let y = model.add_var("y", VarKind::Binary, 0.0, 1.0);
        model.add_constraint(
            LinearExpr::new().term(x, 1.0).term(y, -4.0),
            Comparison::GreaterOrEqual,
            2.0,
        );
        model.set_objective(LinearExpr::new().term(x, 1.0), ObjectiveSense::Minimize);

        assert_eq!(model.var_count(), 2);
        assert_eq!(model.constraint_count(), 1);
        assert_eq!(model.variables()[1].kind, VarKind::Binary);
        assert_eq!(model.sense(), ObjectiveSense::Minimize);
    }

    #[test]
    fn test_expr_value_in() {
        let expr = LinearExpr {
            terms: vec![(VarId(0), 2.0), (VarId(2), -1.0)],
            constant: 3.0,
        };
        assert_eq!(expr.value_in(&[4.0, 99.0, 5.0]), 2.0 * 4.0 - 5.0 + 3.0);
    }
}
