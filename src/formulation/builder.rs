//! Translates an instance and objective variant into a MILP model.
//!
//! Variables:
//! - `x_i`: integer landing time in `[earliest_i, latest_i]`;
//! - `y_ij`: binary, 1 when aircraft `i` lands before aircraft `j`, with
//!   `y_ij + y_ji = 1` for every unordered pair (a strict total order);
//! - `z_ir`: binary runway indicator, `Σ_r z_ir = 1`;
//! - per-variant auxiliaries (earliness/tardiness, makespan, lateness).
//!
//! The separation disjunction "if i precedes j on runway r then
//! `x_j ≥ x_i + S[i][j]`" is linearized with a big-M that deactivates the
//! constraint unless `y_ij = z_ir = z_jr = 1`. M is derived from the
//! instance so it dominates every reachable time span.

use crate::models::{Instance, ModelBuildError, ObjectiveVariant};

use super::{Comparison, LinearExpr, MilpModel, ObjectiveSense, VarId, VarKind};

/// A built model plus the variable handles needed to read a schedule back.
#[derive(Debug, Clone)]
pub struct Formulation {
    model: MilpModel,
    landing_times: Vec<VarId>,
    runway_flags: Vec<Vec<VarId>>,
}

impl Formulation {
    /// The backend-neutral model.
    pub fn model(&self) -> &MilpModel {
        &self.model
    }

    /// `x_i` handles, one per aircraft.
    pub fn landing_times(&self) -> &[VarId] {
        &self.landing_times
    }

    /// `z_ir` handles, `runway_flags[i][r]`.
    pub fn runway_flags(&self) -> &[Vec<VarId>] {
        &self.runway_flags
    }
}

/// Builds MILP models for an instance.
pub struct FormulationBuilder<'a> {
    instance: &'a Instance,
}

impl<'a> FormulationBuilder<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Builds the model for `variant`.
    ///
    /// Fails with [`ModelBuildError`] when the instance invariants do not
    /// hold (empty window, matrix mismatch, zero runways).
    pub fn build(&self, variant: ObjectiveVariant) -> Result<Formulation, ModelBuildError> {
        self.instance.validate()?;

        let n = self.instance.aircraft_count();
        let m = self.instance.runways();
        let big_m = self.big_m();
        let mut model = MilpModel::new();

        let x: Vec<VarId> = self
            .instance
            .aircraft()
            .iter()
            .map(|a| {
                model.add_var(
                    format!("x_{}", a.id),
                    VarKind::Integer,
                    a.earliest as f64,
                    a.latest as f64,
                )
            })
            .collect();

        let mut y = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    y[i][j] =
                        Some(model.add_var(format!("y_{i}_{j}"), VarKind::Binary, 0.0, 1.0));
                }
            }
        }

        let z: Vec<Vec<VarId>> = (0..n)
            .map(|i| {
                (0..m)
                    .map(|r| model.add_var(format!("z_{i}_{r}"), VarKind::Binary, 0.0, 1.0))
                    .collect()
            })
            .collect();

        // Each aircraft lands on exactly one runway.
        for flags in &z {
            let sum = flags
                .iter()
                .fold(LinearExpr::new(), |expr, &var| expr.term(var, 1.0));
            model.add_constraint(sum, Comparison::Equal, 1.0);
        }

        // Every pair has exactly one landing order.
        for i in 0..n {
            for j in (i + 1)..n {
                if let (Some(fwd), Some(bwd)) = (y[i][j], y[j][i]) {
                    model.add_constraint(
                        LinearExpr::new().term(fwd, 1.0).term(bwd, 1.0),
                        Comparison::Equal,
                        1.0,
                    );
                }
            }
        }

        // Separation, active only when i precedes j on a shared runway:
        // x_j − x_i − M·y_ij − M·z_ir − M·z_jr ≥ S[i][j] − 3M.
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let Some(order) = y[i][j] else { continue };
                let gap = self.instance.separation(i, j) as f64;
                for r in 0..m {
                    let expr = LinearExpr::new()
                        .term(x[j], 1.0)
                        .term(x[i], -1.0)
                        .term(order, -big_m)
                        .term(z[i][r], -big_m)
                        .term(z[j][r], -big_m);
                    model.add_constraint(expr, Comparison::GreaterOrEqual, gap - 3.0 * big_m);
                }
            }
        }

        self.add_objective(&mut model, &x, &z, big_m, variant);

        Ok(Formulation {
            model,
            landing_times: x,
            runway_flags: z,
        })
    }

    fn add_objective(
        &self,
        model: &mut MilpModel,
        x: &[VarId],
        z: &[Vec<VarId>],
        big_m: f64,
        variant: ObjectiveVariant,
    ) {
        let m = self.instance.runways();
        match variant {
            ObjectiveVariant::WeightedEarlinessTardiness => {
                let mut objective = LinearExpr::new();
                for (i, a) in self.instance.aircraft().iter().enumerate() {
                    let alpha =
                        model.add_var(format!("alpha_{i}"), VarKind::Continuous, 0.0, f64::INFINITY);
                    let beta =
                        model.add_var(format!("beta_{i}"), VarKind::Continuous, 0.0, f64::INFINITY);
                    // alpha_i ≥ T_i − x_i and beta_i ≥ x_i − T_i.
                    model.add_constraint(
                        LinearExpr::new().term(alpha, 1.0).term(x[i], 1.0),
                        Comparison::GreaterOrEqual,
                        a.target as f64,
                    );
                    model.add_constraint(
                        LinearExpr::new().term(beta, 1.0).term(x[i], -1.0),
                        Comparison::GreaterOrEqual,
                        -(a.target as f64),
                    );
                    objective = objective
                        .term(alpha, a.early_penalty)
                        .term(beta, a.late_penalty);
                }
                model.set_objective(objective, ObjectiveSense::Minimize);
            }
            ObjectiveVariant::Makespan => {
                let makespan =
                    model.add_var("makespan", VarKind::Continuous, 0.0, f64::INFINITY);
                for &xi in x {
                    model.add_constraint(
                        LinearExpr::new().term(makespan, 1.0).term(xi, -1.0),
                        Comparison::GreaterOrEqual,
                        0.0,
                    );
                }
                model.set_objective(
                    LinearExpr::new().term(makespan, 1.0),
                    ObjectiveSense::Minimize,
                );
            }
            ObjectiveVariant::LatenessWithTransfer => {
                let mut objective = LinearExpr::new();
                for (i, a) in self.instance.aircraft().iter().enumerate() {
                    let lateness = model.add_var(
                        format!("lateness_{i}"),
                        VarKind::Continuous,
                        0.0,
                        f64::INFINITY,
                    );
                    // lateness_i ≥ x_i + t_ir − T_i − M(1 − z_ir) per runway.
                    for r in 0..m {
                        let expr = LinearExpr::new()
                            .term(lateness, 1.0)
                            .term(x[i], -1.0)
                            .term(z[i][r], -big_m);
                        model.add_constraint(
                            expr,
                            Comparison::GreaterOrEqual,
                            (a.transfer_time(r) - a.target) as f64 - big_m,
                        );
                    }
                    objective = objective.term(lateness, 1.0);
                }
                model.set_objective(objective, ObjectiveSense::Minimize);
            }
        }
    }

    /// A constant large enough to deactivate any separation or lateness
    /// constraint: it exceeds the widest reachable time span plus the
    /// largest separation and transfer entries.
    fn big_m(&self) -> f64 {
        let latest_max = self
            .instance
            .aircraft()
            .iter()
            .map(|a| a.latest)
            .max()
            .unwrap_or(0);
        let earliest_min = self
            .instance
            .aircraft()
            .iter()
            .map(|a| a.earliest)
            .min()
            .unwrap_or(0)
            .min(0);
        let transfer_max = self
            .instance
            .aircraft()
            .iter()
            .flat_map(|a| a.transfer_times.iter().copied())
            .max()
            .unwrap_or(0);
        (latest_max - earliest_min + self.instance.separations().max_entry() + transfer_max + 1)
            as f64
    }
}
