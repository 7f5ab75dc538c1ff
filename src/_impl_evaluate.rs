use crate::{Effect, Parameters, Term};

/// Numeric evaluation of one term against a state snapshot.
impl Term {
    /// Compute the scalar contribution of this term, given the current values
    /// of all variables (indexed by `VariableId`) and the parameter registry.
    ///
    /// The functional forms are:
    ///  * constant term: `+c` (promote) or `-c` (inhibit);
    ///  * promote: Hill-type activation `c * x^2 / (k + x^2)` with the driver
    ///    value `x` (the exponent is fixed at 2);
    ///  * inhibit: mass-action decay `-c * x * y`, where `y` is the current
    ///    value of the *target* itself.
    ///
    /// All parameters default to 1 when unset. A user-supplied `k = 0` together
    /// with `x = 0` yields `0/0 = NaN`, which is passed through untouched.
    pub fn evaluate(&self, state: &[f64], parameters: &Parameters) -> f64 {
        let c = parameters.get(self.coefficient);
        if self.is_constant {
            return self.effect.sign() * c;
        }
        // Non-constant terms always carry a resolved driver.
        let x = match self.source {
            Some(source) => state[source.to_index()],
            None => f64::NAN,
        };
        match self.effect {
            Effect::Promote => {
                let k = match self.rate_constant {
                    Some(symbol) => parameters.get(symbol),
                    None => 1.0,
                };
                c * (x * x) / (k + x * x)
            }
            Effect::Inhibit => {
                let y = state[self.target.to_index()];
                -c * x * y
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Effect, InfluenceGraph, Parameters, Symbol};

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn promote_is_hill_type() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B"]));
        graph.add_influence("A", "B", Effect::Promote).unwrap();
        let equations = graph.synthesize();
        let term = &equations.terms_for("B").unwrap()[0];

        // c = k = 1, x = 1: 1 * 1 / (1 + 1) = 0.5
        assert_eq!(0.5, term.evaluate(&[1.0, 1.0], &Parameters::new()));

        // x = 2: 4 / (1 + 4) = 0.8
        assert_eq!(0.8, term.evaluate(&[2.0, 1.0], &Parameters::new()));

        // c = 3, k = 4, x = 2: 3 * 4 / (4 + 4) = 1.5
        let mut parameters = Parameters::new();
        parameters.set(Symbol::Coefficient(1), 3.0);
        parameters.set(Symbol::RateConstant(1), 4.0);
        assert_eq!(1.5, term.evaluate(&[2.0, 1.0], &parameters));

        // Saturation: the term never exceeds c.
        assert!(term.evaluate(&[1e9, 1.0], &parameters) < 3.0 + 1e-6);
    }

    #[test]
    fn inhibit_is_mass_action_on_the_target() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B"]));
        graph.add_influence("A", "B", Effect::Inhibit).unwrap();
        let equations = graph.synthesize();
        let term = &equations.terms_for("B").unwrap()[0];

        // -c * x * y with c = 1, x = 1, y = 1.
        assert_eq!(-1.0, term.evaluate(&[1.0, 1.0], &Parameters::new()));
        // The decay scales with the target's own value.
        assert_eq!(-6.0, term.evaluate(&[2.0, 3.0], &Parameters::new()));
        // No target left, no decay.
        assert_eq!(0.0, term.evaluate(&[2.0, 0.0], &Parameters::new()));
    }

    #[test]
    fn constant_terms_ignore_the_state() {
        let mut graph = InfluenceGraph::with_variables(names(&["A"]));
        let a = graph.find_variable("A").unwrap();
        graph.toggle_constant(a, Effect::Promote).unwrap();
        graph.toggle_constant(a, Effect::Inhibit).unwrap();
        let equations = graph.synthesize();
        let terms = equations.terms_for("A").unwrap();

        let mut parameters = Parameters::new();
        parameters.set(Symbol::Coefficient(2), 2.0);
        assert_eq!(1.0, terms[0].evaluate(&[123.0], &parameters));
        assert_eq!(-2.0, terms[1].evaluate(&[123.0], &parameters));
    }

    #[test]
    fn zero_rate_constant_with_zero_driver_is_nan() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B"]));
        graph.add_influence("A", "B", Effect::Promote).unwrap();
        let equations = graph.synthesize();
        let term = &equations.terms_for("B").unwrap()[0];

        let mut parameters = Parameters::new();
        parameters.set(Symbol::RateConstant(1), 0.0);
        assert!(term.evaluate(&[0.0, 1.0], &parameters).is_nan());
    }
}
