use crate::{
    Effect, EquationEntry, EquationSet, GroupId, InfluenceGraph, InfluenceId, Symbol, Term,
    VariableId,
};

/// Synthesis of the equation system from the current graph state.
impl InfluenceGraph {
    /// Rebuild the full `EquationSet` from scratch.
    ///
    /// This is a pure projection of the graph: it depends on nothing but the
    /// current variables, influences, groups and constant toggles, and calling
    /// it twice on an unchanged graph produces equal results, including the
    /// symbol numbering (both counters restart at every call).
    ///
    /// For every variable (in insertion order) the equation holds first the
    /// standalone influence terms in insertion order, then one run of terms per
    /// group in first-encounter order, then the constant toggles. The final
    /// traversal assigns a coefficient `c_n` to every term and a rate constant
    /// `k_n` to every non-constant promote term, numbering both densely from 1.
    pub fn synthesize(&self) -> EquationSet {
        let mut entries = Vec::new();
        for variable in self.variables() {
            let incoming = self.influences_into(variable);
            let mut terms = Vec::new();
            let mut groups: Vec<GroupId> = Vec::new();
            for id in &incoming {
                match self.get_influence(*id).get_group() {
                    None => terms.push(self.make_term(*id, variable)),
                    Some((group, _)) => {
                        if !groups.contains(&group) {
                            groups.push(group);
                        }
                    }
                }
            }
            for group in groups {
                for id in &incoming {
                    let is_member = match self.get_influence(*id).get_group() {
                        Some((g, _)) => g == group,
                        None => false,
                    };
                    if is_member {
                        terms.push(self.make_term(*id, variable));
                    }
                }
            }
            for (toggled, effect) in &self.constants {
                if *toggled == variable {
                    terms.push(Term {
                        source: None,
                        target: variable,
                        effect: *effect,
                        is_constant: true,
                        group: None,
                        coefficient: Symbol::Coefficient(0),
                        rate_constant: None,
                    });
                }
            }
            entries.push(EquationEntry {
                variable,
                name: self.get_variable_name(variable).clone(),
                terms,
            });
        }

        let mut next_coefficient: u32 = 0;
        let mut next_rate_constant: u32 = 0;
        for entry in &mut entries {
            for term in &mut entry.terms {
                next_coefficient += 1;
                term.coefficient = Symbol::Coefficient(next_coefficient);
                if !term.is_constant && term.effect == Effect::Promote {
                    next_rate_constant += 1;
                    term.rate_constant = Some(Symbol::RateConstant(next_rate_constant));
                }
            }
        }

        EquationSet { entries }
    }

    /// **(internal)** Build one (not yet numbered) term from an influence.
    fn make_term(&self, influence: InfluenceId, target: VariableId) -> Term {
        Term {
            source: Some(self.resolve_driver(influence)),
            target,
            effect: self.get_influence(influence).get_effect(),
            is_constant: false,
            group: self.get_influence(influence).get_group(),
            coefficient: Symbol::Coefficient(0),
            rate_constant: None,
        }
    }
}
