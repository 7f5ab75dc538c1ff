use crate::{EquationSet, GroupId, GroupKind, Parameters, Term};

/// Basic utility methods for inspecting the `EquationSet`.
impl EquationSet {
    /// The number of equations (one per live graph variable).
    pub fn num_equations(&self) -> usize {
        self.entries.len()
    }

    /// Return an iterator over the variable names, in graph insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// The ordered terms of the named variable's equation, or `None` when the
    /// variable has no equation (i.e. it is not part of the graph).
    pub fn terms_for(&self, variable: &str) -> Option<&[Term]> {
        self.entries
            .iter()
            .find(|entry| entry.name == variable)
            .map(|entry| entry.terms.as_slice())
    }

    /// Compute the derivative of the named variable under the given state
    /// snapshot (values indexed by `VariableId`) and parameters.
    ///
    /// Standalone terms are summed; each group contributes one combined value
    /// (the product of its members for `And`, their sum for `Or`).
    pub fn derivative(&self, variable: &str, state: &[f64], parameters: &Parameters) -> Option<f64> {
        self.entries
            .iter()
            .position(|entry| entry.name == variable)
            .map(|index| self.derivative_at(index, state, parameters))
    }

    /// **(internal)** Derivative of the entry at the given position.
    pub(crate) fn derivative_at(&self, entry: usize, state: &[f64], parameters: &Parameters) -> f64 {
        let terms = &self.entries[entry].terms;
        let mut total = 0.0;
        let mut combined_groups: Vec<GroupId> = Vec::new();
        for term in terms {
            match term.get_group() {
                None => total += term.evaluate(state, parameters),
                Some((group, kind)) => {
                    if combined_groups.contains(&group) {
                        continue;
                    }
                    combined_groups.push(group);
                    total += Self::combine_group(terms, group, kind, state, parameters);
                }
            }
        }
        total
    }

    /// **(internal)** The combined contribution of one group of terms.
    fn combine_group(
        terms: &[Term],
        group: GroupId,
        kind: GroupKind,
        state: &[f64],
        parameters: &Parameters,
    ) -> f64 {
        let members = terms
            .iter()
            .filter(|term| matches!(term.get_group(), Some((g, _)) if g == group))
            .map(|term| term.evaluate(state, parameters));
        match kind {
            GroupKind::And => members.product(),
            GroupKind::Or => members.sum(),
        }
    }

    /// **(internal)** The length a state vector must have so that every
    /// `VariableId` appearing in this system can index into it.
    pub(crate) fn state_size(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.variable.to_index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// **(internal)** Find the name of the variable occupying the given slot.
    pub(crate) fn name_of(&self, variable: crate::VariableId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.variable == variable)
            .map(|entry| entry.name.as_str())
    }

    /// **(internal)** Positions of the entries together with their variable slots.
    pub(crate) fn entry_slots(&self) -> Vec<usize> {
        self.entries
            .iter()
            .map(|entry| entry.variable.to_index())
            .collect()
    }
}
