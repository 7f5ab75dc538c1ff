use crate::{
    Effect, Endpoint, GroupId, GroupKind, Influence, InfluenceGraph, InfluenceId, Variable,
    VariableId, ID_REGEX,
};
use fxhash::FxHashMap;
use std::ops::Index;

/// Methods for safely constructing and editing `InfluenceGraph`s.
impl InfluenceGraph {
    /// Create a new empty `InfluenceGraph`.
    pub fn new() -> InfluenceGraph {
        InfluenceGraph {
            variables: Vec::new(),
            influences: Vec::new(),
            constants: Vec::new(),
            variable_to_index: FxHashMap::default(),
            next_group: 0,
        }
    }

    /// Create a new `InfluenceGraph` with variables using the given names and
    /// no influences.
    ///
    /// The ordering of the variables is preserved. Panics if some name is
    /// invalid or appears twice.
    pub fn with_variables(variables: Vec<String>) -> InfluenceGraph {
        let mut graph = InfluenceGraph::new();
        for name in variables {
            if let Err(error) = graph.add_variable(&name) {
                panic!("{}", error);
            }
        }
        graph
    }

    /// Add a new `Variable` to this `InfluenceGraph`.
    ///
    /// Returns `Err` when the name is not a valid identifier or when a variable
    /// with the same name already exists.
    pub fn add_variable(&mut self, name: &str) -> Result<VariableId, String> {
        if !Self::is_valid_name(name) {
            return Err(format!("Invalid variable name: \"{}\".", name));
        }
        if self.variable_to_index.contains_key(name) {
            return Err(format!("Variable {} already exists.", name));
        }
        let id = VariableId(self.variables.len());
        self.variables.push(Some(Variable {
            name: name.to_string(),
        }));
        self.variable_to_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Remove a `Variable` from this `InfluenceGraph`, together with every
    /// `Influence` whose source, target, or transitively resolved target is
    /// that variable (and, transitively, everything left dangling by those
    /// removals).
    ///
    /// Returns the removed `Variable`, or `Err` if the id is not valid.
    pub fn remove_variable(&mut self, variable: VariableId) -> Result<Variable, String> {
        self.check_variable(variable)?;
        let touched: Vec<InfluenceId> = self
            .influences()
            .filter(|id| {
                let influence = self.get_influence(*id);
                influence.source == Endpoint::Variable(variable)
                    || influence.target == Endpoint::Variable(variable)
                    || self.resolve_target(*id) == variable
            })
            .collect();
        for id in touched {
            // The cascade may have removed this id already.
            if self.influences[id.to_index()].is_some() {
                self.remove_influence(id)?;
            }
        }
        self.constants.retain(|(v, _)| *v != variable);
        let removed = self.variables[variable.to_index()].take();
        match removed {
            Some(removed) => {
                self.variable_to_index.remove(&removed.name);
                Ok(removed)
            }
            None => Err(format!("{} was already removed.", variable)),
        }
    }

    /// Add a new `Influence` between two named variables.
    ///
    /// Returns `Err` when `source` or `target` are not valid graph variables or
    /// when an equal influence (same source, target and effect) already exists.
    pub fn add_influence(
        &mut self,
        source: &str,
        target: &str,
        effect: Effect,
    ) -> Result<InfluenceId, String> {
        let source = self
            .find_variable(source)
            .ok_or(format!("Invalid influence: Unknown source {}.", source))?;
        let target = self
            .find_variable(target)
            .ok_or(format!("Invalid influence: Unknown target {}.", target))?;
        self.add_influence_raw(Endpoint::Variable(source), Endpoint::Variable(target), effect)
    }

    /// Add a new `Influence` between two arbitrary endpoints (variables or
    /// already-existing influences).
    ///
    /// Returns `Err` when an endpoint does not refer to a live variable or
    /// influence, or when an equal influence already exists.
    pub fn add_influence_raw(
        &mut self,
        source: Endpoint,
        target: Endpoint,
        effect: Effect,
    ) -> Result<InfluenceId, String> {
        self.check_endpoint(source)?;
        self.check_endpoint(target)?;
        let duplicate = self.influences.iter().flatten().any(|influence| {
            influence.source == source && influence.target == target && influence.effect == effect
        });
        if duplicate {
            return Err(format!(
                "Invalid influence: {:?} already {}s {:?}.",
                source, effect, target
            ));
        }
        let id = InfluenceId(self.influences.len());
        self.influences.push(Some(Influence {
            source,
            target,
            effect,
            group: None,
        }));
        Ok(id)
    }

    /// Remove an `Influence` from this `InfluenceGraph`, together with every
    /// influence that referenced it as an endpoint (transitively).
    ///
    /// Returns the removed `Influence`, or `Err` if the id is not valid.
    pub fn remove_influence(&mut self, influence: InfluenceId) -> Result<Influence, String> {
        let removed = self
            .influences
            .get_mut(influence.to_index())
            .and_then(|slot| slot.take())
            .ok_or(format!("Unknown influence {}.", influence))?;
        let mut worklist = vec![influence];
        while let Some(gone) = worklist.pop() {
            for index in 0..self.influences.len() {
                let dangling = match &self.influences[index] {
                    Some(influence) => {
                        influence.source == Endpoint::Influence(gone)
                            || influence.target == Endpoint::Influence(gone)
                    }
                    None => false,
                };
                if dangling {
                    self.influences[index] = None;
                    worklist.push(InfluenceId(index));
                }
            }
        }
        Ok(removed)
    }

    /// Assign the given influences a fresh shared group, meaning their effects
    /// combine into a single contribution (multiplicatively for
    /// `GroupKind::And`, additively for `GroupKind::Or`).
    ///
    /// At least two influences are required and all of them must resolve to the
    /// same target variable. Members leave any group they were in before.
    pub fn group_influences(
        &mut self,
        members: &[InfluenceId],
        kind: GroupKind,
    ) -> Result<GroupId, String> {
        if members.len() < 2 {
            return Err("Invalid group: At least two influences are required.".to_string());
        }
        for id in members {
            self.check_endpoint(Endpoint::Influence(*id))?;
        }
        let target = self.resolve_target(members[0]);
        for id in &members[1..] {
            if self.resolve_target(*id) != target {
                return Err(format!(
                    "Invalid group: Influences target both {} and {}.",
                    self.get_variable_name(target),
                    self.get_variable_name(self.resolve_target(*id))
                ));
            }
        }
        let group = GroupId(self.next_group);
        self.next_group += 1;
        for id in members {
            if let Some(influence) = self.influences[id.to_index()].as_mut() {
                influence.group = Some((group, kind));
            }
        }
        Ok(group)
    }

    /// Remove the given influence from its group, making it a standalone
    /// contribution again. Does nothing if the influence is not grouped.
    pub fn ungroup(&mut self, influence: InfluenceId) -> Result<(), String> {
        self.check_endpoint(Endpoint::Influence(influence))?;
        if let Some(influence) = self.influences[influence.to_index()].as_mut() {
            influence.group = None;
        }
        Ok(())
    }

    /// Toggle a constant source (`Effect::Promote`) or constant degradation
    /// (`Effect::Inhibit`) on the given variable. These are not backed by an
    /// influence; they synthesize into bare constant terms.
    ///
    /// Returns `true` if the toggle is now on, `false` if it was switched off.
    pub fn toggle_constant(
        &mut self,
        variable: VariableId,
        effect: Effect,
    ) -> Result<bool, String> {
        self.check_variable(variable)?;
        let position = self
            .constants
            .iter()
            .position(|(v, e)| *v == variable && *e == effect);
        if let Some(position) = position {
            self.constants.remove(position);
            Ok(false)
        } else {
            self.constants.push((variable, effect));
            Ok(true)
        }
    }

    /// True if the given variable has the given constant toggle switched on.
    pub fn has_constant(&self, variable: VariableId, effect: Effect) -> bool {
        self.constants
            .iter()
            .any(|(v, e)| *v == variable && *e == effect)
    }

    /// **(internal)** Check that the endpoint refers to a live variable or influence.
    fn check_endpoint(&self, endpoint: Endpoint) -> Result<(), String> {
        match endpoint {
            Endpoint::Variable(id) => self.check_variable(id),
            Endpoint::Influence(id) => match self.influences.get(id.to_index()) {
                Some(Some(_)) => Ok(()),
                _ => Err(format!("Unknown endpoint {}.", id)),
            },
        }
    }

    /// **(internal)** Check that the id refers to a live variable.
    fn check_variable(&self, id: VariableId) -> Result<(), String> {
        match self.variables.get(id.to_index()) {
            Some(Some(_)) => Ok(()),
            _ => Err(format!("Unknown variable {}.", id)),
        }
    }
}

/// Some basic utility methods for inspecting the `InfluenceGraph`.
impl InfluenceGraph {
    /// The number of (live) variables in this `InfluenceGraph`.
    pub fn num_vars(&self) -> usize {
        self.variables.iter().flatten().count()
    }

    /// The number of (live) influences in this `InfluenceGraph`.
    pub fn num_influences(&self) -> usize {
        self.influences.iter().flatten().count()
    }

    /// Find a `VariableId` for the given name, or `None` if the variable does
    /// not exist.
    pub fn find_variable(&self, name: &str) -> Option<VariableId> {
        self.variable_to_index.get(name).cloned()
    }

    /// Return a `Variable` corresponding to the given `VariableId`.
    ///
    /// Panics if the id does not refer to a live variable.
    pub fn get_variable(&self, id: VariableId) -> &Variable {
        match self.variables[id.to_index()].as_ref() {
            Some(variable) => variable,
            None => panic!("{} was removed.", id),
        }
    }

    /// Shorthand for `self.get_variable(id).get_name()`.
    pub fn get_variable_name(&self, id: VariableId) -> &String {
        &self.get_variable(id).name
    }

    /// Return an `Influence` corresponding to the given `InfluenceId`.
    ///
    /// Panics if the id does not refer to a live influence.
    pub fn get_influence(&self, id: InfluenceId) -> &Influence {
        match self.influences[id.to_index()].as_ref() {
            Some(influence) => influence,
            None => panic!("{} was removed.", id),
        }
    }

    /// Return an iterator over the ids of all live variables, in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| VariableId(index))
    }

    /// Return an iterator over the ids of all live influences, in insertion order.
    pub fn influences(&self) -> impl Iterator<Item = InfluenceId> + '_ {
        self.influences
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| InfluenceId(index))
    }

    /// Resolve the ultimate target variable of the given influence, following
    /// arrow-to-arrow links through their targets.
    pub fn resolve_target(&self, influence: InfluenceId) -> VariableId {
        let mut current = self.get_influence(influence).target;
        loop {
            match current {
                Endpoint::Variable(id) => return id,
                Endpoint::Influence(id) => current = self.get_influence(id).target,
            }
        }
    }

    /// Resolve the driver variable of the given influence: the variable at the
    /// start of its source chain. For an influence whose source is another
    /// influence, this is that influence's own driver, which encodes "the
    /// upstream regulator gates the downstream regulation".
    pub fn resolve_driver(&self, influence: InfluenceId) -> VariableId {
        let mut current = self.get_influence(influence).source;
        loop {
            match current {
                Endpoint::Variable(id) => return id,
                Endpoint::Influence(id) => current = self.get_influence(id).source,
            }
        }
    }

    /// Return the ids of influences whose resolved target is the given
    /// variable, in insertion order.
    pub fn influences_into(&self, target: VariableId) -> Vec<InfluenceId> {
        self.influences()
            .filter(|id| self.resolve_target(*id) == target)
            .collect()
    }

    /// Return the ids of influences whose resolved driver is the given
    /// variable, in insertion order.
    pub fn influences_out_of(&self, driver: VariableId) -> Vec<InfluenceId> {
        self.influences()
            .filter(|id| self.resolve_driver(*id) == driver)
            .collect()
    }

    /// A static check that allows to verify validity of a variable name.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name)
    }
}

impl Default for InfluenceGraph {
    fn default() -> Self {
        InfluenceGraph::new()
    }
}

/// Allow indexing `InfluenceGraph` using `VariableId` objects.
impl Index<VariableId> for InfluenceGraph {
    type Output = Variable;

    fn index(&self, index: VariableId) -> &Self::Output {
        self.get_variable(index)
    }
}

/// Allow indexing `InfluenceGraph` using `InfluenceId` objects.
impl Index<InfluenceId> for InfluenceGraph {
    type Output = Influence;

    fn index(&self, index: InfluenceId) -> &Self::Output {
        self.get_influence(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Effect, Endpoint, GroupKind, InfluenceGraph, VariableId};
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_influence_graph_basics() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B", "C"]));
        let a_b = graph.add_influence("A", "B", Effect::Promote).unwrap();
        graph.add_influence("B", "C", Effect::Inhibit).unwrap();
        graph.add_influence("B", "B", Effect::Inhibit).unwrap();

        assert!(graph.add_influence("A", "B", Effect::Promote).is_err());
        // Same endpoints with the other effect is a different influence.
        assert!(graph.add_influence("A", "B", Effect::Inhibit).is_ok());
        assert!(graph.add_influence("A", "D", Effect::Promote).is_err());
        assert!(graph.add_variable("A").is_err());
        assert!(graph.add_variable("no spaces").is_err());

        assert_eq!(graph.num_vars(), 3);
        assert_eq!(graph.num_influences(), 4);
        assert_eq!(graph.find_variable("B"), Some(VariableId::from(1)));
        assert_eq!(graph.get_variable_name(VariableId::from(2)), "C");
        assert_eq!(graph.resolve_target(a_b), VariableId::from(1));
        assert_eq!(graph.resolve_driver(a_b), VariableId::from(0));

        let b = graph.find_variable("B").unwrap();
        assert_eq!(graph.influences_into(b).len(), 3);
        assert_eq!(graph.influences_out_of(b).len(), 2);
    }

    #[test]
    fn test_arrow_to_arrow_resolution() {
        let mut graph = InfluenceGraph::with_variables(names(&["X", "Y", "Z"]));
        let y_z = graph.add_influence("Y", "Z", Effect::Promote).unwrap();
        // X gates the promotion that Y exerts on Z.
        let x = graph.find_variable("X").unwrap();
        let gate = graph
            .add_influence_raw(Endpoint::Variable(x), Endpoint::Influence(y_z), Effect::Inhibit)
            .unwrap();

        assert_eq!(graph.resolve_target(gate), graph.find_variable("Z").unwrap());
        assert_eq!(graph.resolve_driver(gate), x);
    }

    #[test]
    fn test_remove_influence_cascade() {
        let mut graph = InfluenceGraph::with_variables(names(&["X", "Y", "Z", "W"]));
        let y_z = graph.add_influence("Y", "Z", Effect::Promote).unwrap();
        let x = graph.find_variable("X").unwrap();
        let w = graph.find_variable("W").unwrap();
        let gate = graph
            .add_influence_raw(Endpoint::Variable(x), Endpoint::Influence(y_z), Effect::Inhibit)
            .unwrap();
        graph
            .add_influence_raw(Endpoint::Variable(w), Endpoint::Influence(gate), Effect::Promote)
            .unwrap();

        // Removing the base influence takes the whole chain with it.
        graph.remove_influence(y_z).unwrap();
        assert_eq!(graph.num_influences(), 0);
        assert!(graph.remove_influence(y_z).is_err());
    }

    #[test]
    fn test_remove_variable_cascade() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B", "C"]));
        let a = graph.find_variable("A").unwrap();
        let a_b = graph.add_influence("A", "B", Effect::Promote).unwrap();
        graph.add_influence("B", "C", Effect::Promote).unwrap();
        let c = graph.find_variable("C").unwrap();
        graph
            .add_influence_raw(Endpoint::Variable(c), Endpoint::Influence(a_b), Effect::Inhibit)
            .unwrap();
        graph.toggle_constant(a, Effect::Promote).unwrap();

        graph.remove_variable(a).unwrap();

        // Only B -> C survives: A -> B and the gate on it are both gone.
        assert_eq!(graph.num_vars(), 2);
        assert_eq!(graph.num_influences(), 1);
        assert_eq!(graph.find_variable("A"), None);
        assert!(!graph.has_constant(a, Effect::Promote));
        // Ids of the survivors are unchanged.
        assert_eq!(graph.find_variable("B"), Some(VariableId::from(1)));
    }

    #[test]
    fn test_grouping() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B", "C"]));
        let a_c = graph.add_influence("A", "C", Effect::Promote).unwrap();
        let b_c = graph.add_influence("B", "C", Effect::Promote).unwrap();
        let a_b = graph.add_influence("A", "B", Effect::Promote).unwrap();

        assert!(graph.group_influences(&[a_c], GroupKind::And).is_err());
        assert!(graph.group_influences(&[a_c, a_b], GroupKind::And).is_err());

        let group = graph.group_influences(&[a_c, b_c], GroupKind::And).unwrap();
        assert_eq!(graph[a_c].get_group(), Some((group, GroupKind::And)));
        assert_eq!(graph[b_c].get_group(), Some((group, GroupKind::And)));

        graph.ungroup(a_c).unwrap();
        assert_eq!(graph[a_c].get_group(), None);
        assert_eq!(graph[b_c].get_group(), Some((group, GroupKind::And)));

        // A fresh group gets a fresh id.
        let regrouped = graph.group_influences(&[a_c, b_c], GroupKind::And).unwrap();
        assert_ne!(group, regrouped);
    }

    #[test]
    fn test_constant_toggles() {
        let mut graph = InfluenceGraph::with_variables(names(&["A"]));
        let a = graph.find_variable("A").unwrap();
        assert_eq!(graph.toggle_constant(a, Effect::Promote), Ok(true));
        assert_eq!(graph.toggle_constant(a, Effect::Inhibit), Ok(true));
        assert!(graph.has_constant(a, Effect::Promote));
        assert_eq!(graph.toggle_constant(a, Effect::Promote), Ok(false));
        assert!(!graph.has_constant(a, Effect::Promote));
        assert!(graph.has_constant(a, Effect::Inhibit));
    }
}
