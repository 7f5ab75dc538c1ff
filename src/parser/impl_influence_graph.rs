use crate::parser::InfluenceTemp;
use crate::{GroupKind, InfluenceGraph};
use std::collections::HashSet;
use std::convert::TryFrom;

/// Methods for parsing `InfluenceGraph`s from string representations.
impl InfluenceGraph {
    /// Create an `InfluenceGraph` from a collection of influence strings.
    ///
    /// The variables of the graph are determined from the influence lines and
    /// are ordered alphabetically. Otherwise, this is equivalent to iteratively
    /// calling `add_influence_string`.
    pub fn from_influence_strings(influences: Vec<String>) -> Result<InfluenceGraph, String> {
        let mut templates = Vec::new();
        let mut variables = HashSet::new();
        for string in influences {
            let template = InfluenceTemp::try_from(string.as_str())?;
            for source in &template.sources {
                variables.insert(source.clone());
            }
            variables.insert(template.target.clone());
            templates.push(template);
        }

        let mut variables: Vec<String> = variables.into_iter().collect();
        variables.sort();

        let mut graph = InfluenceGraph::new();
        for name in variables {
            graph.add_variable(&name)?;
        }

        for template in templates {
            graph.apply_influence_temp(template)?;
        }

        Ok(graph)
    }

    /// Add a new influence given in its string representation (e.g. `A -> B`,
    /// `A & B -| C`, or `-> A` for a constant source).
    ///
    /// All referenced variables must already exist in the graph. A multi-source
    /// line adds one influence per source and groups them as an AND group; a
    /// source-less line switches on the corresponding constant toggle (and
    /// fails if the toggle is already on).
    pub fn add_influence_string(&mut self, influence: &str) -> Result<(), String> {
        let template = InfluenceTemp::try_from(influence)?;
        self.apply_influence_temp(template)
    }

    /// **(internal)** Apply one parsed influence line to this graph.
    fn apply_influence_temp(&mut self, template: InfluenceTemp) -> Result<(), String> {
        if template.sources.is_empty() {
            let target = self.find_variable(&template.target).ok_or(format!(
                "Invalid influence: Unknown target {}.",
                template.target
            ))?;
            if self.has_constant(target, template.effect) {
                return Err(format!(
                    "Invalid influence: {} already has a constant {} term.",
                    template.target, template.effect
                ));
            }
            self.toggle_constant(target, template.effect)?;
            return Ok(());
        }
        let mut members = Vec::new();
        for source in &template.sources {
            members.push(self.add_influence(source, &template.target, template.effect)?);
        }
        if members.len() > 1 {
            self.group_influences(&members, GroupKind::And)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for InfluenceGraph {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lines = value
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(line.to_string())
                }
            })
            .collect();
        InfluenceGraph::from_influence_strings(lines)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Effect, GroupKind, InfluenceGraph};
    use pretty_assertions::assert_eq;
    use std::convert::TryFrom;

    #[test]
    fn test_influence_graph_from_string() {
        let graph = InfluenceGraph::try_from(
            "
            # A drives B, B suppresses itself
            A -> B
            B -| B

            -> A
            C & D -> B
        ",
        )
        .unwrap();

        assert_eq!(4, graph.num_vars());
        assert_eq!(4, graph.num_influences());
        // Alphabetical variable order.
        let a = graph.find_variable("A").unwrap();
        assert_eq!(0usize, a.into());
        assert!(graph.has_constant(a, Effect::Promote));

        let b = graph.find_variable("B").unwrap();
        let into_b = graph.influences_into(b);
        assert_eq!(4, into_b.len());
        // The two grouped influences share a group; A -> B and B -| B stand alone.
        assert_eq!(None, graph[into_b[0]].get_group());
        assert_eq!(None, graph[into_b[1]].get_group());
        let group = graph[into_b[2]].get_group().unwrap();
        assert_eq!(GroupKind::And, group.1);
        assert_eq!(Some(group), graph[into_b[3]].get_group());
    }

    #[test]
    fn test_influence_graph_from_string_invalid() {
        assert!(InfluenceGraph::try_from("A -> B\nA -> B").is_err());
        assert!(InfluenceGraph::try_from("A <- B").is_err());
        assert!(InfluenceGraph::try_from("-> A\n-> A").is_err());
    }

    #[test]
    fn test_add_influence_string() {
        let mut graph = InfluenceGraph::with_variables(vec!["A".to_string(), "B".to_string()]);
        graph.add_influence_string("A -> B").unwrap();
        assert!(graph.add_influence_string("A -> C").is_err());
        assert_eq!(1, graph.num_influences());
    }
}
