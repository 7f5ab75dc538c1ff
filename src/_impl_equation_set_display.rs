use crate::{Effect, EquationSet, GroupId, GroupKind, Term};
use std::fmt::{Display, Error, Formatter};

impl Display for EquationSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for entry in &self.entries {
            write!(f, "d{}/dt = ", entry.name)?;
            let mut printed_any = false;
            let mut printed_groups: Vec<GroupId> = Vec::new();
            for term in &entry.terms {
                let rendered = match term.get_group() {
                    None => self.render_term(term),
                    Some((group, kind)) => {
                        if printed_groups.contains(&group) {
                            continue;
                        }
                        printed_groups.push(group);
                        self.render_group(&entry.terms, group, kind)
                    }
                };
                if printed_any {
                    match rendered.strip_prefix('-') {
                        Some(negated) => write!(f, " - {}", negated)?,
                        None => write!(f, " + {}", rendered)?,
                    }
                } else {
                    write!(f, "{}", rendered)?;
                    printed_any = true;
                }
            }
            if !printed_any {
                write!(f, "0")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rendering of individual terms, following the numeric evaluation semantics
/// (in particular, every group member keeps its own coefficient).
impl EquationSet {
    /// **(internal)** Render one standalone term, sign included.
    fn render_term(&self, term: &Term) -> String {
        let c = term.get_coefficient();
        if term.is_constant() {
            return match term.get_effect() {
                Effect::Promote => format!("{}", c),
                Effect::Inhibit => format!("-{}", c),
            };
        }
        let x = term
            .get_source()
            .and_then(|source| self.name_of(source))
            .unwrap_or("?");
        match term.get_effect() {
            Effect::Promote => {
                let k = match term.get_rate_constant() {
                    Some(symbol) => symbol.to_string(),
                    None => "1".to_string(),
                };
                format!("{} * {}^2 / ({} + {}^2)", c, x, k, x)
            }
            Effect::Inhibit => {
                let y = self.name_of(term.get_target()).unwrap_or("?");
                format!("-{} * {} * {}", c, x, y)
            }
        }
    }

    /// **(internal)** Render one group as a single combined expression.
    fn render_group(&self, terms: &[Term], group: GroupId, kind: GroupKind) -> String {
        let members: Vec<String> = terms
            .iter()
            .filter(|term| matches!(term.get_group(), Some((g, _)) if g == group))
            .map(|term| format!("({})", self.render_term(term)))
            .collect();
        match kind {
            GroupKind::And => members.join(" * "),
            GroupKind::Or => members.join(" + "),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Effect, GroupKind, InfluenceGraph};
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equation_set_to_string() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B", "C"]));
        graph.add_influence("A", "B", Effect::Promote).unwrap();
        graph.add_influence("B", "C", Effect::Inhibit).unwrap();
        let a = graph.find_variable("A").unwrap();
        graph.toggle_constant(a, Effect::Promote).unwrap();
        let c = graph.find_variable("C").unwrap();
        graph.toggle_constant(c, Effect::Inhibit).unwrap();

        let expected = "dA/dt = c_1\n\
                        dB/dt = c_2 * A^2 / (k_1 + A^2)\n\
                        dC/dt = -c_3 * B * C - c_4\n";
        assert_eq!(expected, graph.synthesize().to_string());
    }

    #[test]
    fn test_group_rendering_matches_evaluation_semantics() {
        let mut graph = InfluenceGraph::with_variables(names(&["A", "B", "C"]));
        let a_c = graph.add_influence("A", "C", Effect::Promote).unwrap();
        let b_c = graph.add_influence("B", "C", Effect::Promote).unwrap();
        graph.group_influences(&[a_c, b_c], GroupKind::And).unwrap();

        let expected = "dA/dt = 0\n\
                        dB/dt = 0\n\
                        dC/dt = (c_1 * A^2 / (k_1 + A^2)) * (c_2 * B^2 / (k_2 + B^2))\n";
        assert_eq!(expected, graph.synthesize().to_string());
    }
}
