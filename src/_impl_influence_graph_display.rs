use crate::{GroupId, InfluenceGraph, InfluenceId};
use std::fmt::{Display, Error, Formatter};

/// Render the graph back into its string notation, one influence per line.
///
/// Grouped influences whose members share one effect render as a single
/// `A & B -> C` line; a group with mixed effects falls back to one line per
/// member (the notation cannot express it, so grouping is lost). Sources of
/// arrow-to-arrow influences render as their resolved driver, which likewise
/// loses the gating structure.
impl Display for InfluenceGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut printed_groups: Vec<GroupId> = Vec::new();
        for id in self.influences() {
            let influence = self.get_influence(id);
            match influence.get_group() {
                None => {
                    writeln!(
                        f,
                        "{} {} {}",
                        self.get_variable_name(self.resolve_driver(id)),
                        influence.get_effect().arrow(),
                        self.get_variable_name(self.resolve_target(id))
                    )?;
                }
                Some((group, _)) => {
                    if printed_groups.contains(&group) {
                        continue;
                    }
                    printed_groups.push(group);
                    self.fmt_group(f, group)?;
                }
            }
        }
        for (variable, effect) in &self.constants {
            writeln!(f, "{} {}", effect.arrow(), self.get_variable_name(*variable))?;
        }
        Ok(())
    }
}

impl InfluenceGraph {
    /// **(internal)** Render one whole group of influences.
    fn fmt_group(&self, f: &mut Formatter<'_>, group: GroupId) -> Result<(), Error> {
        let members: Vec<InfluenceId> = self
            .influences()
            .filter(|id| matches!(self.get_influence(*id).get_group(), Some((g, _)) if g == group))
            .collect();
        let effect = self.get_influence(members[0]).get_effect();
        let uniform = members
            .iter()
            .all(|id| self.get_influence(*id).get_effect() == effect);
        if uniform {
            let drivers: Vec<&str> = members
                .iter()
                .map(|id| self.get_variable_name(self.resolve_driver(*id)).as_str())
                .collect();
            writeln!(
                f,
                "{} {} {}",
                drivers.join(" & "),
                effect.arrow(),
                self.get_variable_name(self.resolve_target(members[0]))
            )
        } else {
            for id in members {
                let influence = self.get_influence(id);
                writeln!(
                    f,
                    "{} {} {}",
                    self.get_variable_name(self.resolve_driver(id)),
                    influence.get_effect().arrow(),
                    self.get_variable_name(self.resolve_target(id))
                )?;
            }
            Ok(())
        }
    }
}
