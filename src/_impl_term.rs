use crate::{Effect, GroupId, GroupKind, Symbol, Term, VariableId};

impl Term {
    /// The resolved driver variable of this term; `None` for constant terms.
    pub fn get_source(&self) -> Option<VariableId> {
        self.source
    }

    /// The variable whose derivative this term contributes to.
    pub fn get_target(&self) -> VariableId {
        self.target
    }

    pub fn get_effect(&self) -> Effect {
        self.effect
    }

    /// True for bare constant production/degradation terms (user toggles that
    /// are not backed by an influence).
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }

    pub fn get_group(&self) -> Option<(GroupId, GroupKind)> {
        self.group
    }

    /// The coefficient symbol (`c_n`) assigned to this term during synthesis.
    pub fn get_coefficient(&self) -> Symbol {
        self.coefficient
    }

    /// The rate-constant symbol (`k_n`) of this term; present exactly on
    /// non-constant promote terms.
    pub fn get_rate_constant(&self) -> Option<Symbol> {
        self.rate_constant
    }
}
