use crate::{Effect, Endpoint, GroupId, GroupKind, Influence};

impl Influence {
    pub fn get_source(&self) -> Endpoint {
        self.source
    }

    pub fn get_target(&self) -> Endpoint {
        self.target
    }

    pub fn get_effect(&self) -> Effect {
        self.effect
    }

    /// The group this influence belongs to, if any.
    pub fn get_group(&self) -> Option<(GroupId, GroupKind)> {
        self.group
    }
}
