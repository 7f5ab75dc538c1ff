use crate::InfluenceId;
use std::fmt::{Display, Error, Formatter};

impl From<usize> for InfluenceId {
    fn from(val: usize) -> Self {
        InfluenceId(val)
    }
}

impl From<InfluenceId> for usize {
    fn from(value: InfluenceId) -> Self {
        value.0
    }
}

impl Display for InfluenceId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Influence({})", self.0)
    }
}

impl InfluenceId {
    pub(crate) fn to_index(self) -> usize {
        self.0
    }
}
