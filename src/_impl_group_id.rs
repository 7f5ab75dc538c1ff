use crate::GroupId;
use std::fmt::{Display, Error, Formatter};

impl From<usize> for GroupId {
    fn from(val: usize) -> Self {
        GroupId(val)
    }
}

impl From<GroupId> for usize {
    fn from(value: GroupId) -> Self {
        value.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Group({})", self.0)
    }
}
