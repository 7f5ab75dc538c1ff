use crate::Effect;
use std::fmt::{Display, Error, Formatter};

impl Effect {
    /// The arrow used for this effect in the string notation (`->` or `-|`).
    pub fn arrow(self) -> &'static str {
        match self {
            Effect::Promote => "->",
            Effect::Inhibit => "-|",
        }
    }

    /// The sign this effect contributes with: `1.0` for promotion, `-1.0`
    /// for inhibition.
    pub fn sign(self) -> f64 {
        match self {
            Effect::Promote => 1.0,
            Effect::Inhibit => -1.0,
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Effect::Promote => write!(f, "promote"),
            Effect::Inhibit => write!(f, "inhibit"),
        }
    }
}
