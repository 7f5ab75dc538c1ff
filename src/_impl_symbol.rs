use crate::Symbol;
use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

lazy_static! {
    /// A regex which matches the string form of a `Symbol` (`c_3`, `k_2`, ...).
    static ref SYMBOL_REGEX: Regex = Regex::new(r"^(?P<kind>[ck])_(?P<index>[0-9]+)$").unwrap();
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Symbol::Coefficient(index) => write!(f, "c_{}", index),
            Symbol::RateConstant(index) => write!(f, "k_{}", index),
        }
    }
}

impl TryFrom<&str> for Symbol {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let captures = SYMBOL_REGEX
            .captures(value.trim())
            .ok_or(format!("String \"{}\" is not a valid symbol.", value))?;
        let index: u32 = captures["index"]
            .parse()
            .map_err(|_| format!("Symbol index in \"{}\" is out of range.", value))?;
        match &captures["kind"] {
            "c" => Ok(Symbol::Coefficient(index)),
            _ => Ok(Symbol::RateConstant(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Symbol;
    use std::convert::TryFrom;

    #[test]
    fn symbol_string_round_trip() {
        assert_eq!("c_3", Symbol::Coefficient(3).to_string());
        assert_eq!("k_12", Symbol::RateConstant(12).to_string());
        assert_eq!(Symbol::try_from("c_3"), Ok(Symbol::Coefficient(3)));
        assert_eq!(Symbol::try_from(" k_12 "), Ok(Symbol::RateConstant(12)));
        assert!(Symbol::try_from("x_1").is_err());
        assert!(Symbol::try_from("c_").is_err());
    }
}
