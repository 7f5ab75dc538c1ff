use crate::parser::InfluenceTemp;
use crate::Effect;
use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;

lazy_static! {
    /// A regex which matches one influence line: an optional `&`-separated
    /// source list, an arrow (`->` or `-|`) and a target name.
    static ref INFLUENCE_REGEX: Regex = Regex::new(
        r"^(?P<sources>[a-zA-Z0-9_]+(\s*&\s*[a-zA-Z0-9_]+)*)?\s*(?P<arrow>->|-\|)\s*(?P<target>[a-zA-Z0-9_]+)$"
    )
    .unwrap();
}

impl TryFrom<&str> for InfluenceTemp {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let captures = INFLUENCE_REGEX
            .captures(value.trim())
            .ok_or(format!("String \"{}\" is not a valid influence.", value))?;
        let effect = match &captures["arrow"] {
            "->" => Effect::Promote,
            _ => Effect::Inhibit,
        };
        let sources = match captures.name("sources") {
            None => Vec::new(),
            Some(sources) => sources
                .as_str()
                .split('&')
                .map(|name| name.trim().to_string())
                .collect(),
        };
        Ok(InfluenceTemp {
            sources,
            target: captures["target"].to_string(),
            effect,
        })
    }
}
