use crate::Effect;

mod from_string_influence_temp;
mod impl_influence_graph;

/// **(internal)** A helper struct for representing parsed influence lines that
/// have not been integrated into an `InfluenceGraph` yet.
///
/// An empty `sources` vector represents a constant toggle line (`-> B`);
/// more than one source represents an AND group (`A & B -> C`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct InfluenceTemp {
    sources: Vec<String>,
    target: String,
    effect: Effect,
}
