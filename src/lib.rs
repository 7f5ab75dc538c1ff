//! A library for sketching directed influence graphs (promote/inhibit edges between
//! named variables) and turning them into systems of ordinary differential equations.
//!
//! The main workflow is: build an [InfluenceGraph] (programmatically or from its
//! string notation), call [InfluenceGraph::synthesize] to obtain an [EquationSet]
//! (one ordered list of [Term]s per variable, with densely numbered parameter
//! symbols), and then [EquationSet::simulate] to integrate the system with an
//! explicit Euler stepper, producing a [TimeSeries] for plotting.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// **(internal)** Utility methods for `Effect`.
mod _impl_effect;
/// **(internal)** `EquationSet` accessors and the per-variable derivative.
mod _impl_equation_set;
/// **(internal)** `EquationSet` to human-readable equation strings.
mod _impl_equation_set_display;
/// **(internal)** Numeric evaluation of individual `Term`s.
mod _impl_evaluate;
/// **(internal)** Utility methods for `GroupId`.
mod _impl_group_id;
/// **(internal)** Utility methods for `Influence`.
mod _impl_influence;
/// **(internal)** Construction and structural queries of `InfluenceGraph`.
mod _impl_influence_graph;
/// **(internal)** `InfluenceGraph` back to its string notation.
mod _impl_influence_graph_display;
/// **(internal)** Utility methods for `InfluenceId`.
mod _impl_influence_id;
/// **(internal)** `Parameters` and `InitialConditions` registries.
mod _impl_parameters;
/// **(internal)** The explicit Euler stepper and `TimeSeries` accessors.
mod _impl_simulation;
/// **(internal)** Utility methods for `Symbol`.
mod _impl_symbol;
/// **(internal)** Full rebuild of an `EquationSet` from an `InfluenceGraph`.
mod _impl_synthesis;
/// **(internal)** Utility methods for `Term`.
mod _impl_term;
/// **(internal)** Utility methods for `Variable`.
mod _impl_variable;
/// **(internal)** Utility methods for `VariableId`.
mod _impl_variable_id;
/// **(internal)** Implements the string notation parser for `InfluenceGraph` objects.
mod parser;

lazy_static! {
    /// A regex which describes valid variable names.
    static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// A type-safe index of a `Variable` inside an `InfluenceGraph`.
///
/// Ids are slot indices: they are assigned in insertion order and remain valid
/// across removals of other variables (vacated slots are never reused).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VariableId(usize);

/// A type-safe index of an `Influence` inside an `InfluenceGraph`.
///
/// Like `VariableId`, influence ids stay stable across removals, which keeps
/// `Endpoint` references of other influences valid.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InfluenceId(usize);

/// A type-safe identifier of a group of influences that combine into a single
/// contribution (see `GroupKind`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GroupId(usize);

/// The effect of an `Influence` on its target: promotion (production) or
/// inhibition (degradation).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Effect {
    Promote,
    Inhibit,
}

/// How the members of a group of influences combine into one contribution.
///
/// `And` groups multiply their members' values, `Or` groups sum them. Only `And`
/// groups are produced by the string notation; `Or` is available through
/// `InfluenceGraph::group_influences`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GroupKind {
    And,
    Or,
}

/// One endpoint of an `Influence`: either a `Variable`, or another `Influence`
/// (an "arrow-to-arrow" edge, modeling a regulator that gates a regulation
/// rather than a variable directly).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endpoint {
    Variable(VariableId),
    Influence(InfluenceId),
}

/// A variable of an `InfluenceGraph`.
///
/// A variable is identified by its name, which is unique within the graph.
/// Its numeric state during simulation lives outside the graph.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    name: String,
}

/// A directed edge of an `InfluenceGraph` expressing that `source` promotes or
/// inhibits `target`.
///
/// Both endpoints may be other influences. A target chain must resolve to a
/// variable after finitely many hops; the graph API maintains this by
/// construction, since endpoints are fixed at creation and can only reference
/// influences that already exist, so a reference cycle cannot be formed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Influence {
    source: Endpoint,
    target: Endpoint,
    effect: Effect,
    group: Option<(GroupId, GroupKind)>,
}

/// A user-sketched influence graph: named variables, typed directed influences
/// between them, and per-variable constant source/degradation toggles.
///
/// The graph is the single source of truth of the model; the `EquationSet` is a
/// projection fully rebuilt by `synthesize` after every edit.
///
/// A graph can be described using a simple line-oriented string notation where
/// each line is an influence or a comment (starting with `#`):
///
/// ```text
///  # A drives B, B suppresses itself
///  A -> B
///  B -| B
///
///  # constant source into A, C and D jointly required for B
///  -> A
///  C & D -> B
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InfluenceGraph {
    variables: Vec<Option<Variable>>,
    influences: Vec<Option<Influence>>,
    constants: Vec<(VariableId, Effect)>,
    variable_to_index: FxHashMap<String, VariableId>,
    next_group: usize,
}

/// A symbol naming one synthesized parameter: a coefficient `c_n` or a
/// rate ("Michaelis-type") constant `k_n`.
///
/// Symbols are numbered densely in synthesis traversal order, so they are only
/// stable as long as the graph does not change.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    Coefficient(u32),
    RateConstant(u32),
}

/// One synthesized contribution to the rate equation of `target`.
///
/// `source` is the resolved driver variable (`None` for constant terms). For an
/// influence whose source was itself an influence, the driver is the start
/// variable of that upstream influence, preserving the "upstream regulator gates
/// downstream regulation" semantics.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Term {
    source: Option<VariableId>,
    target: VariableId,
    effect: Effect,
    is_constant: bool,
    group: Option<(GroupId, GroupKind)>,
    coefficient: Symbol,
    rate_constant: Option<Symbol>,
}

/// **(internal)** The synthesized equation of one variable: its ordered terms.
#[derive(Clone, Debug, Eq, PartialEq)]
struct EquationEntry {
    variable: VariableId,
    name: String,
    terms: Vec<Term>,
}

/// The full synthesized equation system: for every variable of the graph, in
/// insertion order, an ordered list of `Term`s (possibly empty).
///
/// Two calls to `InfluenceGraph::synthesize` on an unchanged graph produce
/// equal `EquationSet`s, including identical symbol numbering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EquationSet {
    entries: Vec<EquationEntry>,
}

/// A registry of user-supplied numeric values for synthesized `Symbol`s.
///
/// Any symbol without an explicit value defaults to `1.0`. Entries are never
/// pruned, so values survive re-synthesis (and may go stale if the term they
/// belonged to disappears).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    values: FxHashMap<Symbol, f64>,
}

/// A registry of user-supplied initial values, keyed by variable name.
///
/// Any variable without an explicit value starts at `1.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialConditions {
    values: FxHashMap<String, f64>,
}

/// The result of one simulation run: the time grid and, for every variable, the
/// computed trajectory.
///
/// Each trajectory has `num_steps + 1` values; index zero is the initial
/// condition. Values are clamped at zero, so a trajectory never goes negative.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    dt: f64,
    names: Vec<String>,
    series: Vec<Vec<f64>>,
}
