//! Generic per-method behaviour classification for synthetic instances.
//!
//! A method is classified from its name and declared result shape alone.
//! The classification decides what a synthetic stand-in answers:
//!
//! | Classification  | Synthetic result                         |
//! |-----------------|------------------------------------------|
//! | `BooleanQuery`  | `true` for access checks, else `false`   |
//! | `SingleQuery`   | no value present                         |
//! | `MultiQuery`    | empty sequence                           |
//! | `Mutation`      | `CapabilityUnavailable`                  |
//! | `Unclassified`  | `CapabilityUnavailable`                  |

use super::{ContractId, MethodSignature, ParamRole, ReturnShape};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Leading name words that mark a state-changing method.
const MUTATING_VERBS: [&str; 19] = [
    "create", "update", "delete", "store", "grant", "revoke", "send", "void", "archive", "save",
    "remove", "put", "upload", "move", "copy", "restore", "cancel", "set", "add",
];

/// Leading name words that mark a yes/no query.
const BOOLEAN_VERBS: [&str; 4] = ["exists", "is", "has", "can"];

/// Behaviour class of a contract method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodClassification {
    /// Yes/no query answered with a fixed default.
    BooleanQuery {
        /// Answer returned by the synthetic instance.
        default: bool,
    },
    /// Lookup of at most one element.
    SingleQuery,
    /// Lookup of any number of elements.
    MultiQuery,
    /// State-changing operation.
    Mutation,
    /// No rule matched; handled like a mutation.
    Unclassified,
}

impl MethodClassification {
    /// Returns the canonical label used in observability events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BooleanQuery { .. } => "boolean_query",
            Self::SingleQuery => "single_query",
            Self::MultiQuery => "multi_query",
            Self::Mutation => "mutation",
            Self::Unclassified => "unclassified",
        }
    }

    /// Returns the successful outcome for this class, if it has one.
    ///
    /// Mutations and unclassified methods have none: they always fail.
    #[must_use]
    pub const fn outcome(self) -> Option<FallbackOutcome> {
        match self {
            Self::BooleanQuery { default } => Some(FallbackOutcome::Flag(default)),
            Self::SingleQuery => Some(FallbackOutcome::Absent),
            Self::MultiQuery => Some(FallbackOutcome::Empty),
            Self::Mutation | Self::Unclassified => None,
        }
    }
}

impl fmt::Display for MethodClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful result a synthetic instance can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackOutcome {
    /// No value present.
    Absent,
    /// An empty sequence.
    Empty,
    /// A fixed boolean answer.
    Flag(bool),
}

/// Classifies one method signature.
///
/// Rules are applied in order: a mutating leading verb, then a payload as
/// first parameter, then a boolean leading verb on a boolean result, then
/// the result shape. Anything left over is [`MethodClassification::Unclassified`].
#[must_use]
pub fn classify(signature: &MethodSignature) -> MethodClassification {
    let words = name_words(signature.name());
    let verb = words.first().map_or("", String::as_str);

    if MUTATING_VERBS.contains(&verb) {
        return MethodClassification::Mutation;
    }

    let payload_first = signature
        .params()
        .first()
        .is_some_and(|param| param.role() == ParamRole::Payload);
    if payload_first {
        return MethodClassification::Mutation;
    }

    match signature.returns() {
        ReturnShape::Boolean if BOOLEAN_VERBS.contains(&verb) => {
            MethodClassification::BooleanQuery {
                default: is_access_check(&words),
            }
        }
        ReturnShape::Optional => MethodClassification::SingleQuery,
        ReturnShape::Sequence => MethodClassification::MultiQuery,
        ReturnShape::Boolean | ReturnShape::Unit | ReturnShape::Value => {
            MethodClassification::Unclassified
        }
    }
}

/// Access checks fail open so a missing security adapter never blocks work.
fn is_access_check(words: &[String]) -> bool {
    words
        .iter()
        .any(|word| word == "can" || word.contains("access") || word.contains("permission"))
}

/// Splits `snake_case` and `camelCase` names into lowercase words.
fn name_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut after_lower = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            after_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && after_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch.to_ascii_lowercase());
        after_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Classification of every method of one contract.
///
/// Built once per contract and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    contract: ContractId,
    methods: HashMap<&'static str, MethodClassification>,
}

impl ClassificationTable {
    /// Classifies every signature of a contract.
    #[must_use]
    pub fn build(contract: ContractId, signatures: &[MethodSignature]) -> Self {
        let methods = signatures
            .iter()
            .map(|signature| (signature.name(), classify(signature)))
            .collect();
        Self { contract, methods }
    }

    /// Returns the contract the table describes.
    #[must_use]
    pub const fn contract(&self) -> ContractId {
        self.contract
    }

    /// Returns the classification of `method`.
    ///
    /// Methods missing from the contract are [`MethodClassification::Unclassified`].
    #[must_use]
    pub fn classification(&self, method: &str) -> MethodClassification {
        self.methods
            .get(method)
            .copied()
            .unwrap_or(MethodClassification::Unclassified)
    }

    /// Returns the number of classified methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns whether the contract declares no methods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterates `(method, classification)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, MethodClassification)> + '_ {
        self.methods.iter().map(|(name, class)| (*name, *class))
    }
}
