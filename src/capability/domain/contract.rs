//! Introspectable shape of a capability contract.
//!
//! A contract describes itself as a list of [`MethodSignature`] values. The
//! list is produced by the `capability_contract!` macro from the contract's
//! own method declarations, so no per-contract fallback code is written by
//! hand.

use super::FallbackOutcome;
use std::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

/// Identity of a capability contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractId {
    type_id: TypeId,
    name: &'static str,
}

impl ContractId {
    /// Creates the identifier for contract type `C`.
    #[must_use]
    pub fn of<C: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name,
        }
    }

    /// Returns the contract's Rust type identifier.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the contract's declared name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared result shape of a contract method.
///
/// Failures are not a shape: every contract method returns a `Result`, and
/// the shape describes its success value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    /// Zero or one element (`Option<T>`).
    Optional,
    /// Any number of elements (`Vec<T>`).
    Sequence,
    /// A yes/no answer.
    Boolean,
    /// No value (`()`).
    Unit,
    /// A plain value with no natural empty form.
    Value,
}

/// How a method parameter is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamRole {
    /// An identifier, filter, or other query input.
    Argument,
    /// Data the method is meant to persist.
    Payload,
}

/// A single method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamSpec {
    name: &'static str,
    type_name: &'static str,
    role: ParamRole,
}

impl ParamSpec {
    /// Creates a parameter description.
    #[must_use]
    pub const fn new(name: &'static str, type_name: &'static str, role: ParamRole) -> Self {
        Self {
            name,
            type_name,
            role,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameter's type as written in the contract.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the parameter role.
    #[must_use]
    pub const fn role(&self) -> ParamRole {
        self.role
    }
}

/// Signature of one contract method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    name: &'static str,
    params: Vec<ParamSpec>,
    returns: ReturnShape,
}

impl MethodSignature {
    /// Creates a method signature.
    #[must_use]
    pub const fn new(name: &'static str, params: Vec<ParamSpec>, returns: ReturnShape) -> Self {
        Self {
            name,
            params,
            returns,
        }
    }

    /// Returns the method name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameters in declaration order, excluding the receiver.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Returns the declared result shape.
    #[must_use]
    pub const fn returns(&self) -> ReturnShape {
        self.returns
    }
}

/// Success type of a contract method that a synthetic instance can produce.
///
/// Implemented for `Option`, the std collections, `bool`, `()` and the
/// primitive scalars. Plain value types (records a contract returns
/// directly) opt in with an empty impl, which gives them the
/// [`ReturnShape::Value`] shape: a synthetic instance never fabricates
/// such values and fails the call instead. Types from other crates need no
/// impl when the contract marks the return with `#[value]`.
pub trait FallbackReturn: Sized {
    /// Shape reported in the contract's method signatures.
    const SHAPE: ReturnShape = ReturnShape::Value;

    /// Converts a fallback outcome into this type.
    ///
    /// Returns `None` when the outcome does not fit the shape.
    #[must_use]
    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        let _ = outcome;
        None
    }
}

impl<T> FallbackReturn for Option<T> {
    const SHAPE: ReturnShape = ReturnShape::Optional;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Absent).then_some(None)
    }
}

impl<T> FallbackReturn for Vec<T> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Vec::new)
    }
}

impl FallbackReturn for bool {
    const SHAPE: ReturnShape = ReturnShape::Boolean;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        match outcome {
            FallbackOutcome::Flag(value) => Some(value),
            FallbackOutcome::Absent | FallbackOutcome::Empty => None,
        }
    }
}

impl FallbackReturn for () {
    const SHAPE: ReturnShape = ReturnShape::Unit;
}

impl<K, V, S: BuildHasher + Default> FallbackReturn for HashMap<K, V, S> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Self::default)
    }
}

impl<T, S: BuildHasher + Default> FallbackReturn for HashSet<T, S> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Self::default)
    }
}

impl<K, V> FallbackReturn for BTreeMap<K, V> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Self::new)
    }
}

impl<T> FallbackReturn for BTreeSet<T> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Self::new)
    }
}

impl<T> FallbackReturn for VecDeque<T> {
    const SHAPE: ReturnShape = ReturnShape::Sequence;

    fn from_outcome(outcome: FallbackOutcome) -> Option<Self> {
        matches!(outcome, FallbackOutcome::Empty).then(Self::new)
    }
}

/// Marks scalar types as plain values.
macro_rules! value_returns {
    ($($ty:ty),* $(,)?) => {
        $(impl FallbackReturn for $ty {})*
    };
}

value_returns!(
    String, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
