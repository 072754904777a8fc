//! The closed tag vocabulary shared by the encoder and decoder.
//!
//! Every node on the wire is a JSON object carrying a `_type` discriminator
//! from this set and (except for `none`) a `value` payload. The set is
//! closed: tags are never resolved from arbitrary runtime strings, only
//! looked up against this enum.

/// Key holding the type discriminator on every tagged node.
pub const TYPE_KEY: &str = "_type";

/// Key holding the payload on every tagged node except `none`.
pub const VALUE_KEY: &str = "value";

/// A `_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Absence of a value; the node carries no `value` key.
    None,
    /// Text, payload is a JSON string.
    Str,
    /// Integer, payload is an integral JSON number.
    Int,
    /// Floating point, payload is a JSON number. The tag is the only thing
    /// distinguishing it from `int` on the wire.
    Float,
    /// Boolean, payload is a JSON bool.
    Bool,
    /// Ordered string-keyed map, payload is a JSON object of tagged nodes.
    Dict,
    /// Ordered sequence, payload is a JSON array of tagged nodes.
    List,
    /// Unordered unique collection, payload is a JSON array of tagged nodes
    /// in no guaranteed order.
    Set,
    /// Immutable unordered unique collection, same payload shape as `set`.
    FrozenSet,
    /// Fixed-arity ordered sequence, same payload shape as `list`.
    Tuple,
    /// Arbitrary-precision decimal, payload is the exact decimal text as a
    /// JSON string.
    Decimal,
    /// UTC instant, payload is fractional POSIX seconds as a JSON number.
    DateTime,
    /// Immutable string-keyed map, same payload shape as `dict`.
    #[cfg(feature = "frozendict")]
    FrozenDict,
}

impl Tag {
    /// Every tag in the vocabulary.
    pub const ALL: &'static [Tag] = &[
        Tag::None,
        Tag::Str,
        Tag::Int,
        Tag::Float,
        Tag::Bool,
        Tag::Dict,
        Tag::List,
        Tag::Set,
        Tag::FrozenSet,
        Tag::Tuple,
        Tag::Decimal,
        Tag::DateTime,
        #[cfg(feature = "frozendict")]
        Tag::FrozenDict,
    ];

    /// The wire string for this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::None => "none",
            Tag::Str => "str",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Bool => "bool",
            Tag::Dict => "dict",
            Tag::List => "list",
            Tag::Set => "set",
            Tag::FrozenSet => "frozenset",
            Tag::Tuple => "tuple",
            Tag::Decimal => "decimal",
            Tag::DateTime => "datetime",
            #[cfg(feature = "frozendict")]
            Tag::FrozenDict => "frozendict",
        }
    }

    /// Look a wire string up in the vocabulary. `None` for anything outside
    /// it, including `"frozendict"` when that capability is compiled out.
    pub fn from_str(s: &str) -> Option<Tag> {
        match s {
            "none" => Some(Tag::None),
            "str" => Some(Tag::Str),
            "int" => Some(Tag::Int),
            "float" => Some(Tag::Float),
            "bool" => Some(Tag::Bool),
            "dict" => Some(Tag::Dict),
            "list" => Some(Tag::List),
            "set" => Some(Tag::Set),
            "frozenset" => Some(Tag::FrozenSet),
            "tuple" => Some(Tag::Tuple),
            "decimal" => Some(Tag::Decimal),
            "datetime" => Some(Tag::DateTime),
            #[cfg(feature = "frozendict")]
            "frozendict" => Some(Tag::FrozenDict),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
