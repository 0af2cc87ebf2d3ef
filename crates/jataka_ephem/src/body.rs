//! Queryable ephemeris bodies.

/// Bodies the gateway can be asked for directly.
///
/// Ketu is deliberately absent: it is always synthesized from the node
/// position by the position resolver, never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Mean lunar ascending node.
    MeanNode,
    /// Osculating (true) lunar ascending node.
    TrueNode,
}

/// All directly queryable bodies, in chart resolution order.
pub const ALL_QUERY_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::MeanNode,
    Body::TrueNode,
];

impl Body {
    /// Name used in error messages and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::MeanNode => "MeanNode",
            Self::TrueNode => "TrueNode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_nonempty() {
        for b in ALL_QUERY_BODIES {
            assert!(!b.name().is_empty());
        }
    }

    #[test]
    fn ketu_not_queryable() {
        // The queryable set is 7 planets + 2 node variants; no Ketu.
        assert_eq!(ALL_QUERY_BODIES.len(), 9);
        assert!(!ALL_QUERY_BODIES.iter().any(|b| b.name() == "Ketu"));
    }
}
