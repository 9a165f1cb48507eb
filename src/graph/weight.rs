use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// Integer edge weight usable in a dense weight matrix
///
/// Zero is reserved for "no edge". Signed types are accepted so matrices can be
/// written with plain integer literals, but negative cells are rejected when a
/// matrix is validated.
pub trait Weight: PrimInt + Debug + Display + Send + Sync + 'static {
    /// Sentinel distance for vertices with no known path yet
    const INFINITY: Self;

    /// Returns true if this value encodes an edge
    fn is_edge(self) -> bool {
        self != Self::zero()
    }

    /// Returns true if this value is below zero
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::MAX;
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, usize, i32, i64);
