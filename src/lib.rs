pub use crate::errors::{CombinatorialError, DeclarationError, RangeError};
pub use crate::humanize::{humanize, Humanize};
pub use crate::naming::{compute_display_name, display_name_of, ParameterShape};
pub use crate::provider::{CombinatorialRange, CombinatorialValues, ValuesProvider};
pub use crate::range::{RangeSpec, SignedRange, UnsignedRange};
pub use crate::value::{Argument, ValueSet};

pub mod declaration;
pub mod errors;
pub mod humanize;
pub mod naming;
pub mod provider;
pub mod range;
pub mod value;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<RangeSpec>();
        assert_send_sync::<ValueSet>();
        assert_send_sync::<Argument>();
        assert_send_sync::<CombinatorialRange>();
        assert_send_sync::<CombinatorialValues>();
        assert_send_sync::<declaration::ResolvedMethod>();
        assert_send_sync::<CombinatorialError>();
    }
}
