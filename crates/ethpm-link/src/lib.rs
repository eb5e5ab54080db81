//! ethpm-link - Bytecode linking model for EthPM v2 manifests
//!
//! This crate describes where library placeholders live inside compiled
//! bytecode and what fills them:
//! - [`LinkReference`] - a named placeholder location (length + offsets)
//! - [`LinkValue`] - the literal or referenced value written into placeholders
//! - [`UnlinkedBytecode`] / [`LinkedBytecode`] - bytecode plus its link data
//! - [`StandardJsonBytecode`] - the compiler's `evm.bytecode` output object
//!
//! Every offset and length is measured in bytes into the `0x`-prefixed hex
//! bytecode string, so byte `n` occupies characters `2 + 2n .. 4 + 2n`.

mod bytecode;
mod compiler_output;
mod link_reference;
mod link_value;
mod overlap;

pub use bytecode::{LinkedBytecode, UnlinkedBytecode};
pub use compiler_output::{StandardJsonBytecode, zero_link_locations};
pub use link_reference::{CompilerLinkOffset, LinkReference};
pub use link_value::{LinkTarget, LinkValue};
pub use overlap::check_no_overlap;

/// Resolved byte lengths keyed by `reference`-typed link value strings.
pub type DependencyLengths = std::collections::BTreeMap<String, usize>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DependencyLengths, LinkReference, LinkTarget, LinkValue, LinkedBytecode,
        StandardJsonBytecode, UnlinkedBytecode,
    };
}
