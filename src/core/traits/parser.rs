use crate::core::errors::Result;
use crate::core::models::key::Key;

/// Port for turning textual key material into a [`Key`].
///
/// `KeyListParser` is the only implementation; the trait keeps the core
/// independent of how keys are written down.
pub trait KeyParser: Send + Sync {
    /// Parse raw key text. `source_name` is used in error messages.
    fn parse(&self, content: &str, source_name: &str) -> Result<Key>;
}
