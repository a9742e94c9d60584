//! Transaction composition boundary.
//!
//! State-changing operations never sign or submit anything from this
//! crate. They build a [`CallDescriptor`] — pallet, call name, positional
//! arguments — and hand it to the [`CallComposer`] collaborator, which
//! owns signing, submission, and the whole transaction lifecycle.
//!
//! The accessors guarantee that a failed read never reaches composition:
//! when an enumeration or decode step errors, no call descriptor is built
//! and no identifier is consumed.

use bytes::Bytes;

use crate::error::Result;

/// One positional argument of a pallet call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// A collection or item identifier.
    Id(u32),
    /// An account reference.
    Account(String),
    /// An optional account reference.
    OptionalAccount(Option<String>),
    /// An opaque byte payload.
    Bytes(Bytes),
    /// A balance amount.
    Amount(u128),
    /// An optional balance amount.
    OptionalAmount(Option<u128>),
    /// A boolean flag.
    Bool(bool),
}

/// An unsigned, unsubmitted pallet call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    /// Pallet the call targets.
    pub pallet: String,
    /// Call name within the pallet.
    pub name: String,
    /// Positional call arguments.
    pub args: Vec<CallArg>,
}

impl CallDescriptor {
    /// Creates a call descriptor.
    #[must_use]
    pub fn new(pallet: impl Into<String>, name: impl Into<String>, args: Vec<CallArg>) -> Self {
        Self { pallet: pallet.into(), name: name.into(), args }
    }
}

impl std::fmt::Display for CallDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}({} args)", self.pallet, self.name, self.args.len())
    }
}

/// Composes pallet calls for signing and submission.
///
/// Implementations wrap whatever transaction machinery the host
/// application uses. Composition is synchronous: the descriptor is fully
/// known by the time this is called, and actual submission happens on the
/// composer's side of the boundary.
pub trait CallComposer: Send + Sync {
    /// Accepts a call for composition.
    ///
    /// # Errors
    ///
    /// Returns [`UniquesError::Compose`](crate::UniquesError::Compose)
    /// when the call cannot be composed (unknown call, closed session).
    fn compose(&self, call: CallDescriptor) -> Result<()>;
}

/// [`CallComposer`] that records every composed call.
///
/// Intended for tests: assertions can inspect exactly which calls an
/// operation produced, and in what order.
#[derive(Debug, Default)]
pub struct RecordingComposer {
    calls: parking_lot::Mutex<Vec<CallDescriptor>>,
}

impl RecordingComposer {
    /// Creates an empty recording composer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded calls, in composition order.
    #[must_use]
    pub fn calls(&self) -> Vec<CallDescriptor> {
        self.calls.lock().clone()
    }

    /// Number of calls composed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether no call has been composed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl CallComposer for RecordingComposer {
    fn compose(&self, call: CallDescriptor) -> Result<()> {
        self.calls.lock().push(call);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_composer_captures_order() {
        let composer = RecordingComposer::new();
        composer
            .compose(CallDescriptor::new("uniques", "create", vec![CallArg::Id(0)]))
            .unwrap();
        composer
            .compose(CallDescriptor::new("uniques", "mint", vec![CallArg::Id(0), CallArg::Id(1)]))
            .unwrap();

        let calls = composer.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "create");
        assert_eq!(calls[1].name, "mint");
    }

    #[test]
    fn test_descriptor_display() {
        let call = CallDescriptor::new("uniques", "transfer", vec![CallArg::Id(1), CallArg::Id(2)]);
        assert_eq!(call.to_string(), "uniques::transfer(2 args)");
    }
}
