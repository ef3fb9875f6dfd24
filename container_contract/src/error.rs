#[cfg(feature = "std")]
use thiserror::Error;

/// Returned by [`remove`](crate::Container::remove) and
/// [`peek`](crate::Container::peek) when the container holds nothing.
///
/// This is the only failure the contract knows about.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("container is empty"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyContainerError;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for EmptyContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "container is empty")
    }
}
