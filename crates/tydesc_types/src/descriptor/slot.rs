//! Stable handles to child descriptors.
//!
//! Composite builders hand out a `Slot` for every child they append.
//! Replacement goes through the slot, so it always targets that exact
//! occurrence even when structurally equal children sit elsewhere in the
//! same sequence. Children are never removed, so a slot stays valid for the
//! life of its container.

use std::fmt;

/// Position of one child occurrence inside a composite descriptor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Slot(u32);

impl Slot {
    /// Slot of the child at `index`, for children passed to a constructor.
    ///
    /// # Panics
    /// Panics if `index` does not fit in 32 bits.
    #[inline]
    pub fn at(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => Slot(raw),
            Err(_) => panic!("child index {index} exceeds slot range"),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

// Slot is a bare u32
const _: () = assert!(std::mem::size_of::<Slot>() == 4);
