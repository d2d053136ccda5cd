//! The [`LevelArena`] rolling buffer orchestrator.
//!
//! Three same-shaped slots alternate between the roles "previous"
//! (level n-1), "current" (level n), and "write" (level n+1 under
//! construction). The lifecycle per step is:
//!
//! 1. [`LevelArena::slots`] — split-borrow the two read levels and the
//!    write target
//! 2. The stepper fills the write target
//! 3. [`LevelArena::rotate`] — the written level becomes current, the
//!    old current becomes previous, the old previous becomes the next
//!    write target
//!
//! Rotation reassigns slot indices only; field data never moves.

use seiche_core::Field2;

/// Logical role of a slot at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The solution two rotations ago, level `n-1`.
    Previous,
    /// The most recently completed level, `n`.
    Current,
    /// The level being computed, `n+1`.
    Write,
}

/// Split borrows of the three slots for one step.
///
/// Exactly one slot is writable; the two read levels are shared
/// borrows, so a stepper cannot write into its own inputs.
pub struct StepSlots<'a> {
    /// Level `n-1`, read-only.
    pub previous: &'a Field2,
    /// Level `n`, read-only.
    pub current: &'a Field2,
    /// Level `n+1`, the write target.
    pub write: &'a mut Field2,
}

/// Three fixed-shape slots with a rotating role permutation.
pub struct LevelArena {
    buffers: [Field2; 3],
    previous: usize,
    current: usize,
    write: usize,
}

impl LevelArena {
    /// Create an arena of three zero-filled `(rows, cols)` slots.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            buffers: [
                Field2::zeros(rows, cols),
                Field2::zeros(rows, cols),
                Field2::zeros(rows, cols),
            ],
            previous: 0,
            current: 1,
            write: 2,
        }
    }

    /// Shape shared by all three slots.
    pub fn shape(&self) -> (usize, usize) {
        self.buffers[0].shape()
    }

    /// Overwrite the current slot with `f(i, j)` and zero the other two.
    ///
    /// This is the level-0 seeding step; the previous slot is unused by
    /// the special first step (its coefficient is zero) but a stale
    /// value must not survive a re-run.
    pub fn seed_with(&mut self, f: impl FnMut(usize, usize) -> f64) {
        self.buffers[self.previous].fill(0.0);
        self.buffers[self.write].fill(0.0);
        self.buffers[self.current].fill_with(f);
    }

    /// The slot currently holding level `n`.
    pub fn current(&self) -> &Field2 {
        &self.buffers[self.current]
    }

    /// The slot currently holding level `n-1`.
    pub fn previous(&self) -> &Field2 {
        &self.buffers[self.previous]
    }

    /// Read view of the most recently written slot.
    ///
    /// Valid between a stepper filling the write target and the
    /// following [`rotate`](Self::rotate); this is the freshly
    /// completed level an observer sees.
    pub fn written(&self) -> &Field2 {
        &self.buffers[self.write]
    }

    /// Split-borrow the three slots for one step.
    pub fn slots(&mut self) -> StepSlots<'_> {
        let [a, b, c] = &mut self.buffers;
        let mut parts = [Some(a), Some(b), Some(c)];
        let write = parts[self.write].take().expect("roles are distinct");
        let previous: &Field2 = parts[self.previous].take().expect("roles are distinct");
        let current: &Field2 = parts[self.current].take().expect("roles are distinct");
        StepSlots {
            previous,
            current,
            write,
        }
    }

    /// Rotate the role permutation after a completed step.
    ///
    /// write → current, current → previous, previous → write. No data
    /// is copied; after any number of rotations the roles still map to
    /// a permutation of the original three slots.
    pub fn rotate(&mut self) {
        let retired = self.previous;
        self.previous = self.current;
        self.current = self.write;
        self.write = retired;
    }

    /// Index of the slot currently filling `role`.
    ///
    /// Exposed for tests asserting the no-copy rotation invariant.
    pub fn slot_index(&self, role: Role) -> usize {
        match role {
            Role::Previous => self.previous,
            Role::Current => self.current,
            Role::Write => self.write,
        }
    }

    /// Heap memory held by the three slots, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffers.iter().map(Field2::memory_bytes).sum()
    }
}

impl std::fmt::Debug for LevelArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelArena")
            .field("shape", &self.shape())
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("write", &self.write)
            .finish()
    }
}
