use std::cell::Cell;

use uuid::Uuid;

use crate::utils::CheapClone;

/// The lifetime of one mount, from attachment to teardown.
///
/// A scope hands out [`MountToken`]s; dropping the scope bumps its generation, which
/// invalidates every token taken before. Since it happens in `Drop`, every exit path of the
/// owning view tears the scope down exactly once.
#[derive(Debug)]
pub struct MountScope {
    id: Uuid,
    generation: CheapClone<Cell<u64>>,
}

/// A snapshot of a [`MountScope`], checked before committing anything to a view that may
/// already be gone.
#[derive(Debug, Clone)]
pub struct MountToken {
    id: Uuid,
    taken_at: u64,
    generation: CheapClone<Cell<u64>>,
}

impl MountScope {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: CheapClone::new(Cell::new(0)),
        }
    }

    /// Identifies the mount in log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            id: self.id,
            taken_at: self.generation.get(),
            generation: self.generation.clone(),
        }
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        log::trace!("mount {} torn down", self.id);
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl MountToken {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// `false` once the scope the token was taken from has been torn down.
    pub fn is_live(&self) -> bool {
        self.generation.get() == self.taken_at
    }
}
