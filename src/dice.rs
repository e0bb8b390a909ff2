use std::cell::{Cell, RefCell};

use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DEFAULT_FACES: u32 = 6;

/// A die the game rolls. Faces are positive; the game only ever sums them.
pub trait Die {
    fn roll(&self) -> u32;
}

#[derive(Debug)]
pub struct RandomDie {
    faces: u32,
    rng: RefCell<StdRng>,
}

impl RandomDie {
    pub fn new(seed: u64) -> Self {
        Self::with_faces(DEFAULT_FACES, seed)
    }

    pub fn with_faces(faces: u32, seed: u64) -> Self {
        assert!(faces > 0, "a die needs at least one face");
        Self {
            faces,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }
}

impl Die for RandomDie {
    fn roll(&self) -> u32 {
        self.rng.borrow_mut().gen_range(1..=self.faces)
    }
}

/// Cycles through a fixed sequence of faces. Useful for scripted games.
#[derive(Debug, Clone)]
pub struct LoadedDie {
    faces: Vec<u32>,
    cursor: Cell<usize>,
}

impl LoadedDie {
    pub fn new(faces: Vec<u32>) -> Self {
        assert!(!faces.is_empty(), "a loaded die needs at least one face");
        Self {
            faces,
            cursor: Cell::new(0),
        }
    }

    pub fn always(face: u32) -> Self {
        Self::new(vec![face])
    }

    pub fn rolls(&self) -> usize {
        self.cursor.get()
    }
}

impl Die for LoadedDie {
    fn roll(&self) -> u32 {
        let cursor = self.cursor.get();
        self.cursor.set(cursor + 1);
        self.faces[cursor % self.faces.len()]
    }
}
