//! Input collaborator

use std::collections::HashSet;

use glam::Vec2;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    /// Primary fire (edge-triggered use)
    Space,
    /// Secondary fire, the mouse button (level-triggered use)
    Mouse,
}

/// Snapshot of player input, queried synchronously during a frame
pub trait Input {
    /// Key is currently down
    fn is_key_held(&self, key: Key) -> bool;
    /// Key went down since the previous frame
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Pointer position in world units
    fn pointer(&self) -> Vec2;
}

/// Plain-data input for one frame
///
/// The driver is responsible for clearing `pressed` between frames, the same
/// way a real keyboard layer reports a press only once.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub held: HashSet<Key>,
    pub pressed: HashSet<Key>,
    pub pointer: Vec2,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Press implies held for this frame
    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    pub fn point_at(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    /// Drop one-shot presses after a frame has consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl Input for ScriptedInput {
    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }
}
