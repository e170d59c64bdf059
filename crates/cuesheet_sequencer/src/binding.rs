// SPDX-License-Identifier: MIT OR Apache-2.0
//! Binding of events and recordings to host-owned values.
//!
//! The host keeps a [`Target`] for every value it wants animated and hands
//! clones of it to the sequencer. Both sides share the same cell, so a value
//! written during playback is immediately visible to the host and a value the
//! host changes is what a recording captures.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an external scalar value
///
/// Equality is identity: two targets are the same when they share a cell,
/// regardless of the values they hold.
#[derive(Clone, Default)]
pub struct Target(Rc<Cell<f32>>);

impl Target {
    /// Create a new target holding `value`
    pub fn new(value: f32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    /// Read the current value
    pub fn get(&self) -> f32 {
        self.0.get()
    }

    /// Overwrite the current value
    pub fn set(&self, value: f32) {
        self.0.set(value);
    }

    /// Whether both handles refer to the same value
    pub fn same_as(&self, other: &Target) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Target {}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Target")
            .field(&Rc::as_ptr(&self.0))
            .field(&self.get())
            .finish()
    }
}

/// Number of scalar channels a track drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Single float
    Scalar,
    /// 2D vector
    Vec2,
    /// 3D vector
    Vec3,
    /// 4D vector
    Vec4,
}

impl Arity {
    /// Channel count
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
        }
    }

    /// Component names, in channel order
    pub fn component_names(&self) -> &'static [&'static str] {
        const NAMES: [&str; 4] = ["x", "y", "z", "w"];
        &NAMES[..self.channel_count()]
    }
}

/// The targets a track is declared over, one per channel
#[derive(Debug, Clone, PartialEq)]
pub enum Channels {
    /// Single float
    Scalar(Target),
    /// 2D vector
    Vec2([Target; 2]),
    /// 3D vector
    Vec3([Target; 3]),
    /// 4D vector
    Vec4([Target; 4]),
}

impl Channels {
    /// Arity tag of these channels
    pub fn arity(&self) -> Arity {
        match self {
            Self::Scalar(_) => Arity::Scalar,
            Self::Vec2(_) => Arity::Vec2,
            Self::Vec3(_) => Arity::Vec3,
            Self::Vec4(_) => Arity::Vec4,
        }
    }

    /// Targets in channel order
    pub fn targets(&self) -> &[Target] {
        match self {
            Self::Scalar(t) => std::slice::from_ref(t),
            Self::Vec2(t) => t,
            Self::Vec3(t) => t,
            Self::Vec4(t) => t,
        }
    }
}

impl From<Target> for Channels {
    fn from(target: Target) -> Self {
        Self::Scalar(target)
    }
}

impl From<&Target> for Channels {
    fn from(target: &Target) -> Self {
        Self::Scalar(target.clone())
    }
}

impl From<[Target; 2]> for Channels {
    fn from(targets: [Target; 2]) -> Self {
        Self::Vec2(targets)
    }
}

impl From<[Target; 3]> for Channels {
    fn from(targets: [Target; 3]) -> Self {
        Self::Vec3(targets)
    }
}

impl From<[Target; 4]> for Channels {
    fn from(targets: [Target; 4]) -> Self {
        Self::Vec4(targets)
    }
}
