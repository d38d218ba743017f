use cgmath::{Vector3, Zero};

use crate::Rotation;

/// Pairs a rotation with a translation for rigid transform use.
///
/// Storage only; composition is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub(crate) rotation: Rotation,
    pub(crate) translation: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Rotation::identity(),
            translation: Vector3::zero(),
        }
    }
}

impl Transform {
    pub fn new(rotation: Rotation, translation: impl Into<Vector3<f64>>) -> Self {
        Self {
            rotation,
            translation: translation.into(),
        }
    }

    pub fn rotation<F, R>(&mut self, callback: F) -> R
    where
        F: FnOnce(&mut Rotation) -> R,
    {
        callback(&mut self.rotation)
    }

    pub fn translation<F, R>(&mut self, callback: F) -> R
    where
        F: FnOnce(&mut Vector3<f64>) -> R,
    {
        callback(&mut self.translation)
    }

    pub fn rotation_and_translation<F, R>(&mut self, callback: F) -> R
    where
        F: FnOnce(&mut Rotation, &mut Vector3<f64>) -> R,
    {
        callback(&mut self.rotation, &mut self.translation)
    }

    pub fn get_rotation<F, R>(&self, callback: F) -> R
    where
        F: FnOnce(&Rotation) -> R,
    {
        callback(&self.rotation)
    }

    pub fn get_translation<F, R>(&self, callback: F) -> R
    where
        F: FnOnce(&Vector3<f64>) -> R,
    {
        callback(&self.translation)
    }
}
