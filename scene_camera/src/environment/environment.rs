/// SceneEnvironment — immutable keyed context for a view and its children.
///
/// Replaces reactive environment propagation with plain context passing:
/// a parent hands its environment to children, and a child that needs a
/// different camera derives a new environment with `.camera(..)`. Values
/// are shared behind `Arc`, so cloning an environment is cheap and never
/// copies camera data.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::camera::SceneCamera;
use crate::camera_debug;
use super::image_source::ImageSource;
use super::keys::{CameraKey, EnvironmentKey, IblKey, SkyboxKey};

type AnyValue = dyn Any + Send + Sync;

/// One stored value plus the type-erased operations the map needs.
#[derive(Clone)]
struct Slot {
    name: &'static str,
    value: Arc<AnyValue>,
    eq: fn(&AnyValue, &AnyValue) -> bool,
    debug: fn(&AnyValue, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl Slot {
    fn new<K: EnvironmentKey>(value: K::Value) -> Self {
        Self {
            name: K::NAME,
            value: Arc::new(value),
            eq: slot_eq::<K>,
            debug: slot_debug::<K>,
        }
    }
}

fn slot_eq<K: EnvironmentKey>(a: &AnyValue, b: &AnyValue) -> bool {
    match (a.downcast_ref::<K::Value>(), b.downcast_ref::<K::Value>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn slot_debug<K: EnvironmentKey>(value: &AnyValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.downcast_ref::<K::Value>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str("<mismatched value>"),
    }
}

/// Keyed scene context.
///
/// # Example
///
/// ```
/// use scene_camera::scene3d::camera::OrthographicCamera;
/// use scene_camera::scene3d::environment::{ImageSource, SceneEnvironment};
///
/// let root = SceneEnvironment::new()
///     .skybox(ImageSource::parse("assets/sky.hdr")?);
///
/// // A child view switches to an orthographic camera; the root is unchanged.
/// let child = root.clone().camera(OrthographicCamera::default());
///
/// assert!(root.active_camera().is_perspective());
/// assert!(child.active_camera().is_orthographic());
/// assert_eq!(child.skybox_source(), root.skybox_source());
/// # Ok::<(), scene_camera::scene3d::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct SceneEnvironment {
    slots: FxHashMap<TypeId, Slot>,
}

impl SceneEnvironment {
    /// Empty environment: every key reads as its default.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== GENERIC KEYS =====

    /// Environment with `K` set to `value`.
    pub fn with<K: EnvironmentKey>(mut self, value: K::Value) -> Self {
        camera_debug!("scene_camera::Environment", "Set '{}' = {:?}", K::NAME, value);
        self.slots.insert(TypeId::of::<K>(), Slot::new::<K>(value));
        self
    }

    /// Environment with `K` reset to its default.
    pub fn without<K: EnvironmentKey>(mut self) -> Self {
        if self.slots.remove(&TypeId::of::<K>()).is_some() {
            camera_debug!("scene_camera::Environment", "Cleared '{}'", K::NAME);
        }
        self
    }

    /// Current value of `K`, or `K::default_value()` if unset.
    pub fn get<K: EnvironmentKey>(&self) -> K::Value {
        self.slots
            .get(&TypeId::of::<K>())
            .and_then(|slot| slot.value.downcast_ref::<K::Value>())
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    /// Whether `K` was explicitly set.
    pub fn contains<K: EnvironmentKey>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<K>())
    }

    /// Whether the effective value of `K` differs between `self` and `other`.
    ///
    /// An unset key and a key explicitly set to its default compare equal.
    pub fn changed<K: EnvironmentKey>(&self, other: &SceneEnvironment) -> bool {
        self.get::<K>() != other.get::<K>()
    }

    /// Number of explicitly set keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // ===== BUILT-IN KEYS =====

    /// Environment with the active camera replaced.
    pub fn camera(self, camera: impl Into<SceneCamera>) -> Self {
        self.with::<CameraKey>(camera.into())
    }

    /// Environment with an image-based-lighting source.
    pub fn ibl(self, source: ImageSource) -> Self {
        self.with::<IblKey>(Some(source))
    }

    /// Environment with a skybox source.
    pub fn skybox(self, source: ImageSource) -> Self {
        self.with::<SkyboxKey>(Some(source))
    }

    /// Active camera (default perspective camera when unset).
    pub fn active_camera(&self) -> SceneCamera {
        self.get::<CameraKey>()
    }

    pub fn ibl_source(&self) -> Option<ImageSource> {
        self.get::<IblKey>()
    }

    pub fn skybox_source(&self) -> Option<ImageSource> {
        self.get::<SkyboxKey>()
    }
}

impl PartialEq for SceneEnvironment {
    /// Same set of explicit keys with equal values.
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self.slots.iter().all(|(key, slot)| {
                other
                    .slots
                    .get(key)
                    .is_some_and(|other_slot| (slot.eq)(slot.value.as_ref(), other_slot.value.as_ref()))
            })
    }
}

impl fmt::Debug for SceneEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct SlotValue<'a>(&'a Slot);

        impl fmt::Debug for SlotValue<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (self.0.debug)(self.0.value.as_ref(), f)
            }
        }

        let mut slots: Vec<&Slot> = self.slots.values().collect();
        slots.sort_by_key(|slot| slot.name);

        let mut map = f.debug_map();
        for slot in slots {
            map.entry(&slot.name, &SlotValue(slot));
        }
        map.finish()
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
