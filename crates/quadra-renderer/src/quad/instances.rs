//! CPU-side instance store with dirty tracking.
//!
//! The store is the single source of truth for what the GPU draws. Mutations
//! set a dirty flag; `synchronize` hands back the full clamped record list
//! and a matching draw command in one step, so the uploaded data and the
//! indirect instance count cannot drift apart.

use crate::error::RendererError;

use super::types::{DrawIndexedIndirectArgs, QuadInstance};

pub struct InstanceStore {
    records: Vec<QuadInstance>,
    staging: Vec<QuadInstance>,
    capacity: u32,
    dirty: bool,
}

impl InstanceStore {
    pub fn new(capacity: u32) -> Self {
        Self {
            records: Vec::with_capacity(capacity as usize),
            staging: Vec::with_capacity(capacity as usize),
            capacity,
            dirty: false,
        }
    }

    /// Append one instance, clamping its layer against `layer_count`.
    ///
    /// Fails with a capacity error when the store is full; a rejected push
    /// leaves the store untouched.
    pub fn push(
        &mut self,
        mut instance: QuadInstance,
        layer_count: u32,
    ) -> Result<(), RendererError> {
        if self.records.len() as u32 >= self.capacity {
            return Err(RendererError::InstanceCapacity {
                capacity: self.capacity,
            });
        }

        instance.layer = clamp_layer(instance.layer, layer_count);
        self.records.push(instance);
        self.dirty = true;
        Ok(())
    }

    /// When dirty, rebuild the upload staging list (layers re-clamped against
    /// the current `layer_count`) and return it with the matching draw
    /// command; clears the dirty flag. Returns `None` when nothing changed
    /// since the last call, in which case the GPU copies are already current.
    pub fn synchronize(
        &mut self,
        layer_count: u32,
    ) -> Option<(&[QuadInstance], DrawIndexedIndirectArgs)> {
        if !self.dirty {
            return None;
        }

        self.staging.clear();
        self.staging.extend(self.records.iter().map(|record| QuadInstance {
            layer: clamp_layer(record.layer, layer_count),
            ..*record
        }));
        self.dirty = false;

        let command = DrawIndexedIndirectArgs::for_quads(self.records.len() as u32);
        Some((&self.staging, command))
    }

    pub fn len(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Clamp a layer index into `[0, layer_count - 1]`. Out-of-range layers are
/// a cosmetic fallback, not an error.
fn clamp_layer(layer: i32, layer_count: u32) -> i32 {
    let max = layer_count.max(1) as i32 - 1;
    layer.clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::IDENTITY;

    fn instance(layer: i32) -> QuadInstance {
        QuadInstance::new(IDENTITY, layer)
    }

    #[test]
    fn push_up_to_capacity_succeeds() {
        let mut store = InstanceStore::new(3);
        for _ in 0..3 {
            store.push(instance(0), 1).unwrap();
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn push_past_capacity_is_rejected_and_repeatable() {
        let mut store = InstanceStore::new(2);
        store.push(instance(0), 1).unwrap();
        store.push(instance(0), 1).unwrap();

        for _ in 0..2 {
            let err = store.push(instance(0), 1).unwrap_err();
            assert!(matches!(
                err,
                RendererError::InstanceCapacity { capacity: 2 }
            ));
            assert_eq!(store.len(), 2);
        }
    }

    #[test]
    fn push_clamps_layer_to_available_range() {
        let mut store = InstanceStore::new(4);
        store.push(instance(5), 2).unwrap();
        store.push(instance(-3), 2).unwrap();

        let (records, _) = store.synchronize(2).unwrap();
        assert_eq!(records[0].layer, 1);
        assert_eq!(records[1].layer, 0);
    }

    #[test]
    fn synchronize_matches_store_length() {
        let mut store = InstanceStore::new(8);
        for _ in 0..5 {
            store.push(instance(0), 1).unwrap();
        }

        let (records, command) = store.synchronize(1).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(command.instance_count, 5);
        assert_eq!(command.index_count, 6);
    }

    #[test]
    fn synchronize_twice_is_a_noop() {
        let mut store = InstanceStore::new(2);
        store.push(instance(0), 1).unwrap();

        assert!(store.synchronize(1).is_some());
        assert!(!store.is_dirty());
        assert!(store.synchronize(1).is_none());
    }

    #[test]
    fn push_after_synchronize_marks_dirty_again() {
        let mut store = InstanceStore::new(2);
        store.push(instance(0), 1).unwrap();
        store.synchronize(1);

        store.push(instance(0), 1).unwrap();
        assert!(store.is_dirty());
        let (_, command) = store.synchronize(1).unwrap();
        assert_eq!(command.instance_count, 2);
    }

    #[test]
    fn rejected_push_does_not_mark_dirty() {
        let mut store = InstanceStore::new(1);
        store.push(instance(0), 1).unwrap();
        store.synchronize(1);

        assert!(store.push(instance(0), 1).is_err());
        assert!(!store.is_dirty());
    }

    #[test]
    fn grid_scenario_fills_exactly_to_capacity() {
        let mut store = InstanceStore::new(120 * 120);
        for i in 0..120 * 120 {
            store.push(instance((i % 2) as i32), 2).unwrap();
        }
        assert_eq!(store.len(), 14_400);

        let err = store.push(instance(0), 2).unwrap_err();
        assert!(matches!(err, RendererError::InstanceCapacity { .. }));
        assert_eq!(store.len(), 14_400);
    }

    #[test]
    fn two_quad_scenario_clamps_missing_layer() {
        // Second quad asks for layer 1 while only the placeholder exists.
        let mut store = InstanceStore::new(2);
        store.push(instance(0), 1).unwrap();
        store.push(instance(1), 1).unwrap();

        let (records, command) = store.synchronize(1).unwrap();
        assert_eq!(command.instance_count, 2);
        assert_eq!(records[0].layer, 0);
        assert_eq!(records[1].layer, 0);
    }

    #[test]
    fn zero_capacity_rejects_first_push() {
        let mut store = InstanceStore::new(0);
        let err = store.push(instance(0), 1).unwrap_err();
        assert!(matches!(err, RendererError::InstanceCapacity { capacity: 0 }));
    }
}
