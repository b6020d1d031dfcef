use crate::scene::ObjectId;
use fnv::FnvHashMap;

/// Side-table from marker object to the index of the destination it shows.
///
/// Marker order matches destination order; the table never owns the
/// destinations themselves.
#[derive(Clone, Debug, Default)]
pub struct MarkerTable {
    order: Vec<ObjectId>,
    by_object: FnvHashMap<ObjectId, usize>,
}

impl MarkerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the marker for the next destination in order.
    pub fn push(&mut self, marker: ObjectId) -> usize {
        let index = self.order.len();
        self.order.push(marker);
        self.by_object.insert(marker, index);
        index
    }

    #[inline]
    pub fn destination_index(&self, marker: ObjectId) -> Option<usize> {
        self.by_object.get(&marker).copied()
    }

    #[inline]
    pub fn marker_for(&self, destination_index: usize) -> Option<ObjectId> {
        self.order.get(destination_index).copied()
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
