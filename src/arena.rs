/// Stable handle to an entry stored in an [`Arena`].
///
/// Handles carry the generation of the slot they were issued for, so a handle
/// kept past the removal of its entry never resolves to the slot's next tenant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct EntryId {
    index: usize,
    generation: u64,
}

struct Slot<T> {
    value: Option<T>,
    generation: u64,
}

/// Generational arena owning every entry of a ranked set.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> EntryId {
        self.len += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index];
            slot.generation += 1;
            slot.value = Some(value);
            EntryId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot {
                value: Some(value),
                generation: 0,
            });
            EntryId {
                index,
                generation: 0,
            }
        }
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub(crate) fn remove(&mut self, id: EntryId) -> Option<T> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let value = slot.value.take()?;
        self.free_list.push(id.index);
        self.len -= 1;
        Some(value)
    }

    /// Drops every entry. Slots are kept for reuse, with their generations
    /// bumped on the next insert so handles issued before the clear stay dead.
    pub(crate) fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            slot.value = None;
            self.free_list.push(index);
        }
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
