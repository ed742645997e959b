// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element listener bookkeeping.
//!
//! Each matched interactive element carries exactly one handle at a time. The handle
//! type is chosen by the host; dropping it must release the element's listeners (for
//! example a pair of `gloo` event listeners, which detach on drop).

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

/// Registry of interactive elements and their listener handles.
pub struct HoverRegistry<K, H> {
    entries: HashMap<K, H>,
}

/// Result of a [`HoverRegistry::sync`] pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncReport<K> {
    /// Number of newly attached elements.
    pub attached: usize,
    /// Elements whose handles were dropped because they are no longer matched.
    pub released: SmallVec<[K; 4]>,
}

impl<K> SyncReport<K> {
    /// True if the pass changed nothing.
    pub fn is_unchanged(&self) -> bool {
        self.attached == 0 && self.released.is_empty()
    }
}

impl<K: Debug, H> Debug for HoverRegistry<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverRegistry")
            .field("elements", &self.entries.keys().collect::<SmallVec<[&K; 8]>>())
            .finish_non_exhaustive()
    }
}

impl<K, H> Default for HoverRegistry<K, H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, H> HoverRegistry<K, H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `element` currently holds a handle.
    pub fn contains(&self, element: &K) -> bool {
        self.entries.contains_key(element)
    }

    /// Reconcile the registry with the currently matched elements.
    ///
    /// Elements seen for the first time get a handle from `attach`; elements already
    /// registered are left alone; registered elements missing from `matched` have their
    /// handles dropped.
    pub fn sync<I, F>(&mut self, matched: I, mut attach: F) -> SyncReport<K>
    where
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> H,
    {
        let mut seen = HashSet::new();
        let mut attached = 0;
        for element in matched {
            if !self.entries.contains_key(&element) {
                let handle = attach(&element);
                self.entries.insert(element.clone(), handle);
                attached += 1;
            }
            seen.insert(element);
        }

        let mut released = SmallVec::new();
        self.entries.retain(|element, _| {
            let keep = seen.contains(element);
            if !keep {
                released.push(element.clone());
            }
            keep
        });
        SyncReport { attached, released }
    }

    /// Drop the handle for one element.
    pub fn remove(&mut self, element: &K) -> Option<H> {
        self.entries.remove(element)
    }

    /// Drop every handle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
