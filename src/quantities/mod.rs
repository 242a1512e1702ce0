// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! List quantity normalization for CloudFront request payloads.
//!
//! CloudFront models lists as `{Quantity, Items}` pairs and answers with
//! `InconsistentQuantities` whenever the declared quantity does not match the
//! number of items. Users only ever write the items, so every configuration
//! tree is normalized right before it is sent.
//!
//! # How it works
//!
//! - [`Quantified`] is implemented by every node that carries a quantity.
//! - [`CountedTree`] is implemented by every node of a configuration tree and
//!   visits the quantified nodes reachable from it, including the ones nested
//!   inside the items of other lists.
//! - The per-shape implementations are declared in [`schema`] with the
//!   `counted_schema!` macro: each shape lists the child fields that can lead
//!   to a counted list, and one generic traversal does the rest.
//!
//! # Example
//!
//! ```rust
//! use cloudfront_controller::crd::{CountedList, VpcOriginEndpointConfig};
//! use cloudfront_controller::quantities::normalize_quantities;
//!
//! let mut config = VpcOriginEndpointConfig {
//!     origin_ssl_protocols: Some(CountedList::new(vec![
//!         "TLSv1.1".to_string(),
//!         "TLSv1.2".to_string(),
//!     ])),
//!     ..Default::default()
//! };
//!
//! normalize_quantities(Some(&mut config));
//!
//! assert_eq!(config.origin_ssl_protocols.unwrap().quantity, Some(2));
//! ```

use crate::crd::CountedList;

#[macro_use]
mod macros;
pub mod schema;

/// A node holding a declared quantity and, possibly, the items it counts.
pub trait Quantified {
    /// The declared quantity.
    fn quantity(&self) -> Option<i32>;

    /// Overwrites the declared quantity.
    fn set_quantity(&mut self, quantity: i32);

    /// Number of items, or `None` when the items were not specified.
    fn item_count(&self) -> Option<usize>;

    /// Whether the declared quantity agrees with the items.
    ///
    /// A node without items is consistent whatever its quantity.
    fn is_consistent(&self) -> bool {
        match self.item_count() {
            Some(len) => self.quantity() == Some(saturating_quantity(len)),
            None => true,
        }
    }
}

/// A node of a configuration tree that may lead to counted lists.
pub trait CountedTree {
    /// Calls `visit` on every present quantified node reachable from `self`.
    ///
    /// Parents are visited before the lists nested in their items.
    fn for_each_counted(&mut self, visit: &mut dyn FnMut(&mut dyn Quantified));

    /// Read-only counterpart of [`CountedTree::for_each_counted`].
    fn inspect_counted(&self, visit: &mut dyn FnMut(&dyn Quantified));
}

impl<T> Quantified for CountedList<T> {
    fn quantity(&self) -> Option<i32> {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = Some(quantity);
    }

    fn item_count(&self) -> Option<usize> {
        self.items.as_ref().map(Vec::len)
    }
}

impl<T: CountedTree> CountedTree for CountedList<T> {
    fn for_each_counted(&mut self, visit: &mut dyn FnMut(&mut dyn Quantified)) {
        visit(self);
        if let Some(items) = self.items.as_mut() {
            for item in items {
                item.for_each_counted(visit);
            }
        }
    }

    fn inspect_counted(&self, visit: &mut dyn FnMut(&dyn Quantified)) {
        visit(self);
        if let Some(items) = self.items.as_ref() {
            for item in items {
                item.inspect_counted(visit);
            }
        }
    }
}

/// Sets every present quantity in the tree to the number of its items.
///
/// An absent root is a no-op. Lists whose items are absent keep their quantity
/// untouched, and absent branches stay absent. The operation is idempotent.
pub fn normalize_quantities<T: CountedTree + ?Sized>(root: Option<&mut T>) {
    let Some(root) = root else {
        return;
    };

    root.for_each_counted(&mut |node: &mut dyn Quantified| {
        if let Some(len) = node.item_count() {
            node.set_quantity(saturating_quantity(len));
        }
    });
}

/// Returns a normalized copy of the tree, leaving the input untouched.
///
/// This is what the reconcilers send: the desired state stored in the custom
/// resource is never mutated, so a retry starts from the same input.
#[must_use]
pub fn normalized<T: CountedTree + Clone>(root: Option<&T>) -> Option<T> {
    let mut copy = root.cloned();
    normalize_quantities(copy.as_mut());
    copy
}

/// Counts the quantified nodes whose quantity disagrees with their items.
#[must_use]
pub fn inconsistent_quantities<T: CountedTree + ?Sized>(root: Option<&T>) -> usize {
    let mut inconsistent = 0;
    if let Some(root) = root {
        root.inspect_counted(&mut |node: &dyn Quantified| {
            if !node.is_consistent() {
                inconsistent += 1;
            }
        });
    }
    inconsistent
}

/// Counts the quantified nodes present in the tree.
#[must_use]
pub fn counted_nodes<T: CountedTree + ?Sized>(root: Option<&T>) -> usize {
    let mut nodes = 0;
    if let Some(root) = root {
        root.inspect_counted(&mut |_: &dyn Quantified| nodes += 1);
    }
    nodes
}

// CloudFront quantities are 32-bit; a list that long cannot be sent anyway.
fn saturating_quantity(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
