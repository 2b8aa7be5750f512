//! Equivalence resolution for provisional labels
//!
//! During the raster scan, a single connected region can pick up several
//! provisional labels (for example a U-shape, whose two arms are labeled
//! separately before the scan reaches the bottom bend). Rather than relabel
//! pixels eagerly on every merge, which would cost a grid pass per merge,
//! the resolver records which provisional labels are equivalent and defers
//! all rewriting to one collapse pass after the scan.

use crate::error::{RegionError, RegionResult};
use blobscan_core::FIRST_LABEL;

/// Tracks groups of mutually-equivalent provisional labels.
///
/// Groups are disjoint, every allocated label belongs to exactly one group,
/// and the union of all groups is exactly the set of labels ever handed out
/// by [`new_label`](Self::new_label). Groups behave as a multi-element
/// union-find; lookup is a linear scan, which is fine at the label counts a
/// single image produces. Enumeration order is the order in which groups
/// were first created, with a merged group keeping the earlier slot, so
/// final region IDs are reproducible for a given raster scan.
#[derive(Debug, Default)]
pub struct EquivalenceResolver {
    /// Disjoint label groups, in first-occurrence order.
    groups: Vec<Vec<u32>>,
    /// Labels allocated so far; the next fresh label is FIRST_LABEL + count.
    allocated: u32,
}

impl EquivalenceResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh provisional label and its singleton group.
    ///
    /// Labels increase monotonically starting at [`FIRST_LABEL`]; 0 and 1
    /// are reserved for background and unlabeled foreground.
    pub fn new_label(&mut self) -> u32 {
        let label = FIRST_LABEL + self.allocated;
        self.allocated += 1;
        self.groups.push(vec![label]);
        label
    }

    /// Merge the groups containing `a` and `b`. No-op if they already share
    /// a group.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownLabel`] if either label was never
    /// allocated. Correct labeling allocates every label before unioning it,
    /// so this surfaces an algorithm bug rather than bad input.
    pub fn union(&mut self, a: u32, b: u32) -> RegionResult<()> {
        let ia = self.find(a).ok_or(RegionError::UnknownLabel(a))?;
        let ib = self.find(b).ok_or(RegionError::UnknownLabel(b))?;
        if ia == ib {
            return Ok(());
        }

        // Keep the earlier-created group's enumeration slot.
        let (keep, drop) = if ia < ib { (ia, ib) } else { (ib, ia) };
        let absorbed = self.groups.remove(drop);
        self.groups[keep].extend(absorbed);
        Ok(())
    }

    /// The canonical label of a group: its minimum member. Stable under any
    /// order of equivalent `union` calls, which makes it the representative
    /// used by the collapse pass.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownLabel`] if the label was never
    /// allocated.
    pub fn canonical(&self, label: u32) -> RegionResult<u32> {
        let index = self.find(label).ok_or(RegionError::UnknownLabel(label))?;
        // Groups are never empty: every group starts as a singleton and
        // merging only adds members.
        Ok(*self.groups[index].iter().min().unwrap())
    }

    /// Number of distinct groups, i.e. the final region count.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Canonical label of the group at `index` in first-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::GroupIndexOutOfRange`] if `index` is past the
    /// last group.
    pub fn group_representative(&self, index: usize) -> RegionResult<u32> {
        let group = self
            .groups
            .get(index)
            .ok_or(RegionError::GroupIndexOutOfRange {
                index,
                count: self.groups.len(),
            })?;
        Ok(*group.iter().min().unwrap())
    }

    /// Total number of labels ever allocated.
    pub fn label_count(&self) -> u32 {
        self.allocated
    }

    fn find(&self, label: u32) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_start_at_two() {
        let mut eq = EquivalenceResolver::new();
        assert_eq!(eq.new_label(), 2);
        assert_eq!(eq.new_label(), 3);
        assert_eq!(eq.new_label(), 4);
        assert_eq!(eq.group_count(), 3);
    }

    #[test]
    fn test_union_merges_groups() {
        let mut eq = EquivalenceResolver::new();
        let a = eq.new_label();
        let b = eq.new_label();
        let c = eq.new_label();

        eq.union(a, c).unwrap();
        assert_eq!(eq.group_count(), 2);
        assert_eq!(eq.canonical(c).unwrap(), a);
        assert_eq!(eq.canonical(a).unwrap(), a);
        assert_eq!(eq.canonical(b).unwrap(), b);
    }

    #[test]
    fn test_union_same_group_is_noop() {
        let mut eq = EquivalenceResolver::new();
        let a = eq.new_label();
        let b = eq.new_label();
        eq.union(a, b).unwrap();
        eq.union(b, a).unwrap();
        assert_eq!(eq.group_count(), 1);
    }

    #[test]
    fn test_union_unknown_label_fails() {
        let mut eq = EquivalenceResolver::new();
        let a = eq.new_label();
        assert!(matches!(eq.union(a, 99), Err(RegionError::UnknownLabel(99))));
        assert!(matches!(eq.canonical(7), Err(RegionError::UnknownLabel(7))));
    }

    #[test]
    fn test_canonical_is_minimum_transitively() {
        let mut eq = EquivalenceResolver::new();
        let a = eq.new_label(); // 2
        let b = eq.new_label(); // 3
        let c = eq.new_label(); // 4
        let d = eq.new_label(); // 5

        eq.union(c, d).unwrap();
        eq.union(b, c).unwrap();
        eq.union(a, d).unwrap();

        for label in [a, b, c, d] {
            assert_eq!(eq.canonical(label).unwrap(), a);
        }
        assert_eq!(eq.group_count(), 1);
    }

    #[test]
    fn test_enumeration_order_survives_merges() {
        let mut eq = EquivalenceResolver::new();
        let l2 = eq.new_label();
        let l3 = eq.new_label();
        let l4 = eq.new_label();
        let l5 = eq.new_label();

        // Merge 3 into 2; groups should now enumerate as {2,3}, {4}, {5}
        eq.union(l3, l2).unwrap();
        assert_eq!(eq.group_representative(0).unwrap(), l2);
        assert_eq!(eq.group_representative(1).unwrap(), l4);
        assert_eq!(eq.group_representative(2).unwrap(), l5);
        assert!(eq.group_representative(3).is_err());

        // Merging 5 into 4 keeps the {4} slot
        eq.union(l5, l4).unwrap();
        assert_eq!(eq.group_count(), 2);
        assert_eq!(eq.group_representative(1).unwrap(), l4);
    }

    #[test]
    fn test_reordering_equivalent_unions() {
        // Two sequences of unions expressing the same equivalence classes
        // must produce the same groups and representatives.
        let build = |pairs: &[(u32, u32)]| {
            let mut eq = EquivalenceResolver::new();
            for _ in 0..6 {
                eq.new_label();
            }
            for &(a, b) in pairs {
                eq.union(a, b).unwrap();
            }
            let mut reps: Vec<u32> = (0..eq.group_count())
                .map(|i| eq.group_representative(i).unwrap())
                .collect();
            reps.sort_unstable();
            reps
        };

        // Classes: {2,3,4}, {5,6}, {7}
        let reps1 = build(&[(2, 3), (3, 4), (5, 6)]);
        let reps2 = build(&[(5, 6), (4, 3), (2, 4)]);
        let reps3 = build(&[(4, 2), (6, 5), (2, 3), (3, 4)]);
        assert_eq!(reps1, vec![2, 5, 7]);
        assert_eq!(reps1, reps2);
        assert_eq!(reps1, reps3);
    }
}
