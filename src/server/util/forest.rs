//! Index-based forest linking for flat records that reference a parent by ID.
//!
//! Comments and navigation items are both stored flat with an optional parent ID. This
//! module turns such a list into parent/child links by position, without reference
//! counting. Linking is total: a record whose parent is missing from the input becomes a
//! root, and parent cycles are broken so that every record lands in the forest exactly once.

use std::collections::HashMap;

/// Parent/child links between records, expressed as positions in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    /// Root positions, in input order.
    pub roots: Vec<usize>,
    /// Child positions for each record, in input order until sorted.
    pub children: Vec<Vec<usize>>,
}

impl Forest {
    /// Links records given as `(id, parent_id)` pairs in input order.
    ///
    /// When two records share an ID, children attach to the first one. A record whose
    /// parent ID is not present becomes a root in its input position. For each parent
    /// cycle (including a record that names itself as parent), the member that appears
    /// first in the input is promoted to root; the other members keep their parents.
    ///
    /// # Arguments
    /// - `links` - One `(id, parent_id)` pair per record
    ///
    /// # Returns
    /// - `Forest` - Links covering every input position exactly once
    pub fn link(links: &[(i32, Option<i32>)]) -> Self {
        let mut index: HashMap<i32, usize> = HashMap::with_capacity(links.len());
        for (position, (id, _)) in links.iter().enumerate() {
            index.entry(*id).or_insert(position);
        }

        let mut parents: Vec<Option<usize>> = links
            .iter()
            .map(|(_, parent_id)| parent_id.and_then(|p| index.get(&p).copied()))
            .collect();

        break_cycles(&mut parents);

        let mut roots = Vec::new();
        let mut children = vec![Vec::new(); links.len()];
        for (position, parent) in parents.iter().enumerate() {
            match parent {
                Some(p) => children[*p].push(position),
                None => roots.push(position),
            }
        }

        Self { roots, children }
    }

    /// Stable-sorts every child list by the given key. Root order is left untouched.
    pub fn sort_children_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        for siblings in &mut self.children {
            siblings.sort_by_key(|&position| key(position));
        }
    }

    /// Moves `items` into nested nodes following the links.
    ///
    /// `items` must be in the same order, and of the same length, as the `links` passed
    /// to [`Forest::link`]. Nodes are built bottom-up so `build` always receives a
    /// record's finished children.
    pub fn assemble<T, N, F>(self, items: Vec<T>, mut build: F) -> Vec<N>
    where
        F: FnMut(T, Vec<N>) -> N,
    {
        let mut pending: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut built: Vec<Option<N>> = pending.iter().map(|_| None).collect();

        for position in self.post_order() {
            let Some(item) = pending.get_mut(position).and_then(Option::take) else {
                continue;
            };
            let children = self.children[position]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[position] = Some(build(item, children));
        }

        self.roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }

    /// Children-before-parent traversal of every tree, without recursion.
    fn post_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.children.len());
        let mut stack: Vec<(usize, bool)> = self.roots.iter().rev().map(|&r| (r, false)).collect();

        while let Some((position, expanded)) = stack.pop() {
            if expanded {
                order.push(position);
                continue;
            }
            stack.push((position, true));
            for &child in self.children[position].iter().rev() {
                stack.push((child, false));
            }
        }

        order
    }
}

/// Cuts one link in every parent cycle, at the cycle member with the lowest position.
fn break_cycles(parents: &mut [Option<usize>]) {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unseen; parents.len()];
    let mut path = Vec::new();

    for start in 0..parents.len() {
        if marks[start] != Mark::Unseen {
            continue;
        }

        let mut current = Some(start);
        while let Some(position) = current {
            match marks[position] {
                Mark::Done => break,
                Mark::OnPath => {
                    let cycle_start = path.iter().position(|&p| p == position).unwrap_or(0);
                    if let Some(&first) = path[cycle_start..].iter().min() {
                        parents[first] = None;
                    }
                    break;
                }
                Mark::Unseen => {
                    marks[position] = Mark::OnPath;
                    path.push(position);
                    current = parents[position];
                }
            }
        }

        for position in path.drain(..) {
            marks[position] = Mark::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(forest: Forest, ids: Vec<i32>) -> Vec<(i32, Vec<i32>)> {
        let children = forest.children.clone();
        forest
            .roots
            .iter()
            .map(|&r| (ids[r], children[r].iter().map(|&c| ids[c]).collect()))
            .collect()
    }

    #[test]
    fn links_children_and_keeps_root_order() {
        let forest = Forest::link(&[(3, None), (2, Some(1)), (1, None)]);

        assert_eq!(forest.roots, vec![0, 2]);
        assert_eq!(forest.children[2], vec![1]);
        assert!(forest.children[0].is_empty());
    }

    #[test]
    fn promotes_records_with_missing_parent() {
        let forest = Forest::link(&[(1, None), (2, Some(99)), (3, Some(1))]);

        assert_eq!(forest.roots, vec![0, 1]);
        assert_eq!(forest.children[0], vec![2]);
    }

    /// Tests that a record naming itself as parent is still placed.
    ///
    /// Expected: the record becomes a root
    #[test]
    fn breaks_self_parent() {
        let forest = Forest::link(&[(1, Some(1)), (2, None)]);

        assert_eq!(forest.roots, vec![0, 1]);
    }

    /// Tests a three-record cycle entered from a record outside it.
    ///
    /// Input order: 4 -> 2, 2 -> 3, 3 -> 1, 1 -> 2. The cycle is {2, 3, 1}; the member
    /// earliest in the input is 2 (position 1), which is promoted to root.
    #[test]
    fn breaks_cycle_at_earliest_member() {
        let ids = vec![4, 2, 3, 1];
        let forest = Forest::link(&[(4, Some(2)), (2, Some(3)), (3, Some(1)), (1, Some(2))]);

        assert_eq!(forest.roots, vec![1]);
        assert_eq!(forest.children[1], vec![0, 3]);
        assert_eq!(forest.children[3], vec![2]);
        assert_eq!(collect(forest, ids), vec![(2, vec![4, 1])]);
    }

    #[test]
    fn duplicate_ids_attach_children_to_first() {
        let forest = Forest::link(&[(1, None), (1, None), (2, Some(1))]);

        assert_eq!(forest.roots, vec![0, 1]);
        assert_eq!(forest.children[0], vec![2]);
    }

    #[test]
    fn sorts_children_but_not_roots() {
        let keys = [5, 9, 3, 1];
        let mut forest = Forest::link(&[(1, None), (2, Some(1)), (3, None), (4, Some(1))]);
        forest.sort_children_by_key(|p| keys[p]);

        assert_eq!(forest.roots, vec![0, 2]);
        assert_eq!(forest.children[0], vec![3, 1]);
    }

    /// Tests that assembly handles chains deeper than a recursive walk could.
    #[test]
    fn assembles_deep_chain_without_recursion() {
        let depth = 50_000;
        let links: Vec<(i32, Option<i32>)> = (0..depth)
            .map(|i| (i, if i == 0 { None } else { Some(i - 1) }))
            .collect();
        let forest = Forest::link(&links);

        let nodes = forest.assemble((0..depth).collect::<Vec<i32>>(), |id, children: Vec<(i32, usize)>| {
            let below = children.iter().map(|(_, n)| n + 1).sum::<usize>();
            (id, below)
        });

        assert_eq!(nodes, vec![(0, (depth - 1) as usize)]);
    }

    #[test]
    fn empty_input_gives_empty_forest() {
        let forest = Forest::link(&[]);

        assert!(forest.roots.is_empty());
        let nodes: Vec<i32> = forest.assemble(Vec::<i32>::new(), |item, _: Vec<i32>| item);
        assert!(nodes.is_empty());
    }
}
