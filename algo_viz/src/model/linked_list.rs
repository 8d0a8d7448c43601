// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{ListKind, NodeId, NodeIdGenerator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
    /// Only maintained for [`ListKind::is_doubly()`] kinds, always `None` otherwise.
    pub prev: Option<NodeId>,
}

/// Arena backed linked list, parameterized by [`ListKind`]. All nodes are owned by the
/// `nodes` map and the links are ids into it, so there are no reference cycles to break
/// in the circular variants.
///
/// Mutations never fail. An unknown [`NodeId`] turns an operation into a no-op, which is
/// reported through the return value (`None` or `false`). After every structural change
/// the ends of the list are re-derived:
/// - linear kinds: `tail.next == None` (and `head.prev == None` for doubly).
/// - circular kinds: `tail.next == head` (and `head.prev == tail` for doubly).
///
/// ```
/// use r3bl_algo_viz::{LinkedList, ListKind};
///
/// let mut list = LinkedList::new(ListKind::CircularSingly);
/// for value in [10, 20, 30, 50] {
///     list.insert_at_tail(value);
/// }
/// let twenty = list.find_by_value(20).unwrap();
/// list.insert_after(twenty, 99);
/// assert_eq!(list.values(), vec![10, 20, 99, 30, 50]);
/// assert_eq!(list.next_of(list.tail().unwrap()), list.head());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedList {
    kind: ListKind,
    pub(crate) nodes: FxHashMap<NodeId, ListNode>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
    id_generator: NodeIdGenerator,
}

impl LinkedList {
    #[must_use]
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            nodes: FxHashMap::default(),
            head: None,
            tail: None,
            size: 0,
            id_generator: NodeIdGenerator::default(),
        }
    }

    #[must_use]
    pub fn from_values(kind: ListKind, values: &[i64]) -> Self {
        let mut it = Self::new(kind);
        for value in values {
            it.insert_at_tail(*value);
        }
        it
    }

    #[must_use]
    pub fn kind(&self) -> ListKind { self.kind }

    #[must_use]
    pub fn head(&self) -> Option<NodeId> { self.head }

    #[must_use]
    pub fn tail(&self) -> Option<NodeId> { self.tail }

    #[must_use]
    pub fn len(&self) -> usize { self.size }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool { self.nodes.contains_key(&id) }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ListNode> { self.nodes.get(&id) }

    #[must_use]
    pub fn value_of(&self, id: NodeId) -> Option<i64> { self.get(id).map(|it| it.value) }

    #[must_use]
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|it| it.next)
    }

    #[must_use]
    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|it| it.prev)
    }

    /// Zero based position of `id` in traversal order from the head.
    #[must_use]
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.iter().position(|it| it.id == id)
    }

    /// The node at `position` in traversal order from the head.
    #[must_use]
    pub fn id_at(&self, position: usize) -> Option<NodeId> {
        self.iter().nth(position).map(|it| it.id)
    }

    /// The first node (from the head) that carries `value`.
    #[must_use]
    pub fn find_by_value(&self, value: i64) -> Option<NodeId> {
        self.iter().find(|it| it.value == value).map(|it| it.id)
    }

    /// Node ids in traversal order from the head, visiting each node once.
    #[must_use]
    pub fn to_ordered_sequence(&self) -> Vec<NodeId> { self.iter().map(|it| it.id).collect() }

    #[must_use]
    pub fn values(&self) -> Vec<i64> { self.iter().map(|it| it.value).collect() }

    #[must_use]
    pub fn iter(&self) -> ListIter<'_> {
        ListIter {
            list: self,
            current: self.head,
            remaining: self.size,
        }
    }

    /// The node whose `next` is `id`. This is O(1) for doubly kinds and an O(n) walk from
    /// the head for singly kinds. The head of a linear list has no predecessor.
    #[must_use]
    pub fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.contains(id) {
            return None;
        }
        if self.kind.is_doubly() {
            return self.prev_of(id);
        }
        self.iter().find(|it| it.next == Some(id)).map(|it| it.id)
    }

    pub fn insert_at_head(&mut self, value: i64) -> NodeId {
        let id = self.id_generator.next_id();
        let old_head = self.head;
        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: old_head,
                prev: None,
            },
        );

        match old_head {
            None => self.tail = Some(id),
            Some(old_head) => {
                if self.kind.is_doubly() {
                    self.set_prev(old_head, Some(id));
                }
            }
        }

        self.head = Some(id);
        self.size += 1;
        self.fix_list_ends();
        id
    }

    pub fn insert_at_tail(&mut self, value: i64) -> NodeId {
        let id = self.id_generator.next_id();
        let old_tail = self.tail;
        let prev = if self.kind.is_doubly() { old_tail } else { None };
        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: None,
                prev,
            },
        );

        match old_tail {
            None => self.head = Some(id),
            Some(old_tail) => self.set_next(old_tail, Some(id)),
        }

        self.tail = Some(id);
        self.size += 1;
        self.fix_list_ends();
        id
    }

    /// Insert `value` right after `target`. Inserting after the tail is the same as
    /// [`Self::insert_at_tail()`]. Returns `None` (and changes nothing) if `target` is
    /// not a live node.
    pub fn insert_after(&mut self, target: NodeId, value: i64) -> Option<NodeId> {
        if !self.contains(target) {
            return None;
        }
        if self.tail == Some(target) {
            return Some(self.insert_at_tail(value));
        }

        let after = self.next_of(target);
        let id = self.id_generator.next_id();
        let prev = if self.kind.is_doubly() { Some(target) } else { None };
        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: after,
                prev,
            },
        );
        self.set_next(target, Some(id));
        if let Some(after) = after
            && self.kind.is_doubly()
        {
            self.set_prev(after, Some(id));
        }

        self.size += 1;
        self.fix_list_ends();
        Some(id)
    }

    /// Insert `value` right before `target`, only for doubly kinds. Inserting before the
    /// head is the same as [`Self::insert_at_head()`]. Returns `None` (and changes
    /// nothing) for singly kinds, or if `target` is not a live node.
    pub fn insert_before(&mut self, target: NodeId, value: i64) -> Option<NodeId> {
        if !self.kind.supports_insert_before() || !self.contains(target) {
            return None;
        }
        if self.head == Some(target) {
            return Some(self.insert_at_head(value));
        }

        let before = self.prev_of(target);
        let id = self.id_generator.next_id();
        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: Some(target),
                prev: before,
            },
        );
        if let Some(before) = before {
            self.set_next(before, Some(id));
        }
        self.set_prev(target, Some(id));

        self.size += 1;
        self.fix_list_ends();
        Some(id)
    }

    /// Unlink and drop `target`. Returns `false` (and changes nothing) if `target` is not
    /// a live node. Deleting the sole node resets the list to empty.
    pub fn delete(&mut self, target: NodeId) -> bool {
        if !self.contains(target) {
            return false;
        }

        if self.size == 1 {
            self.nodes.clear();
            self.head = None;
            self.tail = None;
            self.size = 0;
            return true;
        }

        let predecessor = self.predecessor_of(target);
        let successor = self.next_of(target);

        if self.head == Some(target) {
            self.head = successor;
        }
        if self.tail == Some(target) {
            self.tail = predecessor;
        }
        if let Some(predecessor) = predecessor {
            self.set_next(predecessor, successor);
        }
        if let Some(successor) = successor
            && self.kind.is_doubly()
        {
            self.set_prev(successor, predecessor);
        }

        self.nodes.remove(&target);
        self.size -= 1;
        self.fix_list_ends();
        true
    }

    /// Reverse a singly linked (linear) list in place. Returns `false` for other kinds,
    /// and for lists with fewer than two nodes.
    pub fn reverse(&mut self) -> bool {
        if !self.kind.supports_reverse() || self.size < 2 {
            return false;
        }

        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            current = self.next_of(id);
            self.set_next(id, prev);
            prev = Some(id);
        }

        std::mem::swap(&mut self.head, &mut self.tail);
        self.fix_list_ends();
        true
    }

    /// Drop every node. The id generator keeps counting, so ids are not reused.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.prev = prev;
        }
    }

    /// Re-derive the links at both ends of the chain for the current kind.
    fn fix_list_ends(&mut self) {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return;
        };
        let circular = self.kind.is_circular();
        self.set_next(tail, if circular { Some(head) } else { None });
        if self.kind.is_doubly() {
            self.set_prev(head, if circular { Some(tail) } else { None });
        }
    }
}

/// Walks at most `size` nodes from the head, so it terminates on circular kinds.
#[derive(Debug, Clone)]
pub struct ListIter<'a> {
    list: &'a LinkedList,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.get(self.current?)?;
        self.remaining -= 1;
        self.current = node.next;
        Some(node)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a ListNode;
    type IntoIter = ListIter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
