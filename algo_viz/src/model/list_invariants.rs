// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structural audit of a [`LinkedList`]. The mutating operations keep these invariants
//! by construction, this is how tests (and `algo-viz list --check`) prove it.

use crate::{CommonResult, InvariantViolation, LinkedList, NodeId, ok};

impl LinkedList {
    /// Walk the list from the head and verify:
    /// 1. `head` and `tail` are both set or both empty.
    /// 2. Every link points at a live node.
    /// 3. Doubly kinds: `a.next == b` implies `b.prev == a`, including the circular wrap.
    ///    Singly kinds carry no `prev` links.
    /// 4. Linear kinds end in an empty link at the tail, circular kinds return to the
    ///    head after exactly `len()` steps, with `tail.next == head` (and
    ///    `head.prev == tail` for doubly).
    /// 5. `len()` equals the number of nodes reached, and the number of nodes owned.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> CommonResult<()> {
        let (head, tail) = match (self.head(), self.tail()) {
            (None, None) => {
                return if self.len() == 0 && self.nodes.is_empty() {
                    ok!()
                } else {
                    Err(InvariantViolation::SizeMismatch {
                        size: self.len(),
                        reached: 0,
                    }
                    .into())
                };
            }
            (Some(head), Some(tail)) => (head, tail),
            (head, tail) => {
                return Err(InvariantViolation::HeadTailMismatch {
                    head: head.map(|it| it.as_u64()),
                    tail: tail.map(|it| it.as_u64()),
                }
                .into());
            }
        };

        let kind = self.kind();
        let (reached, last) = self.walk_from_head(head)?;

        if reached != self.len() || reached != self.nodes.len() {
            return Err(InvariantViolation::SizeMismatch {
                size: self.len(),
                reached,
            }
            .into());
        }

        if last != tail {
            return Err(InvariantViolation::TailNotLast {
                last: last.as_u64(),
                tail: tail.as_u64(),
            }
            .into());
        }

        if kind.is_circular() {
            if self.next_of(tail) != Some(head) {
                return Err(InvariantViolation::CircularClosure {
                    detail: format!("tail {tail}.next is {:?}", self.next_of(tail)),
                }
                .into());
            }
            if kind.is_doubly() && self.prev_of(head) != Some(tail) {
                return Err(InvariantViolation::CircularClosure {
                    detail: format!("head {head}.prev is {:?}", self.prev_of(head)),
                }
                .into());
            }
        } else if kind.is_doubly() && self.prev_of(head).is_some() {
            return Err(InvariantViolation::LinearEnd {
                detail: format!("head {head}.prev is {:?}", self.prev_of(head)),
            }
            .into());
        }

        ok!()
    }

    /// Returns how many nodes a forward walk reaches, and the last one reached.
    fn walk_from_head(&self, head: NodeId) -> CommonResult<(usize, NodeId)> {
        let kind = self.kind();
        let mut reached = 0;
        let mut last = head;
        let mut current = Some(head);

        while let Some(id) = current {
            if kind.is_circular() && reached > 0 && id == head {
                break;
            }
            if reached >= self.nodes.len() {
                // A cycle that does not pass through the head.
                return Err(InvariantViolation::SizeMismatch {
                    size: self.len(),
                    reached: reached + 1,
                }
                .into());
            }

            let node = self.get(id).ok_or(InvariantViolation::DanglingLink {
                from: last.as_u64(),
                to: id.as_u64(),
            })?;

            if kind.is_doubly() {
                if let Some(next) = node.next {
                    let next_prev = self.prev_of(next);
                    if self.contains(next) && next_prev != Some(id) {
                        return Err(InvariantViolation::BackLink {
                            node: id.as_u64(),
                            next: next.as_u64(),
                            prev: next_prev.map(|it| it.as_u64()),
                        }
                        .into());
                    }
                }
            } else if let Some(prev) = node.prev {
                return Err(InvariantViolation::StrayPrevLink {
                    node: id.as_u64(),
                    prev: prev.as_u64(),
                }
                .into());
            }

            reached += 1;
            last = id;
            current = node.next;
        }

        if kind.is_circular() && current.is_none() {
            return Err(InvariantViolation::CircularClosure {
                detail: format!("node {last}.next is empty"),
            }
            .into());
        }

        Ok((reached, last))
    }
}
