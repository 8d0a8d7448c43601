// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One runner for all four list kinds. Each operation mutates the model through the
//! [`LinkedList`] API, and narrates the pointer work it did as a [`StepSequence`] in
//! execution order. Letters in the step text name the roles (`S` selected, `N` new or
//! next, `A` after, `B` before, `P` previous, `X` removed) so the text does not depend
//! on how a front end labels nodes.

use crate::{LinkedList, ListOperation, ListOperationOutcome, ListOperationReport,
            NodeId, StepEffect, StepSequence, StepTag, delete_listing, initialize_listing,
            insert_after_listing, insert_at_head_listing, insert_at_tail_listing,
            insert_before_listing, no_op_listing, reverse_listing, select_listing};

/// Apply `op` to `list` and describe what happened. Never fails, an operation that can't
/// apply (unknown target, unsupported kind, short list) leaves `list` untouched and
/// comes back with a single step and `applied == false`.
#[must_use]
pub fn run_list_operation(list: &mut LinkedList, op: ListOperation) -> ListOperationReport {
    tracing::debug!(message = "run_list_operation", kind = %list.kind(), op = ?op);

    let title = op.title();
    let report = match op {
        ListOperation::Initialize { values } => initialize(list, title, &values),
        ListOperation::Select { target } => select(list, title, target),
        ListOperation::InsertAtHead { value } => insert_at_head(list, title, value),
        ListOperation::InsertAtTail { value } => insert_at_tail(list, title, value),
        ListOperation::InsertAfter { target, value } => {
            insert_after(list, title, target, value)
        }
        ListOperation::InsertBefore { target, value } => {
            insert_before(list, title, target, value)
        }
        ListOperation::Delete { target } => delete(list, title, target),
        ListOperation::Reverse => reverse(list, title),
    };

    if report.applied() {
        tracing::debug!(
            message = "list operation applied",
            title = %report.title,
            steps = report.steps.len(),
            values = ?list.values()
        );
    } else {
        tracing::debug!(
            message = "list operation was a no-op",
            title = %report.title,
            reason = ?report.steps.last().map(|it| it.text.as_str())
        );
    }

    report
}

fn report(
    title: &str,
    steps: StepSequence,
    outcome: ListOperationOutcome,
    code_listing: Vec<String>,
) -> ListOperationReport {
    ListOperationReport {
        title: title.to_string(),
        steps,
        outcome,
        code_listing,
    }
}

fn no_op(title: &str, reason: &str) -> ListOperationReport {
    let mut steps = StepSequence::new();
    steps.note(reason, StepTag::Info);
    report(title, steps, ListOperationOutcome::no_op(), no_op_listing(reason))
}

fn value_label(list: &LinkedList, id: NodeId) -> String {
    list.value_of(id)
        .map_or_else(|| id.to_string(), |it| it.to_string())
}

/// Re-state the wrap around links of a circular list.
fn push_closure(steps: &mut StepSequence, list: &LinkedList) {
    if !list.kind().is_circular() {
        return;
    }
    let (Some(head), Some(tail)) = (list.head(), list.tail()) else {
        return;
    };
    steps.push(
        "Maintain circular closure: tail.next = head",
        StepTag::Relink,
        StepEffect::SetNext {
            from: tail,
            to: Some(head),
        },
    );
    if list.kind().is_doubly() {
        steps.push(
            "Maintain circular closure: head.prev = tail",
            StepTag::Relink,
            StepEffect::SetPrev {
                from: head,
                to: Some(tail),
            },
        );
    }
}

fn initialize(list: &mut LinkedList, title: &str, values: &[i64]) -> ListOperationReport {
    let kind = list.kind();
    *list = LinkedList::new(kind);

    let mut steps = StepSequence::new();
    let mut previous: Option<(NodeId, i64)> = None;

    for &value in values {
        let id = list.insert_at_tail(value);
        steps.push(
            format!("Create node {value}"),
            StepTag::Insert,
            StepEffect::AllocateNode { id, value },
        );
        if let Some((prev_id, prev_value)) = previous {
            steps.push(
                format!("Link {prev_value}.next = {value}"),
                StepTag::Relink,
                StepEffect::SetNext {
                    from: prev_id,
                    to: Some(id),
                },
            );
            if kind.is_doubly() {
                steps.push(
                    format!("Set {value}.prev = {prev_value}"),
                    StepTag::Relink,
                    StepEffect::SetPrev {
                        from: id,
                        to: Some(prev_id),
                    },
                );
            }
        }
        previous = Some((id, value));
    }

    steps.push(
        "Set head to the first node",
        StepTag::Relink,
        StepEffect::SetHead { id: list.head() },
    );
    steps.push(
        "Set tail to the last node",
        StepTag::Relink,
        StepEffect::SetTail { id: list.tail() },
    );
    push_closure(&mut steps, list);
    steps.note("Initialization complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::applied(),
        initialize_listing(kind, values),
    )
}

fn select(list: &LinkedList, title: &str, target: NodeId) -> ListOperationReport {
    let Some(value) = list.value_of(target) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };

    let mut steps = StepSequence::new();
    steps.push(
        format!("User selects node S ({value})"),
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    steps.push(
        "Mark S as selected (highlight)",
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    steps.note("Ready for operation", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::applied(),
        select_listing(list.kind(), value),
    )
}

fn insert_at_head(list: &mut LinkedList, title: &str, value: i64) -> ListOperationReport {
    let kind = list.kind();
    let old_head = list.head().map(|it| (it, value_label(list, it)));
    let id = list.insert_at_head(value);

    let mut steps = StepSequence::new();
    if let Some((head, head_value)) = &old_head {
        steps.push(
            format!("Let H = head ({head_value})"),
            StepTag::Info,
            StepEffect::HighlightNode { id: *head },
        );
    }
    steps.push(
        format!("Allocate new node N with value {value}"),
        StepTag::Insert,
        StepEffect::AllocateNode { id, value },
    );

    match old_head {
        None => {
            steps.push(
                "List was empty: Set head = N",
                StepTag::Relink,
                StepEffect::SetHead { id: Some(id) },
            );
            steps.push(
                "Set tail = N",
                StepTag::Relink,
                StepEffect::SetTail { id: Some(id) },
            );
        }
        Some((head, _)) => {
            steps.push(
                "Set N.next = H",
                StepTag::Relink,
                StepEffect::SetNext {
                    from: id,
                    to: Some(head),
                },
            );
            if kind.is_doubly() {
                steps.push(
                    "Link H.prev = N",
                    StepTag::Relink,
                    StepEffect::SetPrev {
                        from: head,
                        to: Some(id),
                    },
                );
            }
            steps.push(
                "Update head = N",
                StepTag::Relink,
                StepEffect::SetHead { id: Some(id) },
            );
        }
    }

    push_closure(&mut steps, list);
    steps.note("Insertion complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::inserted(id),
        insert_at_head_listing(kind, value),
    )
}

fn insert_at_tail(list: &mut LinkedList, title: &str, value: i64) -> ListOperationReport {
    let kind = list.kind();
    let old_tail = list.tail().map(|it| (it, value_label(list, it)));
    let id = list.insert_at_tail(value);

    let mut steps = StepSequence::new();
    if let Some((tail, tail_value)) = &old_tail {
        steps.push(
            format!("Let T = tail ({tail_value})"),
            StepTag::Info,
            StepEffect::HighlightNode { id: *tail },
        );
    }
    steps.push(
        format!("Allocate new node N with value {value}"),
        StepTag::Insert,
        StepEffect::AllocateNode { id, value },
    );

    match old_tail {
        None => {
            steps.push(
                "List was empty: Set head = N",
                StepTag::Relink,
                StepEffect::SetHead { id: Some(id) },
            );
        }
        Some((tail, _)) => {
            if kind.is_doubly() {
                steps.push(
                    "Set N.prev = T",
                    StepTag::Relink,
                    StepEffect::SetPrev {
                        from: id,
                        to: Some(tail),
                    },
                );
            }
            steps.push(
                "Link T.next = N",
                StepTag::Relink,
                StepEffect::SetNext {
                    from: tail,
                    to: Some(id),
                },
            );
        }
    }
    steps.push(
        "Update tail = N",
        StepTag::Relink,
        StepEffect::SetTail { id: Some(id) },
    );

    push_closure(&mut steps, list);
    steps.note("Insertion complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::inserted(id),
        insert_at_tail_listing(kind, value),
    )
}

fn insert_after(
    list: &mut LinkedList,
    title: &str,
    target: NodeId,
    value: i64,
) -> ListOperationReport {
    let kind = list.kind();
    let Some(target_value) = list.value_of(target) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };
    let after = list.next_of(target).map(|it| (it, value_label(list, it)));
    let was_tail = list.tail() == Some(target);

    let Some(id) = list.insert_after(target, value) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };

    let mut steps = StepSequence::new();
    steps.push(
        format!("Identify selected node S ({target_value})"),
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    match &after {
        Some((after_id, after_value)) => steps.push(
            format!("Let A = S.next ({after_value})"),
            StepTag::Info,
            StepEffect::HighlightNode { id: *after_id },
        ),
        None => steps.note("S.next is none (S is tail)", StepTag::Info),
    };
    steps.push(
        format!("Allocate new node N with value {value}"),
        StepTag::Insert,
        StepEffect::AllocateNode { id, value },
    );
    if kind.is_doubly() {
        steps.push(
            "Set N.prev = S",
            StepTag::Relink,
            StepEffect::SetPrev {
                from: id,
                to: Some(target),
            },
        );
    }
    let after_id = after.as_ref().map(|(it, _)| *it);
    steps.push(
        if after_id.is_some() {
            "Set N.next = A"
        } else {
            "Set N.next = none"
        },
        StepTag::Relink,
        StepEffect::SetNext {
            from: id,
            to: after_id,
        },
    );
    steps.push(
        "Link S.next = N",
        StepTag::Relink,
        StepEffect::SetNext {
            from: target,
            to: Some(id),
        },
    );
    if let Some(after_id) = after_id
        && kind.is_doubly()
    {
        steps.push(
            "Link A.prev = N",
            StepTag::Relink,
            StepEffect::SetPrev {
                from: after_id,
                to: Some(id),
            },
        );
    }
    if was_tail {
        steps.push(
            "S was tail: Update tail = N",
            StepTag::Relink,
            StepEffect::SetTail { id: Some(id) },
        );
    }

    push_closure(&mut steps, list);
    steps.note("Insertion complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::inserted(id),
        insert_after_listing(kind, target_value, value),
    )
}

fn insert_before(
    list: &mut LinkedList,
    title: &str,
    target: NodeId,
    value: i64,
) -> ListOperationReport {
    let kind = list.kind();
    if !kind.supports_insert_before() {
        return no_op(title, "Insert before needs a doubly linked list");
    }
    let Some(target_value) = list.value_of(target) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };
    let before = list.prev_of(target).map(|it| (it, value_label(list, it)));
    let was_head = list.head() == Some(target);

    let Some(id) = list.insert_before(target, value) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };

    let mut steps = StepSequence::new();
    steps.push(
        format!("Identify selected node S ({target_value})"),
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    match &before {
        Some((before_id, before_value)) => steps.push(
            format!("Let B = S.prev ({before_value})"),
            StepTag::Info,
            StepEffect::HighlightNode { id: *before_id },
        ),
        None => steps.note("S.prev is none (S is head)", StepTag::Info),
    };
    steps.push(
        format!("Allocate new node N with value {value}"),
        StepTag::Insert,
        StepEffect::AllocateNode { id, value },
    );
    steps.push(
        "Set N.next = S",
        StepTag::Relink,
        StepEffect::SetNext {
            from: id,
            to: Some(target),
        },
    );
    let before_id = before.as_ref().map(|(it, _)| *it);
    steps.push(
        if before_id.is_some() {
            "Set N.prev = B"
        } else {
            "Set N.prev = none"
        },
        StepTag::Relink,
        StepEffect::SetPrev {
            from: id,
            to: before_id,
        },
    );
    if let Some(before_id) = before_id {
        steps.push(
            "Link B.next = N",
            StepTag::Relink,
            StepEffect::SetNext {
                from: before_id,
                to: Some(id),
            },
        );
    }
    steps.push(
        "Link S.prev = N",
        StepTag::Relink,
        StepEffect::SetPrev {
            from: target,
            to: Some(id),
        },
    );
    if was_head {
        steps.push(
            "S was head: Update head = N",
            StepTag::Relink,
            StepEffect::SetHead { id: Some(id) },
        );
    }

    push_closure(&mut steps, list);
    steps.note("Insertion complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::inserted(id),
        insert_before_listing(kind, target_value, value),
    )
}

fn delete(list: &mut LinkedList, title: &str, target: NodeId) -> ListOperationReport {
    let kind = list.kind();
    let Some(target_value) = list.value_of(target) else {
        return no_op(title, &format!("Node {target} is not in the list"));
    };

    if list.len() == 1 {
        return delete_sole_node(list, target, target_value);
    }

    let predecessor = list
        .predecessor_of(target)
        .map(|it| (it, value_label(list, it)));
    let successor = list.next_of(target).map(|it| (it, value_label(list, it)));
    let was_head = list.head() == Some(target);
    let was_tail = list.tail() == Some(target);

    if !list.delete(target) {
        return no_op(title, &format!("Node {target} is not in the list"));
    }

    let mut steps = StepSequence::new();
    steps.push(
        format!("Identify node X to delete ({target_value})"),
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    match &predecessor {
        Some((prev_id, prev_value)) => steps.push(
            if kind.is_doubly() {
                format!("Let P = X.prev ({prev_value})")
            } else {
                format!("Walk from head to find P with P.next == X ({prev_value})")
            },
            StepTag::Info,
            StepEffect::HighlightNode { id: *prev_id },
        ),
        None => steps.note("X is head: no predecessor", StepTag::Info),
    };
    match &successor {
        Some((next_id, next_value)) => steps.push(
            format!("Let N = X.next ({next_value})"),
            StepTag::Info,
            StepEffect::HighlightNode { id: *next_id },
        ),
        None => steps.note("X.next is none (X is tail)", StepTag::Info),
    };

    let prev_id = predecessor.as_ref().map(|(it, _)| *it);
    let next_id = successor.as_ref().map(|(it, _)| *it);
    if let Some(prev_id) = prev_id {
        steps.push(
            if next_id.is_some() {
                "Set P.next = N"
            } else {
                "Set P.next = none"
            },
            StepTag::Relink,
            StepEffect::SetNext {
                from: prev_id,
                to: next_id,
            },
        );
    }
    if let Some(next_id) = next_id
        && kind.is_doubly()
    {
        steps.push(
            if prev_id.is_some() {
                "Set N.prev = P"
            } else {
                "Set N.prev = none"
            },
            StepTag::Relink,
            StepEffect::SetPrev {
                from: next_id,
                to: prev_id,
            },
        );
    }
    if was_head {
        steps.push(
            "X was head: Update head = N",
            StepTag::Relink,
            StepEffect::SetHead { id: next_id },
        );
    }
    if was_tail {
        steps.push(
            "X was tail: Update tail = P",
            StepTag::Relink,
            StepEffect::SetTail { id: prev_id },
        );
    }

    push_closure(&mut steps, list);
    steps.push(
        "Free X",
        StepTag::Info,
        StepEffect::FreeNode { id: target },
    );
    steps.note("Deletion complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::removed(target),
        delete_listing(kind, target_value, false),
    )
}

fn delete_sole_node(
    list: &mut LinkedList,
    target: NodeId,
    target_value: i64,
) -> ListOperationReport {
    let kind = list.kind();
    let title = "Delete Sole Node";
    if !list.delete(target) {
        return no_op(title, &format!("Node {target} is not in the list"));
    }

    let mut steps = StepSequence::new();
    steps.push(
        format!("Identify sole node X ({target_value})"),
        StepTag::Info,
        StepEffect::HighlightNode { id: target },
    );
    if kind.is_circular() {
        steps.note("Since X.next == X (only node)", StepTag::Info);
    }
    steps.push(
        "Set head = none",
        StepTag::Relink,
        StepEffect::SetHead { id: None },
    );
    steps.push(
        "Set tail = none",
        StepTag::Relink,
        StepEffect::SetTail { id: None },
    );
    steps.push(
        "Remove X",
        StepTag::Info,
        StepEffect::FreeNode { id: target },
    );
    steps.note("List becomes empty", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::removed(target),
        delete_listing(kind, target_value, true),
    )
}

fn reverse(list: &mut LinkedList, title: &str) -> ListOperationReport {
    let kind = list.kind();
    if !kind.supports_reverse() {
        return no_op(title, "Reverse is only available for a singly linked list");
    }
    if list.len() < 2 {
        return no_op(title, "Reverse needs at least two nodes");
    }

    let order: Vec<(NodeId, i64)> = list.iter().map(|it| (it.id, it.value)).collect();
    if !list.reverse() {
        return no_op(title, "Reverse needs at least two nodes");
    }

    let mut steps = StepSequence::new();
    let old_head = order.first().map(|(id, _)| *id);
    match old_head {
        Some(id) => steps.push(
            "Set prev = none, current = head",
            StepTag::Info,
            StepEffect::HighlightNode { id },
        ),
        None => steps.note("Set prev = none, current = head", StepTag::Info),
    };

    let mut prev: Option<NodeId> = None;
    for (index, &(current, value)) in order.iter().enumerate() {
        let next_text = match order.get(index + 1) {
            Some((_, next_value)) => format!("Store next = current.next ({next_value})"),
            None => "Store next = current.next (none)".to_string(),
        };
        steps.push(
            next_text,
            StepTag::Info,
            StepEffect::HighlightNode { id: current },
        );
        steps.push(
            format!("Reverse current.next = prev ({value})"),
            StepTag::Relink,
            StepEffect::SetNext {
                from: current,
                to: prev,
            },
        );
        steps.note("Move forward: prev = current, current = next", StepTag::Info);
        prev = Some(current);
    }

    steps.push(
        "Update tail = old head",
        StepTag::Relink,
        StepEffect::SetTail { id: old_head },
    );
    steps.push(
        "Update head = prev",
        StepTag::Relink,
        StepEffect::SetHead { id: prev },
    );
    steps.note("Reversal complete", StepTag::Complete);

    report(
        title,
        steps,
        ListOperationOutcome::applied(),
        reverse_listing(kind),
    )
}
