// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pseudo-code shown in the code panel next to the steps. Each listing is a handful of
//! lines, written for the list kind it runs on.

use crate::ListKind;

#[must_use]
pub fn kind_abbreviation(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Singly => "SLL",
        ListKind::Doubly => "DLL",
        ListKind::CircularSingly => "CSLL",
        ListKind::CircularDoubly => "CDLL",
    }
}

fn arrow(kind: ListKind) -> &'static str {
    if kind.is_doubly() { " <-> " } else { " -> " }
}

/// `10 -> 20 -> 30`, with a loop back marker for circular kinds.
#[must_use]
pub fn render_order(kind: ListKind, values: &[i64]) -> String {
    if values.is_empty() {
        return "(empty)".to_string();
    }
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(arrow(kind));
    if kind.is_circular() {
        format!("{joined} -> (loop back)")
    } else {
        format!("{joined} -> null")
    }
}

fn closure_line(kind: ListKind) -> Option<&'static str> {
    match kind {
        ListKind::CircularSingly => Some("tail.next = head"),
        ListKind::CircularDoubly => Some("tail.next = head; head.prev = tail"),
        _ => None,
    }
}

#[must_use]
pub fn initialize_listing(kind: ListKind, values: &[i64]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} initialized: {}",
            kind.title(),
            render_order(kind, values)
        ),
        String::new(),
    ];
    lines.push(
        if kind.is_doubly() {
            "for each value: T.next = N; N.prev = T; T = N"
        } else {
            "for each value: T.next = N; T = N"
        }
        .to_string(),
    );
    if let Some(closure) = closure_line(kind) {
        lines.push(closure.to_string());
    }
    lines.push("Select a node to operate.".to_string());
    lines
}

#[must_use]
pub fn select_listing(kind: ListKind, value: i64) -> Vec<String> {
    let mut lines = vec![format!("Selected node value = {value}")];
    if kind.is_circular() {
        lines.push(String::new());
        lines.push("Circular properties:".to_string());
        lines.push(
            if kind.is_doubly() {
                "head.prev == tail, tail.next == head"
            } else {
                "tail.next == head"
            }
            .to_string(),
        );
    }
    lines
}

#[must_use]
pub fn insert_at_head_listing(kind: ListKind, value: i64) -> Vec<String> {
    let mut lines = vec![
        format!("Insert value {value} at head"),
        String::new(),
        format!("Steps ({}):", kind_abbreviation(kind)),
        "N = new Node(value)".to_string(),
        "N.next = head".to_string(),
    ];
    if kind.is_doubly() {
        lines.push("if head: head.prev = N".to_string());
    }
    lines.push("head = N; if tail == null: tail = N".to_string());
    if let Some(closure) = closure_line(kind) {
        lines.push(closure.to_string());
    }
    lines
}

#[must_use]
pub fn insert_at_tail_listing(kind: ListKind, value: i64) -> Vec<String> {
    let mut lines = vec![
        format!("Insert value {value} at tail"),
        String::new(),
        format!("Steps ({}):", kind_abbreviation(kind)),
        "N = new Node(value)".to_string(),
    ];
    if kind.is_doubly() {
        lines.push("N.prev = tail".to_string());
    }
    lines.push("if tail: tail.next = N else head = N".to_string());
    lines.push("tail = N".to_string());
    if let Some(closure) = closure_line(kind) {
        lines.push(closure.to_string());
    }
    lines
}

#[must_use]
pub fn insert_after_listing(kind: ListKind, target_value: i64, value: i64) -> Vec<String> {
    let mut lines = vec![
        format!("Insert value {value} after node ({target_value})"),
        String::new(),
        format!("Steps ({}):", kind_abbreviation(kind)),
        "N = new Node(value)".to_string(),
        "A = S.next".to_string(),
    ];
    if kind.is_doubly() {
        lines.push("N.next = A; N.prev = S".to_string());
        lines.push("S.next = N; A.prev = N".to_string());
    } else {
        lines.push("N.next = A".to_string());
        lines.push("S.next = N".to_string());
    }
    lines.push("if S == tail: tail = N".to_string());
    lines
}

#[must_use]
pub fn insert_before_listing(kind: ListKind, target_value: i64, value: i64) -> Vec<String> {
    let mut lines = vec![
        format!("Insert value {value} before node ({target_value})"),
        String::new(),
        format!("Steps ({}):", kind_abbreviation(kind)),
        "N = new Node(value)".to_string(),
        "B = S.prev".to_string(),
        "N.prev = B; N.next = S".to_string(),
        "B.next = N; S.prev = N".to_string(),
        "if S == head: head = N".to_string(),
    ];
    if let Some(closure) = closure_line(kind) {
        lines.push(closure.to_string());
    }
    lines
}

#[must_use]
pub fn delete_listing(kind: ListKind, value: i64, sole: bool) -> Vec<String> {
    if sole {
        return vec![
            format!("Deleting sole node ({value})"),
            "head = null afterwards".to_string(),
        ];
    }
    let mut lines = vec![
        format!("Deleting node value {value}"),
        String::new(),
        format!("{} steps:", kind_abbreviation(kind)),
    ];
    if kind.is_doubly() {
        lines.push("P = X.prev; N = X.next".to_string());
        lines.push("P.next = N; N.prev = P".to_string());
    } else {
        lines.push("P = node before X (walk from head); N = X.next".to_string());
        lines.push("P.next = N".to_string());
    }
    lines.push("If X == head: head = N".to_string());
    lines.push("If X == tail: tail = P".to_string());
    if let Some(closure) = closure_line(kind) {
        lines.push(closure.to_string());
    }
    lines
}

#[must_use]
pub fn reverse_listing(kind: ListKind) -> Vec<String> {
    vec![
        format!("Reverse ({})", kind_abbreviation(kind)),
        String::new(),
        "prev = null; current = head".to_string(),
        "while current:".to_string(),
        "  next = current.next".to_string(),
        "  current.next = prev".to_string(),
        "  prev = current; current = next".to_string(),
        "tail = head; head = prev".to_string(),
    ]
}

#[must_use]
pub fn no_op_listing(reason: &str) -> Vec<String> { vec![format!("No change: {reason}")] }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(ListKind::Singly, "10 -> 20 -> null")]
    #[test_case(ListKind::Doubly, "10 <-> 20 -> null")]
    #[test_case(ListKind::CircularSingly, "10 -> 20 -> (loop back)")]
    #[test_case(ListKind::CircularDoubly, "10 <-> 20 -> (loop back)")]
    fn test_render_order(kind: ListKind, expected: &str) {
        assert_eq2!(render_order(kind, &[10, 20]), expected);
    }

    #[test]
    fn test_insert_after_is_kind_aware() {
        let cdll = insert_after_listing(ListKind::CircularDoubly, 20, 99);
        assert_eq2!(cdll[0], "Insert value 99 after node (20)");
        assert_eq2!(cdll[2], "Steps (CDLL):");
        assert!(cdll.contains(&"S.next = N; A.prev = N".to_string()));

        let sll = insert_after_listing(ListKind::Singly, 20, 99);
        assert!(!sll.iter().any(|it| it.contains("prev")));
    }

    #[test]
    fn test_delete_sole_node() {
        assert_eq2!(
            delete_listing(ListKind::CircularDoubly, 7, true),
            vec!["Deleting sole node (7)", "head = null afterwards"]
        );
    }
}
