// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, InputError, LinkedList, ListKind, ListOperation,
            ListOperationReport, ListSnapshot, NodeId, PlaybackSnapshot, StepPlayer,
            VizConfig, run_list_operation};

/// One linked list visualizer: the model, the current selection, and the player that
/// reveals the steps of the last operation. A render adapter turns clicks and key
/// presses into calls here, and reads [`Self::snapshot`] and [`Self::playback`] back.
///
/// ```
/// use r3bl_algo_viz::{ListKind, ListVisualizer, StepPlayer};
///
/// let mut viz = ListVisualizer::new(ListKind::CircularSingly, StepPlayer::manual());
/// let twenty = viz.list().find_by_value(20).unwrap();
/// viz.select(twenty);
/// viz.insert_after(99).unwrap();
/// assert_eq!(viz.snapshot().values(), vec![10, 20, 99, 30, 50]);
/// ```
#[allow(missing_debug_implementations)]
pub struct ListVisualizer {
    kind: ListKind,
    list: LinkedList,
    selected: Option<NodeId>,
    player: StepPlayer,
    config: VizConfig,
    maybe_last_report: Option<ListOperationReport>,
}

impl ListVisualizer {
    /// Starts out with the default seed `[10, 20, 30, 50]`.
    #[must_use]
    pub fn new(kind: ListKind, player: StepPlayer) -> Self {
        Self::with_config(kind, player, VizConfig::default())
    }

    #[must_use]
    pub fn with_config(kind: ListKind, player: StepPlayer, config: VizConfig) -> Self {
        let mut it = Self {
            kind,
            list: LinkedList::new(kind),
            selected: None,
            player,
            config,
            maybe_last_report: None,
        };
        it.reset();
        it
    }

    #[must_use]
    pub fn kind(&self) -> ListKind { self.kind }

    #[must_use]
    pub fn list(&self) -> &LinkedList { &self.list }

    #[must_use]
    pub fn selected(&self) -> Option<NodeId> { self.selected }

    #[must_use]
    pub fn player(&self) -> &StepPlayer { &self.player }

    pub fn player_mut(&mut self) -> &mut StepPlayer { &mut self.player }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot { self.list.snapshot() }

    #[must_use]
    pub fn playback(&self) -> PlaybackSnapshot { self.player.snapshot() }

    #[must_use]
    pub fn last_report(&self) -> Option<&ListOperationReport> {
        self.maybe_last_report.as_ref()
    }

    #[must_use]
    pub fn last_code_listing(&self) -> &[String] {
        match &self.maybe_last_report {
            Some(it) => &it.code_listing,
            None => &[],
        }
    }

    /// Replace the list with `values`, and clear the selection.
    pub fn initialize(&mut self, values: &[i64]) {
        self.selected = None;
        self.run(ListOperation::Initialize {
            values: values.to_vec(),
        });
    }

    /// Returns `false` if `id` is not in the list.
    pub fn select(&mut self, id: NodeId) -> bool {
        let applied = self.run(ListOperation::Select { target: id });
        if applied {
            self.selected = Some(id);
        }
        applied
    }

    /// # Errors
    ///
    /// Returns [`InputError::ValueOutOfRange`] if `value` is outside the node range.
    pub fn insert_at_head(&mut self, value: i64) -> CommonResult<NodeId> {
        self.check_value(value)?;
        self.run(ListOperation::InsertAtHead { value });
        self.new_node()
    }

    /// # Errors
    ///
    /// Returns [`InputError::ValueOutOfRange`] if `value` is outside the node range.
    pub fn insert_at_tail(&mut self, value: i64) -> CommonResult<NodeId> {
        self.check_value(value)?;
        self.run(ListOperation::InsertAtTail { value });
        self.new_node()
    }

    /// Insert after the selected node. Returns `Ok(None)` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ValueOutOfRange`] if `value` is outside the node range.
    pub fn insert_after(&mut self, value: i64) -> CommonResult<Option<NodeId>> {
        self.check_value(value)?;
        let Some(target) = self.selected else {
            tracing::debug!(message = "insert_after without a selection", kind = %self.kind);
            return Ok(None);
        };
        self.run(ListOperation::InsertAfter { target, value });
        Ok(self.maybe_new_node())
    }

    /// Insert before the selected node, doubly kinds only. Returns `Ok(None)` when
    /// nothing is selected or the kind has no back links.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ValueOutOfRange`] if `value` is outside the node range.
    pub fn insert_before(&mut self, value: i64) -> CommonResult<Option<NodeId>> {
        self.check_value(value)?;
        let Some(target) = self.selected else {
            tracing::debug!(message = "insert_before without a selection", kind = %self.kind);
            return Ok(None);
        };
        self.run(ListOperation::InsertBefore { target, value });
        Ok(self.maybe_new_node())
    }

    /// Delete the selected node. Linear kinds clear the selection afterwards. Circular
    /// kinds move it to the node that now sits at the same position (or the new tail).
    pub fn delete(&mut self) -> bool {
        let Some(target) = self.selected else {
            tracing::debug!(message = "delete without a selection", kind = %self.kind);
            return false;
        };
        let position = self.list.position_of(target);

        let applied = self.run(ListOperation::Delete { target });
        if !applied {
            return false;
        }

        self.selected = match position {
            Some(position) if self.kind.is_circular() && !self.list.is_empty() => {
                self.list.id_at(position.min(self.list.len() - 1))
            }
            _ => None,
        };
        true
    }

    pub fn reverse(&mut self) -> bool { self.run(ListOperation::Reverse) }

    /// Stop playback, drop the selection, and go back to the configured seed.
    pub fn reset(&mut self) {
        self.player.reset();
        let seed = self.config.list_seed.clone();
        self.initialize(&seed);
    }

    fn run(&mut self, op: ListOperation) -> bool {
        let report = run_list_operation(&mut self.list, op);
        self.player.play(report.title.clone(), report.steps.clone());
        let applied = report.applied();
        self.maybe_last_report = Some(report);
        applied
    }

    fn check_value(&self, value: i64) -> Result<(), InputError> {
        let range = self.config.node_value_range();
        if range.contains(&value) {
            Ok(())
        } else {
            Err(InputError::ValueOutOfRange {
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }

    fn maybe_new_node(&self) -> Option<NodeId> {
        self.maybe_last_report
            .as_ref()
            .and_then(|it| it.outcome.new_node)
    }

    fn new_node(&self) -> CommonResult<NodeId> {
        self.maybe_new_node()
            .ok_or_else(|| miette::miette!("insert did not produce a node"))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::{PlaybackState, assert_eq2};

    fn viz(kind: ListKind) -> ListVisualizer { ListVisualizer::new(kind, StepPlayer::manual()) }

    fn id_of(viz: &ListVisualizer, value: i64) -> NodeId {
        viz.list().find_by_value(value).unwrap()
    }

    #[test]
    fn test_new_plays_initialize() {
        for kind in ListKind::iter() {
            let viz = viz(kind);
            assert_eq2!(viz.snapshot().values(), vec![10, 20, 30, 50]);
            assert_eq2!(viz.playback().title, "Initialize");
            assert_eq2!(viz.playback().state, PlaybackState::Running);
            assert_eq2!(viz.selected(), None);
        }
    }

    #[test]
    fn test_insert_after_needs_selection() {
        let mut viz = viz(ListKind::Doubly);
        assert_eq2!(viz.insert_after(5).unwrap(), None);

        let twenty = id_of(&viz, 20);
        assert!(viz.select(twenty));
        let id = viz.insert_after(25).unwrap();
        assert!(id.is_some());
        assert_eq2!(viz.snapshot().values(), vec![10, 20, 25, 30, 50]);
        assert_eq2!(viz.playback().title, "Insert After");
        assert_eq2!(viz.last_code_listing()[2], "Steps (DLL):");
    }

    #[test]
    fn test_value_range_is_enforced() {
        let mut viz = viz(ListKind::Singly);
        assert!(viz.insert_at_head(100).is_err());
        assert!(viz.insert_at_tail(-1).is_err());
        assert_eq2!(viz.snapshot().values(), vec![10, 20, 30, 50]);
        assert!(viz.insert_at_tail(99).is_ok());
    }

    #[test_case(ListKind::Singly, None)]
    #[test_case(ListKind::Doubly, None)]
    #[test_case(ListKind::CircularSingly, Some(30))]
    #[test_case(ListKind::CircularDoubly, Some(30))]
    fn test_delete_moves_or_clears_selection(kind: ListKind, expected: Option<i64>) {
        let mut viz = viz(kind);
        let twenty = id_of(&viz, 20);
        viz.select(twenty);
        assert!(viz.delete());

        assert_eq2!(viz.snapshot().values(), vec![10, 30, 50]);
        let selected_value = viz.selected().and_then(|it| viz.list().value_of(it));
        assert_eq2!(selected_value, expected);
    }

    #[test]
    fn test_circular_delete_of_tail_selects_new_tail() {
        let mut viz = viz(ListKind::CircularDoubly);
        let fifty = id_of(&viz, 50);
        viz.select(fifty);
        viz.delete();
        assert_eq2!(viz.selected(), viz.list().tail());
    }

    #[test]
    fn test_insert_before_is_doubly_only() {
        let mut viz = viz(ListKind::Singly);
        let thirty = id_of(&viz, 30);
        viz.select(thirty);
        assert_eq2!(viz.insert_before(1).unwrap(), None);
        assert!(!viz.last_report().unwrap().applied());
        assert_eq2!(viz.playback().entries.len(), 1);
    }

    #[test]
    fn test_reset_twice_is_same_as_once() {
        let mut viz = viz(ListKind::CircularDoubly);
        viz.insert_at_head(1).unwrap();
        let ten = id_of(&viz, 10);
        viz.select(ten);

        viz.reset();
        let once = viz.snapshot();
        viz.reset();
        assert_eq2!(viz.snapshot(), once);
        assert_eq2!(viz.selected(), None);
        assert_eq2!(once.values(), vec![10, 20, 30, 50]);
    }

    #[test]
    fn test_reverse() {
        let mut viz = viz(ListKind::Singly);
        assert!(viz.reverse());
        assert_eq2!(viz.snapshot().values(), vec![50, 30, 20, 10]);

        let mut viz = self::viz(ListKind::Doubly);
        assert!(!viz.reverse());
    }
}
