//! Dense Sibling Ordering
//!
//! Pure position planning for any orderable record. All siblings sharing a
//! scope key stay densely numbered from [`POSITION_ORIGIN`]; every mutation
//! produces a plan of `(id, new_position)` pairs the store applies in one
//! batch, so a transactional backend can wrap a whole reindex in a single
//! transaction.
//!
//! Inserting shifts siblings at or after the slot up by one; removing
//! closes the gap; moving recomputes both ends in one pass. Scope changes
//! (re-parenting, menu moves) are a removal from the old scope followed by
//! an insertion into the new one, in that order.

use crate::models::POSITION_ORIGIN;
use crate::models::{Component, ContentItem, Page};

/// A record with a dense position inside some sibling scope.
///
/// The record holds only its id and position; the authoritative order lives
/// with the service that plans renumbering over a whole scope.
pub trait Orderable {
    fn item_id(&self) -> &str;
    fn item_position(&self) -> i64;
}

impl Orderable for Page {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn item_position(&self) -> i64 {
        self.position
    }
}

impl Orderable for Component {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn item_position(&self) -> i64 {
        self.position
    }
}

impl Orderable for ContentItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn item_position(&self) -> i64 {
        self.position
    }
}

/// Clamp a desired insert position into the valid range for a scope of
/// `len` existing siblings: `ORIGIN ..= ORIGIN + len`.
pub fn clamp_insert(len: usize, desired: Option<i64>) -> i64 {
    let end = POSITION_ORIGIN + len as i64;
    match desired {
        Some(pos) => pos.clamp(POSITION_ORIGIN, end),
        None => end,
    }
}

/// Plan inserting a new item into an ordered scope.
///
/// Returns the assigned position and the shifts existing siblings need.
/// `siblings` must be current-scope members in position order, without the
/// new item.
pub fn plan_insert<T: Orderable>(
    siblings: &[T],
    desired: Option<i64>,
) -> (i64, Vec<(String, i64)>) {
    let assigned = clamp_insert(siblings.len(), desired);
    let plan = siblings
        .iter()
        .filter(|s| s.item_position() >= assigned)
        .map(|s| (s.item_id().to_string(), s.item_position() + 1))
        .collect();
    (assigned, plan)
}

/// Plan moving an existing item to a new position within its scope.
///
/// Renumbers the whole scope in one pass and returns only the entries
/// whose position changes. Returns `None` when `item_id` is not in scope.
pub fn plan_move<T: Orderable>(
    siblings: &[T],
    item_id: &str,
    new_position: i64,
) -> Option<Vec<(String, i64)>> {
    let from = siblings.iter().position(|s| s.item_id() == item_id)?;

    let mut order: Vec<&str> = siblings.iter().map(Orderable::item_id).collect();
    let moved = order.remove(from);
    let to = (new_position - POSITION_ORIGIN).clamp(0, order.len() as i64) as usize;
    order.insert(to, moved);

    Some(renumber(siblings, &order))
}

/// Plan removing an item: later siblings shift down to close the gap.
/// Returns `None` when `item_id` is not in scope.
pub fn plan_remove<T: Orderable>(siblings: &[T], item_id: &str) -> Option<Vec<(String, i64)>> {
    let from = siblings.iter().position(|s| s.item_id() == item_id)?;

    let mut order: Vec<&str> = siblings.iter().map(Orderable::item_id).collect();
    order.remove(from);

    Some(renumber(siblings, &order))
}

/// Plan a full dense renumber of a scope in its current order.
///
/// Repairs any gaps or duplicates, returning only changed entries.
pub fn reindex<T: Orderable>(siblings: &[T]) -> Vec<(String, i64)> {
    let order: Vec<&str> = siblings.iter().map(Orderable::item_id).collect();
    renumber(siblings, &order)
}

/// Diff a target ordering against current positions, emitting `(id, pos)`
/// for every entry that moves.
fn renumber<T: Orderable>(siblings: &[T], order: &[&str]) -> Vec<(String, i64)> {
    order
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let target = POSITION_ORIGIN + index as i64;
            let current = siblings
                .iter()
                .find(|s| s.item_id() == *id)
                .map(Orderable::item_position);
            if current == Some(target) {
                None
            } else {
                Some(((*id).to_string(), target))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: String,
        position: i64,
    }

    impl Orderable for Item {
        fn item_id(&self) -> &str {
            &self.id
        }

        fn item_position(&self) -> i64 {
            self.position
        }
    }

    fn scope(ids: &[&str]) -> Vec<Item> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Item {
                id: (*id).to_string(),
                position: POSITION_ORIGIN + i as i64,
            })
            .collect()
    }

    fn positions_after(scope: &[Item], plan: &[(String, i64)]) -> Vec<(String, i64)> {
        let mut all: Vec<(String, i64)> = scope
            .iter()
            .map(|s| {
                let updated = plan.iter().find(|(id, _)| id == &s.id);
                (
                    s.id.clone(),
                    updated.map(|(_, p)| *p).unwrap_or(s.position),
                )
            })
            .collect();
        all.sort_by_key(|(_, p)| *p);
        all
    }

    #[test]
    fn insert_into_empty_scope_takes_origin() {
        let siblings: Vec<Item> = Vec::new();
        let (assigned, plan) = plan_insert(&siblings, None);
        assert_eq!(assigned, 1);
        assert!(plan.is_empty());
    }

    #[test]
    fn insert_without_desired_appends() {
        let siblings = scope(&["a", "b"]);
        let (assigned, plan) = plan_insert(&siblings, None);
        assert_eq!(assigned, 3);
        assert!(plan.is_empty());
    }

    #[test]
    fn insert_in_middle_shifts_later_siblings_up() {
        let siblings = scope(&["a", "b", "c"]);
        let (assigned, plan) = plan_insert(&siblings, Some(2));
        assert_eq!(assigned, 2);
        assert_eq!(
            plan,
            vec![("b".to_string(), 3), ("c".to_string(), 4)]
        );
    }

    #[test]
    fn insert_clamps_out_of_range_positions() {
        let siblings = scope(&["a", "b"]);
        let (low, _) = plan_insert(&siblings, Some(-5));
        let (high, _) = plan_insert(&siblings, Some(99));
        assert_eq!(low, 1);
        assert_eq!(high, 3);
    }

    #[test]
    fn move_forward_recomputes_both_ends() {
        let siblings = scope(&["a", "b", "c", "d"]);
        let plan = plan_move(&siblings, "a", 3).unwrap();
        assert_eq!(
            positions_after(&siblings, &plan),
            vec![
                ("b".to_string(), 1),
                ("c".to_string(), 2),
                ("a".to_string(), 3),
                ("d".to_string(), 4),
            ]
        );
    }

    #[test]
    fn move_backward_recomputes_both_ends() {
        let siblings = scope(&["a", "b", "c", "d"]);
        let plan = plan_move(&siblings, "d", 2).unwrap();
        assert_eq!(
            positions_after(&siblings, &plan),
            vec![
                ("a".to_string(), 1),
                ("d".to_string(), 2),
                ("b".to_string(), 3),
                ("c".to_string(), 4),
            ]
        );
    }

    #[test]
    fn move_to_current_position_is_a_noop() {
        let siblings = scope(&["a", "b", "c"]);
        let plan = plan_move(&siblings, "b", 2).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn move_of_unknown_item_is_none() {
        let siblings = scope(&["a", "b"]);
        assert!(plan_move(&siblings, "ghost", 1).is_none());
    }

    #[test]
    fn remove_closes_the_gap() {
        let siblings = scope(&["a", "b", "c"]);
        let plan = plan_remove(&siblings, "a").unwrap();
        assert_eq!(
            plan,
            vec![("b".to_string(), 1), ("c".to_string(), 2)]
        );
    }

    #[test]
    fn remove_of_last_item_changes_nothing() {
        let siblings = scope(&["a", "b", "c"]);
        let plan = plan_remove(&siblings, "c").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn reindex_repairs_gaps() {
        let siblings = vec![
            Item {
                id: "a".to_string(),
                position: 2,
            },
            Item {
                id: "b".to_string(),
                position: 7,
            },
        ];
        let plan = reindex(&siblings);
        assert_eq!(
            plan,
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn positions_stay_contiguous_after_any_plan() {
        let siblings = scope(&["a", "b", "c", "d", "e"]);
        for target in 1..=5 {
            let plan = plan_move(&siblings, "c", target).unwrap();
            let after = positions_after(&siblings, &plan);
            let positions: Vec<i64> = after.iter().map(|(_, p)| *p).collect();
            assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        }
    }
}
