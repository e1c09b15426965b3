//! Transition descriptors emitted by the mutation engine.
//!
//! Each structural edit returns an ordered list of these records describing
//! how the grid must visually evolve from its old geometry to its new one.
//! They are inert values: created during a single mutation call, returned to
//! the caller, never retained by the engine. The renderer that interpolates
//! them lives outside this crate.

use serde::{Deserialize, Serialize};

use gridtween_core::geometry::Vec2;

/// Position of a cell in the grid, row-major, 0-based. The header is row 0
/// when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell({}, {})", self.row, self.col)
    }
}

/// One visual change produced by a mutation.
///
/// Ordering contract: within a single mutation's list, `Disappear` records
/// come first (old content leaves), then `Move` (survivors make room), then
/// `Resize`, then `Appear` (new content revealed), then `ContentChange`.
/// A renderer playing the list in order never shows new content before
/// space has been made for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Move(MoveTransition),
    Resize(ResizeTransition),
    Appear(AppearTransition),
    Disappear(DisappearTransition),
    ContentChange(ContentChangeTransition),
}

/// A surviving cell's center translated from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveTransition {
    pub cell: CellRef,
    pub from: Vec2,
    pub to: Vec2,
}

/// A column's width changed. Carries the new center x so the renderer can
/// restretch and recenter the column's cells without re-querying the grid;
/// cells of a resized column get no separate `Move` records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeTransition {
    pub col: usize,
    pub from_width: f64,
    pub to_width: f64,
    pub center_x: f64,
}

/// A new cell at its final geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearTransition {
    pub cell: CellRef,
    pub text: String,
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
}

/// A detached cell leaving from its old center. `cell` is the index the
/// cell had before the edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisappearTransition {
    pub cell: CellRef,
    pub center: Vec2,
}

/// A cell's text replaced in place, geometry unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentChangeTransition {
    pub cell: CellRef,
    pub from: String,
    pub to: String,
}

/// Ordered descriptor list returned by one mutation, with per-kind filters
/// for assertions and renderer dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionList(Vec<Transition>);

impl TransitionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, transition: Transition) {
        self.0.push(transition);
    }

    pub fn as_slice(&self) -> &[Transition] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn moves(&self) -> Vec<&MoveTransition> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Transition::Move(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn resizes(&self) -> Vec<&ResizeTransition> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Transition::Resize(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn appears(&self) -> Vec<&AppearTransition> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Transition::Appear(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn disappears(&self) -> Vec<&DisappearTransition> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Transition::Disappear(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    pub fn content_changes(&self) -> Vec<&ContentChangeTransition> {
        self.0
            .iter()
            .filter_map(|t| match t {
                Transition::ContentChange(c) => Some(c),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for TransitionList {
    type Item = Transition;
    type IntoIter = std::vec::IntoIter<Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransitionList {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> TransitionList {
        let mut list = TransitionList::new();
        list.push(Transition::Move(MoveTransition {
            cell: CellRef::new(1, 0),
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(1.0, 0.0),
        }));
        list.push(Transition::Resize(ResizeTransition {
            col: 0,
            from_width: 2.0,
            to_width: 3.0,
            center_x: 1.5,
        }));
        list.push(Transition::Appear(AppearTransition {
            cell: CellRef::new(2, 0),
            text: "x".to_string(),
            center: Vec2::new(1.0, -2.0),
            width: 3.0,
            height: 0.8,
        }));
        list
    }

    #[test]
    fn test_filtering() {
        let list = sample_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list.moves().len(), 1);
        assert_eq!(list.resizes().len(), 1);
        assert_eq!(list.appears().len(), 1);
        assert!(list.disappears().is_empty());
        assert!(list.content_changes().is_empty());
    }

    #[test]
    fn test_serialization_tags_kind() {
        let list = sample_list();
        let json = serde_json::to_value(&list).unwrap();
        let kinds: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["move", "resize", "appear"]);
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(2, 3).to_string(), "cell(2, 3)");
    }
}
