//! The agent's persistent partial map and visit bookkeeping.

use std::collections::{BTreeMap, BTreeSet};

use sweeper_world::Position;

use crate::Heading;

/// What the agent knows about a single cell. Height deltas are present only
/// for directions actually sensed from some visited cell, so at most three
/// of the four are known unless the cell was approached from several sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellKnowledge {
    pub dust_weight: Option<f64>,
    pub cleaned: bool,
    deltas: [Option<i32>; 4],
}

impl CellKnowledge {
    pub fn delta(&self, heading: Heading) -> Option<i32> {
        self.deltas[heading as usize]
    }

    fn set_delta(&mut self, heading: Heading, value: i32) {
        self.deltas[heading as usize] = Some(value);
    }
}

/// Partial map plus visit statistics. Keys are append-only: a position
/// appears only after being sensed directly or as a neighbour of a visited
/// cell, and never disappears.
#[derive(Debug, Default)]
pub struct Memory {
    map: BTreeMap<Position, CellKnowledge>,
    dirty: BTreeSet<Position>,
    cleaned: BTreeSet<Position>,
    visit_order: Vec<Position>,
    visit_count: BTreeMap<Position, u32>,
    last_visit: BTreeMap<Position, u64>,
    time: u64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks elapsed since the start of the simulation.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn known_cells(&self) -> usize {
        self.map.len()
    }

    pub fn is_known(&self, pos: Position) -> bool {
        self.map.contains_key(&pos)
    }

    pub fn knowledge(&self, pos: Position) -> Option<&CellKnowledge> {
        self.map.get(&pos)
    }

    pub fn dust_at(&self, pos: Position) -> Option<f64> {
        self.map.get(&pos).and_then(|cell| cell.dust_weight)
    }

    pub fn delta_at(&self, pos: Position, heading: Heading) -> Option<i32> {
        self.map.get(&pos).and_then(|cell| cell.delta(heading))
    }

    pub fn dirty(&self) -> &BTreeSet<Position> {
        &self.dirty
    }

    pub fn cleaned(&self) -> &BTreeSet<Position> {
        &self.cleaned
    }

    /// First-visit order, append-only with no duplicates.
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    pub fn visit_count(&self, pos: Position) -> Option<u32> {
        self.visit_count.get(&pos).copied()
    }

    pub fn last_visit(&self, pos: Position) -> Option<u64> {
        self.last_visit.get(&pos).copied()
    }

    pub fn was_visited(&self, pos: Position) -> bool {
        self.visit_count.contains_key(&pos)
    }

    /// Advance the tick counter and update visit statistics for `pos`.
    pub fn note_visit(&mut self, pos: Position) {
        self.time += 1;
        self.last_visit.insert(pos, self.time);
        let count = self.visit_count.entry(pos).or_insert(0);
        *count += 1;
        if *count == 1 {
            self.visit_order.push(pos);
        }
    }

    /// Record an observed dust weight and reclassify the cell. The dirty
    /// and cleaned sets stay disjoint: a positive observation re-dirties
    /// even a previously cleaned cell.
    pub fn record_dust(&mut self, pos: Position, dust_weight: f64) {
        let entry = self.map.entry(pos).or_default();
        entry.dust_weight = Some(dust_weight);
        entry.cleaned = dust_weight == 0.0;
        if dust_weight > 0.0 {
            self.dirty.insert(pos);
            self.cleaned.remove(&pos);
        } else if self.dirty.remove(&pos) {
            self.cleaned.insert(pos);
        }
    }

    /// Record a sensed height delta at `pos` toward `heading`.
    pub fn record_delta(&mut self, pos: Position, heading: Heading, delta: i32) {
        self.map.entry(pos).or_default().set_delta(heading, delta);
    }

    /// Fraction of `pos`'s four neighbours that are unmapped. A cell we
    /// have never sensed has no frontier value yet.
    pub fn frontier_value(&self, pos: Position) -> f64 {
        if !self.map.contains_key(&pos) {
            return 0.0;
        }
        let unknown = Heading::ALL
            .iter()
            .filter(|heading| !self.map.contains_key(&heading.step(pos)))
            .count();
        unknown as f64 / 4.0
    }

    /// Exploration bias in [0.1, 1.0]; rises as more of the known map is
    /// cleaned and less of it is dirty.
    pub fn curiosity_factor(&self) -> f64 {
        let known = self.map.len();
        if known == 0 {
            return 0.5;
        }
        let cleaning_ratio = self.cleaned.len() as f64 / known as f64;
        let dirty_ratio = self.dirty.len() as f64 / known as f64;
        (0.1 + 0.9 * cleaning_ratio * (1.0 - dirty_ratio)).clamp(0.1, 1.0)
    }

    /// Closest known dirty cell by Manhattan distance. Ties resolve to the
    /// lowest (x, y) in lexicographic order via the set's iteration order.
    pub fn nearest_dirty(&self, from: Position) -> Option<Position> {
        let mut best: Option<(u32, Position)> = None;
        for &pos in &self.dirty {
            let distance = from.manhattan(pos);
            if best.map_or(true, |(current, _)| distance < current) {
                best = Some((distance, pos));
            }
        }
        best.map(|(_, pos)| pos)
    }
}
