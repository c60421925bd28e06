//! Shortest-safe-path search over the agent's known map.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use sweeper_world::Position;

use crate::{Heading, Memory};

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    pos: Position,
    seq: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u64) {
        (self.f, self.seq)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Minimum-length sequence of headings from `start` to `goal`, searching
/// only cells already present in `memory`. An edge is traversable when the
/// destination is mapped, the source has a recorded height delta for the
/// step, and that delta stays within `max_safe_height` in magnitude.
/// Returns `None` when `goal` is unreachable under current knowledge.
///
/// A* with the Manhattan heuristic (unit edge cost, so it never
/// overestimates). Equal-f frontier nodes pop in insertion order, so equal
/// length routes resolve identically on every run.
pub fn route_to(
    memory: &Memory,
    start: Position,
    goal: Position,
    max_safe_height: i32,
) -> Option<Vec<Heading>> {
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut g_score: HashMap<Position, u32> = HashMap::new();
    let mut came_from: HashMap<Position, (Position, Heading)> = HashMap::new();

    g_score.insert(start, 0);
    open.push(OpenNode {
        f: start.manhattan(goal),
        g: 0,
        pos: start,
        seq,
    });
    seq += 1;

    while let Some(node) = open.pop() {
        if node.pos == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        if g_score.get(&node.pos).copied() != Some(node.g) {
            // Stale heap entry.
            continue;
        }

        for heading in Heading::ALL {
            let next = heading.step(node.pos);
            if !memory.is_known(next) {
                continue;
            }
            let Some(delta) = memory.delta_at(node.pos, heading) else {
                continue;
            };
            if delta.abs() > max_safe_height {
                continue;
            }

            let tentative = node.g + 1;
            if g_score.get(&next).is_some_and(|&g| tentative >= g) {
                continue;
            }

            came_from.insert(next, (node.pos, heading));
            g_score.insert(next, tentative);
            open.push(OpenNode {
                f: tentative + next.manhattan(goal),
                g: tentative,
                pos: next,
                seq,
            });
            seq += 1;
        }
    }

    None
}

fn reconstruct(
    came_from: &HashMap<Position, (Position, Heading)>,
    start: Position,
    goal: Position,
) -> Vec<Heading> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&(prev, heading)) = came_from.get(&current) else {
            break;
        };
        path.push(heading);
        current = prev;
    }
    path.reverse();
    path
}
