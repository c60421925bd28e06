//! Multi-factor utility scoring for the four candidate moves.

use sweeper_world::Grid;

use crate::agent::SweeperAgent;
use crate::Heading;

/// Utility assigned to off-grid or unsafe moves. Vetoes every other factor.
pub const BLOCKED_UTILITY: f64 = -100.0;

/// Minimum best-move utility required to act at all; below it the agent
/// idles for the tick.
pub const ACTIVATION_THRESHOLD: f64 = 50.0;

impl SweeperAgent {
    /// Score a move into the adjacent cell toward `heading`.
    ///
    /// Off-grid destinations and unsafe height transitions are hard vetoes.
    /// Otherwise the score sums a dirt bonus, a novelty bonus, proximity to
    /// known dirt, an energy penalty, and a curiosity-scaled exploration
    /// term built from recency, frontier, and visit frequency.
    pub fn move_utility(&self, grid: &Grid, heading: Heading) -> f64 {
        let target = heading.step(self.position);
        let Some(target_cell) = grid.get(target) else {
            return BLOCKED_UTILITY;
        };

        let rotation_cost = f64::from(self.facing.turns_to(heading)) * self.config.rotation_power;

        if let Some(cell) = grid.get(self.position) {
            if heading.delta_of(cell).abs() > self.config.max_safe_height {
                return BLOCKED_UTILITY;
            }
        }

        let mut utility = 0.0;

        if self.memory.dust_at(target).is_some_and(|dust| dust > 0.0) {
            utility += 75.0;
        }
        if !self.memory.was_visited(target) {
            utility += 30.0;
        }

        // Cells adjacent to known dirt are worth approaching.
        for &dirt in self.memory.dirty() {
            let distance = target.manhattan(dirt);
            if distance <= 2 {
                utility += f64::from(3 - distance as i32) * 3.0;
            }
        }

        utility -= (self.config.move_power + rotation_cost) * 5.0;

        let curiosity = self.memory.curiosity_factor();

        // Recently revisited cells are penalized; long-neglected ones earn
        // a capped reward, never-visited ones a flat one.
        let mut recency_value = 0.0;
        match self.memory.last_visit(target) {
            Some(last) => {
                let elapsed = self.memory.time() - last;
                if elapsed < 10 {
                    utility -= 50.0 / (elapsed as f64 + 1.0);
                } else {
                    recency_value = (elapsed as f64 / 5.0).min(30.0);
                }
            }
            None => recency_value = 40.0,
        }

        let frontier_value = self.memory.frontier_value(target) * 35.0;
        if frontier_value == 0.0 && target_cell.cleaned {
            // Fully mapped clean ground; nothing left to gain there.
            utility -= 100.0;
        }

        let mut frequency_value = 0.0;
        match self.memory.visit_count(target) {
            Some(visits) => utility -= 10.0 * f64::from(visits - 1),
            None => frequency_value = 35.0,
        }

        utility + (recency_value + frontier_value + frequency_value) * curiosity
    }

    /// Best heading by utility. Ties resolve to the earliest heading in
    /// canonical North, East, South, West order.
    pub fn best_move(&self, grid: &Grid) -> (Heading, f64) {
        let mut best = (Heading::North, f64::NEG_INFINITY);
        for heading in Heading::ALL {
            let score = self.move_utility(grid, heading);
            if score > best.1 {
                best = (heading, score);
            }
        }
        best
    }
}
