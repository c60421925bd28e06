//! Agent state and the per-tick action-decision controller.

use std::collections::{BTreeSet, VecDeque};

use sweeper_world::{Grid, Position, Pressure, SweeperConfig};
use tracing::{debug, trace};

use crate::utility::ACTIVATION_THRESHOLD;
use crate::{route_to, Heading, Memory, RelativeHeading};

/// Autonomous cleaning agent: partial map, shortest-safe-path routing,
/// utility-driven exploration, and cumulative energy accounting.
///
/// Energy is accounted additively and monotonically but never enforced as
/// a hard cap; the driver owns the tick budget.
#[derive(Debug)]
pub struct SweeperAgent {
    pub(crate) position: Position,
    pub(crate) facing: Heading,
    pub(crate) memory: Memory,
    pub(crate) config: SweeperConfig,
    power_consumed: f64,
    route: Option<VecDeque<Heading>>,
}

impl SweeperAgent {
    pub fn new(config: SweeperConfig) -> Self {
        Self {
            position: Position::new(0, 0),
            facing: Heading::North,
            memory: Memory::new(),
            config,
            power_consumed: 0.0,
            route: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Heading {
        self.facing
    }

    pub fn power_consumed(&self) -> f64 {
        self.power_consumed
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn cleaned_cells(&self) -> &BTreeSet<Position> {
        self.memory.cleaned()
    }

    /// Whether a route is currently being followed.
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    // ---- movement ----

    fn rotate(&mut self, target: Heading) {
        let turns = self.facing.turns_to(target);
        self.power_consumed += f64::from(turns) * self.config.rotation_power;
        self.facing = target;
        trace!(heading = %target, turns, "rotated");
    }

    fn move_forward(&mut self, grid: &Grid) -> bool {
        let next = self.facing.step(self.position);
        if grid.get(next).is_none() {
            debug!(from = ?self.position, heading = %self.facing, "no cell ahead, move refused");
            return false;
        }
        self.position = next;
        self.power_consumed += self.config.move_power;
        true
    }

    // ---- sensing ----

    /// Sense the current cell and the three forward-facing neighbours and
    /// merge the readings into memory. Cached dust readings are free; every
    /// fresh dust read attempt and every height read charges sensor power.
    /// Out-of-grid neighbours yield no reading and no map update.
    fn observe(&mut self, grid: &Grid) {
        self.memory.note_visit(self.position);

        let current_dust = match self.memory.dust_at(self.position) {
            Some(cached) => Some(cached),
            None => {
                self.power_consumed += self.config.sensor_power;
                grid.get(self.position).map(|cell| cell.dust_weight)
            }
        };

        if let Some(dust) = current_dust {
            self.memory.record_dust(self.position, dust);

            if let Some(cell) = grid.get(self.position) {
                // Height readings are recorded against the current cell
                // under the absolute heading each sensor faces.
                for relative in RelativeHeading::SWEEP {
                    self.power_consumed += self.config.sensor_power;
                    let heading = relative.resolve(self.facing);
                    self.memory
                        .record_delta(self.position, heading, heading.delta_of(cell));
                }
            }
        }

        for relative in RelativeHeading::SWEEP {
            let heading = relative.resolve(self.facing);
            let target = heading.step(self.position);
            if self.memory.dust_at(target).is_some() {
                continue; // cached
            }
            self.power_consumed += self.config.sensor_power;
            if let Some(cell) = grid.get(target) {
                self.memory.record_dust(target, cell.dust_weight);
            }
        }
    }

    // ---- cleaning ----

    /// Clean the current cell, escalating from low to high pressure when
    /// residue remains. Cells already marked cleaned charge nothing.
    fn clean_current(&mut self, grid: &mut Grid) {
        let Some(dust) = self.memory.dust_at(self.position) else {
            return;
        };
        if dust <= 0.0 || self.memory.cleaned().contains(&self.position) {
            return;
        }

        let mut remaining = self.suck(grid, Pressure::Low);
        if remaining.is_some_and(|left| left > 0.0) {
            remaining = self.suck(grid, Pressure::High);
        }
        if let Some(left) = remaining {
            // The observed residue drives reclassification, so the dirty
            // and cleaned sets stay disjoint even when suction falls short.
            self.memory.record_dust(self.position, left);
            debug!(pos = ?self.position, remaining = left, "cleaned current cell");
        }
    }

    fn suck(&mut self, grid: &mut Grid, pressure: Pressure) -> Option<f64> {
        self.power_consumed += self.config.vacuum_power(pressure);
        grid.suck(
            self.position,
            self.config.suction_capacity.for_pressure(pressure),
        )
    }

    // ---- decision ----

    /// One full decision cycle: sense, clean, then follow a route, plan a
    /// route to known dirt, or explore by utility. Idles when the best
    /// utility falls below the activation threshold.
    pub fn act(&mut self, grid: &mut Grid) {
        self.observe(grid);
        self.clean_current(grid);

        // Installing a route re-enters the decision logic once; the fresh
        // route is picked up by the follow branch on the second pass.
        for _ in 0..2 {
            if self.route.is_some() {
                self.follow_route(grid);
                return;
            }

            if !self.memory.dirty().is_empty() && self.memory.curiosity_factor() < 0.7 {
                if let Some(route) = self.plan_route_to_dirt() {
                    trace!(len = route.len(), "routing to nearest dirt");
                    self.route = Some(route);
                    continue;
                }
            }

            let (heading, score) = self.best_move(grid);
            if score < ACTIVATION_THRESHOLD {
                trace!(score, "best utility below activation threshold, idling");
                return;
            }
            if heading != self.facing {
                self.rotate(heading);
            } else {
                self.move_forward(grid);
            }
            return;
        }
    }

    fn plan_route_to_dirt(&self) -> Option<VecDeque<Heading>> {
        let target = self.memory.nearest_dirty(self.position)?;
        let path = route_to(&self.memory, self.position, target, self.config.max_safe_height)?;
        if path.is_empty() {
            return None;
        }
        Some(path.into())
    }

    /// Follow the active route: rotate toward the next step if not already
    /// facing it, otherwise move and consume the step. A blocked move
    /// discards the whole route rather than retrying blindly.
    fn follow_route(&mut self, grid: &Grid) {
        let Some(next) = self.route.as_ref().and_then(|route| route.front().copied()) else {
            self.route = None;
            return;
        };

        if next != self.facing {
            self.rotate(next);
            return;
        }

        if self.move_forward(grid) {
            let exhausted = match self.route.as_mut() {
                Some(route) => {
                    route.pop_front();
                    route.is_empty()
                }
                None => false,
            };
            if exhausted {
                self.route = None;
            }
        } else {
            debug!("route blocked, discarding");
            self.route = None;
        }
    }
}
