use sweeper_core::{route_to, Heading, Memory};
use sweeper_world::Position;

/// A fully sensed, flat, open rectangle: every cell known, every in-bounds
/// delta recorded as zero.
fn open_memory(width: i32, height: i32) -> Memory {
    let mut memory = Memory::new();
    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(x, y);
            memory.record_dust(pos, 0.0);
            for heading in Heading::ALL {
                let next = heading.step(pos);
                if (0..width).contains(&next.x) && (0..height).contains(&next.y) {
                    memory.record_delta(pos, heading, 0);
                }
            }
        }
    }
    memory
}

fn walk(start: Position, path: &[Heading]) -> Position {
    path.iter().fold(start, |pos, heading| heading.step(pos))
}

#[test]
fn path_length_equals_manhattan_distance_on_open_ground() {
    let memory = open_memory(6, 6);
    let pairs = [
        (Position::new(0, 0), Position::new(5, 5)),
        (Position::new(2, 4), Position::new(4, 0)),
        (Position::new(5, 0), Position::new(0, 3)),
    ];

    for (start, goal) in pairs {
        let path = route_to(&memory, start, goal, 3).expect("route should exist");
        assert_eq!(path.len() as u32, start.manhattan(goal));
        assert_eq!(walk(start, &path), goal);
    }
}

#[test]
fn route_to_self_is_empty() {
    let memory = open_memory(3, 3);
    let start = Position::new(1, 1);
    let path = route_to(&memory, start, start, 3).expect("route should exist");
    assert!(path.is_empty());
}

#[test]
fn unsafe_height_delta_prunes_the_edge() {
    let mut memory = Memory::new();
    let start = Position::new(0, 0);
    let goal = Position::new(1, 0);
    memory.record_dust(start, 0.0);
    memory.record_dust(goal, 2.0); // known dirt beyond a cliff
    memory.record_delta(start, Heading::East, 10);

    assert!(route_to(&memory, start, goal, 3).is_none());

    // The same edge at a safe delta is traversable.
    memory.record_delta(start, Heading::East, 2);
    let path = route_to(&memory, start, goal, 3).expect("route should exist");
    assert_eq!(path, vec![Heading::East]);
}

#[test]
fn edges_without_a_recorded_delta_are_not_traversed() {
    let mut memory = Memory::new();
    let start = Position::new(0, 0);
    let goal = Position::new(1, 0);
    memory.record_dust(start, 0.0);
    memory.record_dust(goal, 1.0);
    // Destination known, but the height toward it was never sensed.
    assert!(route_to(&memory, start, goal, 3).is_none());
}

#[test]
fn search_never_leaves_sensed_territory() {
    let mut memory = Memory::new();
    let start = Position::new(0, 0);
    memory.record_dust(start, 0.0);
    for heading in Heading::ALL {
        memory.record_delta(start, heading, 0);
    }
    // The goal is two steps away through a cell the agent has never sensed.
    assert!(route_to(&memory, start, Position::new(2, 0), 3).is_none());
}

#[test]
fn routes_around_an_unsafe_wall() {
    let mut memory = open_memory(3, 3);
    // A vertical cliff along x=0 -> x=1 except through (0,2)/(1,2).
    memory.record_delta(Position::new(0, 0), Heading::East, 9);
    memory.record_delta(Position::new(0, 1), Heading::East, 9);

    let path = route_to(&memory, Position::new(0, 0), Position::new(1, 0), 3)
        .expect("route should exist");
    assert_eq!(path.len(), 5);
    assert_eq!(walk(Position::new(0, 0), &path), Position::new(1, 0));
}

#[test]
fn equal_length_routes_resolve_identically_on_every_run() {
    let memory = open_memory(8, 8);
    let start = Position::new(0, 0);
    let goal = Position::new(7, 7);

    let first = route_to(&memory, start, goal, 3).expect("route should exist");
    for _ in 0..5 {
        let again = route_to(&memory, start, goal, 3).expect("route should exist");
        assert_eq!(first, again);
    }
}
