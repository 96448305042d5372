#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use melee::game::{check_invariants, interpret, GameState};
use melee::scenario::{CoinSpawn, CommandRecord, FigureSpawn, Scenario};

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Board dimension seed.
    size: u8,
    /// Green spawn seed (y, x).
    green: (u8, u8),
    /// Red spawn seed (y, x).
    red: (u8, u8),
    /// Coin placements (y, x, value).
    coins: Vec<(u8, u8, u8)>,
    /// Command tokens as free-form strings.
    commands: Vec<(String, String)>,
}

fuzz_target!(|input: SessionInput| {
    // Keep the board small but in a valid range.
    let size = u16::from(input.size % 12) + 2;
    let clamp = |v: u8| u16::from(v) % size + 1;

    let scenario = Scenario {
        size,
        green: FigureSpawn {
            y: clamp(input.green.0),
            x: clamp(input.green.1),
        },
        red: FigureSpawn {
            y: clamp(input.red.0),
            x: clamp(input.red.1),
        },
        coins: input
            .coins
            .iter()
            .take(16)
            .map(|&(y, x, value)| CoinSpawn {
                y: clamp(y),
                x: clamp(x),
                value: u32::from(value),
            })
            .collect(),
        commands: Vec::new(),
    };

    // Colliding or worthless spawns are rejected at setup; that path
    // must not panic either.
    let Ok(mut state) = GameState::from_scenario(&scenario) else {
        return;
    };

    for (role, action) in input.commands.iter().take(256) {
        let record = CommandRecord {
            role: role.clone(),
            action: action.clone(),
        };
        let _ = interpret(&mut state, &record);
        assert!(check_invariants(&state).is_empty());
    }
});
