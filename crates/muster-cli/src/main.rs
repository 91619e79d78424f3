// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Driver binary for the arrangement engine.
//!
//! Builds a fixed roster pair, applies each of the three policies in turn
//! (by number, by rank, by group) on fresh copies, and writes the original
//! rosters, the rules, and every final arrangement to stdout. The whole
//! program is single threaded.

use muster_engine::arranger::{ArrangeError, Arranger, Policy};
use muster_engine::outcome::ArrangeOutcome;
use muster_model::{entity::EntityStore, roster::Roster, rules::Rules};

/// The fixed dataset: (name, rank, group) per entry.
const LEFT_ENTRIES: &[(&str, i32, i32)] = &[
    ("Donna", 11, 2),
    ("Alice", 23, 3),
    ("Beth", 34, 3),
    ("Gemma", 45, 3),
];

const RIGHT_ENTRIES: &[(&str, i32, i32)] = &[
    ("Able", 56, 3),
    ("Baker", 67, 3),
    ("Charlie", 100, 1),
    ("Del", 100, 1),
    ("Edward", 78, 3),
    ("Harry", 89, 2),
    ("Ian", 2, 2),
    ("John", 31, 2),
    ("Frank", 42, 2),
    ("Gary", 53, 2),
];

const EXCLUDED_NAMES: &[&str] = &["Charlie", "Del", "Donna"];

fn main() {
    if let Err(e) = exercise() {
        eprintln!("\n\nERROR: {}", e);
        std::process::exit(1);
    }
}

fn exercise() -> Result<(), ArrangeError> {
    println!("START OF POLICY ENFORCED ARRANGEMENTS\n");

    let mut store = EntityStore::with_capacity(LEFT_ENTRIES.len() + RIGHT_ENTRIES.len());
    let mut rules = Rules::default();

    let left = build_roster(&mut store, &rules, LEFT_ENTRIES)?;
    let right = build_roster(&mut store, &rules, RIGHT_ENTRIES)?;

    // Exclusions are defined only after the initial rosters are built, so
    // the excluded members still land on their starting sides.
    for name in EXCLUDED_NAMES {
        if let Some(idx) = store.lookup(name) {
            rules.exclude(idx);
        }
    }

    print_roster("ORIGINAL LEFT", &left, &store);
    print_roster("ORIGINAL RIGHT", &right, &store);

    println!("RULES");
    println!("Maximum group size: {}", rules.maximum_group_size());
    println!("Excluded: {}", EXCLUDED_NAMES.join(", "));
    println!("-----");

    for policy in [Policy::ByNumber, Policy::ByRank, Policy::ByGroup] {
        // The session adopts ownership of its rosters, so each policy gets
        // fresh copies of the originals.
        let session = Arranger::new(policy, &rules, left.clone(), right.clone())?;
        println!("\n{}", session.policy());
        let outcome = session.arrange(&mut store)?;

        println!("Status: {}", outcome.status());
        println!("-----");
        print_roster("LEFT", outcome.left_final(), &store);
        print_roster("RIGHT", outcome.right_final(), &store);

        if policy == Policy::ByRank {
            print_rank_totals(&outcome, &store);
        }
    }

    Ok(())
}

fn build_roster(
    store: &mut EntityStore,
    rules: &Rules,
    entries: &[(&str, i32, i32)],
) -> Result<Roster, ArrangeError> {
    let mut roster = Roster::new();
    for &(name, rank, group) in entries {
        let idx = store
            .create(name, rank, group)
            .map_err(muster_model::roster::RosterError::from)?;
        roster.add(idx, store, rules)?;
    }
    Ok(roster)
}

fn print_roster(header: &str, roster: &Roster, store: &EntityStore) {
    println!("{}", header);
    let mut sorted = roster.clone();
    sorted.sort_by_name(store);
    for (counter, member) in sorted.iter().enumerate() {
        let entity = store.entity(member);
        println!(
            "{}. Name: {}, Group: {}, Rank: {}",
            counter + 1,
            entity.name(),
            entity.group(),
            entity.rank()
        );
    }
}

fn print_rank_totals(outcome: &ArrangeOutcome, store: &EntityStore) {
    println!(
        "Rank sum totals: [{}/{}]",
        outcome.left_final().rank_sum(store),
        outcome.right_final().rank_sum(store)
    );
}
