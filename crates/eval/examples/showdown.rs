// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0
//
// Deals a 5-cards hand to each player and prints the winners:
//
// ```bash
// $ cargo r --release --example showdown -- --players 4
// ```
use clap::Parser;

use showdown_eval::{Card, Deck, Evaluator};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Path of the persisted rank table, rebuilt if missing.
    #[clap(long, default_value = "ranktable.bin")]
    table: String,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let evaluator = Evaluator::with_store(&cli.table);

    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    let hands = (0..cli.players)
        .map(|_| {
            (0..5)
                .map(|_| deck.deal().expect("52 cards cover 10 players"))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    for (player, hand) in hands.iter().enumerate() {
        let cards = hand.iter().map(Card::to_string).collect::<Vec<_>>();
        let rank = evaluator.rank(hand);
        println!("Player {player}: {} {rank}", cards.join(" "));
    }

    let winners = evaluator.evaluate_hands(&hands);
    println!(
        "Winner(s): {}",
        winners
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
}
