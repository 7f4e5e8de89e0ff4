use anyhow::{Context, Result};
use oxo_core::Board;
use oxo_engine::solvers;
use tracing::info;

/// Positions every solver is run over, with a label for the log.
const POSITIONS: &[(&str, &str)] = &[
    ("empty board", "........."),
    ("immediate win for X", "XX.OO...."),
    ("O must block", "X...O...X"),
    ("midgame", "XO..X...."),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("oxo starting");

    for &(label, cells) in POSITIONS {
        let board: Board = cells
            .parse()
            .with_context(|| format!("bad position {cells:?}"))?;
        let mark = board.side_to_move();
        info!(position = label, to_move = %mark, "solving");

        for mut engine in solvers(mark) {
            let decision = engine
                .decide(&board)
                .with_context(|| format!("{} failed on {label}", engine.name()))?;
            info!(
                engine = engine.name(),
                best_move = %decision.best_move,
                score = decision.score,
                nodes = decision.stats.nodes_evaluated,
                pruned = decision.stats.nodes_pruned,
                cache_hits = decision.stats.cache_hits,
                symmetry_hits = decision.stats.symmetry_hits,
                elapsed_us = decision.stats.elapsed.as_micros() as u64,
                "decision"
            );
        }
    }

    Ok(())
}
