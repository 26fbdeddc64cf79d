use std::io::Write;

use tictactoe_common::games::tictactoe::{Board, Mark, SearchError, analyze};
use tictactoe_common::log;

/// Prints the engine's view of `board` for `mover`.
pub fn print_analysis<W: Write>(out: &mut W, board: &Board, mover: Mark) -> Result<(), String> {
    write_analysis(out, board, mover).map_err(|e| format!("Failed to write output: {}", e))
}

fn write_analysis<W: Write>(out: &mut W, board: &Board, mover: Mark) -> std::io::Result<()> {
    write!(out, "{}", board)?;
    writeln!(out, "Outcome: {}", board.evaluate())?;

    let report = match analyze(board, mover) {
        Ok(report) => report,
        Err(SearchError::TerminalBoard(_)) => {
            writeln!(out, "No moves left to search.")?;
            return Ok(());
        }
    };

    for scored in &report.moves {
        writeln!(
            out,
            "Cell {} {}: {}",
            scored.position.cell_number(),
            scored.position,
            scored.score
        )?;
    }
    writeln!(
        out,
        "Best move for {}: cell {} {}, score {}",
        mover,
        report.best.position.cell_number(),
        report.best.position,
        report.best.score
    )?;
    log!(
        "Searched {} nodes, deepest layer {}",
        report.nodes,
        report.max_depth
    );
    Ok(())
}
