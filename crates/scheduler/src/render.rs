//! Console table rendering of a schedule.

use schedule_core::{PlayerId, Schedule};

/// Render player ids as a tuple, e.g. `(5, 12)`. Matches how teams print,
/// so rest sets and teams look alike in the table and the CSV.
pub(crate) fn id_tuple(ids: &[PlayerId]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("({})", ids.join(", "))
}

/// Build the fixed-width schedule table: one row per round, one column per
/// court showing `teamA vs teamB`, and the resting players last.
///
/// Degraded rounds with fewer matches leave their court cells blank; the
/// column count follows the widest round.
pub fn render_table(schedule: &Schedule) -> String {
    let courts = schedule
        .rounds
        .iter()
        .map(|r| r.matches.len())
        .max()
        .unwrap_or(0);

    let mut header = format!("{:<15}", "Round");
    for court in 1..=courts {
        header.push_str(&format!("{:<35}", format!("Court {court}")));
    }
    let rest_column = header.len();
    header.push_str("Rest");

    let mut table = header;
    table.push('\n');

    for (index, round) in schedule.rounds.iter().enumerate() {
        let mut line = format!("{:<15}", index + 1);
        for m in &round.matches {
            line.push_str(&format!("{:<35}", m.to_string()));
        }
        while line.len() < rest_column {
            line.push(' ');
        }
        line.push_str(&id_tuple(&round.resting));
        table.push_str(&line);
        table.push('\n');
    }

    table
}

/// Print the table to stdout.
pub fn print_table(schedule: &Schedule) {
    print!("{}", render_table(schedule));
}
