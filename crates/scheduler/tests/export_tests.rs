//! Round-trip tests over real search output.

use schedule_core::{Optimizer, ScheduleParams};
use scheduler::{read_csv, read_json, write_csv, write_json};

fn searched_schedule() -> schedule_core::Schedule {
    let params = ScheduleParams {
        courts: 2,
        breaks_per_player: 1,
        player_count: 10,
        rounds: 5,
        team_size: 2,
    };
    Optimizer::new(params, 10, 42)
        .expect("valid params")
        .run()
        .schedule
}

#[test]
fn csv_round_trip_of_a_search_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.csv");

    let schedule = searched_schedule();
    write_csv(&schedule, &path).unwrap();
    let restored = read_csv(&path).unwrap();

    assert_eq!(restored, schedule);
}

#[test]
fn json_round_trip_of_a_search_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");

    let schedule = searched_schedule();
    write_json(&schedule, &path).unwrap();
    assert_eq!(read_json(&path).unwrap(), schedule);
}
