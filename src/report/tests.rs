use crate::backend::models::SaveAttemptRequest;
use crate::game::models::RoundResult;
use crate::report::GameReport;

fn fake_rounds() -> Vec<RoundResult> {
    vec![
        RoundResult {
            round: 1,
            distance_meters: 120,
            points: 4_525,
            time: String::from("0:45"),
        },
        RoundResult {
            round: 2,
            distance_meters: 0,
            points: 5_000,
            time: String::from("1:05"),
        },
        RoundResult {
            round: 3,
            distance_meters: 2_000,
            points: 0,
            time: String::from("2:30"),
        },
    ]
}

#[test]
fn test_totals_aggregate_every_round() {
    let report = GameReport::new(&fake_rounds(), 9_525);

    assert_eq!(report.total_distance_meters, 2_120);
    assert_eq!(report.total_points, 9_525);
    assert_eq!(report.total_time_secs, 260);
    assert_eq!(
        report.totals(),
        SaveAttemptRequest {
            total_distance: 2_120,
            total_points: 9_525,
            total_time: String::from("4:20"),
        }
    );
}

#[test]
fn test_report_renders_breakdown_and_totals_line() {
    let report = GameReport::new(&fake_rounds(), 9_525);

    let expected = "Раунд 1: 120 м - 4525 очков - 0:45\n\
                    Раунд 2: 0 м - 5000 очков - 1:05\n\
                    Раунд 3: 2000 м - 0 очков - 2:30\n\
                    Итого: 2120 м - 9525 очков - 4:20";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn test_empty_report() {
    let report = GameReport::new(&[], 0);

    assert_eq!(report.total_distance_meters, 0);
    assert_eq!(report.total_time_secs, 0);
    assert_eq!(report.to_string(), "Итого: 0 м - 0 очков - 0:00");
}
