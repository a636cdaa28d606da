use dls_core::{
    calculate_target, format_overs_display, generate_scenarios, par_score_at, resource_percentage,
    to_decimal_overs, InningsSnapshot, MatchSettings, RESOURCE_TABLE,
};
use proptest::prelude::*;

fn notation_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=50, 0u32..=5)
}

fn innings_strategy() -> impl Strategy<Value = InningsSnapshot> {
    (0u32..=450, notation_strategy(), 0u32..=10).prop_map(|(runs, (whole, balls), wickets)| {
        InningsSnapshot::new(runs, (whole * 10 + balls) as f64 / 10.0, wickets)
    })
}

fn settings_strategy() -> impl Strategy<Value = MatchSettings> {
    (1u32..=50)
        .prop_flat_map(|total| (Just(total), 1u32..=total))
        .prop_map(|(total, allotted)| MatchSettings::revised(total, allotted as f64))
}

proptest! {
    #[test]
    fn resources_fall_as_overs_run_out(overs in 0.0f64..=50.0, step in 0.0f64..=10.0, wickets in 0u32..=10) {
        let fewer = (overs - step).max(0.0);
        prop_assert!(resource_percentage(fewer, wickets as f64) <= resource_percentage(overs, wickets as f64) + 1e-9);
    }

    #[test]
    fn resources_fall_as_wickets_fall(overs in 0.0f64..=50.0, wickets in 0u32..10) {
        let before = resource_percentage(overs, wickets as f64);
        let after = resource_percentage(overs, (wickets + 1) as f64);
        prop_assert!(after <= before + 1e-9);
    }

    #[test]
    fn resources_stay_in_range(overs in -20.0f64..=80.0, wickets in -3.0f64..=14.0) {
        let value = resource_percentage(overs, wickets);
        prop_assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn all_out_has_no_resource(overs in -5.0f64..=60.0) {
        prop_assert_eq!(resource_percentage(overs, 10.0), 0.0);
    }

    #[test]
    fn whole_overs_read_the_table(overs in 0usize..=50, wickets in 0usize..=10) {
        prop_assert_eq!(resource_percentage(overs as f64, wickets as f64), RESOURCE_TABLE[overs][wickets]);
    }

    #[test]
    fn overs_notation_round_trips((whole, balls) in notation_strategy()) {
        let notation = (whole * 10 + balls) as f64 / 10.0;
        let expected = if balls == 0 { whole.to_string() } else { format!("{}.{}", whole, balls) };
        prop_assert_eq!(format_overs_display(to_decimal_overs(notation)), expected);
    }

    #[test]
    fn target_is_par_plus_one(first in innings_strategy(), settings in settings_strategy()) {
        if let Ok(result) = calculate_target(&first, &settings) {
            prop_assert_eq!(result.revised_target, result.par_score + 1);
            prop_assert!((0.0..=100.0).contains(&result.resource_team2_available));
        } else {
            prop_assert_eq!(first.decimal_overs(), 0.0);
        }
    }

    #[test]
    fn par_never_exceeds_par_at_full_allotment(
        first in innings_strategy(),
        settings in settings_strategy(),
        progress in innings_strategy(),
    ) {
        prop_assume!(first.decimal_overs() > 0.0);
        let target = calculate_target(&first, &settings).unwrap();
        let par = par_score_at(&first, &settings, &progress);
        prop_assert!(par <= target.par_score);
    }

    #[test]
    fn first_scenario_is_current_par(
        first in innings_strategy(),
        settings in settings_strategy(),
        progress in innings_strategy(),
    ) {
        let scenarios = generate_scenarios(&first, &settings, &progress);
        prop_assert!(!scenarios.is_empty());
        prop_assert_eq!(scenarios[0].par_score, par_score_at(&first, &settings, &progress));
    }
}

#[test]
fn zero_overs_bowled_has_no_result() {
    let first = InningsSnapshot::new(10, 0.0, 0);
    assert!(calculate_target(&first, &MatchSettings::revised(50, 50.0)).is_err());
}

#[test]
fn full_match_without_interruption() {
    let first = InningsSnapshot::new(250, 50.0, 5);
    let result = calculate_target(&first, &MatchSettings::revised(50, 50.0)).unwrap();
    assert_eq!(result.revised_target, 251);
}

#[test]
fn chase_cut_to_thirty_overs() {
    let first = InningsSnapshot::new(280, 50.0, 4);
    let settings = MatchSettings::revised(50, 30.0);
    let result = calculate_target(&first, &settings).unwrap();
    assert_eq!(result.par_score, 176);
    assert_eq!(result.revised_target, 177);

    let mid_chase = par_score_at(&first, &settings, &InningsSnapshot::new(0, 15.0, 2));
    assert!(mid_chase > 0 && mid_chase < result.revised_target);
}
