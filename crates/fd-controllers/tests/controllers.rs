//! Behavioral scenarios for the catalog controllers.

use fd_controllers::{ControllerId, catalog, controller};
use fd_core::{Tolerances, nearly_equal};
use fd_engine::{EngineError, InputMap};

fn inputs(entries: &[(&str, f64)]) -> InputMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn every_controller_builds_and_lists_io() {
    for def in catalog() {
        let engine = def.build().unwrap();
        assert!(def.input_names().count() > 0, "{} has no inputs", def.name);
        assert!(def.output_names().count() > 0, "{} has no outputs", def.name);
        assert!(!engine.rules().is_empty(), "{} has no rules", def.name);
    }
}

#[test]
fn speed_control_brakes_when_tailgating_fast() {
    let engine = controller(ControllerId::SpeedControl).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("distance", 10.0), ("speed", 100.0), ("road", 1.0)]))
        .unwrap();
    // close AND fast fires at min(0.75, 0.6) = 0.6: hard braking, low accel.
    assert!(out["brake"] > 60.0 && out["brake"] < 100.0);
    assert!(out["acceleration"] < 4.0);
}

#[test]
fn speed_control_slippery_road_alone_triggers_caution() {
    let engine = controller(ControllerId::SpeedControl).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("distance", 80.0), ("speed", 40.0), ("road", 0.0)]))
        .unwrap();
    // Only the slippery rule fires: medium braking, reduced acceleration.
    assert!(out["brake"] > 30.0 && out["brake"] < 70.0);
    assert!(out["acceleration"] < 4.0);
}

#[test]
fn speed_control_requires_all_referenced_inputs() {
    let engine = controller(ControllerId::SpeedControl).build().unwrap();
    let err = engine
        .evaluate(&inputs(&[("distance", 10.0), ("speed", 100.0)]))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingInput {
            variable: "road".into(),
        }
    );
}

#[test]
fn steering_corrects_left_lane_drift_to_the_right() {
    let engine = controller(ControllerId::SteeringControl).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("lane_dev", -1.0), ("curvature", 10.0), ("obstacle", 0.0)]))
        .unwrap();
    assert!(out["steering"] > 0.0);
}

#[test]
fn steering_obstacle_dodge_overrides_centered_lane() {
    let engine = controller(ControllerId::SteeringControl).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("lane_dev", 0.0), ("curvature", 0.0), ("obstacle", -1.0)]))
        .unwrap();
    // "center -> straight" competes with the obstacle-left dodge to the
    // right; the dodge dominates.
    assert!(out["steering"] > 0.0);
}

#[test]
fn pedestrian_running_close_demands_hard_deceleration() {
    let engine = controller(ControllerId::PedestrianResponse).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[
            ("ped_distance", 10.0),
            ("ped_movement", 2.0),
            ("vehicle_speed", 100.0),
        ]))
        .unwrap();
    assert!(out["deceleration"] > 6.0);
    assert!(out["warning_signal"] > 70.0);
}

#[test]
fn pedestrian_far_and_stationary_is_calm() {
    let engine = controller(ControllerId::PedestrianResponse).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[
            ("ped_distance", 95.0),
            ("ped_movement", 0.0),
            ("vehicle_speed", 40.0),
        ]))
        .unwrap();
    assert!(out["deceleration"] < 2.0);
    assert!(out["warning_signal"] < 10.0);
}

#[test]
fn cruise_opens_throttle_with_clear_headway() {
    let engine = controller(ControllerId::AdaptiveCruise).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("distance", 80.0), ("relative_speed", 0.0)]))
        .unwrap();
    assert!(out["throttle"] > 7.0);
    assert!(out["brake"] < 30.0);
}

#[test]
fn cruise_brakes_hard_when_close_at_matched_speed() {
    let engine = controller(ControllerId::AdaptiveCruise).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("distance", 5.0), ("relative_speed", 0.0)]))
        .unwrap();
    assert!(out["brake"] > 70.0);
    assert!(out["throttle"] < 3.0);
}

#[test]
fn parking_square_entry_close_in_stops_straight() {
    let engine = controller(ControllerId::ParkingAssist).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("distance", 10.0), ("angle", 90.0)]))
        .unwrap();
    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };
    assert!(nearly_equal(out["steering"], 0.0, tol));
    assert!(out["speed"] < 1.0);
}

#[test]
fn obstacle_on_the_left_dodges_right() {
    let engine = controller(ControllerId::ObstacleAvoidance).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("obstacle_distance", 20.0), ("obstacle_position", 0.0)]))
        .unwrap();
    assert!(out["steering"] > 60.0);
    assert!(out["deceleration"] > 6.0);
}

#[test]
fn obstacle_far_away_keeps_course() {
    let engine = controller(ControllerId::ObstacleAvoidance).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("obstacle_distance", 95.0), ("obstacle_position", 1.0)]))
        .unwrap();
    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };
    assert!(nearly_equal(out["steering"], 0.0, tol));
    assert!(out["deceleration"] < 2.0);
}

#[test]
fn red_signal_means_stop_regardless_of_distance() {
    let engine = controller(ControllerId::TrafficSignal).build().unwrap();
    for distance in [10.0, 50.0, 90.0] {
        let out = engine
            .evaluate(&inputs(&[("signal", 0.0), ("distance", distance)]))
            .unwrap();
        assert_eq!(out["decision"], 0.0, "red at {distance} m must stop");
        assert!(out["deceleration"] > 0.0);
    }
}

#[test]
fn green_signal_means_go() {
    let engine = controller(ControllerId::TrafficSignal).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("signal", 2.0), ("distance", 50.0)]))
        .unwrap();
    assert_eq!(out["decision"], 1.0);
    assert!(out["deceleration"] < 3.0);
}

#[test]
fn icy_road_in_poor_visibility_slows_and_tightens_brakes() {
    let engine = controller(ControllerId::RoadCondition).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("road", 2.0), ("visibility", 2.0)]))
        .unwrap();
    // Fully degenerate consequents: the codes come back exactly.
    assert_eq!(out["speed"], 0.0);
    assert_eq!(out["brake"], 2.0);
}

#[test]
fn dry_clear_road_maintains_speed() {
    let engine = controller(ControllerId::RoadCondition).build().unwrap();
    let out = engine
        .evaluate(&inputs(&[("road", 0.0), ("visibility", 0.0)]))
        .unwrap();
    assert_eq!(out["speed"], 1.0);
    assert_eq!(out["brake"], 0.0);
}

#[test]
fn rebuilding_a_controller_is_reproducible() {
    let reading = inputs(&[("signal", 1.0), ("distance", 35.0)]);
    let first = controller(ControllerId::TrafficSignal)
        .build()
        .unwrap()
        .evaluate(&reading)
        .unwrap();
    let second = controller(ControllerId::TrafficSignal)
        .build()
        .unwrap()
        .evaluate(&reading)
        .unwrap();
    assert_eq!(first, second);
}
