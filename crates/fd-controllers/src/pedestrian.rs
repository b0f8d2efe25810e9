//! Pedestrian response: pedestrian distance and movement plus vehicle speed
//! drive deceleration and a warning-signal level.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const PEDESTRIAN_RESPONSE: ControllerDef = ControllerDef {
    id: ControllerId::PedestrianResponse,
    name: "pedestrian-response",
    description: "Deceleration and warning level from pedestrian distance, movement, and speed",
    variables: &[
        VariableDef {
            name: "ped_distance",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("close", [0.0, 0.0, 40.0]),
                ("medium", [30.0, 60.0, 90.0]),
                ("far", [80.0, 100.0, 100.0]),
            ],
        },
        // Movement code: 0 stationary, 1 walking, 2 running.
        VariableDef {
            name: "ped_movement",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("stationary", [0.0, 0.0, 0.0]),
                ("walking", [1.0, 1.0, 1.0]),
                ("running", [2.0, 2.0, 2.0]),
            ],
        },
        VariableDef {
            name: "vehicle_speed",
            role: Antecedent,
            universe: (0.0, 120.0, 1.0),
            terms: &[
                ("slow", [0.0, 0.0, 50.0]),
                ("normal", [30.0, 60.0, 90.0]),
                ("fast", [70.0, 120.0, 120.0]),
            ],
        },
        VariableDef {
            name: "deceleration",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[
                ("none", [0.0, 0.0, 2.0]),
                ("low", [1.0, 2.0, 4.0]),
                ("moderate", [3.0, 5.0, 7.0]),
                ("high", [6.0, 10.0, 10.0]),
            ],
        },
        VariableDef {
            name: "warning_signal",
            role: Consequent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("off", [0.0, 0.0, 10.0]),
                ("low", [10.0, 30.0, 50.0]),
                ("medium", [40.0, 60.0, 80.0]),
                ("high", [70.0, 100.0, 100.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("ped_distance", "close"), &Is("ped_movement", "walking")),
            then: &[("deceleration", "moderate"), ("warning_signal", "high")],
        },
        RuleDef {
            when: And(&Is("ped_distance", "close"), &Is("ped_movement", "running")),
            then: &[("deceleration", "high"), ("warning_signal", "high")],
        },
        RuleDef {
            when: And(&Is("ped_distance", "close"), &Is("ped_movement", "stationary")),
            then: &[("deceleration", "low"), ("warning_signal", "low")],
        },
        RuleDef {
            when: And(
                &And(&Is("ped_distance", "medium"), &Is("ped_movement", "walking")),
                &Is("vehicle_speed", "fast"),
            ),
            then: &[("deceleration", "moderate"), ("warning_signal", "low")],
        },
        RuleDef {
            when: And(
                &And(&Is("ped_distance", "medium"), &Is("ped_movement", "walking")),
                &Is("vehicle_speed", "slow"),
            ),
            then: &[("deceleration", "low"), ("warning_signal", "low")],
        },
        RuleDef {
            when: And(
                &And(&Is("ped_distance", "medium"), &Is("ped_movement", "running")),
                &Is("vehicle_speed", "fast"),
            ),
            then: &[("deceleration", "high"), ("warning_signal", "high")],
        },
        RuleDef {
            when: And(&Is("ped_distance", "medium"), &Is("ped_movement", "stationary")),
            then: &[("deceleration", "none"), ("warning_signal", "off")],
        },
        RuleDef {
            when: And(
                &And(&Is("ped_distance", "far"), &Is("ped_movement", "walking")),
                &Is("vehicle_speed", "fast"),
            ),
            then: &[("deceleration", "moderate"), ("warning_signal", "low")],
        },
        RuleDef {
            when: And(
                &And(&Is("ped_distance", "far"), &Is("ped_movement", "running")),
                &Is("vehicle_speed", "fast"),
            ),
            then: &[("deceleration", "moderate"), ("warning_signal", "medium")],
        },
        RuleDef {
            when: And(&Is("ped_distance", "far"), &Is("ped_movement", "stationary")),
            then: &[("deceleration", "none"), ("warning_signal", "off")],
        },
    ],
};
