//! Obstacle avoidance: obstacle distance and lateral position drive steering
//! and deceleration commands.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const OBSTACLE_AVOIDANCE: ControllerDef = ControllerDef {
    id: ControllerId::ObstacleAvoidance,
    name: "obstacle-avoidance",
    description: "Steering and deceleration from obstacle distance and lateral position",
    variables: &[
        VariableDef {
            name: "obstacle_distance",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("close", [0.0, 0.0, 40.0]),
                ("medium", [30.0, 50.0, 70.0]),
                ("far", [60.0, 100.0, 100.0]),
            ],
        },
        // Position code 0 left, 1 center, 2 right — overlapping triangles
        // rather than indicators, as the source rule base defines them.
        VariableDef {
            name: "obstacle_position",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("left", [0.0, 0.0, 1.0]),
                ("center", [0.5, 1.0, 1.5]),
                ("right", [1.0, 2.0, 2.0]),
            ],
        },
        VariableDef {
            name: "steering",
            role: Consequent,
            universe: (-100.0, 100.0, 1.0),
            terms: &[
                ("sharp_left", [-100.0, -100.0, -60.0]),
                ("slight_left", [-70.0, -40.0, -10.0]),
                ("straight", [-20.0, 0.0, 20.0]),
                ("slight_right", [10.0, 40.0, 70.0]),
                ("sharp_right", [60.0, 100.0, 100.0]),
            ],
        },
        VariableDef {
            name: "deceleration",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[
                ("none", [0.0, 0.0, 2.0]),
                ("moderate", [2.0, 5.0, 8.0]),
                ("high", [7.0, 10.0, 10.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("obstacle_distance", "close"), &Is("obstacle_position", "center")),
            then: &[("steering", "sharp_left"), ("deceleration", "moderate")],
        },
        RuleDef {
            when: And(&Is("obstacle_distance", "close"), &Is("obstacle_position", "left")),
            then: &[("steering", "sharp_right"), ("deceleration", "high")],
        },
        RuleDef {
            when: And(&Is("obstacle_distance", "close"), &Is("obstacle_position", "right")),
            then: &[("steering", "sharp_left"), ("deceleration", "high")],
        },
        RuleDef {
            when: And(&Is("obstacle_distance", "medium"), &Is("obstacle_position", "center")),
            then: &[("steering", "slight_left"), ("deceleration", "moderate")],
        },
        RuleDef {
            when: And(&Is("obstacle_distance", "medium"), &Is("obstacle_position", "left")),
            then: &[("steering", "slight_right"), ("deceleration", "moderate")],
        },
        RuleDef {
            when: And(&Is("obstacle_distance", "medium"), &Is("obstacle_position", "right")),
            then: &[("steering", "slight_left"), ("deceleration", "moderate")],
        },
        RuleDef {
            when: Is("obstacle_distance", "far"),
            then: &[("steering", "straight"), ("deceleration", "none")],
        },
    ],
};
