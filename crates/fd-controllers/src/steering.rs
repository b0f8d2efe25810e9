//! Steering control: lane deviation, road curvature, and obstacle position
//! drive a single steering-angle command.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const STEERING_CONTROL: ControllerDef = ControllerDef {
    id: ControllerId::SteeringControl,
    name: "steering-control",
    description: "Steering angle from lane deviation, curvature, and obstacle position",
    variables: &[
        // Lane deviation code: -1 left, 0 center, 1 right.
        VariableDef {
            name: "lane_dev",
            role: Antecedent,
            universe: (-1.0, 1.0, 1.0),
            terms: &[
                ("left", [-1.0, -1.0, 0.0]),
                ("center", [-1.0, 0.0, 1.0]),
                ("right", [0.0, 1.0, 1.0]),
            ],
        },
        VariableDef {
            name: "curvature",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("straight", [0.0, 0.0, 30.0]),
                ("mild", [20.0, 50.0, 80.0]),
                ("sharp", [60.0, 100.0, 100.0]),
            ],
        },
        // Obstacle position code: -1 left, 0 center, 1 right.
        VariableDef {
            name: "obstacle",
            role: Antecedent,
            universe: (-1.0, 1.0, 1.0),
            terms: &[
                ("left", [-1.0, -1.0, 0.0]),
                ("center", [-1.0, 0.0, 1.0]),
                ("right", [0.0, 1.0, 1.0]),
            ],
        },
        VariableDef {
            name: "steering",
            role: Consequent,
            universe: (-100.0, 100.0, 1.0),
            terms: &[
                ("sharp_left", [-100.0, -100.0, -50.0]),
                ("slight_left", [-80.0, -40.0, 0.0]),
                ("straight", [-10.0, 0.0, 10.0]),
                ("slight_right", [0.0, 40.0, 80.0]),
                ("sharp_right", [50.0, 100.0, 100.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("lane_dev", "left"), &Is("curvature", "straight")),
            then: &[("steering", "slight_right")],
        },
        RuleDef {
            when: And(&Is("lane_dev", "right"), &Is("curvature", "straight")),
            then: &[("steering", "slight_left")],
        },
        RuleDef {
            when: And(&Is("lane_dev", "left"), &Is("curvature", "mild")),
            then: &[("steering", "slight_right")],
        },
        RuleDef {
            when: And(&Is("lane_dev", "right"), &Is("curvature", "mild")),
            then: &[("steering", "slight_left")],
        },
        RuleDef {
            when: And(&Is("lane_dev", "left"), &Is("curvature", "sharp")),
            then: &[("steering", "sharp_right")],
        },
        RuleDef {
            when: And(&Is("lane_dev", "right"), &Is("curvature", "sharp")),
            then: &[("steering", "sharp_left")],
        },
        RuleDef {
            when: Is("lane_dev", "center"),
            then: &[("steering", "straight")],
        },
        RuleDef {
            when: Is("obstacle", "left"),
            then: &[("steering", "sharp_right")],
        },
        RuleDef {
            when: Is("obstacle", "right"),
            then: &[("steering", "sharp_left")],
        },
        RuleDef {
            when: Is("obstacle", "center"),
            then: &[("steering", "slight_right")],
        },
        RuleDef {
            when: And(&Is("curvature", "sharp"), &Is("obstacle", "right")),
            then: &[("steering", "sharp_left")],
        },
        RuleDef {
            when: And(&Is("curvature", "sharp"), &Is("obstacle", "left")),
            then: &[("steering", "sharp_right")],
        },
        RuleDef {
            when: And(&Is("curvature", "mild"), &Is("obstacle", "right")),
            then: &[("steering", "slight_left")],
        },
        RuleDef {
            when: And(&Is("curvature", "mild"), &Is("obstacle", "left")),
            then: &[("steering", "slight_right")],
        },
        RuleDef {
            when: And(&Is("curvature", "straight"), &Is("obstacle", "center")),
            then: &[("steering", "slight_right")],
        },
    ],
};
