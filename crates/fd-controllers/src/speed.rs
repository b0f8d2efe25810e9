//! Speed control: headway distance, own speed, and road surface drive
//! acceleration and brake commands.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const SPEED_CONTROL: ControllerDef = ControllerDef {
    id: ControllerId::SpeedControl,
    name: "speed-control",
    description: "Acceleration and braking from headway distance, speed, and road surface",
    variables: &[
        VariableDef {
            name: "distance",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("close", [0.0, 0.0, 40.0]),
                ("medium", [20.0, 50.0, 80.0]),
                ("far", [60.0, 100.0, 100.0]),
            ],
        },
        VariableDef {
            name: "speed",
            role: Antecedent,
            universe: (0.0, 120.0, 1.0),
            terms: &[
                ("slow", [0.0, 0.0, 50.0]),
                ("normal", [30.0, 60.0, 90.0]),
                ("fast", [70.0, 120.0, 120.0]),
            ],
        },
        // Surface code: 0 slippery, 1 normal, 2 rough.
        VariableDef {
            name: "road",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("slippery", [0.0, 0.0, 0.0]),
                ("normal", [1.0, 1.0, 1.0]),
                ("rough", [2.0, 2.0, 2.0]),
            ],
        },
        VariableDef {
            name: "acceleration",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[
                ("decrease", [0.0, 0.0, 4.0]),
                ("maintain", [3.0, 5.0, 7.0]),
                ("increase", [6.0, 10.0, 10.0]),
            ],
        },
        VariableDef {
            name: "brake",
            role: Consequent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("low", [0.0, 0.0, 40.0]),
                ("medium", [30.0, 50.0, 70.0]),
                ("high", [60.0, 100.0, 100.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("distance", "close"), &Is("speed", "fast")),
            then: &[("acceleration", "decrease"), ("brake", "high")],
        },
        RuleDef {
            when: Is("road", "slippery"),
            then: &[("acceleration", "decrease"), ("brake", "medium")],
        },
    ],
};
