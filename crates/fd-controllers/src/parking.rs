//! Parking assist: obstacle distance and entry angle drive steering and a
//! creep-speed command.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const PARKING_ASSIST: ControllerDef = ControllerDef {
    id: ControllerId::ParkingAssist,
    name: "parking-assist",
    description: "Steering and creep speed from obstacle distance and entry angle",
    variables: &[
        VariableDef {
            name: "distance",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("close", [0.0, 0.0, 30.0]),
                ("medium", [20.0, 50.0, 80.0]),
                ("far", [70.0, 100.0, 100.0]),
            ],
        },
        // Degrees into the parking spot; 90 is square-on.
        VariableDef {
            name: "angle",
            role: Antecedent,
            universe: (0.0, 180.0, 1.0),
            terms: &[
                ("acute", [0.0, 0.0, 60.0]),
                ("right", [60.0, 90.0, 120.0]),
                ("obtuse", [120.0, 180.0, 180.0]),
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
            name: "speed",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[("stop", [0.0, 0.0, 2.0]), ("slow", [2.0, 6.0, 10.0])],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("distance", "close"), &Is("angle", "acute")),
            then: &[("steering", "sharp_right"), ("speed", "slow")],
        },
        RuleDef {
            when: And(&Is("distance", "close"), &Is("angle", "obtuse")),
            then: &[("steering", "sharp_left"), ("speed", "slow")],
        },
        RuleDef {
            when: And(&Is("distance", "medium"), &Is("angle", "right")),
            then: &[("steering", "straight"), ("speed", "slow")],
        },
        RuleDef {
            when: And(&Is("distance", "far"), &Is("angle", "acute")),
            then: &[("steering", "slight_right"), ("speed", "slow")],
        },
        RuleDef {
            when: And(&Is("distance", "far"), &Is("angle", "obtuse")),
            then: &[("steering", "slight_left"), ("speed", "slow")],
        },
        RuleDef {
            when: And(&Is("distance", "close"), &Is("angle", "right")),
            then: &[("steering", "straight"), ("speed", "stop")],
        },
    ],
};
