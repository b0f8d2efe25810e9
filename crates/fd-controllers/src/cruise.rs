//! Adaptive cruise: headway distance and relative speed to the lead vehicle
//! drive throttle and brake commands.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const ADAPTIVE_CRUISE: ControllerDef = ControllerDef {
    id: ControllerId::AdaptiveCruise,
    name: "adaptive-cruise",
    description: "Throttle and braking from lead-vehicle distance and relative speed",
    variables: &[
        VariableDef {
            name: "distance",
            role: Antecedent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("close", [0.0, 0.0, 40.0]),
                ("medium", [30.0, 50.0, 70.0]),
                ("far", [60.0, 100.0, 100.0]),
            ],
        },
        // km/h relative to the lead vehicle; negative means closing slower.
        VariableDef {
            name: "relative_speed",
            role: Antecedent,
            universe: (-50.0, 50.0, 1.0),
            terms: &[
                ("slower", [-50.0, -50.0, 0.0]),
                ("same", [-10.0, 0.0, 10.0]),
                ("faster", [0.0, 50.0, 50.0]),
            ],
        },
        VariableDef {
            name: "throttle",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[
                ("decrease", [0.0, 0.0, 3.0]),
                ("maintain", [3.0, 5.0, 7.0]),
                ("increase", [7.0, 10.0, 10.0]),
            ],
        },
        VariableDef {
            name: "brake",
            role: Consequent,
            universe: (0.0, 100.0, 1.0),
            terms: &[
                ("low", [0.0, 0.0, 30.0]),
                ("medium", [20.0, 50.0, 80.0]),
                ("high", [70.0, 100.0, 100.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("distance", "close"), &Is("relative_speed", "slower")),
            then: &[("throttle", "decrease"), ("brake", "medium")],
        },
        RuleDef {
            when: And(&Is("distance", "close"), &Is("relative_speed", "same")),
            then: &[("throttle", "decrease"), ("brake", "high")],
        },
        RuleDef {
            when: And(&Is("distance", "medium"), &Is("relative_speed", "slower")),
            then: &[("throttle", "maintain"), ("brake", "low")],
        },
        RuleDef {
            when: And(&Is("distance", "medium"), &Is("relative_speed", "same")),
            then: &[("throttle", "maintain"), ("brake", "low")],
        },
        RuleDef {
            when: And(&Is("distance", "far"), &Is("relative_speed", "same")),
            then: &[("throttle", "increase"), ("brake", "low")],
        },
        RuleDef {
            when: And(&Is("distance", "far"), &Is("relative_speed", "faster")),
            then: &[("throttle", "increase"), ("brake", "low")],
        },
        RuleDef {
            when: And(&Is("distance", "far"), &Is("relative_speed", "slower")),
            then: &[("throttle", "maintain"), ("brake", "low")],
        },
    ],
};
