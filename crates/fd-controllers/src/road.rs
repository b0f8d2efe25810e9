//! Road-condition adaptation: surface and visibility codes drive a speed
//! adjustment and a brake-sensitivity level.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const ROAD_CONDITION: ControllerDef = ControllerDef {
    id: ControllerId::RoadCondition,
    name: "road-condition",
    description: "Speed adjustment and brake sensitivity from surface and visibility",
    variables: &[
        // Surface code: 0 dry, 1 wet, 2 icy.
        VariableDef {
            name: "road",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("dry", [0.0, 0.0, 0.0]),
                ("wet", [1.0, 1.0, 1.0]),
                ("icy", [2.0, 2.0, 2.0]),
            ],
        },
        // Visibility code: 0 clear, 1 foggy, 2 poor.
        VariableDef {
            name: "visibility",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("clear", [0.0, 0.0, 0.0]),
                ("foggy", [1.0, 1.0, 1.0]),
                ("poor", [2.0, 2.0, 2.0]),
            ],
        },
        // Speed adjustment code: 0 slow down, 1 maintain, 2 speed up.
        VariableDef {
            name: "speed",
            role: Consequent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("slow", [0.0, 0.0, 0.0]),
                ("maintain", [1.0, 1.0, 1.0]),
                ("fast", [2.0, 2.0, 2.0]),
            ],
        },
        // Brake sensitivity code: 0 low, 1 medium, 2 high.
        VariableDef {
            name: "brake",
            role: Consequent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("low", [0.0, 0.0, 0.0]),
                ("medium", [1.0, 1.0, 1.0]),
                ("high", [2.0, 2.0, 2.0]),
            ],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("road", "dry"), &Is("visibility", "clear")),
            then: &[("speed", "maintain"), ("brake", "low")],
        },
        RuleDef {
            when: And(&Is("road", "dry"), &Is("visibility", "foggy")),
            then: &[("speed", "slow"), ("brake", "medium")],
        },
        RuleDef {
            when: And(&Is("road", "dry"), &Is("visibility", "poor")),
            then: &[("speed", "slow"), ("brake", "high")],
        },
        RuleDef {
            when: And(&Is("road", "wet"), &Is("visibility", "clear")),
            then: &[("speed", "maintain"), ("brake", "medium")],
        },
        RuleDef {
            when: And(&Is("road", "wet"), &Is("visibility", "foggy")),
            then: &[("speed", "slow"), ("brake", "medium")],
        },
        RuleDef {
            when: And(&Is("road", "wet"), &Is("visibility", "poor")),
            then: &[("speed", "slow"), ("brake", "high")],
        },
        RuleDef {
            when: And(&Is("road", "icy"), &Is("visibility", "clear")),
            then: &[("speed", "slow"), ("brake", "high")],
        },
        RuleDef {
            when: And(&Is("road", "icy"), &Is("visibility", "foggy")),
            then: &[("speed", "slow"), ("brake", "high")],
        },
        RuleDef {
            when: And(&Is("road", "icy"), &Is("visibility", "poor")),
            then: &[("speed", "slow"), ("brake", "high")],
        },
    ],
};
