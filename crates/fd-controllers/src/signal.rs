//! Traffic-signal response: signal color and distance to the stop line drive
//! deceleration and a stop/go decision.

use fd_engine::Role::{Antecedent, Consequent};

use crate::catalog::ControllerId;
use crate::def::{
    ControllerDef,
    ExprDef::{And, Is},
    RuleDef, VariableDef,
};

pub(crate) const TRAFFIC_SIGNAL: ControllerDef = ControllerDef {
    id: ControllerId::TrafficSignal,
    name: "traffic-signal",
    description: "Deceleration and stop/go decision from signal color and distance",
    variables: &[
        // Signal code: 0 red, 1 yellow, 2 green.
        VariableDef {
            name: "signal",
            role: Antecedent,
            universe: (0.0, 2.0, 1.0),
            terms: &[
                ("red", [0.0, 0.0, 0.0]),
                ("yellow", [1.0, 1.0, 1.0]),
                ("green", [2.0, 2.0, 2.0]),
            ],
        },
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
        VariableDef {
            name: "deceleration",
            role: Consequent,
            universe: (0.0, 10.0, 1.0),
            terms: &[
                ("none", [0.0, 0.0, 3.0]),
                ("moderate", [2.0, 5.0, 7.0]),
                ("high", [6.0, 10.0, 10.0]),
            ],
        },
        // Decision code: 0 stop, 1 go.
        VariableDef {
            name: "decision",
            role: Consequent,
            universe: (0.0, 1.0, 1.0),
            terms: &[("stop", [0.0, 0.0, 0.0]), ("go", [1.0, 1.0, 1.0])],
        },
    ],
    rules: &[
        RuleDef {
            when: And(&Is("signal", "red"), &Is("distance", "close")),
            then: &[("deceleration", "high"), ("decision", "stop")],
        },
        RuleDef {
            when: And(&Is("signal", "red"), &Is("distance", "medium")),
            then: &[("deceleration", "moderate"), ("decision", "stop")],
        },
        RuleDef {
            when: And(&Is("signal", "red"), &Is("distance", "far")),
            then: &[("deceleration", "moderate"), ("decision", "stop")],
        },
        RuleDef {
            when: And(&Is("signal", "yellow"), &Is("distance", "close")),
            then: &[("deceleration", "high"), ("decision", "stop")],
        },
        RuleDef {
            when: And(&Is("signal", "yellow"), &Is("distance", "medium")),
            then: &[("deceleration", "moderate"), ("decision", "stop")],
        },
        RuleDef {
            when: And(&Is("signal", "yellow"), &Is("distance", "far")),
            then: &[("deceleration", "none"), ("decision", "go")],
        },
        RuleDef {
            when: And(&Is("signal", "green"), &Is("distance", "close")),
            then: &[("deceleration", "none"), ("decision", "go")],
        },
        RuleDef {
            when: And(&Is("signal", "green"), &Is("distance", "medium")),
            then: &[("deceleration", "none"), ("decision", "go")],
        },
        RuleDef {
            when: And(&Is("signal", "green"), &Is("distance", "far")),
            then: &[("deceleration", "none"), ("decision", "go")],
        },
    ],
};
