//! The eight-controller catalog.

use std::fmt;

use crate::def::ControllerDef;
use crate::{cruise, obstacle, parking, pedestrian, road, signal, speed, steering};

/// Identifies one advisory controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControllerId {
    SpeedControl,
    SteeringControl,
    PedestrianResponse,
    AdaptiveCruise,
    ParkingAssist,
    ObstacleAvoidance,
    TrafficSignal,
    RoadCondition,
}

impl ControllerId {
    pub const ALL: [ControllerId; 8] = [
        ControllerId::SpeedControl,
        ControllerId::SteeringControl,
        ControllerId::PedestrianResponse,
        ControllerId::AdaptiveCruise,
        ControllerId::ParkingAssist,
        ControllerId::ObstacleAvoidance,
        ControllerId::TrafficSignal,
        ControllerId::RoadCondition,
    ];
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(controller(*self).name)
    }
}

/// Look up one controller's definition table.
pub fn controller(id: ControllerId) -> &'static ControllerDef {
    match id {
        ControllerId::SpeedControl => &speed::SPEED_CONTROL,
        ControllerId::SteeringControl => &steering::STEERING_CONTROL,
        ControllerId::PedestrianResponse => &pedestrian::PEDESTRIAN_RESPONSE,
        ControllerId::AdaptiveCruise => &cruise::ADAPTIVE_CRUISE,
        ControllerId::ParkingAssist => &parking::PARKING_ASSIST,
        ControllerId::ObstacleAvoidance => &obstacle::OBSTACLE_AVOIDANCE,
        ControllerId::TrafficSignal => &signal::TRAFFIC_SIGNAL,
        ControllerId::RoadCondition => &road::ROAD_CONDITION,
    }
}

/// Every controller definition, in menu order.
pub fn catalog() -> impl Iterator<Item = &'static ControllerDef> {
    ControllerId::ALL.into_iter().map(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for def in catalog() {
            assert!(seen.insert(def.name), "duplicate controller name: {}", def.name);
        }
    }

    #[test]
    fn ids_match_their_entries() {
        for id in ControllerId::ALL {
            assert_eq!(controller(id).id, id);
        }
    }

    #[test]
    fn every_entry_builds() {
        for def in catalog() {
            def.build()
                .unwrap_or_else(|err| panic!("{} failed to build: {err}", def.name));
        }
    }
}
