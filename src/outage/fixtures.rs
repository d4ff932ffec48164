//! Canned outage data served in test mode.
//!
//! Lets client integrations exercise the "affected", "not affected" and
//! "several outages" paths without a live outage anywhere near them.

use super::{CrewStatus, Outage};
use crate::geo::Coordinate;

use chrono::Utc;
use serde_json::{json, Value};

/// Coordinate every test-mode request is answered for.
pub const VANCOUVER_DOWNTOWN: Coordinate = Coordinate { lat: 49.2827, lon: -123.1207 };

const HOUR_MS: i64 = 3_600_000;

/// A canned dataset selectable with the `test` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestScenario {
    /// One outage covering downtown Vancouver.
    Outage,
    /// One outage in Victoria, away from the test coordinate.
    NoOutage,
    /// Two overlapping Vancouver outages and one in Kelowna.
    Multiple,
}

impl TestScenario {
    pub const ALL: [TestScenario; 3] = [Self::Outage, Self::NoOutage, Self::Multiple];

    pub fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == param)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outage => "outage",
            Self::NoOutage => "no-outage",
            Self::Multiple => "multiple",
        }
    }
}

/// Outcome of checking a `test` parameter against configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestModeStatus {
    pub enabled: bool,
    pub valid: bool,
    pub mode: Option<TestScenario>,
}

/// Resolve the `test` parameter. When test mode is disabled the parameter is
/// ignored and reported as valid.
pub fn test_mode_status(enabled: bool, param: &str) -> TestModeStatus {
    if !enabled {
        return TestModeStatus { enabled: false, valid: true, mode: None };
    }

    let mode = TestScenario::from_param(param);
    TestModeStatus { enabled: true, valid: mode.is_some(), mode }
}

/// Shared shape of a canned outage; timestamps are filled in at build time.
struct Fixture {
    id: &'static str,
    municipality: &'static str,
    area: &'static str,
    cause: &'static str,
    customers: u64,
    crew: CrewStatus,
    region: &'static str,
    location: (f64, f64),
    polygon: Value,
}

impl Fixture {
    /// Outage that went off an hour ago with restoration due in two hours.
    fn build(self, now: i64) -> Outage {
        let (lat, lon) = self.location;
        Outage {
            id: json!(self.id),
            municipality: json!(self.municipality),
            area: json!(self.area),
            cause: json!(format!("{} (TEST DATA)", self.cause)),
            num_customers_out: json!(self.customers),
            crew_status: json!(self.crew.code()),
            crew_status_description: json!(crew_description(self.crew)),
            date_off: json!(now - HOUR_MS),
            date_on: json!(now + 2 * HOUR_MS),
            last_updated: json!(now),
            region_name: json!(self.region),
            show_etr: json!(true),
            crew_etr: json!(now + 2 * HOUR_MS),
            latitude: json!(lat),
            longitude: json!(lon),
            polygon: self.polygon,
        }
    }
}

/// Build the outage set for `scenario`, timestamped relative to now.
pub fn test_outages(scenario: TestScenario) -> Vec<Outage> {
    let now = Utc::now().timestamp_millis();

    match scenario {
        TestScenario::Outage => vec![Fixture {
            id: "test-outage-001",
            municipality: "Vancouver",
            area: "Downtown",
            cause: "Equipment failure",
            customers: 1500,
            crew: CrewStatus::Onsite,
            region: "Lower Mainland",
            location: (49.2827, -123.1207),
            polygon: vancouver_downtown_polygon(),
        }
        .build(now)],
        TestScenario::NoOutage => vec![Fixture {
            id: "test-outage-002",
            municipality: "Victoria",
            area: "James Bay",
            cause: "Tree down across our wires",
            customers: 245,
            crew: CrewStatus::Enroute,
            region: "Vancouver Island",
            location: (48.4284, -123.3656),
            polygon: victoria_polygon(),
        }
        .build(now)],
        TestScenario::Multiple => vec![
            Fixture {
                id: "test-outage-003",
                municipality: "Vancouver",
                area: "Downtown Core",
                cause: "Underground cable fault",
                customers: 850,
                crew: CrewStatus::Onsite,
                region: "Lower Mainland",
                location: (49.2827, -123.1207),
                polygon: vancouver_downtown_polygon(),
            }
            .build(now),
            Outage {
                date_off: json!(now - HOUR_MS - HOUR_MS / 2),
                date_on: json!(now + 2 * HOUR_MS + HOUR_MS / 2),
                last_updated: json!(now - HOUR_MS / 4),
                crew_etr: json!(now + 2 * HOUR_MS + HOUR_MS / 2),
                ..Fixture {
                    id: "test-outage-004",
                    municipality: "Vancouver",
                    area: "West End",
                    cause: "Motor vehicle accident",
                    customers: 420,
                    crew: CrewStatus::Assigned,
                    region: "Lower Mainland",
                    location: (49.285, -123.13),
                    polygon: west_end_polygon(),
                }
                .build(now)
            },
            Outage {
                show_etr: json!(false),
                crew_etr: Value::Null,
                ..Fixture {
                    id: "test-outage-005",
                    municipality: "Kelowna",
                    area: "Rutland",
                    cause: "Planned maintenance",
                    customers: 125,
                    crew: CrewStatus::NotAssigned,
                    region: "Interior",
                    location: (49.888, -119.496),
                    polygon: kelowna_polygon(),
                }
                .build(now)
            },
        ],
    }
}

fn crew_description(status: CrewStatus) -> &'static str {
    match status {
        CrewStatus::NotAssigned => "Not assigned",
        CrewStatus::Assigned => "Crew assigned",
        CrewStatus::Enroute => "Crew en route",
        CrewStatus::Onsite => "Crew on-site",
        CrewStatus::Suspended => "Suspended",
    }
}

// Closed boxes in feed order: [lon, lat, ...], SW, SE, NE, NW, SW.

fn vancouver_downtown_polygon() -> Value {
    json!([-123.15, 49.27, -123.1, 49.27, -123.1, 49.29, -123.15, 49.29, -123.15, 49.27])
}

fn west_end_polygon() -> Value {
    json!([-123.16, 49.275, -123.12, 49.275, -123.12, 49.295, -123.16, 49.295, -123.16, 49.275])
}

fn victoria_polygon() -> Value {
    json!([-123.4, 48.4, -123.3, 48.4, -123.3, 48.45, -123.4, 48.45, -123.4, 48.4])
}

fn kelowna_polygon() -> Value {
    json!([-119.55, 49.85, -119.45, 49.85, -119.45, 49.93, -119.55, 49.93, -119.55, 49.85])
}
