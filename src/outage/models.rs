//! Outage record types as served by the upstream feed and as returned to clients.

use super::crew_status_detail;
use crate::geo::{is_point_in_polygon, polygon_coords, Coordinate};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One outage event from the upstream feed.
///
/// Fields are carried as raw JSON and passed through to clients untouched, so
/// a record with an unexpected value type still parses. Missing fields are
/// `Null`. Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Outage {
    pub id: Value,
    pub municipality: Value,
    pub area: Value,
    pub cause: Value,
    pub num_customers_out: Value,
    pub crew_status: Value,
    pub crew_status_description: Value,
    pub date_off: Value,
    pub date_on: Value,
    pub last_updated: Value,
    pub region_name: Value,
    pub show_etr: Value,
    pub crew_etr: Value,
    pub latitude: Value,
    pub longitude: Value,
    pub polygon: Value,
}

impl Outage {
    /// Build a record from one element of the feed array.
    ///
    /// Anything that is not a JSON object becomes an empty record, which is
    /// still counted but never matches a coordinate.
    fn from_record(record: Value) -> Self {
        if !record.is_object() {
            tracing::warn!("Skipping non-object outage record: {}", record);
            return Self::default();
        }

        serde_json::from_value(record).unwrap_or_else(|e| {
            tracing::warn!("Skipping unreadable outage record: {}", e);
            Self::default()
        })
    }

    /// True if this outage's polygon contains `point`.
    ///
    /// Records without a polygon, or with one that is empty or malformed,
    /// never match.
    pub fn affects(&self, point: Coordinate) -> bool {
        polygon_coords(&self.polygon)
            .is_some_and(|coords| is_point_in_polygon(point.lat, point.lon, &coords))
    }
}

/// Parse the raw feed body into outage records.
///
/// Only a body that is not a JSON array is an error; individual records are
/// read leniently.
pub fn parse_outages(body: &str) -> Result<Vec<Outage>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(Outage::from_record).collect())
}

/// Client-facing projection of an [`Outage`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageSummary {
    pub id: Value,
    pub municipality: Value,
    pub area: Value,
    pub cause: Value,
    pub num_customers_out: Value,
    pub crew_status: Value,
    pub crew_status_description: Value,
    pub crew_status_detail: Option<&'static str>,
    pub date_off: Value,
    pub date_on: Value,
    pub last_updated: Value,
    pub region_name: Value,
    pub show_etr: Value,
    pub crew_etr: Value,
    pub latitude: Value,
    pub longitude: Value,
}

impl From<&Outage> for OutageSummary {
    fn from(outage: &Outage) -> Self {
        Self {
            id: outage.id.clone(),
            municipality: outage.municipality.clone(),
            area: outage.area.clone(),
            cause: outage.cause.clone(),
            num_customers_out: outage.num_customers_out.clone(),
            crew_status: outage.crew_status.clone(),
            crew_status_description: outage.crew_status_description.clone(),
            crew_status_detail: crew_status_detail(outage.crew_status.as_str()),
            date_off: outage.date_off.clone(),
            date_on: outage.date_on.clone(),
            last_updated: outage.last_updated.clone(),
            region_name: outage.region_name.clone(),
            show_etr: outage.show_etr.clone(),
            crew_etr: outage.crew_etr.clone(),
            latitude: outage.latitude.clone(),
            longitude: outage.longitude.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outage::CrewStatus;
    use serde_json::json;

    const VANCOUVER: Coordinate = Coordinate { lat: 49.2827, lon: -123.1207 };

    fn with_polygon(polygon: Value) -> Outage {
        Outage { polygon, ..Default::default() }
    }

    #[test]
    fn test_parse_feed_record() {
        let body = r#"[{
            "id": 1234567,
            "municipality": "Vancouver",
            "area": "Kitsilano",
            "cause": "Tree down across our wires",
            "numCustomersOut": 312,
            "crewStatus": "ASSIGNED",
            "crewStatusDescription": "Crew assigned",
            "dateOff": 1760000000000,
            "dateOn": null,
            "lastUpdated": 1760000600000,
            "regionName": "Lower Mainland",
            "showEtr": false,
            "crewEtr": null,
            "latitude": 49.268,
            "longitude": -123.168,
            "polygon": [-123.18, 49.26, -123.16, 49.26, -123.16, 49.28],
            "gisId": 99
        }]"#;

        let outages = parse_outages(body).unwrap();
        assert_eq!(outages.len(), 1);
        let outage = &outages[0];
        assert_eq!(outage.id, 1234567);
        assert_eq!(outage.num_customers_out, 312);
        assert!(outage.date_on.is_null());
        assert_eq!(outage.show_etr, false);
    }

    #[test]
    fn test_parse_sparse_record() {
        let outages = parse_outages(r#"[{"id": "abc"}, {}]"#).unwrap();
        assert_eq!(outages.len(), 2);
        assert_eq!(outages[0].id, "abc");
        assert_eq!(outages[1], Outage::default());
    }

    #[test]
    fn test_odd_field_types_do_not_sink_the_feed() {
        let body = r#"[
            {"id": 1, "numCustomersOut": 12.5,
             "polygon": [-123.15, 49.27, -123.1, 49.27, -123.1, 49.29]},
            {"id": 2, "numCustomersOut": -1, "dateOff": 1.5e12, "latitude": "49.2"},
            {"id": 3, "polygon": [-123.15, 49.27, -123.1, 49.27, -123.1, 49.29, -123.15, 49.29]}
        ]"#;

        let outages = parse_outages(body).unwrap();
        assert_eq!(outages.len(), 3);
        assert_eq!(outages[0].num_customers_out, 12.5);
        assert_eq!(outages[1].num_customers_out, -1);
        assert_eq!(outages[1].latitude, "49.2");
        assert!(outages[2].affects(VANCOUVER));
    }

    #[test]
    fn test_non_object_records_are_kept_but_never_match() {
        let outages = parse_outages(r#"[null, 7, "x", [1, 2], {"id": 9}]"#).unwrap();
        assert_eq!(outages.len(), 5);
        assert!(outages[..4].iter().all(|o| *o == Outage::default()));
        assert_eq!(outages[4].id, 9);
        assert!(outages.iter().all(|o| !o.affects(VANCOUVER)));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_outages(r#"{"outages": []}"#).is_err());
        assert!(parse_outages("not json").is_err());
    }

    #[test]
    fn test_summary_passes_fields_through() {
        let outage = Outage {
            id: json!(7),
            num_customers_out: json!(12.5),
            crew_status: json!("ENROUTE"),
            polygon: json!([0, 0, 10, 0, 5, 10]),
            ..Default::default()
        };
        let summary = OutageSummary::from(&outage);
        assert_eq!(summary.crew_status_detail, Some(CrewStatus::Enroute.detail()));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("polygon").is_none());
        assert_eq!(json["id"], 7);
        assert_eq!(json["numCustomersOut"], 12.5);
        assert_eq!(json["crewStatus"], "ENROUTE");
        assert!(json["dateOn"].is_null());
    }

    #[test]
    fn test_summary_unknown_or_odd_crew_status() {
        for crew_status in [json!("DISPATCHED"), json!(3), Value::Null] {
            let outage = Outage { crew_status, ..Default::default() };
            assert_eq!(OutageSummary::from(&outage).crew_status_detail, None);
        }
    }

    #[test]
    fn test_affects() {
        let outage = with_polygon(json!([
            -123.15, 49.27, -123.1, 49.27, -123.1, 49.29, -123.15, 49.29
        ]));
        assert!(outage.affects(VANCOUVER));
        assert!(!outage.affects(Coordinate { lat: 48.4284, lon: -123.3656 }));
    }

    #[test]
    fn test_missing_or_malformed_polygon_never_affects() {
        let cases = [
            Value::Null,
            json!([]),
            json!([-123.15, 49.27, -123.1]),
            json!([-123.15, 49.27, "x", 49.27, -123.1, 49.29]),
            json!({"type": "Polygon"}),
        ];
        for polygon in cases {
            assert!(!with_polygon(polygon).affects(VANCOUVER));
        }
    }
}
