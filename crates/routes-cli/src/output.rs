// crates/routes-cli/src/output.rs
//
// Output formatting for the sample binaries.

use tabled::{Table, Tabled};

use routes_core::{RouteMatrixElement, RouteMatrixElementCondition, RpcStatus};

/// A row in the route matrix summary table.
#[derive(Debug, Tabled)]
pub struct MatrixRow {
    #[tabled(rename = "Origin")]
    pub origin: i32,
    #[tabled(rename = "Destination")]
    pub destination: i32,
    #[tabled(rename = "Condition")]
    pub condition: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Distance (m)")]
    pub distance_meters: i32,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

impl From<&RouteMatrixElement> for MatrixRow {
    fn from(element: &RouteMatrixElement) -> Self {
        Self {
            origin: element.origin_index,
            destination: element.destination_index,
            condition: condition_label(element.condition).to_string(),
            status: status_label(element.status.as_ref()),
            distance_meters: element.distance_meters,
            duration: format_duration(element.duration.as_ref()),
        }
    }
}

fn condition_label(raw: i32) -> &'static str {
    match RouteMatrixElementCondition::try_from(raw) {
        Ok(RouteMatrixElementCondition::RouteExists) => "ROUTE_EXISTS",
        Ok(RouteMatrixElementCondition::RouteNotFound) => "ROUTE_NOT_FOUND",
        Ok(RouteMatrixElementCondition::Unspecified) => "UNSPECIFIED",
        Err(_) => "UNKNOWN",
    }
}

/// `OK`, or the per-element error code and message.
fn status_label(status: Option<&RpcStatus>) -> String {
    match status {
        None => "OK".to_string(),
        Some(s) if s.is_ok() => "OK".to_string(),
        Some(s) => format!("{}: {}", s.code, s.message),
    }
}

/// Render a protobuf duration as seconds, e.g. `165s` or `12.5s`.
pub fn format_duration(duration: Option<&prost_types::Duration>) -> String {
    match duration {
        None => "--".to_string(),
        Some(d) if d.nanos == 0 => format!("{}s", d.seconds),
        Some(d) => format!("{:.1}s", d.seconds as f64 + d.nanos as f64 / 1e9),
    }
}

/// Format received matrix elements as a table, in arrival order.
pub fn format_matrix(elements: &[RouteMatrixElement]) -> String {
    let rows: Vec<MatrixRow> = elements.iter().map(MatrixRow::from).collect();
    Table::new(&rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reflects_element() {
        let element = RouteMatrixElement {
            origin_index: 1,
            destination_index: 0,
            condition: RouteMatrixElementCondition::RouteExists as i32,
            distance_meters: 2_313,
            duration: Some(prost_types::Duration {
                seconds: 410,
                nanos: 0,
            }),
            ..Default::default()
        };
        let row = MatrixRow::from(&element);
        assert_eq!(row.origin, 1);
        assert_eq!(row.destination, 0);
        assert_eq!(row.condition, "ROUTE_EXISTS");
        assert_eq!(row.status, "OK");
        assert_eq!(row.distance_meters, 2_313);
        assert_eq!(row.duration, "410s");
    }

    #[test]
    fn missing_duration_and_unknown_condition() {
        let element = RouteMatrixElement {
            condition: 42,
            ..Default::default()
        };
        let row = MatrixRow::from(&element);
        assert_eq!(row.condition, "UNKNOWN");
        assert_eq!(row.duration, "--");
    }

    #[test]
    fn failed_element_shows_its_status() {
        let element = RouteMatrixElement {
            condition: RouteMatrixElementCondition::RouteNotFound as i32,
            status: Some(RpcStatus {
                code: 5,
                message: "no route".into(),
            }),
            ..Default::default()
        };
        let row = MatrixRow::from(&element);
        assert_eq!(row.status, "5: no route");

        let zero = RouteMatrixElement {
            status: Some(RpcStatus::default()),
            ..Default::default()
        };
        assert_eq!(MatrixRow::from(&zero).status, "OK");
    }

    #[test]
    fn fractional_duration() {
        let d = prost_types::Duration {
            seconds: 12,
            nanos: 500_000_000,
        };
        assert_eq!(format_duration(Some(&d)), "12.5s");
    }

    #[test]
    fn table_has_header_and_rows() {
        let elements = vec![
            RouteMatrixElement {
                distance_meters: 100,
                ..Default::default()
            },
            RouteMatrixElement {
                origin_index: 1,
                destination_index: 1,
                distance_meters: 200,
                ..Default::default()
            },
        ];
        let table = format_matrix(&elements);
        assert!(table.contains("Distance (m)"));
        assert!(table.contains("100"));
        assert!(table.contains("200"));
    }
}
