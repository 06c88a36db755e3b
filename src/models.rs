use diesel::prelude::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::location)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::location)]
pub struct NewLocation<'a> {
    pub name: &'a str,
}

/// Route ids are authored in the catalog ("B1", "EXPRESSO"), never generated,
/// so the same struct both queries and inserts.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::route)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub trip_length: f64,
    pub departure_location_id: i64,
    pub arrival_location_id: i64,
    pub notes: Vec<String>,
}

/// Lightweight id + name projection of the route table, for listing UIs.
#[derive(Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::route)]
pub struct RouteName {
    pub id: String,
    pub name: String,
}

/// One location's participation in a route. Holds only the owning route id,
/// not a back-pointer to the full route, so serialization never cycles.
#[derive(Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::route_stop)]
pub struct RouteStop {
    pub id: i64,
    pub route_id: String,
    pub location_id: i64,
    pub stop_order: i32,
    pub is_departure: bool,
    pub is_arrival: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::route_stop)]
pub struct NewRouteStop {
    pub route_id: String,
    pub location_id: i64,
    pub stop_order: i32,
    pub is_departure: bool,
    pub is_arrival: bool,
}

/// A scheduled departure label like "6h30". Stored as text, not a parsed
/// time. Sequence within a route is insertion order.
#[derive(Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::departure_time)]
pub struct DepartureTime {
    pub id: i64,
    pub route_id: String,
    pub time: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::departure_time)]
pub struct NewDepartureTime {
    pub route_id: String,
    pub time: String,
}
