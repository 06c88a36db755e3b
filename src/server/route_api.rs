use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use diesel::prelude::*;
use diesel_async::AsyncPgConnection;
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use log::error;
use serde::{Deserialize, Serialize};

use shuttle::models::{DepartureTime, Location, Route, RouteName, RouteStop};
use shuttle::postgres_tools::ShuttlePostgresPool;

#[derive(Serialize, Deserialize, Clone)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteStopResponse {
    pub id: i64,
    pub location: LocationResponse,
    pub stop_order: i32,
    pub is_departure: bool,
    pub is_arrival: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct DepartureTimeResponse {
    pub id: i64,
    pub time: String,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub id: String,
    pub name: String,
    pub trip_length: f64,
    pub departure_location: LocationResponse,
    pub arrival_location: LocationResponse,
    pub notes: Vec<String>,
    pub stops: Vec<RouteStopResponse>,
    pub departures: Vec<DepartureTimeResponse>,
}

#[actix_web::get("/route/all")]
pub async fn all_routes(pool: web::Data<Arc<ShuttlePostgresPool>>) -> impl Responder {
    let conn_pool = pool.as_ref();
    let conn_pre = conn_pool.get().await;

    let mut conn = match conn_pre {
        Ok(conn) => conn,
        Err(err) => {
            error!("could not check out a postgres connection: {}", err);
            return HttpResponse::InternalServerError().body("Error connecting to postgres");
        }
    };

    match load_routes(&mut conn, None).await {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(err) => {
            error!("could not fetch routes: {}", err);
            HttpResponse::InternalServerError().body("Could not fetch routes")
        }
    }
}

#[actix_web::get("/route/all/names")]
pub async fn all_route_names(pool: web::Data<Arc<ShuttlePostgresPool>>) -> impl Responder {
    let conn_pool = pool.as_ref();
    let conn_pre = conn_pool.get().await;

    let mut conn = match conn_pre {
        Ok(conn) => conn,
        Err(err) => {
            error!("could not check out a postgres connection: {}", err);
            return HttpResponse::InternalServerError().body("Error connecting to postgres");
        }
    };

    let names: Result<Vec<RouteName>, diesel::result::Error> = shuttle::schema::route::dsl::route
        .select(RouteName::as_select())
        .load(&mut conn)
        .await;

    match names {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(err) => {
            error!("could not fetch route names: {}", err);
            HttpResponse::InternalServerError().body("Could not fetch route names")
        }
    }
}

#[actix_web::get("/route/{id}")]
pub async fn route_by_id(
    pool: web::Data<Arc<ShuttlePostgresPool>>,
    path: web::Path<String>,
) -> impl Responder {
    let route_id = path.into_inner();

    let conn_pool = pool.as_ref();
    let conn_pre = conn_pool.get().await;

    let mut conn = match conn_pre {
        Ok(conn) => conn,
        Err(err) => {
            error!("could not check out a postgres connection: {}", err);
            return HttpResponse::InternalServerError().body("Error connecting to postgres");
        }
    };

    match load_routes(&mut conn, Some(&route_id)).await {
        Ok(mut routes) => match routes.pop() {
            Some(found) => HttpResponse::Ok().json(found),
            None => HttpResponse::NotFound().body("Rota não disponível"),
        },
        Err(err) => {
            error!("could not fetch route {}: {}", route_id, err);
            HttpResponse::InternalServerError().body("Could not fetch route")
        }
    }
}

/// Loads routes with their stop and departure rows and composes the response
/// objects. `only_route` narrows everything to a single route id.
async fn load_routes(
    conn: &mut AsyncPgConnection,
    only_route: Option<&str>,
) -> Result<Vec<RouteResponse>, diesel::result::Error> {
    use shuttle::schema::{departure_time, location, route, route_stop};

    let routes: Vec<Route> = match only_route {
        Some(id) => {
            route::dsl::route
                .filter(route::dsl::id.eq(id))
                .select(Route::as_select())
                .load(conn)
                .await?
        }
        None => {
            route::dsl::route
                .select(Route::as_select())
                .load(conn)
                .await?
        }
    };

    let stop_rows: Vec<(RouteStop, Location)> = match only_route {
        Some(id) => {
            route_stop::dsl::route_stop
                .inner_join(location::dsl::location)
                .filter(route_stop::dsl::route_id.eq(id))
                .select((RouteStop::as_select(), Location::as_select()))
                .load(conn)
                .await?
        }
        None => {
            route_stop::dsl::route_stop
                .inner_join(location::dsl::location)
                .select((RouteStop::as_select(), Location::as_select()))
                .load(conn)
                .await?
        }
    };

    let departure_rows: Vec<DepartureTime> = match only_route {
        Some(id) => {
            departure_time::dsl::departure_time
                .filter(departure_time::dsl::route_id.eq(id))
                .select(DepartureTime::as_select())
                .load(conn)
                .await?
        }
        None => {
            departure_time::dsl::departure_time
                .select(DepartureTime::as_select())
                .load(conn)
                .await?
        }
    };

    let locations: HashMap<i64, Location> = location::dsl::location
        .select(Location::as_select())
        .load(conn)
        .await?
        .into_iter()
        .map(|loc| (loc.id, loc))
        .collect();

    Ok(assemble_routes(
        routes,
        stop_rows,
        departure_rows,
        &locations,
    ))
}

/// Groups child rows under their route and resolves the endpoint locations.
/// Stops come out ordered by `stop_order`, departures by insertion order.
fn assemble_routes(
    routes: Vec<Route>,
    stop_rows: Vec<(RouteStop, Location)>,
    departure_rows: Vec<DepartureTime>,
    locations: &HashMap<i64, Location>,
) -> Vec<RouteResponse> {
    let mut stops_by_route: HashMap<String, Vec<(RouteStop, Location)>> = stop_rows
        .into_iter()
        .into_group_map_by(|(stop, _)| stop.route_id.clone());

    let mut departures_by_route: HashMap<String, Vec<DepartureTime>> = departure_rows
        .into_iter()
        .into_group_map_by(|departure| departure.route_id.clone());

    routes
        .into_iter()
        .filter_map(|route| {
            let departure_location = endpoint(locations, &route.id, route.departure_location_id)?;
            let arrival_location = endpoint(locations, &route.id, route.arrival_location_id)?;

            let mut stops = stops_by_route.remove(&route.id).unwrap_or_default();
            stops.sort_by_key(|(stop, _)| stop.stop_order);

            let mut departures = departures_by_route.remove(&route.id).unwrap_or_default();
            departures.sort_by_key(|departure| departure.id);

            Some(RouteResponse {
                id: route.id,
                name: route.name,
                trip_length: route.trip_length,
                departure_location,
                arrival_location,
                notes: route.notes,
                stops: stops
                    .into_iter()
                    .map(|(stop, location)| RouteStopResponse {
                        id: stop.id,
                        location: LocationResponse {
                            id: location.id,
                            name: location.name,
                        },
                        stop_order: stop.stop_order,
                        is_departure: stop.is_departure,
                        is_arrival: stop.is_arrival,
                    })
                    .collect(),
                departures: departures
                    .into_iter()
                    .map(|departure| DepartureTimeResponse {
                        id: departure.id,
                        time: departure.time,
                    })
                    .collect(),
            })
        })
        .collect()
}

fn endpoint(
    locations: &HashMap<i64, Location>,
    route_id: &str,
    location_id: i64,
) -> Option<LocationResponse> {
    match locations.get(&location_id) {
        Some(location) => Some(LocationResponse {
            id: location.id,
            name: location.name.clone(),
        }),
        None => {
            error!(
                "route {} references missing location {}",
                route_id, location_id
            );
            None
        }
    }
}
