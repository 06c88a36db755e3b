use std::collections::HashMap;
use std::collections::HashSet;

use diesel::prelude::*;
use diesel_async::AsyncConnection;
use diesel_async::AsyncPgConnection;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;
use log::info;

use shuttle::catalog::{MASTER_LOCATIONS, ROUTES, RouteDef};
use shuttle::error::SeedError;
use shuttle::models::{Location, NewDepartureTime, NewLocation, NewRouteStop, Route};
use shuttle::postgres_tools::ShuttlePostgresPool;

/// Materializes the route catalog. Safe to run at every deploy: locations are
/// resolved by unique name, and routes whose id is already present are
/// skipped rather than re-inserted.
pub async fn seed(pool: &ShuttlePostgresPool) -> Result<(), SeedError> {
    let conn = &mut pool.get().await?;

    let location_ids = resolve_locations(conn).await?;

    let existing_ids: HashSet<String> = shuttle::schema::route::dsl::route
        .select(shuttle::schema::route::dsl::id)
        .load::<String>(conn)
        .await?
        .into_iter()
        .collect();

    let mut inserted = 0;
    for def in &ROUTES {
        if existing_ids.contains(def.id) {
            info!("route {} already seeded, skipping", def.id);
            continue;
        }

        insert_route(conn, def, &location_ids).await?;
        inserted += 1;
    }

    info!(
        "seeding finished, {} of {} routes inserted",
        inserted,
        ROUTES.len()
    );

    Ok(())
}

/// Find-or-create every master location, building the name to id map the
/// route definitions are resolved against. Names are unique, so re-running
/// never duplicates a row.
async fn resolve_locations(
    conn: &mut AsyncPgConnection,
) -> Result<HashMap<String, i64>, SeedError> {
    use shuttle::schema::location::dsl;

    let mut ids: HashMap<String, i64> = HashMap::with_capacity(MASTER_LOCATIONS.len());

    for name in MASTER_LOCATIONS {
        let found: Option<Location> = dsl::location
            .filter(dsl::name.eq(name))
            .select(Location::as_select())
            .first(conn)
            .await
            .optional()?;

        let location = match found {
            Some(location) => location,
            None => {
                diesel::insert_into(dsl::location)
                    .values(&NewLocation { name })
                    .returning(Location::as_returning())
                    .get_result(conn)
                    .await?
            }
        };

        ids.insert(location.name, location.id);
    }

    Ok(ids)
}

async fn insert_route(
    conn: &mut AsyncPgConnection,
    def: &RouteDef,
    location_ids: &HashMap<String, i64>,
) -> Result<(), SeedError> {
    let (route_row, departure_rows, stop_rows) = build_route_rows(def, location_ids)?;
    let stop_count = stop_rows.len();
    let departure_count = departure_rows.len();

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        async move {
            diesel::insert_into(shuttle::schema::route::dsl::route)
                .values(&route_row)
                .execute(conn)
                .await?;

            diesel::insert_into(shuttle::schema::departure_time::dsl::departure_time)
                .values(&departure_rows)
                .execute(conn)
                .await?;

            diesel::insert_into(shuttle::schema::route_stop::dsl::route_stop)
                .values(&stop_rows)
                .execute(conn)
                .await?;

            Ok(())
        }
        .scope_boxed()
    })
    .await?;

    info!(
        "seeded route {} with {} stops and {} departures",
        def.id, stop_count, departure_count
    );

    Ok(())
}

/// Turns one catalog definition into insertable rows. Pure: all location
/// references must already be resolvable through `location_ids`, otherwise
/// the catalog is misconfigured and seeding must not proceed.
fn build_route_rows(
    def: &RouteDef,
    location_ids: &HashMap<String, i64>,
) -> Result<(Route, Vec<NewDepartureTime>, Vec<NewRouteStop>), SeedError> {
    let departure_location_id = lookup(location_ids, def.departure_location)?;
    let arrival_location_id = lookup(location_ids, def.arrival_location)?;

    let route_row = Route {
        id: def.id.to_string(),
        name: def.name.to_string(),
        trip_length: def.trip_length,
        departure_location_id,
        arrival_location_id,
        notes: def.notes.iter().map(|note| note.to_string()).collect(),
    };

    let departure_rows = def
        .departures
        .iter()
        .map(|time| NewDepartureTime {
            route_id: def.id.to_string(),
            time: time.to_string(),
        })
        .collect();

    let mut stop_rows = Vec::with_capacity(def.stops.len());
    for (order, stop_name) in def.stops.iter().enumerate() {
        let location_id = lookup(location_ids, stop_name)?;

        stop_rows.push(NewRouteStop {
            route_id: def.id.to_string(),
            location_id,
            stop_order: order as i32,
            is_departure: def.departure_stops.contains(stop_name),
            is_arrival: def.arrival_stops.contains(stop_name),
        });
    }

    Ok((route_row, departure_rows, stop_rows))
}

fn lookup(location_ids: &HashMap<String, i64>, name: &str) -> Result<i64, SeedError> {
    location_ids
        .get(name)
        .copied()
        .ok_or_else(|| SeedError::MissingLocation {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_location_map() -> HashMap<String, i64> {
        MASTER_LOCATIONS
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx as i64 + 1))
            .collect()
    }

    #[test]
    fn stop_orders_are_contiguous_and_zero_based() {
        let map = full_location_map();

        for def in &ROUTES {
            let (_, _, stops) = build_route_rows(def, &map).unwrap();
            let orders: Vec<i32> = stops.iter().map(|s| s.stop_order).collect();
            let expected: Vec<i32> = (0..stops.len() as i32).collect();
            assert_eq!(orders, expected, "{}", def.id);
        }
    }

    #[test]
    fn stop_sequence_preserves_catalog_order() {
        let map = full_location_map();

        for def in &ROUTES {
            let (_, _, stops) = build_route_rows(def, &map).unwrap();
            let resolved: Vec<i64> = stops.iter().map(|s| s.location_id).collect();
            let expected: Vec<i64> = def.stops.iter().map(|name| map[*name]).collect();
            assert_eq!(resolved, expected, "{}", def.id);
        }
    }

    #[test]
    fn stop_flags_match_catalog_membership() {
        let map = full_location_map();

        for def in &ROUTES {
            let (_, _, stops) = build_route_rows(def, &map).unwrap();
            for (row, name) in stops.iter().zip(def.stops) {
                assert_eq!(row.is_departure, def.departure_stops.contains(name));
                assert_eq!(row.is_arrival, def.arrival_stops.contains(name));
            }
        }
    }

    #[test]
    fn b1_gets_one_departure_row_per_timetable_entry() {
        let map = full_location_map();
        let b1 = ROUTES.iter().find(|r| r.id == "B1").unwrap();

        let (_, departures, _) = build_route_rows(b1, &map).unwrap();

        assert_eq!(departures.len(), 16);
        assert_eq!(departures[0].time, "6h10");
        assert_eq!(departures[15].time, "22h20");
        assert!(departures.iter().all(|d| d.route_id == "B1"));
    }

    #[test]
    fn route_row_carries_endpoints_and_notes() {
        let map = full_location_map();
        let expresso = ROUTES.iter().find(|r| r.id == "EXPRESSO").unwrap();

        let (route, _, _) = build_route_rows(expresso, &map).unwrap();

        assert_eq!(route.name, "Rota Expresso");
        assert_eq!(
            route.departure_location_id,
            map["Estacionamento PAF I - Matemática"]
        );
        assert_eq!(route.arrival_location_id, map["Circular"]);
        assert_eq!(route.notes.len(), 1);
    }

    #[test]
    fn missing_location_is_a_fatal_configuration_error() {
        let mut map = full_location_map();
        map.remove("São Lázaro");
        let b1 = ROUTES.iter().find(|r| r.id == "B1").unwrap();

        let err = build_route_rows(b1, &map).unwrap_err();

        assert!(matches!(err, SeedError::MissingLocation { ref name } if name == "São Lázaro"));
    }

    #[test]
    fn whole_catalog_builds_against_the_master_list() {
        let map = full_location_map();

        for def in &ROUTES {
            assert!(build_route_rows(def, &map).is_ok(), "{}", def.id);
        }
    }
}
