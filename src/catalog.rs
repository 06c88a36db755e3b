//! Hand-authored seeding catalog for the campus shuttle network.
//!
//! The seeder materializes this data into postgres. Location names are the
//! canonical identity of a stop: two routes naming the same string share one
//! location row.

/// Static definition of one shuttle route.
pub struct RouteDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Round-trip length in kilometres.
    pub trip_length: f64,
    /// Scheduled departure labels, in timetable order.
    pub departures: &'static [&'static str],
    pub departure_location: &'static str,
    pub arrival_location: &'static str,
    /// Operational caveats shown to riders.
    pub notes: &'static [&'static str],
    /// Stop sequence in traversal order. `stop_order` is assigned from this
    /// list, starting at 0.
    pub stops: &'static [&'static str],
    /// Names where boarding is allowed.
    pub departure_stops: &'static [&'static str],
    /// Names where alighting is allowed. May mention points that are not part
    /// of the boarding sequence.
    pub arrival_stops: &'static [&'static str],
}

/// Every location any route refers to. Resolved or created first, so stop
/// rows can reference them by id.
pub const MASTER_LOCATIONS: [&str; 32] = [
    "Estacionamento PAF I - Matemática",
    "Av. Garibaldi",
    "Campus Vale do Canela",
    "Viaduto Campo Grande",
    "Avenida 7 de Setembro - Faculdade de Economia",
    "Belas Artes",
    "Reitoria",
    "Creche – Canela",
    "Politécnica",
    "Arquitetura",
    "Instituto de Geociências",
    "Circular",
    "São Lázaro",
    "Viaduto Federação",
    "Residência 5",
    "Ondina/PAF1",
    "Residência Universitária Garibaldi",
    "Deli&Cia",
    "Direito",
    "Música",
    "ISC",
    "Odontologia",
    "Nutrição",
    "Geociências",
    "Piedade",
    "Centro de Esportes",
    "Portaria Principal",
    "Proae",
    "Facom",
    "Reitoria sentido Campo Grande",
    "Retorno - Rua Baronesa de Sauípe",
    "Av. Garibaldi - Ponto R5",
];

const EXPRESSO_STOPS: &[&str] = &[
    "Estacionamento PAF I - Matemática",
    "Av. Garibaldi",
    "Campus Vale do Canela",
    "Viaduto Campo Grande",
    "Avenida 7 de Setembro - Faculdade de Economia",
    "Belas Artes",
];

const B1_STOPS: &[&str] = &[
    "São Lázaro",
    "Politécnica",
    "Arquitetura",
    "Viaduto Federação",
    "Residência 5",
    "Instituto de Geociências",
    "Estacionamento PAF I - Matemática",
];

const B2_STOPS: &[&str] = &[
    "Ondina/PAF1",
    "Residência Universitária Garibaldi",
    "Arquitetura",
    "São Lázaro",
    "Politécnica",
    "Creche – Canela",
    "Reitoria",
];

const B3_STOPS: &[&str] = &[
    "Estacionamento PAF I - Matemática",
    "Av. Garibaldi - Ponto R5",
    "Arquitetura",
    "São Lázaro",
    "Politécnica",
    "Creche – Canela",
    "Reitoria sentido Campo Grande",
    "Retorno - Rua Baronesa de Sauípe",
    "Belas Artes",
    "Reitoria",
    "Deli&Cia",
    "Direito",
];

const B4_STOPS: &[&str] = &[
    "Estacionamento PAF I - Matemática",
    "Av. Garibaldi - Ponto R5",
    "Arquitetura",
    "Politécnica",
    "Creche – Canela",
    "Reitoria",
    "Piedade",
];

const B5_STOPS: &[&str] = &[
    "Instituto de Geociências",
    "Facom",
    "Portaria Principal",
    "Centro de Esportes",
    "Av. Garibaldi - Ponto R5",
    "Proae",
    "São Lázaro",
    "Politécnica",
    "Creche – Canela",
    "Reitoria",
];

pub const ROUTES: [RouteDef; 6] = [
    RouteDef {
        id: "EXPRESSO",
        name: "Rota Expresso",
        trip_length: 13.0,
        departures: &[
            "6h30", "7h30", "8h40", "9h50", "11h00", "12h20", "13h20", "14h30", "15h40", "16h50",
            "18h00", "19h10", "20h10", "21h10", "22h30",
        ],
        departure_location: "Estacionamento PAF I - Matemática",
        arrival_location: "Circular",
        notes: &["20h10 é o último horário a entrar na Piedade"],
        stops: EXPRESSO_STOPS,
        departure_stops: EXPRESSO_STOPS,
        arrival_stops: &[
            "Reitoria",
            "Creche – Canela",
            "Politécnica",
            "Arquitetura",
            "Instituto de Geociências",
            "Estacionamento PAF I - Matemática",
        ],
    },
    RouteDef {
        id: "B1",
        name: "Rota B1",
        trip_length: 11.0,
        departures: &[
            "6h10", "7h00", "8h00", "9h00", "10h00", "11h00", "12h00", "13h00", "15h00", "16h00",
            "17h00", "18h00", "19h00", "20h30", "21h40", "22h20",
        ],
        departure_location: "São Lázaro",
        arrival_location: "Reitoria",
        notes: &[
            "Após fechamento de São Lázaro, carro volta para Ondina e retoma rota até último horário.",
        ],
        stops: B1_STOPS,
        departure_stops: B1_STOPS,
        arrival_stops: &[
            "Av. Garibaldi",
            "Campus Vale do Canela Entrada ICS",
            "Viaduto Campo Grande",
            "Belas Artes",
            "Reitoria",
            "Creche – Canela",
            "Politécnica",
            "São Lázaro",
        ],
    },
    RouteDef {
        id: "B2",
        name: "Rota B2",
        trip_length: 13.0,
        departures: &[
            "6h00", "7h00", "8h00", "9h00", "10h00", "11h00", "12h00", "13:30", "14h30", "16h00",
            "17h40", "18h30", "19h50", "20h30", "21h40", "22h30",
        ],
        departure_location: "Ondina/PAF1",
        arrival_location: "Reitoria",
        notes: &["19h50 é o último horário a entrar em São Lázaro"],
        stops: B2_STOPS,
        departure_stops: B2_STOPS,
        arrival_stops: &[
            "Residência I - Vitória",
            "Deli&Cia",
            "Politécnica",
            "São Lázaro",
            "Arquitetura",
            "Instituto de Geociências",
            "Ondina/PAF1",
        ],
    },
    RouteDef {
        id: "B3",
        name: "Rota B3",
        trip_length: 15.5,
        departures: &[
            "6h30", "7h10", "8h40", "9h50", "11h00", "12h10", "13h20", "14h30", "15h40", "16h50",
            "18h00", "19h10", "20h30", "21h20", "22h20",
        ],
        departure_location: "Direito",
        arrival_location: "Ondina/PAF1",
        notes: &["19h10 é o último horário a entrar em São Lázaro"],
        stops: B3_STOPS,
        departure_stops: B3_STOPS,
        arrival_stops: &[
            "Escola de Música - ISC - Odontologia - Nutrição",
            "Reitoria",
            "Politécnica",
            "Arquitetura",
            "Instituto de Geociências",
            "Estacionamento PAF I - Matemática",
        ],
    },
    RouteDef {
        id: "B4",
        name: "Rota B4",
        trip_length: 14.0,
        departures: &[
            "6h20", "7h20", "8h20", "9h30", "10h40", "11h40", "12h40", "14h00", "15h20", "16h30",
            "17h40", "20h00", "21h20", "22h30",
        ],
        departure_location: "Ondina/PAF1",
        arrival_location: "Piedade",
        notes: &["18:50 é o último horário a entrar em São Lázaro"],
        stops: B4_STOPS,
        departure_stops: B4_STOPS,
        arrival_stops: &[
            "Piedade",
            "Belas Artes",
            "Reitoria",
            "Creche – Canela",
            "Politécnica",
            "São Lázaro",
            "Arquitetura",
            "Instituto de Geociências",
            "Estacionamento PAF I - Matemática",
        ],
    },
    RouteDef {
        id: "B5",
        name: "Rota B5",
        trip_length: 17.0,
        departures: &[
            "6h20", "7h20", "8h40", "10h00", "11h20", "12h40", "14h00", "15h20", "16h40", "18h00",
            "19h20", "20h40", "22h20",
        ],
        departure_location: "Facom",
        arrival_location: "Reitoria",
        notes: &["19h20 é o último horário a entrar em São Lázaro"],
        stops: B5_STOPS,
        departure_stops: B5_STOPS,
        arrival_stops: &[
            "Campo Grande",
            "Residência I - Ponto de Distribuição Vitória",
            "Deli&Cia - acesso direito",
            "Politécnica",
            "São Lázaro",
            "Arquitetura",
            "Estacionamento PAF I - Matemática",
            "Facom",
            "Instituto de Geociências",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn master_list_has_no_duplicate_names() {
        let unique: HashSet<&str> = MASTER_LOCATIONS.iter().copied().collect();
        assert_eq!(unique.len(), MASTER_LOCATIONS.len());
    }

    #[test]
    fn route_ids_are_unique() {
        let unique: HashSet<&str> = ROUTES.iter().map(|r| r.id).collect();
        assert_eq!(unique.len(), ROUTES.len());
    }

    #[test]
    fn every_stop_resolves_against_the_master_list() {
        let master: HashSet<&str> = MASTER_LOCATIONS.iter().copied().collect();
        for route in &ROUTES {
            for stop in route.stops {
                assert!(master.contains(stop), "{}: unknown stop {:?}", route.id, stop);
            }
            for stop in route.departure_stops {
                assert!(master.contains(stop), "{}: unknown boarding point {:?}", route.id, stop);
            }
        }
    }

    #[test]
    fn route_endpoints_resolve_against_the_master_list() {
        let master: HashSet<&str> = MASTER_LOCATIONS.iter().copied().collect();
        for route in &ROUTES {
            assert!(master.contains(route.departure_location), "{}", route.id);
            assert!(master.contains(route.arrival_location), "{}", route.id);
        }
    }

    #[test]
    fn no_route_lists_a_stop_twice() {
        for route in &ROUTES {
            let unique: HashSet<&str> = route.stops.iter().copied().collect();
            assert_eq!(unique.len(), route.stops.len(), "{}", route.id);
        }
    }

    #[test]
    fn b1_timetable_has_sixteen_departures() {
        let b1 = ROUTES.iter().find(|r| r.id == "B1").unwrap();
        assert_eq!(b1.departures.len(), 16);
    }

    #[test]
    fn every_route_has_departures_and_stops() {
        for route in &ROUTES {
            assert!(!route.departures.is_empty(), "{}", route.id);
            assert!(!route.stops.is_empty(), "{}", route.id);
        }
    }
}
