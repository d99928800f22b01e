use triplink_core::api::QuoteResponse;
use triplink_core::pricing::{FareState, estimate};
use triplink_core::rates::{RateTable, VehicleCategory};
use triplink_core::trip::{TripContext, TripType};

fn ctx(distance: f64, trip_type: TripType, days: u32) -> TripContext {
    TripContext {
        distance_km: Some(distance),
        trip_type,
        days,
        ..TripContext::default()
    }
}

fn table_with(category: VehicleCategory, rate: f64) -> RateTable {
    let mut table = RateTable {
        hatchback: 0.0,
        sedan: 0.0,
        sedanpremium: 0.0,
        suv: 0.0,
        suvplus: 1.0,
    };
    match category {
        VehicleCategory::Hatchback => table.hatchback = rate,
        VehicleCategory::Sedan => table.sedan = rate,
        VehicleCategory::SedanPremium => table.sedanpremium = rate,
        VehicleCategory::Suv => table.suv = rate,
        VehicleCategory::Muv => table.suvplus = rate,
    }
    table
}

#[test]
fn estimate_is_monotone_in_distance_and_rate() {
    let distances = [0.0, 1.0, 11.0, 80.0, 149.0, 1200.5];
    let rates = [0.0, 5.0, 12.0, 21.0, 26.0];

    for window in distances.windows(2) {
        for &rate in &rates {
            let table = table_with(VehicleCategory::Sedan, rate);
            let lo = estimate(&ctx(window[0], TripType::OneWay, 1), &table, VehicleCategory::Sedan);
            let hi = estimate(&ctx(window[1], TripType::OneWay, 1), &table, VehicleCategory::Sedan);
            assert!(hi.total >= lo.total, "distance monotonicity broke at {window:?} rate {rate}");
        }
    }

    for window in rates.windows(2) {
        for &d in &distances {
            let lo = estimate(
                &ctx(d, TripType::RoundTrip, 2),
                &table_with(VehicleCategory::Suv, window[0]),
                VehicleCategory::Suv,
            );
            let hi = estimate(
                &ctx(d, TripType::RoundTrip, 2),
                &table_with(VehicleCategory::Suv, window[1]),
                VehicleCategory::Suv,
            );
            assert!(hi.total >= lo.total, "rate monotonicity broke at {window:?} distance {d}");
        }
    }
}

#[test]
fn round_trip_total_is_one_way_times_days() {
    let table = table_with(VehicleCategory::Muv, 26.0);
    for days in 1..=6 {
        let one_way = estimate(&ctx(120.0, TripType::OneWay, days), &table, VehicleCategory::Muv);
        let round = estimate(&ctx(120.0, TripType::RoundTrip, days), &table, VehicleCategory::Muv);
        assert_eq!(round.total, one_way.total * i64::from(days));
    }
}

#[test]
fn one_way_total_is_independent_of_days() {
    let table = table_with(VehicleCategory::Hatchback, 12.0);
    let base = estimate(&ctx(90.0, TripType::OneWay, 1), &table, VehicleCategory::Hatchback);
    for days in 2..=9 {
        let again = estimate(&ctx(90.0, TripType::OneWay, days), &table, VehicleCategory::Hatchback);
        assert_eq!(again.total, base.total);
    }
}

#[test]
fn all_zero_rate_table_is_replaced_by_defaults() {
    let zero = RateTable {
        hatchback: 0.0,
        sedan: 0.0,
        sedanpremium: 0.0,
        suv: 0.0,
        suvplus: 0.0,
    };
    let replaced = zero.sanitized();
    assert_eq!(replaced, RateTable::DEFAULT);
    assert!((replaced.hatchback - 12.0).abs() < f64::EPSILON);
    assert!((replaced.sedan - 15.0).abs() < f64::EPSILON);
    assert!((replaced.sedanpremium - 18.0).abs() < f64::EPSILON);
    assert!((replaced.suv - 21.0).abs() < f64::EPSILON);
    assert!((replaced.suvplus - 26.0).abs() < f64::EPSILON);
}

#[test]
fn sedan_one_way_scenario() {
    let table = table_with(VehicleCategory::Sedan, 15.0);
    let est = estimate(&ctx(100.0, TripType::OneWay, 1), &table, VehicleCategory::Sedan);
    assert_eq!(est.total, 1500);
}

#[test]
fn suv_round_trip_scenario() {
    let table = table_with(VehicleCategory::Suv, 21.0);
    let est = estimate(&ctx(100.0, TripType::RoundTrip, 3), &table, VehicleCategory::Suv);
    assert_eq!(est.total, 6300);
}

#[test]
fn authoritative_quote_overrides_and_stays() {
    let mut fare = FareState::new(1500);
    let provisional_total = fare.total();
    assert_eq!(provisional_total, 1500 + 150 + 75);

    fare.reconcile(&QuoteResponse {
        driverrate: 300.0,
        gst: 720.0,
        service: 480.0,
        total: 6072.0,
        ..QuoteResponse::default()
    });

    // Fresh estimates keep landing while polling; none of them may move the
    // displayed lines once the server has spoken.
    fare.update_base_price(2000);
    fare.update_base_price(50);
    assert_eq!(fare.total(), 6072);
    assert_eq!(fare.gst(), 720);
    assert_eq!(fare.service(), 480);
    assert!(fare.is_calculated());
}
