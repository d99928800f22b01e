use futures::executor::block_on;
use triplink_core::api::{ConfirmResponse, QuoteResponse, default_fleet};
use triplink_core::booking::{BookingController, CarData, ContactField};
use triplink_core::pricing::FareState;
use triplink_core::rates::RateTable;
use triplink_core::trip::{TripContext, TripType};
use triplink_core::{LoginForm, LoginResponse};
use triplink_web::pages::{
    invoice::{InvoicePage, InvoicePageProps},
    login::{LoginPage, LoginPageProps},
    not_found::{NotFound, Props as NotFoundProps},
    search::{SearchPage, SearchPageProps},
};
use yew::{Callback, LocalServerRenderer};

fn base_ctx() -> TripContext {
    TripContext {
        pickup: "Pune".into(),
        drop: "Mumbai".into(),
        date: "2025-02-08".into(),
        return_date: String::new(),
        time: "02:45".into(),
        trip_type: TripType::OneWay,
        distance_km: Some(100.0),
        days: 1,
    }
}

fn base_car() -> CarData {
    CarData {
        name: "Sedan".into(),
        image: "/images/swift.jpg".into(),
        price: 1500,
        features: vec!["4+1 Seater".into()],
        category: "Sedan".into(),
        pickup_location: "Pune".into(),
        drop_location: "Mumbai".into(),
        date: "2025-02-08".into(),
        return_date: String::new(),
        time: "02:45".into(),
        trip_type: TripType::OneWay,
        distance: "100".into(),
        days: "1".into(),
    }
}

fn search_props(ctx: TripContext) -> SearchPageProps {
    SearchPageProps {
        ctx,
        table: RateTable::DEFAULT,
        cabs: default_fleet(),
        on_reserve: Callback::noop(),
    }
}

#[test]
fn search_page_lists_fleet_with_estimated_prices() {
    let html = block_on(LocalServerRenderer::<SearchPage>::with_props(search_props(base_ctx())).render());
    assert!(html.contains("Pune"));
    assert!(html.contains("Mumbai"));
    assert!(html.contains("Hatchback"));
    assert!(html.contains("MUV"));
    // 100 km one way at the default sedan rate of 15.
    assert!(html.contains("₹1500"));
    assert!(html.contains("₹2600"));
    assert!(html.contains("Reserve Now"));
    assert!(!html.contains("Please select pickup and drop locations"));
}

#[test]
fn search_page_without_distance_blocks_reservation() {
    let mut ctx = base_ctx();
    ctx.distance_km = None;
    let html = block_on(LocalServerRenderer::<SearchPage>::with_props(search_props(ctx)).render());
    assert!(html.contains("Please select pickup and drop locations to get the final price"));
    assert!(html.contains("Distance unavailable"));
    assert!(html.contains("disabled"));
}

#[test]
fn search_page_scales_round_trip_prices_by_days() {
    let mut ctx = base_ctx();
    ctx.trip_type = TripType::RoundTrip;
    ctx.return_date = "2025-02-10".into();
    ctx.days = 3;
    let html = block_on(LocalServerRenderer::<SearchPage>::with_props(search_props(ctx)).render());
    // 100 km * 21/km * 3 days for the SUV card.
    assert!(html.contains("₹6300"));
    assert!(html.contains("(3 days)"));
}

#[test]
fn login_page_renders_form_and_messages() {
    let mut form = LoginForm::new();
    form.set_mobile("9876543210");
    form.show_banner("Registration successful! Please log in.".into());
    let props = LoginPageProps {
        form,
        on_mobile: Callback::noop(),
        on_password: Callback::noop(),
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("Log in to your account"));
    assert!(html.contains("Mobile Number"));
    assert!(html.contains("9876543210"));
    assert!(html.contains("Registration successful! Please log in."));
}

#[test]
fn login_page_shows_submit_error() {
    let mut form = LoginForm::new();
    form.set_mobile("9876543210");
    form.set_password("wrong");
    form.begin_submit().unwrap();
    form.complete(
        true,
        &LoginResponse {
            status: "error".into(),
            message: Some("Invalid credentials".into()),
            ..LoginResponse::default()
        },
    );
    let props = LoginPageProps {
        form,
        on_mobile: Callback::noop(),
        on_password: Callback::noop(),
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("Invalid credentials"));
}

fn invoice_props(fare: FareState, controller: BookingController) -> InvoicePageProps {
    InvoicePageProps {
        car: base_car(),
        fare,
        controller,
        on_field: Callback::noop(),
        on_calculate: Callback::noop(),
        on_submit: Callback::noop(),
    }
}

#[test]
fn invoice_page_shows_provisional_fare_lines() {
    let html = block_on(
        LocalServerRenderer::<InvoicePage>::with_props(invoice_props(
            FareState::new(1500),
            BookingController::new(),
        ))
        .render(),
    );
    assert!(html.contains("Booking Invoice"));
    assert!(html.contains("₹1500"));
    assert!(html.contains("₹150"));
    assert!(html.contains("₹75"));
    assert!(html.contains("₹1725"));
    assert!(html.contains("Calculate Pricing"));
    assert!(!html.contains("Pricing calculated by server"));
    assert!(!html.contains("Driver Allowance"));
}

#[test]
fn invoice_page_shows_authoritative_quote() {
    let mut fare = FareState::new(4572);
    fare.reconcile(&QuoteResponse {
        driverrate: 300.0,
        gst: 720.0,
        service: 480.0,
        total: 6072.0,
        ..QuoteResponse::default()
    });
    let html = block_on(
        LocalServerRenderer::<InvoicePage>::with_props(invoice_props(
            fare,
            BookingController::new(),
        ))
        .render(),
    );
    assert!(html.contains("₹6072"));
    assert!(html.contains("₹720"));
    assert!(html.contains("₹480"));
    assert!(html.contains("Driver Allowance"));
    assert!(html.contains("Pricing calculated by server"));
    assert!(!html.contains("Calculate Pricing"));
}

#[test]
fn invoice_page_announces_confirmed_booking() {
    let mut controller = BookingController::new();
    controller.set_field(ContactField::Name, "Asha");
    controller.set_field(ContactField::Email, "asha@example.com");
    controller.set_field(ContactField::Phone, "9876543210");
    controller.begin_submit().unwrap();
    controller.complete(&ConfirmResponse {
        status: "success".into(),
        booking_id: "WTL123".into(),
        error: None,
    });
    let html = block_on(
        LocalServerRenderer::<InvoicePage>::with_props(invoice_props(
            FareState::new(1500),
            controller,
        ))
        .render(),
    );
    assert!(html.contains("Your booking has been confirmed"));
    assert!(html.contains("WTL123"));
}

#[test]
fn invoice_page_surfaces_rejection_and_phone_errors() {
    let mut controller = BookingController::new();
    controller.set_field(ContactField::Name, "Asha");
    controller.set_field(ContactField::Email, "asha@example.com");
    controller.set_field(ContactField::Phone, "98765");
    let html = block_on(
        LocalServerRenderer::<InvoicePage>::with_props(invoice_props(
            FareState::new(1500),
            controller,
        ))
        .render(),
    );
    assert!(html.contains("Phone number must be exactly 10 digits"));
}

#[test]
fn not_found_page_renders() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}
