//! Stateful screens wiring the pages to storage, the HTTP client and the
//! router. The page components themselves stay presentational; everything
//! that touches the browser lives here.

use gloo::timers::callback::{Interval, Timeout};
use triplink_core::api::{
    Cab, FIXED_AVAILABILITY, FIXED_FUEL_TYPE, FIXED_SEATS, QuoteRequest, TripInfoRequest,
    TripInfoResponse, default_fleet,
};
use triplink_core::booking::{
    BookingController, BookingRecord, CarData, ContactField, ValidationError,
};
use triplink_core::constants::{
    BOOKING_REDIRECT_DELAY_MS, FALLBACK_DISTANCE_KM, LOGIN_REDIRECT_DELAY_MS,
    PRICE_POLL_INTERVAL_MS,
};
use triplink_core::pricing::FareState;
use triplink_core::rates::RateTable;
use triplink_core::store::{KvStore, keys};
use triplink_core::trip::{NavParams, TripContext, resolve};
use triplink_core::{
    ContactInfo, LoginForm, load_session, persist_session, redirect_for_role,
    take_registration_banner,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{Footer, Navbar};
use crate::pages::invoice::InvoicePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::pages::search::{ReserveChoice, SearchPage};
use crate::query::{login_query, nav_params};
use crate::router::Route;
use crate::storage::{LocalStore, SessionStore};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Search => html! { <SearchScreen /> },
        Route::Login => html! { <LoginScreen /> },
        Route::Invoice => html! { <InvoiceScreen /> },
        Route::NotFound => html! { <NotFoundScreen /> },
    }
}

#[function_component(NotFoundScreen)]
fn not_found_screen() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });
    html! { <NotFound {on_go_home} /> }
}

fn trip_info_request(ctx: &TripContext) -> TripInfoRequest {
    TripInfoRequest {
        trip_type: ctx.trip_type.as_str().into(),
        pickup_location: ctx.pickup.clone(),
        drop_location: ctx.drop.clone(),
        date: ctx.date.clone(),
        return_date: ctx.return_date.clone(),
        time: ctx.time.clone(),
        distance: ctx
            .distance_km
            .map_or_else(|| "0".to_string(), |km| km.to_string()),
        days: ctx.days.to_string(),
    }
}

/// Fold a trip-info response into page state and the persisted cache.
fn apply_trip_info(
    resp: &TripInfoResponse,
    resolved: &TripContext,
    ctx: &UseStateHandle<TripContext>,
    table: &UseStateHandle<Option<RateTable>>,
    cabs: &UseStateHandle<Vec<Cab>>,
) {
    let store = LocalStore;
    let mut next = resolved.clone();
    if resp.distance > 0.0 {
        next.distance_km = Some(resp.distance);
        let _ = store.set_raw(keys::DISTANCE, &resp.distance.to_string());
    }
    if resp.days > 0 {
        next.days = resp.days;
        let _ = store.set_json(keys::TRIP_DAYS, &resp.days);
    }
    ctx.set(next);

    // A response without a usable table replaces it with the defaults
    // wholesale; the cache always mirrors what is displayed.
    let fresh = resp.rate_table().unwrap_or(RateTable::DEFAULT);
    table.set(Some(fresh));
    let _ = store.set_json(keys::TRIP_INFO, &fresh);

    if !resp.cabinfo.is_empty() {
        cabs.set(resp.cabinfo.clone());
        let _ = store.set_json(keys::AVAILABLE_CABS, &resp.cabinfo);
    }
}

/// A failed fetch never clobbers data that is already on screen. Only a
/// first load with nothing cached falls back to the default table and
/// distance so the page stays usable.
fn apply_trip_info_failure(
    resolved: &TripContext,
    ctx: &UseStateHandle<TripContext>,
    table: &UseStateHandle<Option<RateTable>>,
) {
    if table.is_none() {
        table.set(Some(RateTable::DEFAULT));
        let _ = LocalStore.set_json(keys::TRIP_INFO, &RateTable::DEFAULT);
    }
    if resolved.distance_km.is_none() {
        let mut next = resolved.clone();
        next.distance_km = Some(FALLBACK_DISTANCE_KM);
        let _ = LocalStore.set_raw(keys::DISTANCE, &FALLBACK_DISTANCE_KM.to_string());
        ctx.set(next);
    }
}

#[function_component(SearchScreen)]
fn search_screen() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let nav = nav_params(location.as_ref());

    let ctx = use_state(|| resolve(&nav, &LocalStore));
    let table = use_state(|| {
        LocalStore
            .get_json::<RateTable>(keys::TRIP_INFO)
            .map(RateTable::sanitized)
    });
    let cabs = use_state(|| {
        LocalStore
            .get_json::<Vec<Cab>>(keys::AVAILABLE_CABS)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_fleet)
    });

    // Initial fetch plus a fixed-interval price refresh, torn down when the
    // search parameters change or the page unmounts.
    use_effect_with(nav, {
        let ctx = ctx.clone();
        let table = table.clone();
        let cabs = cabs.clone();
        move |nav: &NavParams| {
            let resolved = resolve(nav, &LocalStore);
            ctx.set(resolved.clone());
            let refresh = move || {
                if resolved.pickup.is_empty() || resolved.drop.is_empty() {
                    return;
                }
                let resolved = resolved.clone();
                let ctx = ctx.clone();
                let table = table.clone();
                let cabs = cabs.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let req = trip_info_request(&resolved);
                    match ApiClient::default().fetch_trip_info(&req).await {
                        Ok(resp) => apply_trip_info(&resp, &resolved, &ctx, &table, &cabs),
                        Err(err) => {
                            log::warn!("trip info refresh failed: {err}");
                            apply_trip_info_failure(&resolved, &ctx, &table);
                        }
                    }
                });
            };
            refresh();
            let interval = Interval::new(PRICE_POLL_INTERVAL_MS, {
                let refresh = refresh.clone();
                move || refresh()
            });
            move || drop(interval)
        }
    });

    let on_reserve = {
        let ctx = ctx.clone();
        Callback::from(move |choice: ReserveChoice| {
            let snapshot = (*ctx).clone();
            let car = CarData {
                name: choice.name.clone(),
                image: choice.image.clone(),
                price: choice.price,
                features: choice.features.clone(),
                category: choice.category.clone(),
                pickup_location: snapshot.pickup.clone(),
                drop_location: snapshot.drop.clone(),
                date: snapshot.date.clone(),
                return_date: snapshot.return_date.clone(),
                time: snapshot.time.clone(),
                trip_type: snapshot.trip_type,
                distance: snapshot
                    .distance_km
                    .map_or_else(String::new, |km| km.to_string()),
                days: snapshot.days.to_string(),
            };
            // Backup blob for the invoice page in case the query string is
            // lost on the way.
            let _ = LocalStore.set_json(keys::BOOKING_DATA, &car);

            let params = NavParams {
                name: Some(car.name.clone()),
                image: Some(car.image.clone()),
                price: Some(car.price.to_string()),
                features: Some(car.features.join(",")),
                category: Some(car.category.clone()),
                pickup_location: Some(car.pickup_location.clone()),
                drop_location: Some(car.drop_location.clone()),
                date: Some(car.date.clone()),
                return_date: Some(car.return_date.clone()),
                time: Some(car.time.clone()),
                trip_type: Some(car.trip_type.as_str().into()),
                distance: Some(car.distance.clone()),
                days: Some(car.days.clone()),
                ..NavParams::default()
            };
            if let Some(nav) = navigator.as_ref() {
                if let Err(err) = nav.push_with_query(&Route::Invoice, &params) {
                    log::error!("navigation to invoice failed: {err}");
                }
            }
        })
    };

    html! {
        <SearchPage
            ctx={(*ctx).clone()}
            table={(*table).unwrap_or(RateTable::DEFAULT)}
            cabs={(*cabs).clone()}
            {on_reserve}
        />
    }
}

#[function_component(LoginScreen)]
fn login_screen() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let query = login_query(location.as_ref());
    let form = use_state(LoginForm::new);

    use_effect_with((), {
        let form = form.clone();
        let rejected_upstream = query.error.is_some();
        move |()| {
            let mut next = (*form).clone();
            if rejected_upstream {
                next.show_error("Invalid mobile number or password.".into());
            }
            if let Some(message) = take_registration_banner(&SessionStore) {
                next.show_banner(message);
            }
            form.set(next);
        }
    });

    let on_mobile = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set_mobile(&value);
            form.set(next);
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set_password(&value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let redirect = query.redirect;
        Callback::from(move |()| {
            let mut next = (*form).clone();
            match next.begin_submit() {
                Ok(req) => {
                    form.set(next.clone());
                    let form = form.clone();
                    let navigator = navigator.clone();
                    let redirect = redirect.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let mut done = next;
                        match ApiClient::default().login(&req).await {
                            Ok((http_ok, resp)) => done.complete(http_ok, &resp),
                            Err(err) => {
                                log::error!("login request failed: {err}");
                                done.fail();
                            }
                        }
                        if let Some(session) = done.session().cloned() {
                            persist_session(&SessionStore, &session);
                            let target = redirect_for_role(&session.role, redirect.as_deref());
                            Timeout::new(LOGIN_REDIRECT_DELAY_MS, move || {
                                if let Some(nav) = navigator.as_ref() {
                                    nav.push(&Route::from_path(&target));
                                }
                            })
                            .forget();
                        }
                        form.set(done);
                    });
                }
                Err(err) => {
                    next.show_error(err.to_string());
                    form.set(next);
                }
            }
        })
    };

    html! {
        <LoginPage
            form={(*form).clone()}
            {on_mobile}
            {on_password}
            {on_submit}
        />
    }
}

#[function_component(InvoiceScreen)]
fn invoice_screen() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let nav = nav_params(location.as_ref());

    // Navigation parameters are authoritative; the persisted blob only
    // covers a reload that dropped the query string.
    let car = {
        let from_nav = CarData::from_nav(&nav);
        if from_nav.name.is_empty() {
            LocalStore
                .get_json::<CarData>(keys::BOOKING_DATA)
                .unwrap_or(from_nav)
        } else {
            from_nav
        }
    };

    let fare = use_state(|| FareState::new(car.price));
    let controller = use_state(BookingController::new);

    use_effect_with((), {
        let controller = controller.clone();
        move |()| {
            if let Some(session) = load_session(&SessionStore) {
                let cached = ContactInfo {
                    name: if session.name.is_empty() {
                        session.username
                    } else {
                        session.name
                    },
                    email: session.email,
                    phone: session.mobile_no,
                };
                let mut next = (*controller).clone();
                next.prefill(&cached);
                controller.set(next);
            }
        }
    });

    let on_field = {
        let controller = controller.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            let mut next = (*controller).clone();
            next.set_field(field, &value);
            controller.set(next);
        })
    };

    let on_calculate = {
        let controller = controller.clone();
        let fare = fare.clone();
        let car = car.clone();
        Callback::from(move |()| {
            if fare.is_calculated() {
                return;
            }
            let snapshot = (*controller).clone();
            let contact = snapshot.contact();
            if contact.name.trim().is_empty()
                || contact.email.trim().is_empty()
                || contact.phone.is_empty()
            {
                let mut next = snapshot;
                next.fail(Some("Please fill in all required fields".into()));
                controller.set(next);
                return;
            }
            let req = QuoteRequest {
                model_name: car.name.clone(),
                model_type: car.category.clone(),
                seats: FIXED_SEATS.into(),
                fuel_type: FIXED_FUEL_TYPE.into(),
                availability: FIXED_AVAILABILITY.into(),
                price: fare.base_price().to_string(),
                pickup_location: car.pickup_location.clone(),
                drop_location: car.drop_location.clone(),
                date: car.date.clone(),
                returndate: car.return_date.clone(),
                time: car.time.clone(),
                trip_type: car.trip_type.as_str().into(),
                distance: car.distance.clone(),
                days: car.days.clone(),
            };
            let controller = controller.clone();
            let fare = fare.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::default().fetch_quote(&req).await {
                    Ok(resp) => {
                        let mut next_fare = *fare;
                        next_fare.reconcile(&resp);
                        fare.set(next_fare);
                        // The quote was computed against these exact contact
                        // fields; freeze them.
                        let mut next = (*controller).clone();
                        next.lock_contact();
                        controller.set(next);
                    }
                    Err(err) => {
                        log::error!("quote request failed: {err}");
                        let mut next = (*controller).clone();
                        next.fail(Some(
                            "Failed to get pricing information. Please try again.".into(),
                        ));
                        controller.set(next);
                    }
                }
            });
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let fare = fare.clone();
        let car = car.clone();
        Callback::from(move |()| {
            let mut next = (*controller).clone();
            match next.begin_submit() {
                Ok(()) => {
                    controller.set(next.clone());
                    let user_id = SessionStore.get_raw(keys::USER_ID).ok().flatten();
                    let record =
                        BookingRecord::new(&car, next.contact(), &*fare, user_id.as_deref());
                    let controller = controller.clone();
                    let navigator = navigator.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let mut done = next;
                        match ApiClient::default().confirm_booking(&record).await {
                            Ok(resp) => done.complete(&resp),
                            Err(err) => {
                                log::error!("booking confirm failed: {err}");
                                done.fail(None);
                            }
                        }
                        if done.succeeded() {
                            Timeout::new(BOOKING_REDIRECT_DELAY_MS, move || {
                                if let Some(nav) = navigator.as_ref() {
                                    nav.push(&Route::Home);
                                }
                            })
                            .forget();
                        }
                        controller.set(done);
                    });
                }
                Err(ValidationError::SubmissionInFlight) => {}
                Err(ValidationError::MissingPhone | ValidationError::PhoneNotTenDigits) => {
                    // The inline phone error was recorded by the gate.
                    controller.set(next);
                }
                Err(err) => {
                    next.fail(Some(err.to_string()));
                    controller.set(next);
                }
            }
        })
    };

    html! {
        <InvoicePage
            car={car.clone()}
            fare={*fare}
            controller={(*controller).clone()}
            {on_field}
            {on_calculate}
            {on_submit}
        />
    }
}
