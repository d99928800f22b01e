use triplink_core::booking::{BookingController, BookingStage, CarData, ContactField};
use triplink_core::pricing::FareState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InvoicePageProps {
    pub car: CarData,
    pub fare: FareState,
    pub controller: BookingController,
    pub on_field: Callback<(ContactField, String)>,
    pub on_calculate: Callback<()>,
    pub on_submit: Callback<()>,
}

fn field_callback(
    on_field: &Callback<(ContactField, String)>,
    field: ContactField,
) -> Callback<InputEvent> {
    let cb = on_field.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            cb.emit((field, input.value()));
        }
    })
}

fn seats_for_category(category: &str) -> &'static str {
    if category == "SUV" || category == "MUV" {
        "6+1"
    } else {
        "4+1"
    }
}

#[function_component(InvoicePage)]
pub fn invoice_page(props: &InvoicePageProps) -> Html {
    let controller = &props.controller;
    let submitting = *controller.stage() == BookingStage::Submitting;
    let succeeded = *controller.stage() == BookingStage::Succeeded;
    let inputs_disabled = submitting || succeeded || props.fare.is_calculated();

    let on_name = field_callback(&props.on_field, ContactField::Name);
    let on_email = field_callback(&props.on_field, ContactField::Email);
    let on_phone = field_callback(&props.on_field, ContactField::Phone);
    let on_calculate = {
        let cb = props.on_calculate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-4 px-4" data-testid="invoice-page">
            <div class="max-w-5xl mx-auto">
                if succeeded {
                    <div
                        class="bg-green-100 border border-green-400 text-green-700 px-4 py-2 rounded relative mb-4"
                        role="alert"
                    >
                        <strong class="font-bold">{ "Success!" }</strong>
                        <span>
                            { " Your booking has been confirmed! Your booking ID is: " }
                            <strong>{ controller.booking_id().map(String::as_str).unwrap_or_default() }</strong>
                            { ". An email has been sent with your booking details. Redirecting to home page..." }
                        </span>
                    </div>
                }

                <div class="text-center mb-6">
                    <h1 class="text-4xl font-bold text-blue-600">{ "Booking Invoice" }</h1>
                    <p class="mt-2 text-gray-600">{ "Complete your booking details below" }</p>
                </div>

                <div class="bg-white rounded-2xl shadow-xl overflow-hidden md:grid md:grid-cols-2">
                    <div class="p-6 bg-blue-700 text-white">
                        <h2 class="text-2xl font-bold mb-4">{ "Cab Information" }</h2>
                        if props.car.image.is_empty() {
                            <div class="w-56 h-40 bg-gray-300 flex items-center justify-center rounded-xl mb-4">
                                <span class="text-gray-500">{ "No image available" }</span>
                            </div>
                        } else {
                            <img
                                src={props.car.image.clone()}
                                alt={props.car.name.clone()}
                                class="w-56 h-40 object-cover rounded-xl mb-4"
                            />
                        }
                        <div class="grid grid-cols-2 gap-3 text-sm">
                            <div><p class="text-blue-200 text-xs">{ "Model Type" }</p><p>{ &props.car.category }</p></div>
                            <div><p class="text-blue-200 text-xs">{ "Seats" }</p><p>{ seats_for_category(&props.car.category) }</p></div>
                            <div><p class="text-blue-200 text-xs">{ "Fuel Type" }</p><p>{ "CNG-Diesel" }</p></div>
                            <div><p class="text-blue-200 text-xs">{ "Availability" }</p><p>{ "Available" }</p></div>
                        </div>
                        <div class="border-t border-white/20 pt-4 mt-4 space-y-2" data-testid="fare-lines">
                            <div class="flex justify-between">
                                <span class="text-blue-200">{ "Price:" }</span>
                                <span>{ format!("₹{}", props.fare.base_price()) }</span>
                            </div>
                            if let Some(driver_rate) = props.fare.driver_rate() {
                                <div class="flex justify-between">
                                    <span class="text-blue-200">{ "Driver Allowance:" }</span>
                                    <span>{ format!("₹{driver_rate}") }</span>
                                </div>
                            }
                            <div class="flex justify-between">
                                <span class="text-blue-200">{ "Service Charge:" }</span>
                                <span>{ format!("₹{}", props.fare.service()) }</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-blue-200">{ "GST:" }</span>
                                <span>{ format!("₹{}", props.fare.gst()) }</span>
                            </div>
                            <div class="flex justify-between text-xl mt-3 pt-3 border-t border-white/20 font-bold">
                                <span>{ "Total Amount:" }</span>
                                <span>{ format!("₹{}", props.fare.total()) }</span>
                            </div>
                            if props.fare.is_calculated() {
                                <div class="mt-2 text-center bg-white/20 p-1 rounded-lg text-sm">
                                    { "Pricing calculated by server" }
                                </div>
                            }
                        </div>
                    </div>

                    <div class="p-6">
                        <h2 class="text-2xl font-bold text-gray-800 mb-4">{ "Trip Information" }</h2>
                        <div class="grid grid-cols-2 gap-3 mb-6 text-sm">
                            <div class="bg-gray-50 p-3 rounded-lg">
                                <p class="text-xs text-gray-500">{ "Pickup Location" }</p>
                                <p class="font-medium">{ &props.car.pickup_location }</p>
                            </div>
                            <div class="bg-gray-50 p-3 rounded-lg">
                                <p class="text-xs text-gray-500">{ "Drop Location" }</p>
                                <p class="font-medium">{ &props.car.drop_location }</p>
                            </div>
                            <div class="bg-gray-50 p-3 rounded-lg">
                                <p class="text-xs text-gray-500">{ "Date" }</p>
                                <p class="font-medium">{ &props.car.date }</p>
                            </div>
                            if props.car.trip_type.is_round_trip() {
                                <div class="bg-gray-50 p-3 rounded-lg">
                                    <p class="text-xs text-gray-500">{ "Return Date" }</p>
                                    <p class="font-medium">{ &props.car.return_date }</p>
                                </div>
                            }
                            <div class="bg-gray-50 p-3 rounded-lg">
                                <p class="text-xs text-gray-500">{ "Time" }</p>
                                <p class="font-medium">{ &props.car.time }</p>
                            </div>
                            <div class="bg-gray-50 p-3 rounded-lg">
                                <p class="text-xs text-gray-500">{ "Distance" }</p>
                                <p class="font-medium">{ format!("{} km", props.car.distance) }</p>
                            </div>
                        </div>

                        <h2 class="text-2xl font-bold text-gray-800 mb-4">{ "Contact Details" }</h2>
                        if let Some(error) = controller.error() {
                            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-2 rounded mb-4" role="alert">
                                { error }
                            </div>
                        }
                        <div class="space-y-4">
                            <input
                                type="text"
                                placeholder="Full Name"
                                class="w-full border rounded-lg px-3 py-2"
                                value={controller.contact().name.clone()}
                                oninput={on_name}
                                disabled={inputs_disabled}
                            />
                            <input
                                type="email"
                                placeholder="Email Address"
                                class="w-full border rounded-lg px-3 py-2"
                                value={controller.contact().email.clone()}
                                oninput={on_email}
                                disabled={inputs_disabled}
                            />
                            <div>
                                <input
                                    type="tel"
                                    placeholder="Phone Number"
                                    class="w-full border rounded-lg px-3 py-2"
                                    value={controller.contact().phone.clone()}
                                    oninput={on_phone}
                                    disabled={inputs_disabled}
                                />
                                if let Some(phone_error) = controller.phone_error() {
                                    <p class="text-sm text-red-600 mt-1">{ phone_error.to_string() }</p>
                                }
                            </div>
                        </div>

                        <div class="mt-6 flex flex-col gap-3">
                            if !props.fare.is_calculated() {
                                <button
                                    type="button"
                                    class="w-full py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 disabled:opacity-60"
                                    disabled={submitting || succeeded}
                                    onclick={on_calculate}
                                >
                                    { "Calculate Pricing" }
                                </button>
                            }
                            <button
                                type="button"
                                class="w-full py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-60"
                                disabled={submitting || succeeded}
                                onclick={on_submit}
                            >
                                if submitting {
                                    { "Processing..." }
                                } else {
                                    { "Confirm Booking" }
                                }
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
