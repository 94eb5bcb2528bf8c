use crate::application::booking::back::GoBackUseCase;
use crate::application::booking::close::CloseBookingUseCase;
use crate::application::booking::details::SubmitDetailsUseCase;
use crate::application::booking::forms::{BookingDetails, PaymentDetails};
use crate::application::booking::get::GetBookingUseCase;
use crate::application::booking::open::{OpenBookingRequest, OpenBookingUseCase};
use crate::application::booking::payment::SubmitPaymentUseCase;
use crate::application::booking::workflow::{BookingSnapshot, BookingStep, BookingSummary};
use crate::domain::qualifications::QualificationKind;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use crate::shared::validation::{FieldErrors, JsonBody, ValidatedJson};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResource {
    pub currency: String,
    #[schema(example = "$450.00")]
    pub total: String,
    #[schema(example = "$2.50")]
    pub fee: String,
    #[schema(example = "$452.50")]
    pub payable: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResource {
    pub qualification_id: String,
    pub qualification_kind: QualificationKind,
    pub qualification_name: String,
    pub step: BookingStep,
    pub processing: bool,
    pub details: BookingDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "•••• 1111")]
    pub card: Option<String>,
    /// Field messages from the last rejected submit
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
    pub quote: QuoteResource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BookingSummary>,
}

impl From<BookingSnapshot> for BookingResource {
    fn from(snapshot: BookingSnapshot) -> Self {
        let quote = &snapshot.quote;
        Self {
            qualification_id: snapshot.qualification.id().to_string(),
            qualification_kind: snapshot.qualification.kind(),
            qualification_name: snapshot.qualification.name().to_string(),
            step: snapshot.step,
            processing: snapshot.processing,
            card: Some(snapshot.masked_card).filter(|c| !c.is_empty()),
            errors: snapshot.errors,
            quote: QuoteResource {
                currency: quote.currency.clone(),
                total: quote.display(quote.total),
                fee: quote.display(quote.fee),
                payable: quote.display(quote.payable),
            },
            summary: snapshot.summary,
            details: snapshot.details,
        }
    }
}

fn resource(snapshot: BookingSnapshot) -> JsonApiResource<BookingResource> {
    JsonApiResource::new("bookings", snapshot.id.to_string(), BookingResource::from(snapshot))
}

/// Open a booking dialog for a qualification
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = OpenBookingRequest,
    responses(
        (status = 201, description = "Booking opened in the details step", body = JsonApiResponse<JsonApiResource<BookingResource>>),
        (status = 404, description = "Qualification not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn open_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OpenBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = OpenBookingUseCase::new(
        state.qualifications,
        state.bookings,
        state.notifier,
        state.scheduler,
        state.delays,
    );
    let snapshot = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(JsonApiResponse::new(resource(snapshot)))))
}

/// Current state of a booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = JsonApiResponse<JsonApiResource<BookingResource>>),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetBookingUseCase::new(state.bookings);
    let snapshot = use_case.execute(id).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(snapshot)))))
}

/// Save and submit the details step
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/details",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = BookingDetails,
    responses(
        (status = 200, description = "Details accepted, booking in the payment step", body = JsonApiResponse<JsonApiResource<BookingResource>>),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking is not in the details step", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn submit_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(details): JsonBody<BookingDetails>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SubmitDetailsUseCase::new(state.bookings);
    let snapshot = use_case.execute(id, details).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(snapshot)))))
}

/// Return from payment to details, keeping both drafts
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/back",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking back in the details step", body = JsonApiResponse<JsonApiResource<BookingResource>>),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking is not in the payment step", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GoBackUseCase::new(state.bookings);
    let snapshot = use_case.execute(id).await?;

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(snapshot)))))
}

/// Save the card form and pay.
///
/// Responds once processing finishes; the completion signal follows
/// in the background after the acknowledgement delay.
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/payment",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = PaymentDetails,
    responses(
        (status = 200, description = "Payment complete, booking in the success step", body = JsonApiResponse<JsonApiResource<BookingResource>>),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking is not awaiting payment", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 429, description = "Too many payment attempts")
    ),
    tag = "bookings"
)]
pub async fn submit_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(payment): JsonBody<PaymentDetails>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SubmitPaymentUseCase::new(state.bookings, state.scheduler);
    let (snapshot, acknowledgement) = use_case.execute(id, payment).await?;

    tokio::spawn(acknowledgement.fire());

    Ok((StatusCode::OK, Json(JsonApiResponse::new(resource(snapshot)))))
}

/// Close the booking dialog, discarding its drafts
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking closed", body = JsonApiResponse<serde_json::Value>),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Payment is being processed", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn close_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CloseBookingUseCase::new(state.bookings);
    use_case.execute(id).await?;

    Ok((
        StatusCode::OK,
        Json(JsonApiResponse::new(json!(null)).with_meta(JsonApiMeta::new().with_deleted())),
    ))
}
