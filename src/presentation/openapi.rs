use crate::application::booking::forms::{BookingDetails, PaymentDetails};
use crate::application::booking::open::OpenBookingRequest;
use crate::application::booking::workflow::{BookingStep, BookingSummary};
use crate::application::qualifications::form::QualificationRequest;
use crate::application::schedule::layout::{GridCell, GridRow, Placement, ScheduleGrid};
use crate::application::teacher::update::UpdateTeacherRequest;
use crate::domain::courses::CourseStatus;
use crate::domain::notifications::NotificationLevel;
use crate::domain::qualifications::{Level, QualificationKind};
use crate::domain::schedule::DayOfWeek;
use crate::domain::teacher::{Address, MemberStatus};
use crate::presentation::handlers::bookings::{BookingResource, QuoteResource};
use crate::presentation::handlers::courses::CourseResource;
use crate::presentation::handlers::dashboard::DashboardResource;
use crate::presentation::handlers::notifications::NotificationResource;
use crate::presentation::handlers::qualifications::QualificationResource;
use crate::presentation::handlers::schedule::ScheduleSlotResource;
use crate::presentation::handlers::students::StudentResource;
use crate::presentation::handlers::teacher::TeacherResource;
use crate::shared::error::{ErrorResponse, JsonApiError, JsonApiErrorSource};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tutordesk API",
        version = "0.1.0",
        description = "Tutoring admin backend: teacher profile, qualifications, weekly schedule and the booking dialog.\n\nAll responses follow the JSON:API v1.1 document structure.",
    ),
    paths(
        crate::presentation::handlers::health::health_check,
        crate::presentation::handlers::teacher::get_teacher,
        crate::presentation::handlers::teacher::update_teacher,
        crate::presentation::handlers::qualifications::list_qualifications,
        crate::presentation::handlers::qualifications::get_qualification,
        crate::presentation::handlers::qualifications::create_qualification,
        crate::presentation::handlers::qualifications::update_qualification,
        crate::presentation::handlers::qualifications::delete_qualification,
        crate::presentation::handlers::schedule::list_schedule,
        crate::presentation::handlers::schedule::get_schedule_grid,
        crate::presentation::handlers::bookings::open_booking,
        crate::presentation::handlers::bookings::get_booking,
        crate::presentation::handlers::bookings::submit_details,
        crate::presentation::handlers::bookings::go_back,
        crate::presentation::handlers::bookings::submit_payment,
        crate::presentation::handlers::bookings::close_booking,
        crate::presentation::handlers::students::list_students,
        crate::presentation::handlers::courses::list_courses,
        crate::presentation::handlers::dashboard::get_dashboard,
        crate::presentation::handlers::notifications::list_notifications,
    ),
    components(
        schemas(
            // Enums
            QualificationKind,
            Level,
            DayOfWeek,
            MemberStatus,
            CourseStatus,
            NotificationLevel,
            BookingStep,
            Address,

            // Request DTOs
            UpdateTeacherRequest,
            QualificationRequest,
            OpenBookingRequest,
            BookingDetails,
            PaymentDetails,

            // Layout
            ScheduleGrid,
            GridRow,
            GridCell,
            Placement,

            // JSON:API Resource types
            TeacherResource,
            QualificationResource,
            ScheduleSlotResource,
            BookingResource,
            QuoteResource,
            BookingSummary,
            StudentResource,
            CourseResource,
            DashboardResource,
            NotificationResource,
            JsonApiResource<TeacherResource>,
            JsonApiResource<QualificationResource>,
            JsonApiResource<BookingResource>,

            // JSON:API Response types
            JsonApiResponse<JsonApiResource<TeacherResource>>,
            JsonApiResponse<JsonApiResource<QualificationResource>>,
            JsonApiResponse<Vec<JsonApiResource<QualificationResource>>>,
            JsonApiResponse<Vec<JsonApiResource<ScheduleSlotResource>>>,
            JsonApiResponse<JsonApiResource<ScheduleGrid>>,
            JsonApiResponse<JsonApiResource<BookingResource>>,
            JsonApiResponse<Vec<JsonApiResource<StudentResource>>>,
            JsonApiResponse<Vec<JsonApiResource<CourseResource>>>,
            JsonApiResponse<JsonApiResource<DashboardResource>>,
            JsonApiResponse<Vec<JsonApiResource<NotificationResource>>>,
            JsonApiMeta,

            // JSON:API Error types
            ErrorResponse,
            JsonApiError,
            JsonApiErrorSource,
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "teacher", description = "Teacher profile"),
        (name = "qualifications", description = "Private and group qualification lists"),
        (name = "schedule", description = "Weekly timetable and grid layout"),
        (name = "bookings", description = "Three-step booking dialog"),
        (name = "students", description = "Student directory"),
        (name = "courses", description = "Course catalogue"),
        (name = "dashboard", description = "Dashboard statistics"),
        (name = "notifications", description = "Operator notifications")
    )
)]
pub struct ApiDoc;
