//! Reservation validation pipeline
//!
//! An ordered list of independent checks over the raw payload. The
//! caller runs them in order and stops at the first failure; no check
//! knows about the others. A payload that survives every check is
//! materialized into a typed [`NewReservation`].

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;
use serde_json::Value;
use shared::models::{NewReservation, ReservationData, ReservationStatus};

use crate::utils::{AppError, AppResult, BusinessClock};

/// Earliest bookable time of day
const OPEN_TIME: NaiveTime = match NaiveTime::from_hms_opt(10, 30, 0) {
    Some(t) => t,
    None => panic!("invalid opening time"),
};

/// Latest bookable time of day (inclusive)
const LAST_SEATING: NaiveTime = match NaiveTime::from_hms_opt(21, 30, 0) {
    Some(t) => t,
    None => panic!("invalid last seating time"),
};

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));

static TIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("time pattern"));

/// Permissive NANP shape: optional country code, common separators,
/// optional extension
static PHONE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\+?(\d{1,3}))?[-. (]*(\d{3})[-. )]*(\d{3})[-. ]*(\d{4})(?: *x(\d+))?\s*$")
        .expect("phone pattern")
});

type Check = fn(&ReservationData) -> AppResult<()>;

/// Field and format checks, applied in this order
const FORMAT_CHECKS: &[Check] = &[
    fields_populated,
    phone_number_valid,
    date_valid,
    time_valid,
    people_valid,
];

/// Run the full create/update pipeline
///
/// `data` is the body's `data` member; `None` means the wrapper was
/// missing entirely.
pub fn validate_reservation(
    data: Option<&ReservationData>,
    clock: &BusinessClock,
) -> AppResult<NewReservation> {
    let data = data_provided(data)?;
    for check in FORMAT_CHECKS {
        check(data)?;
    }
    working_hours(data, clock)?;
    status_valid_for_create(data)?;

    build(data).ok_or_else(|| AppError::internal("validated payload failed to materialize"))
}

/// Guard for `PUT /reservations/{id}/status`
///
/// The terminal check is authoritative: a finished reservation rejects
/// any requested status before the new value is even looked at.
pub fn validate_status_change(
    current: ReservationStatus,
    requested: Option<&str>,
) -> AppResult<ReservationStatus> {
    if current.is_terminal() {
        return Err(AppError::conflict(
            "reservation status is currently already finished.",
        ));
    }
    requested
        .and_then(ReservationStatus::parse)
        .ok_or_else(|| AppError::validation("unknown status provided."))
}

// ── Checks ──────────────────────────────────────────────────────────

fn data_provided(data: Option<&ReservationData>) -> AppResult<&ReservationData> {
    data.ok_or_else(|| AppError::validation("Data was not provided with request."))
}

fn fields_populated(data: &ReservationData) -> AppResult<()> {
    let text_fields = [
        ("first_name", &data.first_name),
        ("last_name", &data.last_name),
        ("mobile_number", &data.mobile_number),
        ("reservation_date", &data.reservation_date),
        ("reservation_time", &data.reservation_time),
    ];
    for (name, value) in text_fields {
        if value.as_deref().is_none_or(str::is_empty) {
            return Err(missing_field(name));
        }
    }
    if people_missing(&data.people) {
        return Err(missing_field("people"));
    }
    Ok(())
}

fn missing_field(name: &str) -> AppError {
    AppError::validation(format!("{name} field not provided and or empty"))
}

/// Present-but-empty semantics for the `people` field: absent, null,
/// zero, and the empty string all count as not provided.
fn people_missing(people: &Option<Value>) -> bool {
    match people {
        None | Some(Value::Null) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn phone_number_valid(data: &ReservationData) -> AppResult<()> {
    if let Some(phone) = data.mobile_number.as_deref()
        && !phone.is_empty()
        && !PHONE_FORMAT.is_match(phone)
    {
        return Err(AppError::validation(format!(
            "Phone number {phone} formatted incorrectly"
        )));
    }
    Ok(())
}

fn date_valid(data: &ReservationData) -> AppResult<()> {
    parse_date(data).map(|_| ())
}

fn time_valid(data: &ReservationData) -> AppResult<()> {
    parse_time(data).map(|_| ())
}

fn people_valid(data: &ReservationData) -> AppResult<()> {
    let people = match &data.people {
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    };
    let people = people.ok_or_else(|| {
        AppError::validation("The people field must be of type \"number\".")
    })?;
    if people < 1 {
        // Message kept from the original even though exactly 1 is accepted
        return Err(AppError::validation(
            "The people field must be greater than 1",
        ));
    }
    Ok(())
}

/// Business-hours rules; runs after the format checks
fn working_hours(data: &ReservationData, clock: &BusinessClock) -> AppResult<()> {
    let date = parse_date(data)?;
    let time = parse_time(data)?;
    let reservation_at = NaiveDateTime::new(date, time);

    if reservation_at < clock.now() {
        return Err(AppError::validation(
            "The provided date and or time must be in the future.",
        ));
    }
    if date.weekday() == Weekday::Tue {
        return Err(AppError::validation("Restaurant closed on tuesdays."));
    }
    if time < OPEN_TIME {
        return Err(AppError::validation("Reservations must be after 10:30 AM."));
    }
    if time > LAST_SEATING {
        return Err(AppError::validation("Reservations must be prior to 9:30 PM."));
    }
    Ok(())
}

/// A new reservation may only come in as `booked` (or with no status)
///
/// This is stricter than rejecting just `seated`/`finished`: an
/// explicit `cancelled` on create is refused as well, and cancellation
/// only happens through the status endpoint after booking.
fn status_valid_for_create(data: &ReservationData) -> AppResult<()> {
    match data.status.as_deref() {
        None | Some("") | Some("booked") => Ok(()),
        Some(other) => Err(AppError::validation(format!(
            "Reservation must not start with status: {other}"
        ))),
    }
}

// ── Parse helpers ───────────────────────────────────────────────────

fn parse_date(data: &ReservationData) -> AppResult<NaiveDate> {
    let raw = data.reservation_date.as_deref().unwrap_or_default();
    if DATE_FORMAT.is_match(raw)
        && let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    {
        return Ok(date);
    }
    Err(AppError::validation(
        "reservation_date must be formatted YYYY-MM-DD",
    ))
}

fn parse_time(data: &ReservationData) -> AppResult<NaiveTime> {
    let raw = data.reservation_time.as_deref().unwrap_or_default();
    if TIME_FORMAT.is_match(raw)
        && let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M")
    {
        return Ok(time);
    }
    Err(AppError::validation(
        "reservation_time must be formatted HH:MM",
    ))
}

/// Re-read the fields the checks proved present
fn build(data: &ReservationData) -> Option<NewReservation> {
    let status = match data.status.as_deref() {
        None | Some("") => ReservationStatus::Booked,
        Some(s) => ReservationStatus::parse(s)?,
    };
    Some(NewReservation {
        first_name: data.first_name.clone()?,
        last_name: data.last_name.clone()?,
        mobile_number: data.mobile_number.clone()?,
        reservation_date: data.reservation_date.clone()?,
        reservation_time: data.reservation_time.clone()?,
        people: data.people.as_ref()?.as_i64()?,
        status,
    })
}
