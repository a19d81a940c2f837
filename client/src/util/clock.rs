//! Calendar year source for the footer copyright line.
//!
//! The year is injected into the footer as a prop so tests can pin it; this
//! module only supplies the real value. Browser builds read the user's local
//! clock via `js_sys::Date`, server/native builds read UTC via `time`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year at render time.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
