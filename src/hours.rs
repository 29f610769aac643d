//! Business Hours
//!
//! Weekday/hour window check behind the contact page status banner.

/// Whether the office is open at the given local time.
/// Days follow the JS Date convention: 0 = Sunday .. 6 = Saturday.
/// Open Monday to Friday, 08:00 up to but not including 17:00.
pub fn is_open(day: u32, hour: u32) -> bool {
    (1..=5).contains(&day) && (8..17).contains(&hour)
}

/// Check the wall clock of the browser
pub fn is_open_now() -> bool {
    let now = js_sys::Date::new_0();
    is_open(now.get_day(), now.get_hours())
}
