use serde::Serialize;

/// One timezone an identity may claim, with its standard-time UTC offset.
///
/// Offsets are signed minutes east of UTC (Tokyo +540, New York -300).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimezoneOption {
    pub id: &'static str,
    pub offset_minutes: i32,
}

/// A language paired with the timezones that are geographically plausible
/// for it.
///
/// `languages` is the Accept-Language style negotiation list, most
/// preferred first. The timezone set is hand-curated heuristic data, not a
/// complete internationalization model.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LocaleGroup {
    pub language: &'static str,
    pub languages: &'static [&'static str],
    pub timezones: &'static [TimezoneOption],
}
