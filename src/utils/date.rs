pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Event timestamps travel as naive UTC strings; RFC 3339 input is accepted as well.
pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(time.format(DATE_FMT).to_string().as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        parse_time(str_time.as_str()).map_err(D::Error::custom)
    }

    pub fn parse_time(str_time: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(str_time, DATE_FMT)
            .or_else(|_| DateTime::parse_from_rfc3339(str_time).map(|t| t.naive_utc()))
    }
}
