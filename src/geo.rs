use lazy_static::lazy_static;
use regex::Regex;

/// Latitude and longitude in signed decimal degrees (south and west negative).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// Parses a NOTAM coordinate token such as `5152N00049E`.
    ///
    /// The layout is positional: two digits of latitude degrees, two of
    /// minutes, `N`/`S`, three digits of longitude degrees, two of minutes,
    /// `E`/`W`. Anything after the eleventh character is ignored. Tokens that
    /// don't fit the layout yield `None`.
    pub fn from_notam(token: &str) -> Option<Self> {
        fn to_dd(d: &str, m: &str, hemisphere: &str) -> Option<f64> {
            let (d, m): (f64, f64) = (d.parse().ok()?, m.parse().ok()?);
            let dd = d + m / 60.0;
            if hemisphere == "S" || hemisphere == "W" {
                Some(-dd)
            } else {
                Some(dd)
            }
        }

        lazy_static! {
            static ref NOTAM_COORD_REGEX: Regex =
                Regex::new(r"^(\d{2})(\d{2})([NS])(\d{3})(\d{2})([EW])").unwrap();
        }

        let cap = NOTAM_COORD_REGEX.captures(token)?;
        let lat = to_dd(&cap[1], &cap[2], &cap[3])?;
        let lon = to_dd(&cap[4], &cap[5], &cap[6])?;
        Some(LatLon(lat, lon))
    }

    //Ex: N051.52.00.000 E000.49.00.000
    pub fn to_dms(self) -> String {
        // Work in whole milliseconds of arc so 51°52' doesn't print as 51°51'59.999"
        fn to_dms(dd: f64) -> (i64, i64, f64) {
            let ms = (dd.abs() * 3_600_000.0).round() as i64;
            let d = ms / 3_600_000;
            let m = (ms / 60_000) % 60;
            let s = (ms % 60_000) as f64 / 1000.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_negative() { "S" } else { "N" };
        let (d, m, s) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);

        tmp += " ";

        tmp += if self.1.is_sign_negative() { "W" } else { "E" };
        let (d, m, s) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);
        tmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn parses_reference_token() {
        let p = LatLon::from_notam("5152N00049E").unwrap();
        assert_close(p.lat(), 51.8667);
        assert_close(p.lon(), 0.8167);
    }

    #[test]
    fn hemisphere_sets_sign() {
        let cases = [
            ("5030N00130E", 1.0, 1.0),
            ("5030S00130E", -1.0, 1.0),
            ("5030N00130W", 1.0, -1.0),
            ("5030S00130W", -1.0, -1.0),
        ];
        for &(token, lat_sign, lon_sign) in cases.iter() {
            let p = LatLon::from_notam(token).unwrap();
            assert_close(p.lat(), lat_sign * 50.5);
            assert_close(p.lon(), lon_sign * 1.5);
        }
    }

    #[test]
    fn three_digit_longitude() {
        let p = LatLon::from_notam("0100S12345W").unwrap();
        assert_close(p.lat(), -1.0);
        assert_close(p.lon(), -123.75);
    }

    #[test]
    fn trailing_text_is_ignored() {
        let p = LatLon::from_notam("5152N00049E,").unwrap();
        assert_close(p.lat(), 51.8667);
    }

    #[test]
    fn short_or_empty_tokens_are_absent() {
        assert_eq!(LatLon::from_notam(""), None);
        assert_eq!(LatLon::from_notam("short"), None);
        assert_eq!(LatLon::from_notam("5152N0004E"), None);
    }

    #[test]
    fn malformed_tokens_are_absent() {
        assert_eq!(LatLon::from_notam("51X2N00049E"), None);
        assert_eq!(LatLon::from_notam("5152Q00049E"), None);
        assert_eq!(LatLon::from_notam("5152N00049N"), None);
        assert_eq!(LatLon::from_notam("SFC-FL195XX"), None);
        assert_eq!(LatLon::from_notam("ÅÅÅÅÅÅÅÅÅÅÅ"), None);
    }

    #[test]
    fn dms_rendering() {
        let p = LatLon::from_notam("5152N00049W").unwrap();
        assert_eq!(p.to_dms(), "N051.52.00.000 W000.49.00.000");
    }
}
