use chrono::{NaiveDateTime, TimeZone, Utc};

/// Formato de data HTTP do atributo `expires` (mesma forma do
/// `toUTCString` dos browsers).
const HTTP_DATE_GMT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const HTTP_DATE_UTC: &str = "%a, %d %b %Y %H:%M:%S UTC";

/// Formata um instante em ms desde a época como data HTTP.
pub(crate) fn format_http_date(ms: i64) -> String {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|d| d.format(HTTP_DATE_GMT).to_string())
        .unwrap_or_default()
}

/// Faz o parse de uma data HTTP para ms desde a época.
/// Aceita sufixo GMT ou UTC.
pub(crate) fn parse_http_date(s: &str) -> Option<i64> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, HTTP_DATE_GMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, HTTP_DATE_UTC))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive).timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch() {
        assert_eq!(format_http_date(0), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn roundtrip() {
        let ms = 1_700_000_000_000;
        let text = format_http_date(ms);
        assert_eq!(parse_http_date(&text), Some(ms));
    }

    #[test]
    fn parses_utc_suffix() {
        assert_eq!(parse_http_date("Thu, 01 Jan 1970 00:00:00 UTC"), Some(0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_http_date("amanhã de manhã"), None);
    }
}
