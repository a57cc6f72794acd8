use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{BookingApi, BookingError};
use crate::models::booking::Booking;

/// Error body the booking service sends with a refused create request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Blocking HTTP client for the booking service.
///
/// Calls are made from worker threads, never from the UI thread.
pub struct HttpBookingClient {
    client: Client,
    url: String,
    max_response_bytes: usize,
}

impl HttpBookingClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(anyhow!("Booking service URL must use HTTP or HTTPS"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build booking service HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
            max_response_bytes: 5 * 1024 * 1024,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn read_body(&self, response: reqwest::blocking::Response) -> Result<Vec<u8>, BookingError> {
        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(BookingError::Decode(format!(
                    "response too large ({} bytes > {} bytes)",
                    content_length, self.max_response_bytes
                )));
            }
        }

        let bytes = response
            .bytes()
            .map_err(|err| BookingError::Connection(err.to_string()))?;

        if bytes.len() > self.max_response_bytes {
            return Err(BookingError::Decode(format!(
                "response too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_response_bytes
            )));
        }

        Ok(bytes.to_vec())
    }
}

impl BookingApi for HttpBookingClient {
    fn fetch_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| BookingError::Connection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Status(status.as_u16()));
        }

        let body = self.read_body(response)?;
        parse_booking_list(&body)
    }

    fn create_booking(&self, booking: &Booking) -> Result<(), BookingError> {
        if let Some(field) = booking.missing_field() {
            return Err(BookingError::Invalid(field));
        }

        let response = self
            .client
            .post(&self.url)
            .json(booking)
            .send()
            .map_err(|err| BookingError::Connection(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = self.read_body(response).unwrap_or_default();
        Err(rejection(status.as_u16(), &body))
    }
}

pub(crate) fn parse_booking_list(body: &[u8]) -> Result<Vec<Booking>, BookingError> {
    serde_json::from_slice::<Vec<Booking>>(body).map_err(|err| BookingError::Decode(err.to_string()))
}

/// Build the rejection for a non-success create response. A body without a
/// usable `detail` string still counts as a rejection, just without reason.
pub(crate) fn rejection(status: u16, body: &[u8]) -> BookingError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .filter(|detail| !detail.trim().is_empty());
    BookingError::Rejected { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned HTTP response on a local port and return the
    /// URL to reach it.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/bookings", addr)
    }

    /// Consume headers and any `Content-Length` body so the client sees a
    /// complete exchange.
    fn read_request(stream: &mut std::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    return;
                }
            }
        }
    }

    fn client_for(url: &str) -> HttpBookingClient {
        HttpBookingClient::new(url, Duration::from_secs(5)).unwrap()
    }

    fn salsa_booking() -> Booking {
        Booking {
            room_name: "Salsa".to_string(),
            date: "2025-03-03".to_string(),
            time_slot: "10:00".to_string(),
        }
    }

    #[test]
    fn test_fetch_bookings_over_http() {
        let url = serve_once(
            "200 OK",
            r#"[{"room_name": "Salsa", "date": "2025-03-03", "time_slot": "10:00"}]"#,
        );
        assert_eq!(client_for(&url).fetch_bookings(), Ok(vec![salsa_booking()]));
    }

    #[test]
    fn test_fetch_bookings_error_status() {
        let url = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#);
        assert_eq!(client_for(&url).fetch_bookings(), Err(BookingError::Status(500)));
    }

    #[test]
    fn test_fetch_bookings_non_array_body() {
        let url = serve_once("200 OK", r#"{"error": "DATABASE_URL not configured"}"#);
        let err = client_for(&url).fetch_bookings().unwrap_err();
        assert!(matches!(err, BookingError::Decode(_)));
    }

    #[test]
    fn test_fetch_bookings_without_server() {
        let err = client_for("http://127.0.0.1:1/").fetch_bookings().unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn test_create_booking_over_http() {
        let url = serve_once("201 Created", r#"{"id": 7}"#);
        assert_eq!(client_for(&url).create_booking(&salsa_booking()), Ok(()));
    }

    #[test]
    fn test_create_booking_rejected_with_detail() {
        let url = serve_once("400 Bad Request", r#"{"detail": "taken"}"#);
        assert_eq!(
            client_for(&url).create_booking(&salsa_booking()),
            Err(BookingError::Rejected {
                status: 400,
                detail: Some("taken".to_string())
            })
        );
    }

    #[test]
    fn test_create_booking_without_server() {
        let err = client_for("http://127.0.0.1:1/").create_booking(&salsa_booking()).unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn test_parse_booking_list() {
        let body = br#"[
            {"room_name": "Salsa", "date": "2025-03-03", "time_slot": "10:00"},
            {"room_name": "Air&Light", "date": "2025-03-04", "time_slot": "18:30"}
        ]"#;
        let bookings = parse_booking_list(body).unwrap();
        assert_eq!(
            bookings,
            vec![
                Booking {
                    room_name: "Salsa".to_string(),
                    date: "2025-03-03".to_string(),
                    time_slot: "10:00".to_string(),
                },
                Booking {
                    room_name: "Air&Light".to_string(),
                    date: "2025-03-04".to_string(),
                    time_slot: "18:30".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_booking_list_rejects_non_array() {
        let err = parse_booking_list(br#"{"error": "DATABASE_URL not configured"}"#).unwrap_err();
        assert!(matches!(err, BookingError::Decode(_)));
    }

    #[test]
    fn test_rejection_uses_detail_verbatim() {
        let err = rejection(400, "{\"detail\": \"Все поля обязательны\"}".as_bytes());
        assert_eq!(err.detail(), Some("Все поля обязательны"));
    }

    #[test]
    fn test_rejection_without_detail() {
        assert_eq!(rejection(500, b"<html>oops</html>").detail(), None);
        assert_eq!(rejection(500, br#"{"error": "boom"}"#).detail(), None);
        assert_eq!(rejection(500, br#"{"detail": "  "}"#).detail(), None);
    }

    #[test]
    fn test_new_rejects_other_schemes() {
        assert!(HttpBookingClient::new("ftp://example.com", Duration::from_secs(1)).is_err());
        let client = HttpBookingClient::new(" http://localhost:1/bookings ", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url(), "http://localhost:1/bookings");
    }

    #[test]
    fn test_create_refuses_incomplete_booking_without_sending() {
        // Port 1 is never listened on; reaching the network would yield Connection.
        let client = HttpBookingClient::new("http://127.0.0.1:1/", Duration::from_secs(1)).unwrap();
        let booking = Booking {
            room_name: "Salsa".to_string(),
            date: String::new(),
            time_slot: "10:00".to_string(),
        };
        assert_eq!(client.create_booking(&booking), Err(BookingError::Invalid("date")));
    }
}
