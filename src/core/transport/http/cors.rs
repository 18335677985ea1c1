//! Permissive CORS headers, applied to every HTTP response.

use http::{
    HeaderValue, Response,
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    },
};

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Set the CORS headers on `response`, overwriting any existing values.
///
/// Status and body pass through untouched.
pub fn with_cors<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_sets_all_three_headers() {
        let response = with_cors(
            Response::builder()
                .status(StatusCode::IM_A_TEAPOT)
                .body("short and stout")
                .unwrap(),
        );

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(*response.body(), "short and stout");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_HEADERS], "*");
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
    }

    #[test]
    fn test_overwrites_existing_values() {
        let response = with_cors(
            Response::builder()
                .header(ACCESS_CONTROL_ALLOW_ORIGIN, "https://example.com")
                .body(())
                .unwrap(),
        );
        let origins: Vec<_> = response
            .headers()
            .get_all(ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(origins, vec!["*"]);
    }

    #[test]
    fn test_idempotent() {
        let once = with_cors(Response::new(()));
        let twice = with_cors(with_cors(Response::new(())));
        assert_eq!(once.headers(), twice.headers());
    }
}
