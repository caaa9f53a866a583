use axum::extract::Query;
use http::StatusCode;

use crate::error::not_found;

/// Parse the `id` query value. Only integers >= 1 name a snippet.
pub(crate) fn parse_snippet_id(raw: Option<&str>) -> Option<i64> {
    raw?.parse::<i64>().ok().filter(|id| *id >= 1)
}

/// `GET /snippet?id=N`
///
/// The first `id` parameter wins. Anything that is not a positive integer is
/// a 404.
pub(crate) async fn show_snippet(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<String, (StatusCode, String)> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str());

    let Some(id) = parse_snippet_id(raw) else {
        tracing::debug!(id = ?raw, "Rejected snippet id");
        return Err(not_found());
    };

    Ok(format!("Display a specific snippet with ID {id}..."))
}

/// `POST /snippet/create`
pub(crate) async fn create_snippet() -> &'static str {
    "Create a new snippet..."
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query(pairs: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_parse_snippet_id() {
        assert_eq!(parse_snippet_id(Some("1")), Some(1));
        assert_eq!(parse_snippet_id(Some("123")), Some(123));
        assert_eq!(parse_snippet_id(Some("+7")), Some(7));

        for bad in ["", "0", "-1", "abc", "1.5", " 1", "99999999999999999999"] {
            assert_eq!(parse_snippet_id(Some(bad)), None, "{bad:?}");
        }
        assert_eq!(parse_snippet_id(None), None);
    }

    #[tokio::test]
    async fn test_show_echoes_id() {
        let body = show_snippet(query(&[("id", "42")])).await.unwrap();
        assert_eq!(body, "Display a specific snippet with ID 42...");
    }

    #[tokio::test]
    async fn test_show_first_id_wins() {
        let body = show_snippet(query(&[("x", "1"), ("id", "5"), ("id", "bad")]))
            .await
            .unwrap();
        assert_eq!(body, "Display a specific snippet with ID 5...");
    }

    #[tokio::test]
    async fn test_show_rejects_missing_id() {
        let (status, body) = show_snippet(query(&[])).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_create_acknowledges() {
        assert_eq!(create_snippet().await, "Create a new snippet...");
    }

    proptest! {
        #[test]
        fn positive_ids_are_accepted(id in 1i64..=i64::MAX) {
            prop_assert_eq!(parse_snippet_id(Some(&id.to_string())), Some(id));
        }

        #[test]
        fn non_positive_ids_are_rejected(id in i64::MIN..=0i64) {
            prop_assert_eq!(parse_snippet_id(Some(&id.to_string())), None);
        }

        #[test]
        fn non_numeric_ids_are_rejected(raw in "[^0-9+]*[a-zA-Z ._-][^0-9]*") {
            prop_assert_eq!(parse_snippet_id(Some(&raw)), None);
        }
    }
}
