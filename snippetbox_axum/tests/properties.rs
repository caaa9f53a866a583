mod common;

use std::sync::LazyLock;

use proptest::prelude::*;
use reqwest::{Client, Method, StatusCode, header};
use tokio::runtime::Runtime;

/// One runtime hosts the server for every generated case.
static RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

static BASE_URL: LazyLock<String> = LazyLock::new(|| RUNTIME.block_on(common::spawn_app()));

static CLIENT: LazyLock<Client> = LazyLock::new(common::client);

fn send(method: Method, path: &str) -> (StatusCode, Option<String>, String) {
    // Resolved outside `block_on`: the first access starts the server on RUNTIME.
    let url = format!("{}{path}", *BASE_URL);
    RUNTIME.block_on(async {
        let response = CLIENT
            .request(method, url)
            .send()
            .await
            .unwrap();
        let status = response.status();
        let allow = response
            .headers()
            .get(header::ALLOW)
            .map(|v| v.to_str().unwrap().to_string());
        (status, allow, response.text().await.unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unmatched_paths_are_not_found(path in "/[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,2}") {
        prop_assume!(!["/snippet", "/snippet/create", "/user/signup", "/user/login", "/user/logout"]
            .contains(&path.as_str()));

        let (status, _, body) = send(Method::GET, &path);
        prop_assert_eq!(status, StatusCode::NOT_FOUND);
        prop_assert_eq!(body, "Not Found");
    }

    #[test]
    fn positive_ids_are_echoed(id in 1i64..=i64::MAX) {
        let (status, _, body) = send(Method::GET, &format!("/snippet?id={id}"));
        prop_assert_eq!(status, StatusCode::OK);
        prop_assert!(body.contains(&id.to_string()));
    }

    #[test]
    fn non_positive_ids_are_not_found(id in i64::MIN..=0i64) {
        let (status, _, _) = send(Method::GET, &format!("/snippet?id={id}"));
        prop_assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn non_numeric_ids_are_not_found(raw in "[a-zA-Z_.~]{1,16}") {
        let (status, _, _) = send(Method::GET, &format!("/snippet?id={raw}"));
        prop_assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn create_rejects_other_methods(
        method in prop::sample::select(vec![
            Method::GET, Method::PUT, Method::DELETE, Method::PATCH, Method::OPTIONS,
        ])
    ) {
        let (status, allow, _) = send(method, "/snippet/create");
        prop_assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        prop_assert_eq!(allow.as_deref(), Some("POST"));
    }
}
