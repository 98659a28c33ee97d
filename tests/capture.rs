use routetree::{Config, MatchError, MatchMode, Router};

fn router(routes: &[&'static str]) -> Router<&'static str> {
    let mut router = Router::with_config(Config {
        match_mode: MatchMode::Capture,
        ..Config::default()
    });

    for route in routes {
        router.insert(*route, *route).unwrap();
    }

    router
}

fn params(result: &Result<routetree::Match<&&str>, MatchError>) -> Vec<(String, String)> {
    let params = match result {
        Ok(matched) => &matched.params,
        Err(err) => err.params(),
    };

    params
        .iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn params_absorb_values() {
    let router = router(&[
        "/user",
        "/user/:id",
        "/cmd/vet",
        "/cmd/:tool",
        "/:org/:repo",
    ]);

    let cases: &[(&str, &str, &[(&str, &str)])] = &[
        ("/user/42", "/user/:id", &[("id", "42")]),
        ("/user", "/user", &[]),
        ("/cmd/vet", "/cmd/vet", &[]),
        ("/cmd/go", "/cmd/:tool", &[("tool", "go")]),
        ("/acme/widgets", "/:org/:repo", &[("org", "acme"), ("repo", "widgets")]),
        ("/user/:id", "/user/:id", &[("id", ":id")]),
    ];

    for (path, route, expected) in cases {
        let result = router.at(path);
        assert_eq!(result.as_ref().map(|m| *m.value), Ok(*route), "{path}");
        assert_eq!(params(&result), pairs(expected), "{path}");
    }
}

#[test]
fn failures_keep_bindings() {
    let router = router(&["/user/:id", "/cmd"]);

    let result = router.at("/user/42/posts");
    assert!(matches!(result, Err(MatchError::NotFound { .. })));
    assert_eq!(params(&result), pairs(&[("id", "42")]));

    let result = router.at("/missing");
    assert!(matches!(result, Err(MatchError::NotFound { .. })));
    assert!(params(&result).is_empty());

    let router = router_with_prefix();
    let result = router.at("/files/report");
    assert!(matches!(result, Err(MatchError::NoResource { .. })));
    assert_eq!(params(&result), pairs(&[("name", "report")]));
}

fn router_with_prefix() -> Router<&'static str> {
    router(&["/files/:name/raw"])
}

#[test]
fn literal_mode_is_default() {
    let mut router = Router::new();
    router.insert("/user/:id", "user").unwrap();

    assert_eq!(router.config().match_mode, MatchMode::Literal);
    assert!(matches!(
        router.at("/user/42"),
        Err(MatchError::NotFound { .. })
    ));
}

#[test]
fn at_mut_in_capture_mode() {
    let mut router = Router::with_config(Config {
        match_mode: MatchMode::Capture,
        ..Config::default()
    });
    router.insert("/count/:name", 0).unwrap();

    *router.at_mut("/count/a").unwrap().value += 1;
    *router.at_mut("/count/b").unwrap().value += 1;

    let matched = router.at("/count/c").unwrap();
    assert_eq!(*matched.value, 2);
    assert_eq!(matched.params.get("name"), Some("c"));
}

#[test]
fn config_from_json() {
    let config: Config = serde_json::from_str(r#"{ "match_mode": "capture" }"#).unwrap();
    assert_eq!(config.match_mode, MatchMode::Capture);
    assert!(config.pretty_dump);

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}
