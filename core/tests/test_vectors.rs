//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use course_client::{
    ApiClient, ApiError, ClientConfig, CreateExerciseRequest, ExerciseResponse, ExercisesClient,
    GetExercisesQuery, GetExercisesResponse, HttpMethod, HttpRequest, HttpResponse,
    UpdateExerciseRequest,
};

const BASE_URL: &str = "http://localhost:8000";

fn client() -> ExercisesClient {
    ExercisesClient::new(ApiClient::new(&ClientConfig::new(BASE_URL)).with_bearer_token("vector-token"))
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn string_pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
    assert_eq!(req.header("authorization"), Some("Bearer vector-token"), "{name}: bearer");

    if let Some(query) = expected.get("query") {
        assert_eq!(req.query, string_pairs(query), "{name}: query");
    }
    if let Some(full_url) = expected.get("full_url") {
        assert_eq!(
            req.full_url().unwrap().as_str(),
            format!("{BASE_URL}{}", full_url.as_str().unwrap()),
            "{name}: full url"
        );
    }
    if let Some(headers) = expected.get("headers") {
        for (header, value) in string_pairs(headers) {
            assert_eq!(req.header(&header), Some(value.as_str()), "{name}: header {header}");
        }
    }
    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check an error against `{"status": N}` or `{"kind": "Deserialization"}`.
fn assert_expected_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    if let Some(status) = expected.get("status") {
        assert_eq!(err.status(), Some(status.as_u64().unwrap() as u16), "{name}: status");
        return;
    }
    match expected["kind"].as_str().unwrap() {
        "Deserialization" => assert!(
            matches!(err, ApiError::Deserialization(_)),
            "{name}: expected Deserialization, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateExerciseRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_exercise(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_exercise(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: ExerciseResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = GetExercisesQuery {
            course_id: case["input_course_id"].as_str().unwrap().to_string(),
        };

        let req = c.build_list_exercises(&query);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_exercises(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: GetExercisesResponse =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();

        let req = c.build_get_exercise(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_exercise(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: ExerciseResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let input: UpdateExerciseRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_exercise(id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_exercise(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: ExerciseResponse = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();

        let req = c.build_delete_exercise(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_exercise(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error);
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
