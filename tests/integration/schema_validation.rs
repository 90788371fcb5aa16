use jsonschema::validator_for;
use test_support::{cmd_bin, fixture_env_json};

fn compile_schema(name: &str) -> jsonschema::Validator {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let path = manifest_dir.join("tests").join("schemas").join(name);
  let data = std::fs::read(&path).expect("schema file");
  let schema: serde_json::Value = serde_json::from_slice(&data).expect("valid schema JSON");
  validator_for(&schema).expect("compile schema")
}

fn assert_valid(doc: &serde_json::Value) {
  let compiled = compile_schema("dashboard.schema.json");
  let errors: Vec<String> = compiled.iter_errors(doc).map(|e| e.to_string()).collect();
  assert!(errors.is_empty(), "schema errors: {:?}\ndoc: {}", errors, doc);
}

#[test]
fn live_dashboard_conforms_to_schema() {
  let out = cmd_bin("gh-profile-explorer")
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", fixture_env_json("octocat/repos.json"))
    .env("GPE_TEST_EVENTS_JSON", fixture_env_json("octocat/events.json"))
    .args(["--format", "json", "octocat"])
    .output()
    .unwrap();

  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_valid(&v);

  assert_eq!(v["state"], "profile-shown");
  assert_eq!(v["profile"]["followers"], "15.3K");
  assert_eq!(v["repositories"]["kind"], "ranked");
  assert_eq!(v["repositories"]["cards"][0]["name"], "Spoon-Knife");
  assert_eq!(v["repositories"]["cards"].as_array().unwrap().len(), 5);
  assert_eq!(v["charts"]["languages"]["canned"], false);
  assert_eq!(v["charts"]["growth"]["labels"], serde_json::json!(["2011", "2014", "2016", "2017"]));
  assert_eq!(v["charts"]["growth"]["totals"], serde_json::json!([2, 3, 4, 5]));
  assert_eq!(v["charts"]["repo_stats"]["labels"].as_array().unwrap().len(), 4);
  assert_eq!(v["timeline"]["entries"][2]["title"], "Member");
}

#[test]
fn mock_fallback_dashboard_conforms_to_schema() {
  let out = cmd_bin("gh-profile-explorer")
    .env("GPE_TEST_PROFILE_JSON", "{}")
    .args(["--format", "json", "--now-override", "2025-03-20T12:00:00Z", "octocat"])
    .output()
    .unwrap();

  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_valid(&v);

  assert_eq!(v["profile"]["name"], "N/A");
  assert_eq!(v["profile"]["public_repos"], "0");
  assert_eq!(v["repositories"]["cards"][0]["name"], "octocat-awesome-project");
  assert_eq!(v["timeline"]["entries"].as_array().unwrap().len(), 7);
}

#[test]
fn several_searches_form_an_array_of_valid_documents() {
  let out = cmd_bin("gh-profile-explorer")
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", "[]")
    .env("GPE_TEST_EVENTS_JSON", "[]")
    .args(["--format", "json", "octocat", "not/a/login"])
    .output()
    .unwrap();

  assert_eq!(out.status.code(), Some(1));
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  let docs = v.as_array().expect("array of documents");
  assert_eq!(docs.len(), 2);
  for doc in docs {
    assert_valid(doc);
  }

  assert_eq!(docs[0]["repositories"], serde_json::json!({ "kind": "no_repositories" }));
  assert_eq!(docs[0]["timeline"], serde_json::json!({ "kind": "no_activity" }));
  assert_eq!(docs[0]["charts"]["languages"]["canned"], true);
  assert_eq!(docs[0]["charts"]["repo_stats"]["substituted"], true);
  assert_eq!(docs[1]["state"], "error-shown");
  assert_eq!(docs[1]["error"], "Error: No profile found with this username");
}
