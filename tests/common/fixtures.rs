// JSON response fixtures for API mocking
// Allow dead code since fixtures are used by different test files compiled separately
#![allow(dead_code)]

/// Environment endpoint: login pair plus the extra field the mock server leaks
pub const ENVIRONMENT_VARIABLES: &str = r#"{
    "username": "admin",
    "password": "hunter2",
    "jwt_secret_key": "server-side-secret"
}"#;

/// Token endpoint: successful exchange
pub const TOKEN_RESPONSE: &str = r#"{
    "token": "abc123"
}"#;

/// Token endpoint: rejected credentials
pub const TOKEN_REJECTED: &str = r#"{
    "message": "Invalid username or password"
}"#;

/// Employees endpoint: two records, with the employeeId field the page ignores
pub const EMPLOYEES: &str = r#"[
    {
        "name": "Ada Lovelace",
        "organization": "Engineering",
        "role": "Staff Engineer",
        "employeeId": 1
    },
    {
        "name": "Grace Hopper",
        "organization": "Platform",
        "role": "Principal Engineer",
        "employeeId": 2
    }
]"#;

/// Employees endpoint: the single-record case from the rendering contract
pub const SINGLE_EMPLOYEE: &str = r#"[
    {"name": "A", "organization": "B", "role": "C"}
]"#;

/// Employees endpoint: empty roster
pub const EMPTY_EMPLOYEES: &str = "[]";

/// Status endpoint response
pub const STATUS_OK: &str = r#"{
    "status": "The service is up and running"
}"#;

/// Sample staffboard.ini content for config tests
pub const SAMPLE_CONFIG_INI: &str = r#"[Server]
baseUrl = http://localhost:9999

[Output]
pagePath = /tmp/staffboard-roster.html
openBrowser = false
"#;

/// Config file with only a server section; output settings fall back to defaults
pub const PARTIAL_CONFIG_INI: &str = r#"[Server]
baseUrl = http://localhost:9999
"#;
