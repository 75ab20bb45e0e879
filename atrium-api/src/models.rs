use serde::{Deserialize, Serialize};

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Responses

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_camel_case_full_name() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"username":"alice","fullName":"Alice A."}"#)
                .expect("valid login response");
        assert_eq!(response.username, "alice");
        assert_eq!(response.full_name, "Alice A.");
    }

    #[test]
    fn register_request_serializes_all_fields() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
            password: "x".to_string(),
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "x");
    }

    #[test]
    fn register_response_parses_message() {
        let response: RegisterResponse =
            serde_json::from_str(r#"{"message":"created"}"#).expect("valid register response");
        assert_eq!(response.message, "created");
    }
}
