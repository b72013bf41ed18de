//! Client DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_party::ClientData;

/// Body of a client create or update
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ClientRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1 to 200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "must be an email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub address: Option<String>,
}

impl From<ClientRequest> for ClientData {
    fn from(request: ClientRequest) -> Self {
        ClientData {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}
