//! Clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClientId;
use crate::error::PartyError;
use crate::optional_text;

/// A client of the desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ClientData {
    /// Trims every field and drops blank optional ones
    fn normalized(self) -> Result<Self, PartyError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(PartyError::InvalidClient("Name must not be empty".to_string()));
        }

        let email = optional_text(self.email);
        if let Some(email) = &email {
            if !looks_like_email(email) {
                return Err(PartyError::InvalidClient(format!("Invalid email '{}'", email)));
            }
        }

        Ok(Self {
            name,
            email,
            phone: optional_text(self.phone),
            address: optional_text(self.address),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

impl Client {
    /// Creates a client from form data
    pub fn from_data(data: ClientData) -> Result<Self, PartyError> {
        let data = data.normalized()?;
        Ok(Self {
            id: ClientId::new_v7(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            created_at: Utc::now(),
        })
    }

    /// Replaces the editable fields, leaving the client untouched on error
    pub fn update(&mut self, data: ClientData) -> Result<(), PartyError> {
        let data = data.normalized()?;
        self.name = data.name;
        self.email = data.email;
        self.phone = data.phone;
        self.address = data.address;
        Ok(())
    }
}
