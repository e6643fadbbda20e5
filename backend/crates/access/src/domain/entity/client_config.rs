use serde::Serialize;

/// Status of a client-portal account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Archived,
}

/// One client-portal record
///
/// Static data compiled into the binary; the password is stored only as
/// a SHA-256 digest of its NFKC-normalized form.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub username: &'static str,
    pub password_digest: &'static str,
    pub brand_color: &'static str,
    pub status: ClientStatus,
}

impl ClientConfig {
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

/// The static client directory
///
/// Built once at startup and injected into handlers; lookups never touch
/// storage and never recompute digests.
#[derive(Debug, Clone)]
pub struct ClientDirectory {
    clients: Vec<ClientConfig>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<ClientConfig>) -> Self {
        Self { clients }
    }

    /// The studio's shipped client table
    pub fn builtin() -> Self {
        Self::new(vec![
            ClientConfig {
                id: "atlas",
                name: "Atlas Fabrication",
                username: "atlas",
                password_digest:
                    "225d74d35d4b635a422dbd68b6e772bdc6c37e204e36729bf717e81f0537c13b",
                brand_color: "#1f3a5f",
                status: ClientStatus::Active,
            },
            ClientConfig {
                id: "meridian",
                name: "Meridian Hotels",
                username: "meridian",
                password_digest:
                    "1cea168d1217a5bbd4ce8007ecd2896a8d9be9cf52e2f336e834616ee273fdc4",
                brand_color: "#7a5c2e",
                status: ClientStatus::Active,
            },
            ClientConfig {
                id: "foundry",
                name: "Foundry Coffee",
                username: "foundry",
                password_digest:
                    "8ef2b512a6ce213426d4dc0d778d414d0ce5fd399dc6c4a607b5c3699475c4ba",
                brand_color: "#2e4034",
                status: ClientStatus::Archived,
            },
        ])
    }

    /// Look up an active client by username
    ///
    /// Archived clients are invisible to the portal; a lookup miss and a
    /// wrong password are indistinguishable to the caller.
    pub fn find_active(&self, username: &str) -> Option<&ClientConfig> {
        self.clients
            .iter()
            .find(|c| c.username == username && c.is_active())
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
