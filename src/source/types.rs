//! Wire shapes shared by both source origins, and the flattening that turns
//! them into migration records.

use serde::{Deserialize, Serialize};

/// The unit of migration: one client entry lifted out of its inbound.
///
/// `uuid` is the stable cross-system identifier and the reconciliation key.
/// It is assumed globally unique across inbounds; a duplicate uuid simply
/// overwrites the earlier record's destination state, last one wins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub uuid: String,
    pub flow: Option<String>,
    pub protocol: String,
    pub port: u16,
}

/// Local snapshot document. A document without an `inbounds` key is an
/// empty migration, not a parse error.
#[derive(Deserialize, Debug, Default)]
pub struct InboundDocument {
    #[serde(default)]
    pub inbounds: Vec<Inbound>,
}

/// Live panel listing: 3x-ui wraps the inbound array in `obj`.
#[derive(Deserialize, Debug, Default)]
pub struct XuiListResponse {
    #[serde(default)]
    pub obj: Vec<Inbound>,
}

/// One proxy configuration unit: a protocol, a port and its client list.
#[derive(Deserialize, Debug, Default)]
pub struct Inbound {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub settings: InboundSettings,
}

#[derive(Deserialize, Debug, Default)]
pub struct InboundSettings {
    #[serde(default)]
    pub clients: Vec<InboundClient>,
}

/// An individual user entry within an inbound.
#[derive(Deserialize, Debug, Default)]
pub struct InboundClient {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub flow: Option<String>,
}

/// Flattens inbounds into migration records: outer inbound order, then inner
/// client order, with protocol and port attributed from the enclosing
/// inbound. No sorting, no deduplication.
pub fn flatten_inbounds(inbounds: Vec<Inbound>) -> Vec<UserRecord> {
    let mut users = Vec::new();
    for inbound in inbounds {
        for client in inbound.settings.clients {
            users.push(UserRecord {
                username: client.email,
                uuid: client.id,
                flow: client.flow,
                protocol: inbound.protocol.clone(),
                port: inbound.port,
            });
        }
    }
    users
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(document: &str) -> InboundDocument {
        serde_json::from_str(document).unwrap()
    }

    #[test]
    fn flattening_preserves_inbound_then_client_order() {
        let document = parse(
            r#"{
                "inbounds": [
                    {
                        "protocol": "vless",
                        "port": 443,
                        "settings": { "clients": [
                            { "email": "a@x", "id": "u1", "flow": "xtls-rprx-vision" },
                            { "email": "b@x", "id": "u2" }
                        ] }
                    },
                    {
                        "protocol": "trojan",
                        "port": 8443,
                        "settings": { "clients": [
                            { "email": "c@x", "id": "u3" }
                        ] }
                    }
                ]
            }"#,
        );

        let users = flatten_inbounds(document.inbounds);
        assert_eq!(users.len(), 3);
        assert_eq!(
            users[0],
            UserRecord {
                username: "a@x".to_string(),
                uuid: "u1".to_string(),
                flow: Some("xtls-rprx-vision".to_string()),
                protocol: "vless".to_string(),
                port: 443,
            }
        );
        assert_eq!(users[1].username, "b@x");
        assert_eq!(users[1].flow, None);
        assert_eq!(users[1].port, 443);
        assert_eq!(users[2].uuid, "u3");
        assert_eq!(users[2].protocol, "trojan");
        assert_eq!(users[2].port, 8443);
    }

    #[test]
    fn missing_inbounds_key_yields_zero_records() {
        let document = parse(r#"{ "log": { "loglevel": "warning" } }"#);
        assert!(flatten_inbounds(document.inbounds).is_empty());
    }

    #[test]
    fn inbound_without_clients_contributes_nothing() {
        let document = parse(
            r#"{ "inbounds": [ { "protocol": "vmess", "port": 10086, "settings": {} } ] }"#,
        );
        assert!(flatten_inbounds(document.inbounds).is_empty());
    }

    #[test]
    fn panel_listing_flattens_like_the_snapshot() {
        let listing: XuiListResponse = serde_json::from_str(
            r#"{ "success": true, "obj": [
                { "protocol": "vless", "port": 443, "settings": { "clients": [
                    { "email": "a@x", "id": "u1" }
                ] } }
            ] }"#,
        )
        .unwrap();

        let users = flatten_inbounds(listing.obj);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "a@x");
        assert_eq!(users[0].uuid, "u1");
    }
}
