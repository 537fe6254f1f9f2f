// src/api/vk.rs
use std::ops::Range;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::Directory;
use crate::config::consts::{PROFILE_FIELDS, USERS_GET};
use crate::config::options::ApiOptions;
use crate::core::net;
use crate::error::{HarvestError, Result};
use crate::profile::RawProfile;

/// `users.get` over HTTPS.
pub struct VkDirectory {
    client: Client,
    url: String,
    api: ApiOptions,
}

impl VkDirectory {
    pub fn new(api: &ApiOptions) -> Result<Self> {
        let client = net::build_client(api.timeout_secs)?;
        let url = format!("{}/{}", api.base_url.trim_end_matches('/'), USERS_GET);
        Ok(Self { client, url, api: api.clone() })
    }

    fn query(&self, ids: Range<u64>) -> Vec<(&'static str, String)> {
        let user_ids = ids.map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        let mut q = vec![
            ("user_ids", user_ids),
            ("fields", PROFILE_FIELDS.join(",")),
            ("lang", self.api.lang.clone()),
            ("v", self.api.version.clone()),
        ];
        if let Some(token) = &self.api.access_token {
            q.push(("access_token", token.clone()));
        }
        q
    }
}

impl Directory for VkDirectory {
    fn users(&self, ids: Range<u64>) -> Result<Vec<RawProfile>> {
        let envelope: Envelope<Vec<RawProfile>> = net::get_json(&self.client, &self.url, &self.query(ids))?;
        envelope.into_result()
    }
}

/// `{"response": …}` on success, `{"error": {…}}` otherwise.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    response: Option<T>,
    error: Option<ApiFault>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiFault {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

impl<T> Envelope<T> {
    pub(crate) fn into_result(self) -> Result<T> {
        match (self.response, self.error) {
            (_, Some(fault)) => Err(HarvestError::Api { code: fault.error_code, message: fault.error_msg }),
            (Some(response), None) => Ok(response),
            (None, None) => Err(HarvestError::Api {
                code: 0,
                message: s!("envelope carries neither response nor error"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_response_list() {
        let body = r#"{"response":[
            {"id":1,"first_name":"Павел","last_name":"Дуров","is_closed":false,
             "country":{"id":1,"title":"Россия"},"city":{"id":2,"title":"Санкт-Петербург"}},
            {"id":2,"first_name":"DELETED","last_name":"","deactivated":"deleted"}
        ]}"#;
        let env: Envelope<Vec<RawProfile>> = serde_json::from_str(body).unwrap();
        let profiles = env.into_result().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].country.as_ref().unwrap().title, "Россия");
        assert_eq!(profiles[1].deactivated.as_deref(), Some("deleted"));
        assert!(profiles[1].home_town.is_none());
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let body = r#"{"error":{"error_code":5,"error_msg":"User authorization failed"}}"#;
        let env: Envelope<Vec<RawProfile>> = serde_json::from_str(body).unwrap();
        match env.into_result() {
            Err(HarvestError::Api { code, message }) => {
                assert_eq!(code, 5);
                assert!(message.contains("authorization"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn query_carries_fields_and_token() {
        let api = ApiOptions { access_token: Some(s!("t0k")), ..ApiOptions::default() };
        let dir = VkDirectory::new(&api).unwrap();
        let q = dir.query(10..13);
        assert!(q.contains(&("user_ids", s!("10,11,12"))));
        assert!(q.contains(&("fields", s!("city,country,home_town"))));
        assert!(q.contains(&("v", s!("5.74"))));
        assert!(q.contains(&("access_token", s!("t0k"))));
    }
}
