//! Partner store list: remote fetch with a deterministic local fallback.
//!
//! The API returns `{ "data": [...], "meta": { "totalItems": n } }`. Any
//! failure, whether a transport error, a non-success status or a body
//! that does not parse, is logged and masked by the fallback set; the
//! carousel never renders a partial mix of the two.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config;

/// Size of the placeholder set shown when the API is unreachable.
pub const FALLBACK_PARTNER_COUNT: usize = 8;

#[derive(Clone, PartialEq, Deserialize)]
pub struct PartnerCategory {
    pub name: String,
}

#[derive(Clone, PartialEq, Deserialize, Default)]
pub struct PartnerCounts {
    #[serde(default)]
    pub rewards: u32,
    #[serde(default)]
    pub offers: u32,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub category: PartnerCategory,
    #[serde(rename = "_count", default)]
    pub counts: PartnerCounts,
}

#[derive(Deserialize, Default)]
pub struct StoresMeta {
    #[serde(rename = "totalItems", default)]
    pub total_items: u64,
}

#[derive(Deserialize)]
pub struct StoresResponse {
    #[serde(default)]
    pub data: Vec<Partner>,
    #[serde(default)]
    pub meta: StoresMeta,
}

pub fn stores_endpoint() -> String {
    format!("{}/stores", config::get_api_base_url())
}

/// Placeholder partners shown when the fetch fails: fixed ids and names,
/// one city label, zeroed counts.
pub fn fallback_partners() -> Vec<Partner> {
    (1..=FALLBACK_PARTNER_COUNT)
        .map(|i| Partner {
            id: format!("fallback-{i}"),
            name: format!("Partner {i}"),
            image: String::new(),
            city: "ALEPPO".to_string(),
            address: String::new(),
            phone: String::new(),
            category: PartnerCategory {
                name: "Business".to_string(),
            },
            counts: PartnerCounts::default(),
        })
        .collect()
}

/// One GET against the stores endpoint. Resolves to the fetched list or,
/// on any failure, the full fallback set.
pub async fn fetch_partners() -> Vec<Partner> {
    match Request::get(&stores_endpoint()).send().await {
        Ok(response) if response.ok() => match response.json::<StoresResponse>().await {
            Ok(body) => {
                log::info!(
                    "loaded {} partners (total {})",
                    body.data.len(),
                    body.meta.total_items
                );
                body.data
            }
            Err(err) => {
                gloo_console::error!("Failed to parse partners response:", err.to_string());
                fallback_partners()
            }
        },
        Ok(response) => {
            gloo_console::error!("Partners request failed with status:", response.status());
            fallback_partners()
        }
        Err(err) => {
            gloo_console::error!("Failed to fetch partners:", err.to_string());
            fallback_partners()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_fixed_and_zeroed() {
        let partners = fallback_partners();
        assert_eq!(partners.len(), FALLBACK_PARTNER_COUNT);
        for (i, partner) in partners.iter().enumerate() {
            assert_eq!(partner.id, format!("fallback-{}", i + 1));
            assert_eq!(partner.name, format!("Partner {}", i + 1));
            assert_eq!(partner.city, "ALEPPO");
            assert_eq!(partner.category.name, "Business");
            assert_eq!(partner.counts.rewards, 0);
            assert_eq!(partner.counts.offers, 0);
            assert!(partner.image.is_empty());
        }
    }

    #[test]
    fn envelope_parses_verbatim() {
        let body = r#"{
            "data": [{
                "id": "s-1",
                "name": "Coffee Corner",
                "image": "https://cdn.example/s-1.png",
                "city": "ALEPPO",
                "address": "Martini St.",
                "phone": "+963000000000",
                "category": { "name": "Food" },
                "_count": { "rewards": 3, "offers": 1 }
            }],
            "meta": { "totalItems": 1 }
        }"#;
        let parsed: StoresResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.meta.total_items, 1);
        let partner = &parsed.data[0];
        assert_eq!(partner.name, "Coffee Corner");
        assert_eq!(partner.category.name, "Food");
        assert_eq!(partner.counts.rewards, 3);
        assert_eq!(partner.counts.offers, 1);
    }

    #[test]
    fn missing_data_field_means_empty_list() {
        let parsed: StoresResponse = serde_json::from_str(r#"{"meta":{"totalItems":0}}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn absent_count_and_image_default() {
        let body = r#"{
            "data": [{
                "id": "s-2",
                "name": "Plain Store",
                "category": { "name": "Retail" }
            }]
        }"#;
        let parsed: StoresResponse = serde_json::from_str(body).unwrap();
        let partner = &parsed.data[0];
        assert!(partner.image.is_empty());
        assert_eq!(partner.counts.rewards, 0);
        assert_eq!(partner.counts.offers, 0);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(serde_json::from_str::<StoresResponse>(r#"{"data": 42}"#).is_err());
    }
}
