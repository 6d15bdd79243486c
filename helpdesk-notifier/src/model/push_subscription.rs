use serde::{Deserialize, Serialize};

///
/// Push subscription created by the platform push service.
/// Serialized the same way as browser `PushSubscription.toJSON()`.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,
    #[serde(default)]
    pub expiration_time: Option<i64>,
    pub keys: PushSubscriptionKeys,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscriptionKeys {
    #[serde(with = "se_de_base64url")]
    pub p256dh: Vec<u8>,
    #[serde(with = "se_de_base64url")]
    pub auth: Vec<u8>,
}

mod se_de_base64url {
    use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
        let base64 = BASE64_URL_SAFE_NO_PAD.encode(v);

        String::serialize(&base64, s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let base64 = String::deserialize(d)?;

        BASE64_URL_SAFE_NO_PAD
            .decode(base64.trim_end_matches('='))
            .map_err(serde::de::Error::custom)
    }
}
