use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VapidPublicKey {
    #[serde(default, rename = "publicKey", alias = "public_key")]
    pub public_key: Option<String>,
}
