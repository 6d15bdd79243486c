use crate::model;
use serde::Serialize;

///
/// Body of push subscription register/unregister requests.
/// Backend stores subscription as an opaque JSON string.
///
#[derive(Debug, Serialize)]
pub struct PushSubscription {
    pub subscription: String,
}

impl TryFrom<&model::PushSubscription> for PushSubscription {
    type Error = serde_json::Error;

    fn try_from(value: &model::PushSubscription) -> Result<Self, Self::Error> {
        let subscription = serde_json::to_string(value)?;

        Ok(Self { subscription })
    }
}
