use crate::model::{self, NotificationType};
use serde::Deserialize;
use time::OffsetDateTime;

///
/// Notification as returned by the backend.
///
/// Backend reports read state either as `read_at` timestamp
/// or as `is_read` flag. Both are accepted.
///
#[derive(Debug, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    #[serde(default, alias = "relatedId")]
    pub related_id: Option<i64>,
    #[serde(alias = "createdAt", with = "de_timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(default, alias = "readAt", with = "de_timestamp::option")]
    pub read_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub is_read: Option<bool>,
}

impl From<Notification> for model::Notification {
    fn from(value: Notification) -> Self {
        let read_at = value
            .read_at
            .or_else(|| value.is_read.unwrap_or(false).then_some(value.created_at));

        Self {
            id: value.id,
            notification_type: NotificationType::from_wire(&value.notification_type),
            title: value.title,
            message: value.message,
            related_id: value.related_id,
            created_at: value.created_at,
            read_at,
        }
    }
}

mod de_timestamp {
    //!
    //! Backend sends RFC 3339 timestamps, but naive ones
    //! (without offset) show up as well. Naive timestamps are UTC.
    //!

    use serde::{Deserialize, Deserializer};
    use time::{
        format_description::well_known::{Iso8601, Rfc3339},
        OffsetDateTime, PrimitiveDateTime,
    };

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<OffsetDateTime, D::Error> {
        let string = String::deserialize(d)?;

        parse(&string).map_err(serde::de::Error::custom)
    }

    pub fn parse(string: &str) -> Result<OffsetDateTime, time::error::Parse> {
        match OffsetDateTime::parse(string, &Rfc3339) {
            Ok(datetime) => Ok(datetime),
            Err(_) => {
                PrimitiveDateTime::parse(string, &Iso8601::DEFAULT).map(|dt| dt.assume_utc())
            }
        }
    }

    pub mod option {
        use serde::{Deserialize, Deserializer};
        use time::OffsetDateTime;

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<OffsetDateTime>, D::Error> {
            let string = Option::<String>::deserialize(d)?;

            string
                .map(|string| super::parse(&string).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
