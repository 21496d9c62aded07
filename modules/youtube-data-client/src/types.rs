use serde::Deserialize;

/// Response of `GET /youtube/v3/channels`. `items` is omitted entirely when
/// nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<Channel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(rename = "customUrl")]
    pub custom_url: Option<String>,
}

/// The API encodes counters as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
}

/// How a channel is addressed in `channels.list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLookup<'a> {
    /// `id=UC...`
    Id(&'a str),
    /// `forHandle=@name` (the leading "@" is optional for the API)
    Handle(&'a str),
}

impl<'a> ChannelLookup<'a> {
    /// Channel ids and uploads-playlist ids start with "UC" / "UU";
    /// anything else is treated as a handle.
    pub fn from_identifier(identifier: &'a str) -> Self {
        if identifier.starts_with("UC") || identifier.starts_with("UU") {
            ChannelLookup::Id(identifier)
        } else {
            ChannelLookup::Handle(identifier)
        }
    }

    pub(crate) fn query_pair(&self) -> (&'static str, &'a str) {
        match *self {
            ChannelLookup::Id(id) => ("id", id),
            ChannelLookup::Handle(handle) => ("forHandle", handle),
        }
    }
}
