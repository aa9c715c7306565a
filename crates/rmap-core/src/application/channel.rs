//! Canonical acquisition channels.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Label used for applications whose channel is empty.
pub const UNKNOWN_CHANNEL: &str = "Unknown";

/// Where the lead for an application came from.
///
/// This is the closed vocabulary offered to the UI. The persisted `channel`
/// field stays a free string, so records written with older spellings still
/// load; [`Channel::canonicalize`] maps those onto this list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Channel {
    #[strum(serialize = "LinkedIn")]
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    #[strum(serialize = "Company Website")]
    #[serde(rename = "Company Website")]
    CompanyWebsite,
    // "Refferal" was written by earlier versions of the form.
    #[strum(to_string = "Referral", serialize = "Refferal")]
    #[serde(rename = "Referral", alias = "Refferal")]
    Referral,
    #[strum(serialize = "Glassdoor")]
    #[serde(rename = "Glassdoor")]
    Glassdoor,
    #[strum(serialize = "Job Board")]
    #[serde(rename = "Job Board")]
    JobBoard,
    #[strum(serialize = "Networking")]
    #[serde(rename = "Networking")]
    Networking,
    #[strum(serialize = "Other")]
    #[serde(rename = "Other")]
    Other,
}

impl Channel {
    /// All canonical channels in display order.
    pub fn all() -> Vec<Channel> {
        Channel::iter().collect()
    }

    /// Canonical label, e.g. `"Company Website"`.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::LinkedIn => "LinkedIn",
            Channel::CompanyWebsite => "Company Website",
            Channel::Referral => "Referral",
            Channel::Glassdoor => "Glassdoor",
            Channel::JobBoard => "Job Board",
            Channel::Networking => "Networking",
            Channel::Other => "Other",
        }
    }

    /// Parses a stored channel string, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Channel> {
        raw.trim().parse().ok()
    }

    /// Maps known spellings onto the canonical label and leaves anything
    /// else untouched.
    pub fn canonicalize(raw: &str) -> String {
        match Channel::parse(raw) {
            Some(channel) => channel.label().to_string(),
            None => raw.to_string(),
        }
    }
}

/// The channel key used when grouping: the raw value, or
/// [`UNKNOWN_CHANNEL`] when it is blank.
pub fn channel_or_unknown(raw: &str) -> &str {
    if raw.trim().is_empty() {
        UNKNOWN_CHANNEL
    } else {
        raw
    }
}
