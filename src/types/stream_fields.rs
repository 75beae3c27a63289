//! Closed sets of field and expansion names accepted by the sampled stream endpoint.
//!
//! Each enum maps to the exact string the endpoint expects in its query parameters,
//! so an unknown field can never be requested.

use std::fmt;

/// Values for the `expansions` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expansion {
    PollIds,
    MediaKeys,
    AuthorId,
    Username,
    /// Expands `data.geo.place_id` into a full place object under `includes.places`.
    PlaceId,
    InReplyToUserId,
    ReferencedTweetId,
    ReferencedTweetAuthorId,
}

impl Expansion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expansion::PollIds => "attachments.poll_ids",
            Expansion::MediaKeys => "attachments.media_keys",
            Expansion::AuthorId => "author_id",
            Expansion::Username => "entities.mentions.username",
            Expansion::PlaceId => "geo.place_id",
            Expansion::InReplyToUserId => "in_reply_to_user_id",
            Expansion::ReferencedTweetId => "referenced_tweets.id",
            Expansion::ReferencedTweetAuthorId => "referenced_tweets.id.author_id",
        }
    }
}

/// Values for the `place.fields` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceField {
    ContainedWithin,
    Country,
    CountryCode,
    FullName,
    Geo,
    Id,
    Name,
    PlaceType,
}

impl PlaceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceField::ContainedWithin => "contained_within",
            PlaceField::Country => "country",
            PlaceField::CountryCode => "country_code",
            PlaceField::FullName => "full_name",
            PlaceField::Geo => "geo",
            PlaceField::Id => "id",
            PlaceField::Name => "name",
            PlaceField::PlaceType => "place_type",
        }
    }
}

/// Values for the `tweet.fields` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweetField {
    Attachments,
    AuthorId,
    Geo,
}

impl TweetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TweetField::Attachments => "attachments",
            TweetField::AuthorId => "author_id",
            TweetField::Geo => "geo",
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlaceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TweetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins a list of field names into the comma separated form used in query parameters.
pub(crate) fn join_fields<T: fmt::Display>(fields: &[T]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_id_expansion_wire_name() {
        assert_eq!(Expansion::PlaceId.to_string(), "geo.place_id");
        assert_eq!(
            Expansion::ReferencedTweetAuthorId.as_str(),
            "referenced_tweets.id.author_id"
        );
    }

    #[test]
    fn test_join_fields_uses_commas_in_order() {
        let joined = join_fields(&[PlaceField::Geo, PlaceField::FullName, PlaceField::PlaceType]);
        assert_eq!(joined, "geo,full_name,place_type");
    }

    #[test]
    fn test_join_fields_empty() {
        let joined = join_fields::<TweetField>(&[]);
        assert!(joined.is_empty());
    }
}
