//! ARPANSA UV feed parser.
//!
//! The feed is a single XML document listing the latest observation for
//! every monitoring station:
//!   https://uvdata.arpansa.gov.au/xml/uvvalues.xml
//!
//! ```xml
//! <stations>
//!   <location id="Newcastle">
//!     <name>new</name>
//!     <index>0.0</index>
//!     <time>6:07 PM</time>
//!     <date>6/03/2024</date>
//!     <fulldate>Wednesday, 6 March 2024</fulldate>
//!     <utcdatetime>2024/03/06 08:07</utcdatetime>
//!     <status>ok</status>
//!   </location>
//! </stations>
//! ```
//!
//! Parsing here is purely structural. Every field is kept as text, with its
//! surrounding whitespace, and interpreted later by `normalize`. Elements
//! other than `<location>` under the root are skipped.

use serde::Deserialize;
use xml::reader::{EventReader, ParserConfig, XmlEvent};

use crate::model::FeedError;

pub const FEED_URL: &str = "https://uvdata.arpansa.gov.au/xml/uvvalues.xml";

/// Name of the document element every valid feed starts with.
const ROOT_ELEMENT: &str = "stations";

// ---------------------------------------------------------------------------
// Wire structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct StationsDocument {
    #[serde(rename = "location", default)]
    locations: Vec<RawLocation>,
}

/// One `<location>` element, as text.
///
/// Note the provider's naming: the `id` attribute holds the display name
/// ("Sydney") and the `name` element holds the short code ("syd").
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawLocation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub fulldate: String,
    #[serde(default)]
    pub utcdatetime: String,
    #[serde(default)]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a feed document into its `<location>` records, in feed order.
///
/// # Errors
/// - `FeedError::MalformedFeed`: the body is not well-formed XML, has no
///   root element, or its root is not `<stations>`.
pub fn parse_feed(body: &[u8]) -> Result<Vec<RawLocation>, FeedError> {
    let root = root_element_name(body)?;
    if root != ROOT_ELEMENT {
        return Err(FeedError::MalformedFeed(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT, root
        )));
    }

    let mut deserializer = serde_xml_rs::Deserializer::new(EventReader::new_with_config(
        body,
        parser_config(),
    ))
    .non_contiguous_seq_elements(true);
    let document = StationsDocument::deserialize(&mut deserializer)
        .map_err(|e| FeedError::MalformedFeed(e.to_string()))?;

    tracing::debug!(locations = document.locations.len(), "parsed UV feed");
    Ok(document.locations)
}

/// Keeps text content untouched; whitespace-only runs between elements are
/// still reported as whitespace and skipped by the deserializer.
fn parser_config() -> ParserConfig {
    ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(false)
        .cdata_to_characters(true)
        .ignore_comments(true)
        .coalesce_characters(true)
}

fn root_element_name(body: &[u8]) -> Result<String, FeedError> {
    for event in EventReader::new(body) {
        match event {
            Ok(XmlEvent::StartElement { name, .. }) => return Ok(name.local_name),
            Ok(_) => continue,
            Err(e) => return Err(FeedError::MalformedFeed(e.to_string())),
        }
    }
    Err(FeedError::MalformedFeed("document has no root element".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
