//! Representative ARPANSA feed payloads for tests.

/// Three stations: one healthy, one with an unparseable index and one
/// reporting a fault.
pub const THREE_STATIONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stations>
  <location id="Sydney">
    <name>syd</name>
    <index>5.5</index>
    <time>7:07 PM</time>
    <date>6/03/2024</date>
    <fulldate>Wednesday, 6 March 2024</fulldate>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>ok</status>
  </location>
  <location id="Perth">
    <name>per</name>
    <index>bad</index>
    <time>4:07 PM</time>
    <date>6/03/2024</date>
    <fulldate>Wednesday, 6 March 2024</fulldate>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>ok</status>
  </location>
  <location id="Kingston">
    <name>kin</name>
    <index>2.0</index>
    <time>7:07 PM</time>
    <date>6/03/2024</date>
    <fulldate>Wednesday, 6 March 2024</fulldate>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>fault</status>
  </location>
</stations>
"#;

pub const SINGLE_NEWCASTLE: &str = r#"<stations>
  <location id="Newcastle">
    <name>new</name>
    <index>0.0</index>
    <time>6:07 PM</time>
    <date>6/03/2024</date>
    <fulldate>Wednesday, 6 March 2024</fulldate>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>ok</status>
  </location>
</stations>"#;

/// A location with only its id, name and status present.
pub const SPARSE_LOCATION: &str = r#"<stations>
  <location id="Davis">
    <name>dav</name>
    <status>offline</status>
  </location>
</stations>"#;

/// Locations separated by elements the parser does not know about.
pub const INTERLEAVED_ELEMENTS: &str = r#"<stations>
  <location id="Sydney">
    <name>syd</name>
    <index>5.5</index>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>ok</status>
  </location>
  <note>Readings are provisional</note>
  <location id="Perth">
    <name>per</name>
    <index>3.1</index>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>ok</status>
  </location>
  <!-- maintenance window -->
  <updated>2024/03/06 08:10</updated>
  <location id="Kingston">
    <name>kin</name>
    <index>2.0</index>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status>fault</status>
  </location>
</stations>"#;

/// Text content with leading and trailing spaces.
pub const PADDED_STATUS: &str = r#"<stations>
  <location id="Sydney">
    <name>syd</name>
    <index> 5.5</index>
    <utcdatetime>2024/03/06 08:07</utcdatetime>
    <status> ok </status>
  </location>
</stations>"#;

pub const EMPTY_STATIONS: &str = "<stations></stations>";

pub const WRONG_ROOT: &str = r#"<observations>
  <location id="Sydney"><name>syd</name></location>
</observations>"#;

/// What a proxy or CDN error page looks like when served in place of the feed.
pub const HTML_ERROR_PAGE: &str = "<html><body><h1>502 Bad Gateway</h1>";
