/// DOM hooks and page-level timing used by the web frontend.
///
/// The markup in `index.html` carries these ids and data attributes; the Rust
/// side only looks them up and never creates page sections itself.
// Element ids
pub const FIELD_CONTAINER_ID: &str = "particle-field";
pub const EMBED_FRAME_ID: &str = "embed-frame";
pub const EMBED_LOADING_ID: &str = "embed-loading";
pub const EMBED_FALLBACK_ID: &str = "embed-fallback";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_PROFILE_ID: &str = "contact-profile";

// Selectors
pub const SECTION_SELECTOR: &str = "[data-reveal-section]";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const FLOAT_SELECTOR: &str = "[data-float]";
pub const SCROLL_LINKED_SELECTOR: &str = "[data-scroll-linked]";
pub const SCROLL_TARGET_SELECTOR: &str = "[data-scroll-target]";

// Attributes
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
pub const ATTR_REVEAL_ON_MOUNT: &str = "data-reveal-on-mount";
pub const ATTR_FLOAT: &str = "data-float";
pub const ATTR_SCROLL_LINKED: &str = "data-scroll-linked";
pub const ATTR_SCROLL_TARGET: &str = "data-scroll-target";

pub const HIDDEN_CLASS: &str = "hidden";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Particle styling
pub const FIELD_ROOT_CLASS: &str = "field-root";
pub const NODE_CLASS: &str = "field-node";
pub const CONNECTION_CLASS: &str = "field-connection";
pub const SATELLITE_CLASS: &str = "field-satellite";
pub const LABEL_CLASS: &str = "field-label";
pub const CONNECTION_STROKE: &str = "rgba(255, 193, 7, 0.2)";
