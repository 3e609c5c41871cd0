/// Host surface for in-page navigation.
pub trait ScrollHost {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
    fn smooth_scroll_to(&self, section: &Self::Section);
}

/// Smooth-scroll to the section with `id`. A missing section is a no-op and
/// reports `false`.
pub fn scroll_to_section<H: ScrollHost>(host: &H, id: &str) -> bool {
    let id = id.trim().trim_start_matches('#');
    if id.is_empty() {
        return false;
    }
    match host.find_section(id) {
        Some(section) => {
            host.smooth_scroll_to(&section);
            true
        }
        None => false,
    }
}
