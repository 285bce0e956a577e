use crate::anchor::AnchorId;

pub const DEFAULT_SETTLE_DELAY_MS: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupPlan {
    /// Scroll to the fragment target once layout has had `delay_ms` to settle.
    ScrollToFragment { anchor: AnchorId, delay_ms: u32 },
    /// No usable fragment: show the first slide right away.
    RevealFirst,
}

/// Decides what to do with the URL fragment present at page load.
///
/// `exists` reports whether the document has an element with the id.
pub fn plan_startup<F>(fragment: &str, delay_ms: u32, exists: F) -> StartupPlan
where
    F: FnOnce(&AnchorId) -> bool,
{
    match AnchorId::from_fragment(fragment) {
        Ok(anchor) if exists(&anchor) => StartupPlan::ScrollToFragment { anchor, delay_ms },
        _ => StartupPlan::RevealFirst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_reveals_first() {
        assert_eq!(plan_startup("", 50, |_| true), StartupPlan::RevealFirst);
        assert_eq!(plan_startup("#", 50, |_| true), StartupPlan::RevealFirst);
    }

    #[test]
    fn missing_target_reveals_first() {
        assert_eq!(plan_startup("#nope", 50, |_| false), StartupPlan::RevealFirst);
    }

    #[test]
    fn existing_target_is_scheduled() {
        let plan = plan_startup("#s1", 75, |anchor| anchor.as_str() == "s1");
        assert_eq!(
            plan,
            StartupPlan::ScrollToFragment {
                anchor: AnchorId::parse("s1").unwrap(),
                delay_ms: 75,
            }
        );
    }
}
