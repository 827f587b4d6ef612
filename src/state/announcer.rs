//! Screen-reader announcements through transient live-region nodes

use super::document::{Document, ElementId};

pub const SR_ONLY_CLASS: &str = "sr-only";

/// A node inserted for one announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub seq: u64,
    pub node: ElementId,
}

/// Creates one assertive live-region node per message
#[derive(Debug, Default)]
pub struct LiveAnnouncer {
    next_seq: u64,
}

impl LiveAnnouncer {
    pub fn node_id(seq: u64) -> ElementId {
        ElementId::new(format!("announcement-{seq}"))
    }

    /// Insert a visually hidden assertive node carrying `message` under `root`
    pub fn announce<D: Document>(
        &mut self,
        doc: &mut D,
        root: &ElementId,
        message: &str,
    ) -> Announcement {
        self.next_seq += 1;
        let seq = self.next_seq;
        let node = Self::node_id(seq);

        doc.insert_element(root, &node);
        doc.set_attribute(&node, "aria-live", "assertive");
        doc.set_attribute(&node, "aria-atomic", "true");
        doc.add_class(&node, SR_ONLY_CLASS);
        doc.set_text(&node, message);

        tracing::debug!("Announced #{seq}: {message}");
        Announcement { seq, node }
    }

    /// Remove the node of announcement `seq`
    pub fn retire<D: Document>(&self, doc: &mut D, seq: u64) {
        let node = Self::node_id(seq);
        if doc.contains(&node) {
            doc.remove_element(&node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormBindings, Page};

    fn page() -> (Page, ElementId) {
        let bindings = FormBindings::default();
        (Page::from_bindings(&bindings), bindings.live_root)
    }

    #[test]
    fn test_announce_creates_assertive_node() {
        let (mut page, root) = page();
        let mut announcer = LiveAnnouncer::default();
        let announcement = announcer.announce(&mut page, &root, "Hello");

        assert_eq!(announcement.seq, 1);
        assert!(page.children(&root).contains(&announcement.node));
        assert_eq!(
            page.attribute(&announcement.node, "aria-live").as_deref(),
            Some("assertive")
        );
        assert_eq!(
            page.attribute(&announcement.node, "aria-atomic").as_deref(),
            Some("true")
        );
        assert!(page.has_class(&announcement.node, SR_ONLY_CLASS));
        assert_eq!(page.text(&announcement.node), "Hello");
    }

    #[test]
    fn test_each_announcement_gets_its_own_node() {
        let (mut page, root) = page();
        let mut announcer = LiveAnnouncer::default();
        let first = announcer.announce(&mut page, &root, "one");
        let second = announcer.announce(&mut page, &root, "two");
        assert_ne!(first.node, second.node);
        assert_eq!(page.elements_with_class(SR_ONLY_CLASS).len(), 2);
    }

    #[test]
    fn test_retire_removes_only_that_node() {
        let (mut page, root) = page();
        let mut announcer = LiveAnnouncer::default();
        let first = announcer.announce(&mut page, &root, "one");
        let second = announcer.announce(&mut page, &root, "two");

        announcer.retire(&mut page, first.seq);
        assert!(!page.contains(&first.node));
        assert!(page.contains(&second.node));

        // Retiring again is harmless
        announcer.retire(&mut page, first.seq);
    }
}
