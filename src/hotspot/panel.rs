use super::registry::Hotspot;

/// Which hotspot's descriptive panel is open, if any.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    current: Option<Hotspot>,
}

impl InfoPanel {
    /// Show `hotspot`. Returns `false` if it was already showing.
    pub fn open(&mut self, hotspot: &Hotspot) -> bool {
        if self.current.as_ref().is_some_and(|h| h.id == hotspot.id) {
            return false;
        }
        self.current = Some(hotspot.clone());
        true
    }

    /// Hide the panel. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// The hotspot being shown.
    pub fn current(&self) -> Option<&Hotspot> {
        self.current.as_ref()
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspot::HotspotPayload;

    fn hotspot(id: &str) -> Hotspot {
        Hotspot::new(
            id,
            None,
            HotspotPayload {
                title: id.to_uppercase(),
                text: String::new(),
                image: None,
            },
        )
    }

    #[test]
    fn open_switch_close() {
        let mut panel = InfoPanel::default();
        assert!(!panel.close());
        assert!(panel.open(&hotspot("church")));
        assert!(!panel.open(&hotspot("church")));
        assert!(panel.open(&hotspot("bell-tower")));
        assert_eq!(panel.current().map(|h| h.id.as_str()), Some("bell-tower"));
        assert!(panel.close());
        assert!(!panel.is_open());
    }
}
