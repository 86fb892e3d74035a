//! Full-screen overlay panels shown over the base page.

/// Which overlay is open. The page state is `Option<Overlay>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    About,
    Services,
    Privacy,
}

/// Maximum content width of an overlay panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWidth {
    Wide,
    Narrow,
}

impl PanelWidth {
    pub fn class(self) -> &'static str {
        match self {
            Self::Wide => "overlay-panel wide",
            Self::Narrow => "overlay-panel narrow",
        }
    }
}

/// Static presentation attributes of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Heading shown at the top of the panel
    pub title: &'static str,
    /// Footer button caption that opens the panel
    pub nav_label: &'static str,
    pub width: PanelWidth,
}

impl Overlay {
    /// Footer order.
    pub const ALL: [Overlay; 3] = [Overlay::About, Overlay::Services, Overlay::Privacy];

    pub fn layout(self) -> OverlayLayout {
        match self {
            Self::About => OverlayLayout {
                title: "about",
                nav_label: "ABOUT",
                width: PanelWidth::Wide,
            },
            Self::Services => OverlayLayout {
                title: "services",
                nav_label: "SERVICES",
                width: PanelWidth::Wide,
            },
            Self::Privacy => OverlayLayout {
                title: "privacy policy",
                nav_label: "PRIVACY POLICY",
                width: PanelWidth::Narrow,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_cover_every_overlay() {
        let titles: Vec<_> = Overlay::ALL.iter().map(|o| o.layout().title).collect();
        assert_eq!(titles, ["about", "services", "privacy policy"]);
    }

    #[test]
    fn nav_labels_are_upper_case_titles() {
        for overlay in Overlay::ALL {
            let layout = overlay.layout();
            assert_eq!(layout.nav_label, layout.title.to_uppercase());
        }
    }

    #[test]
    fn only_privacy_is_narrow() {
        assert_eq!(Overlay::About.layout().width, PanelWidth::Wide);
        assert_eq!(Overlay::Services.layout().width, PanelWidth::Wide);
        assert_eq!(Overlay::Privacy.layout().width, PanelWidth::Narrow);
        assert!(PanelWidth::Narrow.class().ends_with("narrow"));
    }
}
