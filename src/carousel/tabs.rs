//! The content-display collaborator.
//!
//! When the centered real item changes, the controller hands its tab id to a
//! [`TabDisplay`]. The display marks the matching trigger(s) active, reveals
//! the matching content block, and hides the rest. The controller itself
//! renders nothing.

/// Receives the tab id of the newly centered real item.
pub trait TabDisplay {
    fn show_tab(&mut self, tab: &str);
}

impl<F: FnMut(&str)> TabDisplay for F {
    fn show_tab(&mut self, tab: &str) {
        self(tab)
    }
}

/// One trigger control (a carousel button), real or clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub tab: String,
    pub active: bool,
}

/// One content block, shown for the tab whose id it carries as `content-<tab>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: String,
    pub hidden: bool,
}

/// In-memory tab triggers and content blocks.
///
/// Clones carry the same tab id as the item they duplicate, so activating a
/// tab activates every trigger for it.
#[derive(Debug, Clone, Default)]
pub struct TabPanels {
    triggers: Vec<Trigger>,
    panels: Vec<Panel>,
}

impl TabPanels {
    /// Build from trigger tab ids (in strip order) and content block ids.
    /// Everything starts inactive and hidden.
    pub fn new<T, P>(triggers: T, panels: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|tab| Trigger {
                    tab: tab.into(),
                    active: false,
                })
                .collect(),
            panels: panels
                .into_iter()
                .map(|id| Panel {
                    id: id.into(),
                    hidden: true,
                })
                .collect(),
        }
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Ids of the content blocks currently visible.
    pub fn visible(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| !p.hidden)
            .map(|p| p.id.as_str())
            .collect()
    }

    /// Positions of the active triggers.
    pub fn active_triggers(&self) -> Vec<usize> {
        self.triggers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.active)
            .map(|(i, _)| i)
            .collect()
    }
}

impl TabDisplay for TabPanels {
    fn show_tab(&mut self, tab: &str) {
        for trigger in &mut self.triggers {
            trigger.active = trigger.tab == tab;
        }
        let target = format!("content-{tab}");
        for panel in &mut self.panels {
            panel.hidden = panel.id != target;
        }
    }
}
