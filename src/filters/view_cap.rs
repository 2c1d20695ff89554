use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Who is browsing; decides how many listings they may see.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    #[default]
    Guest,
    Member,
    Agent,
    Admin,
}

/// Viewing allowance for the current session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewCap {
    /// `None` means unlimited
    pub max_visible: Option<usize>,
    /// Listings already shown to this viewer
    pub already_consumed: usize,
}

/// Listings that may be shown, borrowed from the fetched page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedView<'a, T> {
    pub visible: &'a [T],
    pub at_cap: bool,
}

impl ViewCap {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn limited(max_visible: usize, already_consumed: usize) -> Self {
        Self {
            max_visible: Some(max_visible),
            already_consumed,
        }
    }

    /// Allowance for a viewer role; only guests are capped.
    pub fn for_role(role: ViewerRole, already_consumed: usize, config: &SearchConfig) -> Self {
        match role {
            ViewerRole::Guest => Self::limited(config.guest_view_limit, already_consumed),
            ViewerRole::Member | ViewerRole::Agent | ViewerRole::Admin => Self {
                max_visible: None,
                already_consumed,
            },
        }
    }

    /// How many more listings may still be shown.
    pub fn remaining(&self) -> Option<usize> {
        self.max_visible
            .map(|max| max.saturating_sub(self.already_consumed))
    }

    /// Truncates a fetched page to what the viewer may still see.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> CappedView<'a, T> {
        match self.max_visible {
            None => CappedView {
                visible: items,
                at_cap: false,
            },
            Some(max) => {
                let remaining = max.saturating_sub(self.already_consumed);
                CappedView {
                    visible: &items[..remaining.min(items.len())],
                    at_cap: self.already_consumed.saturating_add(items.len()) >= max,
                }
            }
        }
    }
}

/// Free-function form of [`ViewCap::apply`].
pub fn apply_view_cap<'a, T>(items: &'a [T], cap: &ViewCap) -> CappedView<'a, T> {
    cap.apply(items)
}
