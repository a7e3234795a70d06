//! Render-ready description of the paste view.
//!
//! [`Screen::from_state`] is the whole rendering contract: the GUI only draws
//! what a `Screen` says and offers exactly the actions it lists.

use crate::constants::{
    CONTENT_TITLE, ERROR_TITLE, TOGGLE_LABEL_WHEN_DARK, TOGGLE_LABEL_WHEN_LIGHT,
};
use crate::fetch::FetchState;
use crate::time_fmt::{format_local, format_timestamp};
use chrono::TimeZone;
use std::fmt;

/// User intents a screen can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Ask the shell to flip dark mode.
    ToggleDarkMode,
    /// Navigate back to the home route.
    GoHome,
    /// Copy the loaded content to the clipboard.
    Copy,
}

const LOADING_ACTIONS: &[ViewAction] = &[ViewAction::ToggleDarkMode];
const FAILURE_ACTIONS: &[ViewAction] = &[ViewAction::GoHome, ViewAction::ToggleDarkMode];
const CONTENT_ACTIONS: &[ViewAction] = &[
    ViewAction::Copy,
    ViewAction::GoHome,
    ViewAction::ToggleDarkMode,
];

/// One of the three mutually exclusive views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    Failure {
        title: &'static str,
        message: &'a str,
    },
    Content {
        title: &'static str,
        created_label: String,
        content: &'a str,
    },
}

impl<'a> Screen<'a> {
    /// Describe `state` with timestamps in the local timezone.
    pub fn from_state(state: &'a FetchState) -> Self {
        Self::build(state, format_local)
    }

    /// Describe `state` with timestamps rendered in `tz`.
    pub fn from_state_in<Tz>(state: &'a FetchState, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self::build(state, |raw| format_timestamp(raw, tz))
    }

    fn build(state: &'a FetchState, format: impl FnOnce(&str) -> String) -> Self {
        match state {
            FetchState::Loading => Self::Loading,
            FetchState::Failure(message) => Self::Failure {
                title: ERROR_TITLE,
                message: message.as_str(),
            },
            FetchState::Success(paste) => Self::Content {
                title: CONTENT_TITLE,
                created_label: format!("Created: {}", format(&paste.created_at)),
                content: paste.content.as_str(),
            },
        }
    }

    /// Actions this screen offers.
    pub fn actions(&self) -> &'static [ViewAction] {
        match self {
            Self::Loading => LOADING_ACTIONS,
            Self::Failure { .. } => FAILURE_ACTIONS,
            Self::Content { .. } => CONTENT_ACTIONS,
        }
    }

    pub fn offers(&self, action: ViewAction) -> bool {
        self.actions().contains(&action)
    }
}

/// Label of the dark-mode toggle; it names the mode a click switches to.
pub fn toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        TOGGLE_LABEL_WHEN_DARK
    } else {
        TOGGLE_LABEL_WHEN_LIGHT
    }
}
