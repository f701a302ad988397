//! Site header content and its disclosure state.
//!
//! The header has two toggles: the mobile menu dialog and the "Stays"
//! disclosure inside it. Pages are server-rendered, so the state travels in
//! the query string and every control links to the transitioned state.

use serde::{Deserialize, Serialize};

/// A two-state disclosure flag.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

impl Toggle {
    pub fn is_open(self) -> bool {
        self == Toggle::Open
    }

    pub fn flipped(self) -> Self {
        match self {
            Toggle::Closed => Toggle::Open,
            Toggle::Open => Toggle::Closed,
        }
    }
}

/// User interactions that drive the header toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderEvent {
    OpenMobileMenu,
    CloseMobileMenu,
    ToggleStays,
}

/// Open/closed state of both header toggles.
///
/// The "Stays" disclosure sits inside the mobile menu dialog panel, which is
/// discarded when the dialog closes, so the disclosure only lives while the
/// menu is open.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderState {
    #[serde(rename = "menu")]
    pub mobile_menu: Toggle,
    #[serde(rename = "stays")]
    pub stays_panel: Toggle,
}

impl HeaderState {
    /// Applies a single interaction and returns the next state.
    ///
    /// The "Stays" disclosure is part of the mobile menu panel: it cannot be
    /// toggled while the menu is closed, and closing the menu collapses it.
    #[must_use]
    pub fn apply(self, event: HeaderEvent) -> Self {
        match event {
            HeaderEvent::OpenMobileMenu => Self {
                mobile_menu: Toggle::Open,
                ..self
            },
            HeaderEvent::CloseMobileMenu => Self::default(),
            HeaderEvent::ToggleStays if self.mobile_menu.is_open() => Self {
                stays_panel: self.stays_panel.flipped(),
                ..self
            },
            HeaderEvent::ToggleStays => self,
        }
    }

    /// Query string encoding this state, without the leading `?`.
    pub fn to_query(self) -> String {
        // Two enum fields always encode.
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

/// Entry of the header menus.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const BRAND_NAME: &str = "TakeFlight.com";
pub const BRAND_LOGO: &str = "https://www.cdnlogo.com/logos/f/32/flight.svg";

/// Products listed under "Stays".
pub const PRODUCTS: &[MenuItem] = &[
    MenuItem {
        name: "Book a flight",
        description: Some("Speak Directly to your customers"),
        href: "#",
        icon: "paper-airplane",
    },
    MenuItem {
        name: "Book a stay",
        description: Some("Get a better understanding about you traffic"),
        href: "#",
        icon: "home",
    },
    MenuItem {
        name: "Contact support Team",
        description: Some("Customers data will be Safe and secure"),
        href: "#",
        icon: "chat-bubble-left",
    },
];

pub const CALLS_TO_ACTION: &[MenuItem] = &[
    MenuItem {
        name: "See Demo Booking",
        description: None,
        href: "#",
        icon: "play-circle",
    },
    MenuItem {
        name: "Contact Support",
        description: None,
        href: "#",
        icon: "phone",
    },
];

pub const NAV_LINKS: &[MenuItem] = &[
    MenuItem {
        name: "Flights",
        description: None,
        href: "#",
        icon: "",
    },
    MenuItem {
        name: "Car Rentals",
        description: None,
        href: "#",
        icon: "",
    },
    MenuItem {
        name: "Attraction",
        description: None,
        href: "#",
        icon: "",
    },
    MenuItem {
        name: "Flight + Hotel",
        description: None,
        href: "#",
        icon: "",
    },
];

pub const LOGIN_HREF: &str = "#";
